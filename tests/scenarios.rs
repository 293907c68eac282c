use boxsearch::{
    AdaptiveRandomSearch, ConfigError, Fallible, IteratedLocalSearch, Optimizer,
    RandomHillClimbing, RandomSearch, RecordingCallback, SearchConfig, SearchError, SearchSpace,
    StepParams, StrategyKind, build_optimizer,
};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn sphere_space() -> SearchSpace {
    SearchSpace::continuous(&[(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
}

fn all_strategies(config: SearchConfig) -> Vec<Box<dyn Optimizer>> {
    vec![
        Box::new(RandomSearch::new(config.clone())) as Box<dyn Optimizer>,
        Box::new(RandomHillClimbing::new(config.clone())),
        Box::new(AdaptiveRandomSearch::new(config.clone())),
        Box::new(IteratedLocalSearch::new(config).with_local_iterations(20)),
    ]
}

#[test]
fn random_search_improves_on_initial_draw() {
    let result = RandomSearch::new(SearchConfig::new(2000).with_seed(42).with_history(true))
        .run(&sphere, &sphere_space())
        .unwrap();
    let history = result.history.as_ref().unwrap();

    assert!(result.best_score >= 0.0);
    assert!(result.best_score < history[0].best_score);
    assert_eq!(result.evaluations, 2001);
}

#[test]
fn adaptive_beats_random_search_on_sphere() {
    let config = SearchConfig::new(2000).with_seed(42);
    let random = RandomSearch::new(config.clone())
        .run(&sphere, &sphere_space())
        .unwrap();
    let adaptive = AdaptiveRandomSearch::new(config)
        .with_step_size(0.1)
        .run(&sphere, &sphere_space())
        .unwrap();

    assert!(
        adaptive.best_score < random.best_score,
        "adaptive {} vs random {}",
        adaptive.best_score,
        random.best_score
    );
}

/// An IteratedLocalSearch asked to run with two integer flags over one bound
/// never gets that far: the space rejects the flags before any strategy exists.
#[test]
fn integer_flag_mismatch_rejected_before_any_strategy_runs() {
    let err = SearchSpace::new(&[(0.0, 1.0)], Some(&[true, true])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::IntegralityMismatch {
            expected: 1,
            got: 2
        }
    );

    let wrapped: SearchError = err.into();
    assert!(wrapped.is_config_error());
}

#[test]
fn oversized_bounds_are_rejected_before_sampling() {
    let err = SearchSpace::continuous(&[(-1e308, 1e308)]).unwrap_err();
    assert_eq!(err, ConfigError::NonFiniteSpan { index: 0 });

    let err = SearchSpace::new(&[(1e19, 2e19)], Some(&[true])).unwrap_err();
    assert!(matches!(err, ConfigError::IntegerRangeTooLarge { index: 0, .. }));
}

#[test]
fn wide_integer_range_samples_stay_inside() {
    let space = SearchSpace::new(&[(1e15, 2e15), (-3.0, 3.0)], Some(&[true, true])).unwrap();
    for optimizer in all_strategies(SearchConfig::new(50).with_seed(9)) {
        let result = optimizer.run(&|x: &[f64]| x[0] + x[1], &space).unwrap();
        assert!(space.contains(&result.best_x), "{}: {:?}", optimizer.name(), result.best_x);
    }
}

#[test]
fn empty_integer_range_is_rejected() {
    let err = SearchSpace::new(&[(0.1, 0.4)], Some(&[true])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::EmptyIntegerRange {
            index: 0,
            low: 0.1,
            high: 0.4
        }
    );
}

#[test]
fn zero_iterations_fail_before_evaluation() {
    let panicking = |_: &[f64]| -> f64 { panic!("objective must not be called") };
    for optimizer in all_strategies(SearchConfig::new(0)) {
        let err = optimizer.run(&panicking, &sphere_space()).unwrap_err();
        assert!(matches!(err, SearchError::Config(ConfigError::ZeroIterations)));
    }
}

#[test]
fn same_seed_gives_identical_results() {
    let config = SearchConfig::new(200).with_seed(1234).with_history(true);
    for optimizer in all_strategies(config) {
        let first = optimizer.run(&sphere, &sphere_space()).unwrap();
        let second = optimizer.run(&sphere, &sphere_space()).unwrap();
        assert_eq!(first, second, "{} is not reproducible", optimizer.name());
    }
}

#[test]
fn minimizing_f_matches_maximizing_negated_f() {
    let negated = |x: &[f64]| -sphere(x);
    let min_config = SearchConfig::new(150).with_seed(77);
    let max_config = min_config.clone().maximize();

    for (min_opt, max_opt) in all_strategies(min_config)
        .into_iter()
        .zip(all_strategies(max_config))
    {
        let min = min_opt.run(&sphere, &sphere_space()).unwrap();
        let max = max_opt.run(&negated, &sphere_space()).unwrap();
        assert_eq!(min.best_x, max.best_x, "{}", min_opt.name());
        assert_eq!(min.best_score, -max.best_score, "{}", min_opt.name());
    }
}

#[test]
fn objective_errors_propagate_without_partial_result() {
    let failing = Fallible(|x: &[f64]| {
        if x[0] > 0.0 {
            Err(std::io::Error::other("solver blew up"))
        } else {
            Ok(sphere(x))
        }
    });

    for optimizer in all_strategies(SearchConfig::new(500).with_seed(3)) {
        let err = optimizer.run(&failing, &sphere_space()).unwrap_err();
        assert!(err.is_objective_error(), "{}", optimizer.name());
        assert!(err.to_string().contains("solver blew up"));
    }
}

#[test]
fn callback_sees_every_outer_iteration() {
    for optimizer in all_strategies(SearchConfig::new(30).with_seed(5)) {
        let mut recorder = RecordingCallback::new();
        let result = optimizer
            .run_with_callback(&sphere, &sphere_space(), &mut recorder)
            .unwrap();

        let iterations: Vec<u32> = recorder.history().iter().map(|r| r.iteration).collect();
        assert_eq!(iterations, (1..=30).collect::<Vec<_>>());
        assert_eq!(recorder.history().last().unwrap().cost, result.best_score);
    }
}

#[test]
fn verbose_does_not_change_result() {
    let quiet = SearchConfig::new(100).with_seed(11);
    let loud = quiet.clone().with_verbose(true);
    for (a, b) in all_strategies(quiet).into_iter().zip(all_strategies(loud)) {
        assert_eq!(
            a.run(&sphere, &sphere_space()).unwrap(),
            b.run(&sphere, &sphere_space()).unwrap()
        );
    }
}

#[test]
fn strategy_dispatch_runs_each_kind() {
    for name in ["random", "rhc", "ars", "ils"] {
        let kind: StrategyKind = name.parse().unwrap();
        let optimizer = build_optimizer(kind, SearchConfig::new(10).with_seed(2), StepParams::default());
        let result = optimizer.run(&sphere, &sphere_space()).unwrap();
        assert_eq!(result.iterations, 10);
        assert!(sphere_space().contains(&result.best_x));
    }
}

#[test]
fn iterated_local_search_reaches_origin() {
    let result = IteratedLocalSearch::new(SearchConfig::new(30).with_seed(42))
        .run(&sphere, &sphere_space())
        .unwrap();
    assert!(result.best_score < 0.5, "best_score = {}", result.best_score);
    assert_eq!(result.evaluations, 31 * 101);
}
