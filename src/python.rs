//! Python bindings, enabled with the `python` feature.

use crate::core::{BoxError, SearchConfig, SearchError, SearchResult, SearchSpace, Sense};
use crate::optimization::callback::{LogProgress, NoopCallback, ProgressCallback};
use crate::optimization::problem::Objective;
use crate::optimization::solvers::{
    AdaptiveRandomSearch, IteratedLocalSearch, Optimizer, RandomHillClimbing, RandomSearch,
};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python callable used as the objective. Exceptions are carried as `PyErr`.
struct PyObjective<'a> {
    callable: &'a Py<PyAny>,
}

impl Objective for PyObjective<'_> {
    fn evaluate(&self, x: &[f64]) -> Result<f64, BoxError> {
        Python::with_gil(|py| {
            let value = self.callable.call1(py, (x.to_vec(),))?;
            value.extract::<f64>(py)
        })
        .map_err(Into::into)
    }
}

/// Verbose mode for the Python surface prints instead of logging.
struct PrintProgress(LogProgress);

impl ProgressCallback for PrintProgress {
    fn on_iteration(&mut self, iteration: u32, total: u32, _best_x: &[f64], best_score: f64) {
        if let Some(line) = self.0.report(iteration, total, best_score) {
            println!("{}", line);
        }
    }
}

fn to_py_err(err: SearchError) -> PyErr {
    match err {
        SearchError::Config(e) => PyValueError::new_err(e.to_string()),
        SearchError::Objective { source, .. } => match source.downcast::<PyErr>() {
            Ok(py_err) => *py_err,
            Err(other) => PyRuntimeError::new_err(other.to_string()),
        },
    }
}

fn build_space(bounds: Vec<(f64, f64)>, integer: Option<Vec<bool>>) -> PyResult<SearchSpace> {
    SearchSpace::new(&bounds, integer.as_deref()).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn build_config(
    iterations: u32,
    maximize: bool,
    seed: Option<u64>,
    return_history: bool,
    verbose: bool,
) -> SearchConfig {
    SearchConfig {
        iterations,
        sense: Sense::from_maximize(maximize),
        seed,
        return_history,
        verbose,
    }
}

fn result_to_dict<'py>(py: Python<'py>, result: SearchResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("best_x", result.best_x)?;
    dict.set_item("best_score", result.best_score)?;
    dict.set_item("evaluations", result.evaluations)?;
    dict.set_item("iterations", result.iterations)?;
    if let Some(history) = result.history {
        let pairs: Vec<(u32, f64)> = history.iter().map(|h| (h.iteration, h.best_score)).collect();
        dict.set_item("history", pairs)?;
    }
    Ok(dict)
}

fn run_optimizer<'py>(
    py: Python<'py>,
    optimizer: &dyn Optimizer,
    objective: &Py<PyAny>,
    space: &SearchSpace,
) -> PyResult<Bound<'py, PyDict>> {
    let objective = PyObjective {
        callable: objective,
    };
    let config = optimizer.config();
    let result = if config.verbose {
        let mut progress = PrintProgress(LogProgress::new(optimizer.name(), config.report_every()));
        optimizer.run_with_callback(&objective, space, &mut progress)
    } else {
        optimizer.run_with_callback(&objective, space, &mut NoopCallback)
    };
    result_to_dict(py, result.map_err(to_py_err)?)
}

#[pyfunction]
#[pyo3(signature = (objective, bounds, iterations=1000, integer=None, maximize=false, seed=None, return_history=false, verbose=false))]
#[allow(clippy::too_many_arguments)]
fn random_search<'py>(
    py: Python<'py>,
    objective: Py<PyAny>,
    bounds: Vec<(f64, f64)>,
    iterations: u32,
    integer: Option<Vec<bool>>,
    maximize: bool,
    seed: Option<u64>,
    return_history: bool,
    verbose: bool,
) -> PyResult<Bound<'py, PyDict>> {
    PyRandomSearch::new(
        objective,
        bounds,
        iterations,
        integer,
        maximize,
        seed,
        return_history,
        verbose,
    )?
    .run(py)
}

#[pyclass(name = "RandomSearch")]
struct PyRandomSearch {
    objective: Py<PyAny>,
    space: SearchSpace,
    optimizer: RandomSearch,
}

#[pymethods]
impl PyRandomSearch {
    #[new]
    #[pyo3(signature = (objective, bounds, iterations=1000, integer=None, maximize=false, seed=None, return_history=false, verbose=false))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        objective: Py<PyAny>,
        bounds: Vec<(f64, f64)>,
        iterations: u32,
        integer: Option<Vec<bool>>,
        maximize: bool,
        seed: Option<u64>,
        return_history: bool,
        verbose: bool,
    ) -> PyResult<Self> {
        let config = build_config(iterations, maximize, seed, return_history, verbose);
        Ok(Self {
            objective,
            space: build_space(bounds, integer)?,
            optimizer: RandomSearch::new(config),
        })
    }

    /// `RandomSearch.random_search(...)`, same arguments as the module function.
    #[staticmethod]
    #[pyo3(name = "random_search", signature = (objective, bounds, iterations=1000, integer=None, maximize=false, seed=None, return_history=false, verbose=false))]
    #[allow(clippy::too_many_arguments)]
    fn random_search_static<'py>(
        py: Python<'py>,
        objective: Py<PyAny>,
        bounds: Vec<(f64, f64)>,
        iterations: u32,
        integer: Option<Vec<bool>>,
        maximize: bool,
        seed: Option<u64>,
        return_history: bool,
        verbose: bool,
    ) -> PyResult<Bound<'py, PyDict>> {
        random_search(
            py,
            objective,
            bounds,
            iterations,
            integer,
            maximize,
            seed,
            return_history,
            verbose,
        )
    }

    fn run<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        run_optimizer(py, &self.optimizer, &self.objective, &self.space)
    }
}

#[pyclass(name = "RandomHillClimbing")]
struct PyRandomHillClimbing {
    objective: Py<PyAny>,
    space: SearchSpace,
    optimizer: RandomHillClimbing,
}

#[pymethods]
impl PyRandomHillClimbing {
    #[new]
    #[pyo3(signature = (objective, bounds, step_size=0.1, iterations=1000, maximize=false, seed=None, integer=None, return_history=true, verbose=false))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        objective: Py<PyAny>,
        bounds: Vec<(f64, f64)>,
        step_size: f64,
        iterations: u32,
        maximize: bool,
        seed: Option<u64>,
        integer: Option<Vec<bool>>,
        return_history: bool,
        verbose: bool,
    ) -> PyResult<Self> {
        let config = build_config(iterations, maximize, seed, return_history, verbose);
        Ok(Self {
            objective,
            space: build_space(bounds, integer)?,
            optimizer: RandomHillClimbing::new(config).with_step_size(step_size),
        })
    }

    fn run<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        run_optimizer(py, &self.optimizer, &self.objective, &self.space)
    }
}

#[pyclass(name = "AdaptiveRandomSearch")]
struct PyAdaptiveRandomSearch {
    objective: Py<PyAny>,
    space: SearchSpace,
    optimizer: AdaptiveRandomSearch,
}

#[pymethods]
impl PyAdaptiveRandomSearch {
    #[new]
    #[pyo3(signature = (objective, bounds, step_size=0.1, iterations=1000, maximize=false, seed=None, integer=None, return_history=true, verbose=false))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        objective: Py<PyAny>,
        bounds: Vec<(f64, f64)>,
        step_size: f64,
        iterations: u32,
        maximize: bool,
        seed: Option<u64>,
        integer: Option<Vec<bool>>,
        return_history: bool,
        verbose: bool,
    ) -> PyResult<Self> {
        let config = build_config(iterations, maximize, seed, return_history, verbose);
        Ok(Self {
            objective,
            space: build_space(bounds, integer)?,
            optimizer: AdaptiveRandomSearch::new(config).with_step_size(step_size),
        })
    }

    fn run<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        run_optimizer(py, &self.optimizer, &self.objective, &self.space)
    }
}

#[pyclass(name = "IteratedLocalSearch")]
struct PyIteratedLocalSearch {
    objective: Py<PyAny>,
    space: SearchSpace,
    optimizer: IteratedLocalSearch,
}

#[pymethods]
impl PyIteratedLocalSearch {
    #[new]
    #[pyo3(signature = (objective, bounds, step_size=0.1, iterations=1000, perturb_strength=0.5, maximize=false, seed=None, integer=None, return_history=true, verbose=false))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        objective: Py<PyAny>,
        bounds: Vec<(f64, f64)>,
        step_size: f64,
        iterations: u32,
        perturb_strength: f64,
        maximize: bool,
        seed: Option<u64>,
        integer: Option<Vec<bool>>,
        return_history: bool,
        verbose: bool,
    ) -> PyResult<Self> {
        let config = build_config(iterations, maximize, seed, return_history, verbose);
        Ok(Self {
            objective,
            space: build_space(bounds, integer)?,
            optimizer: IteratedLocalSearch::new(config)
                .with_step_size(step_size)
                .with_perturb_strength(perturb_strength),
        })
    }

    fn run<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        run_optimizer(py, &self.optimizer, &self.objective, &self.space)
    }
}

#[pymodule]
fn boxsearch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(random_search, m)?)?;

    m.add_class::<PyRandomSearch>()?;
    m.add_class::<PyRandomHillClimbing>()?;
    m.add_class::<PyAdaptiveRandomSearch>()?;
    m.add_class::<PyIteratedLocalSearch>()?;

    Ok(())
}
