//! Scalar bearing bindings.

use faultgeom::api;
use pyo3::prelude::*;

#[pyfunction]
pub fn normalize_bearing(b: f64) -> f64 {
    api::normalize_bearing(b)
}

#[pyfunction]
pub fn smallest_difference(a: f64, b: f64) -> f64 {
    api::smallest_difference(a, b)
}

#[pyfunction]
#[pyo3(signature = (a, b, eps = None))]
pub fn bearing_leq(a: f64, b: f64, eps: Option<f64>) -> bool {
    match eps {
        Some(eps) => api::bearing_leq_eps(a, b, eps),
        None => api::bearing_leq(a, b),
    }
}

#[pyfunction]
#[pyo3(signature = (a, b, eps = None))]
pub fn bearing_geq(a: f64, b: f64, eps: Option<f64>) -> bool {
    match eps {
        Some(eps) => api::bearing_geq_eps(a, b, eps),
        None => api::bearing_geq(a, b),
    }
}

#[pyfunction]
pub fn reverse_bearing(b: f64) -> f64 {
    api::reverse_bearing(b)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_bearing, m)?)?;
    m.add_function(wrap_pyfunction!(smallest_difference, m)?)?;
    m.add_function(wrap_pyfunction!(bearing_leq, m)?)?;
    m.add_function(wrap_pyfunction!(bearing_geq, m)?)?;
    m.add_function(wrap_pyfunction!(reverse_bearing, m)?)?;
    Ok(())
}
