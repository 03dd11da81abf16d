//! Fault-trace bindings.

use crate::common::{map_geom_err, polyline_from_py, polyline_to_py};
use faultgeom::api::{self, BearingCfg, StrikeWeighting};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn weighting_from_str(name: &str) -> PyResult<StrikeWeighting> {
    match name {
        "per_segment" => Ok(StrikeWeighting::PerSegment),
        "by_length" => Ok(StrikeWeighting::ByLength),
        other => Err(PyValueError::new_err(format!(
            "unknown weighting {other:?} (expected \"per_segment\" or \"by_length\")"
        ))),
    }
}

#[pyfunction]
pub fn reverse_line(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let line = polyline_from_py(points)?;
    Ok(polyline_to_py(&api::reverse_line(&line)))
}

#[pyfunction]
#[pyo3(signature = (points, weighting = "per_segment"))]
pub fn calculate_strike(points: Vec<(f64, f64)>, weighting: &str) -> PyResult<f64> {
    let line = polyline_from_py(points)?;
    api::calculate_strike_with(&line, weighting_from_str(weighting)?, &BearingCfg::default())
        .map_err(map_geom_err)
}

#[pyfunction]
#[pyo3(signature = (points, weighting = "per_segment"))]
pub fn calculate_dip_direction(points: Vec<(f64, f64)>, weighting: &str) -> PyResult<f64> {
    let line = polyline_from_py(points)?;
    api::calculate_dip_direction_with(&line, weighting_from_str(weighting)?, &BearingCfg::default())
        .map_err(map_geom_err)
}

#[pyfunction]
pub fn orient_to_dip_direction(
    points: Vec<(f64, f64)>,
    expected_dip: f64,
) -> PyResult<Vec<(f64, f64)>> {
    let line = polyline_from_py(points)?;
    let oriented = api::orient_to_dip_direction(&line, expected_dip).map_err(map_geom_err)?;
    Ok(polyline_to_py(&oriented))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(reverse_line, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_strike, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_dip_direction, m)?)?;
    m.add_function(wrap_pyfunction!(orient_to_dip_direction, m)?)?;
    Ok(())
}
