use faultgeom::api::{GeomError, Polyline};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn polyline_from_py(points: Vec<(f64, f64)>) -> PyResult<Polyline> {
    let xy: Vec<[f64; 2]> = points.into_iter().map(|(x, y)| [x, y]).collect();
    Polyline::from_xy(&xy).map_err(map_geom_err)
}

pub fn polyline_to_py(line: &Polyline) -> Vec<(f64, f64)> {
    line.vertices().iter().map(|p| (p.x, p.y)).collect()
}
