//! PyO3 bindings for `faultgeom`.
//!
//! Notes
//! - Keep bindings thin and predictable: bearings are floats, traces are
//!   lists of `(x, y)` tuples in traversal order.
//! - `GeomError` surfaces as `ValueError`.

use pyo3::prelude::*;

mod bearing;
mod common;
mod trace;

#[pymodule]
fn faultgeom_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", faultgeom::VERSION)?;
    bearing::register(m)?;
    trace::register(m)?;
    Ok(())
}
