//! Python bindings for the element tracker.
//!
//! # Quick Start
//!
//! ```python
//! import element_tracker as et
//!
//! tracker = et.ElementTracker()
//! tracker.generate("fire")
//! tracker.generate("earth")
//! tracker.get("earth").wane()
//! tracker.finish_round()
//! assert tracker.get("fire").status == "waning"
//! assert tracker.get("earth").status == "inert"
//!
//! try:
//!     tracker.consume("ice")
//! except et.CannotConsumeElementError as e:
//!     print(e)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_tracker;

pub use py_core::*;
pub use py_tracker::*;

/// element_tracker: elemental infusions for turn-based games.
#[pymodule]
fn element_tracker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyElement>()?;
    m.add_class::<PyElementTracker>()?;
    m.add_class::<PyTrackedElement>()?;

    m.add(
        "CannotConsumeElementError",
        m.py().get_type_bound::<CannotConsumeElementError>(),
    )?;

    Ok(())
}
