//! Tracker bindings for Python.

use pyo3::prelude::*;

use crate::tracker::{ElementKey, ElementTracker};

/// Python wrapper for ElementTracker.
#[pyclass(name = "ElementTracker")]
#[derive(Clone, Debug, Default)]
pub struct PyElementTracker(pub ElementTracker);

#[pymethods]
impl PyElementTracker {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Get a live handle to an element, or None for an unknown key.
    ///
    /// Changes made through the handle apply to the tracker.
    fn get(slf: &Bound<'_, Self>, key: &str) -> Option<PyTrackedElement> {
        ElementKey::parse(key).map(|key| PyTrackedElement {
            tracker: slf.clone().unbind(),
            key,
        })
    }

    /// Raises KeyError for an unknown key.
    fn generate(&mut self, key: &str) -> PyResult<()> {
        Ok(self.0.generate(key)?)
    }

    /// Raises KeyError for an unknown key, CannotConsumeElementError if inert.
    fn consume(&mut self, key: &str) -> PyResult<()> {
        Ok(self.0.consume(key)?)
    }

    /// End the round: every element wanes one step.
    fn finish_round(&mut self) {
        self.0.finish_round();
    }

    /// Keys of strong or waning elements.
    fn active(&self) -> Vec<&'static str> {
        self.0.active().map(|key| key.as_str()).collect()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        let entries: Vec<_> = self
            .0
            .iter()
            .map(|(key, element)| format!("{}={}", key, element.status()))
            .collect();
        format!("ElementTracker({})", entries.join(", "))
    }
}

/// An element owned by a Python `ElementTracker`.
///
/// Holds the tracker and a key; every call reads or mutates the
/// tracker's own element.
#[pyclass(name = "TrackedElement")]
pub struct PyTrackedElement {
    tracker: Py<PyElementTracker>,
    key: ElementKey,
}

#[pymethods]
impl PyTrackedElement {
    #[getter]
    fn name(&self) -> &'static str {
        self.key.display_name()
    }

    #[getter]
    fn key(&self) -> &'static str {
        self.key.as_str()
    }

    /// Status text: "inert", "strong" or "waning".
    #[getter]
    fn status(&self, py: Python<'_>) -> &'static str {
        self.tracker.borrow(py).0.element(self.key).status().as_str()
    }

    fn generate(&self, py: Python<'_>) {
        self.tracker.borrow_mut(py).0.element_mut(self.key).generate();
    }

    fn wane(&self, py: Python<'_>) {
        self.tracker.borrow_mut(py).0.element_mut(self.key).wane();
    }

    /// Raises CannotConsumeElementError if the element is inert.
    fn consume(&self, py: Python<'_>) -> PyResult<()> {
        Ok(self.tracker.borrow_mut(py).0.element_mut(self.key).consume()?)
    }

    fn __repr__(&self, py: Python<'_>) -> String {
        format!("Element({}, {})", self.name(), self.status(py))
    }
}
