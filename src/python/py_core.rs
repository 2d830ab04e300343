//! Element bindings for Python.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Element, ElementError};

create_exception!(
    element_tracker,
    CannotConsumeElementError,
    PyException,
    "Raised when consuming an element that is not strong or waning."
);

impl From<ElementError> for PyErr {
    fn from(err: ElementError) -> Self {
        match &err {
            ElementError::CannotConsume { .. } => {
                CannotConsumeElementError::new_err(err.to_string())
            }
            ElementError::UnknownElement { key } => PyKeyError::new_err(key.clone()),
            ElementError::NameMismatch { .. } | ElementError::UnknownStatus { .. } => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Python wrapper for Element.
#[pyclass(name = "Element")]
#[derive(Clone, Debug)]
pub struct PyElement(pub Element);

#[pymethods]
impl PyElement {
    /// Create an inert element.
    #[new]
    fn new(name: String) -> Self {
        Self(Element::new(name))
    }

    #[getter]
    fn name(&self) -> &str {
        self.0.name()
    }

    /// Status text: "inert", "strong" or "waning".
    #[getter]
    fn status(&self) -> &'static str {
        self.0.status().as_str()
    }

    fn generate(&mut self) {
        self.0.generate();
    }

    fn wane(&mut self) {
        self.0.wane();
    }

    /// Raises CannotConsumeElementError if the element is inert.
    fn consume(&mut self) -> PyResult<()> {
        Ok(self.0.consume()?)
    }

    fn __repr__(&self) -> String {
        format!("Element({}, {})", self.0.name(), self.0.status())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(all(test, feature = "python"))]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err: PyErr = ElementError::cannot_consume("Fire").into();
            assert!(err.is_instance_of::<CannotConsumeElementError>(py));
            assert_eq!(
                err.value_bound(py).to_string(),
                "Cannot consume Fire because it's not strong or waning"
            );

            let err: PyErr = ElementError::unknown_element("water").into();
            assert!(err.is_instance_of::<PyKeyError>(py));

            let err: PyErr = ElementError::unknown_status("burning").into();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_element_consume_raises() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let mut element = PyElement::new("Fire".to_string());
            let err = element.consume().unwrap_err();
            assert!(err.is_instance_of::<CannotConsumeElementError>(py));

            element.generate();
            assert!(element.consume().is_ok());
            assert_eq!(element.status(), "inert");
        });
    }
}
