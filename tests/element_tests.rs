//! Element lifecycle integration tests.
//!
//! These tests walk single elements through the generate / wane /
//! consume transitions end to end.

use element_tracker::{Element, ElementError, ElementStatus};

// =============================================================================
// Construction
// =============================================================================

/// Test that elements keep the name they were created with.
#[test]
fn test_can_create_an_element() {
    let element = Element::new("Fire");
    assert_eq!(element.name(), "Fire");

    let element = Element::new("Earth");
    assert_eq!(element.name(), "Earth");
}

/// Test that new elements start inert.
#[test]
fn test_element_is_inert_by_default() {
    let element = Element::new("Fire");
    assert_eq!(element.status(), ElementStatus::Inert);
    assert_eq!(element.status().to_string(), "inert");
}

// =============================================================================
// Generate and Wane
// =============================================================================

/// Test that generating makes an element strong.
#[test]
fn test_element_can_be_generated() {
    let mut element = Element::new("Fire");
    element.generate();
    assert_eq!(element.status(), ElementStatus::Strong);
}

/// Test the full decay sequence down to the inert fixed point.
#[test]
fn test_element_can_wane() {
    let mut element = Element::new("Fire");
    element.generate();
    assert_eq!(element.status(), ElementStatus::Strong);

    let mut seen = Vec::new();
    for _ in 0..3 {
        element.wane();
        seen.push(element.status().as_str());
    }

    assert_eq!(seen, vec!["waning", "inert", "inert"]);
}

/// Test that regenerating a waning element makes it strong again.
#[test]
fn test_regenerate_waning_element() {
    let mut element = Element::new("Light");
    element.generate();
    element.wane();
    assert_eq!(element.status(), ElementStatus::Waning);

    element.generate();
    assert_eq!(element.status(), ElementStatus::Strong);
}

// =============================================================================
// Consume
// =============================================================================

/// Test consuming a strong element.
#[test]
fn test_element_can_be_consumed_when_strong() {
    let mut element = Element::new("Fire");
    element.generate();

    element.consume().expect("strong element should be consumable");
    assert_eq!(element.status(), ElementStatus::Inert);
}

/// Test consuming a waning element.
#[test]
fn test_element_can_be_consumed_when_waning() {
    let mut element = Element::new("Fire");
    element.generate();
    element.wane();

    element.consume().expect("waning element should be consumable");
    assert_eq!(element.status(), ElementStatus::Inert);
}

/// Test that consuming an inert element fails with the exact message.
#[test]
fn test_element_cannot_be_consumed_when_inert() {
    let mut element = Element::new("Fire");

    let err = element.consume().unwrap_err();
    assert!(err.is_cannot_consume());
    assert_eq!(
        err.to_string(),
        "Cannot consume Fire because it's not strong or waning"
    );
    assert_eq!(element.status(), ElementStatus::Inert);
}

/// Test that an element can't be consumed twice.
#[test]
fn test_double_consume_fails() {
    let mut element = Element::new("Dark");
    element.generate();

    assert!(element.consume().is_ok());
    assert_eq!(
        element.consume(),
        Err(ElementError::cannot_consume("Dark"))
    );
}
