//! Assertion helpers for tests that inspect element trees
//!
//! Failures panic at the caller's line and print the pattern next to the
//! serialized element.
#![allow(clippy::panic)]

use crate::element::Element;
use crate::pattern::Pattern;
use crate::writer::WriteXml;

/// Panic unless `element` or one of its descendants matches `pattern`
#[track_caller]
pub fn assert_has(pattern: impl Into<Pattern>, element: &Element) {
    let pattern = pattern.into();
    if !element.has(&pattern) {
        panic!("expected {} to have {pattern}", element.to_xml());
    }
}

/// Panic if `element` or any of its descendants matches `pattern`
#[track_caller]
pub fn assert_not_has(pattern: impl Into<Pattern>, element: &Element) {
    let pattern = pattern.into();
    if element.has(&pattern) {
        panic!("expected {} not to have {pattern}", element.to_xml());
    }
}

/// Panic unless `element` itself matches `pattern`
#[track_caller]
pub fn assert_match(pattern: impl Into<Pattern>, element: &Element) {
    let pattern = pattern.into();
    if !element.matches(&pattern) {
        panic!("expected {} to match {pattern}", element.to_xml());
    }
}

/// Macro form of [`assert_has`](crate::assertions::assert_has)
#[macro_export]
macro_rules! assert_has {
    ($pattern:expr, $element:expr $(,)?) => {
        $crate::assertions::assert_has($pattern, &$element)
    };
}

/// Macro form of [`assert_match`](crate::assertions::assert_match)
#[macro_export]
macro_rules! assert_match {
    ($pattern:expr, $element:expr $(,)?) => {
        $crate::assertions::assert_match($pattern, &$element)
    };
}
