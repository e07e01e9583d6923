//! Expand/collapse controllers for sections of an element tree.
//!
//! A [`ToggleController`] pairs a content element with an indicator element
//! and flips the content's display mode while keeping the indicator glyph
//! ("+" when collapsed, "-" when expanded) in sync. Elements are looked up
//! by id on every call; the controller never holds on to them.

mod controller;
mod error;
mod sink;

pub use controller::{INDICATOR_SUFFIX, Indicators, TargetPair, ToggleController, Visibility};
pub use error::ToggleError;
pub use sink::{ElementSink, VisibilitySink};
