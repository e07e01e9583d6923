//! Visibility sinks: where toggle decisions are written to.

use viewdom::{Display, Element, find_element, find_element_mut};

use crate::controller::TargetPair;
use crate::error::ToggleError;

/// Something that can show/hide content and display an indicator glyph.
///
/// The toggle state machine only talks to this trait, so it can drive an
/// element tree, a widget, or a recording fake in tests.
pub trait VisibilitySink {
    /// Whether the content is currently shown.
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn set_indicator(&mut self, glyph: &str);
}

/// A [`VisibilitySink`] over an element tree.
///
/// Holds the tree and the two ids, re-resolving the elements on every call.
/// [`ElementSink::bind`] verifies both exist, so the trait methods can't
/// miss as long as the tree isn't restructured in between.
pub struct ElementSink<'a> {
    root: &'a mut Element,
    target: &'a TargetPair,
}

impl<'a> ElementSink<'a> {
    /// Bind to `target` in `root`, failing if either element is missing.
    pub fn bind(root: &'a mut Element, target: &'a TargetPair) -> Result<Self, ToggleError> {
        if find_element(root, &target.content).is_none() {
            return Err(ToggleError::TargetNotFound {
                id: target.content.clone(),
            });
        }
        if find_element(root, &target.indicator).is_none() {
            return Err(ToggleError::IndicatorNotFound {
                id: target.indicator.clone(),
            });
        }
        Ok(Self { root, target })
    }

    /// Current display mode of the content element.
    pub fn display(&self) -> Display {
        find_element(&*self.root, &self.target.content)
            .map(|el| el.display.clone())
            .unwrap_or_default()
    }

    /// Current text of the indicator element.
    pub fn indicator(&self) -> Option<&str> {
        find_element(&*self.root, &self.target.indicator).and_then(Element::text_content)
    }
}

impl VisibilitySink for ElementSink<'_> {
    fn is_visible(&self) -> bool {
        !self.display().is_hidden()
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { Display::Block } else { Display::None };
        match find_element_mut(&mut *self.root, &self.target.content) {
            Some(el) => el.set_display(display),
            None => log::warn!("content element {} vanished", self.target.content),
        }
    }

    fn set_indicator(&mut self, glyph: &str) {
        match find_element_mut(&mut *self.root, &self.target.indicator) {
            Some(el) => el.set_text(glyph),
            None => log::warn!("indicator element {} vanished", self.target.indicator),
        }
    }
}
