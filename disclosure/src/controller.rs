use viewdom::{Display, Element, find_element, find_element_mut};

use crate::error::ToggleError;
use crate::sink::{ElementSink, VisibilitySink};

/// Suffix appended to a content id to form its indicator id when a
/// controller is built with [`ToggleController::new`].
pub const INDICATOR_SUFFIX: &str = "_div";

/// Whether a content element is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Visibility implied by a display mode: only `none` hides.
    pub fn of(display: &Display) -> Self {
        if display.is_hidden() {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Ids of a content element and the indicator that reflects its state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPair {
    pub content: String,
    pub indicator: String,
}

impl TargetPair {
    pub fn new(content: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            indicator: indicator.into(),
        }
    }

    /// Pair `id` with `id` + [`INDICATOR_SUFFIX`].
    pub fn by_convention(id: impl Into<String>) -> Self {
        let content = id.into();
        let indicator = format!("{content}{INDICATOR_SUFFIX}");
        Self { content, indicator }
    }
}

/// Glyphs shown by the indicator element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    pub collapsed: String,
    pub expanded: String,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            collapsed: "+".into(),
            expanded: "-".into(),
        }
    }
}

impl Indicators {
    pub fn glyph(&self, visibility: Visibility) -> &str {
        match visibility {
            Visibility::Visible => &self.expanded,
            Visibility::Hidden => &self.collapsed,
        }
    }
}

/// Expands and collapses one content element, keeping its indicator in sync.
///
/// The controller only stores ids. Every operation takes the tree it should
/// act on and looks both elements up again, so it can be kept around for the
/// lifetime of a view while the tree itself is rebuilt.
///
/// # Example
///
/// ```
/// use disclosure::{ToggleController, Visibility};
/// use viewdom::{Display, Element, find_element};
///
/// let mut page = Element::col()
///     .child(Element::text("+").id("panel1_div"))
///     .child(Element::text("body").id("panel1").display(Display::None));
///
/// let panel = ToggleController::new("panel1");
/// assert_eq!(panel.toggle(&mut page), Ok(Visibility::Visible));
/// assert_eq!(find_element(&page, "panel1_div").unwrap().text_content(), Some("-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleController {
    target: TargetPair,
    indicators: Indicators,
}

impl ToggleController {
    /// Controller for `id`, with the indicator at `id` + `"_div"`.
    ///
    /// Any string is accepted, including one that matches nothing yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_target(TargetPair::by_convention(id))
    }

    /// Controller with an explicitly named indicator element.
    pub fn paired(content: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self::with_target(TargetPair::new(content, indicator))
    }

    pub fn with_target(target: TargetPair) -> Self {
        Self {
            target,
            indicators: Indicators::default(),
        }
    }

    /// Use custom glyphs instead of "+"/"-".
    pub fn with_indicators(
        mut self,
        collapsed: impl Into<String>,
        expanded: impl Into<String>,
    ) -> Self {
        self.indicators = Indicators {
            collapsed: collapsed.into(),
            expanded: expanded.into(),
        };
        self
    }

    pub fn target(&self) -> &TargetPair {
        &self.target
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    // -------------------------------------------------------------------------
    // Element tree operations
    // -------------------------------------------------------------------------

    /// Flip the content element between hidden and shown.
    ///
    /// Content with display `none` becomes `block` and the indicator shows
    /// the expanded glyph; any other display (unset included) becomes `none`
    /// with the collapsed glyph. Both elements must exist; nothing is
    /// modified otherwise.
    pub fn toggle(&self, root: &mut Element) -> Result<Visibility, ToggleError> {
        let mut sink = ElementSink::bind(root, &self.target).inspect_err(|e| {
            log::warn!("toggle skipped: {e}");
        })?;
        Ok(self.toggle_sink(&mut sink))
    }

    /// Hide the content element regardless of its current state.
    ///
    /// Only the content element is required. Unlike a bare display change,
    /// this also sets the indicator to the collapsed glyph when the indicator
    /// exists, so a later `toggle` never starts from a stale "-".
    pub fn collapse(&self, root: &mut Element) -> Result<(), ToggleError> {
        self.force(root, Visibility::Hidden)
    }

    /// Show the content element regardless of its current state.
    ///
    /// Same requirements as [`collapse`](Self::collapse); the indicator gets
    /// the expanded glyph when present.
    pub fn expand(&self, root: &mut Element) -> Result<(), ToggleError> {
        self.force(root, Visibility::Visible)
    }

    /// Current visibility of the content element.
    pub fn visibility(&self, root: &Element) -> Result<Visibility, ToggleError> {
        find_element(root, &self.target.content)
            .map(|el| Visibility::of(&el.display))
            .ok_or_else(|| self.target_not_found())
    }

    fn force(&self, root: &mut Element, visibility: Visibility) -> Result<(), ToggleError> {
        let display = match visibility {
            Visibility::Visible => Display::Block,
            Visibility::Hidden => Display::None,
        };

        let Some(content) = find_element_mut(root, &self.target.content) else {
            let err = self.target_not_found();
            log::warn!("{visibility:?} skipped: {err}");
            return Err(err);
        };
        content.set_display(display);

        match find_element_mut(root, &self.target.indicator) {
            Some(indicator) => indicator.set_text(self.indicators.glyph(visibility)),
            None => log::debug!("{}: no indicator to update", self.target.content),
        }

        log::debug!("{}: forced {visibility:?}", self.target.content);
        Ok(())
    }

    fn target_not_found(&self) -> ToggleError {
        ToggleError::TargetNotFound {
            id: self.target.content.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Sink operations
    // -------------------------------------------------------------------------

    /// Toggle through any [`VisibilitySink`], returning the new state.
    pub fn toggle_sink(&self, sink: &mut impl VisibilitySink) -> Visibility {
        let next = if sink.is_visible() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        self.apply(sink, next);
        log::debug!("{}: toggled to {next:?}", self.target.content);
        next
    }

    pub fn collapse_sink(&self, sink: &mut impl VisibilitySink) {
        self.apply(sink, Visibility::Hidden);
    }

    pub fn expand_sink(&self, sink: &mut impl VisibilitySink) {
        self.apply(sink, Visibility::Visible);
    }

    fn apply(&self, sink: &mut impl VisibilitySink, visibility: Visibility) {
        sink.set_visible(visibility.is_visible());
        sink.set_indicator(self.indicators.glyph(visibility));
    }
}
