use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Display mode of an element.
///
/// Mirrors the CSS `display` property closely enough for show/hide:
/// only [`Display::None`] removes an element (and its subtree) from the
/// rendered output. [`Display::Unset`] is what an element has until
/// somebody assigns a mode, and renders like `Block`. Modes this crate has
/// no name for are kept verbatim in [`Display::Other`] and count as shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Display {
    #[default]
    Unset,
    Block,
    Inline,
    Flex,
    None,
    Other(String),
}

impl Display {
    pub fn as_str(&self) -> &str {
        match self {
            Display::Unset => "",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::Flex => "flex",
            Display::None => "none",
            Display::Other(mode) => mode,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Display::None)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails: the match is exact, so `" none "` or `"None"` land
/// in [`Display::Other`] rather than hiding the element.
impl FromStr for Display {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Display::from(s))
    }
}

impl From<&str> for Display {
    fn from(s: &str) -> Self {
        match s {
            "" => Display::Unset,
            "block" => Display::Block,
            "inline" => Display::Inline,
            "flex" => Display::Flex,
            "none" => Display::None,
            other => Display::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}
