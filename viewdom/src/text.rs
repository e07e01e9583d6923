//! Plain-text rendering of an element tree.
//!
//! Produces one line per text element in a column, indented by nesting
//! depth. Rows are flattened onto a single line. Elements whose display is
//! `none` are skipped along with everything below them.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::Direction;

const INDENT: &str = "  ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Render the visible part of the tree as lines.
pub fn render_lines(root: &Element) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(root, 0, &mut lines);
    lines
}

fn render_into(element: &Element, depth: usize, lines: &mut Vec<String>) {
    if element.is_hidden() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => lines.push(format!("{}{}", INDENT.repeat(depth), text)),
        Content::Children(children) => match element.direction {
            Direction::Row => {
                let parts: Vec<String> = children.iter().filter_map(inline_text).collect();
                if !parts.is_empty() {
                    lines.push(format!("{}{}", INDENT.repeat(depth), parts.join(" ")));
                }
            }
            Direction::Column => {
                for child in children {
                    let child_depth = match child.content {
                        Content::Children(_) if child.direction == Direction::Column => depth + 1,
                        _ => depth,
                    };
                    render_into(child, child_depth, lines);
                }
            }
        },
    }
}

/// Flatten a visible subtree into one string, for row layout.
fn inline_text(element: &Element) -> Option<String> {
    if element.is_hidden() {
        return None;
    }

    match &element.content {
        Content::None => None,
        Content::Text(text) => Some(text.clone()),
        Content::Children(children) => {
            let parts: Vec<String> = children.iter().filter_map(inline_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
    }
}
