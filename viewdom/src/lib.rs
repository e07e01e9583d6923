pub mod element;
pub mod text;
pub mod types;

pub use element::{find_element, find_element_mut, Content, Element};
pub use types::{Direction, Display};
