//! Velora Markup Core
//!
//! Author-facing shorthand tags and their expansion into standard markup.
//! Each registered tag name maps to a pure function `(attributes, text) ->
//! markup`; expansion replaces the authored element in place (never wraps).
//! A tag missing a required attribute expands into a visibly broken element
//! instead of failing, so a bad component never breaks the page render.

pub mod chrome;
pub mod node;
pub mod registry;
pub mod tags;

pub use chrome::{NavLink, SiteChrome};
pub use node::Node;
pub use registry::{Registry, TagInvocation};
