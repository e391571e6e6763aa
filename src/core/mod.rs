//! Core types shared between the extension and its host.
//!
//! - Query events and preferences coming in from the host
//! - Result items and the render action going back out

pub mod query;
pub mod result;

pub use query::{KeywordQueryEvent, Preferences, UNIT_PREFERENCE};
pub use result::{RenderAction, ResultItem};
