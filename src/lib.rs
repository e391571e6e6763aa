//! nova-timestamp - Unix epoch and timestamp conversion for the Nova launcher.
//!
//! Type `ts` followed by an epoch value or a date and get both readings back,
//! each ready to copy:
//!
//! - `ts` shows the current time as an epoch value
//! - `ts 1700000000` shows that instant in local time and UTC
//! - `ts 2023-01-01 12:00` shows the epoch value of that date read as local
//!   time and as UTC
//!
//! # Architecture
//!
//! - [`services`] - The conversion logic (pure, clock and zone injectable)
//! - [`core`] - Query events, preferences and result items exchanged with the host
//! - [`extension`] - Glue from a keyword query to a rendered result list
//! - [`executor`] - Carrying out a result's copy action
//! - [`platform`] - Clipboard access
//! - [`config`] - Configuration loading and management
//!
//! # Example
//!
//! ```
//! use nova_timestamp::{KeywordQueryEvent, QueryHandler, TimestampExtension};
//!
//! let extension = TimestampExtension::default();
//! let event = KeywordQueryEvent::from_query("ts 2023-01-01 12:00:00");
//! let render = extension.on_event(&event, &extension.preferences());
//!
//! assert_eq!(render.items[1].title, "As UTC Time: 1672574400");
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod executor;
pub mod extension;
pub mod platform;
pub mod services;

mod error;

pub use config::Config;
pub use self::core::{KeywordQueryEvent, Preferences, RenderAction, ResultItem};
pub use error::{TimestampError, TimestampResult};
pub use executor::ExecutionAction;
pub use extension::{QueryHandler, TimestampExtension};
pub use services::{Conversion, Unit};
