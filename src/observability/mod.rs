//! Observability for shelfdb
//!
//! Structured logging through `tracing`. Store operations emit their own
//! `debug!`/`info!` events; this module installs the subscriber and defines
//! the process lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use shelfdb::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! log_event(Event::ServerListening, &[("addr", "0.0.0.0:8080")]);
//! ```

mod events;
mod logger;

pub use events::{log_event, Event};
pub use logger::{init_logging, LogFormat};
