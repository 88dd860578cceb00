//! Process lifecycle events

use std::fmt;

use tracing::{error, info};

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration resolved
    ConfigLoaded,
    /// HTTP listener bound
    ServerListening,
    /// HTTP server exited with an error
    ServerFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerFailed => "SERVER_FAILED",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log a lifecycle event with key/value fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    let rendered = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");

    if event.is_failure() {
        error!(event = event.as_str(), fields = %rendered);
    } else {
        info!(event = event.as_str(), fields = %rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ConfigLoaded.as_str(), "CONFIG_LOADED");
        assert_eq!(Event::ServerListening.to_string(), "SERVER_LISTENING");
        assert!(Event::ServerFailed.is_failure());
        assert!(!Event::ServerListening.is_failure());
    }

    #[test]
    fn test_log_event_without_subscriber() {
        // Must not panic when no subscriber is installed
        log_event(Event::ConfigLoaded, &[("data_file", "/tmp/products.json")]);
    }
}
