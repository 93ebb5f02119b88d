//! Interaction tracking — a fire-and-forget audit side channel.
//!
//! The session records events through an injected [`InteractionSink`]. The
//! call is synchronous; completion and failure of the underlying POST belong
//! entirely to the sink. Nothing on the filtering path waits on, observes,
//! or is altered by tracking — a dead backend only ever costs log lines.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::client::CodexApi;

/// One tracked interaction, matching the `/api/log_interaction` body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InteractionEvent {
    pub action_type: String,
    pub user_input: String,
    pub system_response: String,
    pub related_glyphs: Vec<String>,
    pub context_summary: String,
}

impl InteractionEvent {
    pub fn new(
        action_type: &str,
        user_input: impl Into<String>,
        system_response: impl Into<String>,
        related_glyphs: Vec<String>,
    ) -> Self {
        Self {
            action_type: action_type.to_string(),
            user_input: user_input.into(),
            system_response: system_response.into(),
            related_glyphs,
            context_summary: format!("Seeker performed {action_type} in the mystical realm"),
        }
    }
}

/// Capability the session uses to emit events.
///
/// `record` must not block the caller. `flush` lets a short-lived process
/// wait for in-flight posts at shutdown; it has no effect on the filtering
/// path and a default no-op implementation.
#[async_trait]
pub trait InteractionSink: Send + Sync {
    fn record(&self, event: InteractionEvent);

    async fn flush(&self) {}
}

/// Sink that posts events to the backend, one spawned task per event.
///
/// Failures are logged at debug level and swallowed; nothing is retried and
/// no response is read. There is no queue or cap — concurrent posts are
/// bounded only by the platform connection limits.
pub struct HttpSink {
    api: Arc<dyn CodexApi>,
    inflight: Mutex<Vec<JoinHandle<()>>>,
}

impl HttpSink {
    pub fn new(api: Arc<dyn CodexApi>) -> Self {
        Self {
            api,
            inflight: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl InteractionSink for HttpSink {
    fn record(&self, event: InteractionEvent) {
        let api = self.api.clone();
        let handle = tokio::spawn(async move {
            if let Err(err) = api.log_interaction(&event).await {
                tracing::debug!(action = %event.action_type, error = %err, "interaction post failed");
            }
        });
        self.inflight.lock().unwrap().push(handle);
    }

    async fn flush(&self) {
        let handles: Vec<JoinHandle<()>> = self.inflight.lock().unwrap().drain(..).collect();
        for handle in handles {
            // A hung post should not hold the process open.
            let _ = tokio::time::timeout(Duration::from_secs(2), handle).await;
        }
    }
}

/// Sink used when telemetry is disabled: events vanish.
pub struct NullSink;

#[async_trait]
impl InteractionSink for NullSink {
    fn record(&self, _event: InteractionEvent) {}
}

/// Sink that retains events in memory, for tests.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<InteractionEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InteractionEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionSink for MemorySink {
    fn record(&self, event: InteractionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_carries_context_summary() {
        let event = InteractionEvent::new("glyph_search", "life", "Sought wisdom: life", vec![]);
        assert_eq!(
            event.context_summary,
            "Seeker performed glyph_search in the mystical realm"
        );
    }

    #[test]
    fn memory_sink_retains_events_in_order() {
        let sink = MemorySink::new();
        sink.record(InteractionEvent::new("a", "", "", vec![]));
        sink.record(InteractionEvent::new("b", "", "", vec![]));
        let actions: Vec<String> = sink.events().into_iter().map(|e| e.action_type).collect();
        assert_eq!(actions, vec!["a", "b"]);
    }
}
