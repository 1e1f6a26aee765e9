//! Structured telemetry and error-reporting channel

use serde::Serialize;
use uuid::Uuid;

/// A structured outcome or failure event
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryEvent {
    pub context: &'static str,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TelemetryEvent {
    pub fn new(context: &'static str, outcome: &'static str) -> Self {
        Self {
            context,
            outcome,
            operation_id: None,
            detail: None,
        }
    }

    /// Event for a failure that is reported here but never raised to the caller
    pub fn suppressed(context: &'static str, detail: String) -> Self {
        Self::new(context, "suppressed").with_detail(detail)
    }

    pub fn with_operation(mut self, id: Uuid) -> Self {
        self.operation_id = Some(id);
        self
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Receiver for structured failure events
pub trait Telemetry: Send + Sync {
    fn track(&self, event: TelemetryEvent);
}

/// Telemetry channel that logs serialized events through `tracing`
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn track(&self, event: TelemetryEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(target: "regpull::telemetry", "{}", payload),
            Err(err) => tracing::warn!("Failed to serialize telemetry event: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_skips_empty_fields() {
        let event = TelemetryEvent::new("pull", "succeeded");
        let payload = serde_json::to_string(&event).unwrap();

        assert_eq!(payload, r#"{"context":"pull","outcome":"succeeded"}"#);
    }

    #[test]
    fn test_suppressed_event_carries_detail() {
        let event = TelemetryEvent::suppressed("engineConfigProbe", "No such file".to_string());

        assert_eq!(event.outcome, "suppressed");
        assert_eq!(event.detail.as_deref(), Some("No such file"));
    }
}
