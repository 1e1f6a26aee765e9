//! Per-invocation pull operation record

use crate::registry::selection::ImageRequest;
use crate::telemetry::TelemetryEvent;
use uuid::Uuid;

/// Terminal state of one pull operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    Succeeded,
    Failed,
    Cancelled,
}

impl PullOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullOutcome::Succeeded => "succeeded",
            PullOutcome::Failed => "failed",
            PullOutcome::Cancelled => "cancelled",
        }
    }
}

/// One end-to-end pull invocation, created per user action
#[derive(Debug, Clone)]
pub struct PullOperation {
    pub id: Uuid,
    pub login_server: String,
    pub request: ImageRequest,
    pub outcome: Option<PullOutcome>,
}

impl PullOperation {
    pub fn begin(login_server: impl Into<String>, request: ImageRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            login_server: login_server.into(),
            request,
            outcome: None,
        }
    }

    pub fn complete(&mut self, outcome: PullOutcome) {
        self.outcome = Some(outcome);
    }

    /// Telemetry event describing this operation's terminal state
    pub fn to_event(&self, detail: Option<String>) -> TelemetryEvent {
        let outcome = self.outcome.map_or("pending", |o| o.as_str());
        let mut event = TelemetryEvent::new("pull", outcome).with_operation(self.id);
        if let Some(detail) = detail {
            event = event.with_detail(detail);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::selection::ImageSelection;

    #[test]
    fn test_operation_records_terminal_outcome() {
        let request = ImageSelection::qualified("webapp", "v2").into_request();
        let mut operation = PullOperation::begin("contoso.azurecr.io", request);
        assert!(operation.outcome.is_none());

        operation.complete(PullOutcome::Succeeded);

        assert_eq!(operation.outcome, Some(PullOutcome::Succeeded));
        let event = operation.to_event(None);
        assert_eq!(event.outcome, "succeeded");
        assert_eq!(event.operation_id, Some(operation.id));
    }

    #[test]
    fn test_failed_operation_event_carries_detail() {
        let request = ImageSelection::qualified("webapp", "v2").into_request();
        let mut operation = PullOperation::begin("contoso.azurecr.io", request);
        operation.complete(PullOutcome::Failed);

        let event = operation.to_event(Some("login failed".to_string()));

        assert_eq!(event.outcome, "failed");
        assert_eq!(event.detail.as_deref(), Some("login failed"));
    }
}
