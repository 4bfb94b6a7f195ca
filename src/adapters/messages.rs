use crate::domain::ports::{DiagnosticSink, MessageSink};
use crate::utils::error::HeroError;
use std::sync::{Mutex, MutexGuard};

/// In-memory message log, shared between the service and whoever displays it.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking writer cannot leave a half-pushed Vec behind.
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MessageSink for MessageService {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}

/// Writes messages to the tracing subscriber instead of keeping them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMessages;

impl MessageSink for TracingMessages {
    fn add(&self, message: String) {
        tracing::info!("{}", message);
    }
}

/// Sends every message to both sinks, in order.
impl<A: MessageSink, B: MessageSink> MessageSink for (A, B) {
    fn add(&self, message: String) {
        self.0.add(message.clone());
        self.1.add(message);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, operation: &str, error: &HeroError) {
        tracing::error!(operation, status = ?error.status(), "❌ {:?}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_service_add_and_clear() {
        let log = MessageService::new();
        assert!(log.is_empty());

        log.add("HeroService: fetched heroes".to_string());
        log.add("HeroService: fetched hero id=12".to_string());

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.messages(),
            vec![
                "HeroService: fetched heroes".to_string(),
                "HeroService: fetched hero id=12".to_string(),
            ]
        );

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_pair_fans_out_to_both_logs() {
        let first = std::sync::Arc::new(MessageService::new());
        let second = std::sync::Arc::new(MessageService::new());
        let pair = (first.clone(), second.clone());

        pair.add("HeroService: fetched heroes".to_string());

        assert_eq!(first.messages(), vec!["HeroService: fetched heroes"]);
        assert_eq!(second.messages(), vec!["HeroService: fetched heroes"]);
    }

    #[test]
    fn test_mirror_to_tracing_keeps_the_log() {
        let log = std::sync::Arc::new(MessageService::new());
        let mirrored = (log.clone(), TracingMessages);

        mirrored.add("HeroService: deleted hero id=13".to_string());

        assert_eq!(log.messages(), vec!["HeroService: deleted hero id=13"]);
    }

    #[test]
    fn test_shared_log_through_arc() {
        let log = std::sync::Arc::new(MessageService::new());
        let sink: std::sync::Arc<MessageService> = log.clone();
        sink.add("hello".to_string());
        assert_eq!(log.messages(), vec!["hello".to_string()]);
    }
}
