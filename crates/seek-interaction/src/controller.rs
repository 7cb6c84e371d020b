//! Submission flow and session state for the query view.

use std::sync::Arc;

use seek_core::{Exchange, SeekError, SessionHistory};
use tracing::{debug, info, warn};

use crate::backend::AnswerBackend;

/// Result of handling one submission.
///
/// Every variant leaves the controller ready for the next query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    /// The query was empty; nothing was sent.
    Warning(SeekError),
    /// The backend answered and the exchange was appended to the history.
    Answered(Exchange),
    /// The backend call failed; the history is unchanged.
    Failed(SeekError),
}

/// Owns the state of one query session.
///
/// `submit` takes `&mut self`, so a second submission cannot start while one
/// is still awaiting the backend and history appends stay in submission
/// order.
pub struct QueryController {
    backend: Arc<dyn AnswerBackend>,
    history: SessionHistory,
}

impl QueryController {
    /// Creates a controller with an empty history.
    pub fn new(backend: Arc<dyn AnswerBackend>) -> Self {
        Self {
            backend,
            history: SessionHistory::new(),
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Validates `input`, asks the backend, and records a successful exchange.
    ///
    /// Leading and trailing whitespace is trimmed; what remains is both the
    /// text sent to the backend and the query stored in the history.
    pub async fn submit(&mut self, input: &str) -> InteractionResult {
        let query = input.trim();
        if query.is_empty() {
            debug!("ignoring empty submission");
            return InteractionResult::Warning(SeekError::Validation);
        }

        match self.backend.ask(query).await {
            Ok(answer) => {
                let exchange = Exchange::new(query, answer);
                self.history.push(exchange.clone());
                info!(entries = self.history.len(), "recorded exchange");
                InteractionResult::Answered(exchange)
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                InteractionResult::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // Backend that replays canned results and records what it was asked
    struct ScriptedBackend {
        replies: Mutex<VecDeque<seek_core::Result<String>>>,
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<seek_core::Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                asked: Mutex::new(Vec::new()),
            })
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnswerBackend for ScriptedBackend {
        async fn ask(&self, query: &str) -> seek_core::Result<String> {
            self.asked.lock().unwrap().push(query.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(SeekError::transport("no scripted reply")))
        }
    }

    #[tokio::test]
    async fn test_success_appends_exchange() {
        let backend = ScriptedBackend::new(vec![Ok("Paris".to_string())]);
        let mut controller = QueryController::new(backend.clone());

        let result = controller.submit("capital of France?").await;

        assert_eq!(
            result,
            InteractionResult::Answered(Exchange::new("capital of France?", "Paris"))
        );
        assert_eq!(controller.history().len(), 1);
        assert_eq!(
            controller.history().last(),
            Some(&Exchange::new("capital of France?", "Paris"))
        );
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_never_call_backend() {
        let backend = ScriptedBackend::new(vec![]);
        let mut controller = QueryController::new(backend.clone());

        for input in ["", "   ", "\t\n"] {
            let result = controller.submit(input).await;
            assert_eq!(result, InteractionResult::Warning(SeekError::Validation));
        }

        assert!(backend.asked().is_empty());
        assert!(controller.history().is_empty());
    }

    #[tokio::test]
    async fn test_failures_leave_history_untouched() {
        let backend = ScriptedBackend::new(vec![
            Ok("first".to_string()),
            Err(SeekError::backend(404)),
            Err(SeekError::transport("connection refused")),
        ]);
        let mut controller = QueryController::new(backend.clone());

        controller.submit("one").await;
        let not_found = controller.submit("two").await;
        let refused = controller.submit("three").await;

        assert_eq!(not_found, InteractionResult::Failed(SeekError::backend(404)));
        assert!(matches!(refused, InteractionResult::Failed(ref e) if e.is_transport()));
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history().get(1), Some(&Exchange::new("one", "first")));
    }

    #[tokio::test]
    async fn test_sequence_preserves_submission_order() {
        let backend = ScriptedBackend::new(vec![
            Ok("a1".to_string()),
            Ok("a2".to_string()),
            Ok("a3".to_string()),
        ]);
        let mut controller = QueryController::new(backend.clone());

        for query in ["q1", "q2", "q3"] {
            controller.submit(query).await;
        }

        let recorded: Vec<(&str, &str)> = controller
            .history()
            .iter()
            .map(|e| (e.query(), e.answer()))
            .collect();
        assert_eq!(recorded, vec![("q1", "a1"), ("q2", "a2"), ("q3", "a3")]);
        assert_eq!(backend.asked(), vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_sending() {
        let backend = ScriptedBackend::new(vec![Ok("ok".to_string())]);
        let mut controller = QueryController::new(backend.clone());

        controller.submit("  padded question  ").await;

        assert_eq!(backend.asked(), vec!["padded question"]);
        assert_eq!(controller.history().get(1).map(Exchange::query), Some("padded question"));
    }
}
