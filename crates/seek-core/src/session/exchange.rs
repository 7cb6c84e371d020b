//! Exchange domain model.

/// Answer recorded when the backend replies successfully without one.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer received.";

/// One user query paired with the answer the backend returned.
///
/// Fields are private so an exchange cannot change after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    query: String,
    answer: String,
}

impl Exchange {
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
