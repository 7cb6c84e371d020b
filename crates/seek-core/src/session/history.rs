//! Append-only record of the exchanges made in one session.

use super::exchange::Exchange;

/// Ordered record of every successful exchange in the current session.
///
/// Entries are kept in submission order. There is no deduplication and no
/// removal; the history grows until the session ends and is then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<Exchange>,
}

impl SessionHistory {
    /// Creates an empty history.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_core::session::SessionHistory;
    ///
    /// let history = SessionHistory::new();
    /// assert!(history.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exchange to the end of the history.
    pub fn push(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at a 1-based position, as shown to the user.
    pub fn get(&self, position: usize) -> Option<&Exchange> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Exchange] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a Exchange;
    type IntoIter = std::slice::Iter<'a, Exchange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
