//! Transient lookup state shared by the interactive surface.
//!
//! Suggestion fetches overlap when the user types faster than the network
//! answers. Each fetch is stamped with a token from [`Session::begin_suggestion_fetch`];
//! a completion handler feeds its result back through [`Session::apply_suggestions`],
//! which discards anything but the latest issued token. That keeps a slow
//! response for an old keystroke from overwriting the list a newer
//! keystroke already owns.

use crate::model::WeatherRecord;

/// Handle identifying one suggestion fetch. Monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// The three state slots of a lookup session: suggestion list, last
/// successful weather record, and the latest suggestion-fetch token.
#[derive(Debug, Default)]
pub struct Session {
    suggestions: Vec<String>,
    record: Option<WeatherRecord>,
    latest_token: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new suggestion fetch and return its token. Any fetch
    /// started earlier is stale from this point on.
    pub fn begin_suggestion_fetch(&mut self) -> FetchToken {
        self.latest_token += 1;
        FetchToken(self.latest_token)
    }

    /// Drop the current list and invalidate every in-flight fetch.
    /// Called when the query becomes empty.
    pub fn invalidate_suggestions(&mut self) {
        self.latest_token += 1;
        self.suggestions.clear();
    }

    /// Install a fetch result. Returns false (and changes nothing) when
    /// the token has been superseded.
    pub fn apply_suggestions(&mut self, token: FetchToken, names: Vec<String>) -> bool {
        if token.0 != self.latest_token {
            return false;
        }
        self.suggestions = names;
        true
    }

    /// Install a weather record. Always clears the suggestion list:
    /// searching or selecting dismisses the dropdown.
    pub fn apply_record(&mut self, record: WeatherRecord) {
        self.record = Some(record);
        self.invalidate_suggestions();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        self.record.as_ref()
    }
}
