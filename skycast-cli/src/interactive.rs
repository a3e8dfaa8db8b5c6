//! The interactive lookup prompt.
//!
//! Every keystroke in the prompt triggers a suggestion fetch on the Tokio
//! runtime, stamped with a session token so a slow response for an old
//! keystroke can never overwrite a newer list. Accepting a suggestion
//! fills the input with it; Enter submits the text as a weather search;
//! Esc leaves the loop.

use std::sync::Arc;
use std::time::Duration;

use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, InquireError, Text};
use parking_lot::Mutex;
use skycast_core::{Session, WeatherSource};
use tokio::runtime::Handle;

use crate::output;

/// How long a keystroke waits for its own fetch before redrawing with
/// whatever the session currently holds. A response slower than this
/// keeps running and shows up on a later redraw, unless superseded.
const SUGGESTION_GRACE: Duration = Duration::from_millis(250);

#[derive(Clone)]
struct CitySuggester {
    source: Arc<dyn WeatherSource>,
    session: Arc<Mutex<Session>>,
    handle: Handle,
}

impl Autocomplete for CitySuggester {
    // Runs on the prompt's blocking thread, once per keystroke.
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        let query = input.trim().to_string();

        if query.is_empty() {
            self.session.lock().invalidate_suggestions();
            return Ok(Vec::new());
        }

        let token = self.session.lock().begin_suggestion_fetch();
        let source = Arc::clone(&self.source);
        let session = Arc::clone(&self.session);

        let fetch = self.handle.spawn(async move {
            match source.suggest(&query).await {
                Ok(names) => {
                    session.lock().apply_suggestions(token, names);
                }
                // Best effort: the user just sees no new suggestions.
                Err(err) => tracing::warn!(query, error = %err, "suggestion lookup failed"),
            }
        });

        let _ = self
            .handle
            .block_on(async { tokio::time::timeout(SUGGESTION_GRACE, fetch).await });

        Ok(self.session.lock().suggestions().to_vec())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Run the lookup loop until the user quits.
pub async fn run(source: Arc<dyn WeatherSource>) -> anyhow::Result<()> {
    let session = Arc::new(Mutex::new(Session::new()));
    let handle = Handle::current();

    loop {
        let suggester = CitySuggester {
            source: Arc::clone(&source),
            session: Arc::clone(&session),
            handle: handle.clone(),
        };

        // inquire blocks; keep it off the runtime workers.
        let submitted = tokio::task::spawn_blocking(move || {
            Text::new("City:")
                .with_autocomplete(suggester)
                .with_help_message("type for suggestions, Enter to search, Esc to quit")
                .prompt()
        })
        .await?;

        let city = match submitted {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match source.current(&city).await {
            Ok(record) => {
                println!("{}", output::render(&record));
                session.lock().apply_record(record);
            }
            // Last-known-good stays in the session; the prompt comes back.
            Err(err) => eprintln!("Could not fetch weather: {err}"),
        }
    }

    Ok(())
}
