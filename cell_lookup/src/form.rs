//! Headless search form.
//!
//! Tracks the state of a single lookup screen. The form is `Idle` until the
//! first submission, `Loading` while a lookup is in flight (the submit
//! control is disabled) and `Settled` once the lookup returned a result or an
//! error. A settled form accepts new submissions.

use crate::{
    client::LookupClient,
    error::MSG_UNEXPECTED,
    models::{LookupRequest, LookupResult},
    Error, Result,
};
use chrono::NaiveDateTime;
use tokio::sync::watch;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading,
    Settled(Outcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(LookupResult),
    /// User facing error message shown in the alert
    Failed(String),
}

pub struct LookupForm {
    client: LookupClient,
    state: watch::Sender<SearchState>,
    result: watch::Sender<Option<LookupResult>>,
}

impl LookupForm {
    pub fn new(client: LookupClient) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        let (result, _) = watch::channel(None);
        Self {
            client,
            state,
            result,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn submit_enabled(&self) -> bool {
        *self.state.borrow() != SearchState::Loading
    }

    /// Most recent successful result, kept on screen across failed searches
    pub fn last_result(&self) -> Option<LookupResult> {
        self.result.borrow().clone()
    }

    pub async fn submit(&self, phone_number: &str, datetime: NaiveDateTime) -> Result<LookupResult> {
        if !self.submit_enabled() {
            tracing::debug!("search already in flight, ignoring submission");
            return Err(Error::Busy);
        }

        let request = match LookupRequest::new(phone_number, datetime) {
            Ok(request) => request,
            Err(err) => {
                self.state.send_if_modified(|state| {
                    if *state == SearchState::Loading {
                        return false;
                    }
                    *state = SearchState::Settled(Outcome::Failed(err.user_message()));
                    true
                });
                return Err(err);
            }
        };

        // check and set in one step so two submissions cannot both start
        let started = self.state.send_if_modified(|state| {
            if *state == SearchState::Loading {
                return false;
            }
            *state = SearchState::Loading;
            true
        });
        if !started {
            return Err(Error::Busy);
        }
        let in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let res = self.client.search_request(&request).await;
        match &res {
            Ok(result) => {
                tracing::info!(
                    lac = result.lac,
                    cell_id = result.cell_id,
                    "lookup settled with a result"
                );
                self.result.send_replace(Some(result.clone()));
                in_flight.settle(Outcome::Found(result.clone()));
            }
            Err(err) => {
                tracing::info!(%err, "lookup settled with an error");
                in_flight.settle(Outcome::Failed(err.user_message()));
            }
        }
        res
    }
}

/// Held while a lookup is in flight. Re-enables the form if the submitting
/// future is dropped before the lookup settles.
struct InFlight<'a> {
    state: &'a watch::Sender<SearchState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Outcome) {
        self.settled = true;
        self.state.send_replace(SearchState::Settled(outcome));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("lookup dropped before settling");
            self.state.send_replace(SearchState::Settled(Outcome::Failed(
                MSG_UNEXPECTED.to_string(),
            )));
        }
    }
}
