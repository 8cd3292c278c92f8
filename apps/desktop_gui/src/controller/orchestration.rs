//! Applies drained UI events to the store and to the review state of the window.

use mhr_client_core::{forms::commit_court_order_event, Store};
use tracing::{debug, warn};

use crate::controller::events::UiEvent;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewState {
    pub court_order_valid: bool,
    pub pending_changes: usize,
    pub status: String,
}

pub fn apply_ui_event(store: &mut Store, review: &mut ReviewState, event: UiEvent) {
    match event {
        UiEvent::CourtOrder(event) => {
            if let Some(valid) = commit_court_order_event(store, event) {
                review.court_order_valid = valid;
            }
        }
        UiEvent::StoreChanged(change) => {
            debug!(action = change.action, "store changed");
            review.pending_changes += 1;
        }
        UiEvent::Error(err) => {
            warn!(context = ?err.context(), "{}", err.message());
            review.status = err.message().to_string();
        }
    }
}
