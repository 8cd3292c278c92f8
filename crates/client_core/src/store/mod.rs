//! Application state tree and its single-writer store.

use mhr_shared::{
    domain::{CourtOrderInfo, MhrTransferState},
    protocol::StoreAction,
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

mod mutations;
pub use mutations::*;

const STORE_CHANGE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateModel {
    pub mhr_transfer: MhrTransferState,
    pub court_order_information: CourtOrderInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub state_model: StateModel,
}

/// Notification sent after every dispatched action has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub action: &'static str,
}

pub struct Store {
    state: AppState,
    changes: broadcast::Sender<StoreChange>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        let (changes, _) = broadcast::channel(STORE_CHANGE_CAPACITY);
        Self { state, changes }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mhr_transfer(&self) -> &MhrTransferState {
        &self.state.state_model.mhr_transfer
    }

    pub fn court_order_information(&self) -> &CourtOrderInfo {
        &self.state.state_model.court_order_information
    }

    pub fn subscribe_changes(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }

    /// Applies one action as one write, then notifies subscribers.
    pub fn dispatch(&mut self, action: StoreAction) {
        let name = action.name();
        debug!(action = name, "dispatching store action");

        let state = &mut self.state;
        match action {
            StoreAction::SetMhrTransferDeclaredValue(v) => {
                mutate_mhr_transfer_declared_value(state, v)
            }
            StoreAction::SetMhrTransferConsideration(v) => {
                mutate_mhr_transfer_consideration(state, v)
            }
            StoreAction::SetMhrTransferDate(v) => mutate_mhr_transfer_date(state, v),
            StoreAction::SetMhrTransferOwnLand(v) => mutate_mhr_transfer_own_land(state, v),
            StoreAction::SetMhrTransferSubmittingParty(v) => {
                mutate_mhr_transfer_submitting_party(state, v)
            }
            StoreAction::SetMhrTransferAttentionReference(v) => {
                mutate_mhr_transfer_attention_reference(state, v)
            }
            StoreAction::SetCourtOrderInformation(v) => mutate_court_order_information(state, v),
        }

        // No subscribers is fine.
        let _ = self.changes.send(StoreChange { action: name });
    }

    pub fn reset_mhr_transfer(&mut self) {
        debug!("resetting mhr transfer state");
        self.state.state_model.mhr_transfer = MhrTransferState::default();
        let _ = self.changes.send(StoreChange {
            action: "reset_mhr_transfer",
        });
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
