//! Single-field writers for the transfer subtree. Callers validate; these only assign.

use mhr_shared::domain::{CourtOrderInfo, SubmittingParty};

use super::AppState;

pub fn mutate_mhr_transfer_declared_value(state: &mut AppState, declared_value: f64) {
    state.state_model.mhr_transfer.declared_value = declared_value;
}

pub fn mutate_mhr_transfer_consideration(state: &mut AppState, consideration: String) {
    state.state_model.mhr_transfer.consideration = consideration;
}

pub fn mutate_mhr_transfer_date(state: &mut AppState, transfer_date: String) {
    state.state_model.mhr_transfer.transfer_date = transfer_date;
}

pub fn mutate_mhr_transfer_own_land(state: &mut AppState, is_own_land: bool) {
    state.state_model.mhr_transfer.own_land = is_own_land;
}

pub fn mutate_mhr_transfer_submitting_party(
    state: &mut AppState,
    submitting_party: SubmittingParty,
) {
    state.state_model.mhr_transfer.submitting_party = submitting_party;
}

pub fn mutate_mhr_transfer_attention_reference(state: &mut AppState, attention_reference: String) {
    state.state_model.mhr_transfer.attention_reference = attention_reference;
}

pub fn mutate_court_order_information(state: &mut AppState, info: CourtOrderInfo) {
    state.state_model.court_order_information = info;
}
