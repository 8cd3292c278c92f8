use serde::{Deserialize, Serialize};

use crate::{
    domain::{CourtOrderInfo, SubmittingParty},
    error::DraftError,
};

/// A single store update. Each variant maps onto exactly one state write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreAction {
    SetMhrTransferDeclaredValue(f64),
    SetMhrTransferConsideration(String),
    SetMhrTransferDate(String),
    SetMhrTransferOwnLand(bool),
    SetMhrTransferSubmittingParty(SubmittingParty),
    SetMhrTransferAttentionReference(String),
    SetCourtOrderInformation(CourtOrderInfo),
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::SetMhrTransferDeclaredValue(_) => "set_mhr_transfer_declared_value",
            StoreAction::SetMhrTransferConsideration(_) => "set_mhr_transfer_consideration",
            StoreAction::SetMhrTransferDate(_) => "set_mhr_transfer_date",
            StoreAction::SetMhrTransferOwnLand(_) => "set_mhr_transfer_own_land",
            StoreAction::SetMhrTransferSubmittingParty(_) => "set_mhr_transfer_submitting_party",
            StoreAction::SetMhrTransferAttentionReference(_) => {
                "set_mhr_transfer_attention_reference"
            }
            StoreAction::SetCourtOrderInformation(_) => "set_court_order_information",
        }
    }
}

pub fn parse_action_log(raw: &str) -> Result<Vec<StoreAction>, DraftError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn parse_court_order(raw: &str) -> Result<CourtOrderInfo, DraftError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_log_parses_tagged_payloads() {
        let raw = r#"[
            {"type": "set_mhr_transfer_declared_value", "payload": 1500.5},
            {"type": "set_mhr_transfer_own_land", "payload": true},
            {"type": "set_court_order_information", "payload": {
                "courtName": "ABC", "courtRegistry": "123", "orderDate": "2021-10-07",
                "fileNumber": "DEF", "effectOfOrder": "Good"
            }}
        ]"#;

        let actions = parse_action_log(raw).expect("action log");
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], StoreAction::SetMhrTransferDeclaredValue(1500.5));
        assert_eq!(actions[1].name(), "set_mhr_transfer_own_land");
        match &actions[2] {
            StoreAction::SetCourtOrderInformation(info) => assert_eq!(info.court_name, "ABC"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn malformed_action_log_is_reported() {
        let err = parse_action_log(r#"[{"type": "launch_rockets"}]"#).expect_err("unknown tag");
        assert!(matches!(err, DraftError::Malformed(_)));
    }
}
