//! Parent-side glue that folds court order events back into the store.

use mhr_shared::protocol::StoreAction;

use crate::{court_order::CourtOrderEvent, store::Store};

/// Commits `DataChanged` to the store. Returns the validity carried by
/// `ValidityChanged`, `None` for data events.
pub fn commit_court_order_event(store: &mut Store, event: CourtOrderEvent) -> Option<bool> {
    match event {
        CourtOrderEvent::DataChanged(info) => {
            store.dispatch(StoreAction::SetCourtOrderInformation(info));
            None
        }
        CourtOrderEvent::ValidityChanged(valid) => Some(valid),
    }
}

/// Parses the declared value text the way the transfer form accepts it:
/// optional `$`, thousands separators, surrounding whitespace.
pub fn parse_declared_value(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court_order::{CourtOrderEditor, CourtOrderField};
    use mhr_shared::domain::CourtOrderInfo;

    #[test]
    fn data_events_are_committed_and_validity_is_returned() {
        let mut store = Store::default();
        let mut editor = CourtOrderEditor::new(store.court_order_information().clone());
        let mut rx = editor.subscribe();

        editor.set_value(CourtOrderField::CourtName, "Provincial Court");

        let mut validity = None;
        while let Ok(event) = rx.try_recv() {
            if let Some(valid) = commit_court_order_event(&mut store, event) {
                validity = Some(valid);
            }
        }

        assert_eq!(validity, Some(false));
        assert_eq!(
            store.court_order_information(),
            &CourtOrderInfo {
                court_name: "Provincial Court".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn declared_value_accepts_currency_text() {
        assert_eq!(parse_declared_value("$125,000.50"), Some(125000.5));
        assert_eq!(parse_declared_value(" 0 "), Some(0.0));
        assert_eq!(parse_declared_value(""), None);
        assert_eq!(parse_declared_value("abc"), None);
        assert_eq!(parse_declared_value("-5"), None);
    }
}
