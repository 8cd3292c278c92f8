use std::{fs, path::Path};

mod controller;
mod ui;

use eframe::egui;
use mhr_client_core::{config::load_settings, AppState, Store};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::ui::TransferApp;

fn load_draft(path: &Path) -> Result<AppState, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read draft {}: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid draft {}: {err}", path.display()))
}

fn main() -> eframe::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let state = match settings.draft_path.as_deref() {
        Some(path) => match load_draft(path) {
            Ok(state) => {
                info!("seeded store from {}", path.display());
                state
            }
            Err(err) => {
                warn!("{err}; starting with an empty transfer");
                AppState::default()
            }
        },
        None => AppState::default(),
    };
    let summary = settings.summary_mode;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Manufactured Home Transfer")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Manufactured Home Transfer",
        options,
        Box::new(move |_cc| Ok(Box::new(TransferApp::new(Store::new(state), summary)))),
    )
}

#[cfg(test)]
mod tests {
    use super::load_draft;
    use crate::controller::{
        events::{drain_into, UiError, UiErrorContext, UiEvent},
        orchestration::{apply_ui_event, ReviewState},
    };
    use crate::ui::app::{format_declared_value, person_name_from_input};
    use mhr_shared::domain::{PersonName, SubmittingParty};
    use mhr_client_core::{CourtOrderEditor, CourtOrderEvent, CourtOrderField, Store};
    use mhr_shared::protocol::StoreAction;
    use std::path::Path;

    #[test]
    fn court_order_events_commit_into_store_and_track_validity() {
        let mut store = Store::default();
        let mut review = ReviewState::default();
        let mut editor = CourtOrderEditor::new(store.court_order_information().clone());
        let mut rx = editor.subscribe();

        editor.set_value(CourtOrderField::CourtName, "Supreme Court");
        editor.set_value(CourtOrderField::CourtRegistry, "Vancouver");
        editor.set_value(CourtOrderField::FileNumber, "S-1234");
        editor.set_value(CourtOrderField::OrderDate, "2022-03-04");

        let mut events = Vec::new();
        drain_into(&mut rx, UiEvent::CourtOrder, &mut events);
        assert_eq!(events.len(), 8);
        for event in events {
            apply_ui_event(&mut store, &mut review, event);
        }

        assert!(review.court_order_valid);
        assert_eq!(store.court_order_information(), editor.info());
    }

    #[test]
    fn store_changes_are_counted() {
        let mut store = Store::default();
        let mut review = ReviewState::default();
        let mut rx = store.subscribe_changes();

        store.dispatch(StoreAction::SetMhrTransferOwnLand(true));
        store.dispatch(StoreAction::SetMhrTransferConsideration("Gift".into()));

        let mut events = Vec::new();
        drain_into(&mut rx, UiEvent::StoreChanged, &mut events);
        for event in events {
            apply_ui_event(&mut store, &mut review, event);
        }
        assert_eq!(review.pending_changes, 2);
    }

    #[test]
    fn errors_surface_in_status() {
        let mut store = Store::default();
        let mut review = ReviewState::default();
        apply_ui_event(
            &mut store,
            &mut review,
            UiEvent::Error(UiError::new(UiErrorContext::DeclaredValue, "bad amount")),
        );
        assert_eq!(review.status, "bad amount");
    }

    #[test]
    fn validity_event_alone_leaves_store_untouched() {
        let mut store = Store::default();
        let mut review = ReviewState::default();
        apply_ui_event(
            &mut store,
            &mut review,
            UiEvent::CourtOrder(CourtOrderEvent::ValidityChanged(true)),
        );
        assert!(review.court_order_valid);
        assert_eq!(store.court_order_information().court_name, "");
    }

    #[test]
    fn declared_value_formats_for_input() {
        assert_eq!(format_declared_value(0.0), "");
        assert_eq!(format_declared_value(1500.5), "1500.50");
    }

    #[test]
    fn person_name_inputs_replace_submitting_party_wholesale() {
        let mut store = Store::default();
        let person = person_name_from_input(PersonName {
            first: "Donna".into(),
            middle: String::new(),
            last: "Iverson".into(),
        });
        store.dispatch(StoreAction::SetMhrTransferSubmittingParty(SubmittingParty {
            person_name: person,
            ..Default::default()
        }));
        assert_eq!(
            store.mhr_transfer().submitting_party.display_name(),
            "Donna Iverson"
        );

        assert_eq!(person_name_from_input(PersonName::default()), None);
        assert_eq!(
            person_name_from_input(PersonName {
                first: "  ".into(),
                middle: String::new(),
                last: " ".into(),
            }),
            None
        );
    }

    #[test]
    fn missing_draft_reports_path() {
        let err = load_draft(Path::new("/nonexistent/draft.json")).expect_err("missing draft");
        assert!(err.contains("/nonexistent/draft.json"));
    }
}
