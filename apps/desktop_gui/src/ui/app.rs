use eframe::egui;
use mhr_client_core::{
    court_order::ElementKind, forms::parse_declared_value, mount_court_order, CourtOrderDisplay,
    CourtOrderEvent, CourtOrderField, Store, StoreChange,
};
use mhr_shared::{domain::PersonName, protocol::StoreAction};
use tokio::sync::broadcast::Receiver;

use crate::controller::{
    events::{drain_into, UiError, UiErrorContext, UiEvent},
    orchestration::{apply_ui_event, ReviewState},
};

const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(212, 53, 28);

pub struct TransferApp {
    store: Store,
    store_rx: Receiver<StoreChange>,
    court_order: Box<dyn CourtOrderDisplay>,
    court_order_rx: Option<Receiver<CourtOrderEvent>>,
    review: ReviewState,
    declared_value_input: String,
}

impl TransferApp {
    pub fn new(store: Store, summary: bool) -> Self {
        let store_rx = store.subscribe_changes();
        let declared_value_input = format_declared_value(store.mhr_transfer().declared_value);
        let mut app = Self {
            court_order: mount_court_order(&store, summary),
            court_order_rx: None,
            store,
            store_rx,
            review: ReviewState::default(),
            declared_value_input,
        };
        app.court_order_rx = app.court_order.as_editor().map(|editor| editor.subscribe());
        app.review.court_order_valid = app
            .court_order
            .as_editor()
            .is_some_and(|editor| editor.is_valid());
        app
    }

    /// Mode is fixed per mount, so switching means mounting a fresh form.
    fn remount_court_order(&mut self, summary: bool) {
        self.court_order = mount_court_order(&self.store, summary);
        self.court_order_rx = self
            .court_order
            .as_editor()
            .map(|editor| editor.subscribe());
    }

    fn process_ui_events(&mut self) {
        let mut events = Vec::new();
        if let Some(rx) = self.court_order_rx.as_mut() {
            drain_into(rx, UiEvent::CourtOrder, &mut events);
        }
        drain_into(&mut self.store_rx, UiEvent::StoreChanged, &mut events);

        for event in events {
            apply_ui_event(&mut self.store, &mut self.review, event);
        }
    }

    fn show_transfer_details(&mut self, ui: &mut egui::Ui) {
        ui.heading("Transfer Details");
        ui.add_space(6.0);

        ui.label("Declared Value");
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.declared_value_input)
                .id_salt("declared-value")
                .hint_text("$0.00"),
        );
        if response.changed() {
            match parse_declared_value(&self.declared_value_input) {
                Some(value) => {
                    self.review.status.clear();
                    self.store
                        .dispatch(StoreAction::SetMhrTransferDeclaredValue(value));
                }
                None => apply_ui_event(
                    &mut self.store,
                    &mut self.review,
                    UiEvent::Error(UiError::new(
                        UiErrorContext::DeclaredValue,
                        "Enter the declared value as a dollar amount",
                    )),
                ),
            }
        }

        let transfer = self.store.mhr_transfer().clone();

        let mut consideration = transfer.consideration.clone();
        ui.label("Consideration");
        if ui
            .add(egui::TextEdit::singleline(&mut consideration).id_salt("consideration"))
            .changed()
        {
            self.store
                .dispatch(StoreAction::SetMhrTransferConsideration(consideration));
        }

        let mut transfer_date = transfer.transfer_date.clone();
        ui.label("Date of Execution");
        if ui
            .add(
                egui::TextEdit::singleline(&mut transfer_date)
                    .id_salt("transfer-date")
                    .hint_text("YYYY-MM-DD"),
            )
            .changed()
        {
            self.store
                .dispatch(StoreAction::SetMhrTransferDate(transfer_date));
        }

        let mut own_land = transfer.own_land;
        if ui
            .checkbox(&mut own_land, "The manufactured home is on land the owners own")
            .changed()
        {
            self.store
                .dispatch(StoreAction::SetMhrTransferOwnLand(own_land));
        }

        ui.separator();
        ui.strong("Submitting Party");

        let mut party = transfer.submitting_party.clone();
        let mut business_name = party.business_name.clone().unwrap_or_default();
        let mut person = party.person_name.clone().unwrap_or_default();
        let mut changed = false;

        ui.label("Business Name");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut business_name).id_salt("submitting-business"))
            .changed();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("First Name");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut person.first).id_salt("submitting-first"))
                    .changed();
            });
            ui.vertical(|ui| {
                ui.label("Last Name");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut person.last).id_salt("submitting-last"))
                    .changed();
            });
        });
        ui.label("Email Address");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut party.email_address).id_salt("submitting-email"))
            .changed();
        ui.label("Phone Number");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut party.phone_number).id_salt("submitting-phone"))
            .changed();

        if changed {
            party.business_name = (!business_name.trim().is_empty()).then_some(business_name);
            party.person_name = person_name_from_input(person);
            self.store
                .dispatch(StoreAction::SetMhrTransferSubmittingParty(party));
        }

        let submitting_as = self.store.mhr_transfer().submitting_party.display_name();
        if !submitting_as.is_empty() {
            ui.weak(format!("Submitting as {submitting_as}"));
        }

        let mut attention = transfer.attention_reference.clone();
        ui.label("Attention or Reference Number");
        if ui
            .add(egui::TextEdit::singleline(&mut attention).id_salt("attention-reference"))
            .changed()
        {
            self.store
                .dispatch(StoreAction::SetMhrTransferAttentionReference(attention));
        }
    }

    fn show_court_order(&mut self, ui: &mut egui::Ui) {
        ui.heading("Court Order");
        ui.add_space(6.0);

        for element in self.court_order.render() {
            ui.label(element.label);
            match &element.kind {
                ElementKind::Display { text } => {
                    ui.strong(text.as_str());
                }
                ElementKind::TextInput { value, messages }
                | ElementKind::DateInput { value, messages }
                | ElementKind::TextArea { value, messages } => {
                    let mut buffer = value.clone();
                    let edit = if matches!(element.kind, ElementKind::TextArea { .. }) {
                        egui::TextEdit::multiline(&mut buffer).desired_rows(3)
                    } else {
                        egui::TextEdit::singleline(&mut buffer)
                    };
                    let response = ui.add(edit.id_salt(element.id).desired_width(f32::INFINITY));
                    if response.changed() {
                        if let (Some(field), Some(editor)) = (
                            CourtOrderField::from_input_id(element.id),
                            self.court_order.as_editor_mut(),
                        ) {
                            editor.set_value(field, buffer);
                        }
                    }
                    for message in messages {
                        ui.colored_label(ERROR_TEXT, message.as_str());
                    }
                }
            }
            ui.add_space(4.0);
        }
    }

    fn show_review_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.court_order.is_summary() {
                if ui.button("Back to Edit").clicked() {
                    self.remount_court_order(false);
                }
            } else if ui.button("Review and Confirm").clicked() {
                if self.review.court_order_valid {
                    self.remount_court_order(true);
                } else if let Some(editor) = self.court_order.as_editor_mut() {
                    editor.set_show_errors(true);
                    self.review.status = "Complete the court order before review".into();
                }
            }

            if ui.button("Copy Draft JSON").clicked() {
                match serde_json::to_string_pretty(self.store.state()) {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        self.review.status = "Draft copied to clipboard".into();
                    }
                    Err(err) => self.review.status = format!("Could not serialize draft: {err}"),
                }
            }

            if ui.button("New Transfer").clicked() {
                self.store.reset_mhr_transfer();
                self.declared_value_input.clear();
            }

            ui.separator();
            ui.label(format!("{} edits", self.review.pending_changes));
            if !self.review.status.is_empty() {
                ui.label(self.review.status.as_str());
            }
        });
    }
}

impl eframe::App for TransferApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("review_bar").show(ctx, |ui| self.show_review_bar(ui));
        egui::SidePanel::left("transfer_details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.show_transfer_details(ui));
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.show_court_order(ui));
        });
    }
}

/// All-blank name parts mean no person name at all.
pub fn person_name_from_input(person: PersonName) -> Option<PersonName> {
    let blank = person.first.trim().is_empty()
        && person.middle.trim().is_empty()
        && person.last.trim().is_empty();
    (!blank).then_some(person)
}

pub fn format_declared_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{value:.2}")
    }
}
