use mhr_shared::domain::CourtOrderInfo;

use super::{
    date::display_order_date,
    field::CourtOrderField,
    view::{ElementKind, RenderedElement},
    CourtOrderDisplay,
};

/// Read-only projection of a court order record.
pub struct CourtOrderSummary {
    info: CourtOrderInfo,
}

impl CourtOrderSummary {
    pub fn new(info: CourtOrderInfo) -> Self {
        Self { info }
    }
}

impl CourtOrderDisplay for CourtOrderSummary {
    fn render(&self) -> Vec<RenderedElement> {
        CourtOrderField::ALL
            .into_iter()
            .map(|field| {
                let raw = field.read(&self.info);
                let text = match field {
                    CourtOrderField::OrderDate => display_order_date(raw),
                    _ => raw.to_string(),
                };
                RenderedElement {
                    id: field.display_id(),
                    label: field.label(),
                    kind: ElementKind::Display { text },
                }
            })
            .collect()
    }

    fn is_summary(&self) -> bool {
        true
    }
}
