//! Court order sub-form: editable and summary variants behind [`CourtOrderDisplay`].

use mhr_shared::domain::CourtOrderInfo;
use tracing::info;

use crate::store::Store;

pub mod date;
mod editor;
pub mod field;
mod summary;
pub mod validation;
pub mod view;

pub use editor::CourtOrderEditor;
pub use field::CourtOrderField;
pub use summary::CourtOrderSummary;
pub use view::{ElementKind, RenderedElement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourtOrderEvent {
    DataChanged(CourtOrderInfo),
    ValidityChanged(bool),
}

pub trait CourtOrderDisplay {
    fn render(&self) -> Vec<RenderedElement>;

    fn is_summary(&self) -> bool;

    fn find(&self, id: &str) -> Option<RenderedElement> {
        self.render().into_iter().find(|element| element.id == id)
    }

    /// Visible messages across all controls, in form order.
    fn messages(&self) -> Vec<String> {
        self.render()
            .iter()
            .flat_map(|element| element.messages().to_vec())
            .collect()
    }

    fn as_editor(&self) -> Option<&CourtOrderEditor> {
        None
    }

    fn as_editor_mut(&mut self) -> Option<&mut CourtOrderEditor> {
        None
    }
}

/// Picks the variant once; it never changes for the life of the returned value.
pub fn mount_court_order(store: &Store, summary: bool) -> Box<dyn CourtOrderDisplay> {
    let info = store.court_order_information().clone();
    info!(summary, "mounting court order form");
    if summary {
        Box::new(CourtOrderSummary::new(info))
    } else {
        Box::new(CourtOrderEditor::new(info))
    }
}

#[cfg(test)]
#[path = "tests/court_order_tests.rs"]
mod tests;
