//! Client-side state and forms for manufactured home registration transfers.

pub mod config;
pub mod court_order;
pub mod forms;
pub mod store;

pub use court_order::{
    mount_court_order, CourtOrderDisplay, CourtOrderEditor, CourtOrderEvent, CourtOrderField,
    CourtOrderSummary,
};
pub use store::{AppState, StateModel, Store, StoreChange};
