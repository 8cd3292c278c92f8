//! Controller layer: UI events and reducer-like state transitions over the store.

pub mod events;
pub mod orchestration;
