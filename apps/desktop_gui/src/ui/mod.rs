//! UI layer: app shell and panels.

pub mod app;

pub use app::TransferApp;
