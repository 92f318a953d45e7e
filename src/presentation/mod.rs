// Presentation layer - JSON API consumed by the dashboard
pub mod app_state;
pub mod error;
pub mod handlers;
