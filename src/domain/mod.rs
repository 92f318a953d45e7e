// Domain layer - Records and display-ready metrics, no I/O
pub mod daily;
pub mod dashboard;
pub mod member;
pub mod metrics;
pub mod race;
pub mod ranking;
pub mod user;
