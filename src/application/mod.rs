// Application layer - Metric pipeline and use cases
pub mod deriver;
pub mod normalizer;
pub mod performance_backend;
pub mod performance_service;
pub mod sequencer;
