// Application state for HTTP handlers
use crate::application::performance_service::PerformanceService;

#[derive(Clone)]
pub struct AppState {
    pub performance_service: PerformanceService,
}
