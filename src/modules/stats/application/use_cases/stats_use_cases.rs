use std::sync::Arc;

use super::dashboard_stats::IDashboardStatsUseCase;

#[derive(Clone)]
pub struct StatsUseCases {
    pub dashboard: Arc<dyn IDashboardStatsUseCase + Send + Sync>,
}
