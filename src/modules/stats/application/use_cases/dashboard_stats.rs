use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::donations::application::ports::outgoing::donation_query::DonationQuery;
use crate::modules::events::application::ports::outgoing::event_query::EventQuery;
use crate::modules::jobs::application::ports::outgoing::job_query::JobQuery;

/// Headline numbers for the landing dashboard, one concurrent gather per
/// request. Jobs only count once verified; events count regardless of date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_alumni: u64,
    pub upcoming_events: u64,
    pub active_jobs: u64,
    pub donations: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardStatsError {
    #[error("Query error: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, DashboardStatsError>;
}

pub struct DashboardStatsService<U, E, J, D>
where
    U: UserQuery,
    E: EventQuery,
    J: JobQuery,
    D: DonationQuery,
{
    user_query: U,
    event_query: E,
    job_query: J,
    donation_query: D,
}

impl<U, E, J, D> DashboardStatsService<U, E, J, D>
where
    U: UserQuery,
    E: EventQuery,
    J: JobQuery,
    D: DonationQuery,
{
    pub fn new(user_query: U, event_query: E, job_query: J, donation_query: D) -> Self {
        Self {
            user_query,
            event_query,
            job_query,
            donation_query,
        }
    }
}

#[async_trait]
impl<U, E, J, D> IDashboardStatsUseCase for DashboardStatsService<U, E, J, D>
where
    U: UserQuery + Send + Sync,
    E: EventQuery + Send + Sync,
    J: JobQuery + Send + Sync,
    D: DonationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, DashboardStatsError> {
        let (total_alumni, upcoming_events, active_jobs, donations) = tokio::try_join!(
            async {
                self.user_query
                    .count_alumni()
                    .await
                    .map_err(|e| DashboardStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.event_query
                    .count_events()
                    .await
                    .map_err(|e| DashboardStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.job_query
                    .count_verified()
                    .await
                    .map_err(|e| DashboardStatsError::QueryFailed(e.to_string()))
            },
            async {
                self.donation_query
                    .count_donations()
                    .await
                    .map_err(|e| DashboardStatsError::QueryFailed(e.to_string()))
            },
        )?;

        Ok(DashboardStats {
            total_alumni,
            upcoming_events,
            active_jobs,
            donations,
        })
    }
}
