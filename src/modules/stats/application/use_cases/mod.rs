pub mod dashboard_stats;
pub mod stats_use_cases;

pub use stats_use_cases::StatsUseCases;
