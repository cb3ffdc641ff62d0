mod approve_alumni;
mod delete_user;
mod get_admin_jobs;
mod get_admin_posts;
mod get_admin_stats;
mod get_pending_alumni;
mod get_users;
mod moderate_post;
mod reject_alumni;
mod reject_job;
mod verify_job;

pub use approve_alumni::approve_alumni_handler;
pub use delete_user::delete_user_handler;
pub use get_admin_jobs::get_admin_jobs_handler;
pub use get_admin_posts::get_admin_posts_handler;
pub use get_admin_stats::get_admin_stats_handler;
pub use get_pending_alumni::get_pending_alumni_handler;
pub use get_users::get_users_handler;
pub use moderate_post::moderate_post_handler;
pub use reject_alumni::reject_alumni_handler;
pub use reject_job::reject_job_handler;
pub use verify_job::verify_job_handler;
