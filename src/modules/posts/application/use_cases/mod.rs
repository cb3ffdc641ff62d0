pub mod comment_on_post;
pub mod create_post;
pub mod delete_post;
pub mod get_comments;
pub mod get_post;
pub mod get_posts;
pub mod post_use_cases;
pub mod toggle_like;
pub mod update_post;

pub use post_use_cases::PostUseCases;
