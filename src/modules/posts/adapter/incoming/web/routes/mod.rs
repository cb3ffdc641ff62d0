mod add_comment;
mod create_post;
mod delete_post;
mod get_comments;
mod get_post;
mod get_posts;
mod toggle_like;
mod update_post;

pub use add_comment::add_comment_handler;
pub use create_post::create_post_handler;
pub use delete_post::delete_post_handler;
pub use get_comments::get_comments_handler;
pub use get_post::get_post_handler;
pub use get_posts::get_posts_handler;
pub use toggle_like::toggle_like_handler;
pub use update_post::update_post_handler;
