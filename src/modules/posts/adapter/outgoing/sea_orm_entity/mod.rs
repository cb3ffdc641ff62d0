pub mod comments;
pub mod post_likes;
pub mod posts;
