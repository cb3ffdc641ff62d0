pub mod admin;
pub mod auth;
pub mod donations;
pub mod events;
pub mod jobs;
pub mod media;
pub mod posts;
pub mod profiles;
pub mod stats;
pub mod stories;
