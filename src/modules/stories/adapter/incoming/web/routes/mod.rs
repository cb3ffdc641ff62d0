mod create_story;
mod delete_story;
mod get_stories;

pub use create_story::create_story_handler;
pub use delete_story::delete_story_handler;
pub use get_stories::get_stories_handler;
