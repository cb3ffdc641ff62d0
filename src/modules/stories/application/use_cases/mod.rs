pub mod create_story;
pub mod delete_story;
pub mod get_stories;
pub mod story_use_cases;

pub use story_use_cases::StoryUseCases;
