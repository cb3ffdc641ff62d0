use std::sync::Arc;

use super::create_story::ICreateStoryUseCase;
use super::delete_story::IDeleteStoryUseCase;
use super::get_stories::IGetStoriesUseCase;

#[derive(Clone)]
pub struct StoryUseCases {
    pub create: Arc<dyn ICreateStoryUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetStoriesUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteStoryUseCase + Send + Sync>,
}
