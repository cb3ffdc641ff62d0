use std::sync::Arc;

use super::comment_on_post::ICommentOnPostUseCase;
use super::create_post::ICreatePostUseCase;
use super::delete_post::IDeletePostUseCase;
use super::get_comments::IGetCommentsUseCase;
use super::get_post::IGetPostUseCase;
use super::get_posts::IGetPostsUseCase;
use super::toggle_like::IToggleLikeUseCase;
use super::update_post::IUpdatePostUseCase;

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn IGetPostUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeletePostUseCase + Send + Sync>,
    pub comment: Arc<dyn ICommentOnPostUseCase + Send + Sync>,
    pub get_comments: Arc<dyn IGetCommentsUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn IToggleLikeUseCase + Send + Sync>,
}
