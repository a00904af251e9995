//! # 게시글 서비스 구현
//!
//! 게시글, 댓글, 좋아요 연산을 제공합니다. 각 연산은 도메인 모델을 받아
//! 매퍼로 저장 형태로 바꾼 뒤 데이터 소스를 호출하고, 결과를 다시 도메인 모델로
//! 돌려줍니다.
//!
//! 데이터 소스 에러는 변환 없이 그대로 전파됩니다.

use std::sync::Arc;
use log::{debug, info};
use crate::core::errors::AppResult;
use crate::datasources::PostDataSource;
use crate::domain::dto::PostOwnerDto;
use crate::domain::factories::{post_comment_factory, post_factory};
use crate::domain::models::{
    PostCommentDomainModel, PostDomainModel, PostLikeOwnerDomainModel, PostOwnerDomainModel,
};
use crate::utils::string_utils::validate_required_string;

/// 게시글 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let post_service = PostService::new(Arc::new(MongoPostDataSource::new(database)));
///
/// let post = post_service.create_post(owner.clone(), "Hello").await?;
/// let liked = post_service.like_post(&post_id, owner).await?;
/// ```
pub struct PostService {
    post_data_source: Arc<dyn PostDataSource>,
}

impl PostService {
    pub fn new(post_data_source: Arc<dyn PostDataSource>) -> Self {
        Self { post_data_source }
    }

    /// 게시글 작성
    ///
    /// 댓글과 좋아요가 비어 있는 게시글을 저장합니다. 본문은 앞뒤 공백이 제거됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문이 비어 있음
    pub async fn create_post(
        &self,
        owner: PostOwnerDomainModel,
        body: &str,
    ) -> AppResult<Option<PostDomainModel>> {
        let body = validate_required_string(body, "게시글 본문")?;

        let post = self.post_data_source
            .create(post_factory(PostOwnerDto::from(owner), body))
            .await?;

        if let Some(id) = post.as_ref().and_then(|post| post.id_string()) {
            info!("Post created: {}", id);
        }

        Ok(post.map(PostDomainModel::from))
    }

    /// 댓글 작성
    ///
    /// 댓글은 게시글의 댓글 목록 끝에 추가되며, 변경 후 게시글을 반환합니다.
    /// 게시글이 없으면 `None`입니다.
    pub async fn create_post_comment(
        &self,
        post_id: &str,
        body: &str,
        owner: PostOwnerDomainModel,
    ) -> AppResult<Option<PostDomainModel>> {
        let body = validate_required_string(body, "댓글 본문")?;
        let comment = post_comment_factory(PostOwnerDto::from(owner), body);

        let post = self.post_data_source.create_comment(post_id, comment).await?;

        debug!("Comment added to post {}: {}", post_id, post.is_some());

        Ok(post.map(PostDomainModel::from))
    }

    /// 전체 게시글 (최신순). 게시글이 없으면 빈 목록입니다.
    pub async fn get_posts(&self) -> AppResult<Vec<PostDomainModel>> {
        let posts = self.post_data_source.get_all().await?;

        Ok(posts.into_iter().map(PostDomainModel::from).collect())
    }

    pub async fn get_post_by_id(&self, post_id: &str) -> AppResult<Option<PostDomainModel>> {
        let post = self.post_data_source.get_by_id(post_id).await?;

        Ok(post.map(PostDomainModel::from))
    }

    pub async fn get_post_comment(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> AppResult<Option<PostCommentDomainModel>> {
        let comment = self.post_data_source.get_comment(post_id, comment_id).await?;

        Ok(comment.map(PostCommentDomainModel::from))
    }

    /// 해당 사용자가 누른 좋아요 조회
    pub async fn get_post_like_by_owner_id(
        &self,
        post_id: &str,
        owner_id: &str,
    ) -> AppResult<Option<PostLikeOwnerDomainModel>> {
        let like = self.post_data_source.get_like_by_owner_id(post_id, owner_id).await?;

        Ok(like.map(PostLikeOwnerDomainModel::from))
    }

    /// 댓글 삭제. 댓글이 없어도 성공합니다.
    pub async fn delete_post_comment(&self, post_id: &str, comment_id: &str) -> AppResult<()> {
        self.post_data_source.delete_comment(post_id, comment_id).await?;

        debug!("Comment {} deleted from post {}", comment_id, post_id);

        Ok(())
    }

    /// 좋아요
    ///
    /// 이미 좋아요를 누른 사용자가 다시 호출해도 좋아요는 하나만 남습니다.
    pub async fn like_post(
        &self,
        post_id: &str,
        owner: PostLikeOwnerDomainModel,
    ) -> AppResult<Option<PostDomainModel>> {
        let post = self.post_data_source
            .like(post_id, PostOwnerDto::from(owner))
            .await?;

        Ok(post.map(PostDomainModel::from))
    }

    /// 좋아요 취소. 좋아요를 누르지 않은 사용자여도 성공합니다.
    pub async fn dislike_post(&self, post_id: &str, user_id: &str) -> AppResult<()> {
        self.post_data_source.dislike(post_id, user_id).await
    }

    /// 게시글 삭제. 삭제된 게시글이 있으면 `true`입니다.
    pub async fn delete_post(&self, post_id: &str) -> AppResult<bool> {
        let deleted = self.post_data_source.delete_by_id(post_id).await?;

        if deleted {
            info!("Post deleted: {}", post_id);
        }

        Ok(deleted)
    }
}
