//! 게시글 데이터 소스
//!
//! 게시글과 그 안에 포함된 댓글, 좋아요에 대한 원시 연산입니다.
//! 댓글과 좋아요는 게시글 문서의 배열 필드이므로 모든 연산이 `posts` 컬렉션
//! 하나에서 이루어집니다.

pub mod post_datasource;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::dto::{PostCommentDto, PostDto, PostLikeDto, PostOwnerDto};

/// 게시글 문서 저장소 계약
///
/// 형식이 잘못된 ID로 조회하면 `Ok(None)`, 잘못된 ID로 변경하면
/// `AppError::ValidationError`입니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostDataSource: Send + Sync {
    /// 게시글을 저장하고 저장된 문서를 반환합니다.
    async fn create(&self, post: PostDto) -> AppResult<Option<PostDto>>;

    /// 전체 게시글 (최신순)
    async fn get_all(&self) -> AppResult<Vec<PostDto>>;

    async fn get_by_id(&self, post_id: &str) -> AppResult<Option<PostDto>>;

    /// 댓글을 게시글 끝에 추가하고 변경 후 게시글을 반환합니다.
    /// 게시글이 없으면 `Ok(None)`입니다.
    async fn create_comment(
        &self,
        post_id: &str,
        comment: PostCommentDto,
    ) -> AppResult<Option<PostDto>>;

    async fn get_comment(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> AppResult<Option<PostCommentDto>>;

    /// 댓글을 제거합니다. 대상이 없어도 성공입니다.
    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> AppResult<()>;

    async fn get_like_by_owner_id(
        &self,
        post_id: &str,
        owner_id: &str,
    ) -> AppResult<Option<PostLikeDto>>;

    /// 좋아요를 추가합니다.
    ///
    /// 같은 사용자의 좋아요가 이미 있으면 아무것도 바꾸지 않습니다.
    /// 좋아요가 추가되면 추가 직후의 게시글을 반환합니다. 이미 좋아요가 있던 경우는
    /// 게시글을 다시 읽어 반환하므로, 그 사이의 다른 변경이 반영될 수 있습니다.
    /// 게시글이 없으면 `Ok(None)`입니다.
    async fn like(&self, post_id: &str, owner: PostOwnerDto) -> AppResult<Option<PostDto>>;

    /// 해당 사용자의 좋아요를 제거합니다. 좋아요가 없어도 성공입니다.
    async fn dislike(&self, post_id: &str, user_id: &str) -> AppResult<()>;

    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    async fn delete_by_id(&self, post_id: &str) -> AppResult<bool>;

    async fn create_indexes(&self) -> AppResult<()>;
}
