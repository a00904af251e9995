//! # MongoDB 게시글 데이터 소스
//!
//! `posts` 컬렉션에 대한 [`PostDataSource`] 구현입니다.
//!
//! 댓글 추가는 `$push`, 삭제는 `$pull`로 처리합니다.
//! 좋아요 추가는 `likes.user_id` 조건을 필터에 넣어, 같은 사용자의 좋아요가
//! 이미 있으면 문서가 매칭되지 않도록 합니다. 동시 요청에서도 사용자당 하나만 남습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId, to_bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::datasources::posts::PostDataSource;
use crate::db::{Database, POSTS_COLLECTION};
use crate::domain::dto::{PostCommentDto, PostDto, PostLikeDto, PostOwnerDto};
use crate::utils::id_utils::{parse_object_id, try_parse_object_id};

/// MongoDB 기반 게시글 데이터 소스
pub struct MongoPostDataSource {
    db: Arc<Database>,
}

impl MongoPostDataSource {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<PostDto> {
        self.db.collection::<PostDto>(POSTS_COLLECTION)
    }
}

/// 좋아요 추가 대상 필터. 같은 사용자의 좋아요가 이미 있으면 매칭되지 않습니다.
fn like_filter(post_id: ObjectId, user_id: &str) -> Document {
    doc! { "_id": post_id, "likes.user_id": { "$ne": user_id } }
}

#[async_trait]
impl PostDataSource for MongoPostDataSource {
    async fn create(&self, mut post: PostDto) -> AppResult<Option<PostDto>> {
        let result = self.collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let Some(inserted_id) = result.inserted_id.as_object_id() else {
            return Ok(None);
        };
        post.id = Some(inserted_id);

        info!("Post created: {} by {}", inserted_id.to_hex(), post.owner.user_id);

        Ok(Some(post))
    }

    async fn get_all(&self) -> AppResult<Vec<PostDto>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn get_by_id(&self, post_id: &str) -> AppResult<Option<PostDto>> {
        let Some(object_id) = try_parse_object_id(post_id) else {
            debug!("Malformed post id looked up: {}", post_id);
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create_comment(
        &self,
        post_id: &str,
        comment: PostCommentDto,
    ) -> AppResult<Option<PostDto>> {
        let object_id = parse_object_id(post_id)?;
        let comment = to_bson(&comment).context("댓글 직렬화 실패")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$push": { "comments": comment } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn get_comment(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> AppResult<Option<PostCommentDto>> {
        let Some(comment_object_id) = try_parse_object_id(comment_id) else {
            return Ok(None);
        };

        let post = self.get_by_id(post_id).await?;

        Ok(post.and_then(|post| post.find_comment(&comment_object_id).cloned()))
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> AppResult<()> {
        let post_object_id = parse_object_id(post_id)?;
        let comment_object_id = parse_object_id(comment_id)?;

        let result = self.collection()
            .update_one(
                doc! { "_id": post_object_id },
                doc! { "$pull": { "comments": { "_id": comment_object_id } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("Comment {} removed from post {}: {}", comment_id, post_id, result.modified_count > 0);

        Ok(())
    }

    async fn get_like_by_owner_id(
        &self,
        post_id: &str,
        owner_id: &str,
    ) -> AppResult<Option<PostLikeDto>> {
        let post = self.get_by_id(post_id).await?;

        Ok(post.and_then(|post| post.find_like_by_owner_id(owner_id).cloned()))
    }

    async fn like(&self, post_id: &str, owner: PostOwnerDto) -> AppResult<Option<PostDto>> {
        let object_id = parse_object_id(post_id)?;
        let like = to_bson(&owner).context("좋아요 직렬화 실패")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let liked = self.collection()
            .find_one_and_update(
                like_filter(object_id, &owner.user_id),
                doc! { "$push": { "likes": like } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match liked {
            Some(post) => Ok(Some(post)),
            None => {
                // 이미 좋아요가 있거나 게시글이 없음
                debug!("Post {} already liked by {} or missing", post_id, owner.user_id);
                self.get_by_id(post_id).await
            }
        }
    }

    async fn dislike(&self, post_id: &str, user_id: &str) -> AppResult<()> {
        let object_id = parse_object_id(post_id)?;

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$pull": { "likes": { "user_id": user_id } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_id(&self, post_id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(post_id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "owner.user_id": 1 })
            .options(IndexOptions::builder()
                .name("owner_user_id".to_string())
                .build())
            .build();

        let likes_index = IndexModel::builder()
            .keys(doc! { "likes.user_id": 1 })
            .options(IndexOptions::builder()
                .name("likes_user_id".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([owner_index, likes_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
