//! 게시글 저장 형태(DTO)
//!
//! `posts` 컬렉션 문서 구조입니다. 댓글(`comments`)과 좋아요(`likes`)는
//! 별도 컬렉션 없이 게시글 문서 안에 포함되므로, 게시글과 함께 생성되고
//! 함께 삭제됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 게시글/댓글/좋아요에 비정규화되어 포함되는 작성자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOwnerDto {
    /// 작성자 사용자 ID (ObjectId 16진수 문자열)
    pub user_id: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// 좋아요는 작성자 정보만 가집니다. 게시글당 `user_id`별로 최대 하나입니다.
pub type PostLikeDto = PostOwnerDto;

/// 게시글에 포함된 댓글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostCommentDto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub body: String,
    pub owner: PostOwnerDto,
}

/// `posts` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub body: String,
    pub owner: PostOwnerDto,
    /// 작성 순서대로 정렬된 댓글
    #[serde(default)]
    pub comments: Vec<PostCommentDto>,
    #[serde(default)]
    pub likes: Vec<PostLikeDto>,
}

impl PostDto {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 댓글 ID로 댓글을 찾습니다.
    pub fn find_comment(&self, comment_id: &ObjectId) -> Option<&PostCommentDto> {
        self.comments
            .iter()
            .find(|comment| comment.id.as_ref() == Some(comment_id))
    }

    /// 해당 사용자의 좋아요를 찾습니다.
    pub fn find_like_by_owner_id(&self, owner_id: &str) -> Option<&PostLikeDto> {
        self.likes.iter().find(|like| like.user_id == owner_id)
    }
}
