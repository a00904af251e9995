//! 게시글 도메인 모델

use serde::{Deserialize, Serialize};

/// 게시글 작성자
///
/// 작성 시점의 사용자 표시 정보를 복사해 둔 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOwnerDomainModel {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub avatar: Option<String>,
}

/// 좋아요를 누른 사용자. 작성자와 같은 형태입니다.
pub type PostLikeOwnerDomainModel = PostOwnerDomainModel;

/// 게시글 댓글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostCommentDomainModel {
    pub id: String,
    pub body: String,
    pub owner: PostOwnerDomainModel,
}

/// 게시글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDomainModel {
    pub id: String,
    pub body: String,
    pub owner: PostOwnerDomainModel,
    pub comments: Vec<PostCommentDomainModel>,
    pub likes: Vec<PostLikeOwnerDomainModel>,
}

impl PostDomainModel {
    /// 해당 사용자가 좋아요를 눌렀는지 확인합니다.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.id == user_id)
    }
}
