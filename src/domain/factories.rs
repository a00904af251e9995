//! # Entity Factories
//!
//! 새 레코드의 저장 형태를 만드는 함수들입니다. 모든 엔티티는 여기서 만들어진 뒤
//! 데이터 소스의 생성 연산으로 저장되고, 이후에는 서비스 연산으로만 변경됩니다.

use mongodb::bson::oid::ObjectId;
use crate::domain::dto::{PostCommentDto, PostDto, PostOwnerDto, UserDto};
use crate::domain::models::NewUserDomainModel;

/// 새 사용자 문서를 만듭니다.
///
/// `password_hash`는 이미 bcrypt로 해싱된 값이어야 합니다.
/// 입력의 평문 비밀번호는 버려집니다.
pub fn user_factory(new_user: NewUserDomainModel, password_hash: String) -> UserDto {
    UserDto {
        id: None,
        username: new_user.username,
        password: password_hash,
        email: new_user.email,
        avatar: new_user.avatar,
        name: new_user.name,
        surname: new_user.surname,
        token: None,
    }
}

/// 댓글과 좋아요가 비어 있는 새 게시글 문서를 만듭니다.
pub fn post_factory(owner: PostOwnerDto, body: String) -> PostDto {
    PostDto {
        id: None,
        body,
        owner,
        comments: Vec::new(),
        likes: Vec::new(),
    }
}

/// 새 댓글을 만듭니다.
///
/// 댓글은 게시글 문서에 포함되므로 MongoDB가 ID를 할당하지 않습니다.
/// 여기서 `ObjectId`를 미리 부여합니다.
pub fn post_comment_factory(owner: PostOwnerDto, body: String) -> PostCommentDto {
    PostCommentDto {
        id: Some(ObjectId::new()),
        body,
        owner,
    }
}
