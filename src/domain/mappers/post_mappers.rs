//! 게시글 DTO ⇄ 도메인 모델 변환
//!
//! 저장 형태 → 도메인 방향은 항상 성공합니다(`From`).
//! 도메인 → 저장 형태 방향은 문자열 ID를 `ObjectId`로 되돌려야 하므로
//! `TryFrom`이며, 잘못된 ID는 `ValidationError`가 됩니다.

use crate::core::errors::AppError;
use crate::domain::dto::{PostCommentDto, PostDto, PostOwnerDto};
use crate::domain::models::{PostCommentDomainModel, PostDomainModel, PostOwnerDomainModel};
use crate::utils::id_utils::{object_id_to_string, parse_optional_object_id};

impl From<PostOwnerDto> for PostOwnerDomainModel {
    fn from(owner: PostOwnerDto) -> Self {
        Self {
            id: owner.user_id,
            name: owner.name,
            surname: owner.surname,
            avatar: owner.avatar,
        }
    }
}

impl From<PostOwnerDomainModel> for PostOwnerDto {
    fn from(owner: PostOwnerDomainModel) -> Self {
        Self {
            user_id: owner.id,
            name: owner.name,
            surname: owner.surname,
            avatar: owner.avatar,
        }
    }
}

impl From<PostCommentDto> for PostCommentDomainModel {
    fn from(comment: PostCommentDto) -> Self {
        Self {
            id: object_id_to_string(comment.id.as_ref()),
            body: comment.body,
            owner: comment.owner.into(),
        }
    }
}

impl TryFrom<PostCommentDomainModel> for PostCommentDto {
    type Error = AppError;

    fn try_from(comment: PostCommentDomainModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_optional_object_id(&comment.id)?,
            body: comment.body,
            owner: comment.owner.into(),
        })
    }
}

impl From<PostDto> for PostDomainModel {
    fn from(post: PostDto) -> Self {
        let PostDto {
            id,
            body,
            owner,
            comments,
            likes,
        } = post;

        Self {
            id: object_id_to_string(id.as_ref()),
            body,
            owner: owner.into(),
            comments: comments.into_iter().map(Into::into).collect(),
            likes: likes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<PostDomainModel> for PostDto {
    type Error = AppError;

    fn try_from(post: PostDomainModel) -> Result<Self, Self::Error> {
        let comments = post
            .comments
            .into_iter()
            .map(PostCommentDto::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: parse_optional_object_id(&post.id)?,
            body: post.body,
            owner: post.owner.into(),
            comments,
            likes: post.likes.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn owner(name: &str) -> PostOwnerDomainModel {
        PostOwnerDomainModel {
            id: ObjectId::new().to_hex(),
            name: name.to_string(),
            surname: "Doe".to_string(),
            avatar: None,
        }
    }

    fn post() -> PostDomainModel {
        PostDomainModel {
            id: ObjectId::new().to_hex(),
            body: "Hello, world".to_string(),
            owner: owner("John"),
            comments: vec![PostCommentDomainModel {
                id: ObjectId::new().to_hex(),
                body: "First!".to_string(),
                owner: owner("Jane"),
            }],
            likes: vec![owner("Jane"), owner("Jim")],
        }
    }

    #[test]
    fn test_post_round_trip() {
        let original = post();

        let dto = PostDto::try_from(original.clone()).expect("valid ids");
        let back = PostDomainModel::from(dto);

        assert_eq!(back, original);
    }

    #[test]
    fn test_unsaved_post_maps_to_dto_without_id() {
        let mut unsaved = post();
        unsaved.id = String::new();

        let dto = PostDto::try_from(unsaved).unwrap();

        assert!(dto.id.is_none());
    }

    #[test]
    fn test_invalid_comment_id_is_rejected() {
        let mut invalid = post();
        invalid.comments[0].id = "broken".to_string();

        assert!(matches!(PostDto::try_from(invalid), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_owner_maps_user_id() {
        let domain_owner = owner("John");
        let dto = PostOwnerDto::from(domain_owner.clone());

        assert_eq!(dto.user_id, domain_owner.id);
        assert_eq!(PostOwnerDomainModel::from(dto), domain_owner);
    }
}
