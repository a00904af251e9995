//! # 인메모리 데이터 소스
//!
//! MongoDB 없이 서비스 계층을 실행하기 위한 [`UserDataSource`], [`PostDataSource`]
//! 구현입니다. 로컬 실험과 서비스 테스트에 사용하며, MongoDB 구현과 같은
//! 반환 규칙을 따릅니다.
//!
//! - 잘못된 형식의 ID 조회는 `Ok(None)`, 변경은 `AppError::ValidationError`
//! - 좋아요는 사용자당 하나
//! - 게시글 목록은 최신순

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::datasources::posts::PostDataSource;
use crate::datasources::users::UserDataSource;
use crate::domain::dto::{NewUserProfileDto, PostCommentDto, PostDto, PostLikeDto, PostOwnerDto, UserDto};
use crate::utils::id_utils::{parse_object_id, try_parse_object_id};

fn read_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::InternalError("데이터 소스 잠금이 손상되었습니다".to_string()))
}

fn write_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::InternalError("데이터 소스 잠금이 손상되었습니다".to_string()))
}

/// 인메모리 사용자 데이터 소스
#[derive(Debug, Default)]
pub struct InMemoryUserDataSource {
    users: RwLock<Vec<UserDto>>,
}

impl InMemoryUserDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_where<P>(&self, predicate: P) -> AppResult<Option<UserDto>>
    where
        P: Fn(&UserDto) -> bool,
    {
        let users = read_lock(&self.users)?;
        Ok(users.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserDataSource for InMemoryUserDataSource {
    async fn create(&self, mut user: UserDto) -> AppResult<UserDto> {
        let mut users = write_lock(&self.users)?;

        if users.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<UserDto>> {
        let Some(object_id) = try_parse_object_id(user_id) else {
            return Ok(None);
        };

        self.find_where(|user| user.id == Some(object_id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserDto>> {
        self.find_where(|user| user.username == username)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserDto>> {
        self.find_where(|user| user.email == email)
    }

    async fn update_user_profile_by_id(
        &self,
        user_id: &str,
        profile: NewUserProfileDto,
    ) -> AppResult<Option<UserDto>> {
        let object_id = parse_object_id(user_id)?;
        let mut users = write_lock(&self.users)?;

        let Some(user) = users.iter_mut().find(|user| user.id == Some(object_id)) else {
            return Ok(None);
        };

        user.name = profile.name;
        user.surname = profile.surname;
        if let Some(avatar) = profile.avatar {
            user.avatar = Some(avatar);
        }

        Ok(Some(user.clone()))
    }

    async fn delete_by_id(&self, user_id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(user_id)?;
        let mut users = write_lock(&self.users)?;

        let before = users.len();
        users.retain(|user| user.id != Some(object_id));

        Ok(users.len() < before)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// 인메모리 게시글 데이터 소스
///
/// 게시글은 삽입 순서대로 저장되며 조회 시 역순으로 반환됩니다.
#[derive(Debug, Default)]
pub struct InMemoryPostDataSource {
    posts: RwLock<Vec<PostDto>>,
}

impl InMemoryPostDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID가 일치하는 게시글을 변경합니다. 게시글이 없으면 `None`입니다.
    fn modify<F>(&self, post_id: &ObjectId, f: F) -> AppResult<Option<PostDto>>
    where
        F: FnOnce(&mut PostDto),
    {
        let mut posts = write_lock(&self.posts)?;

        Ok(posts
            .iter_mut()
            .find(|post| post.id.as_ref() == Some(post_id))
            .map(|post| {
                f(post);
                post.clone()
            }))
    }
}

#[async_trait]
impl PostDataSource for InMemoryPostDataSource {
    async fn create(&self, mut post: PostDto) -> AppResult<Option<PostDto>> {
        post.id = Some(ObjectId::new());
        write_lock(&self.posts)?.push(post.clone());

        Ok(Some(post))
    }

    async fn get_all(&self) -> AppResult<Vec<PostDto>> {
        let posts = read_lock(&self.posts)?;
        Ok(posts.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, post_id: &str) -> AppResult<Option<PostDto>> {
        let Some(object_id) = try_parse_object_id(post_id) else {
            return Ok(None);
        };

        let posts = read_lock(&self.posts)?;
        Ok(posts.iter().find(|post| post.id == Some(object_id)).cloned())
    }

    async fn create_comment(
        &self,
        post_id: &str,
        comment: PostCommentDto,
    ) -> AppResult<Option<PostDto>> {
        let object_id = parse_object_id(post_id)?;

        self.modify(&object_id, |post| post.comments.push(comment))
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

        self.modify(&post_object_id, |post| {
            post.comments.retain(|comment| comment.id != Some(comment_object_id));
        })?;

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

        self.modify(&object_id, |post| {
            if post.find_like_by_owner_id(&owner.user_id).is_none() {
                post.likes.push(owner);
            }
        })
    }

    async fn dislike(&self, post_id: &str, user_id: &str) -> AppResult<()> {
        let object_id = parse_object_id(post_id)?;

        self.modify(&object_id, |post| post.likes.retain(|like| like.user_id != user_id))?;

        Ok(())
    }

    async fn delete_by_id(&self, post_id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(post_id)?;
        let mut posts = write_lock(&self.posts)?;

        let before = posts.len();
        posts.retain(|post| post.id != Some(object_id));

        Ok(posts.len() < before)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factories::{post_comment_factory, post_factory};

    fn owner(user_id: &str) -> PostOwnerDto {
        PostOwnerDto {
            user_id: user_id.to_string(),
            name: "John".to_string(),
            surname: "Doe".to_string(),
            avatar: None,
        }
    }

    fn user(username: &str, email: &str) -> UserDto {
        UserDto {
            id: None,
            username: username.to_string(),
            password: "hash".to_string(),
            email: email.to_string(),
            avatar: Some("https://cdn.example.com/a.png".to_string()),
            name: "John".to_string(),
            surname: "Doe".to_string(),
            token: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicates() {
        let data_source = InMemoryUserDataSource::new();
        data_source.create(user("john_doe", "john@example.com")).await.unwrap();

        let same_username = data_source.create(user("john_doe", "other@example.com")).await;
        let same_email = data_source.create(user("other", "john@example.com")).await;

        assert!(matches!(same_username, Err(AppError::ConflictError(_))));
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
    }

    #[tokio::test]
    async fn test_update_profile_without_avatar_keeps_stored_avatar() {
        let data_source = InMemoryUserDataSource::new();
        let created = data_source.create(user("john_doe", "john@example.com")).await.unwrap();
        let user_id = created.id_string().unwrap();

        let updated = data_source
            .update_user_profile_by_id(&user_id, NewUserProfileDto {
                name: "Jane".to_string(),
                surname: "Roe".to_string(),
                avatar: None,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Jane");
        assert_eq!(updated.surname, "Roe");
        assert_eq!(updated.avatar.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(updated.username, "john_doe");
        assert_eq!(updated.email, "john@example.com");
    }

    #[tokio::test]
    async fn test_update_profile_of_missing_user_is_none() {
        let data_source = InMemoryUserDataSource::new();

        let result = data_source
            .update_user_profile_by_id(&ObjectId::new().to_hex(), NewUserProfileDto {
                name: "Jane".to_string(),
                surname: "Roe".to_string(),
                avatar: None,
            })
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_or_malformed_post_is_none() {
        let data_source = InMemoryPostDataSource::new();

        assert!(data_source.get_by_id(&ObjectId::new().to_hex()).await.unwrap().is_none());
        assert!(data_source.get_by_id("not-an-id").await.unwrap().is_none());
        assert!(data_source.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_newest_first() {
        let data_source = InMemoryPostDataSource::new();
        data_source.create(post_factory(owner("u1"), "first".to_string())).await.unwrap();
        data_source.create(post_factory(owner("u1"), "second".to_string())).await.unwrap();

        let posts = data_source.get_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].body, "second");
        assert_eq!(posts[1].body, "first");
    }

    #[tokio::test]
    async fn test_like_is_idempotent_per_user() {
        let data_source = InMemoryPostDataSource::new();
        let post = data_source
            .create(post_factory(owner("author"), "Hello".to_string()))
            .await
            .unwrap()
            .unwrap();
        let post_id = post.id_string().unwrap();

        data_source.like(&post_id, owner("u1")).await.unwrap();
        let liked = data_source.like(&post_id, owner("u1")).await.unwrap().unwrap();

        assert_eq!(liked.likes.len(), 1);
        assert!(data_source.get_like_by_owner_id(&post_id, "u1").await.unwrap().is_some());
        assert!(data_source.get_like_by_owner_id(&post_id, "u2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dislike_by_non_liker_changes_nothing() {
        let data_source = InMemoryPostDataSource::new();
        let post = data_source
            .create(post_factory(owner("author"), "Hello".to_string()))
            .await
            .unwrap()
            .unwrap();
        let post_id = post.id_string().unwrap();
        data_source.like(&post_id, owner("u1")).await.unwrap();

        data_source.dislike(&post_id, "u2").await.unwrap();
        assert_eq!(data_source.get_by_id(&post_id).await.unwrap().unwrap().likes.len(), 1);

        data_source.dislike(&post_id, "u1").await.unwrap();
        assert!(data_source.get_by_id(&post_id).await.unwrap().unwrap().likes.is_empty());
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let data_source = InMemoryPostDataSource::new();
        let post = data_source
            .create(post_factory(owner("author"), "Hello".to_string()))
            .await
            .unwrap()
            .unwrap();
        let post_id = post.id_string().unwrap();
        let comment = post_comment_factory(owner("u1"), "Nice".to_string());
        let comment_id = comment.id.unwrap().to_hex();

        let updated = data_source.create_comment(&post_id, comment).await.unwrap().unwrap();
        assert_eq!(updated.comments.len(), 1);

        let found = data_source.get_comment(&post_id, &comment_id).await.unwrap().unwrap();
        assert_eq!(found.body, "Nice");

        data_source.delete_comment(&post_id, &comment_id).await.unwrap();
        assert!(data_source.get_comment(&post_id, &comment_id).await.unwrap().is_none());

        // 이미 삭제된 댓글을 다시 삭제해도 성공
        data_source.delete_comment(&post_id, &comment_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_mutations_with_malformed_id_are_validation_errors() {
        let data_source = InMemoryPostDataSource::new();

        let like = data_source.like("bad-id", owner("u1")).await;
        let delete = data_source.delete_by_id("bad-id").await;

        assert!(matches!(like, Err(AppError::ValidationError(_))));
        assert!(matches!(delete, Err(AppError::ValidationError(_))));
    }
}
