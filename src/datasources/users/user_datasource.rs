//! # MongoDB 사용자 데이터 소스
//!
//! `users` 컬렉션에 대한 [`UserDataSource`] 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `username`, `email` 유니크 인덱스 + 생성 전 중복 확인
//! - **원자적 업데이트**: `find_one_and_update`로 변경과 조회를 한 번에 수행
//! - **식별 필드 보호**: 프로필 업데이트는 `$set`에 프로필 필드만 담음

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};
use crate::core::errors::{AppError, AppResult};
use crate::datasources::users::UserDataSource;
use crate::db::{Database, USERS_COLLECTION};
use crate::domain::dto::{NewUserProfileDto, UserDto};
use crate::utils::id_utils::{parse_object_id, try_parse_object_id};

/// MongoDB 기반 사용자 데이터 소스
///
/// 데이터베이스 핸들은 생성 시점에 명시적으로 주입됩니다.
///
/// ```rust,ignore
/// let data_source = MongoUserDataSource::new(Arc::clone(&database));
/// data_source.create_indexes().await?;
/// ```
pub struct MongoUserDataSource {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserDataSource {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDto> {
        self.db.collection::<UserDto>(USERS_COLLECTION)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<UserDto>> {
        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 삽입 실패를 애플리케이션 에러로 변환합니다.
///
/// 사전 중복 확인과 삽입 사이에 다른 요청이 같은 사용자명/이메일을 먼저 저장하면
/// 유니크 인덱스가 E11000으로 거부합니다. 이 경우도 `ConflictError`입니다.
fn insert_error(kind: &ErrorKind) -> AppError {
    match kind {
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE => {
            AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
        }
        other => AppError::DatabaseError(other.to_string()),
    }
}

/// 프로필 업데이트용 `$set` 문서를 만듭니다.
///
/// 식별 필드(`username`, `email`, `password`, `token`)는 절대 포함되지 않습니다.
fn profile_set_document(profile: &NewUserProfileDto) -> Document {
    let mut set = doc! {
        "name": profile.name.as_str(),
        "surname": profile.surname.as_str(),
    };

    if let Some(avatar) = &profile.avatar {
        set.insert("avatar", avatar.as_str());
    }

    set
}

#[async_trait]
impl UserDataSource for MongoUserDataSource {
    async fn create(&self, mut user: UserDto) -> AppResult<UserDto> {
        // 중복 확인
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| insert_error(&e.kind))?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(inserted_id);

        info!("User created: {} ({})", user.username, inserted_id.to_hex());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<UserDto>> {
        let Some(object_id) = try_parse_object_id(user_id) else {
            debug!("Malformed user id looked up: {}", user_id);
            return Ok(None);
        };

        self.find_one(doc! { "_id": object_id }).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserDto>> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserDto>> {
        self.find_one(doc! { "email": email }).await
    }

    async fn update_user_profile_by_id(
        &self,
        user_id: &str,
        profile: NewUserProfileDto,
    ) -> AppResult<Option<UserDto>> {
        let object_id = parse_object_id(user_id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated_user = self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": profile_set_document(&profile) },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("Profile update for user {} matched: {}", user_id, updated_user.is_some());

        Ok(updated_user)
    }

    async fn delete_by_id(&self, user_id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(user_id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mongodb::error::WriteError;
    use super::*;

    fn write_error(code: i32) -> ErrorKind {
        let error: WriteError = mongodb::bson::from_document(doc! {
            "code": code,
            "errmsg": "E11000 duplicate key error collection: users index: username_unique",
        })
        .unwrap();

        ErrorKind::Write(WriteFailure::WriteError(error))
    }

    #[test]
    fn test_duplicate_key_insert_is_conflict() {
        let error = insert_error(&write_error(11000));

        assert!(matches!(error, AppError::ConflictError(_)));
    }

    #[test]
    fn test_other_insert_failures_are_database_errors() {
        let error = insert_error(&write_error(121));

        assert!(matches!(error, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_profile_set_document_never_touches_identity_fields() {
        let set = profile_set_document(&NewUserProfileDto {
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            avatar: Some("https://cdn.example.com/avatars/1.png".to_string()),
        });

        assert_eq!(set.get_str("name").unwrap(), "Jane");
        assert_eq!(set.get_str("surname").unwrap(), "Doe");
        assert_eq!(set.get_str("avatar").unwrap(), "https://cdn.example.com/avatars/1.png");
        for identity in ["username", "email", "password", "token", "_id"] {
            assert!(!set.contains_key(identity));
        }
    }

    #[test]
    fn test_profile_set_document_keeps_avatar_when_absent() {
        let set = profile_set_document(&NewUserProfileDto {
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            avatar: None,
        });

        assert!(!set.contains_key("avatar"));
        assert_eq!(set.len(), 2);
    }
}
