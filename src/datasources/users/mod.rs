//! 사용자 데이터 소스
//!
//! [`UserDataSource`]는 `users` 컬렉션에 대한 원시 데이터베이스 연산 계약입니다.
//! 서비스 계층은 이 trait에만 의존하며, 구현체로는
//! [`MongoUserDataSource`](user_datasource::MongoUserDataSource)와
//! [`InMemoryUserDataSource`](crate::datasources::memory::InMemoryUserDataSource)가 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::datasources::users::{UserDataSource, user_datasource::MongoUserDataSource};
//!
//! let users: Arc<dyn UserDataSource> = Arc::new(MongoUserDataSource::new(database));
//! let user = users.find_by_username("john_doe").await?;
//! ```

pub mod user_datasource;

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::dto::{NewUserProfileDto, UserDto};

/// 사용자 문서 저장소 계약
///
/// 조회 연산은 레코드가 없으면 `Ok(None)`을 반환하며 "없음"을 에러로 만들지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDataSource: Send + Sync {
    /// 새 사용자 문서를 저장하고 ID가 채워진 문서를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명 또는 이메일 중복
    async fn create(&self, user: UserDto) -> AppResult<UserDto>;

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<UserDto>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserDto>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserDto>>;

    /// 프로필 필드(`name`, `surname`, `avatar`)만 변경하고 변경 후 문서를 반환합니다.
    ///
    /// `profile.avatar`가 `None`이면 저장된 아바타는 그대로 둡니다.
    /// 해당 ID의 사용자가 없으면 `Ok(None)`입니다.
    async fn update_user_profile_by_id(
        &self,
        user_id: &str,
        profile: NewUserProfileDto,
    ) -> AppResult<Option<UserDto>>;

    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    async fn delete_by_id(&self, user_id: &str) -> AppResult<bool>;

    /// 컬렉션 인덱스를 준비합니다.
    async fn create_indexes(&self) -> AppResult<()>;
}
