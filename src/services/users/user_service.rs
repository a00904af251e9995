//! # 사용자 서비스 구현
//!
//! 사용자 등록, 조회, 프로필 변경, 삭제를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     UserService                       │
//! │                                                       │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐ │
//! │  │ Registration │  │   Profile    │  │  User Query  │ │
//! │  │ • Validate   │  │ • Validate   │  │ • By ID      │ │
//! │  │ • bcrypt     │  │ • Update     │  │ • By Name    │ │
//! │  │ • Factory    │  │ • Wrap Error │  │ • DTO→Model  │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘ │
//! └───────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌───────────────────────────────────────────────────────┐
//! │            Arc<dyn UserDataSource>                    │
//! │ • MongoUserDataSource / InMemoryUserDataSource        │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 프로필 변경 중 데이터 소스에서 발생한 에러는 모두
//! [`AppError::UpdatingUser`]로 감싸져 사용자 ID와 원인을 함께 전달합니다.
//! 나머지 연산은 데이터 소스 에러를 그대로 전파합니다.

use std::sync::Arc;
use bcrypt::hash;
use log::{debug, info, warn};
use validator::Validate;
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};
use crate::datasources::UserDataSource;
use crate::domain::dto::NewUserProfileDto;
use crate::domain::factories::user_factory;
use crate::domain::models::{
    NewUserDomainModel, NewUserProfileDomainModel, UserDomainModel, UserProfileDomainModel,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 데이터 소스는 생성 시 주입되며, 같은 서비스가 MongoDB와 인메모리 구현 위에서
/// 동일하게 동작합니다.
///
/// ```rust,ignore
/// let user_service = UserService::new(Arc::new(MongoUserDataSource::new(database)));
///
/// let profile = user_service
///     .update_user_profile(&user_id, NewUserProfileDomainModel {
///         name: "Jane".to_string(),
///         surname: "Doe".to_string(),
///         avatar: None,
///     })
///     .await?;
/// ```
pub struct UserService {
    /// 사용자 데이터 소스
    user_data_source: Arc<dyn UserDataSource>,

    /// bcrypt 해싱 비용
    password_cost: u32,
}

impl UserService {
    /// 현재 환경의 bcrypt 비용으로 서비스를 만듭니다.
    pub fn new(user_data_source: Arc<dyn UserDataSource>) -> Self {
        Self::with_password_cost(user_data_source, PasswordConfig::bcrypt_cost())
    }

    pub fn with_password_cost(user_data_source: Arc<dyn UserDataSource>, password_cost: u32) -> Self {
        Self {
            user_data_source,
            password_cost,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 입력값 검증 (`validator`)
    /// 2. bcrypt 비밀번호 해싱
    /// 3. `user_factory`로 저장 형태 생성
    /// 4. 데이터 소스에 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 사용자명 또는 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_user(&self, new_user: NewUserDomainModel) -> AppResult<UserDomainModel> {
        let start_time = std::time::Instant::now();

        new_user
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&new_user.password, self.password_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created_user = self.user_data_source
            .create(user_factory(new_user, password_hash))
            .await?;

        info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(UserDomainModel::from(created_user))
    }

    /// ID로 사용자 조회. 없으면 `None`입니다.
    pub async fn get_user_by_id(&self, user_id: &str) -> AppResult<Option<UserDomainModel>> {
        let user = self.user_data_source.find_by_id(user_id).await?;

        Ok(user.map(UserDomainModel::from))
    }

    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<UserDomainModel>> {
        let user = self.user_data_source.find_by_username(username).await?;

        Ok(user.map(UserDomainModel::from))
    }

    /// 공개 프로필 조회
    pub async fn get_user_profile(&self, user_id: &str) -> AppResult<Option<UserProfileDomainModel>> {
        let user = self.user_data_source.find_by_id(user_id).await?;

        Ok(user.map(UserProfileDomainModel::from))
    }

    /// 사용자 프로필 변경
    ///
    /// `name`, `surname`은 항상 교체되고 `avatar`는 값이 있을 때만 교체됩니다.
    /// `username`, `email` 등 식별 필드는 바뀌지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(profile))` - 변경 후 프로필
    /// * `Ok(None)` - 해당 ID의 사용자가 없음
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패 (데이터 소스 호출 전)
    /// * `AppError::UpdatingUser` - 데이터 소스 실패. 메시지는
    ///   `Error updating user '<id>' profile. <원인>` 형식이며 원인은
    ///   `std::error::Error::source`로 확인할 수 있습니다.
    pub async fn update_user_profile(
        &self,
        user_id: &str,
        profile: NewUserProfileDomainModel,
    ) -> AppResult<Option<UserProfileDomainModel>> {
        profile
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let updated_user = self.user_data_source
            .update_user_profile_by_id(user_id, NewUserProfileDto::from(profile))
            .await
            .map_err(|e| {
                let error = AppError::updating_user(user_id, e);
                warn!("{}", error);
                error
            })?;

        match &updated_user {
            Some(_) => info!("User profile updated: {}", user_id),
            None => debug!("Profile update skipped, no user: {}", user_id),
        }

        Ok(updated_user.map(UserProfileDomainModel::from))
    }

    /// 사용자 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    pub async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        let deleted = self.user_data_source.delete_by_id(user_id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        info!("User deleted: {}", user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use super::*;
    use crate::datasources::memory::InMemoryUserDataSource;
    use crate::datasources::users::MockUserDataSource;

    fn new_user() -> NewUserDomainModel {
        NewUserDomainModel {
            username: "john_doe".to_string(),
            password: "Secret123!".to_string(),
            email: "john@example.com".to_string(),
            name: "John".to_string(),
            surname: "Doe".to_string(),
            avatar: Some("https://cdn.example.com/avatars/john.png".to_string()),
        }
    }

    fn new_profile(avatar: Option<&str>) -> NewUserProfileDomainModel {
        NewUserProfileDomainModel {
            name: "Jane".to_string(),
            surname: "Roe".to_string(),
            avatar: avatar.map(str::to_string),
        }
    }

    fn in_memory_service() -> UserService {
        UserService::with_password_cost(Arc::new(InMemoryUserDataSource::new()), 4)
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let data_source = Arc::new(InMemoryUserDataSource::new());
        let service = UserService::with_password_cost(data_source.clone(), 4);

        let created = service.create_user(new_user()).await.unwrap();
        let stored = data_source.find_by_username("john_doe").await.unwrap().unwrap();

        assert_eq!(created.username, "john_doe");
        assert_ne!(stored.password, "Secret123!");
        assert!(bcrypt::verify("Secret123!", &stored.password).unwrap());
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_input() {
        let service = in_memory_service();
        let mut invalid = new_user();
        invalid.email = "not-an-email".to_string();

        let result = service.create_user(invalid).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_user_profile_keeps_identity_fields() {
        let service = in_memory_service();
        let created = service.create_user(new_user()).await.unwrap();

        let profile = service
            .update_user_profile(&created.id, new_profile(Some("https://cdn.example.com/new.png")))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.username, created.username);
        assert_eq!(profile.email, created.email);
        assert_eq!(profile.name, "Jane");
        assert_eq!(profile.surname, "Roe");
        assert_eq!(profile.avatar.as_deref(), Some("https://cdn.example.com/new.png"));
    }

    #[tokio::test]
    async fn test_update_user_profile_without_avatar_keeps_old_one() {
        let service = in_memory_service();
        let created = service.create_user(new_user()).await.unwrap();

        let profile = service
            .update_user_profile(&created.id, new_profile(None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.avatar, created.avatar);
    }

    #[tokio::test]
    async fn test_update_user_profile_of_missing_user_is_none() {
        let service = in_memory_service();

        let result = service
            .update_user_profile("65a1f0c2e4b0a1b2c3d4e5f6", new_profile(None))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_user_profile_wraps_data_source_failure() {
        let mut data_source = MockUserDataSource::new();
        data_source
            .expect_update_user_profile_by_id()
            .times(1)
            .returning(|_, _| Err(AppError::DatabaseError("Testing error".to_string())));
        let service = UserService::with_password_cost(Arc::new(data_source), 4);

        let error = service
            .update_user_profile("65a1f0c2e4b0a1b2c3d4e5f6", new_profile(None))
            .await
            .unwrap_err();

        let message = error.to_string();
        assert!(matches!(error, AppError::UpdatingUser { .. }));
        assert!(message.contains("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert!(message.contains("Testing error"));
        assert_eq!(
            message,
            "Error updating user '65a1f0c2e4b0a1b2c3d4e5f6' profile. Database error: Testing error"
        );
        assert!(error.source().is_some());
    }

    #[tokio::test]
    async fn test_update_user_profile_validates_before_data_source() {
        let mut data_source = MockUserDataSource::new();
        data_source.expect_update_user_profile_by_id().times(0);
        let service = UserService::with_password_cost(Arc::new(data_source), 4);

        let result = service
            .update_user_profile("65a1f0c2e4b0a1b2c3d4e5f6", NewUserProfileDomainModel {
                name: String::new(),
                surname: "Roe".to_string(),
                avatar: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_user_profile_rejects_blank_names() {
        let service = in_memory_service();
        let created = service.create_user(new_user()).await.unwrap();

        let result = service
            .update_user_profile(&created.id, NewUserProfileDomainModel {
                name: "   ".to_string(),
                surname: "Roe".to_string(),
                avatar: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        let stored = service.get_user_profile(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "John");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = in_memory_service();
        let created = service.create_user(new_user()).await.unwrap();

        service.delete_user(&created.id).await.unwrap();

        assert!(service.get_user_by_id(&created.id).await.unwrap().is_none());
        assert!(matches!(
            service.delete_user(&created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
