//! # Application Context
//!
//! 데이터베이스 연결과 서비스들을 한 번에 조립하는 부트스트랩 코드입니다.
//! 전역 레지스트리 없이, 생성된 `Arc<Database>` 핸들을 각 데이터 소스에 명시적으로
//! 전달합니다.
//!
//! ```text
//! DatabaseConfig ──► Database::connect ──► Arc<Database>
//!                                               │
//!                   ┌───────────────────────────┴──────────────┐
//!                   ▼                                          ▼
//!        MongoUserDataSource                        MongoPostDataSource
//!                   │                                          │
//!                   ▼                                          ▼
//!             UserService                                PostService
//! ```

use std::sync::Arc;
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::AppResult;
use crate::datasources::{
    PostDataSource, UserDataSource,
    posts::post_datasource::MongoPostDataSource,
    users::user_datasource::MongoUserDataSource,
};
use crate::db::Database;
use crate::services::{posts::PostService, users::UserService};

/// 조립된 애플리케이션 구성 요소
pub struct AppContext {
    pub database: Arc<Database>,
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
}

impl AppContext {
    /// MongoDB에 연결하고 인덱스를 준비한 뒤 서비스를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 연결, ping, 인덱스 생성 실패
    pub async fn bootstrap(config: &DatabaseConfig) -> AppResult<Self> {
        let database = Arc::new(Database::connect(config).await?);

        let user_data_source = Arc::new(MongoUserDataSource::new(Arc::clone(&database)));
        let post_data_source = Arc::new(MongoPostDataSource::new(Arc::clone(&database)));

        user_data_source.create_indexes().await?;
        post_data_source.create_indexes().await?;
        info!("인덱스 준비 완료: {}", database.database_name());

        Ok(Self::from_parts(database, user_data_source, post_data_source))
    }

    /// 이미 만들어진 데이터 소스로 서비스를 조립합니다.
    pub fn from_parts(
        database: Arc<Database>,
        user_data_source: Arc<dyn UserDataSource>,
        post_data_source: Arc<dyn PostDataSource>,
    ) -> Self {
        Self {
            database,
            user_service: Arc::new(UserService::new(user_data_source)),
            post_service: Arc::new(PostService::new(post_data_source)),
        }
    }

    /// 데이터베이스 연결을 종료합니다.
    pub async fn shutdown(self) {
        Database::clone(&self.database).disconnect().await;
    }
}
