//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 전역 상태가 아니라 명시적으로 전달되는 핸들(`Arc<Database>`)이며,
//! 생성(`connect`)과 종료(`disconnect`)는 부트스트랩 코드나 테스트가 직접 관리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! // ... 데이터 소스에 주입 ...
//! ```

use mongodb::{Client, Collection, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 게시글 컬렉션 이름 (댓글과 좋아요는 게시글 문서에 포함됨)
pub const POSTS_COLLECTION: &str = "posts";

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 묶어 데이터 소스 계층에
/// 컬렉션 접근을 제공합니다. 클라이언트 내부에 커넥션 풀이 있으므로
/// `Arc`로 공유하여 사용합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정값으로 MongoDB에 연결합니다.
    ///
    /// 클라이언트 옵션을 파싱하고 애플리케이션 이름을 설정한 뒤,
    /// `ping` 명령으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 클라이언트 생성 실패, ping 실패
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    ///
    /// ```rust,ignore
    /// let users = database.collection::<UserDto>(USERS_COLLECTION);
    /// ```
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 데이터베이스 전체를 삭제합니다. 테스트 정리용입니다.
    pub async fn drop_database(&self) -> Result<(), AppError> {
        self.get_database()
            .drop()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 연결을 종료합니다.
    ///
    /// 진행 중인 작업이 끝날 때까지 기다린 뒤 커넥션 풀을 닫습니다.
    /// 다른 곳에 복제된 핸들이 남아 있어도 종료 이후의 작업은 실패합니다.
    pub async fn disconnect(self) {
        let database_name = self.database_name.clone();
        self.client.shutdown().await;
        info!("MongoDB 연결 종료: {}", database_name);
    }
}
