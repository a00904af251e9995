//! 데이터 및 환경 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스 연결, 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을 우선 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// MongoDB 연결 설정
///
/// [`Database::connect`](crate::db::Database::connect)에 명시적으로 전달됩니다.
/// 테스트는 환경 변수 대신 이 구조체를 직접 만들어 서로 다른 데이터베이스를
/// 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// 드라이버에 보고할 애플리케이션 이름 (모니터링 및 로깅용)
    pub app_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE_NAME: &'static str = "social_backend_dev";
    pub const DEFAULT_APP_NAME: &'static str = "social_service_backend";

    /// 환경 변수에서 연결 설정을 읽어옵니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "social_backend_dev")
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string()),
            app_name: Self::DEFAULT_APP_NAME.to_string(),
        }
    }

    /// 같은 서버의 다른 데이터베이스를 가리키는 설정을 반환합니다.
    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = database_name.into();
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: Self::DEFAULT_URI.to_string(),
            database_name: Self::DEFAULT_DATABASE_NAME.to_string(),
            app_name: Self::DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}
