//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 비밀번호 해싱 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_backend_dev"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, PasswordConfig};
//!
//! let env = Environment::current();
//! let db_config = DatabaseConfig::from_env();
//! let cost = PasswordConfig::bcrypt_cost();
//! ```

pub mod data_config;

pub use data_config::*;
