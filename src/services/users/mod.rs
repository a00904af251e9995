//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 조회, 프로필 변경, 삭제 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (`PasswordConfig` 환경별 cost)
//! - 사용자명/이메일 중복 방지
//! - `validator` 기반 입력값 검증
//! - 도메인 모델은 비밀번호 해시와 토큰을 노출하지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_data_source);
//! let profile = user_service.get_user_profile(&user_id).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
