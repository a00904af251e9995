//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입, 로깅 초기화, 부트스트랩 코드를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **도메인 래핑**: `UpdatingUser`가 원본 에러를 `source`로 보존
//!
//! ### [`logging`] - 로깅 초기화
//! - `env_logger` 기반, `RUST_LOG`로 레벨 조절
//!
//! ### [`context`] - 애플리케이션 조립
//! - **AppContext**: `Arc<Database>` → 데이터 소스 → 서비스 순서로 명시적 주입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::core::context::AppContext;
//!
//! let context = AppContext::bootstrap(&DatabaseConfig::from_env()).await?;
//! let posts = context.post_service.get_posts().await?;
//! context.shutdown().await;
//! ```

pub mod errors;
pub mod logging;
pub mod context;
