//! 소셜 서비스 백엔드
//!
//! 사용자, 게시글, 댓글, 좋아요를 MongoDB에 저장하는 소셜 네트워크 백엔드의
//! 도메인/데이터 계층입니다. HTTP 라우팅은 이 크레이트 바깥의 API 계층이 담당하며,
//! 여기서는 서비스와 데이터 소스, 그리고 그 사이의 변환을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 조회, 프로필 변경, 삭제
//! - **게시글**: 작성, 목록/단건 조회, 삭제
//! - **댓글/좋아요**: 게시글 문서에 포함되어 함께 저장
//! - **MongoDB**: `users`, `posts` 컬렉션
//! - **인메모리 데이터 소스**: 데이터베이스 없이 서비스 실행
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 도메인 모델
//! └─────────────────┘
//!          │  Mappers (DTO ⇄ Domain Model)
//!          ▼
//! ┌─────────────────┐
//! │   DataSources   │ ← 원시 데이터베이스 연산, DTO
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::config::DatabaseConfig;
//! use social_service_backend::core::context::AppContext;
//!
//! let context = AppContext::bootstrap(&DatabaseConfig::from_env()).await?;
//!
//! let profile = context.user_service
//!     .update_user_profile(&user_id, new_profile)
//!     .await?;
//! let post = context.post_service
//!     .like_post(&post_id, owner)
//!     .await?;
//!
//! context.shutdown().await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod datasources;
pub mod services;
pub mod utils;
