//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 데이터 소스 trait 객체를 주입받아 동작하며, 도메인 모델만 주고받습니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 프로필 변경, 삭제)
//! - 게시글, 댓글, 좋아요 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{posts::PostService, users::UserService};
//!
//! let user_service = UserService::new(user_data_source);
//! let post_service = PostService::new(post_data_source);
//! ```

pub mod users;
pub mod posts;
