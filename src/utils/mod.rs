//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//! - [`id_utils`] - ObjectId ⇄ 문자열 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::id_utils::parse_object_id;
//!
//! let body = validate_required_string("  Hello  ", "body")?;
//! let post_id = parse_object_id("507f1f77bcf86cd799439011")?;
//! ```

pub mod string_utils;
pub mod id_utils;
