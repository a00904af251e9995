//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 저장 형태와 비즈니스 표현, 그리고 둘 사이의
//! 변환을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── dto        - MongoDB 문서 구조 (UserDto, PostDto, ...)
//! ├── models     - 도메인 모델 (UserProfileDomainModel, PostDomainModel, ...)
//! ├── mappers    - DTO ⇄ 도메인 모델 변환
//! └── factories  - 새 레코드 생성
//!      │
//!      ▼
//! Services ──► DataSources ──► MongoDB
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! Service → DataSource → MongoDB → DTO → Mapper → Domain Model → 호출자
//! ```

pub mod dto;
pub mod models;
pub mod mappers;
pub mod factories;

pub use factories::*;
