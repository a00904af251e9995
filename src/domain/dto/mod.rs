//! # Data Transfer Objects
//!
//! MongoDB에 저장되는 문서 구조(저장 형태)를 정의합니다.
//! 비즈니스 로직은 이 타입들을 직접 다루지 않고, [`mappers`](crate::domain::mappers)를
//! 거쳐 [`models`](crate::domain::models)의 도메인 모델로 변환하여 사용합니다.
//!
//! ```text
//! MongoDB 문서 ⇄ DTO (이 모듈) ⇄ Mapper ⇄ Domain Model
//! ```
//!
//! ## 필드 규칙
//!
//! - `_id`는 `Option<ObjectId>`로 두고, 삽입 전에는 `None`입니다.
//! - 선택 필드는 `skip_serializing_if`로 문서에서 생략합니다.
//! - 포함된 배열(`comments`, `likes`)은 `#[serde(default)]`로 누락을 허용합니다.

pub mod users;
pub mod posts;

pub use users::*;
pub use posts::*;
