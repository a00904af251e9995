//! # Domain Models
//!
//! 비즈니스 로직이 다루는 도메인 표현입니다. 저장소 스키마와 분리되어 있어
//! 컬렉션 구조가 바뀌어도 서비스 계층과 상위 API 계약은 영향을 받지 않습니다.
//!
//! | 모델 | 용도 |
//! |------|------|
//! | [`UserDomainModel`] | 사용자 생성/조회 결과 |
//! | [`UserProfileDomainModel`] | 공개 프로필 계약 |
//! | [`NewUserProfileDomainModel`] | 프로필 변경 요청 (`name`, `surname`, `avatar`) |
//! | [`NewUserDomainModel`] | 사용자 등록 요청 |
//! | [`PostDomainModel`] | 게시글 (댓글, 좋아요 포함) |
//! | [`PostCommentDomainModel`] | 댓글 |
//! | [`PostOwnerDomainModel`] | 작성자/좋아요 사용자 |
//!
//! ID는 모두 ObjectId의 16진수 문자열로 표현합니다.

pub mod users;
pub mod posts;

pub use users::*;
pub use posts::*;
