//! # Mappers
//!
//! DTO와 도메인 모델 사이의 순수 변환 계층입니다. 상태가 없고 MongoDB 클라이언트에
//! 의존하지 않으며, 엔티티 종류마다 양방향 변환 한 쌍을 `From`/`TryFrom`으로 제공합니다.
//!
//! ```rust,ignore
//! let post: PostDomainModel = post_dto.into();
//! let owner: PostOwnerDto = owner_domain_model.into();
//! let dto = PostDto::try_from(post)?;
//! ```

pub mod user_mappers;
pub mod post_mappers;
