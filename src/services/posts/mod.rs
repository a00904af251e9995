//! 게시글 서비스 모듈
//!
//! 게시글 작성/조회/삭제, 댓글, 좋아요 로직을 제공합니다.

pub mod post_service;

pub use post_service::PostService;
