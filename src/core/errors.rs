//! # Application Error Handling System
//!
//! 소셜 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고, 상위 API 계층이 그대로 사용할 수 있도록
//! `actix_web::ResponseError`를 구현하여 HTTP 상태 코드와 연결합니다.
//!
//! ## 에러 분류
//!
//! ### 1. "없음"은 에러가 아님
//! 조회 연산에서 레코드가 존재하지 않는 경우는 `Ok(None)`으로 표현합니다.
//! 호출자는 `None`(부재)과 `Err`(실패)를 구분하여 처리해야 합니다.
//!
//! ### 2. 예상치 못한 실패
//! - **인프라 계층**: `DatabaseError`
//! - **비즈니스 계층**: `ValidationError`, `ConflictError`, `NotFound`
//! - **도메인 래핑**: `UpdatingUser` - 원본 에러를 `source`로 보존
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ObjectId |
//! | `NotFound` | 404 Not Found | 리소스 없음 (핸들러 계층에서 사용) |
//! | `ConflictError` | 409 Conflict | 사용자명/이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `UpdatingUser` | 500 Internal Server Error | 프로필 업데이트 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let updated = self.user_data_source
//!     .update_user_profile_by_id(user_id, profile)
//!     .await
//!     .map_err(|cause| AppError::updating_user(user_id, cause))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층과 데이터 소스 계층에서 발생할 수 있는 모든 실패를 포괄합니다.
/// 레코드 부재는 이 타입으로 표현하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결, 쿼리, 인덱스 생성 중 발생한 오류의 메시지를 담습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// # 발생 시나리오
    /// - `validator` 검증 실패 (이메일 형식, 길이 등)
    /// - 공백뿐인 게시글/댓글 본문
    /// - 쓰기 연산에 전달된 잘못된 ObjectId 형식
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 사용 중인 사용자명이나 이메일로 사용자를 생성하려는 경우입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 사용자 프로필 업데이트 실패
    ///
    /// 데이터 소스에서 올라온 모든 실패를 감싸는 도메인 에러입니다.
    /// 연산(변형 자체), 식별자(`user_id`), 원인(`source`)을 모두 보존하므로
    /// 호출자와 테스트가 원본 에러를 그대로 검사할 수 있습니다.
    ///
    /// 메시지는 `Error updating user '<id>' profile. <원인>` 형식이며, `<원인>`은
    /// `source`의 `Display` 출력 전체입니다. 원인 변형의 접두어도 포함됩니다
    /// (예: `... profile. Database error: connection reset`).
    #[error("Error updating user '{user_id}' profile. {source}")]
    UpdatingUser {
        user_id: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// 프로필 업데이트 실패 에러를 생성합니다.
    pub fn updating_user(user_id: impl Into<String>, cause: AppError) -> Self {
        AppError::UpdatingUser {
            user_id: user_id.into(),
            source: Box::new(cause),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("body is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("username taken".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_updating_user_is_internal_server_error() {
        let error = AppError::updating_user(
            "507f1f77bcf86cd799439011",
            AppError::DatabaseError("Testing error".to_string()),
        );

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_updating_user_message_format() {
        let error = AppError::updating_user(
            "507f1f77bcf86cd799439011",
            AppError::InternalError("Testing error".to_string()),
        );

        assert_eq!(
            error.to_string(),
            "Error updating user '507f1f77bcf86cd799439011' profile. Internal server error: Testing error"
        );
    }

    #[test]
    fn test_updating_user_keeps_source() {
        let error = AppError::updating_user("abc", AppError::DatabaseError("boom".to_string()));

        let source = error.source().expect("source must be preserved");
        assert_eq!(source.to_string(), "Database error: boom");

        match error {
            AppError::UpdatingUser { user_id, source } => {
                assert_eq!(user_id, "abc");
                assert!(matches!(*source, AppError::DatabaseError(_)));
            }
            other => panic!("Expected UpdatingUser, got {other:?}"),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(1);
        let value = ok
            .with_context(|| panic!("must not be evaluated on Ok"))
            .expect("ok value");

        assert_eq!(value, 1);
    }
}
