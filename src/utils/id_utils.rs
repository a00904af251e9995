//! # ObjectId 유틸리티
//!
//! 도메인 계층은 ID를 16진수 문자열로, 저장 계층은 `ObjectId`로 다룹니다.
//! 두 표현 사이의 변환 규칙을 한곳에 모아 둡니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 쓰기 연산용 ID 파싱
///
/// 잘못된 형식이면 `ValidationError`를 반환합니다.
///
/// ```rust,ignore
/// let post_id = parse_object_id(post_id)?;
/// ```
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: '{}'", id)))
}

/// 조회 연산용 ID 파싱
///
/// 형식이 잘못된 ID를 가진 레코드는 존재할 수 없으므로 `None`으로 취급합니다.
pub fn try_parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// 선택적 ID 변환 (도메인 → 저장 형태)
///
/// 빈 문자열은 아직 저장되지 않은 레코드를 뜻하므로 `None`이 됩니다.
pub fn parse_optional_object_id(id: &str) -> Result<Option<ObjectId>, AppError> {
    if id.is_empty() {
        Ok(None)
    } else {
        parse_object_id(id).map(Some)
    }
}

/// 선택적 ID 변환 (저장 형태 → 도메인)
pub fn object_id_to_string(id: Option<&ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);

        match parse_object_id("not-an-id") {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("not-an-id")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_try_parse_object_id() {
        assert!(try_parse_object_id("507f1f77bcf86cd799439011").is_some());
        assert!(try_parse_object_id("missing").is_none());
        assert!(try_parse_object_id("").is_none());
    }

    #[test]
    fn test_optional_object_id_round_trip() {
        let id = ObjectId::new();
        let hex = object_id_to_string(Some(&id));

        assert_eq!(parse_optional_object_id(&hex).unwrap(), Some(id));
        assert_eq!(object_id_to_string(None), "");
        assert_eq!(parse_optional_object_id("").unwrap(), None);
    }
}
