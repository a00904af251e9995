//! 사용자 도메인 모델
//!
//! 서비스 계층과 상위 API 핸들러가 사용하는 사용자 표현입니다.
//! 비밀번호 해시와 인증 토큰은 어떤 도메인 모델에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 정보 (조회/생성 결과)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDomainModel {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub avatar: Option<String>,
}

/// 사용자 프로필
///
/// 상위 API 계층에 공개되는 프로필 계약입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDomainModel {
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub avatar: Option<String>,
}

/// 프로필 변경 요청
///
/// 프로필에서 변경 가능한 필드는 `name`, `surname`, `avatar`뿐입니다.
/// `avatar`가 `None`이면 기존 아바타가 유지됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewUserProfileDomainModel {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub surname: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 아바타 URL을 입력해주세요"))]
    pub avatar: Option<String>,
}

/// 새 사용자 등록 요청
///
/// `password`는 평문이며 서비스 계층에서 bcrypt로 해싱된 뒤 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUserDomainModel {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub surname: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 아바타 URL을 입력해주세요"))]
    pub avatar: Option<String>,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 공백만으로 이루어진 값 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만 입력할 수 없습니다".into()));
    }
    Ok(())
}
