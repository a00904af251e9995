//! 사용자 저장 형태(DTO)
//!
//! `users` 컬렉션 문서와 1:1로 대응되는 구조체입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `users` 컬렉션에 저장되는 사용자 문서
///
/// `password`는 항상 bcrypt 해시이며 평문이 저장되는 일은 없습니다.
/// `username`, `email`, `password`, `token`은 식별 필드로,
/// 프로필 업데이트 경로에서는 절대 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub username: String,
    /// 해시된 비밀번호
    pub password: String,
    /// 이메일 (unique)
    pub email: String,
    /// 아바타 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub name: String,
    pub surname: String,
    /// 인증 토큰 (세션 계층에서 관리)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserDto {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 프로필 업데이트용 저장 형태
///
/// `avatar`가 `None`이면 저장된 아바타를 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserProfileDto {
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
