//! 사용자 DTO ⇄ 도메인 모델 변환

use crate::domain::dto::{NewUserProfileDto, UserDto};
use crate::domain::models::{NewUserProfileDomainModel, UserDomainModel, UserProfileDomainModel};
use crate::utils::id_utils::object_id_to_string;

impl From<UserDto> for UserDomainModel {
    fn from(user: UserDto) -> Self {
        let UserDto {
            id,
            username,
            email,
            name,
            surname,
            avatar,
            ..
        } = user;

        Self {
            id: object_id_to_string(id.as_ref()),
            username,
            email,
            name,
            surname,
            avatar,
        }
    }
}

impl From<UserDto> for UserProfileDomainModel {
    fn from(user: UserDto) -> Self {
        let UserDto {
            username,
            email,
            name,
            surname,
            avatar,
            ..
        } = user;

        Self {
            username,
            email,
            name,
            surname,
            avatar,
        }
    }
}

impl From<NewUserProfileDomainModel> for NewUserProfileDto {
    fn from(profile: NewUserProfileDomainModel) -> Self {
        Self {
            name: profile.name,
            surname: profile.surname,
            avatar: profile.avatar,
        }
    }
}

impl From<NewUserProfileDto> for NewUserProfileDomainModel {
    fn from(profile: NewUserProfileDto) -> Self {
        Self {
            name: profile.name,
            surname: profile.surname,
            avatar: profile.avatar,
        }
    }
}
