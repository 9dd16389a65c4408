use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Address, AddressResponse, Email, Nickname, Role, TokenSubject, UserId};

/// Stored member record; the identity behind every token.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub member_id: i64,
    pub user_id: String,
    pub password_hash: String,
    pub email: String,
    pub nickname: String,
    pub role: Role,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn token_subject(&self) -> TokenSubject {
        TokenSubject {
            identity_id: self.member_id,
            username: self.user_id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMember {
    pub user_id: UserId,
    pub password_hash: String,
    pub email: Email,
    pub nickname: Nickname,
    pub role: Role,
}

/// Fields a member may change about themselves. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct MemberChanges {
    pub nickname: Option<Nickname>,
    pub email: Option<Email>,
    pub password_hash: Option<String>,
}

impl MemberChanges {
    pub fn changes_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub member_id: i64,
    pub user_id: String,
    pub email: String,
    pub nickname: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub addresses: Vec<AddressResponse>,
}

impl From<&Member> for MemberProfile {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id,
            user_id: member.user_id.clone(),
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            role: member.role,
            created_at: member.created_at,
            addresses: member.addresses.iter().map(AddressResponse::from).collect(),
        }
    }
}
