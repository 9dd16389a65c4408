use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{Address, Member, MemberChanges, NewAddress, NewMember, Page, PageRequest};

#[derive(Error, Debug, PartialEq)]
pub enum MemberStoreError {
    #[error("user id already registered")]
    UserIdTaken,
    #[error("email already registered")]
    EmailTaken,
    #[error("member not found")]
    MemberNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("unexpected member store error: {0}")]
    Unexpected(String),
}

/// Member records. Lookups only ever return active (not deleted) members.
#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    async fn add_member(&mut self, member: NewMember) -> Result<Member, MemberStoreError>;
    async fn get_by_id(&self, member_id: i64) -> Result<Member, MemberStoreError>;
    async fn get_by_user_id(&self, user_id: &str) -> Result<Member, MemberStoreError>;
    async fn find_by_email_and_nickname(
        &self,
        email: &str,
        nickname: &str,
    ) -> Result<Member, MemberStoreError>;
    /// Applies `changes` to the current record; everything else, addresses included, is kept.
    async fn update_profile(
        &mut self,
        member_id: i64,
        changes: MemberChanges,
    ) -> Result<Member, MemberStoreError>;
    /// Logical deletion; the user id stays reserved.
    async fn delete_member(
        &mut self,
        member_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Member, MemberStoreError>;
    async fn list_members(&self, page: &PageRequest) -> Result<Page<Member>, MemberStoreError>;
    async fn add_address(
        &mut self,
        member_id: i64,
        address: NewAddress,
    ) -> Result<Address, MemberStoreError>;
    async fn remove_address(
        &mut self,
        member_id: i64,
        address_id: i64,
    ) -> Result<(), MemberStoreError>;
}
