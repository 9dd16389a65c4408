use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::{
    Address, Member, MemberChanges, MemberStore, MemberStoreError, NewAddress, NewMember, Page,
    PageRequest,
};

#[derive(Default)]
pub struct HashmapMemberStore {
    // member_id -> member, ordered by id for listing
    members: BTreeMap<i64, Member>,
    last_member_id: i64,
    last_address_id: i64,
}

impl HashmapMemberStore {
    fn active(&self) -> impl Iterator<Item = &Member> {
        self.members.values().filter(|m| m.is_active())
    }

    fn active_mut(&mut self, member_id: i64) -> Result<&mut Member, MemberStoreError> {
        self.members
            .get_mut(&member_id)
            .filter(|m| m.is_active())
            .ok_or(MemberStoreError::MemberNotFound)
    }

    fn email_taken_by_other(&self, email: &str, member_id: i64) -> bool {
        self.active()
            .any(|m| m.member_id != member_id && m.email.eq_ignore_ascii_case(email))
    }
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn add_member(&mut self, member: NewMember) -> Result<Member, MemberStoreError> {
        // user ids stay reserved after deletion
        if self
            .members
            .values()
            .any(|m| m.user_id == member.user_id.as_ref())
        {
            return Err(MemberStoreError::UserIdTaken);
        }
        if self.email_taken_by_other(member.email.as_ref(), 0) {
            return Err(MemberStoreError::EmailTaken);
        }

        self.last_member_id += 1;
        let now = Utc::now();
        let record = Member {
            member_id: self.last_member_id,
            user_id: member.user_id.as_ref().to_owned(),
            password_hash: member.password_hash,
            email: member.email.as_ref().to_owned(),
            nickname: member.nickname.as_ref().to_owned(),
            role: member.role,
            addresses: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.members.insert(record.member_id, record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, member_id: i64) -> Result<Member, MemberStoreError> {
        self.members
            .get(&member_id)
            .filter(|m| m.is_active())
            .cloned()
            .ok_or(MemberStoreError::MemberNotFound)
    }

    async fn get_by_user_id(&self, user_id: &str) -> Result<Member, MemberStoreError> {
        self.active()
            .find(|m| m.user_id == user_id)
            .cloned()
            .ok_or(MemberStoreError::MemberNotFound)
    }

    async fn find_by_email_and_nickname(
        &self,
        email: &str,
        nickname: &str,
    ) -> Result<Member, MemberStoreError> {
        self.active()
            .find(|m| m.email.eq_ignore_ascii_case(email) && m.nickname == nickname)
            .cloned()
            .ok_or(MemberStoreError::MemberNotFound)
    }

    async fn update_profile(
        &mut self,
        member_id: i64,
        changes: MemberChanges,
    ) -> Result<Member, MemberStoreError> {
        if let Some(email) = &changes.email {
            if self.email_taken_by_other(email.as_ref(), member_id) {
                return Err(MemberStoreError::EmailTaken);
            }
        }
        let slot = self.active_mut(member_id)?;
        if let Some(nickname) = changes.nickname {
            slot.nickname = nickname.as_ref().to_owned();
        }
        if let Some(email) = changes.email {
            slot.email = email.as_ref().to_owned();
        }
        if let Some(password_hash) = changes.password_hash {
            slot.password_hash = password_hash;
        }
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete_member(
        &mut self,
        member_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Member, MemberStoreError> {
        let slot = self.active_mut(member_id)?;
        slot.deleted_at = Some(at);
        slot.updated_at = at;
        Ok(slot.clone())
    }

    async fn list_members(&self, page: &PageRequest) -> Result<Page<Member>, MemberStoreError> {
        Ok(Page::from_ordered(self.active().cloned(), page))
    }

    async fn add_address(
        &mut self,
        member_id: i64,
        address: NewAddress,
    ) -> Result<Address, MemberStoreError> {
        let address_id = self.last_address_id + 1;
        let slot = self.active_mut(member_id)?;
        let record = Address {
            address_id,
            address_name: address.address_name,
            region_3depth_name: address.region_3depth_name,
            main_address_no: address.main_address_no,
            road_name: address.road_name,
            point: address.point,
        };
        slot.addresses.push(record.clone());
        slot.updated_at = Utc::now();
        self.last_address_id = address_id;
        Ok(record)
    }

    async fn remove_address(
        &mut self,
        member_id: i64,
        address_id: i64,
    ) -> Result<(), MemberStoreError> {
        let slot = self.active_mut(member_id)?;
        let before = slot.addresses.len();
        slot.addresses.retain(|a| a.address_id != address_id);
        if slot.addresses.len() == before {
            return Err(MemberStoreError::AddressNotFound);
        }
        slot.updated_at = Utc::now();
        Ok(())
    }
}
