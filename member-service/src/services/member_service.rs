use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{
    AddressCreateRequest, AddressResponse, AuthContext, Email, FindUserIdRequestBody,
    FindUserIdResponse, Member, MemberChanges, MemberProfile, MemberUpdateRequestBody,
    NewAddress, NewMember, Nickname, Page, PageRequest, Password, RegisterRequestBody, Role,
    UserId,
};
use crate::errors::{AuthError, MemberError};
use crate::utils::AdminBootstrap;

pub struct MemberService {}

impl MemberService {
    /// New members always get `Role::User`.
    pub async fn register(
        state: &AppState,
        request: RegisterRequestBody,
    ) -> Result<Member, MemberError> {
        let user_id = UserId::parse(request.user_id).map_err(MemberError::Validation)?;
        let password = Password::parse(request.password).map_err(MemberError::Validation)?;
        let email = Email::parse(request.email).map_err(MemberError::Validation)?;
        let nickname = Nickname::parse(request.nickname).map_err(MemberError::Validation)?;

        Self::create(state, user_id, password, email, nickname, Role::User).await
    }

    /// Creates the configured administrator unless the user id is already taken.
    pub async fn bootstrap_admin(
        state: &AppState,
        admin: &AdminBootstrap,
    ) -> Result<Option<Member>, MemberError> {
        let user_id = UserId::parse(admin.user_id.clone()).map_err(MemberError::Validation)?;
        let password = Password::parse(admin.password.clone()).map_err(MemberError::Validation)?;
        let email = Email::parse(admin.email.clone()).map_err(MemberError::Validation)?;
        let nickname = Nickname::parse(admin.user_id.clone()).map_err(MemberError::Validation)?;

        match Self::create(state, user_id, password, email, nickname, Role::Admin).await {
            Ok(member) => Ok(Some(member)),
            Err(MemberError::UserIdTaken) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(
        state: &AppState,
        user_id: UserId,
        password: Password,
        email: Email,
        nickname: Nickname,
        role: Role,
    ) -> Result<Member, MemberError> {
        let password_hash = state.hasher.hash(password.as_ref()).await.map_err(|e| {
            log::error!("{e}");
            MemberError::InternalServerError
        })?;

        let member = state
            .member_store
            .write()
            .await
            .add_member(NewMember {
                user_id,
                password_hash,
                email,
                nickname,
                role,
            })
            .await?;

        log::info!("registered member {} as {}", member.member_id, member.role);
        Ok(member)
    }

    pub async fn profile(state: &AppState, ctx: &AuthContext) -> Result<MemberProfile, MemberError> {
        ctx.require(Role::User)?;
        let member = state
            .member_store
            .read()
            .await
            .get_by_id(ctx.member_id)
            .await?;
        Ok(MemberProfile::from(&member))
    }

    /// Changing the password also ends the member's refresh session.
    pub async fn update(
        state: &AppState,
        ctx: &AuthContext,
        member_id: i64,
        request: MemberUpdateRequestBody,
    ) -> Result<MemberProfile, MemberError> {
        ctx.require(Role::User)?;
        ctx.require_owner_or_admin(member_id)?;

        let nickname = request
            .nickname
            .map(Nickname::parse)
            .transpose()
            .map_err(MemberError::Validation)?;
        let email = request
            .email
            .map(Email::parse)
            .transpose()
            .map_err(MemberError::Validation)?;
        let password = request
            .password
            .map(Password::parse)
            .transpose()
            .map_err(MemberError::Validation)?;

        // Hash before taking the write lock; the store applies only these fields.
        let password_hash = match password {
            Some(password) => Some(state.hasher.hash(password.as_ref()).await.map_err(|e| {
                log::error!("{e}");
                MemberError::InternalServerError
            })?),
            None => None,
        };
        let changes = MemberChanges {
            nickname,
            email,
            password_hash,
        };
        let password_changed = changes.changes_password();

        let updated = state
            .member_store
            .write()
            .await
            .update_profile(member_id, changes)
            .await?;

        if password_changed {
            state
                .session_store
                .write()
                .await
                .invalidate(&updated.user_id)
                .await
                .map_err(AuthError::from)?;
        }

        Ok(MemberProfile::from(&updated))
    }

    /// Logical deletion. The member's refresh session is dropped with it.
    pub async fn delete(
        state: &AppState,
        ctx: &AuthContext,
        member_id: i64,
    ) -> Result<(), MemberError> {
        ctx.require(Role::User)?;
        ctx.require_owner_or_admin(member_id)?;

        let deleted = state
            .member_store
            .write()
            .await
            .delete_member(member_id, Utc::now())
            .await?;

        state
            .session_store
            .write()
            .await
            .invalidate(&deleted.user_id)
            .await
            .map_err(AuthError::from)?;

        log::info!("member {} deleted by member {}", member_id, ctx.member_id);
        Ok(())
    }

    pub async fn list(
        state: &AppState,
        ctx: &AuthContext,
        page: PageRequest,
    ) -> Result<Page<MemberProfile>, MemberError> {
        ctx.require(Role::User)?;
        let members = state.member_store.read().await.list_members(&page).await?;
        Ok(members.map(|m| MemberProfile::from(&m)))
    }

    pub async fn find_user_id(
        state: &AppState,
        request: FindUserIdRequestBody,
    ) -> Result<FindUserIdResponse, MemberError> {
        let email = Email::parse(request.email).map_err(MemberError::Validation)?;
        let nickname = Nickname::parse(request.nickname).map_err(MemberError::Validation)?;
        let member = state
            .member_store
            .read()
            .await
            .find_by_email_and_nickname(email.as_ref(), nickname.as_ref())
            .await?;
        Ok(FindUserIdResponse {
            user_id: member.user_id,
        })
    }

    pub async fn check_password(
        state: &AppState,
        ctx: &AuthContext,
        password: &str,
    ) -> Result<(), MemberError> {
        ctx.require(Role::User)?;
        let member = state
            .member_store
            .read()
            .await
            .get_by_id(ctx.member_id)
            .await?;
        let matches = state
            .hasher
            .verify(password, &member.password_hash)
            .await
            .map_err(|e| {
                log::error!("{e}");
                MemberError::InternalServerError
            })?;
        if matches {
            Ok(())
        } else {
            Err(MemberError::PasswordMismatch)
        }
    }

    pub async fn add_address(
        state: &AppState,
        ctx: &AuthContext,
        request: AddressCreateRequest,
    ) -> Result<AddressResponse, MemberError> {
        ctx.require(Role::User)?;
        let address = NewAddress::try_from(request).map_err(MemberError::Validation)?;
        let address = state
            .member_store
            .write()
            .await
            .add_address(ctx.member_id, address)
            .await?;
        Ok(AddressResponse::from(&address))
    }

    pub async fn list_addresses(
        state: &AppState,
        ctx: &AuthContext,
    ) -> Result<Vec<AddressResponse>, MemberError> {
        ctx.require(Role::User)?;
        let member = state
            .member_store
            .read()
            .await
            .get_by_id(ctx.member_id)
            .await?;
        Ok(member.addresses.iter().map(AddressResponse::from).collect())
    }

    pub async fn remove_address(
        state: &AppState,
        ctx: &AuthContext,
        address_id: i64,
    ) -> Result<(), MemberError> {
        ctx.require(Role::User)?;
        state
            .member_store
            .write()
            .await
            .remove_address(ctx.member_id, address_id)
            .await?;
        Ok(())
    }
}
