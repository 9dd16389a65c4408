use crate::validation::is_valid_user_id;

/// Login identifier chosen at registration.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(user_id: String) -> Result<UserId, String> {
        match is_valid_user_id(&user_id) {
            true => Ok(UserId(user_id)),
            false => Err(format!(
                "User id {} is not valid, use 4-20 letters, digits or underscores",
                user_id
            )),
        }
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
