use crate::validation::is_valid_password;

const POLICY: &str =
    "Password must be at least 8 characters with one uppercase letter and one special character";

/// Plain-text password that passed the strength policy. Only its Argon2 hash is stored.
#[derive(PartialEq, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        if is_valid_password(&password) {
            Ok(Password(password))
        } else {
            Err(POLICY.to_owned())
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}
