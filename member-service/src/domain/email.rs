use crate::validation::is_valid_email;

/// Trimmed, syntactically valid address. Case is kept as entered.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(email: String) -> Result<Email, String> {
        let email = email.trim();
        if is_valid_email(email) {
            Ok(Email(email.to_owned()))
        } else {
            Err(format!("{email} is not a valid email address"))
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
