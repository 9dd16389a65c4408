#[derive(PartialEq, Debug, Clone, Eq)]
pub struct Nickname(String);

impl Nickname {
    pub const MAX_CHARS: usize = 20;

    pub fn parse(nickname: String) -> Result<Nickname, String> {
        let trimmed = nickname.trim();
        if trimmed.is_empty() || trimmed.chars().count() > Self::MAX_CHARS {
            return Err(format!(
                "Nickname must be between 1 and {} characters",
                Self::MAX_CHARS
            ));
        }
        Ok(Nickname(trimmed.to_owned()))
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
