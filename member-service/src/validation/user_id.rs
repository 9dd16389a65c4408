use once_cell::sync::Lazy;
use regex::Regex;

static USER_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{4,20}$").expect("user id pattern compiles"));

pub fn is_valid_user_id(user_id: &str) -> bool {
    USER_ID_RE.is_match(user_id)
}
