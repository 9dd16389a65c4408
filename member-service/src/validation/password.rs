use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("upper pattern compiles"));
static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("special pattern compiles"));

/// At least 8 characters, one ASCII uppercase letter, one non-alphanumeric character.
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= 8 && UPPER_RE.is_match(pw) && SPECIAL_RE.is_match(pw)
}
