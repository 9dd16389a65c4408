use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    #[serde(alias = "identifier")]
    pub user_id: String,
    #[serde(alias = "secret")]
    pub password: String,
}

/// Token pair returned by login and refresh.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "RefreshToken")]
    pub refresh_token: String,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequestBody {
    pub refresh_token: String,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    pub user_id: String,
    pub password: String,
    pub email: String,
    pub nickname: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub member_id: i64,
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdateRequestBody {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FindUserIdRequestBody {
    pub email: String,
    pub nickname: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindUserIdResponse {
    pub user_id: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PasswordCheckRequestBody {
    pub password: String,
}
