use super::*;
use aro_core::Unique;
use serde::Deserialize;
use serde::Serialize;

/// Missing fields deserialize as empty strings so handlers can answer with
/// their own validation message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub data: UserInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub fname: String,
    pub lname: String,
    pub email: String,
}

impl From<&Member> for UserInfo {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().to_string(),
            fname: member.fname().to_string(),
            lname: member.lname().to_string(),
            email: member.email().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    pub fname: String,
    pub lname: String,
    pub email: String,
}

impl From<&Member> for Profile {
    fn from(member: &Member) -> Self {
        Self {
            fname: member.fname().to_string(),
            lname: member.lname().to_string(),
            email: member.email().to_string(),
        }
    }
}
