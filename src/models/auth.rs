// src/models/auth.rs
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub userid: String,
    #[serde(
        serialize_with = "crate::models::user::serialize_secret_string",
        deserialize_with = "crate::models::user::deserialize_secret_string"
    )]
    pub password: SecretString,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
