use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const SESSION_TOKEN_TYPE: &str = "session";

/// Lifetime of a session token and of the store record it names.
pub const SESSION_TTL: std::time::Duration = std::time::Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sid: String,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

impl Claims {
    pub fn new(sid: String, exp: usize, iat: usize, token_type: String) -> Self {
        Claims {
            sid,
            exp,
            iat,
            token_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub session_ttl: Duration,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            session_ttl: Duration::seconds(SESSION_TTL.as_secs() as i64),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, session_id: &str, token_type: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            SESSION_TOKEN_TYPE => (now + self.session_ttl).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims::new(session_id.to_string(), exp, iat, token_type.to_string());

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<String, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_carries_the_session_id() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token("abc-123", SESSION_TOKEN_TYPE).unwrap();
        assert_eq!(
            jwt.verify_token(&token, SESSION_TOKEN_TYPE).unwrap(),
            "abc-123"
        );
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = JwtConfig::new("one")
            .generate_token("abc", SESSION_TOKEN_TYPE)
            .unwrap();
        assert!(matches!(
            JwtConfig::new("two").verify_token(&token, SESSION_TOKEN_TYPE),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn unknown_token_type_is_refused() {
        let jwt = JwtConfig::new("s");
        assert!(matches!(
            jwt.generate_token("abc", "refresh"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
