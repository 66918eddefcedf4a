use super::*;
use aro_core::ID;

/// Token service bound to one signing secret.
///
/// HS256 with zero leeway: a token is rejected as soon as `now > exp`.
/// Signature comparison is constant-time inside `jsonwebtoken`.
#[derive(Clone)]
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.required_spec_claims = std::collections::HashSet::new();
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    /// Mint a token for `user`. `None` leaves the token without expiry.
    pub fn issue(
        &self,
        user: ID<Member>,
        ttl: Option<std::time::Duration>,
    ) -> Result<String, AuthError> {
        self.encode(&Claims::new(user, ttl))
    }
    /// Check signature and expiry, yielding the subject.
    pub fn verify(&self, token: &str) -> Result<ID<Member>, AuthError> {
        self.decode(token).map(|claims| claims.user())
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::from)
    }
}
