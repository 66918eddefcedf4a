use super::*;
use aro_core::ID;

/// Identity token payload.
///
/// `exp` is optional: tokens minted at sign-up carry none.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn new(user: ID<Member>, ttl: Option<std::time::Duration>) -> Self {
        Self::issued(user, now(), ttl)
    }
    /// Claims as if minted at unix second `iat`.
    pub fn issued(user: ID<Member>, iat: i64, ttl: Option<std::time::Duration>) -> Self {
        Self {
            sub: user.inner(),
            iat,
            exp: ttl.map(|ttl| iat + ttl.as_secs() as i64),
        }
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
}

/// Current unix time in seconds.
pub fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aro_core::Arbitrary;

    #[test]
    fn ttl_sets_expiry() {
        let claims = Claims::issued(ID::random(), 1_000, Some(std::time::Duration::from_secs(60)));
        assert!(claims.exp == Some(1_060));
    }

    #[test]
    fn no_ttl_never_expires() {
        let claims = Claims::issued(ID::random(), 0, None);
        assert!(claims.exp.is_none());
    }

    #[test]
    fn omits_absent_expiry() {
        let claims = Claims::issued(ID::random(), 0, None);
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("exp").is_none());
    }
}
