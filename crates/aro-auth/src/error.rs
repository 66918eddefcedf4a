/// Errors raised while issuing or checking identity tokens and route tables.
///
/// The gate treats every `Token*` verification kind the same way; the
/// distinction only reaches logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    TokenMissing,
    TokenMalformed,
    TokenExpired,
    TokenSignatureInvalid,
    TokenIssue(String),
    RouteMisclassified(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenMissing => write!(f, "missing token"),
            Self::TokenMalformed => write!(f, "malformed token"),
            Self::TokenExpired => write!(f, "token expired"),
            Self::TokenSignatureInvalid => write!(f, "invalid token signature"),
            Self::TokenIssue(s) => write!(f, "failed to issue token: {}", s),
            Self::RouteMisclassified(s) => write!(f, "route table misconfigured: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::InvalidSignature => Self::TokenSignatureInvalid,
            _ => Self::TokenMalformed,
        }
    }
}
