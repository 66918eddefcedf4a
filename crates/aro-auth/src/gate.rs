use super::*;

/// What the gate learned about the caller's token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Missing,
    Valid(Claims),
    Invalid(AuthError),
}

/// Outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Redirect { location: String, clear: bool },
}

/// Route protection policy.
///
/// | token   | protected          | auth-only        | public |
/// |---------|--------------------|------------------|--------|
/// | valid   | allow              | go to landing    | allow  |
/// | invalid | clear, go sign in  | allow            | allow  |
/// | missing | go sign in         | allow            | allow  |
///
/// Stale cookies are only cleared on protected paths; elsewhere they are
/// left alone.
#[derive(Clone)]
pub struct Gate {
    crypto: Crypto,
    routes: Routes,
    jar: Jar,
}

impl Gate {
    pub fn new(crypto: Crypto, routes: Routes, jar: Jar) -> Self {
        Self { crypto, routes, jar }
    }
    pub fn jar(&self) -> &Jar {
        &self.jar
    }
    /// Cookie value first, then `Authorization: Bearer`. Empty values count
    /// as absent; any other header shape yields nothing.
    pub fn extract<'a>(cookie: Option<&'a str>, header: Option<&'a str>) -> Option<&'a str> {
        cookie.filter(|c| !c.is_empty()).or_else(|| {
            header
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
    }
    pub fn token(&self, cookie: Option<&str>, header: Option<&str>) -> Token {
        match Self::extract(cookie, header) {
            None => Token::Missing,
            Some(token) => match self.crypto.decode(token) {
                Ok(claims) => Token::Valid(claims),
                Err(e) => Token::Invalid(e),
            },
        }
    }
    pub fn decide(&self, class: Class, token: &Token) -> Verdict {
        match (token, class) {
            (Token::Valid(_), Class::AuthOnly) => Verdict::Redirect {
                location: self.routes.landing().to_string(),
                clear: false,
            },
            (Token::Invalid(_), Class::Protected) => Verdict::Redirect {
                location: self.routes.signin().to_string(),
                clear: true,
            },
            (Token::Missing, Class::Protected) => Verdict::Redirect {
                location: self.routes.signin().to_string(),
                clear: false,
            },
            (Token::Valid(_), Class::Protected | Class::Public) => Verdict::Allow,
            (Token::Invalid(_) | Token::Missing, Class::AuthOnly | Class::Public) => Verdict::Allow,
        }
    }
    pub fn judge(&self, path: &str, cookie: Option<&str>, header: Option<&str>) -> Verdict {
        let class = self.routes.classify(path);
        let token = self.token(cookie, header);
        if let Token::Invalid(ref e) = token {
            log::debug!("rejected token on {} ({:?}): {}", path, class, e);
        }
        self.decide(class, &token)
    }
}
