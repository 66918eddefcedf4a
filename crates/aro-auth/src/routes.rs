use super::*;

/// Access class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Public,
    AuthOnly,
    Protected,
}

/// Prefix tables and redirect targets driving the gate.
///
/// Matching is case-sensitive `starts_with`. The two tables never overlap:
/// no prefix in one may be a prefix of (or equal to) a prefix in the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    auth: Vec<String>,
    protected: Vec<String>,
    signin: String,
    landing: String,
}

impl Routes {
    pub fn new(
        auth: Vec<String>,
        protected: Vec<String>,
        signin: String,
        landing: String,
    ) -> Result<Self, AuthError> {
        if let Some((a, p)) = auth
            .iter()
            .flat_map(|a| protected.iter().map(move |p| (a, p)))
            .find(|(a, p)| a.starts_with(p.as_str()) || p.starts_with(a.as_str()))
        {
            return Err(AuthError::RouteMisclassified(format!(
                "auth-only {:?} overlaps protected {:?}",
                a, p
            )));
        }
        let routes = Self {
            auth,
            protected,
            signin,
            landing,
        };
        if routes.classify(&routes.signin) == Class::Protected {
            return Err(AuthError::RouteMisclassified(format!(
                "sign-in route {:?} is protected",
                routes.signin
            )));
        }
        if routes.classify(&routes.landing) == Class::AuthOnly {
            return Err(AuthError::RouteMisclassified(format!(
                "landing route {:?} is auth-only",
                routes.landing
            )));
        }
        Ok(routes)
    }
    pub fn classify(&self, path: &str) -> Class {
        if self.auth.iter().any(|a| path.starts_with(a.as_str())) {
            Class::AuthOnly
        } else if self.protected.iter().any(|p| path.starts_with(p.as_str())) {
            Class::Protected
        } else {
            Class::Public
        }
    }
    pub fn signin(&self) -> &str {
        &self.signin
    }
    pub fn landing(&self) -> &str {
        &self.landing
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            auth: aro_core::AUTH_ROUTES.iter().map(|s| s.to_string()).collect(),
            protected: aro_core::PROTECTED_ROUTES.iter().map(|s| s.to_string()).collect(),
            signin: aro_core::SIGNIN_ROUTE.to_string(),
            landing: aro_core::LANDING_ROUTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classifies_defaults() {
        let routes = Routes::default();
        assert!(routes.classify("/") == Class::Public);
        assert!(routes.classify("/auth/sign-in") == Class::AuthOnly);
        assert!(routes.classify("/chatbot") == Class::Protected);
        assert!(routes.classify("/chatbot/history") == Class::Protected);
        assert!(routes.classify("/womens-health") == Class::Protected);
        assert!(routes.classify("/api/auth/sign-in") == Class::Public);
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(Routes::default().classify("/Chatbot") == Class::Public);
    }

    #[test]
    fn defaults_pass_validation() {
        let routes = Routes::new(
            strings(aro_core::AUTH_ROUTES),
            strings(aro_core::PROTECTED_ROUTES),
            aro_core::SIGNIN_ROUTE.to_string(),
            aro_core::LANDING_ROUTE.to_string(),
        );
        assert!(routes == Ok(Routes::default()));
    }

    #[test]
    fn rejects_overlap() {
        let routes = Routes::new(
            strings(&["/auth"]),
            strings(&["/auth/account"]),
            String::from("/auth"),
            String::from("/home"),
        );
        assert!(matches!(routes, Err(AuthError::RouteMisclassified(_))));
    }

    #[test]
    fn rejects_protected_signin() {
        let routes = Routes::new(
            strings(&[]),
            strings(&["/"]),
            String::from("/login"),
            String::from("/home"),
        );
        assert!(matches!(routes, Err(AuthError::RouteMisclassified(_))));
    }

    #[test]
    fn rejects_auth_only_landing() {
        let routes = Routes::new(
            strings(&["/login"]),
            strings(&["/app"]),
            String::from("/login"),
            String::from("/login/welcome"),
        );
        assert!(matches!(routes, Err(AuthError::RouteMisclassified(_))));
    }

    #[test]
    fn arbitrary_tables() {
        let routes = Routes::new(
            strings(&["/enter"]),
            strings(&["/vault", "/ledger"]),
            String::from("/enter"),
            String::from("/vault"),
        )
        .unwrap();
        assert!(routes.classify("/ledger/2024") == Class::Protected);
        assert!(routes.classify("/chatbot") == Class::Public);
        assert!(routes.classify("/enter") == Class::AuthOnly);
    }
}
