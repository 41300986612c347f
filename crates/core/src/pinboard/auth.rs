use std::fmt;

/// How requests authenticate against the API
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Send nothing
    #[default]
    None,
    /// `auth_token` query parameter
    Token(String),
    /// HTTP Basic auth
    Basic { user: String, password: String },
}

impl Credentials {
    /// Pick the auth mode from optional CLI values.
    ///
    /// A username or password wins over a token; blank values count as absent.
    pub fn resolve(user: Option<&str>, password: Option<&str>, token: Option<&str>) -> Self {
        match (present(user), present(password), present(token)) {
            (None, None, Some(token)) => Credentials::Token(token.to_string()),
            (None, None, None) => Credentials::None,
            (user, password, _) => Credentials::Basic {
                user: user.unwrap_or_default().to_string(),
                password: password.unwrap_or_default().to_string(),
            },
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Credentials::None => "none",
            Credentials::Token(_) => "token",
            Credentials::Basic { .. } => "basic",
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => write!(f, "None"),
            Credentials::Token(_) => write!(f, "Token(***)"),
            Credentials::Basic { user, .. } => {
                write!(f, "Basic {{ user: {user:?}, password: *** }}")
            }
        }
    }
}
