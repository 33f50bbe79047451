use std::fmt::{self, Debug, Formatter};

/// A password that never shows up in debug output
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}
