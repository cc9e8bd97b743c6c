use anyhow::Result;
use std::fmt;

/// Environment variable holding the controller password.
pub const PASSWORD_ENV: &str = "ESP_PASS";

/// The shared controller password. Kept out of `Debug` output so it does
/// not end up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    /// Use `env_value` when the variable is present, even if it is empty.
    /// Only an absent variable triggers `prompt`.
    pub fn resolve<F>(env_value: Option<String>, prompt: F) -> Result<Self>
    where
        F: FnOnce() -> Result<String>,
    {
        match env_value {
            Some(secret) => Ok(Credential(secret)),
            None => Ok(Credential(prompt()?)),
        }
    }

    /// Read `ESP_PASS`, asking on the terminal when it is not set.
    pub fn from_env_or_prompt() -> Result<Self> {
        Self::resolve(std::env::var(PASSWORD_ENV).ok(), crate::ui::prompt_password)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
