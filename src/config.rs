/// Environment variable checked first for the API key.
pub const PRIMARY_KEY_VAR: &str = "GEMINI_API_KEY";
/// Fallback environment variable, used when the primary is unset or empty.
pub const FALLBACK_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("neither GEMINI_API_KEY nor GOOGLE_API_KEY is set")]
    MissingApiKey,
}

/// API key configuration, resolved once at startup.
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = [PRIMARY_KEY_VAR, FALLBACK_KEY_VAR]
            .into_iter()
            .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self { api_key })
    }
}
