use thiserror::Error;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Identifiers for the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Needed when the service is set to strict mode for non-browser calls.
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl MailerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: require(SERVICE_ID_VAR)?,
            template_id: require(TEMPLATE_ID_VAR)?,
            public_key: require(PUBLIC_KEY_VAR)?,
            private_key: get(PRIVATE_KEY_VAR),
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
        })
    }
}
