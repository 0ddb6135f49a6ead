//! Application configuration management.

use serde::Deserialize;

use crate::types::Language;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Business profile used when rendering quotes.
    #[serde(default)]
    pub business: BusinessConfig,
    /// Staff access configuration.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Business profile.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessConfig {
    /// Trading name shown on invoices.
    #[serde(default = "default_business_name")]
    pub name: String,
    /// Language used when the client has not picked one.
    #[serde(default)]
    pub default_language: Language,
    /// Two-letter province code used for business-service tax.
    #[serde(default = "default_province")]
    pub default_province: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            default_language: Language::default(),
            default_province: default_province(),
        }
    }
}

fn default_business_name() -> String {
    "Taxdesk".to_string()
}

fn default_province() -> String {
    "ON".to_string()
}

/// Staff access configuration.
///
/// Staff are identified by email; the list is passed explicitly to the
/// services that need it instead of living in a global constant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Emails allowed to perform staff actions.
    #[serde(default)]
    pub emails: Vec<String>,
}

impl AdminConfig {
    /// Creates an admin configuration from a list of emails.
    #[must_use]
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the email belongs to a staff member.
    ///
    /// Comparison ignores case and surrounding whitespace.
    #[must_use]
    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.trim();
        !email.is_empty()
            && self
                .emails
                .iter()
                .any(|admin| admin.trim().eq_ignore_ascii_case(email))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `TAXDESK__*` variables.
    /// `TAXDESK__ADMIN__EMAILS` is a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TAXDESK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("admin.emails")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
