//! Environment variable validation
//!
//! Variables are read through a lookup function so validation can run against
//! the process environment or a fixed table.

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Minimum length of `AUTH_SECRET`
pub const AUTH_SECRET_MIN_LEN: usize = 32;

/// Which group of variables failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvScope {
    Server,
    Client,
}

impl fmt::Display for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvScope::Server => f.write_str("server"),
            EnvScope::Client => f.write_str("client"),
        }
    }
}

/// Variable name → messages
pub type FieldErrors = IndexMap<&'static str, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("{scope} environment validation failed: {}", describe(.field_errors))]
    Invalid {
        scope: EnvScope,
        field_errors: FieldErrors,
    },
}

fn describe(field_errors: &FieldErrors) -> String {
    field_errors
        .iter()
        .map(|(name, messages)| format!("{name}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Validated server-side variables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerEnv {
    pub app_env: AppEnv,
    pub database_url: Option<Url>,
    pub auth_secret: Option<String>,
    pub api_secret_key: Option<String>,
}

impl ServerEnv {
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Validate every variable, reporting all failures together
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EnvError> {
        let mut errors = FieldErrors::new();

        let app_env = match lookup("APP_ENV") {
            None => AppEnv::default(),
            Some(raw) => AppEnv::parse(&raw).unwrap_or_else(|| {
                push_error(
                    &mut errors,
                    "APP_ENV",
                    "expected one of 'development', 'production', 'test'",
                );
                AppEnv::default()
            }),
        };
        let database_url = parse_url(&lookup, "DATABASE_URL", &mut errors);
        let auth_secret = lookup("AUTH_SECRET");
        if let Some(secret) = &auth_secret {
            if secret.chars().count() < AUTH_SECRET_MIN_LEN {
                push_error(
                    &mut errors,
                    "AUTH_SECRET",
                    format!("must contain at least {AUTH_SECRET_MIN_LEN} characters"),
                );
            }
        }
        let api_secret_key = lookup("API_SECRET_KEY");

        finish(EnvScope::Server, errors)?;
        Ok(Self {
            app_env,
            database_url,
            auth_secret,
            api_secret_key,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    pub fn is_test(&self) -> bool {
        self.app_env == AppEnv::Test
    }
}

/// Validated variables safe to show to users
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientEnv {
    pub app_url: Option<Url>,
    pub api_url: Option<Url>,
}

impl ClientEnv {
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EnvError> {
        let mut errors = FieldErrors::new();
        let app_url = parse_url(&lookup, "APP_URL", &mut errors);
        let api_url = parse_url(&lookup, "API_URL", &mut errors);

        finish(EnvScope::Client, errors)?;
        Ok(Self { app_url, api_url })
    }
}

fn push_error(errors: &mut FieldErrors, name: &'static str, message: impl Into<String>) {
    errors.entry(name).or_default().push(message.into());
}

fn parse_url(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    errors: &mut FieldErrors,
) -> Option<Url> {
    let raw = lookup(name)?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            push_error(errors, name, format!("invalid url: {e}"));
            None
        }
    }
}

fn finish(scope: EnvScope, field_errors: FieldErrors) -> Result<(), EnvError> {
    if field_errors.is_empty() {
        return Ok(());
    }
    tracing::error!("{} environment validation failed: {:?}", scope, field_errors);
    Err(EnvError::Invalid {
        scope,
        field_errors,
    })
}
