//! Connection settings: credentials, user agent and target endpoint.
//!
//! # Design
//! The canonical variant names one of two fixed environments
//! (`Configuration::new`). The alternate variant takes an explicit base URL
//! (`Configuration::with_base_url`), mainly for local mock servers. Each
//! variant validates only its own input; neither touches the network.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ConfigError;
use crate::validation::{is_blank, is_http_url};

pub const SANDBOX_BASE_URL: &str = "https://sandbox.yaymemories.com/papi/";
pub const PRODUCTION_BASE_URL: &str = "https://portal.yaymemories.com/papi/";

pub const ENV_USERNAME: &str = "YAY_PARTNER_USERNAME";
pub const ENV_PASSWORD: &str = "YAY_PARTNER_PASSWORD";
pub const ENV_USER_AGENT: &str = "YAY_PARTNER_USER_AGENT";
pub const ENV_ENVIRONMENT: &str = "YAY_PARTNER_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "YAY_PARTNER_BASE_URL";

/// One of the two hosted partner API deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `sandbox` or `production`.
impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Endpoint {
    Environment(Environment),
    BaseUrl(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    username: String,
    password: String,
    user_agent: String,
    endpoint: Endpoint,
}

impl Configuration {
    /// `environment` must be `sandbox` or `production`; `user_agent` must be
    /// non-blank and look like `AppName/Version`.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        user_agent: impl Into<String>,
        environment: &str,
    ) -> Result<Self, ConfigError> {
        let environment = environment.parse::<Environment>()?;
        let user_agent = user_agent.into();
        validate_user_agent(&user_agent)?;
        Ok(Self {
            username: username.into(),
            password: password.into(),
            user_agent,
            endpoint: Endpoint::Environment(environment),
        })
    }

    /// Targets an explicit base URL instead of a named environment.
    ///
    /// The URL must be absolute `http`/`https` without query or fragment. A
    /// trailing `/` is appended when missing.
    pub fn with_base_url(
        username: impl Into<String>,
        password: impl Into<String>,
        user_agent: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url)?;
        let user_agent = user_agent.into();
        validate_user_agent(&user_agent)?;
        Ok(Self {
            username: username.into(),
            password: password.into(),
            user_agent,
            endpoint: Endpoint::BaseUrl(base_url),
        })
    }

    /// Reads `YAY_PARTNER_USERNAME`, `YAY_PARTNER_PASSWORD`,
    /// `YAY_PARTNER_USER_AGENT` and `YAY_PARTNER_ENVIRONMENT` from the process
    /// environment. When `YAY_PARTNER_ENVIRONMENT` is unset,
    /// `YAY_PARTNER_BASE_URL` is used instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `from_env` with a caller-supplied variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVariable(name));

        let username = require(ENV_USERNAME)?;
        let password = require(ENV_PASSWORD)?;
        let user_agent = require(ENV_USER_AGENT)?;

        match (lookup(ENV_ENVIRONMENT), lookup(ENV_BASE_URL)) {
            (Some(environment), _) => Self::new(username, password, user_agent, &environment),
            (None, Some(base_url)) => Self::with_base_url(username, password, user_agent, &base_url),
            (None, None) => Err(ConfigError::MissingVariable(ENV_ENVIRONMENT)),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `None` when configured with an explicit base URL.
    pub fn environment(&self) -> Option<Environment> {
        match self.endpoint {
            Endpoint::Environment(environment) => Some(environment),
            Endpoint::BaseUrl(_) => None,
        }
    }

    /// Always ends with `/`.
    pub fn base_url(&self) -> &str {
        match &self.endpoint {
            Endpoint::Environment(environment) => environment.base_url(),
            Endpoint::BaseUrl(url) => url,
        }
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment() == Some(Environment::Sandbox)
    }

    pub fn is_production(&self) -> bool {
        self.environment() == Some(Environment::Production)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url())
            .finish()
    }
}

fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if is_blank(user_agent) {
        return Err(ConfigError::EmptyUserAgent);
    }
    if !user_agent.contains('/') {
        return Err(ConfigError::InvalidUserAgent(user_agent.to_string()));
    }
    Ok(())
}

fn normalize_base_url(base_url: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidBaseUrl(base_url.to_string());
    if !is_http_url(base_url) {
        return Err(invalid());
    }
    let url = Url::parse(base_url).map_err(|_| invalid())?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    let mut normalized = base_url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
