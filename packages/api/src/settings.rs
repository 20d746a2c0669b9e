//! # Client settings — where the signup endpoint lives
//!
//! The endpoint path is fixed at [`SIGNUP_PATH`]; only the host and port vary between
//! deployments. Values are layered with the `config` crate:
//!
//! 1. built-in defaults (`localhost:7575`)
//! 2. an optional `gymbook.toml` in the working directory
//! 3. environment variables prefixed with `GYMBOOK`, e.g. `GYMBOOK_SIGNUP_HOST`
//!
//! WASM builds have neither a filesystem nor a process environment, so
//! [`Settings::load`] falls back to the defaults there.

use serde::Deserialize;

#[cfg(not(target_arch = "wasm32"))]
use config::{Config, Environment, File, FileFormat};
use config::ConfigError;

/// Path of the signup call on the authentication server.
pub const SIGNUP_PATH: &str = "/api/v1/auth/signup";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 7575;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signup {
    pub host: String,
    pub port: u16,
}

impl Default for Signup {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    pub signup: Signup,
}

impl Settings {
    /// Build settings from defaults, `gymbook.toml` and the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("signup.host", DEFAULT_HOST)?
            .set_default("signup.port", DEFAULT_PORT)?
            .add_source(
                File::with_name("gymbook.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("GYMBOOK")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }

    /// Base URL of the authentication server, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.signup.host, self.signup.port)
    }

    /// Full URL of the signup call.
    pub fn signup_url(&self) -> String {
        format!("{}{}", self.base_url(), SIGNUP_PATH)
    }
}
