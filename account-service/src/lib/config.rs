use std::env;

use auth::jwt::DEFAULT_TOKEN_TTL_HOURS;
use auth::password::DEFAULT_ITERATIONS;
use auth::password::DEFAULT_MEMORY_KIB;
use auth::password::DEFAULT_PARALLELISM;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::SecretKey;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Signing secret substituted when `jwt.secret` is empty outside production.
pub const DEVELOPMENT_JWT_SECRET: &str = "your-secret-key-change-this-in-production";

/// Longest token lifetime accepted from configuration (one year).
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

const PRODUCTION_RUN_MODE: &str = "production";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Argon2 work factor for newly hashed passwords.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8080_i64)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.expiration_hours", DEFAULT_TOKEN_TTL_HOURS)?
            .set_default("password.memory_kib", i64::from(DEFAULT_MEMORY_KIB))?
            .set_default("password.iterations", i64::from(DEFAULT_ITERATIONS))?
            .set_default("password.parallelism", i64::from(DEFAULT_PARALLELISM))?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        config.with_resolved_secret(&run_mode)
    }

    /// Reject values that would produce unusable tokens.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `jwt.expiration_hours` is outside `1..=MAX_EXPIRATION_HOURS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}, got {}",
                MAX_EXPIRATION_HOURS, self.jwt.expiration_hours
            )));
        }

        Ok(())
    }

    /// Substitute the development secret when none is configured.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Secret is empty and the run mode is production
    pub fn with_resolved_secret(mut self, run_mode: &str) -> Result<Self, ConfigError> {
        if !self.jwt.secret.is_empty() {
            return Ok(self);
        }

        if run_mode == PRODUCTION_RUN_MODE {
            return Err(ConfigError::Message(
                "jwt.secret must be set when RUN_MODE=production".to_string(),
            ));
        }

        tracing::warn!(
            run_mode,
            "jwt.secret is not configured; falling back to the development secret"
        );
        self.jwt.secret = DEVELOPMENT_JWT_SECRET.to_string();

        Ok(self)
    }

    /// Lifetime of issued tokens. Only meaningful after `validate`.
    pub fn token_ttl(&self) -> Duration {
        Duration::hours(self.jwt.expiration_hours.clamp(1, MAX_EXPIRATION_HOURS))
    }

    pub fn secret_key(&self) -> SecretKey {
        SecretKey::from(self.jwt.secret.as_str())
    }

    pub fn password_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        PasswordHasher::with_cost(
            self.password.memory_kib,
            self.password.iterations,
            self.password.parallelism,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/test".to_string(),
            },
            server: ServerConfig { http_port: 0 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_hours: 24,
            },
            password: PasswordConfig {
                memory_kib: DEFAULT_MEMORY_KIB,
                iterations: DEFAULT_ITERATIONS,
                parallelism: DEFAULT_PARALLELISM,
            },
        }
    }

    #[test]
    fn test_configured_secret_is_kept() {
        let config = config_with_secret("configured")
            .with_resolved_secret("production")
            .expect("Configured secret rejected");

        assert_eq!(config.jwt.secret, "configured");
    }

    #[test]
    fn test_empty_secret_falls_back_in_development() {
        let config = config_with_secret("")
            .with_resolved_secret("development")
            .expect("Fallback refused");

        assert_eq!(config.jwt.secret, DEVELOPMENT_JWT_SECRET);
        assert!(!config.secret_key().is_empty());
    }

    #[test]
    fn test_empty_secret_fails_in_production() {
        let result = config_with_secret("").with_resolved_secret("production");

        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config_with_secret("do-not-print");

        assert!(!format!("{:?}", config).contains("do-not-print"));
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let mut config = config_with_secret("x");
        config.database.url = "postgresql://admin:hunter22@db/accounts".to_string();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter22"));
        assert!(!printed.contains("postgresql://"));
    }

    #[test]
    fn test_expiration_hours_in_range() {
        let mut config = config_with_secret("x");
        assert!(config.validate().is_ok());
        assert_eq!(config.token_ttl(), Duration::hours(24));

        config.jwt.expiration_hours = 1;
        assert!(config.validate().is_ok());

        config.jwt.expiration_hours = MAX_EXPIRATION_HOURS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expiration_hours_out_of_range() {
        for hours in [0, -1, MAX_EXPIRATION_HOURS + 1, i64::MAX / 10] {
            let mut config = config_with_secret("x");
            config.jwt.expiration_hours = hours;

            assert!(
                matches!(config.validate(), Err(ConfigError::Message(_))),
                "accepted {hours}"
            );
        }
    }

    #[test]
    fn test_token_ttl_never_panics() {
        let mut config = config_with_secret("x");
        config.jwt.expiration_hours = i64::MAX / 10;

        assert_eq!(config.token_ttl(), Duration::hours(MAX_EXPIRATION_HOURS));
    }

    #[test]
    fn test_issued_token_verifies_with_configured_ttl() {
        let mut config = config_with_secret("x");
        config.jwt.expiration_hours = 1;
        config.validate().expect("Valid ttl rejected");

        let secret = std::sync::Arc::new(config.secret_key());
        let token = auth::TokenIssuer::new(secret.clone())
            .with_ttl(config.token_ttl())
            .issue(1, "a@x.com")
            .expect("Failed to issue token");

        assert!(auth::TokenVerifier::new(secret).verify(&token).is_ok());
    }

    #[test]
    fn test_password_hasher_from_config() {
        let mut config = config_with_secret("x");
        assert!(config.password_hasher().is_ok());

        config.password.memory_kib = 0;
        assert!(config.password_hasher().is_err());
    }
}
