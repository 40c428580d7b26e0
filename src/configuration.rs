use secrecy::{ExposeSecret, SecretString};
use config::Config;
use sqlx::ConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use tracing::log::LevelFilter;
use crate::domain::MailingList;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub telemetry: TelemetrySettings,
    pub email_client: EmailClientSettings,
    pub notifications: NotificationSettings,
}

/// Where spans are exported over OTLP, when `enabled`.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct TelemetrySettings {
    pub enabled: bool,
    pub address: String,
    pub port: u16,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(serde::Deserialize, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

#[derive(serde::Deserialize, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub authorization_token: SecretString,
    pub timeout_milliseconds: u64,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct NotificationSettings {
    pub sender_email: String,
    pub subscribers: Vec<String>,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(self) -> Result<EmailClient, reqwest::Error> {
        let timeout = self.timeout();
        EmailClient::new(self.base_url, self.authorization_token, timeout)
    }
}

impl NotificationSettings {
    pub fn mailing_list(&self) -> Result<MailingList, String> {
        MailingList::parse(self.sender_email.clone(), self.subscribers.clone())
    }
}

impl DatabaseSettings {
    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db()
            .database(&self.database_name)
            .log_statements(LevelFilter::Trace)
    }

    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl { PgSslMode::Require } else { PgSslMode::Disable };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .ssl_mode(ssl_mode)
    }
}


pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(configuration_directory.join("base")).required(true))
        .add_source(config::File::from(configuration_directory.join(environment.as_str())).required(true))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(config::Environment::with_prefix("app").prefix_separator("_").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment. Use either `local` or `production`.", other)),
        }
    }
}
