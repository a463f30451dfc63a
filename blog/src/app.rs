use crate::constants::{DEFAULT_ENV, DEFAULT_HOST, DEFAULT_MAX_DB_CONNECTIONS};
use crate::errors::BlogError;
use crate::models::post::Post;
use crate::resources::templates::Templates;
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::{env, fs};

#[derive(Clone, Default, Deserialize)]
pub struct AuthorCfg {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl AuthorCfg {
    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(username) = lookup("BLOG_AUTHOR_USERNAME") {
            self.username = username;
        }

        if let Some(password) = lookup("BLOG_AUTHOR_PASSWORD") {
            self.password = password;
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_max_db_connections")]
    pub max_db_connections: u32,
    #[serde(default)]
    pub author: AuthorCfg,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_max_db_connections() -> u32 {
    DEFAULT_MAX_DB_CONNECTIONS
}

impl Config {
    /// Reads `config.{ENV}.toml` from the working directory and applies environment overrides.
    pub fn load() -> Result<Self, BlogError> {
        Self::load_with(|key| env::var(key).ok())
    }

    fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BlogError> {
        let env = lookup("ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());
        let config_file = format!("config.{}.toml", env);
        let contents = fs::read_to_string(&config_file)
            .map_err(|e| BlogError::ConfigError(format!("Unable to read {}: {}", config_file, e)))?;

        let mut config = Self::parse(&contents)?;
        config.apply_overrides(&lookup);
        config.validate()?;

        Ok(config)
    }

    /// `DATABASE_URL`, `BLOG_AUTHOR_USERNAME` and `BLOG_AUTHOR_PASSWORD` win over the file.
    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(database_url) = lookup("DATABASE_URL") {
            self.database_url = database_url;
        }

        self.author.apply_overrides(lookup);
    }

    pub fn parse(contents: &str) -> Result<Self, BlogError> {
        let config = toml::from_str::<Config>(contents)?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), BlogError> {
        if self.author.username.is_empty() || self.author.password.is_empty() {
            return Err(BlogError::ConfigError(
                "Author username and password must be set".to_string(),
            ));
        }

        Ok(())
    }
}

pub struct App {
    pub config: Config,
    pub db_pool: SqlitePool,
    pub templates: Templates,
}

impl App {
    pub async fn new() -> Result<Self, BlogError> {
        dotenv::dotenv().ok();

        let config = Config::load()?;
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let db_pool = SqlitePoolOptions::new()
            .max_connections(config.max_db_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(config, db_pool)
    }

    pub fn with_pool(config: Config, db_pool: SqlitePool) -> Result<Self, BlogError> {
        let templates = Templates::new()?;

        Ok(Self {
            config,
            db_pool,
            templates,
        })
    }

    /// Init processes that need to be run on startup
    pub async fn init(&self) -> Result<(), BlogError> {
        // init logger
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

        // init schema
        Post::migrate(&self.db_pool).await?;

        Ok(())
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }
}
