use std::{collections::HashMap, fs::File, net::SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_HOST/APP_PORT: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
    #[error("failed to load .env: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Reads `APP_HOST` and `APP_PORT`, falling back to `0.0.0.0:3000`.
    ///
    /// Values from a `.env` file in the working directory (or a parent) are
    /// used when the process environment does not set them. A missing `.env`
    /// is fine; one that cannot be read or parsed is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = read_env_file(dotenvy::dotenv_iter())?;
        Self::from_sources(&file, |key| std::env::var(key).ok())
    }

    fn from_sources(
        file: &HashMap<String, String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| env(key).or_else(|| file.get(key).cloned());
        let host = lookup("APP_HOST");
        let port = lookup("APP_PORT");
        Self::from_vars(host.as_deref(), port.as_deref())
    }

    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or(DEFAULT_HOST);
        let port = port.unwrap_or(DEFAULT_PORT);

        // IPv6 literals need brackets to parse as a socket address
        let addr = if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };

        Ok(Self {
            addr: addr.parse()?,
        })
    }
}

fn read_env_file(
    iter: Result<dotenvy::Iter<File>, dotenvy::Error>,
) -> Result<HashMap<String, String>, ConfigError> {
    match iter {
        Ok(iter) => Ok(iter.collect::<Result<_, dotenvy::Error>>()?),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}
