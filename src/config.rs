use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub server_port: u16,
    pub server_host: String,
    /// Whether the stores start with the bundled default tasks and users.
    pub load_seed_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::InternalServerError(format!(
                    "SERVER_PORT must be a number, got {:?}",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let load_seed_data = match env::var("LOAD_SEED_DATA") {
            Ok(raw) => !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            Err(_) => true,
        };

        Ok(Self {
            server_port,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            load_seed_data,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
