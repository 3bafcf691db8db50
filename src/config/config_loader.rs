use anyhow::{Context, Result};

use super::config_model::{Database, DotEnvyConfig, Server};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").context("DATABASE_URL is invalid")?,
        max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS is invalid")?,
    };

    Ok(DotEnvyConfig { server, database })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so every case lives in one test.
    #[test]
    fn load_applies_defaults_and_rejects_bad_values() {
        unsafe {
            std::env::remove_var("SERVER_PORT");
            std::env::remove_var("SERVER_BODY_LIMIT");
            std::env::remove_var("SERVER_TIMEOUT");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::set_var("DATABASE_URL", "postgres://localhost:5432/shop");
        }

        let config = load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.body_limit, 10);
        assert_eq!(config.server.timeout, 30);
        assert_eq!(config.database.url, "postgres://localhost:5432/shop");
        assert_eq!(config.database.max_connections, 10);

        unsafe {
            std::env::set_var("SERVER_PORT", "not-a-port");
        }
        let err = load().unwrap_err().to_string();
        assert!(err.contains("SERVER_PORT is invalid"), "got: {err}");

        unsafe {
            std::env::remove_var("SERVER_PORT");
        }
    }
}
