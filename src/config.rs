use std::net::SocketAddr;

use clap::Parser;

/// ToDo API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-api", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_API_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    /// Directory of the sled database
    #[arg(long, env = "TODO_API_DB_PATH", default_value = "db")]
    pub db_path: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "TODO_API_LOG", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = Config::try_parse_from(["todo-api"])?;
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.db_path, "db");
        Ok(())
    }

    #[test]
    fn test_overrides() -> anyhow::Result<()> {
        let config = Config::try_parse_from([
            "todo-api",
            "--addr",
            "127.0.0.1:8080",
            "--db-path",
            "/tmp/todos",
            "--log-level",
            "debug",
        ])?;
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.db_path, "/tmp/todos");
        assert_eq!(config.log_level, "debug");
        Ok(())
    }

    #[test]
    fn test_rejects_bad_addr() {
        assert!(Config::try_parse_from(["todo-api", "--addr", "nowhere"]).is_err());
    }
}
