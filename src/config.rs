use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct ServerArgs {
    #[clap(short, long)]
    pub log_level: Option<String>,
    #[clap(short, long, default_value = "3000")]
    pub port: u16,
    #[clap(long)]
    pub cors_origin: Option<String>,
    /// Insert demo users, profiles and posts at startup
    #[clap(long)]
    pub seed: bool,
}

impl ServerArgs {
    /// Log level from `--log-level`, falling back to info.
    pub fn level(&self) -> Level {
        match self
            .log_level
            .as_deref()
            .unwrap_or("info")
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}
