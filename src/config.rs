use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "extractive-summarizer")]
#[command(about = "HTTP service producing extractive text summaries", long_about = None)]
pub struct AppConfig {
    #[arg(long, env = "SUMMARIZER_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Staging directory for uploaded documents; files never outlive a request.
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be > 0".into());
        }
        if self.max_upload_bytes > 100 * 1024 * 1024 {
            return Err("max_upload_bytes too large (max 100MB)".into());
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        self.bind
            .parse::<SocketAddr>()
            .map_err(|_| format!("invalid bind address: {}", self.bind))
    }
}
