use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Process settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the three `.sav` model files.
    pub model_dir: PathBuf,
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// `OUTBREAK_MODEL_DIR` defaults to the directory of the running
    /// executable; `OUTBREAK_BIND` defaults to `127.0.0.1:8501`.
    pub fn from_env() -> eyre::Result<Self> {
        let model_dir = match env::var_os("OUTBREAK_MODEL_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => executable_dir()?,
        };

        let bind = env::var("OUTBREAK_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = parse_bind(&bind)?;

        Ok(Self { model_dir, bind })
    }
}

fn executable_dir() -> eyre::Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| eyre::eyre!("executable {} has no parent directory", exe.display()))
}

pub fn parse_bind(value: &str) -> eyre::Result<SocketAddr> {
    value
        .parse()
        .map_err(|e| eyre::eyre!("invalid OUTBREAK_BIND '{value}': {e}"))
}
