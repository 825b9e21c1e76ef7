//! Server configuration

use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Name of the data directory created next to the executable.
pub const DATA_DIR_NAME: &str = "data";

/// Configuration for the to-do server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `todos.json` and `last_updated.txt`
    pub data_dir: PathBuf,
    /// Port on 127.0.0.1 to listen on
    pub port: u16,
    /// Open the UI in the default browser once the server is up
    pub open_browser: bool,
    /// HTML file to serve at `/` instead of the embedded page
    pub template: Option<PathBuf>,
    /// Run the daily reset before every `GET /api/todos`, not just at startup
    pub reconcile_on_read: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            port: DEFAULT_PORT,
            open_browser: true,
            template: None,
            reconcile_on_read: false,
        }
    }
}

impl AppConfig {
    /// Address the browser should be pointed at.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }
}

/// `data/` beside the running executable, or `./data` if that cannot be
/// determined.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert!(config.open_browser);
        assert!(config.template.is_none());
        assert!(!config.reconcile_on_read);
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn url_uses_loopback() {
        let config = AppConfig {
            port: 8123,
            ..AppConfig::default()
        };
        assert_eq!(config.url(), "http://127.0.0.1:8123/");
    }
}
