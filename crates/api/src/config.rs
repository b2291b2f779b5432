use npo2xml_guide::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running against the live guide.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `300`). A full week for
    /// every channel is a lot of sequential upstream calls.
    pub request_timeout_secs: u64,
    /// Scheme and host of the guide API.
    pub guide_base_url: String,
    /// `User-Agent` sent with every guide request.
    pub guide_user_agent: String,
    /// Channel catalog file. `None` uses the catalog compiled into the binary.
    pub channels_path: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                         |
    /// |------------------------|-------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                       |
    /// | `PORT`                 | `3000`                                          |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`                         |
    /// | `REQUEST_TIMEOUT_SECS` | `300`                                           |
    /// | `GUIDE_BASE_URL`       | `https://npo.nl`                                |
    /// | `GUIDE_USER_AGENT`     | `NPO2XML (https://github.com/NoahvdAa/NPO2XML)` |
    /// | `CHANNELS_PATH`        | bundled catalog                                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let guide_base_url =
            std::env::var("GUIDE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let guide_user_agent =
            std::env::var("GUIDE_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());

        let channels_path = std::env::var("CHANNELS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            guide_base_url,
            guide_user_agent,
            channels_path,
        }
    }
}
