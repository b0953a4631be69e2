use std::env;

/// HTTP listener settings.
///
/// Environment variables:
/// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
/// - SERVICE_PORT: Port to bind (default: 8080, also used when unparsable)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(8080);

        Self { ip, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
