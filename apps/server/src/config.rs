/// Server configuration, read from environment variables once at startup.
pub struct Config {
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("QFX_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        Self { listen_addr }
    }
}
