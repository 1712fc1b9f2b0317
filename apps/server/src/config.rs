/// Server configuration resolved from the environment.
pub struct Config {
    pub listen_addr: String,
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("ASSETDESK_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8480".to_string());
        let data_dir = std::env::var("ASSETDESK_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        Self {
            listen_addr,
            data_dir,
        }
    }
}
