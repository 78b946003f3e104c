/// Address the server binds to: all interfaces, port 4221.
pub const LISTEN_ADDR: &str = "0.0.0.0:4221";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            listen_addr: LISTEN_ADDR.to_string(),
        }
    }
}
