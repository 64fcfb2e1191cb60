pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PATH: &str = "/api/forms/2";

/// Where the inspector sends its single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>) -> Self {
        return Target {
            host: host.into(),
            port,
            path: path.into(),
        };
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_points_at_local_form() {
        let target = Target::default();
        assert_eq!(target.url(), "http://localhost:5000/api/forms/2".to_string());
    }

    #[test]
    fn url_joins_host_port_and_path() {
        let target = Target::new("127.0.0.1", 8080, "/healthcheck");
        assert_eq!(target.url(), "http://127.0.0.1:8080/healthcheck".to_string());
    }
}
