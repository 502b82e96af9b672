use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// CJ-style supplier credential. Absence is not a startup failure;
    /// supplier calls report it as a configuration error instead.
    pub cj_access_token: Option<String>,
    /// EPROLO-style supplier credential. Same absence semantics as
    /// `cj_access_token`.
    pub eprolo_api_key: Option<String>,
    pub cj_api_base: String,
    pub eprolo_api_base: String,
    /// Supplier used when a request does not name one. Parsed by the
    /// suppliers crate; kept as the raw string here.
    pub default_supplier: String,
    pub supplier_timeout_secs: u64,
    pub supplier_user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "cj_access_token",
                &self.cj_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "eprolo_api_key",
                &self.eprolo_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("cj_api_base", &self.cj_api_base)
            .field("eprolo_api_base", &self.eprolo_api_base)
            .field("default_supplier", &self.default_supplier)
            .field("supplier_timeout_secs", &self.supplier_timeout_secs)
            .field("supplier_user_agent", &self.supplier_user_agent)
            .finish()
    }
}
