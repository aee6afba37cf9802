use config::ConfigError;
use serde::Deserialize;

pub const DEFAULT_ADMIN_TOKEN: &str = "change_me_please";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
    // 管理后台的绝对地址, 评论链接都基于它生成 (保留站点路径前缀)
    pub admin_base_url: String,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct SecuritySettings {
    pub admin_token: String,
    /// Capabilities granted to whoever presents the admin token.
    pub admin_capabilities: Vec<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.cors_origins", "*")?
            .set_default("server.admin_base_url", "http://127.0.0.1:3000/admin/")?
            .set_default("database.url", "sqlite://data/comment-column.db")?
            .set_default("security.admin_token", DEFAULT_ADMIN_TOKEN)?
            .set_default("security.admin_capabilities", vec!["list_users"])?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(
                config::Environment::with_prefix("COMMENT_COLUMN")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("security.admin_capabilities")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
