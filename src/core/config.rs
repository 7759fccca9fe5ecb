/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | staff.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | PAGE_SIZE | 2 | 列表分页默认每页条数 |
/// | PROTECT_DEPARTMENT_LIST | false | 列表接口是否拒绝匿名访问 |
/// | LOG_DIR | (无) | 日志文件目录，不设置则仅输出到 stdout |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/staff.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 列表分页默认每页条数
    pub page_size: u32,
    /// 部门列表是否拒绝匿名访问 (示例性策略)
    pub protect_list: bool,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "staff.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|&p| p > 0)
                .unwrap_or(2),
            protect_list: std::env::var("PROTECT_DEPARTMENT_LIST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 日志级别：开发环境 debug，其余 info
    pub fn log_level(&self) -> &'static str {
        if self.is_development() { "debug" } else { "info" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
