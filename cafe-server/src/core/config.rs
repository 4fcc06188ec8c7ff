/// 服务器配置 - Cafe API 的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | cafes.db | SQLite 数据库文件路径 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | API_KEY | what ever you like | 删除接口的共享密钥 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/cafes.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 删除接口的共享密钥 (api-key 查询参数)
    pub api_key: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_key: std::env::var("API_KEY").unwrap_or_else(|_| "what ever you like".into()),
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

    /// 校验删除接口的共享密钥
    ///
    /// 密钥以明文查询参数传递，这是沿用的对外契约。
    /// 比较逻辑集中在这里，之后可以整体替换为真正的凭证机制。
    pub fn delete_key_matches(&self, provided: &str) -> bool {
        provided == self.api_key
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/test.db", 8080);
        assert_eq!(config.database_path, "/tmp/test.db");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_delete_key_matches() {
        let mut config = Config::with_overrides("cafes.db", 3000);
        config.api_key = "secret".into();
        assert!(config.delete_key_matches("secret"));
        assert!(!config.delete_key_matches("Secret"));
        assert!(!config.delete_key_matches(""));
    }
}
