//! Cafe API Server - 咖啡馆目录 HTTP 服务
//!
//! # 架构概述
//!
//! 本模块是 Cafe API 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx 连接池 + 迁移)
//! - **HTTP API** (`api`): RESTful API 接口 (列表/随机/搜索/新增/改价/删除)
//! - **配置** (`core`): 环境变量驱动的配置和服务器状态
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! └── utils/         # 错误响应、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在加载配置之前调用，保证 .env 中的变量可见。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在时静默忽略
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____         ___    ____  ____
  / ____/___ _/ __/__      /   |  / __ \/  _/
 / /   / __ `/ /_/ _ \    / /| | / /_/ // /
/ /___/ /_/ / __/  __/   / ___ |/ ____// /
\____/\__,_/_/  \___/   /_/  |_/_/   /___/
    "#
    );
}
