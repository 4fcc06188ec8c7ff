use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动/运行阶段的错误
///
/// HTTP 请求级别的错误使用 [`AppError`](crate::utils::AppError)，
/// 这里只覆盖监听、绑定等进程级失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("应用错误: {0}")]
    App(#[from] AppError),
}

/// 服务器层的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
