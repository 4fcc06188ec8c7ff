//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//!
//! # 错误响应契约
//!
//! 错误以结构化 JSON 返回，键名沿用既有的对外契约：
//!
//! | 变体 | HTTP 状态 | 响应体 |
//! |------|-----------|--------|
//! | MissingData | 200 | `{"error": {"Missing Data": msg, "message": msg}}` |
//! | InvalidData | 200 | `{"error": {"Invalid Data": msg}}` |
//! | SearchMiss | 200 | `{"error": {"Not Found": msg}}` |
//! | NotFound | 404 | `{"error": {"Not Found": msg}}` |
//! | Forbidden | 403 | `{"error": {"Forbidden": msg}}` |
//! | Conflict | 409 | `{"error": {"Conflict": msg}}` |
//! | Database | 500 | `{"error": {"Database": "A database error occurred."}}` |
//!
//! 注意：搜索未命中和新增校验失败返回 200 状态码，这是沿用的
//! 契约而非推荐做法；只有改价/删除的未命中 (404)、删除的密钥
//! 错误 (403) 和重名冲突 (409) 携带非 200 状态。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 校验错误 (新增接口，状态码 200) ==========
    /// 必填字段缺失或为空
    #[error("Missing data: {0}")]
    MissingData(String),

    /// 字段内容无效 (如四个特性开关全为 false)
    #[error("Invalid data: {0}")]
    InvalidData(String),

    // ========== 查找未命中 ==========
    /// 按位置搜索未命中 (状态码 200，沿用契约)
    #[error("Not found: {0}")]
    SearchMiss(String),

    /// 按 id 查找未命中 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    // ========== 授权/冲突 ==========
    /// 共享密钥错误 (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 唯一性冲突，如重复的咖啡馆名称 (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ========== 系统错误 ==========
    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingData(msg) => (
                StatusCode::OK,
                json!({"error": {"Missing Data": msg, "message": msg}}),
            ),
            AppError::InvalidData(msg) => {
                (StatusCode::OK, json!({"error": {"Invalid Data": msg}}))
            }
            AppError::SearchMiss(msg) => (StatusCode::OK, json!({"error": {"Not Found": msg}})),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, json!({"error": {"Not Found": msg}}))
            }
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, json!({"error": {"Forbidden": msg}}))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({"error": {"Conflict": msg}})),
            AppError::Database(msg) => {
                // 记录内部错误但不暴露详细信息
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": {"Database": "A database error occurred."}}),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::InvalidData(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
