//! Cafe API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /cafes | GET | 获取所有咖啡馆 |
//! | /random | GET | 随机返回一家咖啡馆 |
//! | /search?loc= | GET | 按位置精确搜索 |
//! | /add | POST | 新增咖啡馆 |
//! | /update_price/{id}?new_price= | PATCH | 更新咖啡价格 |
//! | /report-closed/{id}?api-key= | DELETE | 删除咖啡馆 (需共享密钥) |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cafes", get(handler::list))
        .route("/random", get(handler::random))
        .route("/search", get(handler::search))
        .route("/add", post(handler::add))
        .route("/update_price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed))
}
