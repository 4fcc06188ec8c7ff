//! Cafe Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Cafe entity (咖啡馆)
///
/// 序列化为扁平 JSON 对象，键名与数据库列一一对应。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// 座位数的自由文本描述，如 "20-30"
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// 创建时始终为空，只能通过改价接口设置
    pub coffee_price: Option<String>,
}

/// Create cafe payload
///
/// 特性开关按真值/假值折算，缺失视为 false；
/// coffee_price 不在创建载荷中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default, deserialize_with = "serde_helpers::truthy")]
    pub has_toilet: bool,
    #[serde(default, deserialize_with = "serde_helpers::truthy")]
    pub has_wifi: bool,
    #[serde(default, deserialize_with = "serde_helpers::truthy")]
    pub has_sockets: bool,
    #[serde(default, deserialize_with = "serde_helpers::truthy")]
    pub can_take_calls: bool,
}

impl CafeCreate {
    /// 至少一个特性开关为 true
    pub fn has_any_feature(&self) -> bool {
        self.has_toilet || self.has_wifi || self.has_sockets || self.can_take_calls
    }
}
