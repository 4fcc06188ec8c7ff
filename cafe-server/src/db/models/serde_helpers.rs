//! Common serde helpers for lenient request payloads
//!
//! 新增接口的特性开关沿用宽松的真值语义：调用方可以传布尔、
//! 数字、字符串甚至省略字段，统一按真值/假值折算。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a bool from any truthy/falsy JSON value
///
/// | 输入 | 结果 |
/// |------|------|
/// | 缺失 / null | false |
/// | bool | 原值 |
/// | 数字 | != 0 |
/// | 字符串 | 非空 |
/// | 数组/对象 | 非空 |
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    })
}
