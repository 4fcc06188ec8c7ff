//! 数据模型模块

pub mod cafe;
pub mod serde_helpers;

pub use cafe::{Cafe, CafeCreate};
