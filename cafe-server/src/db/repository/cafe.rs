//! Cafe Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Cafe, CafeCreate};

/// 获取所有咖啡馆 (顺序不保证，实践中为插入顺序)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe",
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

/// 随机取一条记录，随机性由 SQLite 的 RANDOM() 提供
pub async fn find_random(pool: &SqlitePool) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe ORDER BY RANDOM() LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// 按位置精确匹配 (大小写敏感)；多条命中时返回哪条不作保证
pub async fn find_by_location(pool: &SqlitePool, loc: &str) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe WHERE location = ? LIMIT 1",
    )
    .bind(loc)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, \
         has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// 新增一条记录
///
/// name 重复时由 UNIQUE 约束触发 [`RepoError::Duplicate`]；
/// coffee_price 在创建时始终为空。
pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let result = sqlx::query(
        "INSERT INTO cafe \
         (name, map_url, img_url, location, seats, \
          has_toilet, has_wifi, has_sockets, can_take_calls) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// 更新 coffee_price，只触碰这一列
///
/// 返回是否命中记录。`new_price` 为 None 时清空价格。
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: Option<&str>,
) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// 删除记录，返回是否命中
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
