//! Cafe API Handlers
//!
//! 每个处理器都是薄翻译层：读取/校验参数，发起最多一次仓储调用，
//! 把结果 (或错误) 序列化为 JSON。响应信封的键名沿用既有契约。

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Cafe, CafeCreate};
use crate::db::repository::cafe as cafe_repo;
use crate::utils::validation::{
    MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

const MISSING_DATA_MESSAGE: &str = "Please provide all the required information.";

// ==================
// Response envelopes
// ==================

/// `{"cafes": [...]}`
#[derive(Serialize)]
pub struct CafesResponse {
    cafes: Vec<Cafe>,
}

/// `{"cafe": {...}}`
#[derive(Serialize)]
pub struct CafeResponse {
    cafe: Cafe,
}

/// `{"message": "..."}`
#[derive(Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

/// `{"response": {"success": "..."}}`
#[derive(Serialize)]
pub struct SuccessResponse {
    response: SuccessBody,
}

#[derive(Serialize)]
struct SuccessBody {
    success: &'static str,
}

impl SuccessResponse {
    fn new(message: &'static str) -> Self {
        Self {
            response: SuccessBody { success: message },
        }
    }
}

// ==================
// Query parameters
// ==================

#[derive(Deserialize)]
pub struct SearchQuery {
    loc: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePriceQuery {
    new_price: Option<String>,
}

#[derive(Deserialize)]
pub struct ReportClosedQuery {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

// ==================
// Handlers
// ==================

/// GET /cafes - 获取所有咖啡馆
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CafesResponse>> {
    let cafes = cafe_repo::find_all(state.pool()).await?;
    Ok(Json(CafesResponse { cafes }))
}

/// GET /random - 随机返回一家咖啡馆
///
/// 空库时返回 200 和提示消息 (沿用契约，不是错误)。
pub async fn random(State(state): State<ServerState>) -> AppResult<Response> {
    match cafe_repo::find_random(state.pool()).await? {
        Some(cafe) => Ok(Json(CafeResponse { cafe }).into_response()),
        None => Ok(Json(MessageResponse {
            message: "No cafes found in the database.",
        })
        .into_response()),
    }
}

/// GET /search?loc= - 按位置精确搜索 (大小写敏感)
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<CafeResponse>> {
    let miss = || {
        AppError::SearchMiss("Sorry, we don't have a cafe at that location.".to_string())
    };

    // loc 缺失等同于搜索未命中
    let loc = query.loc.ok_or_else(miss)?;
    let cafe = cafe_repo::find_by_location(state.pool(), &loc)
        .await?
        .ok_or_else(miss)?;
    Ok(Json(CafeResponse { cafe }))
}

/// POST /add - 新增咖啡馆
///
/// 校验顺序：必填字段非空 → 至少一个特性开关为 true。
/// coffee_price 不能在创建时设置。
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<CafeCreate>,
) -> AppResult<Json<SuccessResponse>> {
    validate_create(&payload)?;

    // name 重复由 UNIQUE 约束捕获，映射为 409 Conflict
    cafe_repo::create(state.pool(), payload).await?;

    Ok(Json(SuccessResponse::new(
        "Successfully added new Cafe to the database.",
    )))
}

/// PATCH /update_price/{id}?new_price= - 更新咖啡价格
pub async fn update_price(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> AppResult<Json<SuccessResponse>> {
    // 新价格和 coffee_price 列共用同一长度上限
    validate_optional_text(query.new_price.as_deref(), "new_price", MAX_TEXT_LEN)?;

    let updated =
        cafe_repo::update_price(state.pool(), id, query.new_price.as_deref()).await?;
    if !updated {
        return Err(AppError::NotFound(
            "Sorry, a cafe with that id was not found in the database.".to_string(),
        ));
    }
    Ok(Json(SuccessResponse::new("Successfully updated the price.")))
}

/// DELETE /report-closed/{id}?api-key= - 删除咖啡馆
///
/// 密钥校验在前：密钥错误时即使 id 不存在也返回 403。
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ReportClosedQuery>,
) -> AppResult<Json<SuccessResponse>> {
    let provided = query.api_key.unwrap_or_default();
    if !state.config.delete_key_matches(&provided) {
        return Err(AppError::Forbidden(
            "Sorry, that's not allowed. Make sure you have the correct api_key.".to_string(),
        ));
    }

    let deleted = cafe_repo::delete(state.pool(), id).await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Sorry, a cafe with that id was not found in the database.".to_string(),
        ));
    }
    Ok(Json(SuccessResponse::new(
        "Successfully deleted the cafe from the database.",
    )))
}

// ==================
// Validation
// ==================

fn validate_create(payload: &CafeCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_TEXT_LEN, MISSING_DATA_MESSAGE)?;
    validate_required_text(&payload.map_url, "map_url", MAX_URL_LEN, MISSING_DATA_MESSAGE)?;
    validate_required_text(&payload.img_url, "img_url", MAX_URL_LEN, MISSING_DATA_MESSAGE)?;
    validate_required_text(
        &payload.location,
        "location",
        MAX_TEXT_LEN,
        MISSING_DATA_MESSAGE,
    )?;
    validate_required_text(&payload.seats, "seats", MAX_TEXT_LEN, MISSING_DATA_MESSAGE)?;

    if !payload.has_any_feature() {
        return Err(AppError::InvalidData(
            "At least one feature (sockets, toilet, wifi, calls) must be selected.".to_string(),
        ));
    }
    Ok(())
}
