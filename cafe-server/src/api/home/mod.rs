//! 首页路由
//!
//! `GET /` 返回一个静态落地页，介绍可用的 API 接口。

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Cafe API</title>
</head>
<body>
    <h1>Cafe &amp; Wifi API</h1>
    <p>A catalogue of cafes to work from.</p>
    <ul>
        <li><code>GET /cafes</code> &mdash; all cafes</li>
        <li><code>GET /random</code> &mdash; a random cafe</li>
        <li><code>GET /search?loc=&lt;location&gt;</code> &mdash; search by location</li>
        <li><code>POST /add</code> &mdash; add a cafe</li>
        <li><code>PATCH /update_price/&lt;id&gt;?new_price=&lt;price&gt;</code> &mdash; update coffee price</li>
        <li><code>DELETE /report-closed/&lt;id&gt;?api-key=&lt;key&gt;</code> &mdash; report a cafe as closed</li>
    </ul>
</body>
</html>
"#;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(home))
}

/// GET / - 静态落地页
async fn home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
