use crate::{
    parser,
    types::{ParseRequest, ParsedMessage},
};
use axum::Json;

/// Parse raw assistant output into its structured sections
#[utoipa::path(
    post,
    path = "/api/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Parsed message", body = ParsedMessage)
    ),
    tag = "parse"
)]
pub async fn parse_message(Json(payload): Json<ParseRequest>) -> Json<ParsedMessage> {
    Json(parser::parse(&payload.content))
}
