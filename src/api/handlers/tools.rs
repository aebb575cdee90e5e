use crate::{
    AppState,
    types::{Result, ToolDefinition},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

/// List the registered tools and their argument schemas
#[utoipa::path(
    get,
    path = "/api/tools",
    responses(
        (status = 200, description = "Tool definitions", body = [ToolDefinition])
    ),
    tag = "tools"
)]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.tools.get_tool_definitions())
}

/// Execute a registered tool by name with JSON arguments
#[utoipa::path(
    post,
    path = "/api/tools/{name}",
    request_body = Value,
    responses(
        (status = 200, description = "Tool result"),
        (status = 400, description = "Invalid arguments"),
        (status = 404, description = "Unknown tool")
    ),
    tag = "tools"
)]
pub async fn execute_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<Value>> {
    let result = state.tools.execute(&name, args).await?;
    Ok(Json(result))
}
