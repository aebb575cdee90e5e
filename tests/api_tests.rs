//! HTTP API integration tests, using axum-test against the real router.

mod common;

use axum_test::TestServer;
use common::mocks::{MockLLMClient, MockSearchProvider};
use cora::utils::config::{Config, LLMConfig, SearchConfig, ServerConfig};
use cora::{AppState, ResearchCoordinator, ToolRegistry, tools::ContextualSearchTool};
use serde_json::{Value, json};
use std::sync::Arc;

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        llm: LLMConfig {
            provider: "ollama".to_string(),
            openai_api_key: None,
            openai_api_base: "https://api.openai.com/v1".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            model: "mock-model".to_string(),
        },
        search: SearchConfig {
            exa_api_key: "test".to_string(),
            exa_base_url: "https://api.exa.ai".to_string(),
        },
    }
}

fn test_server(llm: MockLLMClient, search: MockSearchProvider) -> TestServer {
    let llm = Arc::new(llm);
    let search = Arc::new(search);

    let coordinator = Arc::new(ResearchCoordinator::new(llm.clone(), search.clone()));
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(ContextualSearchTool::new(coordinator)));

    let state = AppState {
        config: Arc::new(test_config()),
        llm,
        search,
        tools: Arc::new(tools),
    };

    let app = axum::Router::new()
        .nest("/api", cora::api::routes::create_router())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server(MockLLMClient::new(""), MockSearchProvider::new());

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn parse_endpoint_returns_structured_message() {
    let server = test_server(MockLLMClient::new(""), MockSearchProvider::new());

    let response = server
        .post("/api/parse")
        .json(&json!({
            "content": "<thinking>plan</thinking><final_answer>Answer.</final_answer>\
                        <sources>\n- https://example.com/a A Title\n</sources>"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["reasoning"][0]["kind"], "thinking");
    assert_eq!(body["finalAnswer"], "Answer.");
    assert_eq!(body["sources"][0]["url"], "https://example.com/a");
    assert_eq!(body["sources"][0]["title"], "A Title");
}

#[tokio::test]
async fn research_returns_positional_results() {
    let server = test_server(MockLLMClient::planning(2), MockSearchProvider::new());

    let response = server
        .post("/api/research")
        .json(&json!({
            "numberOfQueries": 2,
            "conversationContext": "discussing rust",
            "currentIntent": "learn about executors"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["queries"].as_array().unwrap().len(), 2);
    assert_eq!(body["searchResults"].as_array().unwrap().len(), 2);
    assert_eq!(body["searchResults"][0]["query"], "query 1");
    assert_eq!(body["metadata"]["totalQueries"], 2);
}

#[tokio::test]
async fn research_rejects_out_of_range_counts() {
    let server = test_server(MockLLMClient::planning(2), MockSearchProvider::new());

    for count in [0, 1, 7] {
        let response = server
            .post("/api/research")
            .json(&json!({
                "numberOfQueries": count,
                "conversationContext": "c",
                "currentIntent": "i"
            }))
            .await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn research_planning_failure_is_a_valid_response() {
    let server = test_server(MockLLMClient::failing(), MockSearchProvider::new());

    let response = server
        .post("/api/research")
        .json(&json!({
            "numberOfQueries": 3,
            "conversationContext": "c",
            "currentIntent": "i"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}

#[tokio::test]
async fn tools_are_listed_with_their_schemas() {
    let server = test_server(MockLLMClient::new(""), MockSearchProvider::new());

    let response = server.get("/api/tools").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let tools = body.as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "contextual_web_search");
    assert_eq!(
        tools[0]["parameters"]["properties"]["numberOfQueries"]["minimum"],
        2
    );
}

#[tokio::test]
async fn tool_execution_runs_the_research_pipeline() {
    let server = test_server(MockLLMClient::planning(2), MockSearchProvider::new());

    let response = server
        .post("/api/tools/contextual_web_search")
        .json(&json!({
            "numberOfQueries": 2,
            "conversationContext": "c",
            "currentIntent": "i"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["searchResults"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let server = test_server(MockLLMClient::new(""), MockSearchProvider::new());

    let response = server
        .post("/api/tools/no_such_tool")
        .json(&json!({}))
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn chat_parses_the_model_reply() {
    let server = test_server(
        MockLLMClient::new(
            "<thinking>consider</thinking><final_answer>Hello there.</final_answer>",
        ),
        MockSearchProvider::new(),
    );

    let response = server
        .post("/api/chat")
        .json(&json!({"message": "hi"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"]["finalAnswer"], "Hello there.");
    assert_eq!(body["message"]["reasoning"][0]["body"], "consider");
    assert_eq!(body["model"], "mock-model");
    assert!(body["raw"].as_str().unwrap().contains("<thinking>"));
}
