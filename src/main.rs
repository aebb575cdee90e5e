use anyhow::Context;
use clap::Parser;
use cora::{
    AppState, Config, ExaClient, LLMClient, SearchProvider, ToolRegistry,
    cli::{Cli, Commands, output::Output},
    research::ResearchCoordinator,
    tools::ContextualSearchTool,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "cora=debug,tower_http=debug"
    } else {
        "cora=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Parse { file, json }) => run_parse(&output, &file, json),
        Some(Commands::Research {
            queries,
            context,
            intent,
        }) => run_research(&output, queries, &context, &intent).await,
        None => serve(&output).await,
    }
}

fn run_parse(output: &Output, file: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let parsed = cora::parse(&raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        output.parsed_message(&parsed);
    }
    Ok(())
}

async fn run_research(
    output: &Output,
    queries: u8,
    context: &str,
    intent: &str,
) -> anyhow::Result<()> {
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let (llm, search) = build_clients(&config).await?;

    output.info(&format!(
        "planning {} queries with {}",
        queries,
        llm.model_name()
    ));
    let coordinator = ResearchCoordinator::new(llm, search);
    let outcome = coordinator.research(queries, context, intent).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

async fn serve(output: &Output) -> anyhow::Result<()> {
    output.banner();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let (llm, search) = build_clients(&config).await?;

    let coordinator = Arc::new(ResearchCoordinator::new(llm.clone(), search.clone()));
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(ContextualSearchTool::new(coordinator)));

    output.info(&format!("LLM model: {}", llm.model_name()));
    output.info(&format!("search provider: {}", search.name()));

    let state = AppState {
        config: Arc::new(config.clone()),
        llm,
        search,
        tools: Arc::new(tools),
    };

    let app = axum::Router::new()
        .nest("/api", cora::api::routes::create_router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    output.success(&format!("listening on http://{}", addr));
    tracing::info!(%addr, "server started");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_clients(
    config: &Config,
) -> anyhow::Result<(Arc<dyn LLMClient>, Arc<dyn SearchProvider>)> {
    let provider = config
        .llm_provider()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let llm: Arc<dyn LLMClient> = Arc::from(
        provider
            .create_client()
            .await
            .map_err(|e| anyhow::anyhow!(e.to_string()))?,
    );
    let search: Arc<dyn SearchProvider> = Arc::new(ExaClient::with_base_url(
        config.search.exa_api_key.clone(),
        config.search.exa_base_url.clone(),
    ));
    Ok((llm, search))
}
