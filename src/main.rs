//! Revoice - 声音克隆 TTS 编排服务
//!
//! 上传音色样本 → 生成口播文案 → 用克隆音色合成语音

use std::sync::Arc;

use revoice::config::{load_config, print_config};
use revoice::infrastructure::adapters::audio::SymphoniaProcessor;
use revoice::infrastructure::adapters::llm::{OpenAiScriptModel, OpenAiScriptModelConfig};
use revoice::infrastructure::adapters::tts::{HttpTtsEngine, HttpTtsEngineConfig};
// use revoice::infrastructure::adapters::tts::FakeTtsEngine;
use revoice::infrastructure::http::{AppState, HttpServer, ServerConfig};
use revoice::infrastructure::memory::{run_ttl_sweeper, InMemoryVoiceRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},revoice={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Revoice - 声音克隆 TTS 编排服务");
    print_config(&config);

    // 音色样本登记（进程内存储）
    let registry = Arc::new(InMemoryVoiceRegistry::new());

    // 参考音频处理器
    let processor = Arc::new(SymphoniaProcessor::new());

    // HTTP TTS 引擎客户端
    let engine_config = HttpTtsEngineConfig {
        base_url: config.engine.url.clone(),
        timeout_secs: config.engine.timeout_secs,
        prompt_sample_rate: config.engine.prompt_sample_rate,
    };
    let engine = Arc::new(HttpTtsEngine::new(engine_config)?);

    // // Fake TTS 引擎（离线开发用，输出确定性波形）
    // let engine = Arc::new(FakeTtsEngine::with_defaults());

    // 文案模型客户端
    let script_config = OpenAiScriptModelConfig {
        base_url: config.script.base_url.clone(),
        api_key: config.script.api_key.clone(),
        model: config.script.model.clone(),
        timeout_secs: config.script.timeout_secs,
    };
    let script_model = Arc::new(OpenAiScriptModel::new(script_config)?);

    // 样本 TTL 清理后台任务
    tokio::spawn(run_ttl_sweeper(
        registry.clone(),
        config.registry.sample_ttl_secs,
        config.registry.sweep_interval_secs,
    ));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(registry, processor, engine, script_model);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
