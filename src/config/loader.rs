//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `REVOICE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `REVOICE_SERVER__HOST=127.0.0.1`
/// - `REVOICE_SERVER__PORT=8080`
/// - `REVOICE_ENGINE__URL=http://tts-engine:8000`
/// - `REVOICE_SCRIPT__API_KEY=sk-...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5050)?
        .set_default("engine.url", "http://localhost:8000")?
        .set_default("engine.timeout_secs", 120)?
        .set_default("engine.prompt_sample_rate", 24000)?
        .set_default("script.base_url", "https://api.openai.com/v1")?
        .set_default("script.model", "gpt-4o-mini")?
        .set_default("script.timeout_secs", 60)?
        .set_default("registry.sample_ttl_secs", 3600)?
        .set_default("registry.sweep_interval_secs", 600)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: REVOICE_
    // 层级分隔符: __ (双下划线)
    // 例如: REVOICE_ENGINE__URL=http://tts-engine:8000
    builder = builder.add_source(
        Environment::with_prefix("REVOICE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 凭据回退：兼容通用的 OPENAI_API_KEY
    if app_config.script.api_key.is_none() {
        app_config.script.api_key = std::env::var("OPENAI_API_KEY").ok();
    }

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.engine.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Engine URL cannot be empty".to_string(),
        ));
    }

    if config.engine.prompt_sample_rate == 0 {
        return Err(ConfigError::ValidationError(
            "Engine prompt sample rate cannot be 0".to_string(),
        ));
    }

    if config.script.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Script model base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Engine URL: {}", config.engine.url);
    tracing::info!("Engine Timeout: {}s", config.engine.timeout_secs);
    tracing::info!("Prompt Sample Rate: {} Hz", config.engine.prompt_sample_rate);
    tracing::info!("Script Model: {}", config.script.model);
    tracing::info!(
        "Script API Key: {}",
        if config.script.api_key.is_some() {
            "configured"
        } else {
            "NOT SET"
        }
    );
    if config.registry.sample_ttl_secs == 0 {
        tracing::info!("Sample TTL: disabled");
    } else {
        tracing::info!("Sample TTL: {}s", config.registry.sample_ttl_secs);
        tracing::info!("Sweep Interval: {}s", config.registry.sweep_interval_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_engine_url() {
        let mut config = AppConfig::default();
        config.engine.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_sample_rate() {
        let mut config = AppConfig::default();
        config.engine.prompt_sample_rate = 0;
        assert!(validate_config(&config).is_err());
    }
}
