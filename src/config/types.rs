//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub engine: EngineConfig,

    /// 文案模型配置
    #[serde(default)]
    pub script: ScriptConfig,

    /// 音色样本登记配置
    #[serde(default)]
    pub registry: RegistryConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// 引擎服务基础 URL
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_engine_timeout")]
    pub timeout_secs: u64,

    /// 引擎要求的参考音频采样率
    #[serde(default = "default_prompt_sample_rate")]
    pub prompt_sample_rate: u32,
}

fn default_engine_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_engine_timeout() -> u64 {
    120
}

fn default_prompt_sample_rate() -> u32 {
    24000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_engine_url(),
            timeout_secs: default_engine_timeout(),
            prompt_sample_rate: default_prompt_sample_rate(),
        }
    }
}

/// 文案模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    /// API 基础 URL
    #[serde(default = "default_script_base_url")]
    pub base_url: String,

    /// API Key；缺省时回退到 OPENAI_API_KEY 环境变量
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型名称
    #[serde(default = "default_script_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_script_timeout")]
    pub timeout_secs: u64,
}

fn default_script_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_script_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_script_timeout() -> u64 {
    60
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            base_url: default_script_base_url(),
            api_key: None,
            model: default_script_model(),
            timeout_secs: default_script_timeout(),
        }
    }
}

/// 音色样本登记配置
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// 样本存活时间（秒），0 表示不过期
    #[serde(default = "default_sample_ttl")]
    pub sample_ttl_secs: u64,

    /// 清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_sample_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    600
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sample_ttl_secs: default_sample_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.engine.url, "http://localhost:8000");
        assert_eq!(config.engine.prompt_sample_rate, 24000);
        assert_eq!(config.script.model, "gpt-4o-mini");
        assert_eq!(config.registry.sample_ttl_secs, 3600);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5050");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [script]
            api_key = "sk-test"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.script.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.engine.timeout_secs, 120);
    }
}
