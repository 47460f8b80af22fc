//! Synthesis Context - Value Objects
//!
//! 合成参数归一化：把客户端裸值（缺省、越界）转换为引擎可消费的参数集

use serde::{Deserialize, Serialize};

/// exaggeration（表现力强度）合法区间
pub const EXAGGERATION_MIN: f32 = 0.25;
pub const EXAGGERATION_MAX: f32 = 2.0;

/// cfg_weight（引导权重）合法区间
pub const CFG_WEIGHT_MIN: f32 = 0.0;
pub const CFG_WEIGHT_MAX: f32 = 1.0;

pub const DEFAULT_EXAGGERATION: f32 = 0.5;
pub const DEFAULT_CFG_WEIGHT: f32 = 0.5;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// 归一化后的合成参数
///
/// 仅支持 exaggeration/cfg_weight 直接输入；历史的
/// stability/similarity_boost 反向滑杆映射不再暴露
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisParams {
    /// 表现力强度，钳制到 [0.25, 2.0]
    pub exaggeration: f32,
    /// 引导权重，钳制到 [0.0, 1.0]
    pub cfg_weight: f32,
    /// 采样温度；不钳制，越界由引擎自行处理
    pub temperature: f32,
    /// 随机种子；0 = 不播种（引擎使用非确定性随机）
    pub seed: u64,
}

impl SynthesisParams {
    /// 归一化：缺省取默认值，越界钳制到最近边界，区间内原样通过
    pub fn normalize(
        exaggeration: Option<f32>,
        cfg_weight: Option<f32>,
        temperature: Option<f32>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            exaggeration: exaggeration
                .unwrap_or(DEFAULT_EXAGGERATION)
                .clamp(EXAGGERATION_MIN, EXAGGERATION_MAX),
            cfg_weight: cfg_weight
                .unwrap_or(DEFAULT_CFG_WEIGHT)
                .clamp(CFG_WEIGHT_MIN, CFG_WEIGHT_MAX),
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
            seed: seed.unwrap_or(0),
        }
    }

    /// 是否要求确定性生成
    pub fn is_seeded(&self) -> bool {
        self.seed != 0
    }
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self::normalize(None, None, None, None)
    }
}

/// 合成产物：规范容器（WAV）编码的音频负载
///
/// 字节长度与采样率均为派生值，构造后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    data: Vec<u8>,
    sample_rate: u32,
}

impl AudioArtifact {
    /// 规范容器的 MIME 类型
    pub const MIME: &'static str = "audio/wav";
    /// 规范容器的扩展名
    pub const EXTENSION: &'static str = "wav";

    pub fn new(data: Vec<u8>, sample_rate: u32) -> Self {
        Self { data, sample_rate }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// 负载字节数
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let params = SynthesisParams::normalize(None, None, None, None);
        assert_eq!(params.exaggeration, DEFAULT_EXAGGERATION);
        assert_eq!(params.cfg_weight, DEFAULT_CFG_WEIGHT);
        assert_eq!(params.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(params.seed, 0);
        assert!(!params.is_seeded());
    }

    #[test]
    fn test_exaggeration_clamped_to_nearest_bound() {
        let low = SynthesisParams::normalize(Some(-3.0), None, None, None);
        assert_eq!(low.exaggeration, EXAGGERATION_MIN);

        let high = SynthesisParams::normalize(Some(9.5), None, None, None);
        assert_eq!(high.exaggeration, EXAGGERATION_MAX);
    }

    #[test]
    fn test_exaggeration_in_range_passes_through() {
        for value in [0.25, 0.5, 1.0, 1.73, 2.0] {
            let params = SynthesisParams::normalize(Some(value), None, None, None);
            assert_eq!(params.exaggeration, value);
        }
    }

    #[test]
    fn test_cfg_weight_clamped() {
        let high = SynthesisParams::normalize(None, Some(1.5), None, None);
        assert_eq!(high.cfg_weight, 1.0);

        let low = SynthesisParams::normalize(None, Some(-0.2), None, None);
        assert_eq!(low.cfg_weight, 0.0);

        let mid = SynthesisParams::normalize(None, Some(0.33), None, None);
        assert_eq!(mid.cfg_weight, 0.33);
    }

    #[test]
    fn test_temperature_not_clamped() {
        let params = SynthesisParams::normalize(None, None, Some(5.0), None);
        assert_eq!(params.temperature, 5.0);
    }

    #[test]
    fn test_nonzero_seed_is_seeded() {
        let params = SynthesisParams::normalize(None, None, None, Some(42));
        assert!(params.is_seeded());
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_audio_artifact_derived_length() {
        let artifact = AudioArtifact::new(vec![0u8; 128], 24000);
        assert_eq!(artifact.len(), 128);
        assert_eq!(artifact.sample_rate(), 24000);
        assert_eq!(AudioArtifact::MIME, "audio/wav");
    }
}
