//! Fake TTS Engine - 测试与离线开发用的引擎替身
//!
//! 不依赖任何外部服务，输出由 (文本, 参数) 完全确定：
//! 同样的输入永远得到同样的波形，方便断言可复现性

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{EngineError, EngineOutput, SynthesisJob, TtsEnginePort};

/// 每次合成产出的样本数（约 0.1 秒 @ 24kHz）
const FAKE_SAMPLE_COUNT: usize = 2400;

/// 确定性假引擎
pub struct FakeTtsEngine {
    sample_rate: u32,
    invocations: Mutex<Vec<SynthesisJob>>,
    call_count: AtomicUsize,
}

impl FakeTtsEngine {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            invocations: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// 默认 24kHz，与真实引擎对齐
    pub fn with_defaults() -> Self {
        Self::new(24000)
    }

    pub fn invocation_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// 已记录的全部合成请求（按调用顺序）
    pub fn invocations(&self) -> Vec<SynthesisJob> {
        self.invocations.lock().unwrap().clone()
    }

    /// 将文本与参数折叠进一个 64 位状态，作为 xorshift 种子
    fn fold_state(job: &SynthesisJob) -> u64 {
        let mut state: u64 = job
            .params
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(0x517C_C1B7_2722_0A95);

        for &byte in job.text.as_bytes() {
            state = state.rotate_left(7) ^ u64::from(byte);
            state = state.wrapping_mul(0x2545_F491_4F6C_DD1D);
        }

        state ^= u64::from(job.params.exaggeration.to_bits());
        state = state.rotate_left(13);
        state ^= u64::from(job.params.cfg_weight.to_bits());
        state = state.rotate_left(13);
        state ^= u64::from(job.params.temperature.to_bits());

        // xorshift 状态不能为 0
        if state == 0 {
            state = 0x517C_C1B7_2722_0A95;
        }
        state
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    fn prompt_sample_rate(&self) -> u32 {
        self.sample_rate
    }

    async fn generate(&self, job: SynthesisJob) -> Result<EngineOutput, EngineError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let mut state = Self::fold_state(&job);
        self.invocations.lock().unwrap().push(job);

        let mut samples = Vec::with_capacity(FAKE_SAMPLE_COUNT);
        for _ in 0..FAKE_SAMPLE_COUNT {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // 映射到 [-1, 1]
            let value = (state >> 11) as f64 / (1u64 << 53) as f64;
            samples.push((value * 2.0 - 1.0) as f32);
        }

        Ok(EngineOutput {
            samples,
            sample_rate: self.sample_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::synthesis::SynthesisParams;

    fn job(text: &str, seed: u64) -> SynthesisJob {
        SynthesisJob {
            text: text.to_string(),
            prompt_path: PathBuf::from("/tmp/prompt.wav"),
            params: SynthesisParams::normalize(None, None, None, Some(seed)),
        }
    }

    #[tokio::test]
    async fn test_same_input_gives_same_output() {
        let engine = FakeTtsEngine::with_defaults();

        let a = engine.generate(job("hello world", 42)).await.unwrap();
        let b = engine.generate(job("hello world", 42)).await.unwrap();

        assert_eq!(a.samples, b.samples);
        assert_eq!(a.sample_rate, 24000);
    }

    #[tokio::test]
    async fn test_different_text_gives_different_output() {
        let engine = FakeTtsEngine::with_defaults();

        let a = engine.generate(job("hello", 42)).await.unwrap();
        let b = engine.generate(job("goodbye", 42)).await.unwrap();

        assert_ne!(a.samples, b.samples);
    }

    #[tokio::test]
    async fn test_different_seed_gives_different_output() {
        let engine = FakeTtsEngine::with_defaults();

        let a = engine.generate(job("hello", 1)).await.unwrap();
        let b = engine.generate(job("hello", 2)).await.unwrap();

        assert_ne!(a.samples, b.samples);
    }

    #[tokio::test]
    async fn test_invocations_are_recorded() {
        let engine = FakeTtsEngine::with_defaults();
        assert_eq!(engine.invocation_count(), 0);

        engine.generate(job("first", 0)).await.unwrap();
        engine.generate(job("second", 0)).await.unwrap();

        assert_eq!(engine.invocation_count(), 2);
        let recorded = engine.invocations();
        assert_eq!(recorded[0].text, "first");
        assert_eq!(recorded[1].text, "second");
    }

    #[tokio::test]
    async fn test_samples_are_in_range() {
        let engine = FakeTtsEngine::with_defaults();
        let output = engine.generate(job("range check", 7)).await.unwrap();

        assert_eq!(output.samples.len(), FAKE_SAMPLE_COUNT);
        assert!(output.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}
