//! Symphonia Audio Processor - 参考音频预处理
//!
//! 支持：
//! - 任意已启用容器（WAV/MP3/FLAC/OGG）的解码
//! - 多声道按平均混为单声道
//! - 线性插值重采样到引擎要求的采样率
//! - f32 样本 → 16-bit PCM WAV 编码

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioError, AudioProcessorPort, MonoPcm};

/// 解码出的交错 PCM
#[derive(Debug)]
struct DecodedAudio {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: usize,
}

/// 基于 symphonia 的音频处理器
pub struct SymphoniaProcessor;

impl SymphoniaProcessor {
    pub fn new() -> Self {
        Self
    }

    /// 按容器探测解码为交错 f32 PCM
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioError> {
        if data.is_empty() {
            return Err(AudioError::InvalidInput("audio data is empty".to_string()));
        }

        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        // 上传可能是 WAV/MP3/FLAC/OGG，不给扩展名提示，交给探测器
        let hint = Hint::new();
        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &format_opts, &metadata_opts)
            .map_err(|e| AudioError::Decoding(format!("Probe failed: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::Decoding("No audio track found".to_string()))?;

        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or_else(|| AudioError::Decoding("Unknown sample rate".to_string()))?;

        let channels = track
            .codec_params
            .channels
            .map(|c| c.count())
            .ok_or_else(|| AudioError::Decoding("Unknown channel count".to_string()))?;

        let decoder_opts = DecoderOptions::default();
        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &decoder_opts)
            .map_err(|e| AudioError::Decoding(format!("Decoder creation failed: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();
        let track_id = track.id;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioError::Decoding(format!("Packet read error: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Decode error (skipping packet): {}", e);
                    continue;
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            // 只取实际样本数，不取缓冲区容量
            let actual_samples = num_frames * spec.channels.count();
            samples.extend(&sample_buf.samples()[..actual_samples]);
        }

        if samples.is_empty() {
            return Err(AudioError::Decoding(
                "No audio samples decoded".to_string(),
            ));
        }

        Ok(DecodedAudio {
            samples,
            sample_rate,
            channels,
        })
    }

    /// 交错多声道 → 单声道（逐帧取平均）
    fn downmix(&self, samples: &[f32], channels: usize) -> Vec<f32> {
        if channels <= 1 {
            return samples.to_vec();
        }

        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    }

    /// 简单线性重采样（单声道）
    fn resample(&self, samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
        if from_rate == to_rate || samples.is_empty() {
            return samples.to_vec();
        }

        let ratio = to_rate as f64 / from_rate as f64;
        let frame_count = samples.len();
        let new_frame_count = (frame_count as f64 * ratio) as usize;
        let mut resampled = Vec::with_capacity(new_frame_count);

        for i in 0..new_frame_count {
            let src_pos = i as f64 / ratio;
            let src_idx = src_pos as usize;
            let frac = src_pos - src_idx as f64;

            let s0 = samples.get(src_idx).copied().unwrap_or(0.0);
            let s1 = samples
                .get((src_idx + 1).min(frame_count - 1))
                .copied()
                .unwrap_or(s0);

            // 线性插值
            resampled.push(s0 + (s1 - s0) * frac as f32);
        }

        resampled
    }
}

impl Default for SymphoniaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProcessorPort for SymphoniaProcessor {
    fn prepare_reference(&self, data: &[u8], target_rate: u32) -> Result<MonoPcm, AudioError> {
        let decoded = self.decode(data)?;
        let mono = self.downmix(&decoded.samples, decoded.channels);

        let samples = if decoded.sample_rate != target_rate {
            tracing::debug!(
                from = decoded.sample_rate,
                to = target_rate,
                "Resampling reference audio"
            );
            self.resample(&mono, decoded.sample_rate, target_rate)
        } else {
            mono
        };

        Ok(MonoPcm {
            samples,
            sample_rate: target_rate,
        })
    }

    fn encode_wav(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, AudioError> {
        if sample_rate == 0 {
            return Err(AudioError::Encoding("sample rate cannot be 0".to_string()));
        }

        let bits_per_sample: u16 = 16;
        let num_channels: u16 = 1;
        let byte_rate = sample_rate * num_channels as u32 * (bits_per_sample / 8) as u32;
        let block_align = num_channels * (bits_per_sample / 8);

        // f32 样本钳制后转 i16
        let pcm_data: Vec<i16> = samples
            .iter()
            .map(|&s| {
                let clamped = s.clamp(-1.0, 1.0);
                (clamped * 32767.0) as i16
            })
            .collect();

        let data_size = pcm_data.len() * 2;
        let file_size = 36 + data_size;

        let mut wav = Vec::with_capacity(44 + data_size);

        // RIFF header
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(file_size as u32).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        // fmt chunk
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&num_channels.to_le_bytes());
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&bits_per_sample.to_le_bytes());

        // data chunk
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&(data_size as u32).to_le_bytes());

        for sample in pcm_data {
            wav.extend_from_slice(&sample.to_le_bytes());
        }

        Ok(wav)
    }
}
