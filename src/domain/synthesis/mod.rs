//! Synthesis Context - 合成参数与产物

mod value_objects;

pub use value_objects::{
    AudioArtifact, SynthesisParams, CFG_WEIGHT_MAX, CFG_WEIGHT_MIN, DEFAULT_CFG_WEIGHT,
    DEFAULT_EXAGGERATION, DEFAULT_TEMPERATURE, EXAGGERATION_MAX, EXAGGERATION_MIN,
};
