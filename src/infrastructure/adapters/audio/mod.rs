//! Audio Adapters

mod symphonia_processor;

pub use symphonia_processor::SymphoniaProcessor;
