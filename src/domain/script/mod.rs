//! Script Context - 口播脚本生成的纯文本逻辑

mod cleanup;
mod prompts;
mod value_objects;

pub use cleanup::clean_model_output;
pub use prompts::{build_messages, ScriptMessages, BASE_LANGUAGE};
pub use value_objects::GeneratedScript;
