//! HTTP Handlers

mod ping;
mod script;
mod speak;
mod voice;
mod workflow;

pub use ping::*;
pub use script::*;
pub use speak::*;
pub use voice::*;
pub use workflow::*;
