pub mod claude_llm;
pub mod factory;
pub mod interface;
pub mod openai_llm;

pub use interface::{LlmClient, LlmError};
