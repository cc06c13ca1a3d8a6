pub mod anthropic;
pub mod news;

pub use anthropic::{AnthropicClient, SynthesisError};
pub use news::NewsClient;
