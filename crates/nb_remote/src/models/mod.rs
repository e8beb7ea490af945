pub mod dummy;
pub mod openai;

pub use dummy::EchoTranslator;
pub use openai::{OpenAiTranslator, ResponsesEngine};
