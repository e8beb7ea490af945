pub mod memory;
pub mod openai;

pub use memory::MemoryBackend;
pub use openai::OpenAiBackend;
