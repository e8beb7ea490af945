use async_trait::async_trait;
use nb_core::{Result, Translator};

/// Returns titles unchanged. Stands in for the remote translator in tests
/// and when running against feeds already in the target language.
#[derive(Debug, Default)]
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_input() {
        let translator = EchoTranslator;
        assert_eq!(translator.translate("Hello").await.unwrap(), "Hello");
    }
}
