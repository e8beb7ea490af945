use serde::Deserialize;

/// Wire shape of one retrieval-augmented query reply. `output_text` is the
/// summarized answer when the server provides one; `output` carries the
/// structured fragments it is assembled from.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub id: String,
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

/// One strategy for pulling answer text out of a reply. Strategies run in
/// order; the first non-empty match wins.
trait AnswerExtractor {
    fn extract(&self, response: &QueryResponse) -> Option<String>;
}

struct OutputText;

impl AnswerExtractor for OutputText {
    fn extract(&self, response: &QueryResponse) -> Option<String> {
        response.output_text.clone()
    }
}

struct ContentScan;

impl AnswerExtractor for ContentScan {
    fn extract(&self, response: &QueryResponse) -> Option<String> {
        response
            .output
            .iter()
            .flat_map(|item| item.content.iter())
            .find_map(|part| part.text.clone())
    }
}

/// Extract the answer text, preferring the summarized field over a scan of
/// the structured output. `None` when the reply carries no text at all.
pub fn extract_answer(response: &QueryResponse) -> Option<String> {
    let extractors: [&dyn AnswerExtractor; 2] = [&OutputText, &ContentScan];
    extractors
        .iter()
        .find_map(|e| e.extract(response).filter(|text| !text.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> QueryResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_prefers_output_text() {
        let response = parse(
            r#"{"id": "resp-1", "output_text": "summarized",
                "output": [{"content": [{"text": "fragment"}]}]}"#,
        );
        assert_eq!(extract_answer(&response), Some("summarized".to_string()));
    }

    #[test]
    fn test_falls_back_to_first_fragment() {
        let response = parse(
            r#"{"id": "resp-2",
                "output": [{"content": []},
                           {"content": [{"type": "file_search_call"},
                                        {"text": "42"},
                                        {"text": "later"}]}]}"#,
        );
        assert_eq!(extract_answer(&response), Some("42".to_string()));
    }

    #[test]
    fn test_empty_output_text_falls_through() {
        let response = parse(
            r#"{"id": "resp-3", "output_text": "",
                "output": [{"content": [{"text": "fragment"}]}]}"#,
        );
        assert_eq!(extract_answer(&response), Some("fragment".to_string()));
    }

    #[test]
    fn test_no_text_anywhere() {
        let response = parse(r#"{"id": "resp-4", "output": [{"content": []}]}"#);
        assert_eq!(extract_answer(&response), None);
    }
}
