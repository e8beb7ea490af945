use std::io::Write;

use nb_core::{QueryEngine, Result};

pub const PROMPT: &str = "Please enter your question: ";
const QUIT_SENTINEL: &str = "quit";

/// Where chat turns come from. Abstracted so tests can script a finite
/// sequence of inputs instead of driving a real terminal.
pub trait InputSource {
    /// Next line of user input, or `None` when the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct StdinSource;

impl InputSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run the conversation until the quit sentinel or end of input. The first
/// turn carries no previous-response id; every turn after a successful query
/// does. A turn whose reply has no extractable text prints nothing and the
/// loop moves on; a failed query aborts the loop.
pub async fn run_chat_loop(
    engine: &dyn QueryEngine,
    input: &mut dyn InputSource,
    output: &mut dyn Write,
) -> Result<()> {
    let mut previous_response_id: Option<String> = None;
    while let Some(line) = input.read_line(PROMPT)? {
        if line.trim().eq_ignore_ascii_case(QUIT_SENTINEL) {
            writeln!(output, "Conversation ended.")?;
            break;
        }
        let answer = engine.ask(&line, previous_response_id.as_deref()).await?;
        if let Some(text) = answer.text {
            writeln!(output, "Model response: {}", text)?;
        }
        previous_response_id = Some(answer.response_id);
    }
    Ok(())
}
