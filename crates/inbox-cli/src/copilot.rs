//! inbox copilot command: suggested questions and canned answers.

use std::io::Write;

use inbox_core::responder::{copilot_answer, suggested_questions};
use tabwriter::TabWriter;

use crate::{CommandOutput, InboxBackend};

const HELP_TEXT_COPILOT: &str = "\
Ask the copilot a question, or list its suggested questions.

With no question, prints the suggestion table. Answers come from a fixed
playbook; there is no inference.

Usage:
  inbox copilot [question...] [--json]

Flags:
      --json   Output JSON instead of text
  -h, --help   help for copilot
";

/// Run the copilot command from test arguments.
pub fn run_copilot_for_test(args: &[&str], backend: &dyn InboxBackend) -> CommandOutput {
    let owned: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    run_copilot(&owned, backend)
}

fn run_copilot(args: &[String], _backend: &dyn InboxBackend) -> CommandOutput {
    match execute_copilot(args) {
        Ok(output) => output,
        Err((exit_code, message)) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code,
        },
    }
}

fn execute_copilot(args: &[String]) -> Result<CommandOutput, (i32, String)> {
    let mut words: Vec<&str> = Vec::new();
    let mut json = false;

    for token in args {
        match token.as_str() {
            "-h" | "--help" | "help" => {
                return Ok(CommandOutput {
                    stdout: HELP_TEXT_COPILOT.to_string(),
                    stderr: String::new(),
                    exit_code: 0,
                });
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err((2, format!("unknown flag: {other}")));
            }
            other => words.push(other),
        }
    }

    let stdout = if words.is_empty() {
        if json {
            render_suggestions_json().map_err(|e| (1, format!("encode suggestion: {e}")))?
        } else {
            render_suggestions_table().map_err(|e| (1, format!("render table: {e}")))?
        }
    } else {
        let question = words.join(" ");
        let answer = copilot_answer(&question);
        if json {
            let payload = serde_json::json!({ "question": question, "answer": answer });
            let mut line =
                serde_json::to_string(&payload).map_err(|e| (1, format!("encode answer: {e}")))?;
            line.push('\n');
            line
        } else {
            format!("{answer}\n")
        }
    };

    Ok(CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code: 0,
    })
}

fn render_suggestions_json() -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for question in suggested_questions() {
        let payload = serde_json::json!({
            "id": question.id,
            "category": question.category,
            "text": question.text,
        });
        out.push_str(&serde_json::to_string(&payload)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_suggestions_table() -> Result<String, String> {
    let mut tw = TabWriter::new(Vec::new()).padding(2);
    writeln!(tw, "ID\tCATEGORY\tQUESTION").map_err(|err| err.to_string())?;
    for question in suggested_questions() {
        writeln!(tw, "{}\t{}\t{}", question.id, question.category, question.text)
            .map_err(|err| err.to_string())?;
    }
    tw.flush().map_err(|err| err.to_string())?;
    let bytes = tw.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
