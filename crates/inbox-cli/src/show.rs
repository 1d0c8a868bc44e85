//! inbox show command: one conversation's transcript.

use std::io::Write;

use inbox_core::conversation::Message;
use tabwriter::TabWriter;

use crate::{CommandOutput, InboxBackend};

const HELP_TEXT_SHOW: &str = "\
Show a conversation transcript, oldest message first.

Usage:
  inbox show <conversation-id> [--json]

Flags:
      --json   Output one JSON object per line
  -h, --help   help for show
";

/// Run the show command from test arguments.
pub fn run_show_for_test(args: &[&str], backend: &dyn InboxBackend) -> CommandOutput {
    let owned: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    run_show(&owned, backend)
}

fn run_show(args: &[String], backend: &dyn InboxBackend) -> CommandOutput {
    match execute_show(args, backend) {
        Ok(output) => output,
        Err((exit_code, message)) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code,
        },
    }
}

fn execute_show(
    args: &[String],
    backend: &dyn InboxBackend,
) -> Result<CommandOutput, (i32, String)> {
    let mut id: Option<String> = None;
    let mut json = false;

    for token in args {
        match token.as_str() {
            "-h" | "--help" | "help" => {
                return Ok(CommandOutput {
                    stdout: HELP_TEXT_SHOW.to_string(),
                    stderr: String::new(),
                    exit_code: 0,
                });
            }
            "--json" => json = true,
            other if other.starts_with('-') => {
                return Err((2, format!("unknown flag: {other}")));
            }
            other => {
                if id.is_some() {
                    return Err((2, "show takes exactly one conversation id".to_string()));
                }
                id = Some(other.to_string());
            }
        }
    }

    let Some(id) = id else {
        return Err((2, "conversation id required".to_string()));
    };

    let messages = backend.messages(&id).map_err(|e| (1, e))?;
    let stdout = if json {
        render_json(&messages).map_err(|e| (1, format!("encode message: {e}")))?
    } else {
        render_transcript(&messages).map_err(|e| (1, format!("render transcript: {e}")))?
    };

    Ok(CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code: 0,
    })
}

fn render_json(messages: &[Message]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for message in messages {
        out.push_str(&serde_json::to_string(message)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_transcript(messages: &[Message]) -> Result<String, String> {
    if messages.is_empty() {
        return Ok("No messages yet.\n".to_string());
    }

    let mut tw = TabWriter::new(Vec::new()).padding(2);
    writeln!(tw, "TIME\tSENDER\tMESSAGE").map_err(|err| err.to_string())?;
    for message in messages {
        writeln!(
            tw,
            "{}\t{}\t{}",
            message.timestamp.format("%H:%M"),
            message.sender.as_str(),
            message.text,
        )
        .map_err(|err| err.to_string())?;
    }
    tw.flush().map_err(|err| err.to_string())?;
    let bytes = tw.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::run_show_for_test;
    use crate::tests_common::fixed_backend;

    #[test]
    fn show_prints_transcript_oldest_first() {
        let backend = fixed_backend();
        let out = run_show_for_test(&["ivan-nike"], &backend);
        assert_eq!(out.exit_code, 0, "stderr: {}", out.stderr);
        let ask = out.stdout.find("tracking my order").expect("first message");
        let done = out.stdout.find("All done").expect("last message");
        assert!(ask < done, "transcript out of order:\n{}", out.stdout);
        assert!(out.stdout.starts_with("TIME"));
    }

    #[test]
    fn show_json_round_trips_messages() {
        let backend = fixed_backend();
        let out = run_show_for_test(&["ivan-nike", "--json"], &backend);
        assert_eq!(out.exit_code, 0);
        let lines: Vec<&str> = out.stdout.lines().collect();
        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON");
        assert_eq!(first["sender"], "customer");
    }

    #[test]
    fn show_unknown_conversation_exits_1() {
        let backend = fixed_backend();
        let out = run_show_for_test(&["ghost"], &backend);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr.contains("not found"));
    }

    #[test]
    fn show_requires_exactly_one_id() {
        let backend = fixed_backend();

        let none = run_show_for_test(&[], &backend);
        assert_eq!(none.exit_code, 2);
        assert!(none.stderr.contains("conversation id required"));

        let two = run_show_for_test(&["a", "b"], &backend);
        assert_eq!(two.exit_code, 2);
        assert!(two.stderr.contains("exactly one"));
    }
}
