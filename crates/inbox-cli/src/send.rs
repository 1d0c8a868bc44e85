//! inbox send command: append a customer message and the simulated bot reply.

use inbox_core::conversation::{Message, Sender};
use inbox_core::responder::bot_reply;

use crate::{CommandOutput, InboxBackend};

const HELP_TEXT_SEND: &str = "\
Send a customer message to a conversation. The simulated bot replies
immediately; its reply rotates through a fixed table.

Usage:
  inbox send <conversation-id> <message> [--json]

Flags:
      --json   Output the appended messages as JSON, one per line
  -h, --help   help for send
";

/// Run the send command from test arguments.
pub fn run_send_for_test(args: &[&str], backend: &dyn InboxBackend) -> CommandOutput {
    let owned: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    run_send(&owned, backend)
}

fn run_send(args: &[String], backend: &dyn InboxBackend) -> CommandOutput {
    match execute_send(args, backend) {
        Ok(output) => output,
        Err((exit_code, message)) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code,
        },
    }
}

fn execute_send(
    args: &[String],
    backend: &dyn InboxBackend,
) -> Result<CommandOutput, (i32, String)> {
    let mut positional: Vec<&str> = Vec::with_capacity(2);
    let mut json = false;

    for token in args {
        match token.as_str() {
            "-h" | "--help" | "help" => {
                return Ok(CommandOutput {
                    stdout: HELP_TEXT_SEND.to_string(),
                    stderr: String::new(),
                    exit_code: 0,
                });
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err((2, format!("unknown flag: {other}")));
            }
            other => positional.push(other),
        }
    }

    let [id, text] = positional.as_slice() else {
        return Err((2, "usage: inbox send <conversation-id> <message>".to_string()));
    };

    // The reply rotation is keyed by how many bot messages the transcript
    // already holds, so repeated sends cycle through the table.
    let turn = backend
        .messages(id)
        .map_err(|e| (1, e))?
        .iter()
        .filter(|message| message.sender == Sender::Bot)
        .count();

    let customer = backend
        .append_message(id, Sender::Customer, text)
        .map_err(|e| (1, e))?;
    let bot = backend
        .append_message(id, Sender::Bot, bot_reply(turn))
        .map_err(|e| (1, e))?;

    let stdout = if json {
        render_json(&[customer, bot]).map_err(|e| (1, format!("encode message: {e}")))?
    } else {
        format!(
            "{}: {}\n{}: {}\n",
            customer.sender.as_str(),
            customer.text,
            bot.sender.as_str(),
            bot.text
        )
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
