//! inbox list command: the sidebar view of the inbox, as a table.

use std::io::Write;

use inbox_core::conversation::{Conversation, ConversationStatus};
use inbox_core::index::{filter_and_sort, CategoryFilter, InboxQuery, SortKey};
use inbox_core::validate::parse_sort_key;
use tabwriter::TabWriter;

use crate::{take_flag_value, CommandOutput, InboxBackend};

const HELP_TEXT_LIST: &str = "\
List conversations with search, filter, and sort.

Usage:
  inbox list [--search TEXT] [--status VALUE | --open N] [--sort KEY] [--json]

Flags:
      --search TEXT   Case-insensitive match on name or last message
      --status VALUE  Filter by status: open, pending, closed
      --open N        Filter by open-conversation count
      --sort KEY      newest | oldest | unread | alphabetical | waiting-longest
      --json          Output one JSON object per line
  -h, --help          help for list
";

/// Run the list command from test arguments.
pub fn run_list_for_test(args: &[&str], backend: &dyn InboxBackend) -> CommandOutput {
    let owned: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    run_list(&owned, backend)
}

fn run_list(args: &[String], backend: &dyn InboxBackend) -> CommandOutput {
    match execute_list(args, backend) {
        Ok(output) => output,
        Err((exit_code, message)) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code,
        },
    }
}

#[derive(Debug, Default)]
struct ParsedListArgs {
    search: String,
    status: Option<ConversationStatus>,
    open: Option<u32>,
    sort: Option<String>,
    json: bool,
}

fn parse_list_args(args: &[String]) -> Result<Option<ParsedListArgs>, (i32, String)> {
    let mut parsed = ParsedListArgs::default();

    let mut idx = 0usize;
    while idx < args.len() {
        let token = &args[idx];
        match token.as_str() {
            "-h" | "--help" | "help" => return Ok(None),
            "--json" => parsed.json = true,
            "--search" => {
                idx += 1;
                parsed.search = take_flag_value(args, idx, "--search")?;
            }
            "--status" => {
                idx += 1;
                let raw = take_flag_value(args, idx, "--status")?;
                let status = ConversationStatus::from_label(&raw)
                    .ok_or_else(|| (2, format!("invalid status: {raw}")))?;
                parsed.status = Some(status);
            }
            "--open" => {
                idx += 1;
                let raw = take_flag_value(args, idx, "--open")?;
                let count = raw
                    .parse::<u32>()
                    .map_err(|_| (2, format!("invalid open count: {raw}")))?;
                parsed.open = Some(count);
            }
            "--sort" => {
                idx += 1;
                parsed.sort = Some(take_flag_value(args, idx, "--sort")?);
            }
            other => {
                return Err((2, format!("unknown flag: {other}")));
            }
        }
        idx += 1;
    }

    if parsed.status.is_some() && parsed.open.is_some() {
        return Err((2, "--status and --open are mutually exclusive".to_string()));
    }
    Ok(Some(parsed))
}

fn execute_list(
    args: &[String],
    backend: &dyn InboxBackend,
) -> Result<CommandOutput, (i32, String)> {
    let Some(parsed) = parse_list_args(args)? else {
        return Ok(CommandOutput {
            stdout: HELP_TEXT_LIST.to_string(),
            stderr: String::new(),
            exit_code: 0,
        });
    };

    let category = match (parsed.status, parsed.open) {
        (Some(status), None) => CategoryFilter::Status(status),
        (None, Some(count)) => CategoryFilter::OpenCount(count),
        _ => CategoryFilter::All,
    };
    // An unrecognized sort label is a defined fallback: input order.
    let sort = match parsed.sort.as_deref() {
        None => Some(SortKey::Newest),
        Some(label) => parse_sort_key(label),
    };
    let query = InboxQuery {
        search: parsed.search,
        category,
        sort,
    };

    let conversations = backend.snapshot().map_err(|e| (1, e))?;
    let rows = filter_and_sort(&conversations, &query);

    let stdout = if parsed.json {
        render_json(&rows).map_err(|e| (1, format!("encode conversation: {e}")))?
    } else {
        render_table(&rows).map_err(|e| (1, format!("render table: {e}")))?
    };

    Ok(CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code: 0,
    })
}

fn render_json(rows: &[&Conversation]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_table(rows: &[&Conversation]) -> Result<String, String> {
    if rows.is_empty() {
        return Ok("No conversations matched the current filters.\n".to_string());
    }

    let mut tw = TabWriter::new(Vec::new()).padding(2);
    writeln!(tw, "ID\tNAME\tSTATUS\tWAITING\tLAST MESSAGE").map_err(|err| err.to_string())?;
    for row in rows {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}",
            row.id,
            row.name,
            row.status.map(|s| s.as_str()).unwrap_or("-"),
            waiting_cell(row),
            row.last_message,
        )
        .map_err(|err| err.to_string())?;
    }
    tw.flush().map_err(|err| err.to_string())?;
    let bytes = tw.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn waiting_cell(row: &Conversation) -> String {
    let minutes = row.waiting_minutes();
    if minutes == 0 {
        "-".to_string()
    } else {
        format!("{minutes}m")
    }
}
