//! inbox-cli: command-line surface for the support inbox.

use std::cell::RefCell;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use inbox_core::conversation::{Conversation, Message, Sender};
use inbox_core::store::MemoryStore;

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "inbox-cli"
}

static VERSION: OnceLock<String> = OnceLock::new();

/// Set the version string for `--version` output.
pub fn set_version(version: &str) {
    let _ = VERSION.set(version.to_string());
}

fn get_version() -> &'static str {
    VERSION.get().map(|s| s.as_str()).unwrap_or("dev")
}

fn help_text() -> String {
    "\
inbox manages a local customer-support inbox.

Usage:
  inbox [command]

Available Commands:
  copilot     Ask the copilot or list its suggested questions
  help        Help about any command
  list        List conversations with search, filter, and sort
  send        Send a customer message and receive the bot reply
  show        Show a conversation transcript

Flags:
  -h, --help      help for inbox
  -v, --version   version for inbox

Use \"inbox [command] --help\" for more information about a command.\n"
        .to_string()
}

/// Captured output of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// The Conversation Store boundary the commands run against. The core index
/// only ever sees the snapshot this trait hands out.
pub trait InboxBackend {
    fn snapshot(&self) -> Result<Vec<Conversation>, String>;
    fn messages(&self, id: &str) -> Result<Vec<Message>, String>;
    fn append_message(&self, id: &str, sender: Sender, text: &str) -> Result<Message, String>;
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Backend over the in-memory store. The demo binary seeds it with the
/// sample inbox; tests pin the clock for deterministic output.
pub struct MemoryInboxBackend {
    store: RefCell<MemoryStore>,
    fixed_now: Option<DateTime<Utc>>,
}

impl MemoryInboxBackend {
    /// Demo backend: the seeded sample inbox on the real clock.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            store: RefCell::new(MemoryStore::seed_inbox(Utc::now())),
            fixed_now: None,
        }
    }

    /// Seeded backend with a pinned clock, for deterministic tests.
    #[must_use]
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        Self {
            store: RefCell::new(MemoryStore::seed_inbox(now)),
            fixed_now: Some(now),
        }
    }

    /// Backend over an explicit store.
    #[must_use]
    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store: RefCell::new(store),
            fixed_now: None,
        }
    }
}

impl InboxBackend for MemoryInboxBackend {
    fn snapshot(&self) -> Result<Vec<Conversation>, String> {
        Ok(self.store.borrow().snapshot())
    }

    fn messages(&self, id: &str) -> Result<Vec<Message>, String> {
        self.store.borrow().messages(id).map_err(|e| e.to_string())
    }

    fn append_message(&self, id: &str, sender: Sender, text: &str) -> Result<Message, String> {
        self.store
            .borrow_mut()
            .append_message(id, sender, text, self.now_utc())
            .map_err(|e| e.to_string())
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}

/// Fetch the value for a flag or fail with the usage exit code.
pub(crate) fn take_flag_value(
    args: &[String],
    idx: usize,
    flag: &str,
) -> Result<String, (i32, String)> {
    args.get(idx)
        .cloned()
        .ok_or_else(|| (2, format!("flag needs an argument: {flag}")))
}

pub mod copilot;
pub mod list;
pub mod send;
pub mod show;

#[cfg(test)]
pub(crate) mod tests_common;

pub fn run_cli_for_test(args: &[&str], backend: &dyn InboxBackend) -> CommandOutput {
    let mut out = CommandOutput {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: 0,
    };

    let Some((cmd, rest)) = args.split_first() else {
        // No args: show help (exit 0).
        out.stdout = help_text();
        return out;
    };

    match *cmd {
        "--help" | "-h" | "help" => {
            out.stdout = help_text();
            out
        }
        "--version" | "-v" => {
            out.stdout = format!("inbox version {}\n", get_version());
            out
        }
        "copilot" => copilot::run_copilot_for_test(rest, backend),
        "list" | "ls" => list::run_list_for_test(rest, backend),
        "send" => send::run_send_for_test(rest, backend),
        "show" => show::run_show_for_test(rest, backend),
        _ => {
            out.stderr = format!("Error: unknown command \"{cmd}\" for \"inbox\"\n");
            out.exit_code = 1;
            out
        }
    }
}

pub fn run_cli(args: &[String], backend: &dyn InboxBackend) -> CommandOutput {
    let refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    run_cli_for_test(&refs, backend)
}
