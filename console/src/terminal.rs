// inventory_console/src/terminal.rs

//! stdin/stdout implementations of the console ports.

use crate::ports::{Confirmer, Notification, NotificationKind, Notifier, Prompt};
use std::io::{self, BufRead, Write};

/// Reads one line from stdin. `None` at end of input.
pub fn read_line() -> io::Result<Option<String>> {
  let mut line = String::new();
  let read = io::stdin().lock().read_line(&mut line)?;
  if read == 0 {
    return Ok(None);
  }
  Ok(Some(line))
}

/// Asks on stdout and accepts `y`/`yes`; anything else, including end of
/// input, is a "no".
#[derive(Debug, Default)]
pub struct StdinConfirmer {
  assume_yes: bool,
}

impl StdinConfirmer {
  pub fn new(assume_yes: bool) -> Self {
    Self { assume_yes }
  }
}

impl Confirmer for StdinConfirmer {
  fn confirm(&self, prompt: &Prompt) -> bool {
    if self.assume_yes {
      return true;
    }
    print!("{}: {} [y/N] ", prompt.title, prompt.text);
    let _ = io::stdout().flush();
    match read_line() {
      Ok(Some(answer)) => is_yes(&answer),
      _ => false,
    }
  }
}

pub(crate) fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
  fn notify(&self, notification: Notification) {
    match notification.kind {
      NotificationKind::Success => println!("{}", notification),
      NotificationKind::Error => eprintln!("{}", notification),
    }
  }
}
