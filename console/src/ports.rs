// inventory_console/src/ports.rs

//! User-facing side effects the console needs: yes/no confirmations and
//! one-shot notifications.

use std::fmt;

/// A yes/no question shown before a mutation is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
  pub title: String,
  pub text: String,
}

impl Prompt {
  pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      text: text.into(),
    }
  }
}

pub trait Confirmer: Send + Sync {
  fn confirm(&self, prompt: &Prompt) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
  Success,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub kind: NotificationKind,
  pub title: String,
  pub message: String,
}

impl Notification {
  pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      kind: NotificationKind::Success,
      title: title.into(),
      message: message.into(),
    }
  }

  pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      kind: NotificationKind::Error,
      title: title.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for Notification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tag = match self.kind {
      NotificationKind::Success => "ok",
      NotificationKind::Error => "error",
    };
    write!(f, "[{}] {} {}", tag, self.title, self.message)
  }
}

pub trait Notifier: Send + Sync {
  fn notify(&self, notification: Notification);
}
