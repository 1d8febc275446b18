// inventory_console/src/shell.rs

//! Line-oriented command shell over a [`ProductConsole`].

use crate::render::{render_form, render_table};
use crate::session::{ConsoleError, Outcome, ProductConsole};
use inventory::{FormField, SortField};
use std::io::{self, Write};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list | ls               show the current page
  refresh                 re-fetch products from the server
  search [text]           filter by name (empty clears)
  sort <field>            name | category | price | stock (again to reverse)
  page <n> | next | prev  move between pages
  add                     open an empty product form
  edit <id>               open the form for an existing product
  set <field> <value>     edit a form field (name, category, price, stock)
  show                    print the open form
  save                    submit the open form
  cancel                  close the form without saving
  delete <id>             delete a product
  help                    this text
  quit | exit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  List,
  Refresh,
  Search(String),
  Sort(SortField),
  Page(usize),
  Next,
  Prev,
  Add,
  Edit(i64),
  Set(FormField, String),
  Show,
  Save,
  Cancel,
  Delete(i64),
  Help,
  Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("Unknown command '{0}'. Type 'help' for a list.")]
  Unknown(String),

  #[error("'{command}' needs {what}.")]
  Missing { command: &'static str, what: &'static str },

  #[error("{0}")]
  Invalid(String),
}

fn parse_id(command: &'static str, arg: &str) -> Result<i64, ParseError> {
  if arg.is_empty() {
    return Err(ParseError::Missing {
      command,
      what: "a product id",
    });
  }
  arg
    .parse::<i64>()
    .map_err(|_| ParseError::Invalid(format!("'{}' is not a product id.", arg)))
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
  let line = line.trim();
  let (word, rest) = match line.split_once(char::is_whitespace) {
    Some((word, rest)) => (word, rest.trim()),
    None => (line, ""),
  };

  match word.to_ascii_lowercase().as_str() {
    "list" | "ls" | "" => Ok(Command::List),
    "refresh" => Ok(Command::Refresh),
    "search" => Ok(Command::Search(rest.to_string())),
    "sort" => {
      if rest.is_empty() {
        return Err(ParseError::Missing {
          command: "sort",
          what: "a field",
        });
      }
      rest
        .parse::<SortField>()
        .map(Command::Sort)
        .map_err(|e| ParseError::Invalid(e.to_string()))
    }
    "page" => rest
      .parse::<usize>()
      .map(Command::Page)
      .map_err(|_| ParseError::Missing {
        command: "page",
        what: "a page number",
      }),
    "next" => Ok(Command::Next),
    "prev" => Ok(Command::Prev),
    "add" | "new" => Ok(Command::Add),
    "edit" => parse_id("edit", rest).map(Command::Edit),
    "set" => {
      let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
      };
      if field.is_empty() {
        return Err(ParseError::Missing {
          command: "set",
          what: "a field and a value",
        });
      }
      let field = field
        .parse::<FormField>()
        .map_err(|e| ParseError::Invalid(e.to_string()))?;
      Ok(Command::Set(field, value.to_string()))
    }
    "show" => Ok(Command::Show),
    "save" | "submit" => Ok(Command::Save),
    "cancel" | "close" => Ok(Command::Cancel),
    "delete" | "rm" => parse_id("delete", rest).map(Command::Delete),
    "help" | "?" => Ok(Command::Help),
    "quit" | "exit" | "q" => Ok(Command::Quit),
    other => Err(ParseError::Unknown(other.to_string())),
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

pub struct Shell {
  console: ProductConsole,
}

impl Shell {
  pub fn new(console: ProductConsole) -> Self {
    Self { console }
  }

  pub fn console(&self) -> &ProductConsole {
    &self.console
  }

  /// Initial fetch and first render.
  pub async fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Loading products...")?;
    self.console.refresh().await;
    self.print_table(out)
  }

  fn print_table(&self, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", render_table(&self.console.render()))
  }

  fn print_form(&self, out: &mut impl Write) -> io::Result<()> {
    match self.console.form() {
      Some(form) => write!(out, "{}", render_form(form)),
      None => writeln!(out, "{}", ConsoleError::NoOpenForm),
    }
  }

  pub async fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
    match parse_command(line) {
      Ok(command) => self.execute(command, out).await,
      Err(e) => {
        writeln!(out, "{}", e)?;
        Ok(Flow::Continue)
      }
    }
  }

  pub async fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    match command {
      Command::List => self.print_table(out)?,
      Command::Refresh => {
        self.console.refresh().await;
        self.print_table(out)?;
      }
      Command::Search(text) => {
        self.console.search(text);
        self.print_table(out)?;
      }
      Command::Sort(field) => {
        self.console.sort_by(field);
        self.print_table(out)?;
      }
      Command::Page(n) => {
        self.console.go_to_page(n);
        self.print_table(out)?;
      }
      Command::Next => {
        self.console.next_page();
        self.print_table(out)?;
      }
      Command::Prev => {
        self.console.prev_page();
        self.print_table(out)?;
      }
      Command::Add => {
        self.console.open_create();
        self.print_form(out)?;
      }
      Command::Edit(id) => match self.console.open_edit(id) {
        Ok(()) => self.print_form(out)?,
        Err(e) => writeln!(out, "{}", e)?,
      },
      Command::Set(field, value) => match self.console.edit_field(field, &value) {
        Ok(()) => self.print_form(out)?,
        // Field errors were already shown by the notifier.
        Err(ConsoleError::Form(_)) => {}
        Err(e) => writeln!(out, "{}", e)?,
      },
      Command::Show => self.print_form(out)?,
      Command::Save => match self.console.submit().await {
        Ok(Outcome::Applied) => self.print_table(out)?,
        Ok(Outcome::Declined) => writeln!(out, "Not saved.")?,
        Ok(Outcome::Failed) | Err(ConsoleError::Form(_)) => self.print_form(out)?,
        Err(e) => writeln!(out, "{}", e)?,
      },
      Command::Cancel => {
        self.console.close_form().await;
        self.print_table(out)?;
      }
      Command::Delete(id) => match self.console.delete(id).await {
        Outcome::Applied => self.print_table(out)?,
        Outcome::Declined => writeln!(out, "Not deleted.")?,
        Outcome::Failed => {}
      },
      Command::Help => writeln!(out, "{}", HELP)?,
      Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
  }
}
