//! Line-oriented command loop over a `BookPage`.
//!
//! Every command is handled to completion before the next line is read, so
//! at most one request is in flight.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use book_core::{messages, BookId, BookPage, Command, Field, FormMode};

use crate::transport::Transport;

const HELP: &str = "\
commands:
  list                   reload the book list
  new                    clear the form (same as reset)
  set <field> <value>    field: title, author, isbn, price, publishDate
  show                   print the form
  submit                 register or update the book in the form
  edit <id>              load a book into the form
  delete <id>            delete a book
  reset                  clear the form and the message
  help                   show this help
  quit                   exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    List,
    Set(Field, String),
    Show,
    Submit,
    Edit(BookId),
    Delete(BookId),
    Reset,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let id = || rest.parse::<BookId>().map_err(|_| format!("invalid id: {rest:?}"));

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Input::List),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Input::Set(field.parse()?, value.trim_start().to_string()))
            }
            "show" => Ok(Input::Show),
            "submit" | "save" => Ok(Input::Submit),
            "edit" => id().map(Input::Edit),
            "delete" | "rm" => id().map(Input::Delete),
            "reset" | "new" | "cancel" => Ok(Input::Reset),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

pub struct App<T> {
    page: BookPage,
    transport: T,
    assume_yes: bool,
}

impl<T: Transport> App<T> {
    pub fn new(page: BookPage, transport: T, assume_yes: bool) -> Self {
        Self {
            page,
            transport,
            assume_yes,
        }
    }

    pub fn page(&self) -> &BookPage {
        &self.page
    }

    /// Execute a command and every follow-up it produces.
    fn dispatch(&mut self, command: Command) {
        let mut next = Some(command);
        while let Some(cmd) = next {
            let outcome = self.transport.execute(&cmd.request);
            next = self.page.complete(cmd.pending, outcome);
        }
    }

    /// Load the list, then read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let initial = self.page.load();
        self.dispatch(initial);
        self.render(&mut out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "[{}]> ", self.page.form().submit_label(self.page.locale()))?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let parsed = match line.parse::<Input>() {
                Ok(parsed) => parsed,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };

            match parsed {
                Input::Quit => break,
                Input::Help => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                Input::Show => {
                    self.render_form(&mut out)?;
                    continue;
                }
                Input::Set(field, value) => {
                    self.page.form_mut().set(field, value);
                    continue;
                }
                Input::List => {
                    let cmd = self.page.load();
                    self.dispatch(cmd);
                }
                Input::Submit => {
                    if let Some(cmd) = self.page.submit() {
                        self.dispatch(cmd);
                    }
                }
                Input::Edit(id) => {
                    if !self.page.edit(id) {
                        writeln!(out, "no book with id {id}")?;
                        continue;
                    }
                    self.render_form(&mut out)?;
                    continue;
                }
                Input::Delete(id) => {
                    if !self.assume_yes {
                        write!(out, "{} [y/N] ", messages::confirm_delete(self.page.locale()))?;
                        out.flush()?;
                        let answer = lines.next().transpose()?.unwrap_or_default();
                        if !matches!(answer.trim(), "y" | "Y" | "yes") {
                            continue;
                        }
                    }
                    let cmd = self.page.delete(id);
                    self.dispatch(cmd);
                }
                Input::Reset => self.page.reset(),
            }
            self.render(&mut out)?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(text) = self.page.message_text() {
            writeln!(out, "! {text}")?;
        }
        write!(out, "{}", self.page.table().render(self.page.locale()))?;
        Ok(())
    }

    fn render_form<W: Write>(&self, out: &mut W) -> Result<()> {
        let form = self.page.form();
        if let FormMode::Edit(id) = form.mode() {
            writeln!(out, "id: {id}")?;
        }
        for (name, field) in [
            ("title", Field::Title),
            ("author", Field::Author),
            ("isbn", Field::Isbn),
            ("price", Field::Price),
            ("publishDate", Field::PublishDate),
        ] {
            writeln!(out, "{name}: {}", form.get(field))?;
        }
        Ok(())
    }
}
