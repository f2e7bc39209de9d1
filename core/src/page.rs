//! Page controller: form, table and status message driven by user events.
//!
//! # Design
//! The page never performs I/O. An event that needs the network returns a
//! `Command`; the host executes its request and hands the outcome back to
//! `complete` together with the command's `Pending` tag. Transport failures
//! and non-2xx responses are the same failure here, and each maps to one
//! fixed message. There is no retry and no guard against overlapping
//! commands: outcomes are applied in the order the host delivers them.

use crate::client::BookClient;
use crate::error::ApiError;
use crate::form::{BookForm, FormMode};
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::{Locale, Message};
use crate::table::BookTable;
use crate::types::BookId;

/// Which action an in-flight request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    List,
    /// Create or update, with the form mode captured at submit time.
    Save(FormMode),
    Delete(BookId),
}

/// A request the host must execute, tagged with its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub pending: Pending,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct BookPage {
    client: BookClient,
    form: BookForm,
    table: BookTable,
    message: Option<Message>,
    locale: Locale,
}

impl BookPage {
    pub fn new(client: BookClient, locale: Locale) -> Self {
        Self {
            client,
            form: BookForm::new(),
            table: BookTable::new(),
            message: None,
            locale,
        }
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn table(&self) -> &BookTable {
        &self.table
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn message(&self) -> Option<Message> {
        self.message
    }

    pub fn message_text(&self) -> Option<&'static str> {
        self.message.map(|m| m.text(self.locale))
    }

    /// Fetch the full list; used on start-up and after every mutation.
    pub fn load(&self) -> Command {
        Command {
            pending: Pending::List,
            request: self.client.build_list_books(),
        }
    }

    /// Submit the form. Returns `None` when nothing should be sent.
    pub fn submit(&mut self) -> Option<Command> {
        self.message = None;

        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(%err, "form rejected");
                self.message = Some(Message::RequiredFields);
                return None;
            }
        };

        let mode = self.form.mode();
        let built = match mode {
            FormMode::Create => self.client.build_create_book(&input),
            FormMode::Edit(id) => self.client.build_update_book(id, &input),
        };
        match built {
            Ok(request) => Some(Command {
                pending: Pending::Save(mode),
                request,
            }),
            Err(err) => {
                tracing::error!(%err, "could not build save request");
                self.message = Some(save_failed(mode));
                None
            }
        }
    }

    /// Load a row into the form. Returns false when the id is not in the table.
    pub fn edit(&mut self, id: BookId) -> bool {
        self.message = None;
        match self.table.get(id) {
            Some(book) => {
                self.form.load(book);
                true
            }
            None => false,
        }
    }

    /// Delete a book. The caller confirms with the user beforehand.
    pub fn delete(&mut self, id: BookId) -> Command {
        self.message = None;
        Command {
            pending: Pending::Delete(id),
            request: self.client.build_delete_book(id),
        }
    }

    /// Cancel editing: clear the form, the held id and the message.
    pub fn reset(&mut self) {
        self.form.reset();
        self.message = None;
    }

    /// Apply the outcome of a command. May return a follow-up list refresh.
    pub fn complete(
        &mut self,
        pending: Pending,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Option<Command> {
        match pending {
            Pending::List => {
                match outcome.and_then(|resp| self.client.parse_list_books(resp)) {
                    Ok(books) => self.table.replace(books),
                    Err(err) => self.fail(Message::ListFailed, &err),
                }
                None
            }
            Pending::Save(mode) => {
                match outcome.and_then(|resp| self.client.parse_save_ack(resp)) {
                    Ok(()) => {
                        tracing::debug!(?mode, "saved");
                        self.form.reset();
                        Some(self.load())
                    }
                    Err(err) => {
                        self.fail(save_failed(mode), &err);
                        None
                    }
                }
            }
            Pending::Delete(id) => {
                match outcome.and_then(|resp| self.client.parse_delete_book(resp)) {
                    Ok(()) => {
                        tracing::debug!(%id, "deleted");
                        Some(self.load())
                    }
                    Err(err) => {
                        self.fail(Message::DeleteFailed, &err);
                        None
                    }
                }
            }
        }
    }

    fn fail(&mut self, message: Message, err: &ApiError) {
        tracing::error!(%err, ?message, "request failed");
        self.message = Some(message);
    }
}

fn save_failed(mode: FormMode) -> Message {
    match mode {
        FormMode::Create => Message::CreateFailed,
        FormMode::Edit(_) => Message::UpdateFailed,
    }
}
