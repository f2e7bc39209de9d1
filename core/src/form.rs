//! Create/edit form state.
//!
//! The form has exactly two modes, decided by whether a book id is held.
//! Field values are kept as raw text, the way a user typed them; they are
//! only trimmed and converted when a `BookInput` is produced.

use std::str::FromStr;

use crate::error::FormError;
use crate::messages::{self, Locale};
use crate::types::{Book, BookId, BookInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(BookId),
}

/// An editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Isbn,
    Price,
    PublishDate,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            "isbn" => Ok(Field::Isbn),
            "price" => Ok(Field::Price),
            "publishdate" | "publish_date" | "date" => Ok(Field::PublishDate),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub publish_date: String,
    book_id: Option<BookId>,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match self.book_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn book_id(&self) -> Option<BookId> {
        self.book_id
    }

    pub fn submit_label(&self, locale: Locale) -> &'static str {
        match self.mode() {
            FormMode::Create => messages::create_label(locale),
            FormMode::Edit(_) => messages::update_label(locale),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Isbn => self.isbn = value,
            Field::Price => self.price = value,
            Field::PublishDate => self.publish_date = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Isbn => &self.isbn,
            Field::Price => &self.price,
            Field::PublishDate => &self.publish_date,
        }
    }

    /// Validate and convert the form into a request payload.
    pub fn to_input(&self) -> Result<BookInput, FormError> {
        let title = trim(&self.title);
        let isbn = trim(&self.isbn);
        if title.is_empty() || isbn.is_empty() {
            return Err(FormError::MissingRequired);
        }
        Ok(BookInput {
            title: title.to_string(),
            author: trim(&self.author).to_string(),
            isbn: isbn.to_string(),
            price: parse_price(&self.price),
            publish_date: Some(self.publish_date.clone()).filter(|d| !d.is_empty()),
        })
    }

    /// Fill the form from a table row and switch to edit mode.
    pub fn load(&mut self, book: &Book) {
        self.book_id = Some(book.id);
        self.title = book.title.clone();
        self.author = book.author.clone().unwrap_or_default();
        self.isbn = book.isbn.clone();
        self.price = book.price.map(|p| p.to_string()).unwrap_or_default();
        self.publish_date = book.publish_date.clone().unwrap_or_default();
    }

    /// Clear every field and drop the held id.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whitespace trim that also drops byte-order marks.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Leading-integer parse: whitespace, an optional sign, then digits up to the
/// first non-digit. No digits (or overflow) means no price.
fn parse_price(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
