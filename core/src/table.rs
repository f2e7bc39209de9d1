//! The rendered book list.

use unicode_width::UnicodeWidthStr;

use crate::messages::{self, Locale};
use crate::types::{Book, BookId};

/// Rows as last received from the server, in server order.
#[derive(Debug, Clone, Default)]
pub struct BookTable {
    books: Vec<Book>,
}

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Display cells per row; absent optional values render as "".
    pub fn rows(&self) -> Vec<[String; 6]> {
        self.books.iter().map(cells).collect()
    }

    /// Plain-text table padded to the widest cell per column.
    pub fn render(&self, locale: Locale) -> String {
        let headers = messages::table_headers(locale).map(str::to_string);
        let rows = self.rows();

        let mut widths = headers.clone().map(|h| display_width(&h));
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(display_width(cell));
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&headers).chain(&rows) {
            let line: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell}{}", " ".repeat(w - display_width(cell))))
                .collect();
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }
        out
    }
}

fn cells(book: &Book) -> [String; 6] {
    [
        book.id.to_string(),
        book.title.clone(),
        book.author.clone().unwrap_or_default(),
        book.isbn.clone(),
        book.price.map(|p| p.to_string()).unwrap_or_default(),
        book.publish_date.clone().unwrap_or_default(),
    ]
}

fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
