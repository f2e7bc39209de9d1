//! Domain DTOs for the books API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration tests catch schema drift between the two crates. Wire
//! names are camelCase (`publishDate`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

/// A single book returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub isbn: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

/// Request payload for both creating and updating a book.
///
/// `price` and `publishDate` are always present on the wire, as `null` when
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Option<i64>,
    pub publish_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_accepts_missing_optional_fields() {
        let book: Book = serde_json::from_str(r#"{"id":7,"title":"Dune","isbn":"978-0441013593"}"#).unwrap();
        assert_eq!(book.id, BookId(7));
        assert!(book.author.is_none());
        assert!(book.price.is_none());
        assert!(book.publish_date.is_none());
    }

    #[test]
    fn book_reads_camel_case_publish_date() {
        let book: Book = serde_json::from_str(
            r#"{"id":1,"title":"T","author":null,"isbn":"I","price":12000,"publishDate":"2020-01-02"}"#,
        )
        .unwrap();
        assert_eq!(book.price, Some(12000));
        assert_eq!(book.publish_date.as_deref(), Some("2020-01-02"));
    }

    #[test]
    fn input_serializes_absent_values_as_null() {
        let input = BookInput {
            title: "T".to_string(),
            author: String::new(),
            isbn: "I".to_string(),
            price: None,
            publish_date: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["author"], "");
        assert!(json["price"].is_null());
        assert!(json["publishDate"].is_null());
        assert!(json.get("publish_date").is_none());
    }

    #[test]
    fn book_id_parses_with_whitespace() {
        assert_eq!(" 42 ".parse::<BookId>().unwrap(), BookId(42));
        assert!("abc".parse::<BookId>().is_err());
    }
}
