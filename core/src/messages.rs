//! Fixed user-facing strings.
//!
//! Every failure the page shows comes from here; no error detail from the
//! server is ever displayed.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Ok(Locale::Ko),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// A status message the page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ListFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    RequiredFields,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Message::ListFailed, Locale::Ko) => "도서 목록을 불러오는 중 오류가 발생했습니다.",
            (Message::ListFailed, Locale::En) => "Failed to load the book list.",
            (Message::CreateFailed, Locale::Ko) => "도서 등록 중 오류가 발생했습니다.",
            (Message::CreateFailed, Locale::En) => "Failed to register the book.",
            (Message::UpdateFailed, Locale::Ko) => "도서 수정 중 오류가 발생했습니다.",
            (Message::UpdateFailed, Locale::En) => "Failed to update the book.",
            (Message::DeleteFailed, Locale::Ko) => "도서 삭제 중 오류가 발생했습니다.",
            (Message::DeleteFailed, Locale::En) => "Failed to delete the book.",
            (Message::RequiredFields, Locale::Ko) => "제목과 ISBN은 필수 항목입니다.",
            (Message::RequiredFields, Locale::En) => "Title and ISBN are required.",
        }
    }
}

pub fn confirm_delete(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "정말 삭제하시겠습니까?",
        Locale::En => "Really delete this book?",
    }
}

pub fn create_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "등록",
        Locale::En => "Register",
    }
}

pub fn update_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "수정",
        Locale::En => "Update",
    }
}

pub fn table_headers(locale: Locale) -> [&'static str; 6] {
    match locale {
        Locale::Ko => ["ID", "제목", "저자", "ISBN", "가격", "출판일"],
        Locale::En => ["ID", "Title", "Author", "ISBN", "Price", "Published"],
    }
}
