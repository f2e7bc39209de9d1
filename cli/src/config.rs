use book_core::client::DEFAULT_BASE_URL;
use book_core::Locale;
use clap::Parser;

/// Terminal client for the books REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "books", version)]
pub struct Config {
    /// Base URL of the API server
    #[arg(long, env = "BOOKS_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Language of messages and table headers (ko, en)
    #[arg(long, env = "BOOKS_LOCALE", default_value = "ko", value_parser = parse_locale)]
    pub locale: Locale,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
}
