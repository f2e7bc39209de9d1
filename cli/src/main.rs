use anyhow::Result;
use book_cli::{App, Config, UreqTransport};
use book_core::{BookClient, BookPage};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_cli=info,book_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    tracing::info!(base_url = %config.base_url, locale = ?config.locale, "starting");

    let page = BookPage::new(BookClient::new(&config.base_url), config.locale);
    let mut app = App::new(page, UreqTransport::new(), config.yes);

    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout())
}
