use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: Option<String>,
    pub isbn: String,
    pub price: Option<i64>,
    pub publish_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub isbn: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

impl BookInput {
    fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.isbn.trim().is_empty()
    }

    fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author.filter(|a| !a.is_empty()),
            isbn: self.isbn,
            price: self.price,
            publish_date: self.publish_date,
        }
    }
}

#[derive(Clone, Default)]
pub struct Db {
    books: Arc<RwLock<BTreeMap<u64, Book>>>,
    next_id: Arc<AtomicU64>,
}

impl Db {
    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(Db::default())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let books = db.books.read().await;
    Json(books.values().cloned().collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), StatusCode> {
    if !input.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let book = input.into_book(db.allocate_id());
    db.books.write().await.insert(book.id, book.clone());
    tracing::debug!(id = book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Book>, StatusCode> {
    let books = db.books.read().await;
    books.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Full replacement: every field of the stored book comes from the body.
async fn update_book(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, StatusCode> {
    if !input.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut books = db.books.write().await;
    let book = books.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *book = input.into_book(id);
    tracing::debug!(id, "book updated");
    Ok(Json(book.clone()))
}

async fn delete_book(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut books = db.books.write().await;
    books.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
