//! Page-driven CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `BookPage` over real
//! HTTP using ureq, executing every command and its follow-up refresh the way
//! a host would.

use book_core::{
    ApiError, BookClient, BookId, BookPage, Command, Field, FormMode, HttpMethod, HttpRequest,
    HttpResponse, Locale, Message,
};

/// Execute an `HttpRequest` using ureq. Non-2xx statuses come back as data;
/// only transport failures become `Err`.
fn execute(req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let result = match (req.method, req.body.as_deref()) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

/// Run a command and every follow-up it produces.
fn drive(page: &mut BookPage, command: Command) {
    let mut next = Some(command);
    while let Some(cmd) = next {
        let outcome = execute(&cmd.request);
        next = page.complete(cmd.pending, outcome);
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let base = start_server();
    let mut page = BookPage::new(BookClient::new(&base), Locale::En);

    // Step 1: initial load — empty table.
    let cmd = page.load();
    drive(&mut page, cmd);
    assert!(page.table().is_empty());
    assert!(page.message().is_none());

    // Step 2: blank ISBN — nothing is sent.
    page.form_mut().set(Field::Title, "Dune");
    assert!(page.submit().is_none());
    assert_eq!(page.message(), Some(Message::RequiredFields));

    // Step 3: create — form clears, list is refetched.
    page.form_mut().set(Field::Author, " Frank Herbert ");
    page.form_mut().set(Field::Isbn, "978-0441013593");
    page.form_mut().set(Field::Price, "15000");
    page.form_mut().set(Field::PublishDate, "1965-08-01");
    let cmd = page.submit().unwrap();
    drive(&mut page, cmd);
    assert!(page.message().is_none());
    assert_eq!(page.form().mode(), FormMode::Create);
    assert!(page.form().title.is_empty());
    assert_eq!(page.table().len(), 1);
    let created = page.table().books()[0].clone();
    assert_eq!(created.author.as_deref(), Some("Frank Herbert"));
    assert_eq!(created.price, Some(15000));

    // Step 4: second book with only the required fields.
    page.form_mut().set(Field::Title, "Solaris");
    page.form_mut().set(Field::Isbn, "978-0156027601");
    let cmd = page.submit().unwrap();
    drive(&mut page, cmd);
    assert_eq!(page.table().len(), 2);

    // Step 5: edit the first book — PUT, then refetch.
    assert!(page.edit(created.id));
    assert_eq!(page.form().price, "15000");
    page.form_mut().set(Field::Title, "Dune (Deluxe)");
    page.form_mut().set(Field::Price, "");
    let cmd = page.submit().unwrap();
    assert_eq!(cmd.request.method, HttpMethod::Put);
    drive(&mut page, cmd);
    assert_eq!(page.form().book_id(), None);
    let updated = page.table().get(created.id).unwrap();
    assert_eq!(updated.title, "Dune (Deluxe)");
    assert_eq!(updated.price, None);

    // Step 6: delete — refetch shows one row.
    let cmd = page.delete(created.id);
    drive(&mut page, cmd);
    assert!(page.message().is_none());
    assert_eq!(page.table().len(), 1);
    assert!(page.table().get(created.id).is_none());

    // Step 7: delete again — 404 surfaces as the fixed delete message.
    let cmd = page.delete(created.id);
    drive(&mut page, cmd);
    assert_eq!(page.message(), Some(Message::DeleteFailed));
    assert_eq!(page.table().len(), 1);
}

#[test]
fn update_of_vanished_book_reports_update_failure() {
    let base = start_server();
    let mut page = BookPage::new(BookClient::new(&base), Locale::En);

    page.form_mut().set(Field::Title, "Ubik");
    page.form_mut().set(Field::Isbn, "978-0547572291");
    let cmd = page.submit().unwrap();
    drive(&mut page, cmd);
    let id = page.table().books()[0].id;

    // Another client removes it while we are editing.
    assert!(page.edit(id));
    let delete = BookClient::new(&base).build_delete_book(id);
    assert_eq!(execute(&delete).unwrap().status, 204);

    let cmd = page.submit().unwrap();
    drive(&mut page, cmd);
    assert_eq!(page.message(), Some(Message::UpdateFailed));
    assert_eq!(page.form().book_id(), Some(id));
}

#[test]
fn unreachable_server_keeps_table_and_reports_list_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut page = BookPage::new(BookClient::new(&format!("http://127.0.0.1:{port}")), Locale::Ko);

    let cmd = page.load();
    drive(&mut page, cmd);
    assert!(page.table().is_empty());
    assert_eq!(page.message_text(), Some("도서 목록을 불러오는 중 오류가 발생했습니다."));

    assert!(!page.edit(BookId(1)));
}
