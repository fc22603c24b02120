#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Portfolio API client integration tests
//!
//! Drives `PortfolioClient` against the in-process mock API.

mod mock_servers;

use axum::http::{Method, StatusCode};
use mock_servers::{MockPortfolioApi, MOCK_PASSWORD, MOCK_TOKEN};
use portfolio_site::client::{ApiError, ImageUpload, PortfolioClient};
use portfolio_site::config::ApiConfig;
use portfolio_site::models::{AboutInput, BlogInput, ContactInput, ProjectInput};
use serde_json::json;

fn client_for(api: &MockPortfolioApi, collection_trailing_slash: bool) -> PortfolioClient {
    PortfolioClient::new(&ApiConfig {
        base_url: api.base_url(),
        timeout_secs: 5,
        collection_trailing_slash,
    })
    .unwrap()
}

fn blog_input(title: &str) -> BlogInput {
    BlogInput {
        title: title.to_string(),
        excerpt: "Excerpt".to_string(),
        content: "Line one\nLine two".to_string(),
    }
}

#[tokio::test]
async fn login_returns_token() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    let token = client.auth().login(MOCK_PASSWORD).await.unwrap();
    assert_eq!(token, MOCK_TOKEN);

    api.stop().await;
}

#[tokio::test]
async fn login_failure_carries_server_detail() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    let err = client.auth().login("wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid credentials");

    api.stop().await;
}

#[tokio::test]
async fn collections_use_trailing_slash_items_do_not() {
    let api = MockPortfolioApi::start().await;
    api.seed("blogs", json!({"id": "b1", "title": "T", "excerpt": "E", "content": "C"}))
        .await;
    let client = client_for(&api, true);

    client.blogs().list().await.unwrap();
    client.blogs().get("b1").await.unwrap();

    let paths: Vec<String> = api.requests().await.into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/blogs/", "/api/blogs/b1"]);

    let client = client_for(&api, false);
    client.blogs().list().await.unwrap();
    let last = api.requests().await.pop().unwrap();
    assert_eq!(last.path, "/api/blogs");

    api.stop().await;
}

#[tokio::test]
async fn bearer_is_attached_when_bound() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    client.projects().list().await.unwrap();
    client
        .with_bearer(Some(MOCK_TOKEN))
        .projects()
        .list()
        .await
        .unwrap();

    let requests = api.requests().await;
    assert_eq!(requests[0].bearer, None);
    assert_eq!(requests[1].bearer.as_deref(), Some(MOCK_TOKEN));

    api.stop().await;
}

#[tokio::test]
async fn blog_crud_round_trip() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true).with_bearer(Some(MOCK_TOKEN));

    let created = client.blogs().create(&blog_input("First")).await.unwrap();
    assert!(!created.id.is_empty());
    assert!(created.created_at.is_some(), "naive timestamp should parse");

    client
        .blogs()
        .update(&created.id, &blog_input("Renamed"))
        .await
        .unwrap();
    let fetched = client.blogs().get(&created.id).await.unwrap();
    assert_eq!(fetched.title, "Renamed");
    assert_eq!(fetched.paragraphs(), vec!["Line one", "Line two"]);

    client.blogs().delete(&created.id).await.unwrap();
    assert!(client.blogs().list().await.unwrap().is_empty());

    let methods: Vec<Method> = api.requests().await.into_iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![Method::POST, Method::PUT, Method::GET, Method::DELETE, Method::GET]
    );

    api.stop().await;
}

#[tokio::test]
async fn writes_without_token_are_unauthorized() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    let err = client.blogs().create(&blog_input("Nope")).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(api.records("blogs").await.is_empty());

    api.stop().await;
}

#[tokio::test]
async fn project_demo_link_is_omitted_when_absent() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true).with_bearer(Some(MOCK_TOKEN));

    let input = ProjectInput {
        title: "Site".into(),
        description: "Portfolio".into(),
        image_url: "https://cdn.example.com/a.png".into(),
        github_link: "https://github.com/u/site".into(),
        demo_link: None,
    };
    client.projects().create(&input).await.unwrap();

    let stored = api.records("projects").await;
    assert_eq!(stored.len(), 1);
    assert!(stored[0].get("demo_link").is_none());

    api.stop().await;
}

#[tokio::test]
async fn image_upload_returns_url() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true).with_bearer(Some(MOCK_TOKEN));

    let upload = ImageUpload::new("shot.png", None, vec![0x89, b'P', b'N', b'G']).unwrap();
    let url = client.projects().upload_image(upload).await.unwrap();
    assert_eq!(url, "/uploads/shot.png");
    assert_eq!(
        client.resolve_image_url(&url).unwrap(),
        format!("{}/uploads/shot.png", api.base_url())
    );

    let uploads = api.uploads().await;
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(uploads[0].size, 4);

    let paths: Vec<String> = api.requests().await.into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/projects/upload"]);

    api.stop().await;
}

#[tokio::test]
async fn about_is_first_record_or_none() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true).with_bearer(Some(MOCK_TOKEN));

    assert!(client.about().current().await.unwrap().is_none());

    let input = AboutInput {
        bio: "Hello".into(),
        skills: vec!["Rust".into()],
        hobbies: vec![],
    };
    let created = client.about().create(&input).await.unwrap();
    let current = client.about().current().await.unwrap().unwrap();
    assert_eq!(current.id, created.id);
    assert_eq!(current.skills, vec!["Rust"]);

    api.stop().await;
}

#[tokio::test]
async fn contact_submit_is_public_listing_is_not() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    let input = ContactInput {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hi".into(),
    };
    client.contact().submit(&input).await.unwrap();

    let err = client.contact().list().await.unwrap_err();
    assert!(err.is_unauthorized());

    let listed = client
        .with_bearer(Some(MOCK_TOKEN))
        .contact()
        .list()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Ada");

    api.stop().await;
}

#[tokio::test]
async fn contact_admin_calls_send_token_in_query() {
    let api = MockPortfolioApi::start().await;
    api.seed(
        "contact",
        json!({"id": "c1", "name": "Ada", "email": "ada@example.com", "message": "Hi",
               "created_at": "2024-01-05T14:30:00"}),
    )
    .await;
    let admin = client_for(&api, true).with_bearer(Some(MOCK_TOKEN));

    assert_eq!(admin.contact().list().await.unwrap().len(), 1);
    admin.contact().delete("c1").await.unwrap();
    assert!(api.records("contact").await.is_empty());

    let requests = api.requests().await;
    let expected = format!("token={MOCK_TOKEN}");
    assert_eq!(requests[0].path, "/api/contact/");
    assert_eq!(requests[0].query.as_deref(), Some(expected.as_str()));
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, "/api/contact/c1");
    assert_eq!(requests[1].query.as_deref(), Some(expected.as_str()));

    // Other resources keep the header only
    admin.blogs().list().await.unwrap();
    let requests = api.requests().await;
    assert_eq!(requests[2].query, None);
    assert_eq!(requests[2].bearer.as_deref(), Some(MOCK_TOKEN));

    api.stop().await;
}

#[tokio::test]
async fn verify_checks_token_with_server() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    assert!(client.auth().verify().await.unwrap_err().is_unauthorized());
    let stale = client.with_bearer(Some("stale"));
    assert!(stale.auth().verify().await.unwrap_err().is_unauthorized());
    client.with_bearer(Some(MOCK_TOKEN)).auth().verify().await.unwrap();

    api.stop().await;
}

#[tokio::test]
async fn server_errors_are_classified() {
    let api = MockPortfolioApi::start().await;
    let client = client_for(&api, true);

    api.fail_next(StatusCode::INTERNAL_SERVER_ERROR, None).await;
    let err = client.blogs().list().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.user_message(), "Server error. Please try again later.");

    api.fail_next(StatusCode::NOT_FOUND, Some("Blog not found")).await;
    let err = client.blogs().get("missing").await.unwrap_err();
    assert_eq!(err.user_message(), "Blog not found");

    api.stop().await;
}

#[tokio::test]
async fn unreachable_api_is_no_response() {
    // Grab a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PortfolioClient::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
        collection_trailing_slash: true,
    })
    .unwrap();

    let err = client.blogs().list().await.unwrap_err();
    assert!(matches!(err, ApiError::NoResponse(_)), "got {err:?}");
    assert_eq!(
        err.user_message(),
        "No response from server. Please check your connection."
    );
}
