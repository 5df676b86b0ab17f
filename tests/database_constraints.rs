mod common;

use actix_web::{http::StatusCode, ResponseError};
use common::client::TestClient;
use common::TestContext;
use slate::types::document::{DBBookUpsert, DBScenarioCreate};
use slate::types::error::AppError;

// These go straight to the database layer, past the handlers' existence
// checks, so the unique keys are what refuses the second write.

#[tokio::test]
async fn test_duplicate_email_is_a_conflict_not_a_server_error() {
    println!("\n\n[+] Running test: test_duplicate_email_is_a_conflict_not_a_server_error");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);

    let email = "twin@test.com".to_string();
    client.create_test_user(Some(email.clone())).await.unwrap();
    let err = client.create_test_user(Some(email)).await.unwrap_err();

    assert!(matches!(err, AppError::AlreadyExists), "{err:?}");
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_second_scenario_insert_is_refused() {
    println!("\n\n[+] Running test: test_second_scenario_insert_is_refused");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let (director, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Stalker").await;

    let scenario = |title: &str| DBScenarioCreate {
        movie_id: movie,
        title: title.to_string(),
        description: None,
        file_url: None,
    };
    client.db.create_scenario(scenario("Zone")).await.unwrap();
    let err = client.db.create_scenario(scenario("Zone again")).await.unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "bad request: Scenario already exists for this movie");
    assert_eq!(client.db.get_scenario(movie).await.unwrap().title, "Zone");
}

#[tokio::test]
async fn test_second_book_insert_is_refused() {
    println!("\n\n[+] Running test: test_second_book_insert_is_refused");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let (director, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Nostalghia").await;

    let book = |file_url: &str| DBBookUpsert {
        movie_id: movie,
        file_url: file_url.to_string(),
        title: None,
        description: None,
    };
    let first = client.db.create_book(book("/uploads/books/a.pdf")).await.unwrap();
    assert_eq!(first.title, "Shooting book");
    let err = client.db.create_book(book("/uploads/books/b.pdf")).await.unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    let kept = client.db.get_book(movie).await.unwrap();
    assert_eq!(kept.file_url.as_deref(), Some("/uploads/books/a.pdf"));
}
