mod common;

use actix_web::{http::StatusCode, test};
use common::client::{bearer, multipart_body, TestClient};
use common::TestContext;
use serde_json::{json, Value};

#[tokio::test]
async fn test_add_movie_makes_creator_director() {
    println!("\n\n[+] Running test: test_add_movie_makes_creator_director");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (user_id, token) = client.create_test_user(None).await.unwrap();

    let (content_type, body) = multipart_body(&[("name", "Dune"), ("description", "Desert")], None);
    let req = test::TestRequest::post()
        .uri("/movies/add")
        .insert_header(bearer(&token))
        .insert_header(content_type)
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let movie_id = body["movie"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie_id}/my-roles"))
        .insert_header(bearer(&token))
        .to_request();
    let roles: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(roles["mainRole"], 1);
    assert_eq!(roles["roles"], json!([{"role": 1, "character": null}]));

    let req = test::TestRequest::get().uri("/movies/my-movies").insert_header(bearer(&token)).to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine["movies"][0]["movie"]["id"], movie_id.as_str());
    assert_eq!(mine["movies"][0]["role"], 1);

    let req = test::TestRequest::get().uri("/movies/not-my-movies").insert_header(bearer(&token)).to_request();
    let crew: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(crew["movies"], json!([]));

    let credits = client.db.list_credits(movie_id.parse().unwrap()).await.unwrap();
    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].user.id, user_id);
}

#[tokio::test]
async fn test_add_movie_requires_name() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_id, token) = client.create_test_user(None).await.unwrap();

    let (content_type, body) = multipart_body(&[("description", "nameless")], None);
    let req = test::TestRequest::post()
        .uri("/movies/add")
        .insert_header(bearer(&token))
        .insert_header(content_type)
        .set_payload(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assigned_actor_shows_up_in_credits_with_character() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, director_token) = client.create_test_user(None).await.unwrap();
    let (actor, actor_token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Hamlet").await;

    let req = test::TestRequest::post()
        .uri(&format!("/movies/{movie}/assign-role"))
        .insert_header(bearer(&director_token))
        .set_json(json!({"userId": actor, "role": 2, "character": "Hamlet"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/users"))
        .insert_header(bearer(&director_token))
        .to_request();
    let credits: Value = test::call_and_read_body_json(&app, req).await;
    let entries = credits["users"].as_array().unwrap();
    assert!(entries.iter().any(|e| {
        e["user"]["id"] == actor.to_string() && e["role"] == 2 && e["character"] == "Hamlet"
    }));

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/my-role"))
        .insert_header(bearer(&actor_token))
        .to_request();
    let my_role: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(my_role["role"], 2);
    assert_eq!(my_role["character"], "Hamlet");

    let req = test::TestRequest::get().uri("/movies/not-my-movies").insert_header(bearer(&actor_token)).to_request();
    let crew: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(crew["movies"][0]["movie"]["id"], movie.to_string());
    assert_eq!(crew["movies"][0]["roles"], json!([{"role": 2, "character": "Hamlet"}]));
}

#[tokio::test]
async fn test_main_role_uses_priority_across_multiple_rows() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, _) = client.create_test_user(None).await.unwrap();
    let (crew, crew_token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Stalker").await;

    for role in [slate::access::Role::SetDesigner, slate::access::Role::Actor] {
        client.db.assign_role(movie, crew, role, None).await.unwrap();
    }

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/user/{crew}/roles"))
        .insert_header(bearer(&crew_token))
        .to_request();
    let roles: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(roles["mainRole"], 2);
    assert_eq!(roles["roles"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{}/my-role", uuid::Uuid::new_v4()))
        .insert_header(bearer(&crew_token))
        .to_request();
    let none: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(none["role"], Value::Null);
}

#[tokio::test]
async fn test_remove_role_guards_director_and_deletes_duplicates() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, token) = client.create_test_user(None).await.unwrap();
    let (editor, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Solaris").await;

    println!("[>] Assigning the editor role twice.");
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/movies/{movie}/assign-role"))
            .insert_header(bearer(&token))
            .set_json(json!({"userId": editor, "role": 5}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/movies/{movie}/remove-role"))
        .insert_header(bearer(&token))
        .set_json(json!({"userId": director, "role": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // refused even for a movie that does not exist
    let req = test::TestRequest::post()
        .uri(&format!("/movies/{}/remove-role", uuid::Uuid::new_v4()))
        .insert_header(bearer(&token))
        .set_json(json!({"userId": director, "role": 1}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri(&format!("/movies/{movie}/remove-role"))
        .insert_header(bearer(&token))
        .set_json(json!({"userId": editor, "role": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["removedCount"], 2);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/movies/{movie}/remove-role"))
        .insert_header(bearer(&token))
        .set_json(json!({"userId": editor, "role": 5}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_role_validates_input() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, token) = client.create_test_user(None).await.unwrap();
    let (other, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Ran").await;

    let cases = [
        (format!("/movies/{movie}/assign-role"), json!({"userId": other, "role": 9}), StatusCode::BAD_REQUEST),
        (format!("/movies/{movie}/assign-role"), json!({"role": 2}), StatusCode::BAD_REQUEST),
        (
            format!("/movies/{movie}/assign-role"),
            json!({"userId": uuid::Uuid::new_v4(), "role": 2}),
            StatusCode::NOT_FOUND,
        ),
        (
            format!("/movies/{}/assign-role", uuid::Uuid::new_v4()),
            json!({"userId": other, "role": 2}),
            StatusCode::NOT_FOUND,
        ),
    ];
    for (uri, payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(bearer(&token))
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected, "{payload}");
    }
}

#[tokio::test]
async fn test_available_users_excludes_holders_of_the_role() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, token) = client.create_test_user(None).await.unwrap();
    let (actor, _) = client.create_test_user(None).await.unwrap();
    let (free, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Ikiru").await;
    client.db.assign_role(movie, actor, slate::access::Role::Actor, Some("Watanabe".into())).await.unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/available-users?role=2"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let listed = common::client::ids(&body["users"], "/id");
    assert!(listed.contains(&free.to_string()));
    assert!(listed.contains(&director.to_string()));
    assert!(!listed.contains(&actor.to_string()));

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/available-users"))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri(&format!("/movies/{movie}/available-users?role=0"))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_movie_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_id, token) = client.create_test_user(None).await.unwrap();

    for suffix in ["", "/users"] {
        let req = test::TestRequest::get()
            .uri(&format!("/movies/{}{}", uuid::Uuid::new_v4(), suffix))
            .insert_header(bearer(&token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
