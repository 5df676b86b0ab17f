mod common;

use actix_web::{http::StatusCode, test};
use common::client::{bearer, ids, TestClient};
use common::TestContext;
use serde_json::{json, Value};
use slate::access::Role;
use uuid::Uuid;

macro_rules! post_note {
    ($app:expr, $token:expr, $body:expr $(,)?) => {{
        let body: Value = $body;
        let req = test::TestRequest::post()
            .uri("/notes")
            .insert_header(bearer($token))
            .set_json(&body)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{body}");
        let created: Value = test::read_body_json(resp).await;
        created
    }};
}

macro_rules! visible_ids {
    ($app:expr, $token:expr, $uri:expr $(,)?) => {{
        let req = test::TestRequest::get().uri($uri).insert_header(bearer($token)).to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        ids(&body["notes"], "/id")
    }};
}

#[tokio::test]
async fn test_acting_note_hidden_from_cinematographer_visible_to_director() {
    println!("\n\n[+] Running test: test_acting_note_hidden_from_cinematographer_visible_to_director");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (director, director_token) = client.create_test_user(None).await.unwrap();
    let (actor, actor_token) = client.create_test_user(None).await.unwrap();
    let (dop, dop_token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Macbeth").await;
    client.db.assign_role(movie, actor, Role::Actor, Some("Macbeth".into())).await.unwrap();
    client.db.assign_role(movie, dop, Role::Cinematographer, None).await.unwrap();

    let created = post_note!(
        &app,
        &actor_token,
        json!({
            "film": movie,
            "title": "Act 1 tone",
            "quote": "Fair is foul",
            "category": "Gluma",
            "priority": "high",
            "assignedTo": [actor],
        }),
    );
    let note_id = created["note"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["note"]["createdBy"]["id"], actor.to_string());
    assert_eq!(created["note"]["assignedTo"][0]["id"], actor.to_string());

    let mine = format!("/notes/mine/{movie}");
    assert_eq!(visible_ids!(&app, &actor_token, &mine), vec![note_id.clone()]);
    assert!(visible_ids!(&app, &dop_token, &mine).is_empty());
    assert_eq!(visible_ids!(&app, &director_token, &mine), vec![note_id.clone()]);
    assert_eq!(visible_ids!(&app, &dop_token, &format!("/notes/all/{movie}")), vec![note_id]);
}

#[tokio::test]
async fn test_set_designer_needs_assignment_even_for_scenario_notes() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (director, director_token) = client.create_test_user(None).await.unwrap();
    let (designer, designer_token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Playtime").await;
    client.db.assign_role(movie, designer, Role::SetDesigner, None).await.unwrap();

    for category in ["Scenario", "Montaza"] {
        post_note!(
            &app,
            &director_token,
            json!({"film": movie, "title": category, "category": category, "priority": "low"}),
        );
    }
    assert!(visible_ids!(&app, &designer_token, &format!("/notes/mine/{movie}")).is_empty());

    let assigned = post_note!(
        &app,
        &director_token,
        json!({"film": movie, "category": "Scenario", "priority": "medium", "assignedTo": designer}),
    );
    assert_eq!(
        visible_ids!(&app, &designer_token, &format!("/notes/mine/{movie}")),
        vec![assigned["note"]["id"].as_str().unwrap().to_string()]
    );
}

#[tokio::test]
async fn test_user_without_role_sees_nothing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (director, director_token) = client.create_test_user(None).await.unwrap();
    let (outsider, outsider_token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Ordet").await;
    post_note!(
        &app,
        &director_token,
        json!({"film": movie, "category": "Scenario", "priority": "low", "assignedTo": [outsider]}),
    );

    assert!(visible_ids!(&app, &outsider_token, &format!("/notes/mine/{movie}")).is_empty());
    assert!(visible_ids!(&app, &outsider_token, "/notes").is_empty());
}

#[tokio::test]
async fn test_notes_listing_spans_every_movie_in_creation_order() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let (director, director_token) = client.create_test_user(None).await.unwrap();
    let (editor, editor_token) = client.create_test_user(None).await.unwrap();
    let first = client.create_test_movie(director, "First").await;
    let second = client.create_test_movie(director, "Second").await;
    client.db.assign_role(first, editor, Role::Editor, None).await.unwrap();
    client.db.assign_role(second, editor, Role::Editor, None).await.unwrap();

    let mut expected = Vec::new();
    for movie in [first, first, second] {
        let note = post_note!(
            &app,
            &director_token,
            json!({"film": movie, "category": "Montaza", "priority": "high", "assignedTo": [editor, editor]}),
        );
        assert_eq!(note["note"]["assignedTo"].as_array().unwrap().len(), 1);
        expected.push(note["note"]["id"].as_str().unwrap().to_string());
    }
    // acting notes stay hidden from the editor even when assigned
    post_note!(
        &app,
        &director_token,
        json!({"film": first, "category": "Gluma", "priority": "low", "assignedTo": editor}),
    );

    let per_movie = visible_ids!(&app, &editor_token, &format!("/notes/mine/{first}"));
    assert_eq!(per_movie, expected[..2].to_vec());

    let mut listed = visible_ids!(&app, &editor_token, "/notes");
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_note_creation_validation() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, token) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Persona").await;

    let cases = [
        (json!({"category": "Gluma", "priority": "low"}), StatusCode::BAD_REQUEST),
        (json!({"film": movie, "category": "Catering", "priority": "low"}), StatusCode::BAD_REQUEST),
        (json!({"film": movie, "category": "Gluma", "priority": "urgent"}), StatusCode::BAD_REQUEST),
        (json!({"film": Uuid::new_v4(), "category": "Gluma", "priority": "low"}), StatusCode::NOT_FOUND),
        (
            json!({"film": movie, "category": "Gluma", "priority": "low", "assignedTo": [Uuid::new_v4()]}),
            StatusCode::BAD_REQUEST,
        ),
    ];
    for (body, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/notes")
            .insert_header(bearer(&token))
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected, "{body}");
    }

    // without enforcement a category outside the creator's roles is accepted
    let (stranger, stranger_token) = client.create_test_user(None).await.unwrap();
    client.db.assign_role(movie, stranger, Role::SetDesigner, None).await.unwrap();
    post_note!(&app, &stranger_token, json!({"film": movie, "category": "Rezija", "priority": "low"}));
}

#[tokio::test]
async fn test_get_single_note_populates_people() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (director, token) = client.create_test_user(None).await.unwrap();
    let (a, _) = client.create_test_user(None).await.unwrap();
    let (b, _) = client.create_test_user(None).await.unwrap();
    let movie = client.create_test_movie(director, "Wild Strawberries").await;

    let created = post_note!(
        &app,
        &token,
        json!({"film": movie, "text": "p. 3", "page": 3, "location": 120, "category": "Snimanje", "priority": "medium", "assignedTo": [b, a]}),
    );
    let id = created["note"]["id"].as_str().unwrap();

    let req = test::TestRequest::get().uri(&format!("/notes/{id}")).insert_header(bearer(&token)).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["note"]["createdBy"]["id"], director.to_string());
    assert_eq!(ids(&body["note"]["assignedTo"], "/id"), vec![b.to_string(), a.to_string()]);
    assert_eq!(body["note"]["page"], 3);
    assert_eq!(body["note"]["film"], movie.to_string());

    let req = test::TestRequest::get()
        .uri(&format!("/notes/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
