//! Session lifecycle tests: login, logout, restore, server-side invalidation.
//!
//! Run with: cargo test -p ocean --test session_test

mod common;

use common::*;
use ocean::{
    AppState, ClientError, DocType, Feedback, Method, Screen, SessionStorage, StoredSession,
};
use serde_json::json;

// ============================================================================
// Login / register
// ============================================================================

#[tokio::test]
async fn test_login_then_projects_use_bearer_token() {
    let h = anonymous();
    h.transport
        .push_json(200, json!({"token": "t1", "email": "a@b.com"}));
    h.transport.push_json(200, json!([]));

    h.controller.login("a@b.com", "x").await.unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);

    let login = &requests[0];
    assert_eq!(login.method, Method::Post);
    assert!(login.url.ends_with("/login"));
    assert_eq!(login.header("Authorization"), None);
    assert_eq!(
        h.transport.calls()[0],
        (Method::Post, "/login".to_string())
    );
    let body: serde_json::Value = serde_json::from_str(login.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"email": "a@b.com", "password": "x"}));

    let projects = &requests[1];
    assert_eq!(projects.method, Method::Get);
    assert!(projects.url.ends_with("/projects"));
    assert_eq!(projects.header("Authorization"), Some("Bearer t1"));

    let state = h.state();
    assert_eq!(state.session.token(), Some("t1"));
    assert_eq!(state.session.email(), "a@b.com");
    assert_eq!(state.screen(), Screen::Dashboard);
    assert_eq!(
        h.storage.load(),
        Some(StoredSession {
            token: "t1".to_string(),
            email: "a@b.com".to_string()
        })
    );
}

#[tokio::test]
async fn test_register_posts_to_register() {
    let h = anonymous();
    h.transport
        .push_json(201, json!({"token": "t2", "email": "new@b.com"}));
    h.transport.push_json(200, json!([]));

    h.controller.register("new@b.com", "pw").await.unwrap();

    assert_eq!(h.transport.calls()[0], (Method::Post, "/register".to_string()));
    assert_eq!(h.state().session.token(), Some("t2"));
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let h = anonymous();
    h.transport
        .push_json(401, json!({"error": "Invalid credentials"}));

    let err = h.controller.login("a@b.com", "wrong").await.unwrap_err();

    assert_eq!(err, ClientError::Auth("Invalid credentials".to_string()));
    assert_eq!(h.state().screen(), Screen::Auth);
    assert!(h.storage.load().is_none());
    assert_eq!(h.transport.request_count(), 1);
}

#[tokio::test]
async fn test_duplicate_registration_is_auth_error() {
    let h = anonymous();
    h.transport
        .push_json(400, json!({"error": "User already exists"}));

    let err = h.controller.register("a@b.com", "x").await.unwrap_err();
    assert_eq!(err.user_message("Auth failed"), "User already exists");
    assert!(!h.state().session.is_authenticated());
}

#[tokio::test]
async fn test_empty_credentials_make_no_request() {
    let h = anonymous();
    let err = h.controller.login("", "x").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn test_network_failure_during_login() {
    let h = anonymous();
    h.transport.push_network_error("connection refused");
    let err = h.controller.login("a@b.com", "x").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!h.state().session.is_authenticated());
}

// ============================================================================
// Restore / logout
// ============================================================================

#[tokio::test]
async fn test_restore_loads_projects_with_stored_token() {
    let h = harness_with_storage(ocean::MemorySessionStorage::with_session("t9", "z@b.com"));
    h.transport.push_json(
        200,
        json!([project_json("p1", "EV market", "docx", vec![section_json("Intro", "", false)])]),
    );

    h.controller.start().await;

    assert_eq!(
        h.transport.requests()[0].header("authorization"),
        Some("Bearer t9")
    );
    let state = h.state();
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.projects[0].doc_type, DocType::Report);
    assert_eq!(state.screen(), Screen::Dashboard);
}

#[tokio::test]
async fn test_start_without_stored_session_stays_anonymous() {
    let h = anonymous();
    h.controller.start().await;
    assert_eq!(h.transport.request_count(), 0);
    assert_eq!(h.state().screen(), Screen::Auth);
}

#[tokio::test]
async fn test_logout_is_unconditional_reset() {
    let h = with_open_project(vec![section_json("Intro", "text", true)]).await;
    assert_eq!(h.state().screen(), Screen::Editor);

    h.controller.logout();

    assert_eq!(h.state(), AppState::default());
    assert!(h.storage.load().is_none());
}

#[tokio::test]
async fn test_load_failure_keeps_previous_collection() {
    let h = with_open_project(vec![section_json("Intro", "", false)]).await;
    h.transport
        .push_json(500, json!({"error": "database down"}));

    h.controller.load_projects().await;

    let state = h.state();
    assert_eq!(state.projects.len(), 1);
    assert!(state.session.is_authenticated());
}

#[tokio::test]
async fn test_non_list_project_reply_is_empty_collection() {
    let h = with_open_project(vec![section_json("Intro", "", false)]).await;
    h.transport.push_json(200, json!({"unexpected": true}));

    h.controller.load_projects().await;

    assert!(h.state().projects.is_empty());
}

// ============================================================================
// Server-side invalidation
// ============================================================================

fn assert_reset(h: &Harness) {
    let state = h.state();
    assert_eq!(state.session.token(), None);
    assert!(state.projects.is_empty());
    assert!(state.current.is_none());
    assert_eq!(state.screen(), Screen::Auth);
    assert!(h.storage.load().is_none());
}

fn unauthorized() -> ocean::HttpResponse {
    json_response(401, json!({"msg": "Token has expired"}))
}

#[tokio::test]
async fn test_401_on_load_resets_session() {
    let h = with_open_project(vec![section_json("Intro", "", false)]).await;
    h.transport.push(unauthorized());
    h.controller.load_projects().await;
    assert_reset(&h);
}

#[tokio::test]
async fn test_401_on_generate_resets_session() {
    let h = with_open_project(vec![section_json("Intro", "", false)]).await;
    h.transport.push(unauthorized());
    let err = h.controller.generate_section("p1", 0).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_reset(&h);
}

#[tokio::test]
async fn test_401_on_refine_resets_session() {
    let h = with_open_project(vec![section_json("Intro", "text", true)]).await;
    h.transport.push(unauthorized());
    let err = h
        .controller
        .refine_section("p1", 0, "shorter")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_reset(&h);
}

#[tokio::test]
async fn test_401_on_persist_resets_session() {
    let h = with_open_project(vec![section_json("Intro", "text", true)]).await;
    h.transport.push(unauthorized());
    h.controller
        .toggle_feedback("p1", 0, Feedback::Like)
        .await;
    assert_reset(&h);
}

#[tokio::test]
async fn test_401_on_export_resets_session() {
    let h = with_open_project(vec![section_json("Intro", "text", true)]).await;
    h.transport.push(unauthorized());
    let err = h.controller.export_project("p1").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_reset(&h);
}

#[tokio::test]
async fn test_401_on_create_resets_session() {
    let h = signed_in().await;
    h.transport.push(unauthorized());
    let err = h
        .controller
        .create_project("EV market", DocType::Report)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_reset(&h);
    assert_eq!(h.transport.unused_responses(), 0);
}

// ============================================================================
// Replies that outlive their session
// ============================================================================

#[tokio::test]
async fn test_project_list_landing_after_logout_is_dropped() {
    let h = signed_in().await;
    let gate = h.transport.push_gated();

    let load = h.controller.load_projects();
    let logout_then_reply = async {
        h.controller.logout();
        let _ = gate.send(json_response(
            200,
            json!([project_json("p1", "Alice plan", "docx", vec![])]),
        ));
    };
    futures::join!(load, logout_then_reply);

    assert_eq!(h.state(), AppState::default());

    // Next user's own load fails; nothing of the previous user shows up
    h.transport
        .push_json(200, json!({"token": "t2", "email": "bob@b.com"}));
    h.transport
        .push_json(500, json!({"error": "database down"}));
    h.controller.login("bob@b.com", "pw").await.unwrap();

    let state = h.state();
    assert_eq!(state.screen(), Screen::Dashboard);
    assert_eq!(state.session.email(), "bob@b.com");
    assert!(state.projects.is_empty());
}

#[tokio::test]
async fn test_generation_landing_after_401_is_dropped() {
    let h = with_open_project(vec![section_json("Intro", "", false)]).await;
    let slow_generate = h.transport.push_gated();
    h.transport.push(unauthorized());
    h.transport
        .push_json(200, json!({"token": "t2", "email": "a@b.com"}));
    h.transport.push_json(
        200,
        json!([project_json("p1", "EV market", "pptx", vec![section_json("Intro", "", false)])]),
    );

    let generate = h.controller.generate_section("p1", 0);
    let expire_then_relogin = async {
        let refine = h.controller.refine_section("p1", 0, "shorter").await;
        assert!(refine.unwrap_err().is_unauthorized());
        h.controller.login("a@b.com", "x").await.unwrap();
        let _ = slow_generate.send(json_response(200, json!({"content": "stale"})));
    };
    let (generated, ()) = futures::join!(generate, expire_then_relogin);
    generated.unwrap();

    let state = h.state();
    assert_eq!(state.projects[0].sections[0].content, "");
    assert!(!state.projects[0].sections[0].generated);
    assert!(!state.is_loading());
    assert_eq!(h.transport.unused_responses(), 0);
}
