mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{FRONTEND, spawn_app};
use serde_json::json;
use tower::ServiceExt;

const STALE: &str = "2000-01-01 00:00:00";

#[tokio::test]
async fn health_returns_static_ok() {
    let app = spawn_app().await;
    let (status, body) = app.call("GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "message": "Server is running" }));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = spawn_app().await;
    let (status, body) = app.call("GET", "/api/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn login_with_default_password_then_create_and_list_skill() {
    let app = spawn_app().await;
    let token = app.login().await;

    let (status, body) = app
        .call(
            "POST",
            "/api/skills",
            Some(&token),
            Some(json!({ "name": "Go", "level": 80, "category": "Backend" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["id"].as_i64().is_some());

    let (status, body) = app.call("GET", "/api/skills", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let skills = body.as_array().unwrap();
    assert!(skills.iter().any(|s| s["name"] == "Go"
        && s["level"] == 80
        && s["category"] == "Backend"));
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = spawn_app().await;
    let (status, body) = app
        .call(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "password": "letmein" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid password" }));
}

#[tokio::test]
async fn mutations_without_token_are_401_and_leave_storage_untouched() {
    let app = spawn_app().await;
    let cases = [
        ("POST", "/api/personal"),
        ("PUT", "/api/personal/1"),
        ("POST", "/api/projects"),
        ("PUT", "/api/projects/p1"),
        ("DELETE", "/api/projects/p1"),
        ("POST", "/api/skills"),
        ("PUT", "/api/skills/1"),
        ("DELETE", "/api/skills/1"),
        ("POST", "/api/experience"),
        ("PUT", "/api/experience/1"),
        ("DELETE", "/api/experience/1"),
        ("PUT", "/api/social/github"),
    ];
    let payload = json!({
        "id": "p1", "title": "t", "description": "d",
        "name": "n", "category": "c", "email": "e",
        "company": "co", "period": "2020", "url": "https://x"
    });

    for (method, uri) in cases {
        let (status, body) = app.call(method, uri, None, Some(payload.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body, json!({ "error": "No token provided" }), "{method} {uri}");
    }

    for table in ["personal_info", "projects", "skills", "experience", "social_links"] {
        assert_eq!(app.storage.count_rows(table).await.unwrap(), 0, "{table}");
    }
}

#[tokio::test]
async fn forged_token_is_invalid() {
    let app = spawn_app().await;
    let forged = portfolio_api::auth::TokenService::new("some-other-secret")
        .issue(1)
        .unwrap();
    let (status, body) = app
        .call("DELETE", "/api/skills/1", Some(&forged), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn project_with_empty_tags_lists_as_empty_array() {
    let app = spawn_app().await;
    let token = app.login().await;

    let (status, body) = app
        .call(
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({
                "id": "folio", "title": "Folio", "description": "This site", "tags": []
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": "folio" }));

    let (_, body) = app.call("GET", "/api/projects", None, None).await;
    assert_eq!(body[0]["tags"], json!([]));

    let (status, body) = app.call("GET", "/api/projects/folio", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Folio");
    assert_eq!(body["tags"], json!([]));
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn project_missing_fields_is_400() {
    let app = spawn_app().await;
    let token = app.login().await;
    let (status, body) = app
        .call(
            "POST",
            "/api/projects",
            Some(&token),
            Some(json!({ "title": "No id" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing required fields: id, title, description" })
    );
}

#[tokio::test]
async fn unknown_project_is_404_on_get_update_and_delete() {
    let app = spawn_app().await;
    let token = app.login().await;
    app.call(
        "POST",
        "/api/projects",
        Some(&token),
        Some(json!({ "id": "a", "title": "A", "description": "first" })),
    )
    .await;

    let (status, body) = app.call("GET", "/api/projects/ghost", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Project not found" }));

    let (status, _) = app
        .call(
            "PUT",
            "/api/projects/ghost",
            Some(&token),
            Some(json!({ "title": "G", "description": "g", "tags": ["x"] })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.storage.count_rows("projects").await.unwrap(), 1);

    let (status, _) = app
        .call("DELETE", "/api/projects/ghost", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_update_overwrites_every_column() {
    let app = spawn_app().await;
    let token = app.login().await;
    app.call(
        "POST",
        "/api/projects",
        Some(&token),
        Some(json!({
            "id": "p", "title": "Old", "description": "old",
            "tags": ["a"], "liveUrl": "https://live"
        })),
    )
    .await;

    // Backdate the row so a refreshed updated_at is distinguishable.
    sqlx::query("UPDATE projects SET created_at = ?1, updated_at = ?1 WHERE id = 'p'")
        .bind(STALE)
        .execute(app.storage.pool())
        .await
        .unwrap();

    let (status, body) = app
        .call(
            "PUT",
            "/api/projects/p",
            Some(&token),
            Some(json!({ "title": "New", "description": "new", "tags": ["b", "c"] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "changes": 1 }));

    let (_, body) = app.call("GET", "/api/projects/p", None, None).await;
    assert_eq!(body["title"], "New");
    assert_eq!(body["tags"], json!(["b", "c"]));
    assert_eq!(body["liveUrl"], json!(null));
    assert_eq!(body["created_at"], STALE);
    let updated = body["updated_at"].as_str().unwrap();
    assert!(updated > STALE, "updated_at not refreshed: {updated}");
}

#[tokio::test]
async fn create_leaves_updated_at_at_its_default() {
    let app = spawn_app().await;
    let token = app.login().await;
    app.call(
        "POST",
        "/api/skills",
        Some(&token),
        Some(json!({ "name": "SQL", "category": "Backend" })),
    )
    .await;

    let (_, body) = app.call("GET", "/api/skills", None, None).await;
    let created = body[0]["created_at"].as_str().unwrap();
    // SQLite CURRENT_TIMESTAMP text form: "YYYY-MM-DD HH:MM:SS"
    assert_eq!(created.len(), 19);
    assert_eq!(&created[10..11], " ");
    assert_eq!(body[0]["updated_at"], created);
}

#[tokio::test]
async fn duplicate_project_id_is_500_with_raw_message() {
    let app = spawn_app().await;
    let token = app.login().await;
    let payload = json!({ "id": "dup", "title": "T", "description": "D" });
    let (status, _) = app
        .call("POST", "/api/projects", Some(&token), Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .call("POST", "/api/projects", Some(&token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("UNIQUE"));
}

#[tokio::test]
async fn deleting_a_skill_twice_is_success_then_404() {
    let app = spawn_app().await;
    let token = app.login().await;
    let (_, body) = app
        .call(
            "POST",
            "/api/skills",
            Some(&token),
            Some(json!({ "name": "Rust", "level": 90, "category": "Backend" })),
        )
        .await;
    let uri = format!("/api/skills/{}", body["id"]);

    let (status, body) = app.call("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Skill deleted" }));

    let (status, body) = app.call("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Skill not found" }));
}

#[tokio::test]
async fn skills_are_listed_by_category_then_name() {
    let app = spawn_app().await;
    let token = app.login().await;
    for (name, category) in [("Zig", "Backend"), ("CSS", "Frontend"), ("Axum", "Backend")] {
        app.call(
            "POST",
            "/api/skills",
            Some(&token),
            Some(json!({ "name": name, "category": category })),
        )
        .await;
    }
    let (_, body) = app.call("GET", "/api/skills", None, None).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Axum", "Zig", "CSS"]);
    assert_eq!(body[0]["level"], 0);
}

#[tokio::test]
async fn non_numeric_skill_id_is_json_400() {
    let app = spawn_app().await;
    let token = app.login().await;
    let (status, body) = app
        .call("DELETE", "/api/skills/abc", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn experience_is_newest_first_and_validated() {
    let app = spawn_app().await;
    let token = app.login().await;

    let (status, body) = app
        .call(
            "POST",
            "/api/experience",
            Some(&token),
            Some(json!({ "title": "Dev", "company": "Acme" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Missing required fields: title, company, period" })
    );

    for (title, period) in [("Junior", "2016 - 2018"), ("Senior", "2021 - Present")] {
        let (status, _) = app
            .call(
                "POST",
                "/api/experience",
                Some(&token),
                Some(json!({ "title": title, "company": "Acme", "period": period })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.call("GET", "/api/experience", None, None).await;
    assert_eq!(body[0]["title"], "Senior");
    assert_eq!(body[1]["title"], "Junior");

    let id = body[1]["id"].as_i64().unwrap();
    let (status, body) = app
        .call(
            "PUT",
            &format!("/api/experience/{id}"),
            Some(&token),
            Some(json!({
                "title": "Junior Dev", "company": "Acme",
                "period": "2016 - 2018", "description": "first job"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changes"], 1);

    let (status, body) = app
        .call("DELETE", "/api/experience/999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Experience not found" }));
}

#[tokio::test]
async fn social_put_twice_upserts_one_row() {
    let app = spawn_app().await;
    let token = app.login().await;

    for url in ["https://github.com/old", "https://github.com/new"] {
        let (status, body) = app
            .call(
                "PUT",
                "/api/social/github",
                Some(&token),
                Some(json!({ "url": url })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }
    app.call(
        "PUT",
        "/api/social/linkedin",
        Some(&token),
        Some(json!({ "url": "https://linkedin.com/in/me" })),
    )
    .await;

    assert_eq!(app.storage.count_rows("social_links").await.unwrap(), 2);
    let (_, body) = app.call("GET", "/api/social", None, None).await;
    assert_eq!(
        body,
        json!({
            "github": "https://github.com/new",
            "linkedin": "https://linkedin.com/in/me"
        })
    );
}

#[tokio::test]
async fn personal_returns_latest_row_or_empty_object() {
    let app = spawn_app().await;
    let (status, body) = app.call("GET", "/api/personal", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let token = app.login().await;
    for name in ["First Name", "Second Name"] {
        let (status, _) = app
            .call(
                "POST",
                "/api/personal",
                Some(&token),
                Some(json!({
                    "name": name, "title": "Engineer",
                    "email": "me@example.com", "resumeUrl": "/cv.pdf"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.call("GET", "/api/personal", None, None).await;
    assert_eq!(body["name"], "Second Name");
    assert_eq!(body["resumeUrl"], "/cv.pdf");

    let id = body["id"].as_i64().unwrap();
    let (status, body) = app
        .call(
            "PUT",
            &format!("/api/personal/{id}"),
            Some(&token),
            Some(json!({ "name": "Renamed", "title": "Engineer", "email": "me@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "changes": 1 }));

    let (status, _) = app
        .call(
            "PUT",
            "/api/personal/999",
            Some(&token),
            Some(json!({ "name": "X", "title": "Y", "email": "z" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let app = spawn_app().await;
    let token = app.login().await;
    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/skills")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_allows_configured_origin_with_credentials() {
    let app = spawn_app().await;
    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/skills")
                .header(header::ORIGIN, FRONTEND)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        FRONTEND
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
