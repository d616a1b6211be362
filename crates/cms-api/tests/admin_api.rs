mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{admin, admin_auth, public, send, test_app};

fn about_us() -> serde_json::Value {
    json!({
        "slug": "about-us",
        "title_mn": "Бидний тухай",
        "title_en": "About Us",
        "content_mn": "Манай компани",
        "content_en": "Our company"
    })
}

#[tokio::test]
async fn test_admin_requires_credentials() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(Request::get("/api/admin/pages").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"Admin\""
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_rejects_wrong_password() {
    let app = test_app();
    let bad = cms_security::BasicCredentials {
        username: "admin".to_string(),
        password: "guess".to_string(),
    };

    let response = app
        .oneshot(
            Request::get("/api/admin/slides")
                .header(header::AUTHORIZATION, bad.to_header_value())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_assets_are_gated() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/admin/index.html", None, false).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_public_path_is_404_without_challenge() {
    let app = test_app();

    for uri in ["/api/does-not-exist", "/favicon.ico"] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}

#[tokio::test]
async fn test_public_routes_never_challenge() {
    let app = test_app();

    let response = app
        .oneshot(Request::get("/api/news").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
}

#[tokio::test]
async fn test_create_page_then_duplicate_slug() {
    let app = test_app();

    let (status, body) = admin(&app, "POST", "/api/admin/pages", Some(about_us())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["slug"], "about-us");
    assert_eq!(body["data"]["is_published"], true);
    assert!(body["data"]["id"].as_str().is_some());

    let (status, body) = admin(&app, "POST", "/api/admin/pages", Some(about_us())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = public(&app, "/api/pages/about-us").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title_en"], "About Us");
}

#[tokio::test]
async fn test_unpublished_page_hidden_publicly() {
    let app = test_app();
    let mut draft = about_us();
    draft["is_published"] = json!(false);

    let (status, body) = admin(&app, "POST", "/api/admin/pages", Some(draft)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = public(&app, "/api/pages/about-us").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = admin(&app, "GET", &format!("/api/admin/pages/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_and_incomplete_bodies_are_400() {
    let app = test_app();

    let request = Request::post("/api/admin/pages")
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = admin(
        &app,
        "POST",
        "/api/admin/pages",
        Some(json!({ "slug": "about-us", "title_en": "About" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let mut bad_slug = about_us();
    bad_slug["slug"] = json!("About Us");
    let (status, _) = admin(&app, "POST", "/api/admin/pages", Some(bad_slug)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_missing_are_404() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = admin(
        &app,
        "PUT",
        &format!("/api/admin/pages/{}", missing),
        Some(about_us()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = admin(&app, "DELETE", &format!("/api/admin/slides/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = admin(&app, "DELETE", "/api/admin/branches/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_slide_crud_round() {
    let app = test_app();
    let draft = json!({
        "title_mn": "Хадгаламж",
        "title_en": "Savings",
        "image_url": "/uploads/savings.jpg",
        "order": 2
    });

    let (status, body) = admin(&app, "POST", "/api/admin/slides", Some(draft.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let mut changed = draft;
    changed["title_en"] = json!("Deposits");
    changed["is_active"] = json!(false);
    let (status, body) =
        admin(&app, "PUT", &format!("/api/admin/slides/{}", id), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["title_en"], "Deposits");

    // Inactive slides stay in the admin list but leave the public site
    let (_, body) = admin(&app, "GET", "/api/admin/slides", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = public(&app, "/api/slides").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, body) = admin(&app, "DELETE", &format!("/api/admin/slides/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let (status, _) = admin(&app, "GET", &format!("/api/admin/slides/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_integer_ids_for_team() {
    let app = test_app();
    let member = json!({
        "name_mn": "Бат",
        "name_en": "Bat",
        "position_mn": "Захирал",
        "position_en": "Director"
    });

    let (_, first) = admin(&app, "POST", "/api/admin/team", Some(member.clone())).await;
    let (_, second) = admin(&app, "POST", "/api/admin/team", Some(member)).await;

    assert_eq!(first["data"]["id"], 1);
    assert_eq!(second["data"]["id"], 2);

    let (status, _) = admin(&app, "GET", "/api/admin/team/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_menu_delete_cascades_to_children() {
    let app = test_app();

    let (_, parent) = admin(
        &app,
        "POST",
        "/api/admin/menu",
        Some(json!({ "title": "Products", "href": "/products" })),
    )
    .await;
    let parent_id = parent["data"]["id"].as_str().unwrap().to_string();

    for (title, order) in [("Loans", 1), ("Savings", 0)] {
        let (status, _) = admin(
            &app,
            "POST",
            "/api/admin/menu",
            Some(json!({
                "title": title,
                "href": format!("/products/{}", title.to_lowercase()),
                "order": order,
                "parentId": parent_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, tree) = admin(&app, "GET", "/api/admin/menu/tree", None).await;
    let children = tree["data"][0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["title"], "Savings");
    assert_eq!(children[0]["depth"], 1);

    let (status, _) =
        admin(&app, "DELETE", &format!("/api/admin/menu/{}", parent_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, items) = admin(&app, "GET", "/api/admin/menu", None).await;
    let remaining = items["data"].as_array().unwrap();
    assert!(remaining
        .iter()
        .all(|item| item["parentId"] != parent_id.as_str()));
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_menu_rejects_unknown_parent() {
    let app = test_app();
    let (status, _) = admin(
        &app,
        "POST",
        "/api/admin/menu",
        Some(json!({
            "title": "Orphan",
            "href": "/orphan",
            "parentId": uuid::Uuid::new_v4()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_stores_image() {
    let app = test_app();
    let boundary = "cms-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"banner.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA\r\n--{b}--\r\n",
        b = boundary
    );

    let request = Request::post("/api/admin/upload")
        .header(header::AUTHORIZATION, admin_auth())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let url = json["data"]["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    // Served back statically without credentials
    let response = app
        .oneshot(Request::get(&url).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&served[..], b"PNGDATA");
}

#[tokio::test]
async fn test_upload_rejects_non_images() {
    let app = test_app();
    let boundary = "cms-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"run.sh\"\r\nContent-Type: text/plain\r\n\r\necho hi\r\n--{b}--\r\n",
        b = boundary
    );

    let request = Request::post("/api/admin/upload")
        .header(header::AUTHORIZATION, admin_auth())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_svg_uploads_are_served_sandboxed() {
    let app = test_app();
    let boundary = "cms-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"logo.svg\"\r\nContent-Type: image/svg+xml\r\n\r\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>\r\n--{b}--\r\n",
        b = boundary
    );

    let request = Request::post("/api/admin/upload")
        .header(header::AUTHORIZATION, admin_auth())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let url = json["data"]["url"].as_str().unwrap().to_string();

    let response = app
        .oneshot(Request::get(&url).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_SECURITY_POLICY).unwrap(),
        "sandbox"
    );
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
}
