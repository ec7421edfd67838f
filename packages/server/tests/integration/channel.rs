use serde_json::json;

use crate::common::{MISSING_ID, TestApp, routes};

#[tokio::test]
async fn created_channel_embeds_its_workspace() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;

    let res = app
        .post(&routes::channels(&ws), &json!({ "category": "Technology" }))
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    let id = res.id();
    assert_eq!(res.body["data"]["category"], "Technology");
    assert_eq!(res.body["data"]["workspace"], json!({ "id": ws, "name": "Acme" }));

    let fetched = app.get(&routes::channel(&ws, &id)).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body, res.body);
    let workspace = app.get(&routes::workspace(&ws)).await;
    assert_eq!(
        fetched.body["data"]["workspace"]["name"],
        workspace.body["data"]["name"]
    );
}

#[tokio::test]
async fn workspace_comes_from_the_path_not_the_body() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;

    let res = app
        .post(
            &routes::channels(&ws),
            &json!({ "category": "Sports", "workspace_id": MISSING_ID }),
        )
        .await;
    assert_eq!(res.status, 201);

    let stored = app.read_collection("channels");
    assert_eq!(stored[0]["workspace_id"], ws);
}

#[tokio::test]
async fn channel_under_unknown_workspace_has_null_workspace() {
    let app = TestApp::spawn().await;
    let res = app
        .post(&routes::channels(MISSING_ID), &json!({ "category": "Orphans" }))
        .await;
    assert_eq!(res.status, 201);
    assert!(res.body["data"]["workspace"].is_null());
}

#[tokio::test]
async fn list_is_scoped_to_the_workspace() {
    let app = TestApp::spawn().await;
    let acme = app.create_workspace("Acme").await;
    let globex = app.create_workspace("Globex").await;
    app.create_channel(&acme, "Tech").await;
    app.create_channel(&globex, "Tech").await;
    app.create_channel(&acme, "Finance").await;

    let res = app.get(&routes::channels(&acme)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.total(), 2);
    for item in res.items() {
        assert_eq!(item["workspace_id"], acme);
    }
    assert_eq!(res.items()[0]["category"], "Tech");
    assert_eq!(res.items()[1]["category"], "Finance");
}

#[tokio::test]
async fn list_total_counts_scope_and_search_before_paging() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    for category in ["World News", "Local news", "Sports", "NEWSROOM"] {
        app.create_channel(&ws, category).await;
    }

    let res = app
        .get(&format!("{}?search=news&size=1&page=2", routes::channels(&ws)))
        .await;
    assert_eq!(res.total(), 3);
    assert_eq!(res.items().len(), 1);
    assert_eq!(res.items()[0]["category"], "Local news");
}

#[tokio::test]
async fn update_forces_path_ids_and_returns_the_new_record() {
    let app = TestApp::spawn().await;
    let acme = app.create_workspace("Acme").await;
    let globex = app.create_workspace("Globex").await;
    let ch = app.create_channel(&acme, "Tech").await;

    let res = app
        .put(
            &routes::channel(&globex, &ch),
            &json!({ "category": "Science", "id": "ignored" }),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["data"]["id"], ch);
    assert_eq!(res.body["data"]["category"], "Science");
    assert_eq!(res.body["data"]["workspace"]["name"], "Globex");
}

#[tokio::test]
async fn update_with_blank_category_is_rejected() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Tech").await;

    let res = app
        .put(&routes::channel(&ws, &ch), &json!({ "category": "" }))
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Tech").await;

    assert_eq!(app.delete(&routes::channel(&ws, &ch)).await.status, 204);
    assert_eq!(app.get(&routes::channel(&ws, &ch)).await.status, 404);
    assert_eq!(app.delete(&routes::channel(&ws, &ch)).await.status, 404);
}

#[tokio::test]
async fn malformed_channel_id_is_a_validation_error() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let res = app.get(&routes::channel(&ws, "42")).await;
    assert_eq!(res.status, 400);
}
