use serde_json::json;

use crate::common::{MISSING_ID, TestApp, routes};

#[tokio::test]
async fn articles_are_listed_across_workspaces() {
    let app = TestApp::spawn().await;
    let acme = app.create_workspace("Acme").await;
    let globex = app.create_workspace("Globex").await;
    let c1 = app.create_channel(&acme, "Tech").await;
    let c2 = app.create_channel(&globex, "Sports").await;
    app.create_article(&acme, &c1, "One", "x").await;
    app.create_article(&globex, &c2, "Two", "x").await;
    app.create_article(&acme, &c1, "Three", "x").await;

    let res = app.get(routes::NEWS_ARTICLES).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.total(), 3);
    let titles: Vec<_> = res.items().iter().map(|a| a["title"].clone()).collect();
    assert_eq!(titles, [json!("One"), json!("Two"), json!("Three")]);

    let res = app
        .get(&format!("{}?size=2&page=2", routes::NEWS_ARTICLES))
        .await;
    assert_eq!(res.items().len(), 1);
    assert_eq!(res.total(), 3);
}

#[tokio::test]
async fn article_by_id_matches_the_nested_route() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Tech").await;
    let id = app.create_article(&ws, &ch, "One", "x").await;

    let flat = app.get(&routes::news_article(&id)).await;
    let nested = app.get(&routes::article(&ws, &ch, &id)).await;
    assert_eq!(flat.status, 200);
    assert_eq!(flat.body, nested.body);

    let res = app.get(&routes::news_article(MISSING_ID)).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn videos_are_listed_and_resolved_across_channels() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let c1 = app.create_channel(&ws, "Tech").await;
    let c2 = app.create_channel(&ws, "Sports").await;
    let article = app.create_article(&ws, &c1, "One", "x").await;
    app.post(&routes::videos(&ws, &c1), &json!({ "audio_file": "a.mp3" }))
        .await;
    let id = app
        .post(
            &routes::videos(&ws, &c2),
            &json!({ "audio_file": "b.mp3", "article_ids": [article] }),
        )
        .await
        .id();

    let res = app.get(routes::NEWS_VIDEOS).await;
    assert_eq!(res.total(), 2);

    let res = app.get(&format!("{}?search=B.MP3", routes::NEWS_VIDEOS)).await;
    assert_eq!(res.total(), 1);
    assert_eq!(res.items()[0]["id"], id);

    let res = app.get(&routes::news_video(&id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["channel"]["category"], "Sports");
    assert_eq!(res.body["data"]["articles"][0]["channel"]["category"], "Tech");
}

#[tokio::test]
async fn malformed_ids_and_paging_are_validation_errors() {
    let app = TestApp::spawn().await;
    assert_eq!(app.get(&routes::news_video("abc")).await.status, 400);
    assert_eq!(
        app.get(&format!("{}?page=0", routes::NEWS_VIDEOS)).await.status,
        400
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::spawn().await;
    let res = app.get("/api-docs/openapi.json").await;
    assert_eq!(res.status, 200);
    assert!(res.body["paths"]
        .as_object()
        .unwrap()
        .keys()
        .any(|p| p.starts_with("/api/v1/news/videos")));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = TestApp::spawn().await;
    let res = app
        .client
        .get(format!("http://{}{}", app.addr, routes::NEWS_ARTICLES))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
