use serde_json::json;

use crate::common::{MISSING_ID, TestApp, routes};

#[tokio::test]
async fn video_embeds_only_resolvable_articles_in_reference_order() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;
    let a1 = app.create_article(&ws, &ch, "First", "x").await;
    let a2 = app.create_article(&ws, &ch, "Second", "x").await;

    let res = app
        .post(
            &routes::videos(&ws, &ch),
            &json!({
                "title": "Weekly roundup",
                "article_ids": [a2, MISSING_ID, a1],
            }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    let data = &res.body["data"];
    assert_eq!(data["status"], "DRAFT");
    assert_eq!(data["channel"]["id"], ch);
    let embedded: Vec<_> = data["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].clone())
        .collect();
    assert_eq!(embedded, [json!(a2), json!(a1)]);
    assert_eq!(data["articles"][0]["channel"]["workspace"]["name"], "Acme");

    // The dangling id is still stored.
    let stored = app.read_collection("videos");
    assert_eq!(stored[0]["article_ids"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn deleted_article_disappears_from_the_video() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;
    let a1 = app.create_article(&ws, &ch, "First", "x").await;
    let video = app
        .post(&routes::videos(&ws, &ch), &json!({ "article_ids": [a1] }))
        .await
        .id();

    app.delete(&routes::article(&ws, &ch, &a1)).await;

    let res = app.get(&routes::video(&ws, &ch, &video)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["data"]["articles"], json!([]));
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;

    let res = app
        .post(&routes::videos(&ws, &ch), &json!({ "status": "FINISHED" }))
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn search_covers_url_audio_and_segments() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;
    let path = routes::videos(&ws, &ch);
    app.post(&path, &json!({ "result_video_url": "https://cdn.example.com/final.mp4" }))
        .await;
    app.post(&path, &json!({ "audio_file": "narration.MP3" })).await;
    app.post(&path, &json!({ "video_segments": ["intro.mov", "outro.mov"] }))
        .await;

    for (term, expected) in [("FINAL", 1), ("mp3", 1), ("outro", 1), (".mov", 1), ("zzz", 0)] {
        let res = app.get(&format!("{path}?search={term}")).await;
        assert_eq!(res.total(), expected, "{term}");
    }
}

#[tokio::test]
async fn list_items_are_flat_views() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;
    app.post(
        &routes::videos(&ws, &ch),
        &json!({ "status": "COMPLETED", "audio_file": "a.mp3" }),
    )
    .await;

    let res = app.get(&routes::videos(&ws, &ch)).await;
    assert_eq!(res.total(), 1);
    let item = &res.items()[0];
    assert_eq!(item["status"], "COMPLETED");
    assert_eq!(item["channel_id"], ch);
    assert!(item.get("audio_file").is_none());
    assert!(item.get("articles").is_none());
}

#[tokio::test]
async fn update_resolves_the_replacement() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;
    let a1 = app.create_article(&ws, &ch, "First", "x").await;
    let id = app
        .post(&routes::videos(&ws, &ch), &json!({ "title": "Draft cut" }))
        .await
        .id();

    let res = app
        .put(
            &routes::video(&ws, &ch, &id),
            &json!({ "status": "PROCESSING", "article_ids": [a1] }),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    let data = &res.body["data"];
    assert_eq!(data["status"], "PROCESSING");
    assert!(data["title"].is_null());
    assert_eq!(data["articles"][0]["id"], a1);
}

#[tokio::test]
async fn update_and_delete_unknown_video_are_not_found() {
    let app = TestApp::spawn().await;
    let ws = app.create_workspace("Acme").await;
    let ch = app.create_channel(&ws, "Technology").await;

    let res = app.put(&routes::video(&ws, &ch, MISSING_ID), &json!({})).await;
    assert_eq!(res.status, 404);
    let res = app.delete(&routes::video(&ws, &ch, MISSING_ID)).await;
    assert_eq!(res.status, 404);
}
