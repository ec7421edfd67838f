use serde_json::json;

use crate::common::{MISSING_ID, TestApp, routes};

mod workspace_creation {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_the_same_workspace() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::WORKSPACES, &json!({ "name": "Acme" })).await;
        assert_eq!(res.status, 201, "{}", res.text);
        let id = res.id();
        assert_eq!(id, "00000000-0000-4000-8000-000000000001");

        let res = app.get(&routes::workspace(&id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!({
                "data": {
                    "id": id,
                    "name": "Acme",
                    "created_at": null,
                    "updated_at": null,
                }
            })
        );
    }

    #[tokio::test]
    async fn client_supplied_id_is_ignored() {
        let app = TestApp::spawn().await;
        let res = app
            .post(routes::WORKSPACES, &json!({ "id": "mine", "name": "Acme" }))
            .await;
        assert_eq!(res.status, 201);
        assert_ne!(res.id(), "mine");
    }

    #[tokio::test]
    async fn blank_or_missing_name_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::WORKSPACES, &json!({ "name": "   " })).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app.post(routes::WORKSPACES, &json!({})).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn timestamps_with_offsets_are_stored_as_utc() {
        let app = TestApp::spawn().await;
        let res = app
            .post(
                routes::WORKSPACES,
                &json!({ "name": "Acme", "created_at": "2024-05-01T12:00:00+02:00" }),
            )
            .await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["data"]["created_at"], "2024-05-01T10:00:00");
        assert!(res.body["data"]["updated_at"].is_null());
    }

    #[tokio::test]
    async fn collection_file_keeps_non_ascii_text() {
        let app = TestApp::spawn().await;
        app.create_workspace("Café Ñews").await;

        let raw = std::fs::read_to_string(app.collection_file("workspaces")).unwrap();
        assert!(raw.contains("Café Ñews"));
        assert!(raw.contains("\n    {"), "expected four-space indentation: {raw}");
    }
}

mod workspace_listing {
    use super::*;

    #[tokio::test]
    async fn missing_collection_lists_as_empty() {
        let app = TestApp::spawn().await;
        let res = app.get(routes::WORKSPACES).await;
        assert_eq!(res.status, 200);
        assert!(res.items().is_empty());
        assert_eq!(res.total(), 0);
    }

    #[tokio::test]
    async fn malformed_collection_lists_as_empty() {
        let app = TestApp::spawn().await;
        app.write_collection("workspaces", "{ not json");
        let res = app.get(routes::WORKSPACES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.total(), 0);
    }

    #[tokio::test]
    async fn one_undecodable_record_does_not_wipe_the_collection() {
        let app = TestApp::spawn().await;
        app.write_collection(
            "workspaces",
            r#"[{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}, {"id": "c"}]"#,
        );

        let res = app.get(routes::WORKSPACES).await;
        assert_eq!(res.total(), 2);

        let res = app.post(routes::WORKSPACES, &json!({ "name": "Gamma" })).await;
        assert_eq!(res.status, 201, "{}", res.text);

        let stored = app.read_collection("workspaces");
        let names: Vec<_> = stored
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["name"].clone())
            .collect();
        assert_eq!(names, [json!("Alpha"), json!("Beta"), json!("Gamma")]);
    }

    #[tokio::test]
    async fn pages_follow_insertion_order_and_report_total() {
        let app = TestApp::spawn().await;
        for name in ["Zeta", "Alpha", "Mid"] {
            app.create_workspace(name).await;
        }

        let res = app
            .get(&format!("{}?page=1&size=2", routes::WORKSPACES))
            .await;
        assert_eq!(res.status, 200);
        let names: Vec<_> = res.items().iter().map(|w| w["name"].clone()).collect();
        assert_eq!(names, [json!("Zeta"), json!("Alpha")]);
        assert_eq!(res.total(), 3);

        let res = app
            .get(&format!("{}?page=2&size=2", routes::WORKSPACES))
            .await;
        assert_eq!(res.items().len(), 1);
        assert_eq!(res.items()[0]["name"], "Mid");
        assert_eq!(res.total(), 3);

        let res = app
            .get(&format!("{}?page=9&size=2", routes::WORKSPACES))
            .await;
        assert_eq!(res.status, 200);
        assert!(res.items().is_empty());
        assert_eq!(res.total(), 3);
    }

    #[tokio::test]
    async fn search_matches_name_case_insensitively() {
        let app = TestApp::spawn().await;
        app.create_workspace("Acme Media").await;
        app.create_workspace("Globex").await;

        let res = app.get(&format!("{}?search=MEDIA", routes::WORKSPACES)).await;
        assert_eq!(res.total(), 1);
        assert_eq!(res.items()[0]["name"], "Acme Media");
    }

    #[tokio::test]
    async fn invalid_paging_is_rejected() {
        let app = TestApp::spawn().await;
        for query in ["page=0", "size=0", "page=abc", "size=-1"] {
            let res = app.get(&format!("{}?{query}", routes::WORKSPACES)).await;
            assert_eq!(res.status, 400, "{query}");
            assert_eq!(res.body["code"], "VALIDATION_ERROR", "{query}");
        }
    }
}

mod workspace_lookup {
    use super::*;

    #[tokio::test]
    async fn unknown_id_is_not_found_without_data() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::workspace(MISSING_ID)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert!(res.body.get("data").is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::workspace("not-a-uuid")).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod workspace_update {
    use super::*;

    #[tokio::test]
    async fn put_replaces_every_field() {
        let app = TestApp::spawn().await;
        let res = app
            .post(
                routes::WORKSPACES,
                &json!({ "name": "Acme", "created_at": "2024-01-01T00:00:00" }),
            )
            .await;
        let id = res.id();

        let res = app
            .put(&routes::workspace(&id), &json!({ "id": "other", "name": "Acme 2" }))
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["data"]["id"], id);
        assert_eq!(res.body["data"]["name"], "Acme 2");
        assert!(res.body["data"]["created_at"].is_null());

        let res = app.get(&routes::workspace(&id)).await;
        assert_eq!(res.body["data"]["name"], "Acme 2");
    }

    #[tokio::test]
    async fn put_on_unknown_id_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app
            .put(&routes::workspace(MISSING_ID), &json!({ "name": "Acme" }))
            .await;
        assert_eq!(res.status, 404);
        assert!(!app.collection_file("workspaces").exists());
    }
}

mod workspace_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let app = TestApp::spawn().await;
        let keep = app.create_workspace("Keep").await;
        let drop = app.create_workspace("Drop").await;

        let res = app.delete(&routes::workspace(&drop)).await;
        assert_eq!(res.status, 204);
        assert!(res.text.is_empty());

        let stored = app.read_collection("workspaces");
        let ids: Vec<_> = stored.as_array().unwrap().iter().map(|w| w["id"].clone()).collect();
        assert_eq!(ids, [json!(keep)]);

        let res = app.get(&routes::workspace(&drop)).await;
        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn deleting_unknown_id_leaves_collection_unchanged() {
        let app = TestApp::spawn().await;
        app.create_workspace("Acme").await;
        let before = app.read_collection("workspaces");

        let res = app.delete(&routes::workspace(MISSING_ID)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(app.read_collection("workspaces"), before);
    }

    #[tokio::test]
    async fn channels_survive_workspace_deletion() {
        let app = TestApp::spawn().await;
        let ws = app.create_workspace("Acme").await;
        let ch = app.create_channel(&ws, "Tech").await;

        app.delete(&routes::workspace(&ws)).await;

        let res = app.get(&routes::channel(&ws, &ch)).await;
        assert_eq!(res.status, 200);
        assert!(res.body["data"]["workspace"].is_null());
    }
}
