//! Integration tests for the share flows over in-process backends.

mod helpers;

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use uuid::Uuid;

use sharedrop_core::config::share::ShareConfig;
use sharedrop_core::error::ErrorKind;
use sharedrop_entity::share::{Share, ShareContent, ShareContentType};
use sharedrop_service::{CreateShareRequest, RequestContext};

fn text(content: &str) -> CreateShareRequest {
    CreateShareRequest::Text {
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_text_share_round_trip_by_code() {
    let app = helpers::TestApp::new().await;
    let ctx = RequestContext::new("203.0.113.5");

    let created = app.service.create_share(&ctx, text("hello")).await.unwrap();
    let code = created.code.clone().expect("code should be registered");
    assert!(helpers::TEST_WORDS.contains(&code.as_str()));

    let share = app.service.get_by_code(&code).await.unwrap();
    assert_eq!(share, created.share);
    assert_eq!(share.content_type, ShareContentType::Text);
    assert_eq!(share.content, "hello");
}

#[tokio::test]
async fn test_code_resolves_only_within_ttl() {
    let app = helpers::TestApp::build(
        ShareConfig {
            code_ttl_seconds: 1,
            ..ShareConfig::default()
        },
        helpers::TEST_WORDS,
    )
    .await;
    let ctx = RequestContext::new("203.0.113.5");
    let created = app.service.create_share(&ctx, text("brief")).await.unwrap();
    let code = created.code.unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(app.service.get_by_code(&code).await.unwrap().id, created.share.id);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(app.service.get_by_code(&code).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_never_issued_code_is_not_found() {
    let app = helpers::TestApp::new().await;
    let err = app.service.get_by_code("zeppelin").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_file_share_signs_distinct_urls() {
    let app = helpers::TestApp::new().await;
    let ctx = RequestContext::new("203.0.113.5");

    let created = app
        .service
        .create_share(
            &ctx,
            CreateShareRequest::File {
                file_name: "report.pdf".to_string(),
            },
        )
        .await
        .unwrap();

    let key = created.share.content.clone();
    assert!(created.share.is_file());
    assert!(key.starts_with("report-"), "{key}");
    assert!(key.ends_with(".pdf"), "{key}");
    assert_ne!(key, "report.pdf");

    let upload = created.upload_url.expect("file shares carry an upload URL");
    assert!(upload.contains(&key), "{upload}");
    assert!(upload.contains("X-Amz-Expires=300"), "{upload}");

    let ShareContent::File { url: download } = app.service.get_content(created.share.id).await.unwrap()
    else {
        panic!("expected a download URL");
    };
    assert!(download.contains(&key), "{download}");
    assert_ne!(download, upload);
}

#[tokio::test]
async fn test_file_without_extension_gets_plain_key() {
    let app = helpers::TestApp::new().await;
    let ctx = RequestContext::new("203.0.113.5");

    let created = app
        .service
        .create_share(
            &ctx,
            CreateShareRequest::File {
                file_name: "Makefile".to_string(),
            },
        )
        .await
        .unwrap();

    let key = &created.share.content;
    assert!(key.starts_with("Makefile-"), "{key}");
    assert!(!key.contains('.'), "{key}");
}

#[tokio::test]
async fn test_recall_returns_newest_within_window() {
    let app = helpers::TestApp::new().await;
    let ctx = RequestContext::new("198.51.100.7");

    for body in ["one", "two"] {
        app.service.create_share(&ctx, text(body)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let newest = app.service.create_share(&ctx, text("three")).await.unwrap();

    let recalled = app.service.recall_latest(&ctx).await.unwrap();
    assert_eq!(recalled.id, newest.share.id);

    let stranger = RequestContext::new("198.51.100.99");
    assert!(app.service.recall_latest(&stranger).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_recall_skips_stale_shares() {
    let app = helpers::TestApp::new().await;
    let origin = "198.51.100.7";

    app.store
        .import(Share {
            id: Uuid::new_v4(),
            origin_address: origin.to_string(),
            content_type: ShareContentType::Text,
            content: "old news".to_string(),
            created_at: Utc::now() - TimeDelta::seconds(181),
        })
        .await;

    let err = app
        .service
        .recall_latest(&RequestContext::new(origin))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_purge_counts_then_empties() {
    let app = helpers::TestApp::new().await;
    let ctx = RequestContext::new("198.51.100.7");

    for body in ["a", "b", "c"] {
        app.service.create_share(&ctx, text(body)).await.unwrap();
    }

    assert_eq!(app.service.purge(&ctx).await.unwrap(), 3);
    assert_eq!(app.service.purge(&ctx).await.unwrap(), 0);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_colliding_code_points_at_newest_share() {
    let app = helpers::TestApp::build(ShareConfig::default(), &["solo"]).await;
    let ctx = RequestContext::new("203.0.113.5");

    let first = app.service.create_share(&ctx, text("first")).await.unwrap();
    let second = app.service.create_share(&ctx, text("second")).await.unwrap();
    assert_eq!(first.code.as_deref(), Some("solo"));
    assert_eq!(second.code.as_deref(), Some("solo"));

    let share = app.service.get_by_code("solo").await.unwrap();
    assert_eq!(share.id, second.share.id);

    // The first share is still reachable by id.
    assert!(app.service.get_content(first.share.id).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_creates_are_all_stored() {
    let app = helpers::TestApp::new().await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = app.service.clone();
        handles.push(tokio::spawn(async move {
            let ctx = RequestContext::new("203.0.113.50");
            service
                .create_share(&ctx, text(&format!("note {i}")))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(app.store.len().await, 16);
    let ctx = RequestContext::new("203.0.113.50");
    assert_eq!(app.service.purge(&ctx).await.unwrap(), 16);
}
