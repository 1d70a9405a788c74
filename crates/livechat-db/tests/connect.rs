use std::net::TcpListener;

use livechat_db::{connect, DbError, DbSettings};

/// Settings pointing at a local port with nothing listening on it.
fn unreachable_settings() -> DbSettings {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind probe listener");
    let port = listener
        .local_addr()
        .expect("failed to read probe listener address")
        .port();
    drop(listener);

    DbSettings {
        uri: format!("mongodb://127.0.0.1:{port}"),
        connect_timeout_ms: 500,
        server_selection_timeout_ms: 500,
        ..DbSettings::default()
    }
}

#[tokio::test]
async fn invalid_uri_is_rejected_without_io() {
    let settings = DbSettings {
        uri: "not-a-connection-string".to_string(),
        ..DbSettings::default()
    };

    let err = connect(&settings)
        .await
        .expect_err("a malformed URI must not produce a handle");
    assert!(matches!(err, DbError::InvalidUri(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_deployment_returns_error_to_caller() {
    let err = connect(&unreachable_settings())
        .await
        .expect_err("a closed port must not produce a handle");

    assert!(matches!(err, DbError::Unreachable(_)), "got {err:?}");
    // The rendered chain is what ends up in the error notice.
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
#[ignore = "requires a MongoDB deployment on 127.0.0.1:27017"]
async fn connects_and_pings_local_deployment() {
    let handle = connect(&DbSettings::default())
        .await
        .expect("local deployment should accept the connection");

    handle.ping().await.expect("ping should succeed");
    assert_eq!(handle.database().name(), "live-chat-app");
}
