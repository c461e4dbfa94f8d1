mod common;

use axum_test::TestServer;
use common::memory_logger;
use request_logger::routes::app_router;
use std::path::Path;

#[tokio::test]
async fn test_file_route_serves_and_logs() {
    let (logger, sink) = memory_logger();
    let app = app_router(Path::new("src"), logger);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/file/lib.rs").await;

    response.assert_status_ok();
    assert!(response.text().contains("pub mod logging;"));

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["url"], "/file/lib.rs");
    assert_eq!(records[0]["method"], "GET");
    assert_eq!(records[0]["status"], 200);
}

#[tokio::test]
async fn test_missing_file_logs_not_found() {
    let (logger, sink) = memory_logger();
    let app = app_router(Path::new("src"), logger);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/file/does-not-exist.txt").await;

    response.assert_status_not_found();
    assert_eq!(sink.records()[0]["status"], 404);
}

#[tokio::test]
async fn test_unrouted_path_is_still_logged() {
    let (logger, sink) = memory_logger();
    let app = app_router(Path::new("src"), logger);

    let server = TestServer::new(app).unwrap();

    server.get("/elsewhere").expect_failure().await;

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["url"], "/elsewhere");
    assert_eq!(records[0]["status"], 404);
    assert_eq!(records[0]["referrer"], "N/A");
}
