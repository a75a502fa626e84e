use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use datagen::FileConfig;
use datagen_server::server::{
    error::ErrorBody,
    handler::{AppState, GenerateResponse, ProcessResponse, router},
};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tower::ServiceExt;

fn create_test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let files = FileConfig::with_root(dir.path())
        .unwrap()
        .with_max_bytes(4 * 1024);
    (dir, AppState::new(files))
}

fn test_router(state: &AppState) -> Router {
    router(state.clone())
}

async fn get<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (_dir, state) = create_test_state();

    let resp = test_router(&state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn test_generate_then_process() {
    let (dir, state) = create_test_state();

    let (status, generated): (_, GenerateResponse) =
        get(test_router(&state), "/file/generate").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(generated.status_code, 201);
    assert_eq!(generated.message, "File generated successfully");
    assert_eq!(generated.file_path, dir.path().join("data.txt"));
    assert_eq!(std::fs::metadata(&generated.file_path).unwrap().len(), 4 * 1024);

    let (status, processed): (_, ProcessResponse) =
        get(test_router(&state), "/file/process").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(processed.status_code, 200);
    assert_eq!(processed.message, "File processed successfully");
    assert_eq!(
        processed.output_path,
        dir.path().join("output").join("processed.json")
    );

    let json = std::fs::read_to_string(&processed.output_path).unwrap();
    let mapping: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert!(!mapping.is_empty());
}

#[tokio::test]
async fn test_process_without_raw_file_is_not_found() {
    let (_dir, state) = create_test_state();

    let (status, body): (_, ErrorBody) = get(test_router(&state), "/file/process").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.status_code, 404);
    assert!(body.message.starts_with("File does not exist"));
}

#[tokio::test]
async fn test_process_empty_raw_file_is_bad_request() {
    let (_dir, state) = create_test_state();
    std::fs::write(&state.files().raw_path, "  \n").unwrap();

    let (status, body): (_, ErrorBody) = get(test_router(&state), "/file/process").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status_code, 400);
    assert!(body.message.starts_with("File is empty"));
    assert!(!state.files().output_path.exists());
}

#[tokio::test]
async fn test_generate_into_missing_root_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileConfig::with_root(dir.path().join("gone")).unwrap();
    let state = AppState::new(files);

    let (status, body): (_, ErrorBody) = get(test_router(&state), "/file/generate").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        ErrorBody {
            status_code: 500,
            message: "File generation failed".to_string(),
        }
    );
}
