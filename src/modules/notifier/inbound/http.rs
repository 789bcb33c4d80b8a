use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};
use std::path::Path;

use crate::modules::notifier::notify::notify;
use crate::shared::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SendTelegramBody {
    pub xlsx_filename: Option<String>,
    pub docx_filename: Option<String>,
}

pub async fn send_telegram(
    State(state): State<AppState>,
    body: Result<Json<SendTelegramBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::Validation("Missing xlsx_filename or docx_filename".into()))?;

    let (Some(xlsx_filename), Some(docx_filename)) = (
        body.xlsx_filename.filter(|name| !name.is_empty()),
        body.docx_filename.filter(|name| !name.is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "Missing xlsx_filename or docx_filename".into(),
        ));
    };

    let chat = state.chat.as_ref().ok_or(ApiError::Config)?;
    let delivered = notify(
        chat.as_ref(),
        Path::new(&xlsx_filename),
        Path::new(&docx_filename),
    )
    .await?;

    Ok(Json(json!({
        "result": format!("{delivered} file(s) sent to Telegram.")
    })))
}

#[cfg(test)]
mod notifier_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::notifier::test_support::RecordingChat;
    use crate::shell::state::AppState;

    use super::send_telegram;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/send_telegram", post(send_telegram))
            .with_state(state)
    }

    fn state_with_chat() -> AppState {
        AppState {
            chat: Some(Arc::new(RecordingChat::accepting())),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_500_when_credentials_are_not_configured() {
        let body = json!({ "xlsx_filename": "ts.xlsx", "docx_filename": "invoice.docx" });

        let response = app(AppState { chat: None })
            .oneshot(
                Request::post("/send_telegram")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Missing TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID");
    }

    #[tokio::test]
    async fn it_should_return_400_when_no_attachment_exists() {
        let body = json!({ "xlsx_filename": "missing.xlsx", "docx_filename": "missing.docx" });

        let response = app(state_with_chat())
            .oneshot(
                Request::post("/send_telegram")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No files sent.");
    }

    #[tokio::test]
    async fn it_should_return_400_when_a_filename_is_missing() {
        let body = json!({ "xlsx_filename": "ts.xlsx" });

        let response = app(state_with_chat())
            .oneshot(
                Request::post("/send_telegram")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_report_the_count_of_delivered_files() {
        let dir = tempfile::tempdir().unwrap();
        let xlsx = dir.path().join("ts.xlsx");
        let docx = dir.path().join("invoice.docx");
        std::fs::write(&xlsx, b"sheet").unwrap();
        std::fs::write(&docx, b"doc").unwrap();
        let body = json!({
            "xlsx_filename": xlsx.display().to_string(),
            "docx_filename": docx.display().to_string(),
        });

        let response = app(state_with_chat())
            .oneshot(
                Request::post("/send_telegram")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"], "2 file(s) sent to Telegram.");
    }
}
