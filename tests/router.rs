use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use clipnote::{
    AppState,
    api::routes::create_router,
    error::{Result, SummarizeError},
    llm::TextGenerator,
};
use serde_json::{Value, json};
use tower::ServiceExt;

const SUMMARY: &str = "# Title\n## Key Points\n- one\n- two\n- three\n## Main Ideas\n1. a\n2. b\n3. c\n\n## Conclusion\nDone.";

struct MockGenerator {
    reply: Option<&'static str>,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(SummarizeError::Api {
                status: 400,
                message: "API key not valid".into(),
            }),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

fn setup(reply: Option<&'static str>) -> (Router, Arc<MockGenerator>) {
    let generator = Arc::new(MockGenerator {
        reply,
        prompts: Mutex::new(Vec::new()),
    });
    let state = AppState::with_generator(generator.clone());
    (create_router(state), generator)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn home_page_starts_without_result() {
    let (router, _) = setup(Some(SUMMARY));
    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("AI-powered Article Summarization"));
    assert!(!html.contains("Here's a brief summary"));
}

#[tokio::test]
async fn form_submit_renders_summary() {
    let (router, generator) = setup(Some(SUMMARY));
    let response = router
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("input=https%3A%2F%2Fexample.com%2Farticle"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("example.com"));
    assert!(html.contains(">Summarize</button>"));

    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("https://example.com/article"));
}

#[tokio::test]
async fn json_submit_returns_markdown_unmodified() {
    let (router, _) = setup(Some(SUMMARY));
    let response = router
        .oneshot(post_json("/api/summarize", json!({"input": "https://example.com/article"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["data"]["summary_markdown"], SUMMARY);
    assert_eq!(payload["data"]["status"], "success");
    assert_eq!(payload["data"]["model"], "mock-model");
    assert_eq!(payload["meta"]["status"], "success");
    assert!(payload["data"]["summary_html"].as_str().unwrap().contains("<h2>Conclusion</h2>"));
}

#[tokio::test]
async fn json_submit_failure_collapses_to_fixed_message() {
    let (router, _) = setup(None);
    let response = router
        .oneshot(post_json("/api/summarize", json!({"input": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        payload["data"]["summary_markdown"],
        "An error occurred while summarizing the article."
    );
    assert_eq!(payload["data"]["status"], "error");
    assert_eq!(payload["meta"]["status"], "error");
    assert!(!payload.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn state_reflects_last_submit() {
    let (router, _) = setup(None);
    router
        .clone()
        .oneshot(post_json("/api/summarize", json!({"input": "some text"})))
        .await
        .unwrap();

    let response = router
        .oneshot(Request::get("/api/state").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["data"]["input"], "some text");
    assert_eq!(payload["data"]["loading"], false);
    assert_eq!(payload["data"]["phase"], "failed");
}

#[tokio::test]
async fn menu_toggle_leaves_controller_alone() {
    let (router, generator) = setup(Some(SUMMARY));
    router
        .clone()
        .oneshot(post_json("/api/summarize", json!({"input": "x"})))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(Request::get("/?menu=open").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("ease-in-out block\""));
    assert!(html.contains("href=\"/\" class=\"text-white"));
    assert!(html.contains("<h1>Title</h1>"));

    let response = router
        .oneshot(Request::get("/api/state").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["data"]["summary"], SUMMARY);
    assert_eq!(payload["data"]["phase"], "succeeded");
    assert_eq!(generator.prompts.lock().unwrap().len(), 1);
}

struct SlowGenerator;

#[async_trait]
impl TextGenerator for SlowGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(SUMMARY.to_string())
    }

    fn model(&self) -> &str {
        "slow-model"
    }
}

#[tokio::test]
async fn disconnected_submit_does_not_leave_page_loading() {
    let router = create_router(AppState::with_generator(Arc::new(SlowGenerator)));

    let submit = router.clone().oneshot(
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("input=https%3A%2F%2Fexample.com%2Farticle"))
            .unwrap(),
    );
    // The client gives up before the generator answers.
    assert!(tokio::time::timeout(Duration::from_millis(20), submit).await.is_err());

    let response = router
        .clone()
        .oneshot(Request::get("/api/state").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["data"]["loading"], false);
    assert_eq!(payload["data"]["phase"], "idle");

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains(">Summarize</button>"));
    assert!(!html.contains("Summarizing..."));
}

#[tokio::test]
async fn health_is_ok() {
    let (router, _) = setup(None);
    let response = router
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
