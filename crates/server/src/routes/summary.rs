use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::{SummaryQuery, SummaryResponse};

#[get("/generate_summary")]
pub async fn generate_summary(
    query: web::Query<SummaryQuery>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let topic = query.topic.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let text = query.text.as_deref().map(str::trim).filter(|s| !s.is_empty());

    // Topic takes precedence when both are supplied
    let output = match (topic, text) {
        (Some(topic), _) => state.pipeline.summarize_topic(topic).await,
        (None, Some(text)) => state.pipeline.summarize_text(text).await,
        (None, None) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "detail": "Either 'topic' or 'text' must be provided."
            })));
        }
    };

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: output.formatted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use keyfacts_common::{AppConfig, KeyfactsError, Result};
    use keyfacts_llm::{ChatRequest, SummaryPipeline, TextGenerator};
    use keyfacts_points::PointBudget;
    use std::sync::{Arc, Mutex};

    struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String>>>,
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, _request: ChatRequest) -> Result<String> {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(KeyfactsError::llm("script exhausted"));
            }
            replies.remove(0)
        }
    }

    fn test_state(replies: Vec<Result<String>>) -> web::Data<Arc<AppState>> {
        let generator = Arc::new(ScriptedGenerator {
            replies: Mutex::new(replies),
        });
        let pipeline = SummaryPipeline::new(generator, "sonar", PointBudget::Fixed(4));
        web::Data::new(Arc::new(AppState {
            config: AppConfig::default(),
            pipeline,
        }))
    }

    #[actix_web::test]
    async fn missing_both_params_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Vec::new()))
                .service(generate_summary),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate_summary").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn blank_params_count_as_missing() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(Vec::new()))
                .service(generate_summary),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/generate_summary?topic=%20&text=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn text_param_returns_formatted_summary() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![Ok("Sales\nRevenue".to_string())]))
                .service(generate_summary),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/generate_summary?text=Sales%20increased.%20Revenue%20grew%20by%2010%25.")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("**Sales**"));
        assert!(summary.contains("\u{2022} Sales increased."));
    }

    #[actix_web::test]
    async fn topic_param_acquires_content() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(vec![
                    Ok("Solar output doubled.\nStorage costs fell.".to_string()),
                    Ok("Output\nStorage".to_string()),
                ]))
                .service(generate_summary),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/generate_summary?topic=solar%20power")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("Solar output doubled."));
    }
}
