pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::contact::handlers as contact;
use crate::quiz::handlers as quiz;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Careers
        .route("/api/v1/careers", get(search::handle_search_careers))
        .route("/api/v1/careers/suggest", get(search::handle_suggest))
        .route("/api/v1/careers/:id", get(search::handle_get_career))
        .route("/api/v1/categories", get(catalog::handle_list_categories))
        .route("/api/v1/resources", get(catalog::handle_list_resources))
        // Quiz
        .route("/api/v1/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/v1/quiz/session", post(quiz::handle_start_session))
        .route("/api/v1/quiz/answer", post(quiz::handle_answer))
        .route("/api/v1/quiz/reset", post(quiz::handle_reset))
        .route(
            "/api/v1/quiz/recommendations",
            post(quiz::handle_recommendations),
        )
        // Contact
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;

    fn app() -> Router {
        build_router(AppState::new(Catalog::seed()))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    fn fresh_session() -> Value {
        json!({ "current_index": 0, "answers": [], "is_complete": false })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_without_query_returns_everything() {
        let (status, body) = get_json("/api/v1/careers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careers"].as_array().unwrap().len(), 9);
        assert_eq!(body["featured_id"], "software-engineer");
        assert_eq!(body["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn test_search_with_query() {
        let (status, body) = get_json("/api/v1/careers?q=Python").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<_> = body["careers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["software-engineer", "data-scientist"]);
        assert_eq!(body["featured_id"], Value::Null);
        assert_eq!(body["careers"][0]["salaryRange"], "$95k - $160k");
    }

    #[tokio::test]
    async fn test_suggest_endpoint() {
        let (status, body) = get_json("/api/v1/careers/suggest?q=nurse").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!(["Registered Nurse"]));
    }

    #[tokio::test]
    async fn test_get_career_and_missing() {
        let (status, body) = get_json("/api/v1/careers/civil-engineer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Engineering");

        let (status, body) = get_json("/api/v1/careers/astronaut").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_categories_in_enum_order() {
        let (_, body) = get_json("/api/v1/categories").await;
        assert_eq!(
            body,
            json!(["Technology", "Healthcare", "Creative", "Business", "Education", "Engineering"])
        );
    }

    #[tokio::test]
    async fn test_resources_filter_by_type() {
        let (_, all) = get_json("/api/v1/resources").await;
        assert_eq!(all.as_array().unwrap().len(), 6);

        let (status, guides) = get_json("/api/v1/resources?type=Guide").await;
        assert_eq!(status, StatusCode::OK);
        let guides = guides.as_array().unwrap();
        assert_eq!(guides.len(), 2);
        assert!(guides.iter().all(|r| r["type"] == "Guide"));
    }

    #[tokio::test]
    async fn test_questions_listed() {
        let (_, body) = get_json("/api/v1/quiz/questions").await;
        assert_eq!(body["question_count"], 4);
        assert_eq!(body["questions"][0]["id"], "strength");
    }

    #[tokio::test]
    async fn test_start_session() {
        let (status, body) = post_json("/api/v1/quiz/session", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress_percent"], 0);
        assert_eq!(body["session"], fresh_session());
        assert_eq!(body["current_question"]["id"], "strength");
    }

    #[tokio::test]
    async fn test_full_quiz_flow() {
        let mut session = fresh_session();
        for category in ["Technology", "Technology", "Healthcare", "Technology"] {
            let (status, body) = post_json(
                "/api/v1/quiz/answer",
                json!({ "session": session, "category": category }),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            session = body["session"].clone();
        }
        assert_eq!(session["is_complete"], true);

        let (status, report) = post_json(
            "/api/v1/quiz/recommendations",
            json!({ "session": session }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["top_categories"], json!(["Technology", "Healthcare"]));
        let ids: Vec<_> = report["careers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "software-engineer",
                "data-scientist",
                "registered-nurse",
                "physical-therapist"
            ]
        );
    }

    #[tokio::test]
    async fn test_answer_by_option_index_reports_progress() {
        let (status, body) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": fresh_session(), "option_index": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["answers"], json!(["Creative"]));
        assert_eq!(body["progress_percent"], 25);
        assert_eq!(body["current_question"]["id"], "environment");
    }

    #[tokio::test]
    async fn test_reanswer_without_advancing() {
        let (_, first) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": fresh_session(), "category": "Creative", "advance": false }),
        )
        .await;
        let (status, second) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": first["session"], "category": "Business", "advance": false }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["session"]["answers"], json!(["Business"]));
        assert_eq!(second["session"]["current_index"], 0);
    }

    #[tokio::test]
    async fn test_answer_on_complete_session_conflicts() {
        let done = json!({
            "current_index": 3,
            "answers": ["Technology", "Technology", "Healthcare", "Technology"],
            "is_complete": true
        });
        let (status, body) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": done, "category": "Creative" }),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "QUIZ_COMPLETE");
    }

    #[tokio::test]
    async fn test_answer_requires_exactly_one_choice() {
        let (status, _) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": fresh_session() }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": fresh_session(), "category": "Creative", "option_index": 1 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_answer_option_out_of_range() {
        let (status, body) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": fresh_session(), "option_index": 9 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_session_rejected() {
        let bad = json!({ "current_index": 7, "answers": [], "is_complete": false });
        let (status, _) = post_json(
            "/api/v1/quiz/answer",
            json!({ "session": bad, "category": "Creative" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommendations_before_completion_are_empty() {
        let partial = json!({ "current_index": 1, "answers": ["Technology"], "is_complete": false });
        let (status, body) = post_json(
            "/api/v1/quiz/recommendations",
            json!({ "session": partial }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careers"], json!([]));
        assert_eq!(body["top_categories"], json!([]));
    }

    #[tokio::test]
    async fn test_reset_returns_fresh_session() {
        let done = json!({
            "current_index": 3,
            "answers": ["Business", "Education", "Business", "Engineering"],
            "is_complete": true
        });
        let (status, body) = post_json("/api/v1/quiz/reset", json!({ "session": done })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"], fresh_session());
        assert_eq!(body["progress_percent"], 0);
    }

    #[tokio::test]
    async fn test_contact_validation() {
        let (status, body) = post_json(
            "/api/v1/contact",
            json!({ "name": "Alex Kim", "email": "", "message": " " }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("email, message"), "{message}");

        let (status, body) = post_json(
            "/api/v1/contact",
            json!({ "name": "Alex Kim", "email": "alex@example.com", "message": "Hello" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "received");
    }
}
