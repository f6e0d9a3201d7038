use actix_web::{
    HttpResponse, Responder,
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    web::{self, Data, Json},
};
use arena_ai::TacticalPolicy;
use arena_core::{ArenaSnapshot, ArenaUpdate};

use crate::response::{json_error_with_code, plain_text};

pub(crate) const GREETING: &str = "Let the battle begin!";

/// Registers the arena routes. Any path is accepted, matching how the arena
/// addresses players by their base URL.
pub(crate) fn configure(cfg: &mut web::ServiceConfig, policy: Data<TacticalPolicy>, max_body_bytes: usize) {
    cfg.app_data(policy)
        .app_data(
            web::JsonConfig::default()
                .limit(max_body_bytes)
                .error_handler(json_error),
        )
        .route("/{tail:.*}", web::get().to(greet))
        .route("/{tail:.*}", web::post().to(decide));
}

pub(crate) async fn greet() -> impl Responder {
    plain_text(GREETING)
}

pub(crate) async fn decide(policy: Data<TacticalPolicy>, update: Json<ArenaUpdate>) -> HttpResponse {
    let snapshot = match ArenaSnapshot::try_from(update.into_inner()) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(code = err.error_code(), "rejected arena update: {err}");
            return json_error_with_code(
                StatusCode::BAD_REQUEST,
                err.to_string(),
                Some(err.error_code()),
            );
        }
    };

    let decision = policy.decide(&snapshot);
    plain_text(decision.action.symbol())
}

fn json_error(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    let (status, code) = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
        }
        JsonPayloadError::ContentType => (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type"),
        _ => (StatusCode::BAD_REQUEST, "invalid_json"),
    };
    tracing::warn!(code, "undecodable arena update: {err}");
    let response = json_error_with_code(status, err.to_string(), Some(code));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::header, test as awtest};
    use serde_json::{Value, json};

    use crate::config::DEFAULT_MAX_BODY_BYTES;

    fn update(me: Value, rival: Value) -> Value {
        json!({
            "_links": { "self": { "href": "https://me.example" } },
            "arena": {
                "dims": [10, 10],
                "state": {
                    "https://me.example": me,
                    "https://rival.example": rival,
                }
            }
        })
    }

    macro_rules! app {
        () => {
            awtest::init_service(App::new().configure(|cfg| {
                configure(
                    cfg,
                    Data::new(TacticalPolicy::default()),
                    DEFAULT_MAX_BODY_BYTES,
                )
            }))
            .await
        };
    }

    #[actix_web::test]
    async fn get_returns_greeting() {
        let app = app!();
        let req = awtest::TestRequest::get().uri("/").to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = awtest::read_body(resp).await;
        assert_eq!(body, GREETING.as_bytes());
    }

    #[actix_web::test]
    async fn post_returns_single_action_symbol() {
        let app = app!();
        let body = update(
            json!({ "x": 5, "y": 5, "direction": "N", "score": 0, "wasHit": false }),
            json!({ "x": 5, "y": 4, "direction": "S", "score": 3, "wasHit": false }),
        );
        let req = awtest::TestRequest::post()
            .uri("/")
            .set_json(&body)
            .to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/plain; charset=utf-8")
        );
        let body = awtest::read_body(resp).await;
        assert_eq!(body, "T".as_bytes());
    }

    #[actix_web::test]
    async fn post_accepts_any_path() {
        let app = app!();
        let body = update(
            json!({ "x": 5, "y": 5, "direction": "N", "score": 0, "wasHit": false }),
            json!({ "x": 0, "y": 0, "direction": "E", "score": 0, "wasHit": false }),
        );
        let req = awtest::TestRequest::post()
            .uri("/some/player/path")
            .set_json(&body)
            .to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = awtest::read_body(resp).await;
        assert_eq!(body, "F".as_bytes());
    }

    #[actix_web::test]
    async fn missing_self_is_rejected() {
        let app = app!();
        let mut body = update(
            json!({ "x": 5, "y": 5, "direction": "N", "score": 0, "wasHit": false }),
            json!({ "x": 5, "y": 4, "direction": "S", "score": 0, "wasHit": false }),
        );
        body["_links"]["self"]["href"] = json!("https://stranger.example");
        let req = awtest::TestRequest::post()
            .uri("/")
            .set_json(&body)
            .to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = awtest::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error_code"], json!("missing_self"));
    }

    #[actix_web::test]
    async fn non_numeric_coordinates_are_rejected() {
        let app = app!();
        let body = update(
            json!({ "x": "five", "y": 5, "direction": "N", "score": 0, "wasHit": false }),
            json!({ "x": 5, "y": 4, "direction": "S", "score": 0, "wasHit": false }),
        );
        let req = awtest::TestRequest::post()
            .uri("/")
            .set_json(&body)
            .to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = awtest::read_body_json(resp).await;
        assert_eq!(body["error_code"], json!("invalid_json"));
    }

    #[actix_web::test]
    async fn missing_dims_are_rejected() {
        let app = app!();
        let mut body = update(
            json!({ "x": 5, "y": 5, "direction": "N", "score": 0, "wasHit": false }),
            json!({ "x": 5, "y": 4, "direction": "S", "score": 0, "wasHit": false }),
        );
        body["arena"]["dims"] = json!([10]);
        let req = awtest::TestRequest::post()
            .uri("/")
            .set_json(&body)
            .to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = awtest::read_body_json(resp).await;
        assert_eq!(body["error_code"], json!("invalid_dims"));
    }
}
