use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::BadRequestValidationResponse, ValidatedJson,
};
use rand::Rng;
use utoipa::OpenApi;

use crate::models::{DomainAvailability, DomainRegistration, RegisterDomain};

/// OpenAPI documentation for the Domain API
#[derive(OpenApi)]
#[openapi(
    paths(check_domain, register_domain),
    components(
        schemas(DomainAvailability, RegisterDomain, DomainRegistration),
        responses(BadRequestValidationResponse)
    ),
    tags(
        (name = "Domain", description = "mock domain availability and registration")
    )
)]
pub struct ApiDoc;

/// Stateless router; no service or repository behind these.
pub fn router() -> Router {
    Router::new()
        .route("/check/{domainName}", get(check_domain))
        .route("/register", post(register_domain))
}

/// Check domain availability (mock)
///
/// The answer is a coin flip; the endpoint is explicitly
/// non-deterministic.
#[utoipa::path(
    get,
    path = "/check/{domainName}",
    tag = "Domain",
    params(
        ("domainName" = String, Path, description = "The domain name to check availability for")
    ),
    responses(
        (status = 200, description = "Availability status", body = DomainAvailability)
    )
)]
async fn check_domain(Path(domain_name): Path<String>) -> Json<DomainAvailability> {
    let available = rand::rng().random_bool(0.5);
    Json(DomainAvailability {
        domain_name,
        available,
    })
}

/// Register a domain (mock)
#[utoipa::path(
    post,
    path = "/register",
    tag = "Domain",
    request_body = RegisterDomain,
    responses(
        (status = 201, description = "Domain registration successful", body = DomainRegistration),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn register_domain(
    ValidatedJson(input): ValidatedJson<RegisterDomain>,
) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(DomainRegistration::register(input)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn check_echoes_domain_name_with_boolean_answer() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/check/example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["domainName"], "example.com");
        assert!(body["available"].is_boolean());
    }

    #[tokio::test]
    async fn register_returns_201_with_computed_dates() {
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "domainName": "example.com",
                    "registrant": "narayan"
                }))
                .unwrap(),
            ))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["domainName"], "example.com");
        assert_eq!(body["registrant"], "narayan");
        assert!(body["registrationDate"].is_string());
        assert!(body["expirationDate"].is_string());
    }

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({"domainName": "example.com"})).unwrap(),
            ))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
