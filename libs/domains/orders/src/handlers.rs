use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{CreateOrder, DeletionMessage, Order, TrackingInfo, UpdateOrder};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, create_order, update_order, delete_order, track_order),
    components(
        schemas(Order, CreateOrder, UpdateOrder, DeletionMessage, TrackingInfo),
        responses(
            BadRequestResponse,
            BadRequestUuidResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "get, create, update and delete orders")
    )
)]
pub struct ApiDoc;

/// Orders router. The static `/track` segment is matched before the
/// `/{id}` capture.
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/track/{trackingNumber}", get(track_order))
        .route("/{id}", delete(delete_order).put(update_order))
        .with_state(shared_service)
}

/// Get a list of orders
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    responses(
        (status = 200, description = "List of orders", body = Vec<Order>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
) -> OrderResult<Json<Vec<Order>>> {
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}

/// Add an order to the database
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<impl IntoResponse> {
    let order = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update order details in the database
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "ID of the order to update")
    ),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> OrderResult<Json<Order>> {
    let order = service.update_order(id, input).await?;
    Ok(Json(order))
}

/// Delete an order for the given id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "ID of the order to delete")
    ),
    responses(
        (status = 200, description = "Deletion message", body = DeletionMessage),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<DeletionMessage>> {
    service.delete_order(id).await?;
    Ok(Json(DeletionMessage::deleted()))
}

/// Track a shipment (mock)
///
/// Synthesizes an in-transit status without consulting persistence.
#[utoipa::path(
    get,
    path = "/track/{trackingNumber}",
    tag = "Orders",
    params(
        ("trackingNumber" = String, Path, description = "Tracking number of the shipment")
    ),
    responses(
        (status = 200, description = "Shipment status", body = TrackingInfo)
    )
)]
async fn track_order(Path(tracking_number): Path<String>) -> Json<TrackingInfo> {
    Json(TrackingInfo::in_transit(tracking_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::repository::MockOrderRepository;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{Days, Utc};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(mock_repo: MockOrderRepository) -> Router {
        router(OrderService::new(mock_repo))
    }

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn order_payload() -> serde_json::Value {
        json!({
            "productId": "prod-0001",
            "productName": "Widget Deluxe",
            "orderedBy": "narayan",
            "quantity": 2
        })
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_order_returns_201_with_camel_case_fields() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Order::new(input)));

        let response = app(mock_repo).oneshot(post_json(order_payload())).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["productId"], "prod-0001");
        assert_eq!(body["productName"], "Widget Deluxe");
        assert_eq!(body["orderedBy"], "narayan");
        assert_eq!(body["quantity"], 2);
        assert!(!body["_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_performs_no_duplicate_check() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo
            .expect_create()
            .times(2)
            .returning(|input| Ok(Order::new(input)));

        let app = app(mock_repo);

        let first = app
            .clone()
            .oneshot(post_json(order_payload()))
            .await
            .unwrap();
        let second = app.oneshot(post_json(order_payload())).await.unwrap();

        assert_eq!(first.status(), StatusCode::CREATED);
        assert_eq!(second.status(), StatusCode::CREATED);

        let first_id = json_body(first.into_body()).await["_id"].clone();
        let second_id = json_body(second.into_body()).await["_id"].clone();
        assert_ne!(first_id, second_id);
    }

    #[tokio::test]
    async fn create_rejects_short_product_id() {
        let mock_repo = MockOrderRepository::new();

        let mut payload = order_payload();
        payload["productId"] = json!("p1");

        let response = app(mock_repo).oneshot(post_json(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_400() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", Uuid::now_v7()))
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({"quantity": 5})).unwrap(),
            ))
            .unwrap();

        let response = app(mock_repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "order not present");
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_400() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(OrderError::NotPresent));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let response = app(mock_repo).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn track_returns_mock_status_without_touching_persistence() {
        // No expectations set: any repository call would panic.
        let mock_repo = MockOrderRepository::new();

        let response = app(mock_repo)
            .oneshot(
                Request::builder()
                    .uri("/track/ABC123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["trackingNumber"], "ABC123");
        assert_eq!(body["status"], "In transit");
        assert_eq!(body["currentLocation"], "Distribution center");

        let expected = (Utc::now().date_naive() + Days::new(2))
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(body["estimatedDelivery"], expected);
    }
}
