use axum::{
    extract::State,
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

use crate::error::ProductResult;
use crate::models::{CreateProduct, DeletionMessage, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product, delete_product),
    components(
        schemas(Product, CreateProduct, UpdateProduct, DeletionMessage),
        responses(
            BadRequestResponse,
            BadRequestUuidResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "get, create, update and delete products")
    )
)]
pub struct ApiDoc;

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", delete(delete_product).put(update_product))
        .with_state(shared_service)
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Add a product to the database
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update product details in the database
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product for the given id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "ID of the product to delete")
    ),
    responses(
        (status = 200, description = "Deletion message", body = DeletionMessage),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<DeletionMessage>> {
    service.delete_product(id).await?;
    Ok(Json(DeletionMessage::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(mock_repo: MockProductRepository) -> Router {
        router(ProductService::new(mock_repo))
    }

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
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
    async fn create_product_returns_201_with_identifier() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_name().returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .returning(|input| Ok(Product::new(input)));

        let response = app(mock_repo)
            .oneshot(post_json(json!({"name": "Widget Deluxe", "quantity": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["name"], "Widget Deluxe");
        assert_eq!(body["quantity"], 10);
        assert!(!body["_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_on_create() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_name().returning(|_| Ok(true));

        let response = app(mock_repo)
            .oneshot(post_json(json!({"name": "Widget Deluxe", "quantity": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "product already present");
    }

    #[tokio::test]
    async fn short_name_is_rejected_before_persistence() {
        let mock_repo = MockProductRepository::new();

        let response = app(mock_repo)
            .oneshot(post_json(json!({"name": "abc", "quantity": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response.into_body()).await;
        assert!(body["details"].as_object().unwrap().contains_key("name"));
    }

    #[tokio::test]
    async fn non_numeric_quantity_is_rejected() {
        let mock_repo = MockProductRepository::new();

        let response = app(mock_repo)
            .oneshot(post_json(json!({"name": "Widget Deluxe", "quantity": "ten"})))
            .await
            .unwrap();

        // Type mismatch is caught at deserialization, before validation.
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn update_unknown_id_returns_400() {
        let mut mock_repo = MockProductRepository::new();
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
        assert_eq!(body["message"], "product not present");
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_400() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(ProductError::NotPresent));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let response = app(mock_repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_every_product() {
        let products = vec![
            Product::new(CreateProduct {
                name: "First Widget".to_string(),
                quantity: 1,
            }),
            Product::new(CreateProduct {
                name: "Second Widget".to_string(),
                quantity: 2,
            }),
        ];

        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(move || Ok(products.clone()));

        let response = app(mock_repo)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response.into_body()).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
