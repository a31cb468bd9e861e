//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI document for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "CRUD REST API for users, products and orders, with mock domain and tracking endpoints",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/orders", api = domain_orders::ApiDoc),
        (path = "/domain", api = domain_registrar::ApiDoc)
    ),
    tags(
        (name = "Users", description = "get, create, update and delete users"),
        (name = "Products", description = "get, create, update and delete products"),
        (name = "Orders", description = "get, create, update and delete orders"),
        (name = "Domain", description = "mock domain availability and registration")
    )
)]
pub struct ApiDoc;
