use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        products::{CreateProductRequest, DeleteProductRequest, DeletedProduct, UpdateProductRequest},
        sales::CheckoutRequest,
    },
    error::ErrorBody,
    models::{Product, Sale, SaleLine},
    routes::{health, products, sales},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        sales::list_sales,
        sales::checkout
    ),
    components(
        schemas(
            Product,
            Sale,
            SaleLine,
            CreateProductRequest,
            UpdateProductRequest,
            DeleteProductRequest,
            DeletedProduct,
            CheckoutRequest,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Sales", description = "Checkout and sale log endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
