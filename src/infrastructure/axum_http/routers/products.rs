use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::{errors::PRODUCT_NOT_FOUND, usecases::products::ProductUseCase},
    domain::{
        repositories::products::ProductRepository,
        value_objects::{
            product_filter::{ProductFilter, ProductFilterQuery},
            products::{InsertProductModel, UpdateProductModel},
        },
    },
    infrastructure::{
        axum_http::error_responses::{AppError, parse_path_id},
        postgres::{postgres_connection::PgPoolSquad, repositories::products::ProductPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let product_repository = ProductPostgres::new(Arc::clone(&db_pool));
    let product_usecase = ProductUseCase::new(Arc::new(product_repository));

    router(Arc::new(product_usecase))
}

pub fn router<T>(product_usecase: Arc<ProductUseCase<T>>) -> Router
where
    T: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route("/filter", get(filter::<T>))
        .route("/:id", get(find::<T>).put(update::<T>).delete(delete::<T>))
        .with_state(product_usecase)
}

pub async fn list<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let products = product_usecase.list().await?;
    Ok(Json(products))
}

pub async fn filter<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Query(query): Query<ProductFilterQuery>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let products = product_usecase.filter(ProductFilter::from(&query)).await?;
    Ok(Json(products))
}

pub async fn find<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_path_id(&raw_id, PRODUCT_NOT_FOUND)?;
    let product = product_usecase.find(product_id).await?;
    Ok(Json(product))
}

pub async fn create<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    payload: Result<Json<InsertProductModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let Json(insert_product_model) = payload?;
    let product = product_usecase.create(insert_product_model).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateProductModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_path_id(&raw_id, PRODUCT_NOT_FOUND)?;
    // A missing product wins over a malformed body.
    product_usecase.find(product_id).await?;
    let Json(update_product_model) = payload?;
    let product = product_usecase
        .update(product_id, update_product_model)
        .await?;
    Ok(Json(product))
}

pub async fn delete<T>(
    State(product_usecase): State<Arc<ProductUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_path_id(&raw_id, PRODUCT_NOT_FOUND)?;
    product_usecase.delete(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
