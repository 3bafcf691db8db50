use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::carts::CartUseCase,
    domain::{repositories::carts::CartRepository, value_objects::carts::InsertCartModel},
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPoolSquad, repositories::carts::CartPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let cart_repository = CartPostgres::new(Arc::clone(&db_pool));
    let cart_usecase = CartUseCase::new(Arc::new(cart_repository));

    router(Arc::new(cart_usecase))
}

pub fn router<T>(cart_usecase: Arc<CartUseCase<T>>) -> Router
where
    T: CartRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .with_state(cart_usecase)
}

pub async fn list<T>(
    State(cart_usecase): State<Arc<CartUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: CartRepository + Send + Sync + 'static,
{
    let carts = cart_usecase.list().await?;
    Ok(Json(carts))
}

pub async fn create<T>(
    State(cart_usecase): State<Arc<CartUseCase<T>>>,
    payload: Result<Json<InsertCartModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: CartRepository + Send + Sync + 'static,
{
    let Json(insert_cart_model) = payload?;
    let cart = cart_usecase.create(insert_cart_model).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{entities::carts::CartEntity, repositories::carts::MockCartRepository},
        infrastructure::axum_http::routers::test_support::send,
    };
    use axum::http::Method;
    use chrono::Utc;
    use serde_json::json;

    fn app(repo: MockCartRepository) -> Router {
        router(Arc::new(CartUseCase::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn create_returns_201() {
        let mut repo = MockCartRepository::new();
        repo.expect_create().returning(|entity| {
            let cart = CartEntity {
                id: 4,
                user_id: entity.user_id,
                cart_value: entity.cart_value,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
                deleted_at: None,
            };
            Box::pin(async move { Ok(cart) })
        });

        let (status, body) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({ "user_id": 2, "cart_value": 120.5 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["user_id"], 2);
        assert_eq!(body["cart_value"], 120.5);
    }

    #[tokio::test]
    async fn create_with_wrong_types_is_400() {
        let mut repo = MockCartRepository::new();
        repo.expect_create().never();

        let (status, _) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({ "user_id": "me", "cart_value": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_all_carts() {
        let mut repo = MockCartRepository::new();
        repo.expect_list().returning(|| {
            let now = Utc::now();
            let cart = CartEntity {
                id: 1,
                user_id: 1,
                cart_value: 10.0,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };
            Box::pin(async move { Ok(vec![cart]) })
        });

        let (status, body) = send(app(repo), Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
