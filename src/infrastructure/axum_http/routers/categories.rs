use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::{errors::CATEGORY_NOT_FOUND, usecases::categories::CategoryUseCase},
    domain::{
        repositories::categories::CategoryRepository,
        value_objects::categories::InsertCategoryModel,
    },
    infrastructure::{
        axum_http::error_responses::{AppError, parse_path_id},
        postgres::{
            postgres_connection::PgPoolSquad, repositories::categories::CategoryPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let category_repository = CategoryPostgres::new(Arc::clone(&db_pool));
    let category_usecase = CategoryUseCase::new(Arc::new(category_repository));

    router(Arc::new(category_usecase))
}

pub fn router<T>(category_usecase: Arc<CategoryUseCase<T>>) -> Router
where
    T: CategoryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route("/:id", get(find::<T>))
        .with_state(category_usecase)
}

pub async fn list<T>(
    State(category_usecase): State<Arc<CategoryUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: CategoryRepository + Send + Sync + 'static,
{
    let categories = category_usecase.list().await?;
    Ok(Json(categories))
}

pub async fn find<T>(
    State(category_usecase): State<Arc<CategoryUseCase<T>>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: CategoryRepository + Send + Sync + 'static,
{
    let category_id = parse_path_id(&raw_id, CATEGORY_NOT_FOUND)?;
    let category = category_usecase.find(category_id).await?;
    Ok(Json(category))
}

pub async fn create<T>(
    State(category_usecase): State<Arc<CategoryUseCase<T>>>,
    payload: Result<Json<InsertCategoryModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: CategoryRepository + Send + Sync + 'static,
{
    let Json(insert_category_model) = payload?;
    let category = category_usecase.create(insert_category_model).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            entities::categories::CategoryEntity,
            repositories::categories::MockCategoryRepository,
        },
        infrastructure::axum_http::routers::test_support::send,
    };
    use axum::http::Method;
    use chrono::Utc;
    use serde_json::json;

    fn app(repo: MockCategoryRepository) -> Router {
        router(Arc::new(CategoryUseCase::new(Arc::new(repo))))
    }

    fn books() -> CategoryEntity {
        let now = Utc::now();
        CategoryEntity {
            id: 1,
            name: "Books".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn create_returns_201_with_empty_products() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create()
            .returning(|_, _| Box::pin(async { Ok((books(), vec![])) }));

        let (status, body) =
            send(app(repo), Method::POST, "/", Some(json!({ "name": "Books" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Books");
        assert_eq!(body["products"], json!([]));
    }

    #[tokio::test]
    async fn create_without_name_is_400() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_create().never();

        let (status, body) = send(app(repo), Method::POST, "/", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn get_missing_category_is_404_with_message() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_with_products()
            .returning(|_| Box::pin(async { Ok(None) }));

        let (status, body) = send(app(repo), Method::GET, "/9", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Category not found" }));
    }

    #[tokio::test]
    async fn list_returns_categories() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list_with_products()
            .returning(|| Box::pin(async { Ok(vec![(books(), vec![])]) }));

        let (status, body) = send(app(repo), Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Books");
    }
}
