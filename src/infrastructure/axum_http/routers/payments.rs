use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::{
    application::usecases::payments::PaymentUseCase,
    domain::{
        repositories::payments::PaymentRepository,
        value_objects::payments::{
            CreatePaymentResponse, InsertPaymentModel, PAYMENT_ACCEPTED_MESSAGE,
        },
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPoolSquad, repositories::payments::PaymentPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));
    let payment_usecase = PaymentUseCase::new(Arc::new(payment_repository));

    router(Arc::new(payment_usecase))
}

pub fn router<T>(payment_usecase: Arc<PaymentUseCase<T>>) -> Router
where
    T: PaymentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create::<T>))
        .with_state(payment_usecase)
}

pub async fn create<T>(
    State(payment_usecase): State<Arc<PaymentUseCase<T>>>,
    payload: Result<Json<InsertPaymentModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentRepository + Send + Sync + 'static,
{
    let Json(insert_payment_model) = payload?;
    let payment = payment_usecase.create(insert_payment_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePaymentResponse {
            message: PAYMENT_ACCEPTED_MESSAGE.to_string(),
            payment,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            entities::{payment_items::PaymentItemEntity, payments::PaymentEntity},
            repositories::payments::MockPaymentRepository,
        },
        infrastructure::axum_http::routers::test_support::send,
    };
    use axum::http::Method;
    use serde_json::json;

    fn app(repo: MockPaymentRepository) -> Router {
        router(Arc::new(PaymentUseCase::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn create_returns_message_and_payment() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_record_payment().returning(|payment, items| {
            let payment_entity = PaymentEntity {
                id: 1,
                customer_name: payment.customer_name,
                customer_email: payment.customer_email,
                total: payment.total,
                created_at: payment.created_at,
                updated_at: payment.updated_at,
                deleted_at: None,
            };
            let item_entities = items
                .into_iter()
                .zip(1..)
                .map(|(item, id)| PaymentItemEntity {
                    id,
                    payment_id: 1,
                    product_id: item.product_id,
                    name: item.name,
                    price: item.price,
                    qty: item.qty,
                    created_at: item.created_at,
                    updated_at: item.updated_at,
                    deleted_at: None,
                })
                .collect::<Vec<_>>();
            Box::pin(async move { Ok((payment_entity, item_entities)) })
        });

        let (status, body) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({
                "customer": { "name": "Jan", "email": "jan@example.com" },
                "items": [
                    { "product_id": 1, "name": "Go Guide", "price": 10.0, "qty": 2 },
                    { "product_id": 2, "name": "Pen", "price": 5.0, "qty": 1 }
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Payment accepted");
        assert_eq!(body["payment"]["total"], 25.0);
        assert_eq!(body["payment"]["name"], "Jan");
        assert_eq!(body["payment"]["email"], "jan@example.com");

        let items = body["payment"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["price"], 10.0);
        assert_eq!(items[0]["qty"], 2);
        assert!(items[0].get("payment_id").is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_record_payment().never();

        let (status, body) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({ "customer": "Jan", "items": "none" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn failed_transaction_is_500() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_record_payment()
            .returning(|_, _| Box::pin(async { Err(anyhow::anyhow!("could not serialize access")) }));

        let (status, body) = send(
            app(repo),
            Method::POST,
            "/",
            Some(json!({
                "customer": { "name": "Jan", "email": "jan@example.com" },
                "items": [{ "product_id": 1, "name": "Go Guide", "price": 10.0, "qty": 1 }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "could not serialize access");
    }
}
