use axum::extract::FromRequest;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Form, Json, RequestExt};
use http::header::CONTENT_TYPE;

use crate::ApiResponse;

pub mod coupon;

/// 存储HTTPBody数据, 支持 json 与 x-www-form-urlencoded
#[derive(Debug)]
pub struct AppExtractor<T> {
    pub inner: T,
}

#[async_trait]
impl<S, B, T> FromRequest<S, B> for AppExtractor<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: 'static,
    Json<T>: FromRequest<(), B>,
    Form<T>: FromRequest<(), B>,
{
    type Rejection = Response;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if content_type.starts_with("application/json") {
            let Json(inner) = req.extract::<Json<T>, _>().await.map_err(|_err| {
                ApiResponse::fail_msg("Request body is not a valid JSON payload.".to_string())
                    .into_response()
            })?;

            return Ok(Self { inner });
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(inner) = req.extract::<Form<T>, _>().await.map_err(|_err| {
                ApiResponse::fail_msg("Request body is not a valid form payload.".to_string())
                    .into_response()
            })?;

            return Ok(Self { inner });
        }

        Err(ApiResponse::fail_msg(format!(
            "Unsupported Content-Type: '{}'",
            content_type
        ))
        .into_response())
    }
}
