use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::AppState;

mod coupon;

pub fn routers(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", coupon::coupon())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
