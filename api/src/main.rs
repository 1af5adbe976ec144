use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use common::error::{ApiError, ApiResult};
use common::Application;

use crate::models::coupons::{CouponStore, MemoryCouponStore};

mod controller;
mod mapper;
mod models;
mod router;
mod validation;

/// 所有请求共享的状态, 写操作在写锁内完成整个校验与修改流程
pub struct AppState {
    pub coupons: RwLock<Box<dyn CouponStore>>,
}

impl AppState {
    pub fn new(store: impl CouponStore + 'static) -> Self {
        AppState {
            coupons: RwLock::new(Box::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    let application = Application::init().await?;

    let level = tracing::Level::from_str(&application.log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let store = if application.seed {
        MemoryCouponStore::seeded()
    } else {
        MemoryCouponStore::default()
    };
    info!("coupon store ready with {} coupons", store.len());

    let addr = SocketAddr::new(IpAddr::from_str(&application.host)?, application.port);
    let router = router::routers(Arc::new(AppState::new(store)));

    info!("coupon-api run at: {}", addr);
    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await
        .map_err(|e| ApiError::Error(e.to_string()))
}
