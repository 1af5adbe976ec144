use axum::routing::get;
use axum::Router;

use crate::controller::coupons::CouponController;

// Path  GET    格式: /coupon/3
// Body  POST / PUT 格式: application/json

pub fn coupon() -> Router {
    Router::new()
        .route(
            "/coupon",
            get(CouponController::index)
                .post(CouponController::create)
                .put(CouponController::update),
        )
        .route(
            "/coupon/:id",
            get(CouponController::get).delete(CouponController::delete),
        )
}
