use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Extension;
use tracing::{error, info};

use common::error::{ApiError, ApiResult};
use common::request::coupon::{ReqCreateCoupon, ReqUpdateCoupon};
use common::{ApiResponse, AppExtractor, Payload, ResCoupon};

use crate::mapper::CouponMapper;
use crate::models::coupons::CouponStore;
use crate::validation;
use crate::AppState;

const DELETED_MESSAGE: &str = "Coupon deleted successfully.";

pub struct CouponController;

impl CouponController {
    // 列表
    pub async fn index(Extension(state): Extension<Arc<AppState>>) -> Response {
        let store = state.coupons.read().await;
        let coupons = Self::list_coupons(&**store);

        ApiResponse::success(StatusCode::OK, Payload::Coupons(coupons)).json()
    }

    // 详情
    pub async fn get(
        Extension(state): Extension<Arc<AppState>>,
        Path(id): Path<i64>,
    ) -> Response {
        let store = state.coupons.read().await;
        let result = Self::get_coupon(&**store, id).map(Payload::Coupon);

        ApiResponse::response(result, StatusCode::OK).json()
    }

    // 创建
    pub async fn create(
        Extension(state): Extension<Arc<AppState>>,
        params: AppExtractor<ReqCreateCoupon>,
    ) -> Response {
        let mut store = state.coupons.write().await;
        let result = Self::create_coupon(&mut **store, params.inner).map(Payload::Coupon);

        ApiResponse::response(result, StatusCode::CREATED).json()
    }

    // 更新
    pub async fn update(
        Extension(state): Extension<Arc<AppState>>,
        params: AppExtractor<ReqUpdateCoupon>,
    ) -> Response {
        let mut store = state.coupons.write().await;
        let result = Self::update_coupon(&mut **store, params.inner).map(Payload::Coupon);

        ApiResponse::response(result, StatusCode::OK).json()
    }

    // 删除
    pub async fn delete(
        Extension(state): Extension<Arc<AppState>>,
        Path(id): Path<i64>,
    ) -> Response {
        let mut store = state.coupons.write().await;
        let result = Self::delete_coupon(&mut **store, id)
            .map(|()| Payload::Message(DELETED_MESSAGE.to_string()));

        ApiResponse::response(result, StatusCode::OK).json()
    }

    pub fn list_coupons(store: &dyn CouponStore) -> Vec<ResCoupon> {
        info!("Retrieving all coupons...");

        store
            .list()
            .iter()
            .map(CouponMapper::to_response)
            .collect::<Vec<ResCoupon>>()
    }

    pub fn get_coupon(store: &dyn CouponStore, id: i64) -> ApiResult<ResCoupon> {
        let coupon = store
            .find_by_id(id)
            .ok_or(ApiError::NotFound(id))
            .map_err(log_error)?;

        info!("Retrieving coupon with Id: {}", id);
        Ok(CouponMapper::to_response(&coupon))
    }

    pub fn create_coupon(
        store: &mut dyn CouponStore,
        mut req: ReqCreateCoupon,
    ) -> ApiResult<ResCoupon> {
        req.name = req.name.trim().to_string();
        if let Some(message) = validation::create_errors(&req).into_iter().next() {
            return Err(log_error(ApiError::Validation(message)));
        }

        if store.exists_by_name_ci(&req.name) {
            return Err(log_error(ApiError::NameNotUnique));
        }

        let mut coupon = CouponMapper::create_to_domain(req);
        coupon.id = store.next_id();
        coupon.is_active = true;

        info!("Creating coupon: {}, with Id: {}", coupon.name, coupon.id);
        let res = CouponMapper::to_response(&coupon);
        store.insert(coupon).map_err(log_error)?;

        Ok(res)
    }

    /// 整体替换 name 与 percent, is_active 沿用原记录
    pub fn update_coupon(
        store: &mut dyn CouponStore,
        mut req: ReqUpdateCoupon,
    ) -> ApiResult<ResCoupon> {
        req.name = req.name.trim().to_string();
        if let Some(message) = validation::update_errors(&req, &*store).into_iter().next() {
            return Err(log_error(ApiError::Validation(message)));
        }

        if matches!(store.find_id_by_name_ci(&req.name), Some(owner) if owner != req.id) {
            return Err(log_error(ApiError::NameNotUnique));
        }

        let old = store
            .find_by_id(req.id)
            .ok_or(ApiError::UpdateTargetMissing(req.id))
            .map_err(log_error)?;

        info!("Updating coupon with Id: {}", old.id);
        let coupon = CouponMapper::update_to_domain(req, old.is_active);
        let res = CouponMapper::to_response(&coupon);
        store.replace(old.id, coupon).map_err(log_error)?;

        Ok(res)
    }

    pub fn delete_coupon(store: &mut dyn CouponStore, id: i64) -> ApiResult<()> {
        let coupon = store.remove(id).map_err(log_error)?;

        info!("Deleted coupon: {}, with Id: {}", coupon.name, coupon.id);
        Ok(())
    }
}

fn log_error(err: ApiError) -> ApiError {
    error!("{}", err);
    err
}
