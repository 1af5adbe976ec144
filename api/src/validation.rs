use common::request::coupon::{ReqCreateCoupon, ReqUpdateCoupon};
use common::error::ApiError;

use crate::models::coupons::CouponStore;

/// 创建规则: 名称非空, 折扣 1-100
pub fn create_errors(req: &ReqCreateCoupon) -> Vec<String> {
    req.rule_violations()
}

/// 更新规则: id > 0 且存在, 名称非空, 折扣 1-100
///
/// id 是否存在按记录查找, 不按记录条数比较
pub fn update_errors(req: &ReqUpdateCoupon, store: &dyn CouponStore) -> Vec<String> {
    let mut errors = req.rule_violations(&["id"]);
    if errors.is_empty() && !store.exists_by_id(req.id) {
        errors.push(ApiError::UpdateTargetMissing(req.id).to_string());
    }
    errors.extend(req.rule_violations(&["name", "percent"]));

    errors
}
