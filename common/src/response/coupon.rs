use serde::{Deserialize, Serialize};

/// 优惠券详情
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResCoupon {
    pub id: i64,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}
