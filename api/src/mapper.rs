//! 请求体 / 响应体 与内部记录之间的字段映射

use common::request::coupon::{ReqCreateCoupon, ReqUpdateCoupon};
use common::ResCoupon;

use crate::models::coupons::Coupon;

pub struct CouponMapper;

impl CouponMapper {
    /// id 与 is_active 由调用方赋值
    pub fn create_to_domain(req: ReqCreateCoupon) -> Coupon {
        Coupon {
            id: 0,
            name: req.name,
            percent: req.percent,
            is_active: false,
        }
    }

    /// 更新请求不携带 is_active, 由调用方沿用原记录的值
    pub fn update_to_domain(req: ReqUpdateCoupon, is_active: bool) -> Coupon {
        Coupon {
            id: req.id,
            name: req.name,
            percent: req.percent,
            is_active,
        }
    }

    pub fn to_response(coupon: &Coupon) -> ResCoupon {
        ResCoupon {
            id: coupon.id,
            name: coupon.name.clone(),
            percent: coupon.percent,
            is_active: coupon.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_carries_id_and_given_activity() {
        let coupon = CouponMapper::update_to_domain(
            ReqUpdateCoupon {
                id: 3,
                name: "35OFF".to_string(),
                percent: 35,
            },
            false,
        );

        assert_eq!(
            coupon,
            Coupon {
                id: 3,
                name: "35OFF".to_string(),
                percent: 35,
                is_active: false,
            }
        );
    }

    #[test]
    fn response_copies_every_field() {
        let coupon = Coupon {
            id: 7,
            name: "7OFF".to_string(),
            percent: 7,
            is_active: true,
        };

        let res = CouponMapper::to_response(&coupon);

        assert_eq!(
            (res.id, res.name.as_str(), res.percent, res.is_active),
            (7, "7OFF", 7, true)
        );
    }
}
