use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

pub use coupon::ResCoupon;

mod coupon;

/// 响应数据: 单条记录, 记录列表 或 文本消息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Payload {
    Coupon(ResCoupon),
    Coupons(Vec<ResCoupon>),
    Message(String),
}

/// 所有接口统一的响应结构
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse {
    pub is_success: bool,
    pub result: Option<Payload>,
    pub status_code: u16,
    pub error_messages: Vec<String>,
}

impl ApiResponse {
    pub fn response(result: ApiResult<Payload>, status: StatusCode) -> Self {
        match result {
            Ok(payload) => Self::success(status, payload),
            Err(e) => Self::from_error(e),
        }
    }

    pub fn success(status: StatusCode, payload: Payload) -> Self {
        Self {
            is_success: true,
            result: Some(payload),
            status_code: status.as_u16(),
            error_messages: vec![],
        }
    }

    pub fn fail_msg(message: String) -> Self {
        Self::fail_msg_code(StatusCode::BAD_REQUEST, message)
    }

    pub fn fail_msg_code(status: StatusCode, message: String) -> Self {
        Self {
            is_success: false,
            result: None,
            status_code: status.as_u16(),
            error_messages: vec![message],
        }
    }

    pub fn from_error(err: ApiError) -> Self {
        Self::fail_msg_code(err.status(), err.to_string())
    }

    /// 成功时传输层始终为 200, 实际状态码放在 status_code 中
    pub fn transport_status(&self) -> StatusCode {
        if self.is_success {
            return StatusCode::OK;
        }

        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    /// 序列化为 JSON 响应, 状态码见 [`ApiResponse::transport_status`]
    pub fn json(&self) -> Response {
        let body = serde_json::to_string(self).unwrap_or_else(|err| {
            tracing::error!("response serialize err: {}", err);
            String::new()
        });

        (
            self.transport_status(),
            [
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (CONTENT_TYPE, "application/json; charset=UTF-8"),
                (CACHE_CONTROL, "no-cache"),
            ],
            body,
        )
            .into_response()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        self.json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn coupon() -> ResCoupon {
        ResCoupon {
            id: 1,
            name: "10OFF".to_string(),
            percent: 10,
            is_active: true,
        }
    }

    #[test]
    fn success_envelope_has_no_errors() {
        let resp = ApiResponse::success(StatusCode::CREATED, Payload::Coupon(coupon()));

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "is_success": true,
                "result": {"id": 1, "name": "10OFF", "percent": 10, "is_active": true},
                "status_code": 201,
                "error_messages": [],
            })
        );
        assert_eq!(resp.transport_status(), StatusCode::OK);
    }

    #[test]
    fn failure_envelope_has_no_result() {
        let resp = ApiResponse::from_error(ApiError::NotFound(9));

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "is_success": false,
                "result": null,
                "status_code": 400,
                "error_messages": ["No coupon with Id 9"],
            })
        );
        assert_eq!(resp.transport_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn payload_variants_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(Payload::Message("done".to_string())).unwrap(),
            json!("done")
        );
        assert_eq!(
            serde_json::to_value(Payload::Coupons(vec![coupon()])).unwrap(),
            json!([{"id": 1, "name": "10OFF", "percent": 10, "is_active": true}])
        );
    }

    #[test]
    fn response_folds_result() {
        let ok = ApiResponse::response(Ok(Payload::Message("ok".to_string())), StatusCode::OK);
        assert!(ok.is_success);

        let err = ApiResponse::response(Err(ApiError::NameNotUnique), StatusCode::OK);
        assert!(!err.is_success);
        assert_eq!(err.status_code, 400);
        assert_eq!(err.error_messages, vec!["Name is not unique.".to_string()]);
    }
}
