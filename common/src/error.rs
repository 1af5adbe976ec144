use std::fmt::{Display, Formatter};
use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use crate::ApiResponse;

/// 返回资源类型
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 系统定义错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求参数未通过校验, 携带第一条规则信息
    Validation(String),
    NameNotUnique,
    NotFound(i64),
    UpdateTargetMissing(i64),
    /// 配置, IO 等启动阶段错误
    Error(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Error(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::NameNotUnique => write!(f, "Name is not unique."),
            ApiError::NotFound(id) | ApiError::UpdateTargetMissing(id) => {
                write!(f, "No coupon with Id {}", id)
            }
            ApiError::Error(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ApiError {}

/// 按给定字段顺序展开校验错误, 保证输出顺序稳定
pub fn format_errors(errors: &ValidationErrors, fields: &[&'static str]) -> Vec<String> {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(field).map(|errs| (field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("'{}' is invalid.", field),
            })
        })
        .collect::<Vec<String>>()
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Error(e.to_string())
    }
}

impl From<&str> for ApiError {
    fn from(e: &str) -> Self {
        ApiError::Error(e.to_string())
    }
}

impl From<String> for ApiError {
    fn from(e: String) -> Self {
        ApiError::Error(e)
    }
}

impl From<serde_yaml::Error> for ApiError {
    fn from(value: serde_yaml::Error) -> Self {
        ApiError::Error(value.to_string())
    }
}

impl From<AddrParseError> for ApiError {
    fn from(value: AddrParseError) -> Self {
        ApiError::Error(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiResponse::from_error(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    #[test]
    fn messages_follow_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("percent", ValidationError::new("range"));
        let mut name = ValidationError::new("not_blank");
        name.message = Some("'Name' must not be empty.".into());
        errors.add("name", name);

        assert_eq!(
            format_errors(&errors, &["name", "percent"]),
            vec![
                "'Name' must not be empty.".to_string(),
                "'percent' is invalid.".to_string(),
            ]
        );
        assert!(format_errors(&errors, &["id"]).is_empty());
    }

    #[test]
    fn core_errors_are_bad_requests() {
        assert_eq!(ApiError::NameNotUnique.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UpdateTargetMissing(5).to_string(),
            "No coupon with Id 5"
        );
        assert_eq!(
            ApiError::from("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
