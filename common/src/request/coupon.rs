use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::format_errors;

/// 创建优惠券请求体
#[derive(Debug, Validate, Deserialize, Serialize, Clone)]
pub struct ReqCreateCoupon {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(range(min = 1, max = 100, message = "'Percent' must be between 1 and 100."))]
    pub percent: i32,
}

impl ReqCreateCoupon {
    /// 按字段声明顺序返回违反的规则
    pub fn rule_violations(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => format_errors(&e, &["name", "percent"]),
        }
    }
}

/// 更新优惠券请求体, 不包含 is_active
#[derive(Debug, Validate, Deserialize, Serialize, Clone)]
pub struct ReqUpdateCoupon {
    #[validate(range(min = 1, message = "'Id' must be greater than '0'."))]
    pub id: i64,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(range(min = 1, max = 100, message = "'Percent' must be between 1 and 100."))]
    pub percent: i32,
}

impl ReqUpdateCoupon {
    /// 只包含结构性规则, id 是否存在由调用方对照存储检查
    pub fn rule_violations(&self, fields: &[&'static str]) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => format_errors(&e, fields),
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("'Name' must not be empty."));
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_before_percent() {
        let req = ReqCreateCoupon {
            name: "   ".to_string(),
            percent: 0,
        };

        assert_eq!(
            req.rule_violations(),
            vec![
                "'Name' must not be empty.".to_string(),
                "'Percent' must be between 1 and 100.".to_string(),
            ]
        );
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        for percent in [1, 100] {
            let req = ReqCreateCoupon {
                name: "EDGE".to_string(),
                percent,
            };
            assert!(req.rule_violations().is_empty(), "percent {}", percent);
        }

        let req = ReqCreateCoupon {
            name: "EDGE".to_string(),
            percent: 101,
        };
        assert_eq!(req.rule_violations().len(), 1);
    }

    #[test]
    fn update_checks_only_requested_fields() {
        let req = ReqUpdateCoupon {
            id: 0,
            name: String::new(),
            percent: 50,
        };

        assert_eq!(
            req.rule_violations(&["id"]),
            vec!["'Id' must be greater than '0'.".to_string()]
        );
        assert_eq!(
            req.rule_violations(&["name", "percent"]),
            vec!["'Name' must not be empty.".to_string()]
        );
    }

    #[test]
    fn update_payload_deserializes_from_json() {
        let req: ReqUpdateCoupon =
            serde_json::from_str(r#"{"id":2,"name":"25OFF","percent":25}"#).unwrap();

        assert_eq!(req.id, 2);
        assert_eq!(req.name, "25OFF");
        assert!(req.rule_violations(&["id", "name", "percent"]).is_empty());
    }
}
