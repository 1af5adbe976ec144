use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::value::Value;

use crate::error::{ApiError, ApiResult};

const CONFIG_FILE: &str = "application.yaml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Application {
    // 服务域名
    pub host: String,
    // 服务端口
    pub port: u16,
    // 日志级别
    pub log_level: String,
    // 启动时是否写入演示优惠券
    pub seed: bool,
}

impl Default for Application {
    fn default() -> Self {
        Application {
            host: "127.0.0.1".to_string(),
            port: 8081,
            log_level: "info".to_string(),
            seed: true,
        }
    }
}

impl Application {
    /// 读取 ./application.yaml, 文件不存在时使用默认配置
    pub async fn init() -> ApiResult<Self> {
        match Self::file_get_content(CONFIG_FILE).await? {
            Some(cfg) => Self::from_value(&cfg),
            None => {
                println!(" ./{} 不存在, 使用默认配置启动 ...", CONFIG_FILE);
                Ok(Application::default())
            }
        }
    }

    pub fn from_yaml(content: &str) -> ApiResult<Self> {
        let cfg = serde_yaml::from_str::<Value>(content)?;
        Self::from_value(&cfg)
    }

    fn from_value(cfg: &Value) -> ApiResult<Self> {
        let defaults = Application::default();

        Ok(Application {
            host: Self::analysis::<String>("host", cfg)?,
            port: Self::analysis::<u16>("port", cfg)?,
            log_level: Self::analysis_or::<String>("log_level", cfg, defaults.log_level)?,
            seed: Self::analysis_or::<bool>("seed", cfg, defaults.seed)?,
        })
    }

    fn analysis<T: DeserializeOwned>(key: &str, value: &Value) -> ApiResult<T> {
        let val = match value.get(key) {
            Some(value) => value,
            None => return Err(ApiError::Error(format!("{} field does not exist", key))),
        };
        Ok(serde_yaml::from_value::<T>(val.clone())?)
    }

    fn analysis_or<T: DeserializeOwned>(key: &str, value: &Value, default: T) -> ApiResult<T> {
        match value.get(key) {
            Some(val) => Ok(serde_yaml::from_value::<T>(val.clone())?),
            None => Ok(default),
        }
    }

    /// 读取文件内容, 文件不存在时返回 None
    async fn file_get_content(filename: &str) -> ApiResult<Option<Value>> {
        match tokio::fs::read(filename).await {
            Ok(file_content) => match serde_yaml::from_slice::<Value>(file_content.as_slice()) {
                Ok(value) => Ok(Some(value)),
                Err(_e) => {
                    println!("\r\n请检查 ./{} 配置信息!\r\nerr: {}\r\n", filename, _e);

                    Err(ApiError::Error(_e.to_string()))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let cfg = Application::from_yaml("host: 0.0.0.0\nport: 9000\n").unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.seed);
    }

    #[test]
    fn missing_required_key() {
        let err = Application::from_yaml("port: 9000\nseed: false\n").unwrap_err();

        assert_eq!(err, ApiError::Error("host field does not exist".to_string()));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Application::from_yaml("host: a\nport: not-a-port\n").is_err());
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let content = Application::file_get_content("./does-not-exist.yaml")
            .await
            .unwrap();

        assert!(content.is_none());
    }
}
