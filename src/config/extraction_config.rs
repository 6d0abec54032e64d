// ==========================================
// BOM跟踪系统 - 提取服务配置
// ==========================================
// 职责: 外部提取服务的连接与重试参数
// 红线: api_key 不得进入日志与序列化快照之外的输出
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ExtractionConfig
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// 服务密钥（可缺失，缺失表示提取服务未启用）
    #[serde(default)]
    pub api_key: Option<String>,

    /// 服务端点
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// 模型标识
    #[serde(default = "default_model")]
    pub model: String,

    /// 单次调用超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 最大尝试次数（≥1）
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_endpoint() -> String {
    "https://api.deepseek.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    2
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl ExtractionConfig {
    /// 提取服务是否可用（有密钥才尝试外部调用）
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }

    /// 参数合法性校验（返回首个不合法项的说明）
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint 不得为空".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model 不得为空".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs 必须大于 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts 必须大于 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid_but_disabled() {
        let config = ExtractionConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_blank_api_key_not_enabled() {
        let config = ExtractionConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = ExtractionConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ExtractionConfig =
            serde_json::from_str(r#"{"api_key": "sk-test"}"#).unwrap();
        assert!(config.is_enabled());
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.timeout_secs, 30);
    }
}
