// ==========================================
// BOM跟踪系统 - 外部提取服务接口
// ==========================================
// 职责: 定义非结构化文本→BOM条目的提取接口（不含实现）
// 实现者: 上层LLM适配器 / 测试Mock
// 红线: 提取失败一律可降级——接口的 Err 只表达 "本次提取
//       不可用"，由编排器决定是否走本地关键词兜底
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ==========================================
// ExtractedLineItem - 提取结果行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLineItem {
    /// 物料名称（不得为空白）
    pub name: String,
    /// 数量（缺省视为 1.0）
    pub quantity: f64,
    /// 类别猜测（提取服务给出，可为空）
    pub category_guess: Option<String>,
    /// 置信度 [0.0, 1.0]
    pub confidence: f64,
}

impl ExtractedLineItem {
    /// 结构合法性校验（编排器据此判定响应是否可用）
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
            && self.quantity.is_finite()
            && self.quantity > 0.0
            && (0.0..=1.0).contains(&self.confidence)
    }
}

// ==========================================
// ExtractionHints - 提取提示上下文
// ==========================================
// 用途: 把项目已知的类别/供应商词表带给提取服务，提高命中率
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionHints {
    pub known_categories: Vec<String>,
    pub known_vendors: Vec<String>,
}

// ==========================================
// ExtractionError - 提取服务失败口径
// ==========================================
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("提取服务不可达: {0}")]
    Unreachable(String),

    #[error("提取服务超时（{timeout_secs}秒）")]
    Timeout { timeout_secs: u64 },

    #[error("提取服务响应不可解析: {0}")]
    MalformedResponse(String),

    #[error("提取服务未配置")]
    NotConfigured,
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

// ==========================================
// ExtractionService Trait
// ==========================================
#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// 从非结构化文本提取BOM条目行
    async fn extract_line_items(
        &self,
        text: &str,
        hints: &ExtractionHints,
    ) -> ExtractionResult<Vec<ExtractedLineItem>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_accepts_valid_item() {
        let item = ExtractedLineItem {
            name: "不锈钢管".to_string(),
            quantity: 12.0,
            category_guess: Some("管材".to_string()),
            confidence: 0.92,
        };
        assert!(item.is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_blank_name() {
        let item = ExtractedLineItem {
            name: "   ".to_string(),
            quantity: 1.0,
            category_guess: None,
            confidence: 0.5,
        };
        assert!(!item.is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_out_of_range_confidence() {
        let item = ExtractedLineItem {
            name: "蝶阀".to_string(),
            quantity: 4.0,
            category_guess: None,
            confidence: 1.3,
        };
        assert!(!item.is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_non_positive_quantity() {
        let item = ExtractedLineItem {
            name: "蝶阀".to_string(),
            quantity: 0.0,
            category_guess: None,
            confidence: 0.5,
        };
        assert!(!item.is_well_formed());
    }
}
