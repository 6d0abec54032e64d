// ==========================================
// BOM跟踪系统 - 供应商文档领域模型
// ==========================================
// 依据: 采购到货跟踪业务规则 v0.3 - 数据模型
// 红线: OUTGOING_PO 的 linked_bom_item_ids 中，
//       任一条目ID在全部PO文档中至多出现一次（由同步器维护，文档库不强制）
// ==========================================

use crate::domain::types::DocumentType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// VendorDocument - 供应商文档
// ==========================================
// 用途: 上传的PO/报价/发票等文档及其BOM条目关联
// 生命周期: 上传时创建；linked_bom_item_ids 仅通过同步器或关联对话框变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorDocument {
    // ===== 主键 =====
    pub id: String,

    // ===== 基础信息 =====
    pub doc_type: DocumentType,
    pub file_name: Option<String>,
    pub vendor_name: Option<String>,

    // ===== BOM条目关联（保持插入顺序，禁止重复）=====
    pub linked_bom_item_ids: Vec<String>,

    // ===== 审计字段 =====
    pub uploaded_at: DateTime<Utc>,
}

impl VendorDocument {
    /// 创建新文档（无关联条目）
    pub fn new(id: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            id: id.into(),
            doc_type,
            file_name: None,
            vendor_name: None,
            linked_bom_item_ids: Vec::new(),
            uploaded_at: Utc::now(),
        }
    }

    /// 是否关联了指定条目
    pub fn links_item(&self, item_id: &str) -> bool {
        self.linked_bom_item_ids.iter().any(|id| id == item_id)
    }

    /// 是否仍有活跃的条目关联
    pub fn has_active_links(&self) -> bool {
        !self.linked_bom_item_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_item() {
        let mut doc = VendorDocument::new("doc-1", DocumentType::OutgoingPo);
        assert!(!doc.links_item("item-1"));
        assert!(!doc.has_active_links());

        doc.linked_bom_item_ids.push("item-1".to_string());
        assert!(doc.links_item("item-1"));
        assert!(!doc.links_item("item-2"));
        assert!(doc.has_active_links());
    }
}
