// ==========================================
// BOM跟踪系统 - BOM条目领域模型
// ==========================================
// 依据: 采购到货跟踪业务规则 v0.3 - 数据模型
// 红线: actual_arrival 有值 ⇔ status = RECEIVED
// ==========================================

use crate::domain::types::{ItemStatus, ItemType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FinalizedVendor - 定标供应商
// ==========================================
// 用途: 条目定标后的供应商影子信息（lead_time 为自由文本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedVendor {
    pub vendor_id: Option<String>, // 供应商档案ID（可缺失，历史数据仅有名称）
    pub name: String,              // 供应商名称
    pub lead_time: Option<String>, // 报价交期自由文本（如 "2-3 weeks"）
    pub contact: Option<String>,   // 联系方式
}

// ==========================================
// BomItem - BOM条目
// ==========================================
// 用途: 单条BOM行（部件或服务），到货跟踪的基本单元
// 生命周期: BOM填充时创建（人工或导入），订单/收货字段仅通过显式操作变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    // ===== 主键 =====
    pub id: String, // 条目唯一标识

    // ===== 基础信息 =====
    pub name: String,             // 条目名称
    pub item_type: ItemType,      // COMPONENT / SERVICE
    pub status: ItemStatus,       // NOT_ORDERED / ORDERED / RECEIVED
    pub quantity: f64,            // 数量
    pub category: Option<String>, // 类别

    // ===== 订单与到货日期（ISO DATE，日粒度）=====
    pub order_date: Option<NaiveDate>,       // 下单日期
    pub expected_arrival: Option<NaiveDate>, // 预计到货（下单时派生，不自动重算）
    pub actual_arrival: Option<NaiveDate>,   // 实际到货（仅 RECEIVED 状态有值）

    // ===== 文档关联（每类至多一个）=====
    pub linked_po_document_id: Option<String>,      // 激活PO文档（1:1，由同步器维护）
    pub linked_invoice_document_id: Option<String>, // 发票文档
    pub linked_quote_document_id: Option<String>,   // 报价文档

    // ===== 定标供应商 =====
    pub finalized_vendor: Option<FinalizedVendor>,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BomItem {
    /// 创建新条目（未下单、无日期字段）
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            status: ItemStatus::NotOrdered,
            quantity: 1.0,
            category: None,
            order_date: None,
            expected_arrival: None,
            actual_arrival: None,
            linked_po_document_id: None,
            linked_invoice_document_id: None,
            linked_quote_document_id: None,
            finalized_vendor: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 定标供应商的交期自由文本（缺失时返回空串）
    pub fn vendor_lead_time_text(&self) -> &str {
        self.finalized_vendor
            .as_ref()
            .and_then(|v| v.lead_time.as_deref())
            .unwrap_or("")
    }
}

// ==========================================
// RawBomRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBomRecord {
    pub row_no: usize,                // 源文件行号（DQ 提示用）
    pub name: Option<String>,         // 条目名称
    pub quantity: Option<f64>,        // 数量
    pub category: Option<String>,     // 类别
    pub vendor_name: Option<String>,  // 供应商名称
    pub status_raw: Option<String>,   // 原始状态文本（兼容变体库）
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = BomItem::new("item-1", "主电机", ItemType::Component);
        assert_eq!(item.status, ItemStatus::NotOrdered);
        assert!(item.order_date.is_none());
        assert!(item.expected_arrival.is_none());
        assert!(item.actual_arrival.is_none());
        assert!(item.linked_po_document_id.is_none());
    }

    #[test]
    fn test_vendor_lead_time_text() {
        let mut item = BomItem::new("item-1", "主电机", ItemType::Component);
        assert_eq!(item.vendor_lead_time_text(), "");

        item.finalized_vendor = Some(FinalizedVendor {
            vendor_id: None,
            name: "华东电气".to_string(),
            lead_time: Some("2-3 weeks".to_string()),
            contact: None,
        });
        assert_eq!(item.vendor_lead_time_text(), "2-3 weeks");
    }
}
