// ==========================================
// BOM跟踪系统 - 领域类型定义
// ==========================================
// 依据: 采购到货跟踪业务规则 v0.3
// 序列化格式: SCREAMING_SNAKE_CASE (与文档库字段一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 条目类型 (Item Type)
// ==========================================
// 红线: SERVICE 类条目不参与到货跟踪
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Component, // 实物部件
    Service,   // 服务类（安装/调试等）
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Component => write!(f, "COMPONENT"),
            ItemType::Service => write!(f, "SERVICE"),
        }
    }
}

// ==========================================
// 采购状态 (Item Status)
// ==========================================
// 规范状态集为三值。历史数据中存在 "approved" 变体，
// 解码时归入 NotOrdered（未收货口径），并输出 warn 日志。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    NotOrdered, // 未下单
    Ordered,    // 已下单
    Received,   // 已收货
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::NotOrdered => write!(f, "NOT_ORDERED"),
            ItemStatus::Ordered => write!(f, "ORDERED"),
            ItemStatus::Received => write!(f, "RECEIVED"),
        }
    }
}

impl ItemStatus {
    /// 从原始字符串解析采购状态
    ///
    /// # 规则
    /// - 大小写不敏感，兼容连字符/下划线两种写法
    /// - "approved"（变体库中的第四状态）→ NotOrdered，记录 warn
    /// - 无法识别 → NotOrdered（最宽松口径）
    pub fn from_raw_str(s: &str) -> Self {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "NOT_ORDERED" => ItemStatus::NotOrdered,
            "ORDERED" => ItemStatus::Ordered,
            "RECEIVED" => ItemStatus::Received,
            "APPROVED" => {
                tracing::warn!("遇到变体状态 'approved'，按未下单处理");
                ItemStatus::NotOrdered
            }
            other => {
                tracing::warn!(status = other, "无法识别的采购状态，按未下单处理");
                ItemStatus::NotOrdered
            }
        }
    }

    /// 转换为文档库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ItemStatus::NotOrdered => "NOT_ORDERED",
            ItemStatus::Ordered => "ORDERED",
            ItemStatus::Received => "RECEIVED",
        }
    }
}

// ==========================================
// 到货状态 (Inward Status)
// ==========================================
// 派生视图状态: 每次读取时重新计算，不落库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InwardStatus {
    NotOrdered,   // 未下单（含服务类条目）
    OnTrack,      // 在途正常（距预计到货 >7 天，或无预计日期）
    ArrivingSoon, // 即将到货（0~7 天，含两端）
    Overdue,      // 已逾期（预计到货日早于今天）
    Received,     // 已收货
}

impl fmt::Display for InwardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InwardStatus::NotOrdered => write!(f, "NOT_ORDERED"),
            InwardStatus::OnTrack => write!(f, "ON_TRACK"),
            InwardStatus::ArrivingSoon => write!(f, "ARRIVING_SOON"),
            InwardStatus::Overdue => write!(f, "OVERDUE"),
            InwardStatus::Received => write!(f, "RECEIVED"),
        }
    }
}

impl InwardStatus {
    /// 本地化显示标签的 i18n key (inward.status.*)
    pub fn label_key(&self) -> &'static str {
        match self {
            InwardStatus::NotOrdered => "inward.status.not_ordered",
            InwardStatus::OnTrack => "inward.status.on_track",
            InwardStatus::ArrivingSoon => "inward.status.arriving_soon",
            InwardStatus::Overdue => "inward.status.overdue",
            InwardStatus::Received => "inward.status.received",
        }
    }
}

// ==========================================
// 文档类型 (Document Type)
// ==========================================
// 红线: OUTGOING_PO 文档与条目为 1:1 激活关联，由同步器维护
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    OutgoingPo,    // 对外采购订单
    VendorQuote,   // 供应商报价单
    VendorInvoice, // 供应商发票
    DeliveryNote,  // 送货单
    Other,         // 其他
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::OutgoingPo => write!(f, "OUTGOING_PO"),
            DocumentType::VendorQuote => write!(f, "VENDOR_QUOTE"),
            DocumentType::VendorInvoice => write!(f, "VENDOR_INVOICE"),
            DocumentType::DeliveryNote => write!(f, "DELIVERY_NOTE"),
            DocumentType::Other => write!(f, "OTHER"),
        }
    }
}

impl DocumentType {
    /// 从字符串解析文档类型
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "OUTGOING_PO" => DocumentType::OutgoingPo,
            "VENDOR_QUOTE" => DocumentType::VendorQuote,
            "VENDOR_INVOICE" => DocumentType::VendorInvoice,
            "DELIVERY_NOTE" => DocumentType::DeliveryNote,
            _ => DocumentType::Other,
        }
    }

    /// 转换为文档库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DocumentType::OutgoingPo => "OUTGOING_PO",
            DocumentType::VendorQuote => "VENDOR_QUOTE",
            DocumentType::VendorInvoice => "VENDOR_INVOICE",
            DocumentType::DeliveryNote => "DELIVERY_NOTE",
            DocumentType::Other => "OTHER",
        }
    }
}
