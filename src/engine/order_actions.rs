// ==========================================
// BOM跟踪系统 - 订单生命周期操作
// ==========================================
// 职责: "标记下单 / 标记收货" 的字段落位规则
// 红线: actual_arrival 有值 ⇔ status = RECEIVED
// 红线: expected_arrival 仅在下单时派生一次，不自动重算
// ==========================================

use crate::domain::item::BomItem;
use crate::domain::types::ItemStatus;
use crate::engine::arrival::ExpectedArrivalCalculator;
use crate::engine::lead_time::LeadTimeParser;
use chrono::{NaiveDate, Utc};

// ==========================================
// OrderActions - 纯函数工具类
// ==========================================
pub struct OrderActions;

impl OrderActions {
    /// 标记条目已下单
    ///
    /// # 规则
    /// - status → ORDERED，order_date 落位
    /// - expected_arrival = order_date + 定标供应商交期文本解析天数
    ///   （无定标供应商或交期不可解析时为 order_date + 0 天，即下单日当天）
    /// - po_document_id 提供时落位到 linked_po_document_id
    ///   （与PO文档侧的反向关联由文档关联同步器另行维护）
    pub fn mark_ordered(
        item: &mut BomItem,
        order_date: NaiveDate,
        po_document_id: Option<&str>,
    ) {
        let lead_time_days = LeadTimeParser::parse_to_days(item.vendor_lead_time_text());

        item.status = ItemStatus::Ordered;
        item.order_date = Some(order_date);
        item.expected_arrival =
            Some(ExpectedArrivalCalculator::calculate(order_date, lead_time_days));
        if let Some(doc_id) = po_document_id {
            item.linked_po_document_id = Some(doc_id.to_string());
        }
        item.updated_at = Utc::now();

        tracing::info!(
            item_id = %item.id,
            order_date = %order_date,
            lead_time_days,
            expected_arrival = ?item.expected_arrival,
            "条目已标记下单"
        );
    }

    /// 标记条目已收货
    ///
    /// # 规则
    /// - status → RECEIVED，actual_arrival 落位
    /// - expected_arrival 保持原值（逾期分析需要对比口径）
    pub fn mark_received(item: &mut BomItem, actual_arrival: NaiveDate) {
        item.status = ItemStatus::Received;
        item.actual_arrival = Some(actual_arrival);
        item.updated_at = Utc::now();

        tracing::info!(item_id = %item.id, actual_arrival = %actual_arrival, "条目已标记收货");
    }

    /// 撤销收货标记（误操作回退）
    ///
    /// # 规则
    /// - status → ORDERED，actual_arrival 清空（维持不变式）
    pub fn revert_received(item: &mut BomItem) {
        item.status = ItemStatus::Ordered;
        item.actual_arrival = None;
        item.updated_at = Utc::now();
    }
}
