// ==========================================
// BOM跟踪系统 - 到货汇总引擎
// ==========================================
// 职责: 跟踪看板的统计口径、过滤与排序
// 红线: 无状态引擎，所有方法都是纯函数；不修改入参切片
// ==========================================
// 口径说明: "已下单" 头条计数 = 在途正常 + 即将到货 + 已逾期
// （非终态的下单状态统一上卷，同时保留分项计数）
// ==========================================

use crate::domain::item::BomItem;
use crate::domain::types::{InwardStatus, ItemStatus};
use crate::engine::inward_status::InwardStatusEngine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// InwardStats - 看板统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InwardStats {
    pub total: usize,
    pub not_ordered: usize,
    pub ordered: usize, // 上卷口径: on_track + arriving_soon + overdue
    pub on_track: usize,
    pub arriving_soon: usize,
    pub overdue: usize,
    pub received: usize,
}

// ==========================================
// TrackingRow - 跟踪表行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRow {
    pub item: BomItem,
    pub inward_status: InwardStatus,
    pub days_until_arrival: Option<i64>, // expected_arrival 缺失时为 None
}

// ==========================================
// InwardSummaryEngine - 到货汇总引擎
// ==========================================
pub struct InwardSummaryEngine;

impl InwardSummaryEngine {
    /// 生成看板统计
    ///
    /// # 参数
    /// - items: 全量条目快照
    /// - today: 当前日期（注入时钟）
    pub fn build_stats(items: &[BomItem], today: NaiveDate) -> InwardStats {
        let mut stats = InwardStats {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            match InwardStatusEngine::classify(item, today) {
                InwardStatus::NotOrdered => stats.not_ordered += 1,
                InwardStatus::OnTrack => stats.on_track += 1,
                InwardStatus::ArrivingSoon => stats.arriving_soon += 1,
                InwardStatus::Overdue => stats.overdue += 1,
                InwardStatus::Received => stats.received += 1,
            }
        }

        stats.ordered = stats.on_track + stats.arriving_soon + stats.overdue;
        stats
    }

    /// 生成跟踪表行（过滤 + 排序）
    ///
    /// # 规则
    /// 1. 仅收录原始状态为 ORDERED / RECEIVED 的条目
    ///    （未下单条目即便被状态过滤选中也不进入跟踪表）
    /// 2. status_filter 提供时，先按派生状态过滤再排序
    /// 3. 排序（稳定）:
    ///    - 已逾期条目恒排最前
    ///    - 其余按 expected_arrival 升序
    ///    - 无 expected_arrival 的条目排在有日期条目之后，彼此保持原始相对顺序
    pub fn tracking_rows(
        items: &[BomItem],
        status_filter: Option<InwardStatus>,
        today: NaiveDate,
    ) -> Vec<TrackingRow> {
        let mut rows: Vec<TrackingRow> = items
            .iter()
            .filter(|item| {
                matches!(item.status, ItemStatus::Ordered | ItemStatus::Received)
            })
            .map(|item| {
                let inward_status = InwardStatusEngine::classify(item, today);
                let days_until_arrival = item
                    .expected_arrival
                    .map(|expected| InwardStatusEngine::days_until_arrival(expected, today));
                TrackingRow {
                    item: item.clone(),
                    inward_status,
                    days_until_arrival,
                }
            })
            .filter(|row| match status_filter {
                Some(wanted) => row.inward_status == wanted,
                None => true,
            })
            .collect();

        // 过滤后的子集内仍然保持"逾期优先"排序
        rows.sort_by(Self::compare_rows);
        rows
    }

    /// 跟踪表排序比较器（配合稳定排序使用）
    fn compare_rows(a: &TrackingRow, b: &TrackingRow) -> Ordering {
        let a_overdue = a.inward_status == InwardStatus::Overdue;
        let b_overdue = b.inward_status == InwardStatus::Overdue;

        // 逾期恒在最前
        match b_overdue.cmp(&a_overdue) {
            Ordering::Equal => {}
            other => return other,
        }

        // 按预计到货升序，无日期者居后（彼此等价，稳定排序保持原始顺序）
        match (a.item.expected_arrival, b.item.expected_arrival) {
            (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
