// ==========================================
// BOM跟踪系统 - 到货状态判定引擎
// ==========================================
// 职责: 按条目生命周期字段 + 当前日期派生到货状态
// 红线: 派生视图，不落库；today 由调用方注入，测试可固定时钟
// 红线: 所有判定必须输出 reason
// ==========================================

use crate::domain::item::BomItem;
use crate::domain::types::{InwardStatus, ItemStatus, ItemType};
use chrono::NaiveDate;

// ==========================================
// InwardStatusEngine - 纯函数工具类
// ==========================================
pub struct InwardStatusEngine;

impl InwardStatusEngine {
    /// "即将到货" 窗口（含两端: 今天与第 7 天均算即将到货）
    pub const ARRIVING_SOON_WINDOW_DAYS: i64 = 7;

    /// 判定到货状态
    ///
    /// # 规则（顺序判定）
    /// 1. SERVICE 类条目 或 status=NOT_ORDERED → NOT_ORDERED
    /// 2. status=RECEIVED → RECEIVED
    /// 3. expected_arrival 缺失 → ON_TRACK（无目标日期不可能逾期）
    /// 4. days_until = expected_arrival - today:
    ///    - < 0        → OVERDUE
    ///    - 0 ..= 7    → ARRIVING_SOON
    ///    - > 7        → ON_TRACK
    pub fn classify(item: &BomItem, today: NaiveDate) -> InwardStatus {
        Self::classify_with_reason(item, today).0
    }

    /// 判定到货状态并输出决策原因
    pub fn classify_with_reason(item: &BomItem, today: NaiveDate) -> (InwardStatus, String) {
        // 规则 1: 服务类条目不参与到货跟踪
        if item.item_type == ItemType::Service {
            return (InwardStatus::NotOrdered, "SERVICE: 服务类条目不参与到货跟踪".to_string());
        }
        if item.status == ItemStatus::NotOrdered {
            return (InwardStatus::NotOrdered, "NOT_ORDERED: 尚未下单".to_string());
        }

        // 规则 2: 已收货为终态
        if item.status == ItemStatus::Received {
            return (InwardStatus::Received, "RECEIVED: 已收货".to_string());
        }

        // 规则 3: 无预计到货日期
        let Some(expected) = item.expected_arrival else {
            return (
                InwardStatus::OnTrack,
                "ON_TRACK: expected_arrival 缺失，按在途正常处理".to_string(),
            );
        };

        // 规则 4: 按距预计到货天数分档
        let days_until = Self::days_until_arrival(expected, today);
        if days_until < 0 {
            (
                InwardStatus::Overdue,
                format!("OVERDUE: expected_arrival={} 已过期 {} 天", expected, -days_until),
            )
        } else if days_until <= Self::ARRIVING_SOON_WINDOW_DAYS {
            (
                InwardStatus::ArrivingSoon,
                format!("ARRIVING_SOON: 距预计到货 {} 天", days_until),
            )
        } else {
            (
                InwardStatus::OnTrack,
                format!("ON_TRACK: 距预计到货 {} 天", days_until),
            )
        }
    }

    /// 便捷入口: 以系统时钟的本地日期为 today
    pub fn classify_now(item: &BomItem) -> InwardStatus {
        Self::classify(item, chrono::Local::now().date_naive())
    }

    /// 距预计到货天数（日粒度差值，同日为 0）
    ///
    /// 两侧均为 NaiveDate，天然对齐到当日零点；
    /// 无论函数在一天中何时调用，同日比较都精确为 0。
    pub fn days_until_arrival(expected_arrival: NaiveDate, today: NaiveDate) -> i64 {
        expected_arrival.signed_duration_since(today).num_days()
    }
}
