// ==========================================
// BOM跟踪系统 - 预计到货日计算
// ==========================================
// 职责: 下单日期 + 交期天数 → 预计到货日期
// 红线: 日历正确（跨月/跨年/闰年），不涉及时区换算
// ==========================================

use chrono::{Duration, NaiveDate};

/// 文档库日期字段的 ISO 格式
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// ExpectedArrivalCalculator - 纯函数工具类
// ==========================================
pub struct ExpectedArrivalCalculator;

impl ExpectedArrivalCalculator {
    /// 计算预计到货日期
    ///
    /// # 规则
    /// - expected_arrival = order_date + lead_time_days（日历天）
    /// - lead_time_days = 0 → 返回下单日期本身
    pub fn calculate(order_date: NaiveDate, lead_time_days: u32) -> NaiveDate {
        order_date + Duration::days(lead_time_days as i64)
    }

    /// ISO 字符串版本（文档库字段互通用）
    ///
    /// # 返回
    /// - Some(String): "YYYY-MM-DD"
    /// - None: 入参不是合法 ISO 日期
    pub fn calculate_iso(order_date_iso: &str, lead_time_days: u32) -> Option<String> {
        let order_date =
            NaiveDate::parse_from_str(order_date_iso.trim(), ISO_DATE_FORMAT).ok()?;
        Some(
            Self::calculate(order_date, lead_time_days)
                .format(ISO_DATE_FORMAT)
                .to_string(),
        )
    }
}
