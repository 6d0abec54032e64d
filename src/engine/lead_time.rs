// ==========================================
// BOM跟踪系统 - 交期文本解析器
// ==========================================
// 职责: 将供应商报价交期自由文本（如 "2-3 weeks"）解析为天数
// 红线: 全函数，任何输入都不 panic；无法识别 → 0 天
// 红线: 规则为有序匹配表，先命中先生效，顺序不可调整
// ==========================================
//
// 已知表面怪癖（刻意保留，有测试钉死）:
// "10 working days" 命中的是周规则——日规则要求数字后紧跟
// day/days/d 完整词元，而周规则接受以 w 开头的任意词元，
// "working" 的 w 使其按 10 周 = 70 天解析。除非产品层
// 明确变更，否则不得"修复"此行为。

// ==========================================
// LeadTimeParser - 交期解析器（纯函数工具类）
// ==========================================
pub struct LeadTimeParser;

/// 匹配器签名: 输入已小写、已 trim 的文本，命中时返回天数
type MatcherFn = fn(&str) -> Option<u32>;

impl LeadTimeParser {
    /// 有序匹配表（先命中先生效）
    ///
    /// # 顺序
    /// 1. 日规则（完整词元 day/days/d）
    /// 2. 周规则（词元以 w 开头，支持 "2-3" 区间，取第一个数）× 7
    /// 3. 月规则（词元以 m 开头，支持区间，取第一个数）× 30
    /// 4. 纯整数规则（整段文本即整数，按天数解释）
    const MATCHERS: &'static [(&'static str, MatcherFn)] = &[
        ("days", Self::match_days),
        ("weeks", Self::match_weeks),
        ("months", Self::match_months),
        ("plain_integer", Self::match_plain_integer),
    ];

    /// 解析交期文本为天数
    ///
    /// # 参数
    /// - text: 自由文本（大小写不敏感，允许首尾空白、空串）
    ///
    /// # 返回
    /// - u32: 天数（无法识别 → 0）
    pub fn parse_to_days(text: &str) -> u32 {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return 0;
        }

        for (rule, matcher) in Self::MATCHERS {
            if let Some(days) = matcher(&normalized) {
                tracing::debug!(rule, days, text, "交期文本命中规则");
                return days;
            }
        }

        tracing::debug!(text, "交期文本无法识别，按 0 天处理");
        0
    }

    // ==========================================
    // 匹配器实现
    // ==========================================

    /// 日规则: <int> 后紧跟完整词元 day/days/d
    fn match_days(text: &str) -> Option<u32> {
        for (value, rest) in Self::number_occurrences(text) {
            let token = Self::leading_word(rest.trim_start());
            if token == "d" || token == "day" || token == "days" {
                return Some(value);
            }
        }
        None
    }

    /// 周规则: <int>(-<int>)? 后跟以 w 开头的词元（区间取第一个数）
    fn match_weeks(text: &str) -> Option<u32> {
        Self::match_ranged_unit(text, 'w').map(|n| n * 7)
    }

    /// 月规则: <int>(-<int>)? 后跟以 m 开头的词元（区间取第一个数）
    fn match_months(text: &str) -> Option<u32> {
        Self::match_ranged_unit(text, 'm').map(|n| n * 30)
    }

    /// 纯整数规则: 整段文本即为整数
    fn match_plain_integer(text: &str) -> Option<u32> {
        text.parse::<u32>().ok()
    }

    // ==========================================
    // 扫描辅助
    // ==========================================

    /// 带区间的单位匹配: 数字（可带 "-<int>" 区间后缀）+ 指定首字母的词元
    fn match_ranged_unit(text: &str, unit_initial: char) -> Option<u32> {
        for (value, rest) in Self::number_occurrences(text) {
            let after_range = Self::strip_range_suffix(rest);
            if Self::leading_word(after_range.trim_start())
                .starts_with(unit_initial)
            {
                return Some(value);
            }
        }
        None
    }

    /// 枚举文本中的每个极大数字串及其后续切片
    fn number_occurrences(text: &str) -> Vec<(u32, &str)> {
        let bytes = text.as_bytes();
        let mut occurrences = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                // 超长数字串解析溢出则跳过该串
                if let Ok(value) = text[start..i].parse::<u32>() {
                    occurrences.push((value, &text[i..]));
                }
            } else {
                i += 1;
            }
        }
        occurrences
    }

    /// 去掉 "-<int>" 区间后缀（允许连字符两侧空白）
    fn strip_range_suffix(rest: &str) -> &str {
        let trimmed = rest.trim_start();
        let Some(after_dash) = trimmed.strip_prefix('-') else {
            return rest;
        };
        let after_dash = after_dash.trim_start();
        let digits = after_dash
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dash.len());
        if digits == 0 {
            // "-" 后无数字，不构成区间
            return rest;
        }
        &after_dash[digits..]
    }

    /// 取开头的纯字母词元（遇非字母即止）
    fn leading_word(text: &str) -> &str {
        let end = text
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(text.len());
        &text[..end]
    }
}
