// ==========================================
// BOM跟踪系统 - 本地关键词归类兜底
// ==========================================
// 职责: 提取服务不可用时的本地降级路径
// 红线: 永不失败——任何输入都产出结构合法的条目列表
// 说明: 置信度固定为低值，调用方据此向用户提示降级结果
// ==========================================

use crate::importer::extraction::ExtractedLineItem;

/// 降级结果的统一置信度（关键词匹配不具备语义理解能力）
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// 关键词→类别 映射表（按声明顺序匹配，先命中先得）
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("管材", &["管", "pipe", "tube"]),
    ("阀门", &["阀", "valve"]),
    ("泵类", &["泵", "pump"]),
    ("电气", &["电缆", "电机", "开关", "cable", "motor", "switch"]),
    ("仪表", &["表", "传感", "gauge", "sensor", "meter"]),
    ("紧固件", &["螺栓", "螺母", "垫片", "bolt", "nut", "gasket", "screw"]),
    ("钢材", &["钢", "steel", "plate", "beam"]),
    ("服务", &["安装", "调试", "检测", "install", "commission", "inspect"]),
];

// ==========================================
// KeywordCategorizer
// ==========================================
pub struct KeywordCategorizer;

impl KeywordCategorizer {
    /// 从纯文本逐行提取条目（每个非空行一条）
    ///
    /// 行格式约定: `名称` 或 `名称,数量`（数量不可解析时取 1.0）
    pub fn extract(text: &str) -> Vec<ExtractedLineItem> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::parse_line)
            .collect()
    }

    /// 单行解析: 末段若为数字则作数量，其余拼为名称
    fn parse_line(line: &str) -> ExtractedLineItem {
        let mut parts: Vec<&str> = line
            .split([',', '，', '\t'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let quantity = match parts.last().and_then(|last| last.parse::<f64>().ok()) {
            Some(q) if q.is_finite() && q > 0.0 => {
                parts.pop();
                q
            }
            _ => 1.0,
        };

        let name = if parts.is_empty() {
            line.to_string()
        } else {
            parts.join(" ")
        };

        ExtractedLineItem {
            category_guess: Self::categorize(&name),
            name,
            quantity,
            confidence: FALLBACK_CONFIDENCE,
        }
    }

    /// 名称→类别 关键词匹配（大小写不敏感，无命中返回 None）
    pub fn categorize(name: &str) -> Option<String> {
        let lowered = name.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return Some((*category).to_string());
            }
        }
        None
    }
}
