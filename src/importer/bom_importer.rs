// ==========================================
// BOM跟踪系统 - BOM导入编排器
// ==========================================
// 职责: 文件/文本 → 提取 → BomItem 列表的端到端编排
// 红线: 提取服务的任何失败（网络/超时/响应畸形）都转为
//       本地关键词兜底的降级结果，不得让用户工作流硬失败
// 红线: 仅文件本身不可读/格式不支持时才向调用方报错
// ==========================================

use crate::domain::item::{BomItem, RawBomRecord};
use crate::domain::types::{ItemStatus, ItemType};
use crate::importer::error::ImportResult;
use crate::importer::extraction::{
    ExtractedLineItem, ExtractionHints, ExtractionService,
};
use crate::importer::fallback::KeywordCategorizer;
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// ExtractionSource - 条目来源标记
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// 外部提取服务成功返回
    LlmService,
    /// 本地关键词兜底
    KeywordFallback,
    /// 文件含结构化表头，直接列映射（未经提取）
    DirectMapping,
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub items: Vec<BomItem>,
    pub source: ExtractionSource,
    /// 降级标记（提取服务未生效，结果置信度偏低）
    pub degraded: bool,
    pub warnings: Vec<String>,
}

// ==========================================
// BomImporter
// ==========================================
pub struct BomImporter {
    extraction: Arc<dyn ExtractionService>,
    /// 提取服务最大尝试次数（≥1；全部失败后走兜底）
    max_attempts: u32,
}

/// 结构化表头的名称列候选（命中即走直接列映射）
const NAME_HEADERS: &[&str] = &["名称", "物料名称", "条目名称", "name", "item", "description"];
const QUANTITY_HEADERS: &[&str] = &["数量", "quantity", "qty"];
const CATEGORY_HEADERS: &[&str] = &["类别", "分类", "category", "type"];
const VENDOR_HEADERS: &[&str] = &["供应商", "vendor", "supplier"];
const STATUS_HEADERS: &[&str] = &["状态", "status"];

impl BomImporter {
    pub fn new(extraction: Arc<dyn ExtractionService>, max_attempts: u32) -> Self {
        Self {
            extraction,
            max_attempts: max_attempts.max(1),
        }
    }

    /// 按提取服务配置构造（重试次数取自配置）
    pub fn from_config(
        extraction: Arc<dyn ExtractionService>,
        config: &crate::config::ExtractionConfig,
    ) -> Self {
        Self::new(extraction, config.max_attempts)
    }

    // ==========================================
    // 文本导入（永不失败）
    // ==========================================

    /// 从非结构化文本导入条目
    ///
    /// 先尝试外部提取服务（最多 max_attempts 次）；结构畸形的
    /// 响应视同失败。全部失败后转本地关键词兜底并打降级标记。
    pub async fn import_from_text(&self, text: &str, hints: &ExtractionHints) -> ImportOutcome {
        let mut warnings = Vec::new();

        for attempt in 1..=self.max_attempts {
            match self.extraction.extract_line_items(text, hints).await {
                Ok(extracted) => {
                    match Self::validate_extracted(&extracted) {
                        Ok(()) => {
                            tracing::info!(
                                attempt,
                                item_count = extracted.len(),
                                "提取服务返回有效结果"
                            );
                            return ImportOutcome {
                                items: Self::materialize(extracted),
                                source: ExtractionSource::LlmService,
                                degraded: false,
                                warnings,
                            };
                        }
                        Err(reason) => {
                            tracing::warn!(attempt, reason, "提取服务响应畸形");
                            warnings.push(format!("第{}次提取响应畸形: {}", attempt, reason));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "提取服务调用失败");
                    warnings.push(format!("第{}次提取失败: {}", attempt, e));
                }
            }
        }

        // 兜底: 本地关键词归类
        tracing::warn!(
            attempts = self.max_attempts,
            "提取服务不可用，转本地关键词兜底"
        );
        warnings.push("提取服务不可用，结果由本地关键词归类生成".to_string());

        ImportOutcome {
            items: Self::materialize(KeywordCategorizer::extract(text)),
            source: ExtractionSource::KeywordFallback,
            degraded: true,
            warnings,
        }
    }

    // ==========================================
    // 文件导入
    // ==========================================

    /// 从 CSV/Excel 文件导入条目
    ///
    /// 文件含可识别的名称列 → 直接列映射（确定性，不经提取）；
    /// 否则展平为文本走 import_from_text 的提取/兜底路径。
    /// 仅文件读取/格式错误会返回 Err。
    pub async fn import_from_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        hints: &ExtractionHints,
    ) -> ImportResult<ImportOutcome> {
        let records = UniversalFileParser.parse(file_path.as_ref())?;

        if let Some(name_header) = Self::find_header(&records, NAME_HEADERS) {
            tracing::info!(
                file = %file_path.as_ref().display(),
                row_count = records.len(),
                "识别到结构化表头，走直接列映射"
            );
            return Ok(Self::import_structured(&records, &name_header));
        }

        // 无结构化表头: 展平为文本交给提取路径
        let text = UniversalFileParser::flatten_to_text(&records);
        Ok(self.import_from_text(&text, hints).await)
    }

    /// 批量文本导入（各文本独立提取，互不影响）
    pub async fn batch_import(
        &self,
        texts: &[String],
        hints: &ExtractionHints,
    ) -> Vec<ImportOutcome> {
        let futures = texts.iter().map(|text| self.import_from_text(text, hints));
        futures::future::join_all(futures).await
    }

    // ==========================================
    // 内部实现
    // ==========================================

    /// 提取结果整体校验: 任一条目结构非法即判畸形
    fn validate_extracted(extracted: &[ExtractedLineItem]) -> Result<(), String> {
        if extracted.is_empty() {
            return Err("提取结果为空".to_string());
        }
        for (idx, item) in extracted.iter().enumerate() {
            if !item.is_well_formed() {
                return Err(format!(
                    "第{}条非法: name={:?}, quantity={}, confidence={}",
                    idx + 1,
                    item.name,
                    item.quantity,
                    item.confidence
                ));
            }
        }
        Ok(())
    }

    /// 提取行 → BomItem（未下单初始态，分配新ID）
    fn materialize(extracted: Vec<ExtractedLineItem>) -> Vec<BomItem> {
        extracted
            .into_iter()
            .map(|line| {
                let mut item = BomItem::new(
                    Uuid::new_v4().to_string(),
                    line.name.trim(),
                    ItemType::Component,
                );
                item.quantity = line.quantity;
                item.category = line.category_guess;
                item
            })
            .collect()
    }

    /// 在表头集合中查找第一个命中的候选列名（大小写不敏感）
    fn find_header(records: &[RawRow], candidates: &[&str]) -> Option<String> {
        let first = records.first()?;
        for candidate in candidates {
            if let Some(key) = first
                .keys()
                .find(|k| k.to_lowercase() == candidate.to_lowercase())
            {
                return Some(key.clone());
            }
        }
        None
    }

    /// 结构化行的直接列映射（确定性路径，置信度概念不适用）
    fn import_structured(records: &[RawRow], name_header: &str) -> ImportOutcome {
        let quantity_header = Self::find_header(records, QUANTITY_HEADERS);
        let category_header = Self::find_header(records, CATEGORY_HEADERS);
        let vendor_header = Self::find_header(records, VENDOR_HEADERS);
        let status_header = Self::find_header(records, STATUS_HEADERS);

        let mut warnings = Vec::new();
        let mut raw_records = Vec::new();

        for (idx, row) in records.iter().enumerate() {
            let row_no = idx + 2; // 表头占第1行
            let name = row.get(name_header).map(|s| s.trim().to_string());

            if name.as_deref().map_or(true, str::is_empty) {
                warnings.push(format!("第{}行名称为空，已跳过", row_no));
                continue;
            }

            let quantity = quantity_header
                .as_deref()
                .and_then(|h| row.get(h))
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|q| q.is_finite() && *q > 0.0);

            raw_records.push(RawBomRecord {
                row_no,
                name,
                quantity,
                category: Self::non_empty(row, category_header.as_deref()),
                vendor_name: Self::non_empty(row, vendor_header.as_deref()),
                status_raw: Self::non_empty(row, status_header.as_deref()),
            });
        }

        let items = raw_records.into_iter().map(Self::from_raw_record).collect();

        ImportOutcome {
            items,
            source: ExtractionSource::DirectMapping,
            degraded: false,
            warnings,
        }
    }

    fn non_empty(row: &RawRow, header: Option<&str>) -> Option<String> {
        header
            .and_then(|h| row.get(h))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 中间结构 → BomItem（状态文本经变体库解码）
    fn from_raw_record(record: RawBomRecord) -> BomItem {
        let name = record.name.unwrap_or_default();
        // 服务类条目靠类别文本识别
        let item_type = match record.category.as_deref() {
            Some(cat) if cat.contains("服务") || cat.to_lowercase().contains("service") => {
                ItemType::Service
            }
            _ => ItemType::Component,
        };

        let mut item = BomItem::new(Uuid::new_v4().to_string(), name, item_type);
        item.quantity = record.quantity.unwrap_or(1.0);
        item.category = record.category;
        if let Some(status_raw) = record.status_raw.as_deref() {
            item.status = ItemStatus::from_raw_str(status_raw);
        }
        if let Some(vendor_name) = record.vendor_name {
            item.finalized_vendor = Some(crate::domain::item::FinalizedVendor {
                vendor_id: None,
                name: vendor_name,
                lead_time: None,
                contact: None,
            });
        }
        item
    }
}
