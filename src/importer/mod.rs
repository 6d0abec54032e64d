// ==========================================
// BOM跟踪系统 - 导入模块
// ==========================================
// 职责: 文件解析 / 外部提取 / 本地兜底 / 导入编排
// ==========================================

pub mod bom_importer;
pub mod error;
pub mod extraction;
pub mod fallback;
pub mod file_parser;

pub use bom_importer::{BomImporter, ExtractionSource, ImportOutcome};
pub use error::{ImportError, ImportResult};
pub use extraction::{
    ExtractedLineItem, ExtractionError, ExtractionHints, ExtractionResult, ExtractionService,
};
pub use fallback::{KeywordCategorizer, FALLBACK_CONFIDENCE};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, UniversalFileParser};
