// ==========================================
// 工业项目BOM采购与到货跟踪 - 核心库
// ==========================================
// 系统定位: 采购到货跟踪看板的纯计算核心（非财务结算口径）
// 技术栈: Rust + tokio
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 持久化接口
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DocumentType, InwardStatus, ItemStatus, ItemType};

// 领域实体
pub use domain::{BomItem, FinalizedVendor, RawBomRecord, VendorDocument};

// 引擎
pub use engine::{
    DeletionCheck, DocumentLinkSynchronizer, ExpectedArrivalCalculator, InwardStats,
    InwardStatusEngine, InwardSummaryEngine, LeadTimeParser, OrderActions, SyncPoLinksRequest,
    TrackingRow,
};

// 导入
pub use importer::{BomImporter, ExtractionHints, ExtractionService, ImportOutcome};

// 仓储接口
pub use repository::{DocumentLinkWriter, InMemoryDocumentStore, RepositoryError, RepositoryResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工业项目BOM到货跟踪系统";
