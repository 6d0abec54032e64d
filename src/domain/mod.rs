// ==========================================
// BOM跟踪系统 - 领域层
// ==========================================
// 职责: 实体与类型定义，不含业务规则
// ==========================================

pub mod document;
pub mod item;
pub mod types;

pub use document::VendorDocument;
pub use item::{BomItem, FinalizedVendor, RawBomRecord};
pub use types::{DocumentType, InwardStatus, ItemStatus, ItemType};
