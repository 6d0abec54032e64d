// ==========================================
// BOM跟踪系统 - 仓储层
// ==========================================
// 职责: 持久化接口定义与内存实现
// 说明: 托管文档库（CRUD/查询/实时订阅）为外部协作方，
//       核心层只消费注入的写入回调与已物化的快照数组
// ==========================================

pub mod document_store;
pub mod error;
pub mod memory;

pub use document_store::DocumentLinkWriter;
pub use error::{RepositoryError, RepositoryResult};
pub use memory::{InMemoryDocumentStore, LinkWriteRecord};
