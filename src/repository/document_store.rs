// ==========================================
// BOM跟踪系统 - 文档持久化接口
// ==========================================
// 职责: 定义文档关联写入接口（不包含实现）
// 实现者: 外部文档库适配器 / InMemoryDocumentStore（测试与工具）
// ==========================================

use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// DocumentLinkWriter Trait
// ==========================================
// 用途: 文档关联同步器的持久化出口
#[async_trait]
pub trait DocumentLinkWriter: Send + Sync {
    /// 以完整替换方式写入文档的BOM条目关联列表
    ///
    /// # 参数
    /// - document_id: 目标文档ID
    /// - bom_item_ids: 新的关联列表（完整替换，不做合并）
    ///
    /// # 返回
    /// - Ok(()): 写入成功
    /// - Err(RepositoryError): 写入失败（不得静默丢弃）
    async fn replace_linked_items(
        &self,
        document_id: &str,
        bom_item_ids: &[String],
    ) -> RepositoryResult<()>;
}
