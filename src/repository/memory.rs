// ==========================================
// BOM跟踪系统 - 内存文档库
// ==========================================
// 职责: DocumentLinkWriter 的内存实现（测试与离线工具用）
// 说明: 带写入审计序列，可回放验证同步器的写入顺序
// ==========================================

use crate::domain::document::VendorDocument;
use crate::repository::document_store::DocumentLinkWriter;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// 写入审计记录: (document_id, 写入的完整关联列表)
pub type LinkWriteRecord = (String, Vec<String>);

// ==========================================
// InMemoryDocumentStore
// ==========================================
pub struct InMemoryDocumentStore {
    links: Mutex<HashMap<String, Vec<String>>>,
    write_log: Mutex<Vec<LinkWriteRecord>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            write_log: Mutex::new(Vec::new()),
        }
    }

    /// 从文档快照初始化关联表
    pub fn from_documents(documents: &[VendorDocument]) -> Self {
        let store = Self::new();
        if let Ok(mut links) = store.links.lock() {
            for doc in documents {
                links.insert(doc.id.clone(), doc.linked_bom_item_ids.clone());
            }
        }
        store
    }

    /// 读取某文档当前的关联列表
    pub fn linked_items(&self, document_id: &str) -> Option<Vec<String>> {
        self.links.lock().ok()?.get(document_id).cloned()
    }

    /// 写入审计序列快照（按写入先后排列）
    pub fn write_log(&self) -> Vec<LinkWriteRecord> {
        self.write_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLinkWriter for InMemoryDocumentStore {
    async fn replace_linked_items(
        &self,
        document_id: &str,
        bom_item_ids: &[String],
    ) -> RepositoryResult<()> {
        let mut links = self.links.lock().map_err(|e| {
            RepositoryError::InternalError(format!("锁获取失败: {}", e))
        })?;
        links.insert(document_id.to_string(), bom_item_ids.to_vec());

        self.write_log
            .lock()
            .map_err(|e| RepositoryError::InternalError(format!("锁获取失败: {}", e)))?
            .push((document_id.to_string(), bom_item_ids.to_vec()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DocumentType;

    #[tokio::test]
    async fn test_replace_is_full_overwrite() {
        let store = InMemoryDocumentStore::new();
        store
            .replace_linked_items("doc-1", &["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        store
            .replace_linked_items("doc-1", &["c".to_string()])
            .await
            .unwrap();

        // 完整替换，不做合并
        assert_eq!(store.linked_items("doc-1"), Some(vec!["c".to_string()]));
        assert_eq!(store.write_log().len(), 2);
    }

    #[tokio::test]
    async fn test_from_documents_snapshot() {
        let mut doc = VendorDocument::new("doc-1", DocumentType::OutgoingPo);
        doc.linked_bom_item_ids = vec!["item-1".to_string()];

        let store = InMemoryDocumentStore::from_documents(&[doc]);
        assert_eq!(
            store.linked_items("doc-1"),
            Some(vec!["item-1".to_string()])
        );
        // 初始化不产生写入审计
        assert!(store.write_log().is_empty());
    }
}
