// ==========================================
// 文档关联同步集成测试
// ==========================================
// 职责: 验证 "条目改挂PO文档" 的写入顺序、失败传播与快照语义
// 工具: 带失败注入的录制写入器
// ==========================================

mod helpers;

use async_trait::async_trait;
use bom_tracker::engine::{DocumentLinkSynchronizer, SyncPoLinksRequest};
use bom_tracker::repository::{
    DocumentLinkWriter, InMemoryDocumentStore, RepositoryError, RepositoryResult,
};
use helpers::test_data_builder::po_document;
use std::sync::Mutex;

// ==========================================
// 录制写入器（可注入指定文档的写入失败）
// ==========================================

struct RecordingWriter {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    fail_on_document: Option<String>,
}

impl RecordingWriter {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_document: None,
        }
    }

    fn failing_on(document_id: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_document: Some(document_id.to_string()),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentLinkWriter for RecordingWriter {
    async fn replace_linked_items(
        &self,
        document_id: &str,
        bom_item_ids: &[String],
    ) -> RepositoryResult<()> {
        if self.fail_on_document.as_deref() == Some(document_id) {
            return Err(RepositoryError::WriteFailed {
                document_id: document_id.to_string(),
                message: "注入的写入失败".to_string(),
            });
        }
        self.calls
            .lock()
            .unwrap()
            .push((document_id.to_string(), bom_item_ids.to_vec()));
        Ok(())
    }
}

fn request<'a>(
    item_id: &'a str,
    new_document_id: &'a str,
    previous_document_id: Option<&'a str>,
) -> SyncPoLinksRequest<'a> {
    SyncPoLinksRequest {
        item_id,
        new_document_id,
        previous_document_id,
    }
}

// ==========================================
// 改挂: 两次写入，新文档先行
// ==========================================

#[tokio::test]
async fn test_reassign_writes_new_document_before_old() {
    let documents = vec![
        po_document("doc-old", &["item-1", "item-3"]),
        po_document("doc-new", &["item-2"]),
    ];
    let writer = RecordingWriter::new();

    let updated = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-old")),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    // 恰好两次写入，顺序固定: 先新后旧
    let calls = writer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        (
            "doc-new".to_string(),
            vec!["item-2".to_string(), "item-1".to_string()]
        )
    );
    assert_eq!(
        calls[1],
        ("doc-old".to_string(), vec!["item-3".to_string()])
    );

    // 返回数组同时反映两处变更
    let new_doc = updated.iter().find(|d| d.id == "doc-new").unwrap();
    assert_eq!(new_doc.linked_bom_item_ids, vec!["item-2", "item-1"]);
    let old_doc = updated.iter().find(|d| d.id == "doc-old").unwrap();
    assert_eq!(old_doc.linked_bom_item_ids, vec!["item-3"]);
}

#[tokio::test]
async fn test_attach_only_single_write() {
    let documents = vec![po_document("doc-new", &[])];
    let writer = RecordingWriter::new();

    DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", None),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    let calls = writer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "doc-new");
    assert_eq!(calls[0].1, vec!["item-1".to_string()]);
}

#[tokio::test]
async fn test_same_previous_document_skips_detach_write() {
    // 改挂到同一文档: 不产生冗余的摘除写入
    let documents = vec![po_document("doc-1", &["item-1"])];
    let writer = RecordingWriter::new();

    DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-1", Some("doc-1")),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    let calls = writer.calls();
    assert_eq!(calls.len(), 1);
    // 条目已在列表中: 并集追加不重复
    assert_eq!(calls[0].1, vec!["item-1".to_string()]);
}

#[tokio::test]
async fn test_already_linked_item_not_duplicated() {
    let documents = vec![po_document("doc-new", &["item-1", "item-2"])];
    let writer = RecordingWriter::new();

    let updated = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", None),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    let doc = updated.iter().find(|d| d.id == "doc-new").unwrap();
    assert_eq!(doc.linked_bom_item_ids, vec!["item-1", "item-2"]);
}

// ==========================================
// 失败传播: 第一次写入失败中止第二次
// ==========================================

#[tokio::test]
async fn test_first_write_failure_aborts_second() {
    let documents = vec![
        po_document("doc-old", &["item-1"]),
        po_document("doc-new", &[]),
    ];
    let writer = RecordingWriter::failing_on("doc-new");

    let result = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-old")),
        &documents,
        &writer,
    )
    .await;

    assert!(matches!(
        result,
        Err(RepositoryError::WriteFailed { ref document_id, .. }) if document_id == "doc-new"
    ));
    // 旧文档写入未被尝试
    assert!(writer.calls().is_empty());
}

#[tokio::test]
async fn test_second_write_failure_propagates_after_first_applied() {
    let documents = vec![
        po_document("doc-old", &["item-1"]),
        po_document("doc-new", &[]),
    ];
    let writer = RecordingWriter::failing_on("doc-old");

    let result = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-old")),
        &documents,
        &writer,
    )
    .await;

    assert!(result.is_err());
    // 新文档写入已经生效（不提供回滚）
    let calls = writer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "doc-new");
}

// ==========================================
// 快照语义
// ==========================================

#[tokio::test]
async fn test_input_documents_not_mutated() {
    let documents = vec![
        po_document("doc-old", &["item-1"]),
        po_document("doc-new", &[]),
    ];
    let snapshot = documents.clone();
    let writer = RecordingWriter::new();

    DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-old")),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    assert_eq!(documents, snapshot);
}

#[tokio::test]
async fn test_missing_previous_document_skips_detach_write() {
    // 旧文档不在快照中: 不得以空列表盲写抹掉其远端关联
    let documents = vec![po_document("doc-new", &[])];
    let writer = RecordingWriter::new();

    let updated = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-vanished")),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    // 仅新文档一次权威写入，无针对 doc-vanished 的写入
    let calls = writer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ("doc-new".to_string(), vec!["item-1".to_string()])
    );
    assert_eq!(updated.len(), 1);
}

#[tokio::test]
async fn test_missing_new_document_still_writes_item() {
    // 新文档不在快照中: 视其关联列表为空，仍然发出权威写入
    let documents = vec![po_document("doc-old", &["item-1"])];
    let writer = RecordingWriter::new();

    let updated = DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-absent", Some("doc-old")),
        &documents,
        &writer,
    )
    .await
    .unwrap();

    let calls = writer.calls();
    assert_eq!(calls[0], ("doc-absent".to_string(), vec!["item-1".to_string()]));
    // 快照中不存在的文档不会凭空出现在返回数组里
    assert!(updated.iter().all(|d| d.id != "doc-absent"));
    assert_eq!(updated.len(), 1);
}

// ==========================================
// 与内存文档库的端到端配合
// ==========================================

#[tokio::test]
async fn test_sync_against_in_memory_store() {
    let documents = vec![
        po_document("doc-old", &["item-1", "item-3"]),
        po_document("doc-new", &[]),
    ];
    let store = InMemoryDocumentStore::from_documents(&documents);

    DocumentLinkSynchronizer::sync_po_document_links(
        request("item-1", "doc-new", Some("doc-old")),
        &documents,
        &store,
    )
    .await
    .unwrap();

    assert_eq!(
        store.linked_items("doc-new"),
        Some(vec!["item-1".to_string()])
    );
    assert_eq!(
        store.linked_items("doc-old"),
        Some(vec!["item-3".to_string()])
    );
    // 审计序列: 先新后旧
    let log = store.write_log();
    assert_eq!(log[0].0, "doc-new");
    assert_eq!(log[1].0, "doc-old");
}
