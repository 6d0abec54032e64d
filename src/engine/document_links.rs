// ==========================================
// BOM跟踪系统 - 文档关联同步器
// ==========================================
// 职责: 维护 "条目 ↔ 激活PO文档" 的 1:1 关联不变式
// 红线: 两次写入严格顺序执行（先新文档后旧文档），
//       第一次失败必须中止第二次并向上传播
// 红线: 不修改入参快照；返回反映两次变更的新数组
// 说明: 不提供跨文档事务回滚——第二次写入失败时新文档
//       关联已远端生效，需要原子性的调用方在上层补偿
// ==========================================

use crate::domain::document::VendorDocument;
use crate::domain::types::DocumentType;
use crate::repository::document_store::DocumentLinkWriter;
use crate::repository::error::RepositoryResult;

// ==========================================
// SyncPoLinksRequest - 同步请求
// ==========================================
#[derive(Debug, Clone)]
pub struct SyncPoLinksRequest<'a> {
    pub item_id: &'a str,
    pub new_document_id: &'a str,
    /// 原PO文档（条目此前挂靠的文档；缺失或与新文档相同时跳过摘除）
    pub previous_document_id: Option<&'a str>,
}

// ==========================================
// DeletionCheck - 文档删除守卫结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCheck {
    pub allowed: bool,
    /// 阻止删除的条目ID（供界面提示）
    pub blocking_item_ids: Vec<String>,
}

// ==========================================
// DocumentLinkSynchronizer
// ==========================================
pub struct DocumentLinkSynchronizer;

impl DocumentLinkSynchronizer {
    /// 同步PO文档关联（条目改挂新PO时调用）
    ///
    /// # 规则
    /// 1. 新文档关联列表 ∪ {item_id}（已存在则不重复追加，保持既有顺序）
    /// 2. 先写新文档并等待完成——这是权威写入
    /// 3. previous_document_id 存在、≠ 新文档、且在快照中时，从旧文档
    ///    列表摘除 item_id 并写入旧文档；缺失、相同或不在快照中则
    ///    完全跳过（不产生冗余或破坏性写入）
    ///
    /// # 保证
    /// - 每个受影响文档恰好一次写入（仅挂靠为一次，另有摘除为两次）
    /// - 第一次写入失败 → 传播错误，第二次写入不执行
    /// - 返回的新数组同时反映两处变更，入参 documents 保持原样
    pub async fn sync_po_document_links(
        request: SyncPoLinksRequest<'_>,
        documents: &[VendorDocument],
        writer: &dyn DocumentLinkWriter,
    ) -> RepositoryResult<Vec<VendorDocument>> {
        let SyncPoLinksRequest {
            item_id,
            new_document_id,
            previous_document_id,
        } = request;

        let mut updated: Vec<VendorDocument> = documents.to_vec();

        // 1. 新文档: 集合并集追加
        let new_links = {
            let current = documents
                .iter()
                .find(|d| d.id == new_document_id)
                .map(|d| d.linked_bom_item_ids.clone())
                .unwrap_or_default();
            Self::union_append(current, item_id)
        };

        // 2. 权威写入: 必须先于旧文档摘除完成
        writer
            .replace_linked_items(new_document_id, &new_links)
            .await?;
        tracing::info!(
            item_id,
            document_id = new_document_id,
            link_count = new_links.len(),
            "PO文档关联已写入"
        );
        Self::apply_links(&mut updated, new_document_id, new_links);

        // 3. 旧文档摘除（存在且与新文档不同才执行）
        //    旧文档不在快照中时整体跳过: 以空列表盲写会抹掉
        //    该文档远端已有的全部关联
        if let Some(previous_id) =
            previous_document_id.filter(|prev| *prev != new_document_id)
        {
            let previous_doc = documents.iter().find(|d| d.id == previous_id);
            match previous_doc {
                Some(doc) => {
                    let filtered: Vec<String> = doc
                        .linked_bom_item_ids
                        .iter()
                        .filter(|id| id.as_str() != item_id)
                        .cloned()
                        .collect();

                    writer.replace_linked_items(previous_id, &filtered).await?;
                    tracing::info!(
                        item_id,
                        document_id = previous_id,
                        link_count = filtered.len(),
                        "原PO文档关联已摘除"
                    );
                    Self::apply_links(&mut updated, previous_id, filtered);
                }
                None => {
                    tracing::warn!(
                        item_id,
                        document_id = previous_id,
                        "原PO文档不在快照中，跳过摘除写入"
                    );
                }
            }
        }

        Ok(updated)
    }

    /// 文档删除守卫（校验性质，文档库不强制）
    ///
    /// # 规则
    /// - OUTGOING_PO / VENDOR_INVOICE 仍有活跃条目关联 → 不允许删除
    /// - 其余类型或无关联 → 允许
    pub fn can_delete_document(document: &VendorDocument) -> DeletionCheck {
        let guarded = matches!(
            document.doc_type,
            DocumentType::OutgoingPo | DocumentType::VendorInvoice
        );

        if guarded && document.has_active_links() {
            DeletionCheck {
                allowed: false,
                blocking_item_ids: document.linked_bom_item_ids.clone(),
            }
        } else {
            DeletionCheck {
                allowed: true,
                blocking_item_ids: Vec::new(),
            }
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 集合并集追加: 已存在则原样返回，否则尾部追加（保持既有顺序）
    fn union_append(mut links: Vec<String>, item_id: &str) -> Vec<String> {
        if !links.iter().any(|id| id == item_id) {
            links.push(item_id.to_string());
        }
        links
    }

    /// 将新关联列表落位到返回数组中的对应文档
    fn apply_links(documents: &mut [VendorDocument], document_id: &str, links: Vec<String>) {
        if let Some(doc) = documents.iter_mut().find(|d| d.id == document_id) {
            doc.linked_bom_item_ids = links;
        }
    }
}
