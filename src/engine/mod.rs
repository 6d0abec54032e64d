// ==========================================
// BOM跟踪系统 - 核心引擎层
// ==========================================
// 职责: 纯计算引擎（交期解析/到货推算/状态判定/汇总/文档关联）
// 红线: 引擎不直接读系统时钟（classify_now 便捷入口除外），
//       "今天"由调用方注入，保证可测性
// ==========================================

pub mod arrival;
pub mod document_links;
pub mod inward_status;
pub mod inward_summary;
pub mod lead_time;
pub mod order_actions;

pub use arrival::{ExpectedArrivalCalculator, ISO_DATE_FORMAT};
pub use document_links::{DeletionCheck, DocumentLinkSynchronizer, SyncPoLinksRequest};
pub use inward_status::InwardStatusEngine;
pub use inward_summary::{InwardStats, InwardSummaryEngine, TrackingRow};
pub use lead_time::LeadTimeParser;
pub use order_actions::OrderActions;
