// ==========================================
// BOM跟踪系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 文档库为外部协作方，此处仅定义注入式持久化回调的失败口径
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 持久化错误 =====
    #[error("持久化写入失败: document_id={document_id}, 原因: {message}")]
    WriteFailed {
        document_id: String,
        message: String,
    },

    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ===== 业务规则错误 =====
    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ===== 数据质量错误 =====
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
