// ==========================================
// BOM跟踪系统 - 配置层
// ==========================================
// 职责: 应用配置管理（提取服务参数、界面语言）
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod extraction_config;

pub use config_manager::{AppConfig, ConfigManager, ExtractionConfigReader};
pub use extraction_config::ExtractionConfig;
