// ==========================================
// BOM跟踪系统 - 配置管理器
// ==========================================
// 职责: 配置文件加载、默认路径解析、读取接口
// 存储: JSON 文件（默认 <config_dir>/bom-tracker/config.json）
// ==========================================

use crate::config::extraction_config::ExtractionConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

// ==========================================
// AppConfig - 应用配置全集
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// 界面语言（缺省跟随系统）
    #[serde(default)]
    pub locale: Option<String>,
}

// ==========================================
// ExtractionConfigReader Trait
// ==========================================
// 用途: 导入编排器的配置注入口（测试可用固定实现替换）
#[async_trait]
pub trait ExtractionConfigReader: Send + Sync {
    async fn get_extraction_config(&self) -> Result<ExtractionConfig, Box<dyn Error>>;
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: AppConfig,
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 从默认路径加载（文件缺失时使用内置默认值，不报错）
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                tracing::info!("配置文件不存在，使用内置默认配置");
                Ok(Self {
                    config: AppConfig::default(),
                    source_path: None,
                })
            }
        }
    }

    /// 从指定文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("配置文件读取失败 ({}): {}", path.display(), e))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| format!("配置文件解析失败 ({}): {}", path.display(), e))?;

        config
            .extraction
            .validate()
            .map_err(|msg| format!("提取服务配置无效: {}", msg))?;

        tracing::info!(path = %path.display(), "配置文件已加载");
        Ok(Self {
            config,
            source_path: Some(path.to_path_buf()),
        })
    }

    /// 默认配置文件路径: <系统配置目录>/bom-tracker/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bom-tracker").join("config.json"))
    }

    /// 持久化当前配置（目录不存在则创建）
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

#[async_trait]
impl ExtractionConfigReader for ConfigManager {
    async fn get_extraction_config(&self) -> Result<ExtractionConfig, Box<dyn Error>> {
        Ok(self.config.extraction.clone())
    }
}
