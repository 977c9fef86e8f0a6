//! 设置文件模块
//!
//! 可选的 JSON 设置文件，所有字段都可省略，省略的字段使用默认配置。
//! 命令行参数的优先级高于设置文件。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::icon_export::{ExportConfig, ExportSpec, ResizeFilter};

/// 设置文件内容。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_side: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<ExportSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_filter: Option<ResizeFilter>,
}

impl ExportSettings {
    /// 将设置叠加到已有配置上。
    pub fn apply_to(self, mut config: ExportConfig) -> ExportConfig {
        if let Some(base_name) = self.base_name {
            config.base_name = base_name;
        }
        if let Some(max_side) = self.max_side {
            config.max_side = max_side;
        }
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(variants) = self.variants {
            config.variants = variants;
        }
        if let Some(resize_filter) = self.resize_filter {
            config.resize_filter = resize_filter;
        }
        config
    }
}

impl From<&ExportConfig> for ExportSettings {
    fn from(config: &ExportConfig) -> Self {
        Self {
            base_name: Some(config.base_name.clone()),
            max_side: Some(config.max_side),
            max_file_size: Some(config.max_file_size),
            variants: Some(config.variants.clone()),
            resize_filter: Some(config.resize_filter),
        }
    }
}

pub fn load_settings(path: &Path) -> Result<ExportSettings, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Settings(format!("读取设置文件 '{}' 失败: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| AppError::Settings(format!("解析设置文件失败: {}", e)))
}

pub fn save_settings(path: &Path, settings: &ExportSettings) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Settings(format!("序列化设置失败: {}", e)))?;

    fs::write(path, content)?;
    Ok(())
}

/// 读取（可选的）设置文件并生成经过校验的配置。
pub fn load_export_config(path: Option<&Path>) -> Result<ExportConfig, AppError> {
    let config = match path {
        Some(path) => load_settings(path)?.apply_to(ExportConfig::default()),
        None => ExportConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
