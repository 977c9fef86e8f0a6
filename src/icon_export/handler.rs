//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconExporter` 只负责流程编排与配置管理，不绑定任何界面工具包。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 校验并解码源图片
//! 3. 按变体列表导出
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ExportConfig>>` 支持运行时修改（基础名、滤镜）。
//! - 单次请求内使用同一配置快照，避免处理中途配置漂移。
//! - 记录 `validate/export/total` 阶段耗时。

use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::config::validate_base_name;
use super::{ExportConfig, ExportReport, IconError, ResizeFilter, SourceImage};

/// 图标导出器。
#[derive(Debug, Clone)]
pub struct IconExporter {
    config: Arc<RwLock<ExportConfig>>,
}

impl IconExporter {
    /// 根据初始配置创建导出器，配置无效时直接拒绝。
    ///
    /// # 示例
    /// ```rust
    /// use square_icons::icon_export::{ExportConfig, IconExporter};
    ///
    /// let exporter = IconExporter::new(ExportConfig::default())?;
    /// assert_eq!(exporter.config_snapshot()?.base_name, "finder");
    /// # Ok::<(), square_icons::icon_export::IconError>(())
    /// ```
    pub fn new(config: ExportConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// 获取配置快照，保证单次请求链路使用一致参数。
    pub fn config_snapshot(&self) -> Result<ExportConfig, IconError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| IconError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    pub fn set_base_name(&self, base_name: &str) -> Result<(), IconError> {
        validate_base_name(base_name)?;

        let mut config = self
            .config
            .write()
            .map_err(|_| IconError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        config.base_name = base_name.to_string();

        log::info!("⚙️ 已切换输出基础名：{}", base_name);
        Ok(())
    }

    pub fn set_resize_filter(&self, filter: ResizeFilter) -> Result<(), IconError> {
        let mut config = self
            .config
            .write()
            .map_err(|_| IconError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        config.resize_filter = filter;

        log::info!("⚙️ 已切换缩放滤镜：{}", filter);
        Ok(())
    }

    /// 按当前配置校验图片文件。
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<SourceImage, IconError> {
        let config = self.config_snapshot()?;
        super::validate(path, &config)
    }

    /// 按当前配置导出已校验的图片。
    pub fn export(
        &self,
        image: &SourceImage,
        destination: impl AsRef<Path>,
    ) -> Result<ExportReport, IconError> {
        let config = self.config_snapshot()?;
        Ok(super::export(
            image,
            &config.base_name,
            destination,
            &config.variants,
            config.resize_filter,
        ))
    }

    /// 处理主入口：校验后导出，整个过程使用同一配置快照。
    ///
    /// 校验失败时返回错误，不会触碰目标目录。
    pub fn process(
        &self,
        file: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<ExportReport, IconError> {
        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let validate_start = Instant::now();
        let source = super::validate(file, &config)?;
        let validate_elapsed = validate_start.elapsed();

        let export_start = Instant::now();
        let report = super::export(
            &source,
            &config.base_name,
            destination,
            &config.variants,
            config.resize_filter,
        );
        let export_elapsed = export_start.elapsed();

        log::info!(
            "✅ 图标处理完成 - validate={}ms export={}ms total={}ms",
            validate_elapsed.as_millis(),
            export_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }
}
