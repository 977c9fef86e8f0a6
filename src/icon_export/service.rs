//! # 服务层（可注入状态）
//!
//! ## 设计思路
//!
//! 界面线程不能被解码与写盘阻塞，因此由 `ExportServiceState` 把
//! “校验 → 导出”整段流程作为一个阻塞任务交给 `spawn_blocking`，
//! 完成后再把结果交回调用方。除此之外不做更细粒度的并发。
//!
//! ## 实现思路
//!
//! - 内部持有 `Arc<IconExporter>`，克隆成本低，可在多个界面组件间共享。
//! - 任务 join 失败（panic）统一转换为 `AppError::Task`。

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppError;

use super::{ExportConfig, ExportReport, IconExporter, SourceImage};

/// 可注入的导出服务状态。
#[derive(Debug, Clone)]
pub struct ExportServiceState {
    exporter: Arc<IconExporter>,
}

impl ExportServiceState {
    pub fn new(config: ExportConfig) -> Result<Self, AppError> {
        Ok(Self {
            exporter: Arc::new(IconExporter::new(config)?),
        })
    }

    pub fn exporter(&self) -> &IconExporter {
        &self.exporter
    }

    /// 在阻塞线程池中完成校验与导出。
    pub async fn process(
        &self,
        file: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Result<ExportReport, AppError> {
        let exporter = Arc::clone(&self.exporter);
        let file = file.into();
        let destination = destination.into();

        let report = tokio::task::spawn_blocking(move || exporter.process(&file, &destination))
            .await
            .map_err(|e| AppError::Task(format!("导出任务执行失败：{}", e)))??;

        Ok(report)
    }

    /// 仅校验，同样在阻塞线程池中执行。
    pub async fn validate(&self, file: impl Into<PathBuf>) -> Result<SourceImage, AppError> {
        let exporter = Arc::clone(&self.exporter);
        let file = file.into();

        let source = tokio::task::spawn_blocking(move || exporter.validate(&file))
            .await
            .map_err(|e| AppError::Task(format!("校验任务执行失败：{}", e)))??;

        Ok(source)
    }
}
