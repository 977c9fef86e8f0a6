//! # 导出模块
//!
//! ## 设计思路
//!
//! 按 `ExportSpec` 顺序逐个生成变体：缩放 → 编码 → 直接覆盖写入。
//! 单个变体失败不影响其余变体，所有结果都记录在 `ExportReport` 中，
//! 由调用方决定如何呈现“部分成功”。
//!
//! 不创建目录、不写临时文件、不做原子重命名。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::config::{validate_base_name, validate_suffix};
use super::pipeline::{encode_png, resize_exact};
use super::{ExportSpec, IconError, ResizeFilter, SourceImage, VariantSpec};

/// 单个变体的处理状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum VariantStatus {
    Written,
    /// 缩放无法进行，未写任何文件。
    Skipped(String),
    /// 编码或写盘失败。
    Failed(String),
}

/// 单个变体的导出结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOutcome {
    pub suffix: String,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: VariantStatus,
}

impl VariantOutcome {
    pub fn is_written(&self) -> bool {
        self.status == VariantStatus::Written
    }
}

/// 一次导出调用的完整结果，按变体顺序排列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub outcomes: Vec<VariantOutcome>,
}

impl ExportReport {
    /// 导出是否已执行（只要进入导出流程即为 `true`）。
    pub fn attempted(&self) -> bool {
        true
    }

    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// 所有变体都已写入。
    pub fn is_complete(&self) -> bool {
        !self.outcomes.is_empty() && self.written_count() == self.outcomes.len()
    }

    pub fn written_paths(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| o.is_written())
            .map(|o| o.path.as_path())
            .collect()
    }
}

/// 将已校验的图片导出为 `spec` 中的所有变体。
///
/// 本函数不返回错误：每个变体的成败都记录在报告里。
/// `base_name` 或后缀带路径时对应变体记为 `Failed`，不会写到目标目录之外。
pub fn export(
    image: &SourceImage,
    base_name: &str,
    destination: impl AsRef<Path>,
    spec: &ExportSpec,
    filter: ResizeFilter,
) -> ExportReport {
    let destination = destination.as_ref();
    log::info!(
        "📦 开始导出 - 源尺寸: {}x{} 目标目录: {} 变体数: {}",
        image.width(),
        image.height(),
        destination.display(),
        spec.len()
    );

    let outcomes = match validate_base_name(base_name) {
        Ok(()) => spec
            .variants()
            .iter()
            .map(|variant| export_variant(image, base_name, destination, variant, filter))
            .collect(),
        Err(err) => {
            log::warn!("❌ 基础名无效，跳过写入：{}", err);
            spec.variants()
                .iter()
                .map(|variant| rejected(destination, variant, &err))
                .collect()
        }
    };

    let report = ExportReport { outcomes };
    log::info!(
        "✅ 导出结束 - 成功 {}/{}",
        report.written_count(),
        report.outcomes.len()
    );
    report
}

fn export_variant(
    image: &SourceImage,
    base_name: &str,
    destination: &Path,
    variant: &VariantSpec,
    filter: ResizeFilter,
) -> VariantOutcome {
    if let Err(err) = validate_suffix(&variant.suffix) {
        log::warn!("❌ 变体 {} 后缀无效：{}", variant.suffix, err);
        return rejected(destination, variant, &err);
    }

    let path = destination.join(variant.file_name(base_name));

    let status = match resize_exact(image.image(), variant.width, variant.height, filter) {
        Err(err) => {
            log::warn!("⏭️ 跳过变体 {}：{}", variant.suffix, err);
            VariantStatus::Skipped(err.to_string())
        }
        Ok(resized) => match write_png(&resized, &path) {
            Ok(()) => {
                log::debug!(
                    "💾 已写入 {} ({}x{})",
                    path.display(),
                    variant.width,
                    variant.height
                );
                VariantStatus::Written
            }
            Err(err) => {
                log::warn!("❌ 变体 {} 写入失败：{}", variant.suffix, err);
                VariantStatus::Failed(err.to_string())
            }
        },
    };

    VariantOutcome {
        suffix: variant.suffix.clone(),
        width: variant.width,
        height: variant.height,
        path,
        status,
    }
}

/// 命名无效的变体：路径只记录目标目录本身，不拼接文件名。
fn rejected(destination: &Path, variant: &VariantSpec, err: &IconError) -> VariantOutcome {
    VariantOutcome {
        suffix: variant.suffix.clone(),
        width: variant.width,
        height: variant.height,
        path: destination.to_path_buf(),
        status: VariantStatus::Failed(err.to_string()),
    }
}

fn write_png(image: &image::DynamicImage, path: &Path) -> Result<(), IconError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)
        .map_err(|e| IconError::Write(format!("{}：{}", path.display(), e)))
}
