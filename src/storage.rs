//! 输出目录信息模块
//!
//! 导出完成后汇总目标目录中的 PNG 文件，供界面展示。
//! 本模块只读，不会创建目录：目录缺失时由导出报告记录失败。

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;

/// 输出目录信息
#[derive(Debug, Clone, Serialize)]
pub struct DestinationInfo {
    pub path: String,
    pub png_count: u64,
    pub total_size: u64,
}

/// 获取输出目录信息（路径 + PNG 文件数 + 占用大小）
///
/// # 返回
/// - `Ok(DestinationInfo)` — 目录存在且可读
/// - `Err(AppError::Io)` — 目录不存在或无法读取
pub fn destination_info(dir: &Path) -> Result<DestinationInfo, AppError> {
    let mut png_count: u64 = 0;
    let mut total_size: u64 = 0;

    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            if metadata.is_file() {
                png_count += 1;
                total_size += metadata.len();
            }
        }
    }

    Ok(DestinationInfo {
        path: dir.to_string_lossy().to_string(),
        png_count,
        total_size,
    })
}
