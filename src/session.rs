//! 界面会话状态
//!
//! # 设计思路
//!
//! 界面层持有的“已选文件 / 输出目录 / 提示消息”集中在一个显式的
//! `ExportSession` 中，由调用方传入校验与导出结果来推进状态，
//! 本身不做任何 I/O，便于测试。
//!
//! 状态规则：
//! - 校验失败会清空已选文件，并记录错误提示
//! - 未选文件时不能选择输出目录
//! - 文件与目录都就绪后才能导出
//! - 至少写入一个文件即为成功（附带数量），一个都没写入则为失败

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppError;
use crate::icon_export::{ExportReport, SourceImage, VariantStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
}

/// 返回给界面的提示消息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// 导出界面的会话状态。
#[derive(Debug, Clone, Default)]
pub struct ExportSession {
    selected_file: Option<PathBuf>,
    destination: Option<PathBuf>,
    status: Option<StatusMessage>,
    last_report: Option<ExportReport>,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn last_report(&self) -> Option<&ExportReport> {
        self.last_report.as_ref()
    }

    pub fn can_choose_destination(&self) -> bool {
        self.selected_file.is_some()
    }

    pub fn can_export(&self) -> bool {
        self.selected_file.is_some() && self.destination.is_some()
    }

    /// 记录文件校验结果。
    pub fn on_file_validated(&mut self, path: PathBuf, result: &Result<SourceImage, AppError>) {
        match result {
            Ok(_) => {
                log::debug!("已选择图片：{}", path.display());
                self.selected_file = Some(path);
                self.status = None;
            }
            Err(err) => {
                self.selected_file = None;
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    pub fn choose_destination(&mut self, path: PathBuf) -> Result<(), AppError> {
        if !self.can_choose_destination() {
            return Err(AppError::Session("请先选择有效的图片".to_string()));
        }
        self.destination = Some(path);
        Ok(())
    }

    /// 导出所需的 `(源文件, 输出目录)`，未就绪时返回错误。
    pub fn export_request(&self) -> Result<(PathBuf, PathBuf), AppError> {
        match (&self.selected_file, &self.destination) {
            (Some(file), Some(dir)) => Ok((file.clone(), dir.clone())),
            (None, _) => Err(AppError::Session("请先选择有效的图片".to_string())),
            (Some(_), None) => Err(AppError::Session("请先选择输出目录".to_string())),
        }
    }

    /// 记录导出结果并生成提示消息。
    pub fn on_export_finished(&mut self, result: Result<ExportReport, AppError>) -> &StatusMessage {
        let status = match result {
            Ok(report) => {
                let status = summarize_report(&report);
                self.last_report = Some(report);
                status
            }
            Err(err) => {
                self.last_report = None;
                StatusMessage::error(format!("加载图片失败：{}", err))
            }
        };
        self.status.insert(status)
    }

    /// 清空全部状态（界面的“取消”）。
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn summarize_report(report: &ExportReport) -> StatusMessage {
    let total = report.outcomes.len();
    let written = report.written_count();

    if written == total && total > 0 {
        return StatusMessage::success(format!("图标已成功导出（{} 个文件）", written));
    }
    if written > 0 {
        return StatusMessage::success(format!("图标已部分导出（{}/{} 个文件）", written, total));
    }

    let reason = report
        .outcomes
        .iter()
        .find_map(|o| match &o.status {
            VariantStatus::Skipped(reason) | VariantStatus::Failed(reason) => Some(reason.as_str()),
            VariantStatus::Written => None,
        })
        .unwrap_or("没有需要导出的变体");
    StatusMessage::error(format!("未能导出任何图标：{}", reason))
}
