//! 界面操作编排
//!
//! # 设计思路
//!
//! 把“选文件 → 校验 → 选目录 → 导出”串成界面可直接调用的异步操作，
//! 耗时部分交给 `ExportServiceState` 在阻塞线程池执行，
//! 结果写回 `ExportSession`，界面只负责展示。

use crate::error::AppError;
use crate::icon_export::ExportServiceState;
use crate::picker::PathPicker;
use crate::session::{ExportSession, StatusMessage};

/// 选择并校验源图片。返回 `Ok(false)` 表示取消或校验未通过（提示已写入会话）。
pub async fn select_source(
    service: &ExportServiceState,
    picker: &mut dyn PathPicker,
    session: &mut ExportSession,
) -> Result<bool, AppError> {
    let Some(file) = picker.pick_file()? else {
        log::info!("用户取消了图片选择");
        return Ok(false);
    };

    let validated = service.validate(file.clone()).await;
    session.on_file_validated(file, &validated);
    Ok(validated.is_ok())
}

/// 选择输出目录并导出。返回 `Ok(None)` 表示取消。
pub async fn select_destination_and_export(
    service: &ExportServiceState,
    picker: &mut dyn PathPicker,
    session: &mut ExportSession,
) -> Result<Option<StatusMessage>, AppError> {
    let Some(destination) = picker.pick_folder()? else {
        log::info!("用户取消了输出目录选择");
        return Ok(None);
    };
    session.choose_destination(destination)?;

    let (file, destination) = session.export_request()?;
    let result = service.process(file, destination).await;
    Ok(Some(session.on_export_finished(result).clone()))
}

/// 完整流程，最终提示同时写入会话。
pub async fn run_export_flow(
    service: &ExportServiceState,
    picker: &mut dyn PathPicker,
    session: &mut ExportSession,
) -> Result<StatusMessage, AppError> {
    if !select_source(service, picker, session).await? {
        return Ok(session
            .status()
            .cloned()
            .unwrap_or_else(|| StatusMessage::error("未选择图片文件")));
    }

    match select_destination_and_export(service, picker, session).await? {
        Some(status) => Ok(status),
        None => Ok(StatusMessage::error("未选择输出目录")),
    }
}
