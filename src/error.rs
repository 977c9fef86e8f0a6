//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，界面层（CLI、会话状态、路径选择器）统一返回它，
//! 图标链路的 `IconError` 通过 `From` 自动上转，无需手动 map。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 实现 `Serialize` 将错误序列化为字符串，便于以 JSON 输出给调用方。

use serde::Serialize;

use crate::icon_export::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标校验 / 导出错误
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统或标准输入输出错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件读取或解析失败
    #[error("设置错误: {0}")]
    Settings(String),

    /// 会话状态不允许当前操作
    #[error("操作不可用: {0}")]
    Session(String),

    /// 后台任务执行失败
    #[error("后台任务失败: {0}")]
    Task(String),
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
