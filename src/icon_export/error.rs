//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 校验与导出两个阶段共用一个错误枚举，调用侧可以按分支匹配，
//! 同时通过 `thiserror` 保留人类可读的提示文本（直接用作状态消息）。

/// 图标校验/导出统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    /// 文件无法读取，或不是可解码的位图。
    #[error("所选文件不是有效的图片：{0}")]
    Decode(String),

    /// 宽高不相等。
    #[error("图片必须为 1:1 比例（当前 {width}x{height}）")]
    AspectRatio { width: u32, height: u32 },

    /// 任一边超过允许的最大边长。
    #[error("图片边长不能超过 {max}px（当前 {width}x{height}）")]
    SizeTooLarge { width: u32, height: u32, max: u32 },

    /// 单个尺寸变体无法缩放。
    #[error("缩放失败：{0}")]
    Resize(String),

    /// 单个输出文件编码或写入失败。
    #[error("写入失败：{0}")]
    Write(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置无效：{0}")]
    InvalidConfig(String),
}

impl From<IconError> for String {
    fn from(error: IconError) -> Self {
        error.to_string()
    }
}
