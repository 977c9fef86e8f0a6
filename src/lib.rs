//! # 正方形图标导出工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │        界面层（CLI / 任意 GUI 工具包）                      │
//! │                                                          │
//! │  PathPicker ── ExportSession ── StatusMessage            │
//! │       │  (选文件 / 选目录 / 显示提示)                      │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Result<ExportReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            核心（无界面依赖）                       │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                   │
//! │  ├─ icon_export  校验 · 缩放 · PNG 导出                    │
//! │  ├─ settings     JSON 设置文件                            │
//! │  └─ storage      输出目录信息                             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`commands`] | 选文件 → 校验 → 选目录 → 导出 的异步编排 |
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`icon_export`] | 源图片校验（1:1、≤500px）与 @1x/@2x PNG 导出 |
//! | [`picker`] | “选择路径”能力抽象及预设/交互实现 |
//! | [`session`] | 界面会话状态与提示消息 |
//! | [`settings`] | 可选 JSON 设置文件的读取与保存 |
//! | [`storage`] | 输出目录中 PNG 文件的统计 |

pub mod commands;
pub mod error;
pub mod icon_export;
pub mod picker;
pub mod session;
pub mod settings;
pub mod storage;
