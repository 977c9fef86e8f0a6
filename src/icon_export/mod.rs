//! # 图标导出模块（icon_export）
//!
//! ## 设计思路
//!
//! 将“校验源图片 → 缩放编码 → 写入变体文件”按职责拆分为多个子模块，
//! 与任何界面工具包解耦：界面层只提供两个路径，拿回一份报告。
//!
//! - `validator`：读取、签名探测、尺寸规则与解码
//! - `pipeline`：单次卷积缩放与 PNG 编码
//! - `exporter`：按变体列表写盘并汇总每个变体的结果
//! - `handler`：编排整条链路（配置快照 + 阶段耗时日志）
//! - `service`：把整条链路作为一个阻塞任务移出调用线程
//! - `config/error/source`：配置、错误、数据模型
//!
//! ## 调用链
//!
//! ```text
//! 界面 / CLI
//!    ↓
//! service.rs（spawn_blocking）
//!    ↓
//! handler.rs（配置快照 + 耗时日志）
//!    ├─ validator.rs（文件头尺寸 + 1:1 + 边长上限 + 解码）
//!    └─ exporter.rs（逐变体导出）
//!         └─ pipeline.rs（缩放 + PNG 编码）
//!    ↓
//! ExportReport / IconError
//! ```

mod config;
mod error;
mod exporter;
mod handler;
mod pipeline;
mod service;
mod source;
mod validator;

pub use config::{
    DEFAULT_BASE_NAME, DEFAULT_MAX_SIDE, ExportConfig, ResizeFilter, validate_base_name,
};
pub use error::IconError;
pub use exporter::{ExportReport, VariantOutcome, VariantStatus, export};
pub use handler::IconExporter;
pub use service::ExportServiceState;
pub use source::{DEFAULT_VARIANTS, ExportSpec, SourceImage, VariantSpec};
pub use validator::{check_dimensions, validate, validate_bytes};
