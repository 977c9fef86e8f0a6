//! 路径选择能力
//!
//! # 设计思路
//!
//! 文件/目录选择框、拖放都属于界面工具包的职责，这里只抽象成一个
//! “给我一个路径”的能力，校验与导出逻辑不依赖任何具体实现。
//! 返回 `Ok(None)` 表示用户取消。

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::AppError;

/// 路径选择能力。
pub trait PathPicker {
    /// 选择源图片文件。
    fn pick_file(&mut self) -> Result<Option<PathBuf>, AppError>;

    /// 选择输出目录。
    fn pick_folder(&mut self) -> Result<Option<PathBuf>, AppError>;
}

/// 预先给定路径的选择器（例如来自命令行参数）。每个路径只交出一次。
#[derive(Debug, Clone, Default)]
pub struct PresetPicker {
    file: Option<PathBuf>,
    folder: Option<PathBuf>,
}

impl PresetPicker {
    pub fn new(file: Option<PathBuf>, folder: Option<PathBuf>) -> Self {
        Self { file, folder }
    }
}

impl PathPicker for PresetPicker {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, AppError> {
        Ok(self.file.take())
    }

    fn pick_folder(&mut self) -> Result<Option<PathBuf>, AppError> {
        Ok(self.folder.take())
    }
}

/// 交互式选择器：输出提示并读取一行，空行或输入结束视为取消。
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<PathBuf>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim().trim_matches('"');
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(trimmed)))
    }
}

impl<R: BufRead, W: Write> PathPicker for PromptPicker<R, W> {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, AppError> {
        self.prompt("图片文件路径: ")
    }

    fn pick_folder(&mut self) -> Result<Option<PathBuf>, AppError> {
        self.prompt("输出目录: ")
    }
}

/// 先用预设路径，缺失时再回退到第二个选择器。
pub struct FallbackPicker<P, F> {
    primary: P,
    fallback: F,
}

impl<P: PathPicker, F: PathPicker> FallbackPicker<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: PathPicker, F: PathPicker> PathPicker for FallbackPicker<P, F> {
    fn pick_file(&mut self) -> Result<Option<PathBuf>, AppError> {
        match self.primary.pick_file()? {
            Some(path) => Ok(Some(path)),
            None => self.fallback.pick_file(),
        }
    }

    fn pick_folder(&mut self) -> Result<Option<PathBuf>, AppError> {
        match self.primary.pick_folder()? {
            Some(path) => Ok(Some(path)),
            None => self.fallback.pick_folder(),
        }
    }
}
