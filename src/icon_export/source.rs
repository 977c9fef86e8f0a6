//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“输入图片”和“输出规格”解耦：
//! - `SourceImage` 表示已通过校验、可交给导出阶段的解码结果
//! - `VariantSpec` / `ExportSpec` 描述需要生成的尺寸变体
//!
//! 所有类型在创建后不再修改，按值传递或整体替换。

use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// 默认导出变体：`(后缀, 宽, 高)`。
pub const DEFAULT_VARIANTS: [(&str, u32, u32); 2] = [("@1x", 128, 128), ("@2x", 256, 256)];

/// 已解码并通过校验的源图片。
///
/// 只能由校验器构造，保证导出阶段拿到的图片一定是正方形且未超限。
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    width: u32,
    height: u32,
    path: PathBuf,
}

impl SourceImage {
    pub(crate) fn new(image: DynamicImage, path: PathBuf) -> Self {
        let width = image.width();
        let height = image.height();
        Self {
            image,
            width,
            height,
            path,
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 图片来源路径（内存输入时为调用方给出的标签）。
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 单个输出变体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    /// 文件名后缀，例如 `@2x`。
    pub suffix: String,
    pub width: u32,
    pub height: u32,
}

impl VariantSpec {
    pub fn new(suffix: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            suffix: suffix.into(),
            width,
            height,
        }
    }

    /// 输出文件名：`base_name + suffix + ".png"`。
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}{}.png", base_name, self.suffix)
    }
}

/// 有序的输出变体列表，导出时按列表顺序处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportSpec {
    variants: Vec<VariantSpec>,
}

impl ExportSpec {
    pub fn new(variants: Vec<VariantSpec>) -> Self {
        Self { variants }
    }

    pub fn variants(&self) -> &[VariantSpec] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for ExportSpec {
    fn default() -> Self {
        Self::new(
            DEFAULT_VARIANTS
                .iter()
                .map(|(suffix, width, height)| VariantSpec::new(*suffix, *width, *height))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_lists_1x_then_2x() {
        let spec = ExportSpec::default();
        assert_eq!(
            spec.variants(),
            &[VariantSpec::new("@1x", 128, 128), VariantSpec::new("@2x", 256, 256)]
        );
    }

    #[test]
    fn file_name_appends_suffix_and_png_extension() {
        let variant = VariantSpec::new("@2x", 256, 256);
        assert_eq!(variant.file_name("finder"), "finder@2x.png");
    }

    #[test]
    fn export_spec_deserializes_from_plain_array() {
        let spec: ExportSpec =
            serde_json::from_str(r#"[{"suffix":"@3x","width":384,"height":384}]"#)
                .expect("spec json should parse");
        assert_eq!(spec.variants(), &[VariantSpec::new("@3x", 384, 384)]);
    }
}
