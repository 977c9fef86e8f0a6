//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有可调策略集中到 `ExportConfig`：输出文件基础名、边长上限、
//! 输出变体列表与缩放滤镜。默认值即固定行为（`finder`、500px、@1x/@2x、双线性）。
//!
//! ## 实现思路
//!
//! - `Default` 提供开箱即用配置。
//! - `ResizeFilter` 负责滤镜字符串解析与反向输出，供 CLI 与设置文件共用。
//! - `validate` 在配置生效前拒绝会导致导出行为异常的组合。

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::{ExportSpec, IconError};

/// 默认输出文件基础名。
pub const DEFAULT_BASE_NAME: &str = "finder";
/// 默认最大边长（含边界，500 本身允许）。
pub const DEFAULT_MAX_SIDE: u32 = 500;

/// 图标导出配置。
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// 输出文件基础名，文件名为 `base_name + suffix + ".png"`。
    pub base_name: String,
    /// 源图片允许的最大边长（像素）。
    pub max_side: u32,
    /// 读取源文件前允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 需要生成的输出变体。
    pub variants: ExportSpec,
    /// 缩放滤镜。
    pub resize_filter: ResizeFilter,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            max_side: DEFAULT_MAX_SIDE,
            max_file_size: 50 * 1024 * 1024,
            variants: ExportSpec::default(),
            resize_filter: ResizeFilter::Bilinear,
        }
    }
}

impl ExportConfig {
    /// 校验配置组合是否可用。
    pub fn validate(&self) -> Result<(), IconError> {
        validate_base_name(&self.base_name)?;

        if self.max_side == 0 {
            return Err(IconError::InvalidConfig("max_side 必须大于 0".to_string()));
        }
        if self.max_file_size == 0 {
            return Err(IconError::InvalidConfig("max_file_size 必须大于 0".to_string()));
        }
        if self.variants.is_empty() {
            return Err(IconError::InvalidConfig("至少需要一个输出变体".to_string()));
        }

        let mut seen = HashSet::new();
        for variant in self.variants.variants() {
            if variant.width == 0 || variant.height == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "变体 {} 的尺寸不能为 0（{}x{}）",
                    variant.suffix, variant.width, variant.height
                )));
            }
            validate_suffix(&variant.suffix)?;
            if !seen.insert(variant.suffix.as_str()) {
                return Err(IconError::InvalidConfig(format!(
                    "变体后缀重复：{}",
                    variant.suffix
                )));
            }
        }

        Ok(())
    }
}

/// 校验输出文件基础名：非空，且不能包含路径分隔符。
pub fn validate_base_name(base_name: &str) -> Result<(), IconError> {
    if base_name.trim().is_empty() {
        return Err(IconError::InvalidConfig("base_name 不能为空".to_string()));
    }
    if base_name.contains(['/', '\\']) || base_name == "." || base_name == ".." {
        return Err(IconError::InvalidConfig(format!(
            "base_name 不能包含路径：{}",
            base_name
        )));
    }
    Ok(())
}

/// 校验变体后缀：后缀会直接拼进文件名，不能带路径分隔符。
pub(crate) fn validate_suffix(suffix: &str) -> Result<(), IconError> {
    if suffix.contains(['/', '\\']) {
        return Err(IconError::InvalidConfig(format!(
            "变体后缀不能包含路径：{}",
            suffix
        )));
    }
    Ok(())
}

/// 缩放滤镜。
///
/// - `Nearest`：最快，像素风
/// - `Bilinear`：默认，质量与速度平衡
/// - `CatmullRom` / `Lanczos3`：更锐利
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl ResizeFilter {
    /// 输出稳定字符串，供日志、CLI 与设置文件使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::CatmullRom => "catmull-rom",
            Self::Lanczos3 => "lanczos3",
        }
    }

    /// 对应 `image` crate 的滤镜，用于回退路径。
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = IconError;

    fn from_str(filter: &str) -> Result<Self, Self::Err> {
        match filter.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" | "triangle" => Ok(Self::Bilinear),
            "catmull-rom" | "catmullrom" => Ok(Self::CatmullRom),
            "lanczos3" => Ok(Self::Lanczos3),
            other => Err(IconError::InvalidConfig(format!(
                "未知缩放滤镜：{}（可选：nearest / bilinear / catmull-rom / lanczos3）",
                other
            ))),
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_export::VariantSpec;

    #[test]
    fn default_config_is_valid() {
        let config = ExportConfig::default();
        assert_eq!(config.base_name, "finder");
        assert_eq!(config.max_side, 500);
        assert_eq!(config.resize_filter, ResizeFilter::Bilinear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_base_name_with_path_separator() {
        let mut config = ExportConfig::default();
        config.base_name = "../escape".to_string();
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.base_name = "   ".to_string();
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_sized_and_duplicate_variants() {
        let mut config = ExportConfig::default();
        config.variants = ExportSpec::new(vec![VariantSpec::new("@1x", 0, 128)]);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.variants = ExportSpec::new(vec![
            VariantSpec::new("@1x", 128, 128),
            VariantSpec::new("@1x", 256, 256),
        ]);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.variants = ExportSpec::new(Vec::new());
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_suffix_with_path_separator() {
        let mut config = ExportConfig::default();
        config.variants = ExportSpec::new(vec![VariantSpec::new("/../../escape", 128, 128)]);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));

        config.variants = ExportSpec::new(vec![VariantSpec::new("@1x\\..", 128, 128)]);
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn resize_filter_round_trips_through_strings() {
        for filter in [
            ResizeFilter::Nearest,
            ResizeFilter::Bilinear,
            ResizeFilter::CatmullRom,
            ResizeFilter::Lanczos3,
        ] {
            assert_eq!(filter.as_str().parse::<ResizeFilter>(), Ok(filter));
        }
        assert_eq!(" Triangle ".parse::<ResizeFilter>(), Ok(ResizeFilter::Bilinear));
        assert!("bicubic".parse::<ResizeFilter>().is_err());
    }
}
