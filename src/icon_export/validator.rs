//! # 校验模块
//!
//! ## 设计思路
//!
//! 校验器是无状态的单次操作：读取 → 签名探测 → 头部尺寸规则 → 完整解码。
//! 每次调用相互独立，同一输入重复调用结果一致，且没有任何副作用。
//!
//! ## 实现思路
//!
//! 1. 读取文件前先检查体积上限，避免把超大文件读入内存
//! 2. 用 `infer` 嗅探文件签名，尽早拒绝明确不是图片的内容
//! 3. 只读取文件头中的宽高并先套用尺寸规则，超限图片不会被解码
//! 4. 先判比例、再判边长：非正方形图片无论大小都报比例错误
//! 5. 通过后再由 `image` 完整解码，并以解码结果的尺寸复核一次

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use super::{ExportConfig, IconError, SourceImage};

/// 校验磁盘上的图片文件，通过后返回解码结果。
///
/// # 示例
/// ```rust,no_run
/// use square_icons::icon_export::{ExportConfig, validate};
///
/// let source = validate("icon.png", &ExportConfig::default())?;
/// assert_eq!(source.width(), source.height());
/// # Ok::<(), square_icons::icon_export::IconError>(())
/// ```
pub fn validate(path: impl AsRef<Path>, config: &ExportConfig) -> Result<SourceImage, IconError> {
    let path = path.as_ref();
    log::info!("📁 开始校验图片 - 路径: {}", path.display());

    let metadata = fs::metadata(path)
        .map_err(|e| IconError::Decode(format!("无法读取文件信息：{}", e)))?;

    if !metadata.is_file() {
        return Err(IconError::Decode(format!("不是普通文件：{}", path.display())));
    }

    if metadata.len() > config.max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes =
        fs::read(path).map_err(|e| IconError::Decode(format!("无法读取图片文件：{}", e)))?;

    validate_bytes(&bytes, path, config)
}

/// 校验内存中的图片字节。
///
/// `source` 仅作为来源标识保存在 `SourceImage` 中，不会被访问。
pub fn validate_bytes(
    bytes: &[u8],
    source: impl Into<PathBuf>,
    config: &ExportConfig,
) -> Result<SourceImage, IconError> {
    check_image_signature(bytes)?;

    let (header_width, header_height) = inspect_dimensions(bytes)?;
    check_dimensions(header_width, header_height, config.max_side)?;

    let image = decode_image(bytes)?;
    let (width, height) = (image.width(), image.height());
    check_dimensions(width, height, config.max_side)?;

    let source = SourceImage::new(image, source.into());
    log::info!(
        "✅ 图片校验通过 - 来源: {} 尺寸: {}x{}",
        source.path().display(),
        width,
        height
    );

    Ok(source)
}

/// 尺寸规则：必须为正方形，且任一边不超过 `max_side`（含边界）。
pub fn check_dimensions(width: u32, height: u32, max_side: u32) -> Result<(), IconError> {
    if width != height {
        return Err(IconError::AspectRatio { width, height });
    }

    if width > max_side || height > max_side {
        return Err(IconError::SizeTooLarge {
            width,
            height,
            max: max_side,
        });
    }

    Ok(())
}

/// 签名探测：空内容或已识别的非图片类型直接拒绝。
///
/// 无法识别的签名交给解码器判断，部分格式 `infer` 并不认识。
fn check_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::Decode("图片内容为空".to_string()));
    }

    if let Some(kind) = infer::get(bytes) {
        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::Decode(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }
    }

    Ok(())
}

/// 仅解析文件头获取宽高，不分配像素缓冲。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
        .into_dimensions()
        .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
}

fn decode_image(bytes: &[u8]) -> Result<DynamicImage, IconError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
        .decode()
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))
}
