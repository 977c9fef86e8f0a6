//! # 缩放与编码流水线
//!
//! ## 设计思路
//!
//! 每个输出变体只做一次卷积缩放（精确缩放到目标宽高），再编码为 PNG 字节。
//! 优先使用 `fast_image_resize`，失败时回退 `image::resize_exact`，
//! 只有目标尺寸或源图片本身退化时才判定为缩放失败。

use std::io::Cursor;

use fast_image_resize as fr;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

use super::{IconError, ResizeFilter};

/// 将图片精确缩放到 `target_width x target_height`。
pub(crate) fn resize_exact(
    image: &DynamicImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<DynamicImage, IconError> {
    if target_width == 0 || target_height == 0 {
        return Err(IconError::Resize(format!(
            "目标尺寸无效：{}x{}",
            target_width, target_height
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(IconError::Resize(format!(
            "源图片尺寸无效：{}x{}",
            image.width(),
            image.height()
        )));
    }

    match resize_with_fast_image_resize(image, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                err
            );
            Ok(image.resize_exact(target_width, target_height, filter.to_image_filter()))
        }
    }
}

/// 编码为 PNG 字节。
pub(crate) fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, IconError> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| IconError::Write(format!("PNG 编码失败：{}", e)))?;
    Ok(cursor.into_inner())
}

fn resize_with_fast_image_resize(
    image: &DynamicImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<DynamicImage, IconError> {
    let src = image.to_rgba8();
    let (src_width, src_height) = src.dimensions();

    let src_image =
        fr::images::Image::from_vec_u8(src_width, src_height, src.into_raw(), fr::PixelType::U8x4)
            .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(to_fast_alg(filter));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

    let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
        target_width,
        target_height,
        dst_image.into_vec(),
    )
    .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))?;

    Ok(DynamicImage::ImageRgba8(rgba))
}

fn to_fast_alg(filter: ResizeFilter) -> fr::ResizeAlg {
    match filter {
        ResizeFilter::Nearest => fr::ResizeAlg::Nearest,
        ResizeFilter::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        ResizeFilter::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        ResizeFilter::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
    }
}
