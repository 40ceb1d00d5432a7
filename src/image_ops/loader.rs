//! # 加载与解码
//!
//! ## 实现思路
//!
//! 1. 读取文件全部字节（文件不存在单独上报为 `NotFound`）
//! 2. 按内容猜测格式，忽略扩展名（JPEG 存成 `.png` 的情况在这里被识别）
//! 3. 仅读取 header 尺寸，按像素上限快速拒绝
//! 4. 完整解码

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::error::AssetError;

/// 按字节内容识别图片格式。
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, AssetError> {
    image::guess_format(bytes)
        .map_err(|e| AssetError::InvalidFormat(format!("不支持的图片格式：{}", e)))
}

/// 从磁盘加载图片，实际格式由内容决定。
pub fn load_image(path: &Path, max_decoded_pixels: u64) -> Result<DynamicImage, AssetError> {
    let bytes = fs::read(path).map_err(|e| AssetError::io("读取", path, e))?;

    let format = sniff_format(&bytes)
        .map_err(|e| AssetError::InvalidFormat(format!("{}：{}", path.display(), e)))?;

    let (header_width, header_height) = inspect_dimensions(&bytes, format, path)?;
    validate_pixel_limits(path, header_width, header_height, max_decoded_pixels)?;

    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| AssetError::Decode(format!("{} 解码失败：{}", path.display(), e)))?;

    let (width, height) = decoded.dimensions();
    log::debug!(
        "🖼️ 已解码 {} - 实际格式: {:?} 尺寸: {}x{} 布局: {:?}",
        path.display(),
        format,
        width,
        height,
        decoded.color()
    );

    Ok(decoded)
}

/// 仅通过 header 读取宽高，用于完整解码前的像素限制检查。
fn inspect_dimensions(
    bytes: &[u8],
    format: ImageFormat,
    path: &Path,
) -> Result<(u32, u32), AssetError> {
    ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| AssetError::Decode(format!("无法读取 {} 的图片尺寸：{}", path.display(), e)))
}

fn validate_pixel_limits(
    path: &Path,
    width: u32,
    height: u32,
    max_decoded_pixels: u64,
) -> Result<(), AssetError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| AssetError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > max_decoded_pixels {
        return Err(AssetError::ResourceLimit(format!(
            "{} 像素过大：{} 像素（限制：{} 像素）",
            path.display(),
            pixels,
            max_decoded_pixels
        )));
    }

    Ok(())
}
