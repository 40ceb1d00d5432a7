//! # 精确缩放
//!
//! 主路径使用 `fast_image_resize` 卷积缩放（RGBA8，自动处理 alpha 预乘），
//! 构建缓冲或执行失败时回退到 `image::imageops::resize`，保证流程不中断。

use fast_image_resize as fr;
use image::RgbaImage;

use crate::config::ResampleFilter;
use crate::error::AssetError;

/// 将 RGBA 图片缩放到精确的 `width x height`，不保持宽高比。
pub fn resize_exact_rgba(
    source: &RgbaImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> RgbaImage {
    if source.dimensions() == (width, height) {
        return source.clone();
    }

    match resize_with_fast_image_resize(source, width, height, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
            image::imageops::resize(source, width, height, filter.to_image_filter())
        }
    }
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, AssetError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| AssetError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(filter.to_fast_filter()));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| AssetError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| AssetError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}
