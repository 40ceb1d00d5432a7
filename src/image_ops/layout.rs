//! 通道布局归一化。
//!
//! 三通道与四通道彩色图直接保留；其他布局（灰度、灰度 + alpha）
//! 统一转为 RGB8，这会丢弃 alpha，属于可接受的有损步骤。
//! 浮点布局 PNG 编码器不支持，按通道数降为同布局的 8 位版本。

use image::{ColorType, DynamicImage};

/// PNG 可直接编码且无需转换的彩色布局。
pub fn is_png_native_layout(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::Rgb8 | ColorType::Rgba8 | ColorType::Rgb16 | ColorType::Rgba16
    )
}

pub fn normalize_channel_layout(image: DynamicImage) -> DynamicImage {
    let color = image.color();
    if is_png_native_layout(color) {
        return image;
    }

    let converted = match color {
        ColorType::Rgba32F => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    };

    log::debug!("🎨 通道布局转换：{:?} -> {:?}", color, converted.color());
    converted
}
