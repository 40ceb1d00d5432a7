//! # 应用商店素材生成（store_assets）
//!
//! ## 设计思路
//!
//! 从最高密度的启动图标派生两张商店素材：
//!
//! 1. 商店图标：源图 Lanczos3 缩放到 512x512
//! 2. 宣传图：1024x500 品牌色画布，中央以源图 alpha 为蒙版贴上 300x300 图标
//!
//! ## 实现思路
//!
//! - 源图统一转 RGBA8（无 alpha 时补全不透明通道），后续步骤只处理一种布局。
//! - 渲染（纯内存）与写出分离：`render_*` 可单独测试像素，`generate_store_assets` 负责落盘。
//! - 任一步骤出错立即返回，不做局部重试；每个输出都经临时文件原子替换，
//!   不会留下写了一半的 PNG。已成功写出的商店图标在宣传图失败时保留。

use std::path::PathBuf;
use std::time::Instant;

use image::{DynamicImage, RgbaImage};

use crate::config::AssetConfig;
use crate::error::AssetError;
use crate::image_ops::{
    centered_offset, load_image, paste_with_alpha_mask, resize_exact_rgba, solid_canvas,
    write_png_atomic,
};

/// 生成结果：两个输出文件的路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAssets {
    pub store_icon: PathBuf,
    pub feature_graphic: PathBuf,
}

/// 渲染商店图标。
pub fn render_store_icon(source: &RgbaImage, config: &AssetConfig) -> RgbaImage {
    resize_exact_rgba(
        source,
        config.store_icon_size,
        config.store_icon_size,
        config.resize_filter,
    )
}

/// 渲染宣传图：品牌色画布 + 居中图标。
pub fn render_feature_graphic(source: &RgbaImage, config: &AssetConfig) -> RgbaImage {
    let (canvas_width, canvas_height) = config.feature_graphic_size;
    let icon_size = config.feature_icon_size;

    let mut canvas = solid_canvas(canvas_width, canvas_height, config.brand_color);
    let icon = resize_exact_rgba(source, icon_size, icon_size, config.resize_filter);

    let (x, y) = centered_offset((canvas_width, canvas_height), (icon_size, icon_size));
    log::debug!("宣传图图标位置：({}, {})", x, y);
    paste_with_alpha_mask(&mut canvas, &icon, x, y);

    canvas
}

/// 加载源图标并写出两张商店素材。
///
/// # 示例
/// ```rust,ignore
/// use asset_tools::{config::AssetConfig, store_assets::generate_store_assets};
///
/// let assets = generate_store_assets(&AssetConfig::default())?;
/// println!("{}", assets.feature_graphic.display());
/// # Ok::<(), asset_tools::AssetError>(())
/// ```
pub fn generate_store_assets(config: &AssetConfig) -> Result<GeneratedAssets, AssetError> {
    config.validate()?;
    let total_start = Instant::now();

    log::info!("正在加载图标：{}", config.source_icon.display());
    let source = load_image(&config.source_icon, config.max_decoded_pixels)?.to_rgba8();

    log::info!("正在生成商店图标（{0}x{0}）...", config.store_icon_size);
    let store_icon = render_store_icon(&source, config);
    write_png_atomic(
        &DynamicImage::ImageRgba8(store_icon),
        &config.store_icon_output,
        &config.temp_path_for(&config.store_icon_output),
    )?;
    log::info!("✅ 已保存：{}", config.store_icon_output.display());

    let (canvas_width, canvas_height) = config.feature_graphic_size;
    log::info!("正在生成宣传图（{}x{}）...", canvas_width, canvas_height);
    let feature_graphic = render_feature_graphic(&source, config);
    write_png_atomic(
        &DynamicImage::ImageRgba8(feature_graphic),
        &config.feature_graphic_output,
        &config.temp_path_for(&config.feature_graphic_output),
    )?;
    log::info!("✅ 已保存：{}", config.feature_graphic_output.display());

    log::info!(
        "⏱️ 商店素材生成完成，总耗时 {}ms",
        total_start.elapsed().as_millis()
    );

    Ok(GeneratedAssets {
        store_icon: config.store_icon_output.clone(),
        feature_graphic: config.feature_graphic_output.clone(),
    })
}
