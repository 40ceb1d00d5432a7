//! # 配置模块
//!
//! ## 设计思路
//!
//! 将原先硬编码在脚本中的路径与常量集中到 `AssetConfig`，
//! 让“处理哪些文件、输出到哪里、尺寸与品牌色”成为显式输入而非散落在逻辑里。
//!
//! ## 实现思路
//!
//! - `Default` 复现 Android 工程内的默认路径与商店素材规格。
//! - 通过 `serde` 支持从 JSON 文件覆盖任意字段（缺省字段回落到默认值）。
//! - `ResampleFilter` 为滤镜策略的稳定字符串表示，同时映射到
//!   `image` 与 `fast_image_resize` 两套滤镜类型。
//! - `validate` 在加载后统一做尺寸与列表校验，避免运行到一半才失败。

use std::fs;
use std::path::{Path, PathBuf};

use fast_image_resize as fr;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// 二进制默认读取的配置文件名（位于当前工作目录）。
pub const DEFAULT_CONFIG_FILE: &str = "asset-tools.json";

/// 需要修正格式的默认文件列表：五个密度的启动图标 + 启动页 logo。
pub const DEFAULT_NORMALIZE_TARGETS: [&str; 6] = [
    "app/src/main/res/mipmap-hdpi/ic_launcher.png",
    "app/src/main/res/mipmap-mdpi/ic_launcher.png",
    "app/src/main/res/mipmap-xhdpi/ic_launcher.png",
    "app/src/main/res/mipmap-xxhdpi/ic_launcher.png",
    "app/src/main/res/mipmap-xxxhdpi/ic_launcher.png",
    "app/src/main/res/drawable/ic_splash_logo.png",
];

/// 品牌色：Teal #009688。
pub const BRAND_TEAL: [u8; 4] = [0, 150, 136, 255];

/// 缩放滤镜策略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Triangle,
    Nearest,
}

impl ResampleFilter {
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Triangle => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }

    pub(crate) fn to_fast_filter(self) -> fr::FilterType {
        match self {
            Self::Lanczos3 => fr::FilterType::Lanczos3,
            Self::CatmullRom => fr::FilterType::CatmullRom,
            Self::Triangle => fr::FilterType::Bilinear,
            Self::Nearest => fr::FilterType::Box,
        }
    }
}

/// 工具整体配置。
///
/// 字段覆盖格式修正（目标列表、临时文件后缀）与商店素材生成（源图、输出、规格）两部分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// 需要就地转为 PNG 的文件，按顺序处理。
    pub normalize_targets: Vec<PathBuf>,
    /// 临时输出文件后缀，拼接在原路径之后。
    pub temp_suffix: String,
    /// 商店素材的源图标（最高密度启动图标）。
    pub source_icon: PathBuf,
    pub store_icon_output: PathBuf,
    pub feature_graphic_output: PathBuf,
    /// 商店图标边长（像素）。
    pub store_icon_size: u32,
    /// 宣传图画布尺寸 `(宽, 高)`。
    pub feature_graphic_size: (u32, u32),
    /// 宣传图中居中图标的边长。
    pub feature_icon_size: u32,
    /// 宣传图背景色 RGBA。
    pub brand_color: [u8; 4],
    pub resize_filter: ResampleFilter,
    /// 解码前按 header 尺寸校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            normalize_targets: DEFAULT_NORMALIZE_TARGETS
                .iter()
                .map(PathBuf::from)
                .collect(),
            temp_suffix: ".temp".to_string(),
            source_icon: PathBuf::from("app/src/main/res/mipmap-hdpi/ic_launcher.png"),
            store_icon_output: PathBuf::from("play_store_icon.png"),
            feature_graphic_output: PathBuf::from("play_store_feature_graphic.png"),
            store_icon_size: 512,
            feature_graphic_size: (1024, 500),
            feature_icon_size: 300,
            brand_color: BRAND_TEAL,
            resize_filter: ResampleFilter::Lanczos3,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl AssetConfig {
    /// 读取配置文件；文件不存在时使用默认配置。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use asset_tools::config::{AssetConfig, DEFAULT_CONFIG_FILE};
    ///
    /// let config = AssetConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    /// # Ok::<(), asset_tools::AssetError>(())
    /// ```
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("未找到配置文件 {}，使用默认配置", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AssetError::Config(format!("读取 {} 失败：{}", path.display(), e)))?;
        let config = Self::from_json(&content).map_err(|e| match e {
            AssetError::Config(msg) => AssetError::Config(format!("{}：{}", path.display(), msg)),
            other => other,
        })?;

        log::info!("⚙️ 已加载配置文件：{}", path.display());
        Ok(config)
    }

    /// 从 JSON 文本解析并校验配置。
    pub fn from_json(content: &str) -> Result<Self, AssetError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| AssetError::Config(format!("解析配置失败：{}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AssetError> {
        if self.temp_suffix.is_empty() {
            return Err(AssetError::Config("temp_suffix 不能为空".to_string()));
        }
        if self.store_icon_size == 0 || self.feature_icon_size == 0 {
            return Err(AssetError::Config("图标尺寸必须大于 0".to_string()));
        }

        let (canvas_width, canvas_height) = self.feature_graphic_size;
        if canvas_width == 0 || canvas_height == 0 {
            return Err(AssetError::Config("宣传图画布尺寸必须大于 0".to_string()));
        }
        if self.feature_icon_size > canvas_width || self.feature_icon_size > canvas_height {
            return Err(AssetError::Config(format!(
                "宣传图图标 {0}x{0} 超出画布 {1}x{2}",
                self.feature_icon_size, canvas_width, canvas_height
            )));
        }
        if self.max_decoded_pixels == 0 {
            return Err(AssetError::Config("max_decoded_pixels 不能为 0".to_string()));
        }

        Ok(())
    }

    /// 原路径 + 后缀，得到同目录下的临时输出路径。
    pub fn temp_path_for(&self, path: &Path) -> PathBuf {
        let mut raw = path.as_os_str().to_owned();
        raw.push(&self.temp_suffix);
        PathBuf::from(raw)
    }
}
