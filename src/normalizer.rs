//! # 图片格式修正（normalizer）
//!
//! ## 设计思路
//!
//! 部分启动图标实际是 JPEG 字节却以 `.png` 命名，Android 打包时会报错。
//! 本模块按配置列表逐个文件处理：按内容解码 → 通道归一化 → 编码为真正的 PNG
//! → 临时文件原子替换原文件。
//!
//! ## 实现思路
//!
//! - 每个文件独立产出 [`ConversionOutcome`]，单个失败不会中断整批。
//! - 不存在的文件单独归类为 `NotFound`，且不会在该路径创建任何文件。
//! - 汇总结果放入 [`ConversionReport`]，由调用侧决定如何输出；进程退出码不受失败影响。

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ColorType, GenericImageView};

use crate::config::AssetConfig;
use crate::error::AssetError;
use crate::image_ops::{load_image, normalize_channel_layout, write_png_atomic};

/// 成功转换后的图片信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertedImage {
    pub width: u32,
    pub height: u32,
    pub source_layout: ColorType,
    pub stored_layout: ColorType,
}

/// 单个文件的处理结果。
#[derive(Debug)]
pub enum ConversionOutcome {
    Converted(ConvertedImage),
    NotFound,
    Failed(AssetError),
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

/// 整批处理报告，保持输入顺序。
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub entries: Vec<(PathBuf, ConversionOutcome)>,
}

impl ConversionReport {
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    /// 失败数（含文件不存在）。
    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    pub fn outcome_for(&self, path: &Path) -> Option<&ConversionOutcome> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| outcome)
    }

    /// 单个文件的状态行。
    pub fn status_line(path: &Path, outcome: &ConversionOutcome) -> String {
        match outcome {
            ConversionOutcome::Converted(_) => format!("✓ 已转换：{}", path.display()),
            ConversionOutcome::NotFound => format!("✗ 文件不存在：{}", path.display()),
            ConversionOutcome::Failed(err) => {
                format!("✗ 转换失败 {}：{}", path.display(), err)
            }
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, outcome) in &self.entries {
            writeln!(f, "{}", Self::status_line(path, outcome))?;
        }
        let rule = "=".repeat(50);
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "转换完成！")?;
        writeln!(
            f,
            "成功：{} | 失败：{}",
            self.success_count(),
            self.failure_count()
        )?;
        write!(f, "{}", rule)
    }
}

/// 将单个文件就地重写为 PNG。
///
/// # 示例
/// ```rust,ignore
/// use asset_tools::{config::AssetConfig, normalizer::convert_to_png};
///
/// let config = AssetConfig::default();
/// let info = convert_to_png(std::path::Path::new("ic_launcher.png"), &config)?;
/// println!("{}x{}", info.width, info.height);
/// # Ok::<(), asset_tools::AssetError>(())
/// ```
pub fn convert_to_png(path: &Path, config: &AssetConfig) -> Result<ConvertedImage, AssetError> {
    let decoded = load_image(path, config.max_decoded_pixels)?;
    let source_layout = decoded.color();
    let (width, height) = decoded.dimensions();

    let normalized = normalize_channel_layout(decoded);
    let stored_layout = normalized.color();

    write_png_atomic(&normalized, path, &config.temp_path_for(path))?;

    log::info!(
        "✅ 已重写为 PNG：{} ({}x{}, {:?} -> {:?})",
        path.display(),
        width,
        height,
        source_layout,
        stored_layout
    );

    Ok(ConvertedImage {
        width,
        height,
        source_layout,
        stored_layout,
    })
}

/// 处理配置中的全部目标文件。
pub fn normalize_all(config: &AssetConfig) -> ConversionReport {
    normalize_paths(&config.normalize_targets, config)
}

/// 按顺序处理给定路径列表；任何单个失败都只记录，不中断。
pub fn normalize_paths(paths: &[PathBuf], config: &AssetConfig) -> ConversionReport {
    let mut report = ConversionReport::default();

    for path in paths {
        let outcome = if !path.exists() {
            log::warn!("跳过不存在的文件：{}", path.display());
            ConversionOutcome::NotFound
        } else {
            match convert_to_png(path, config) {
                Ok(info) => ConversionOutcome::Converted(info),
                Err(err) if err.is_not_found() => ConversionOutcome::NotFound,
                Err(err) => {
                    log::error!("转换失败 {}：{}", path.display(), err);
                    ConversionOutcome::Failed(err)
                }
            }
        };
        report.entries.push((path.clone(), outcome));
    }

    log::info!(
        "格式修正结束：成功 {} / 失败 {}",
        report.success_count(),
        report.failure_count()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_not_found_as_failure() {
        let report = ConversionReport {
            entries: vec![
                (
                    PathBuf::from("a.png"),
                    ConversionOutcome::Converted(ConvertedImage {
                        width: 1,
                        height: 1,
                        source_layout: ColorType::Rgb8,
                        stored_layout: ColorType::Rgb8,
                    }),
                ),
                (PathBuf::from("b.png"), ConversionOutcome::NotFound),
                (
                    PathBuf::from("c.png"),
                    ConversionOutcome::Failed(AssetError::Decode("broken".to_string())),
                ),
            ],
        };

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 2);
    }

    #[test]
    fn status_lines_distinguish_each_outcome() {
        let path = Path::new("res/ic.png");
        let converted = ConversionReport::status_line(
            path,
            &ConversionOutcome::Converted(ConvertedImage {
                width: 2,
                height: 2,
                source_layout: ColorType::L8,
                stored_layout: ColorType::Rgb8,
            }),
        );
        let missing = ConversionReport::status_line(path, &ConversionOutcome::NotFound);
        let failed = ConversionReport::status_line(
            path,
            &ConversionOutcome::Failed(AssetError::Decode("bad bytes".to_string())),
        );

        assert!(converted.starts_with('✓'));
        assert!(missing.contains("文件不存在"));
        assert!(failed.contains("转换失败") && failed.contains("bad bytes"));
        assert_ne!(missing, failed);
    }

    #[test]
    fn summary_lists_counts() {
        let report = ConversionReport {
            entries: vec![(PathBuf::from("x.png"), ConversionOutcome::NotFound)],
        };
        let rendered = report.to_string();
        assert!(rendered.contains("成功：0 | 失败：1"));
    }

    #[test]
    fn empty_target_list_yields_empty_report() {
        let report = normalize_paths(&[], &AssetConfig::default());
        assert!(report.entries.is_empty());
        assert_eq!(report.failure_count(), 0);
    }
}
