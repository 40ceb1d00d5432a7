//! # PNG 写出
//!
//! ## 设计思路
//!
//! 目标文件只会以两种状态存在：旧内容，或完整的新 PNG。
//! 先把编码结果写到同目录临时文件，`fsync` 后再 `rename` 覆盖原文件。
//!
//! ## 实现思路
//!
//! - `TempOutput` 为 RAII 守卫：未 `commit` 就被 drop（任一步骤出错）时删除临时文件。
//! - 编码使用最高压缩等级 + 自适应行过滤，不写入任何额外辅助块。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::error::AssetError;

/// 以最高压缩等级将图片编码为 PNG。
pub fn encode_png<W: Write>(image: &DynamicImage, writer: W) -> Result<(), AssetError> {
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| AssetError::Encode(format!("PNG 编码失败：{}", e)))
}

/// 编码到 `temp_path`，成功后原子替换 `target`。
pub fn write_png_atomic(
    image: &DynamicImage,
    target: &Path,
    temp_path: &Path,
) -> Result<(), AssetError> {
    let temp = TempOutput::create(temp_path)?;

    {
        let mut writer = BufWriter::new(temp.file()?);
        encode_png(image, &mut writer)
            .map_err(|e| AssetError::Encode(format!("{}：{}", target.display(), e)))?;
        writer
            .flush()
            .map_err(|e| AssetError::io("写入", temp.path(), e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| AssetError::io("同步", temp.path(), e))?;
    }

    temp.commit(target)
}

/// 临时输出文件守卫。
struct TempOutput {
    path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl TempOutput {
    fn create(path: &Path) -> Result<Self, AssetError> {
        let file = File::create(path).map_err(|e| {
            AssetError::FileSystem(format!("创建临时文件 {} 失败：{}", path.display(), e))
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            committed: false,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// 写入用的文件句柄，`commit` 之后不可用。
    fn file(&self) -> Result<&File, AssetError> {
        self.file
            .as_ref()
            .ok_or_else(|| AssetError::FileSystem(format!("{} 句柄已关闭", self.path.display())))
    }

    fn commit(mut self, target: &Path) -> Result<(), AssetError> {
        // Windows 上 rename 前必须先关闭句柄
        drop(self.file.take());
        fs::rename(&self.path, target).map_err(|e| {
            AssetError::FileSystem(format!(
                "替换 {} -> {} 失败：{}",
                self.path.display(),
                target.display(),
                e
            ))
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for TempOutput {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        drop(self.file.take());
        if let Err(err) = fs::remove_file(&self.path) {
            log::warn!("清理临时文件 {} 失败：{}", self.path.display(), err);
        } else {
            log::debug!("🧹 已清理临时文件：{}", self.path.display());
        }
    }
}
