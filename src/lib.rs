//! # Android 构建图片资源工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌─ bin/convert_images ───────┐   ┌─ bin/create_store_assets ─┐
//! │  读取配置 → normalizer      │   │  读取配置 → store_assets   │
//! └─────────────┬──────────────┘   └─────────────┬─────────────┘
//!               ↓                                ↓
//! ┌──────────────────────────────────────────────────────────────┐
//! │ image_ops   加载(按内容嗅探) · 通道归一化 · 缩放 · 合成 · PNG 原子写出 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AssetError` |
//! | [`config`] | 目标文件列表、输出路径、素材规格（可由 JSON 覆盖） |
//! | [`image_ops`] | 两条流程共享的图片底层步骤 |
//! | [`normalizer`] | 将误命名的图片就地重写为真正的 PNG |
//! | [`store_assets`] | 从启动图标生成商店图标与宣传图 |

pub mod config;
pub mod error;
pub mod image_ops;
pub mod normalizer;
pub mod store_assets;

pub use config::{AssetConfig, ResampleFilter};
pub use error::AssetError;

/// 初始化日志：默认 `info` 级别，可通过 `RUST_LOG` 覆盖。
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
