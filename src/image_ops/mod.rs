//! # 图片操作模块（image_ops）
//!
//! ## 设计思路
//!
//! 两条流程（格式修正、商店素材生成）共享同一组底层步骤，按职责拆分：
//!
//! - `loader`：读取字节、按内容嗅探格式、像素上限校验、完整解码
//! - `layout`：通道布局归一化（非 RGB/RGBA 一律转 RGB）
//! - `resize`：`fast_image_resize` 精确缩放，失败回退 `image` 自带实现
//! - `compose`：纯色画布、居中坐标计算、按 alpha 蒙版粘贴
//! - `writer`：PNG 编码（最高压缩）+ 临时文件原子替换
//!
//! ## 调用链
//!
//! ```text
//! normalizer ──> loader → layout → writer
//! store_assets ─> loader → resize → compose → writer
//! ```

mod compose;
mod layout;
mod loader;
mod resize;
mod writer;

pub use compose::{centered_offset, paste_with_alpha_mask, solid_canvas};
pub use layout::{is_png_native_layout, normalize_channel_layout};
pub use loader::{load_image, sniff_format};
pub use resize::resize_exact_rgba;
pub use writer::{encode_png, write_png_atomic};
