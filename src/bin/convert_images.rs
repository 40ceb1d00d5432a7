//! 将误命名为 `.png` 的图片（通常是 JPEG）就地重写为真正的 PNG。
//!
//! 单个文件失败只记录在报告里，进程始终以成功状态退出。

use asset_tools::config::{AssetConfig, DEFAULT_CONFIG_FILE};
use asset_tools::normalizer;

fn main() {
    asset_tools::init_logging();

    let config = match AssetConfig::load_or_default(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            println!("✗ {err}");
            return;
        }
    };

    println!("正在将图片转换为 PNG 格式...\n");
    let report = normalizer::normalize_all(&config);
    println!("{report}");
}
