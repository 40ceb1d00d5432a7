//! 从启动图标生成应用商店图标（512x512）与宣传图（1024x500）。

use asset_tools::config::{AssetConfig, DEFAULT_CONFIG_FILE};
use asset_tools::store_assets;

fn main() {
    asset_tools::init_logging();

    let result = AssetConfig::load_or_default(DEFAULT_CONFIG_FILE)
        .and_then(|config| store_assets::generate_store_assets(&config));

    match result {
        Ok(assets) => {
            println!("✅ 已保存：{}", assets.store_icon.display());
            println!("✅ 已保存：{}", assets.feature_graphic.display());
        }
        Err(err) => println!("❌ 错误：{err}"),
    }
}
