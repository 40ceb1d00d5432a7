//! # 画布与合成
//!
//! 粘贴语义：以覆盖图自身的 alpha 作为蒙版，对每个通道（含 alpha）做线性混合
//! `out = src * m + dst * (1 - m)`，`m = src_alpha / 255`。
//! 蒙版为 255 时结果与覆盖像素完全一致，为 0 时保留画布像素。

use image::{Rgba, RgbaImage};

/// 分配纯色 RGBA 画布。
pub fn solid_canvas(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// 覆盖图在画布上居中时的左上角坐标（向下取整）。
pub fn centered_offset(canvas: (u32, u32), overlay: (u32, u32)) -> (i64, i64) {
    let x = (canvas.0 as i64 - overlay.0 as i64).div_euclid(2);
    let y = (canvas.1 as i64 - overlay.1 as i64).div_euclid(2);
    (x, y)
}

/// 将 `overlay` 按自身 alpha 蒙版粘贴到 `canvas` 的 `(x, y)` 处，超出画布部分裁剪。
pub fn paste_with_alpha_mask(canvas: &mut RgbaImage, overlay: &RgbaImage, x: i64, y: i64) {
    let (canvas_width, canvas_height) = canvas.dimensions();

    for (ox, oy, src) in overlay.enumerate_pixels() {
        let cx = x + ox as i64;
        let cy = y + oy as i64;
        if cx < 0 || cy < 0 || cx >= canvas_width as i64 || cy >= canvas_height as i64 {
            continue;
        }

        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        *dst = blend_with_mask(*src, *dst);
    }
}

fn blend_with_mask(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let mask = src[3] as u32;
    match mask {
        255 => src,
        0 => dst,
        _ => {
            let mut out = [0u8; 4];
            for (channel, value) in out.iter_mut().enumerate() {
                let mixed = src[channel] as u32 * mask + dst[channel] as u32 * (255 - mask);
                *value = ((mixed + 127) / 255) as u8;
            }
            Rgba(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEAL: [u8; 4] = [0, 150, 136, 255];

    #[test]
    fn store_feature_graphic_offset() {
        assert_eq!(centered_offset((1024, 500), (300, 300)), (362, 100));
    }

    #[test]
    fn odd_remainder_rounds_down() {
        assert_eq!(centered_offset((11, 10), (4, 3)), (3, 3));
    }

    #[test]
    fn opaque_overlay_replaces_canvas() {
        let mut canvas = solid_canvas(6, 6, TEAL);
        let overlay = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        paste_with_alpha_mask(&mut canvas, &overlay, 2, 2);

        assert_eq!(canvas.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(1, 1).0, TEAL);
        assert_eq!(canvas.get_pixel(4, 4).0, TEAL);
    }

    #[test]
    fn transparent_overlay_keeps_canvas() {
        let mut canvas = solid_canvas(4, 4, TEAL);
        let overlay = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        paste_with_alpha_mask(&mut canvas, &overlay, 0, 0);
        assert!(canvas.pixels().all(|p| p.0 == TEAL));
    }

    #[test]
    fn half_alpha_blends_every_channel() {
        let mut canvas = solid_canvas(1, 1, TEAL);
        let overlay = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 128]));
        paste_with_alpha_mask(&mut canvas, &overlay, 0, 0);

        // r = 255*128/255, g = 150*127/255, b = 136*127/255, a = (128*128 + 255*127)/255
        assert_eq!(canvas.get_pixel(0, 0).0, [128, 75, 68, 191]);
    }

    #[test]
    fn overlay_outside_canvas_is_clipped() {
        let mut canvas = solid_canvas(4, 4, TEAL);
        let overlay = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        paste_with_alpha_mask(&mut canvas, &overlay, -2, 3);

        assert_eq!(canvas.get_pixel(0, 3).0, [1, 2, 3, 255]);
        assert_eq!(canvas.get_pixel(1, 3).0, TEAL);
        assert_eq!(canvas.get_pixel(0, 2).0, TEAL);
    }

    proptest! {
        #[test]
        fn centered_overlay_fits_with_balanced_margins(
            cw in 1u32..4096, ch in 1u32..4096, ow_seed in any::<u32>(), oh_seed in any::<u32>(),
        ) {
            let ow = ow_seed % cw + 1;
            let oh = oh_seed % ch + 1;
            let (x, y) = centered_offset((cw, ch), (ow, oh));

            prop_assert!(x >= 0 && y >= 0);
            let right = cw as i64 - (x + ow as i64);
            let bottom = ch as i64 - (y + oh as i64);
            prop_assert!(right - x == 0 || right - x == 1);
            prop_assert!(bottom - y == 0 || bottom - y == 1);
        }
    }
}
