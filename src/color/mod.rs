use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Convert a frame of HSV colors into `out`
///
/// Converts `min(colors.len(), out.len())` pixels.
pub fn hsv_frame_to_rgb(colors: &[Hsv], out: &mut [Rgb]) {
    for (rgb, hsv) in out.iter_mut().zip(colors) {
        *rgb = hsv2rgb(*hsv);
    }
}
