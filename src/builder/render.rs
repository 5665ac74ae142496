use image::{GrayImage, Luma};

use super::QR;

// Quiet zone width in modules on every side
pub const QUIET_ZONE: usize = 4;

// Renderer
//------------------------------------------------------------------------------

impl QR {
    /// Each module becomes a `module_sz` square of pixels, surrounded by the
    /// light quiet zone.
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        debug_assert!(module_sz > 0, "Module size must be positive");

        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = self.width() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        GrayImage::from_fn(total_sz, total_sz, |x, y| {
            let symbol = qz_sz..qz_sz + qr_sz;
            if !symbol.contains(&x) || !symbol.contains(&y) {
                return Luma([255]);
            }
            let r = ((y - qz_sz) / module_sz) as i32;
            let c = ((x - qz_sz) / module_sz) as i32;
            Luma([self.get(r, c).select(0, 255)])
        })
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        debug_assert!(module_sz > 0, "Module size must be positive");

        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push(' ');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i32;
                let c = ((j - qz_sz) / module_sz) as i32;
                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }
        canvas
    }
}
