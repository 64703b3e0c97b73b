//! HUD layout.
//!
//! Pure geometry: given the window size, the measured sizes of the static
//! labels and icons, and the current stocks, compute where everything goes.
//! The HUD lives right of the arena divider; the FPS readout hugs the
//! top-right corner.

use arrayvec::ArrayVec;

use crate::types::{Rect, HUD_ICON_GAP, HUD_INSET, MAX_BOMBS, MAX_HEALTH};

/// First HUD row, below the FPS readout.
const FIRST_ROW_Y: i32 = 40;

/// Vertical gap between HUD rows.
const ROW_GAP: i32 = 8;

/// Measured sizes the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudMetrics {
    pub window_width: u32,
    pub hp_label: (u32, u32),
    pub bombs_label: (u32, u32),
    pub heart: (u32, u32),
    pub bomb: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLayout {
    pub hp_label: Rect,
    pub hearts: ArrayVec<Rect, { MAX_HEALTH as usize }>,
    pub bombs_label: Rect,
    pub bombs: ArrayVec<Rect, { MAX_BOMBS as usize }>,
}

/// Lay out the health and bomb rows.
///
/// One icon per unit of stock, left to right after the label. Stocks above the
/// caps are drawn at the cap.
pub fn layout_hud(metrics: &HudMetrics, health: u32, bombs: u32) -> HudLayout {
    let origin_x = metrics.window_width as i32 / 2 + HUD_INSET;

    let hp_label = sized(origin_x, FIRST_ROW_Y, metrics.hp_label);
    let mut hearts: ArrayVec<Rect, { MAX_HEALTH as usize }> = ArrayVec::new();
    icon_row(&mut hearts, &hp_label, metrics.heart, health);

    let hp_row_h = hp_label.h.max(metrics.heart.1 as i32);
    let bombs_label = sized(origin_x, FIRST_ROW_Y + hp_row_h + ROW_GAP, metrics.bombs_label);
    let mut bomb_icons: ArrayVec<Rect, { MAX_BOMBS as usize }> = ArrayVec::new();
    icon_row(&mut bomb_icons, &bombs_label, metrics.bomb, bombs);

    HudLayout {
        hp_label,
        hearts,
        bombs_label,
        bombs: bomb_icons,
    }
}

/// Position of the FPS readout: flush to the top-right corner, inset by [`HUD_INSET`].
pub fn fps_rect(window_width: u32, text_size: (u32, u32)) -> Rect {
    let (w, h) = text_size;
    Rect::new(
        window_width as i32 - w as i32 - HUD_INSET,
        HUD_INSET,
        w as i32,
        h as i32,
    )
}

fn sized(x: i32, y: i32, size: (u32, u32)) -> Rect {
    Rect::new(x, y, size.0 as i32, size.1 as i32)
}

fn icon_row<const N: usize>(
    out: &mut ArrayVec<Rect, N>,
    label: &Rect,
    icon: (u32, u32),
    count: u32,
) {
    let (w, h) = (icon.0 as i32, icon.1 as i32);
    let mut x = label.right() + HUD_ICON_GAP;
    for _ in 0..(count as usize).min(N) {
        out.push(Rect::new(x, label.y, w, h));
        x += w + HUD_ICON_GAP;
    }
}
