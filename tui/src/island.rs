//! Projects the island's derived pixel dimensions into terminal cells.
//!
//! The engine derives a pixel footprint per preset and viewport class; this
//! module scales it to cells (terminal cells are roughly 8x16 px), eases
//! between the previous and current footprint while a morph runs, and anchors
//! the result bottom-center like the web container.

use ratatui::layout::Rect;

use campus_engine::App;
use campus_types::Dimensions;

const CELL_PX_X: f32 = 8.0;
const CELL_PX_Y: f32 = 16.0;

/// Cap so oversized presets (ultra/massive) stay a banner, not a wall.
const MAX_CELL_HEIGHT: u16 = 9;

/// Scale a pixel footprint to terminal cells.
#[must_use]
pub fn project_dimensions(dim: Dimensions) -> (u16, u16) {
    let width = (dim.width / CELL_PX_X).round() as u16;
    let height = ((dim.height / CELL_PX_Y).round() as u16).min(MAX_CELL_HEIGHT);
    (width, height)
}

/// Where the island renders this frame, or `None` while it has no footprint
/// (the empty preset).
#[must_use]
pub fn island_rect(app: &App, viewport: Rect) -> Option<Rect> {
    let target = app.island_dimensions();

    let dim = match &app.view().morph {
        Some(morph) => {
            let t = ease_out_cubic(morph.progress());
            let from = app.island_previous_dimensions();
            Dimensions {
                width: lerp(from.width, target.width, t),
                height: lerp(from.height, target.height, t),
                corner_radius: target.corner_radius,
            }
        }
        None => target,
    };

    let (width, height) = project_dimensions(dim);
    if width == 0 || height == 0 {
        return None;
    }

    let width = width.min(viewport.width);
    let height = height.min(viewport.height);
    let x = viewport.x + (viewport.width - width) / 2;
    let y = viewport.y + viewport.height - height;
    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
