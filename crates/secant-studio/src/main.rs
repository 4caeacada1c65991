use anyhow::Result;

use secant_engine::coords::{Surface, Vec2};
use secant_engine::input::PointerEvent;
use secant_engine::logging::{LoggingConfig, init_logging};
use secant_engine::paint::Color;
use secant_engine::scene::{DrawCmd, DrawList};
use secant_engine::sketch::{Sketch, palette};

// Terminal canvas size. Odd so the NDC origin lands on a cell center.
const COLS: usize = 57;
const ROWS: usize = 29;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Startup banner — the "window" here is your terminal.
    println!();
    println!("  ╔══════════════════════════════════════════╗");
    println!("  ║            SECANT STUDIO v0.1            ║");
    println!("  ║   circle x segment intersection sketch   ║");
    println!("  ╠══════════════════════════════════════════╣");
    println!("  ║  ascii rasterizer  ·  700x700 surface    ║");
    println!("  ║  replaying recorded pointer traces...    ║");
    println!("  ╚══════════════════════════════════════════╝");

    let mut sketch = Sketch::new(Surface::new(700.0, 700.0))?;
    let mut list = DrawList::new();

    // ── TRACE 1: diameter chord, two intersections ────────────────────────
    println!();
    println!("  [TRACE 1] circle r=0.5 at the origin, segment straight through");

    drive(&mut sketch, &[
        PointerEvent::Pressed { x: 350.0, y: 350.0 },
        PointerEvent::Moved { x: 350.0, y: 260.0 },
        PointerEvent::Moved { x: 350.0, y: 175.0 },
    ]);
    show(&mut sketch, &mut list, "mid-drag preview (not committed yet)");

    drive(&mut sketch, &[PointerEvent::Released]);
    drive(&mut sketch, &[
        PointerEvent::Pressed { x: 0.0, y: 350.0 },
        PointerEvent::Moved { x: 350.0, y: 350.0 },
        PointerEvent::Moved { x: 700.0, y: 350.0 },
        PointerEvent::Released,
    ]);
    show(&mut sketch, &mut list, "both gestures committed");

    // ── TRACE 2: line above the circle, no intersection ───────────────────
    sketch.reset();
    println!();
    println!("  [TRACE 2] circle r=0.3, segment along y=1 — a clean miss");

    drive(&mut sketch, &[
        PointerEvent::Pressed { x: 350.0, y: 350.0 },
        PointerEvent::Moved { x: 350.0, y: 245.0 },
        PointerEvent::Released,
    ]);
    drive(&mut sketch, &[
        PointerEvent::Pressed { x: 0.0, y: 0.0 },
        PointerEvent::Moved { x: 700.0, y: 0.0 },
        PointerEvent::Released,
    ]);
    show(&mut sketch, &mut list, "committed — nothing to mark");

    println!();
    println!("  Traces complete. Legend: o circle   # segment   @ intersection");
    println!("                           . preview  + axes");
    println!();

    log::info!("pointer trace replay complete");
    Ok(())
}

/// Feeds a recorded pointer trace into the sketch.
fn drive(sketch: &mut Sketch, trace: &[PointerEvent]) {
    for &ev in trace {
        sketch.apply(ev);
    }
}

/// Prints the overlay lines and, when the sketch requested a redraw,
/// rasterizes its scene onto the terminal.
fn show(sketch: &mut Sketch, list: &mut DrawList, title: &str) {
    println!();
    println!("  ── {title}");
    for line in sketch.overlay().lines() {
        println!("  │ {line}");
    }

    if !sketch.take_redraw() {
        return;
    }

    sketch.record_scene(list);

    let mut canvas = AsciiCanvas::new();
    canvas.raster(list);
    canvas.print();
}

// ── ascii rendering collaborator ──────────────────────────────────────────

/// Minimal rendering collaborator: plots NDC geometry on a character grid.
struct AsciiCanvas {
    cells: Vec<char>,
}

impl AsciiCanvas {
    fn new() -> Self {
        Self {
            cells: vec![' '; COLS * ROWS],
        }
    }

    fn plot(&mut self, p: Vec2, glyph: char) {
        if !p.is_finite() {
            return;
        }

        let col = ((p.x + 1.0) / 2.0 * (COLS - 1) as f32).round() as isize;
        let row = ((1.0 - p.y) / 2.0 * (ROWS - 1) as f32).round() as isize;

        if (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
            self.cells[row as usize * COLS + col as usize] = glyph;
        }
    }

    fn plot_line(&mut self, a: Vec2, b: Vec2, glyph: char) {
        let steps = (COLS.max(ROWS) * 2) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(a + (b - a) * t, glyph);
        }
    }

    /// Rasterizes a draw stream in paint order, so later layers overwrite
    /// earlier ones exactly like a framebuffer would.
    fn raster(&mut self, list: &mut DrawList) {
        // Collect first: plotting needs &mut self while the iterator borrows the list.
        let items: Vec<_> = list.iter_in_paint_order().cloned().collect();

        for item in items {
            match item.cmd {
                DrawCmd::Polyline(p) => {
                    let glyph = glyph_for(p.color);
                    for pair in p.points.windows(2) {
                        self.plot_line(pair[0], pair[1], glyph);
                    }
                }
                DrawCmd::Segment(s) => {
                    self.plot_line(s.segment.p1, s.segment.p2, glyph_for(s.color));
                }
                DrawCmd::Markers(m) => {
                    let glyph = glyph_for(m.color);
                    for p in m.points {
                        self.plot(p, glyph);
                    }
                }
            }
        }
    }

    fn print(&self) {
        println!("  ┌{}┐", "─".repeat(COLS));
        for row in self.cells.chunks(COLS) {
            println!("  │{}│", row.iter().collect::<String>());
        }
        println!("  └{}┘", "─".repeat(COLS));
    }
}

fn glyph_for(color: Color) -> char {
    if color == palette::CIRCLE {
        'o'
    } else if color == palette::SEGMENT {
        '#'
    } else if color == palette::MARKER {
        '@'
    } else if color == palette::PREVIEW {
        '.'
    } else if color == palette::AXIS_X || color == palette::AXIS_Y {
        '+'
    } else {
        '?'
    }
}
