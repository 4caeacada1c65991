use core::fmt;

use crate::coords::{Surface, Vec2};
use crate::geom::{Circle, IntersectionSet, Segment, intersections};
use crate::input::PointerEvent;
use crate::overlay::Overlay;
use crate::scene::{DrawList, ZIndex};

use super::{Phase, palette};

// Scene layers, back to front.
const Z_AXES: ZIndex = ZIndex::new(0);
const Z_PREVIEW: ZIndex = ZIndex::new(5);
const Z_COMMITTED: ZIndex = ZIndex::new(10);
const Z_MARKERS: ZIndex = ZIndex::new(20);

/// A sketch session cannot start without a usable drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceError {
    pub width: f32,
    pub height: f32,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid drawing surface {}x{}: dimensions must be positive and finite",
            self.width, self.height
        )
    }
}

impl std::error::Error for SurfaceError {}

/// Single-shot sketch session: one circle, then one segment.
///
/// All stored geometry is NDC; pixels are normalized on entry. Pointer input
/// after `Done` is ignored — [`reset`](Self::reset) is the only restart path.
#[derive(Debug)]
pub struct Sketch {
    surface: Surface,
    phase: Phase,

    /// Press position of the active gesture.
    anchor: Option<Vec2>,
    /// Last move position of the active gesture.
    preview: Option<Vec2>,

    circle: Option<Circle>,
    segment: Option<Segment>,
    hits: IntersectionSet,

    overlay: Overlay,
    needs_redraw: bool,
}

impl Sketch {
    /// Starts an idle session on the given surface.
    ///
    /// Fails when the surface is unusable (zero, negative, or non-finite
    /// dimensions) — the one fatal condition in this design.
    pub fn new(surface: Surface) -> Result<Self, SurfaceError> {
        if !surface.is_valid() {
            return Err(SurfaceError {
                width: surface.width,
                height: surface.height,
            });
        }

        let mut sketch = Self {
            surface,
            phase: Phase::Idle,
            anchor: None,
            preview: None,
            circle: None,
            segment: None,
            hits: IntersectionSet::default(),
            overlay: Overlay::new(),
            needs_redraw: true,
        };
        sketch.write_prompts();
        Ok(sketch)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Committed circle, if the first gesture has finished.
    #[inline]
    pub fn circle(&self) -> Option<Circle> {
        self.circle
    }

    /// Committed segment, if the second gesture has finished.
    #[inline]
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// Intersection set. Empty until the segment commit computes it.
    #[inline]
    pub fn hits(&self) -> &IntersectionSet {
        &self.hits
    }

    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Returns whether a redraw was requested since the last call, and
    /// clears the request.
    #[inline]
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Applies one pointer event. Out-of-sequence events are silent no-ops.
    pub fn apply(&mut self, ev: PointerEvent) {
        match ev {
            PointerEvent::Pressed { x, y } => self.on_pressed(self.surface.to_ndc(x, y)),
            PointerEvent::Moved { x, y } => self.on_moved(self.surface.to_ndc(x, y)),
            PointerEvent::Released => self.on_released(),
        }
    }

    fn on_pressed(&mut self, p: Vec2) {
        if !self.phase.accepts_press() {
            log::debug!("press ignored in phase {:?}", self.phase);
            return;
        }

        self.anchor = Some(p);
        self.preview = None;
        self.phase = match self.phase {
            Phase::Idle => Phase::DraggingCircle,
            _ => Phase::DraggingLine,
        };

        log::debug!("gesture anchored at ({:.2}, {:.2}), phase {:?}", p.x, p.y, self.phase);
        self.needs_redraw = true;
    }

    fn on_moved(&mut self, p: Vec2) {
        if !self.phase.is_dragging() {
            return;
        }

        self.preview = Some(p);
        self.needs_redraw = true;
    }

    fn on_released(&mut self) {
        let Some(anchor) = self.anchor else {
            log::debug!("release ignored: no gesture in progress");
            return;
        };
        // No move before release degenerates to a zero-radius circle or a
        // zero-length segment; both are valid commits.
        let end = self.preview.unwrap_or(anchor);

        match self.phase {
            Phase::DraggingCircle => self.commit_circle(anchor, end),
            Phase::DraggingLine => self.commit_segment(anchor, end),
            // Anchor is only held while dragging.
            _ => return,
        }

        self.anchor = None;
        self.preview = None;
        self.needs_redraw = true;
    }

    // ── commits ───────────────────────────────────────────────────────────

    fn commit_circle(&mut self, center: Vec2, edge: Vec2) {
        let circle = Circle::new(center, center.distance(edge));

        self.overlay.set(
            1,
            format!(
                "Circle: center=({:.2}, {:.2}), r={:.2}",
                circle.center.x, circle.center.y, circle.radius
            ),
        );
        log::info!(
            "circle committed: center=({:.2}, {:.2}) r={:.2}",
            circle.center.x,
            circle.center.y,
            circle.radius
        );

        self.circle = Some(circle);
        self.phase = Phase::CircleCommitted;
    }

    fn commit_segment(&mut self, p1: Vec2, p2: Vec2) {
        let segment = Segment::new(p1, p2);

        self.overlay.set(
            2,
            format!(
                "Line: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
                segment.p1.x, segment.p1.y, segment.p2.x, segment.p2.y
            ),
        );

        // The circle exists in this phase by construction.
        if let Some(circle) = self.circle {
            self.hits = intersections(circle, segment);
        }
        self.overlay.set(3, self.hit_report());
        log::info!(
            "segment committed: ({:.2}, {:.2}) ~ ({:.2}, {:.2}), {} intersection(s)",
            segment.p1.x,
            segment.p1.y,
            segment.p2.x,
            segment.p2.y,
            self.hits.len()
        );

        self.segment = Some(segment);
        self.phase = Phase::Done;
    }

    fn hit_report(&self) -> String {
        if self.hits.is_empty() {
            return "No intersection".to_owned();
        }

        let points = self
            .hits
            .points()
            .iter()
            .map(|p| format!("({:.2},{:.2})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(", ");

        format!("Intersections ({}): {}", self.hits.len(), points)
    }

    // ── reset ─────────────────────────────────────────────────────────────

    /// Clears all committed and in-flight state, returning to `Idle`.
    ///
    /// The only way out of `Done`; pointer input itself never restarts a
    /// session.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.anchor = None;
        self.preview = None;
        self.circle = None;
        self.segment = None;
        self.hits = IntersectionSet::default();
        self.write_prompts();
        self.needs_redraw = true;

        log::info!("sketch reset");
    }

    fn write_prompts(&mut self) {
        for (i, prompt) in palette::PROMPTS.iter().enumerate() {
            self.overlay.set(i + 1, *prompt);
        }
    }

    // ── scene ─────────────────────────────────────────────────────────────

    /// Records the current scene into `list` (cleared first): coordinate
    /// axes, preview geometry below committed geometry, markers on top.
    pub fn record_scene(&self, list: &mut DrawList) {
        list.clear();

        self.record_axes(list);
        self.record_preview(list);

        if let Some(circle) = self.circle {
            list.push_circle_outline(Z_COMMITTED, circle, palette::CIRCLE);
        }
        if let Some(segment) = self.segment {
            list.push_segment(Z_COMMITTED, segment, palette::SEGMENT);
        }
        if !self.hits.is_empty() {
            list.push_markers(
                Z_MARKERS,
                self.hits.points().to_vec(),
                palette::MARKER_SIZE,
                palette::MARKER,
            );
        }
    }

    fn record_axes(&self, list: &mut DrawList) {
        let l = palette::AXIS_HALF_LEN;
        list.push_segment(
            Z_AXES,
            Segment::new(Vec2::new(-l, 0.0), Vec2::new(l, 0.0)),
            palette::AXIS_X,
        );
        list.push_segment(
            Z_AXES,
            Segment::new(Vec2::new(0.0, -l), Vec2::new(0.0, l)),
            palette::AXIS_Y,
        );
    }

    fn record_preview(&self, list: &mut DrawList) {
        let (Some(anchor), Some(end)) = (self.anchor, self.preview) else {
            return;
        };

        match self.phase {
            Phase::DraggingCircle => {
                let candidate = Circle::new(anchor, anchor.distance(end));
                list.push_circle_outline(Z_PREVIEW, candidate, palette::PREVIEW);
            }
            Phase::DraggingLine => {
                list.push_segment(Z_PREVIEW, Segment::new(anchor, end), palette::PREVIEW);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;
    use approx::assert_relative_eq;

    fn sketch() -> Sketch {
        Sketch::new(Surface::new(700.0, 700.0)).unwrap()
    }

    fn drag(s: &mut Sketch, from: (f32, f32), to: (f32, f32)) {
        s.apply(PointerEvent::Pressed { x: from.0, y: from.1 });
        s.apply(PointerEvent::Moved {
            x: (from.0 + to.0) / 2.0,
            y: (from.1 + to.1) / 2.0,
        });
        s.apply(PointerEvent::Moved { x: to.0, y: to.1 });
        s.apply(PointerEvent::Released);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_unusable_surface() {
        assert!(Sketch::new(Surface::new(0.0, 700.0)).is_err());
        assert!(Sketch::new(Surface::new(700.0, f32::NAN)).is_err());
    }

    #[test]
    fn starts_idle_with_prompts() {
        let s = sketch();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.overlay().line(1), "Draw circle (click & drag)");
        assert_eq!(s.overlay().line(2), "Then draw line segment");
        assert_eq!(s.overlay().line(3), "Intersections: none");
    }

    // ── circle gesture ────────────────────────────────────────────────────

    #[test]
    fn first_drag_commits_circle_in_ndc() {
        let mut s = sketch();
        // Pixel (350, 350) is NDC (0, 0); (350, 175) is (0, 0.5).
        drag(&mut s, (350.0, 350.0), (350.0, 175.0));

        assert_eq!(s.phase(), Phase::CircleCommitted);
        let circle = s.circle().unwrap();
        assert_relative_eq!(circle.center.x, 0.0);
        assert_relative_eq!(circle.center.y, 0.0);
        assert_relative_eq!(circle.radius, 0.5, epsilon = 1e-6);
        assert_eq!(s.overlay().line(1), "Circle: center=(0.00, 0.00), r=0.50");
    }

    #[test]
    fn press_release_without_move_commits_zero_radius_circle() {
        let mut s = sketch();
        s.apply(PointerEvent::Pressed { x: 175.0, y: 350.0 });
        s.apply(PointerEvent::Released);

        let circle = s.circle().unwrap();
        assert_eq!(circle.radius, 0.0);
        assert_relative_eq!(circle.center.x, -0.5, epsilon = 1e-6);
        assert_eq!(s.phase(), Phase::CircleCommitted);
    }

    #[test]
    fn move_during_drag_does_not_commit() {
        let mut s = sketch();
        s.apply(PointerEvent::Pressed { x: 350.0, y: 350.0 });
        s.apply(PointerEvent::Moved { x: 700.0, y: 350.0 });

        assert_eq!(s.phase(), Phase::DraggingCircle);
        assert!(s.circle().is_none());
    }

    // ── full session ──────────────────────────────────────────────────────

    #[test]
    fn diameter_segment_yields_two_hits_in_order() {
        let mut s = sketch();
        drag(&mut s, (350.0, 350.0), (350.0, 175.0)); // circle r = 0.5
        drag(&mut s, (0.0, 350.0), (700.0, 350.0)); // segment (-1,0) ~ (1,0)

        assert_eq!(s.phase(), Phase::Done);
        assert_eq!(s.hits().len(), 2);
        assert_relative_eq!(s.hits().points()[0].x, -0.5, epsilon = 1e-6);
        assert_relative_eq!(s.hits().points()[1].x, 0.5, epsilon = 1e-6);
        assert_eq!(
            s.overlay().line(3),
            "Intersections (2): (-0.50,0.00), (0.50,0.00)"
        );
    }

    #[test]
    fn missing_segment_reports_no_intersection() {
        let mut s = sketch();
        drag(&mut s, (350.0, 350.0), (350.0, 245.0)); // circle r = 0.3
        drag(&mut s, (0.0, 0.0), (700.0, 0.0)); // line y = 1 in NDC

        assert_eq!(s.phase(), Phase::Done);
        assert!(s.hits().is_empty());
        assert_eq!(s.overlay().line(3), "No intersection");
    }

    // ── out-of-sequence input ─────────────────────────────────────────────

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut s = sketch();
        s.apply(PointerEvent::Released);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.circle().is_none());
    }

    #[test]
    fn move_without_press_is_a_no_op() {
        let mut s = sketch();
        s.apply(PointerEvent::Moved { x: 100.0, y: 100.0 });
        assert_eq!(s.phase(), Phase::Idle);

        // A later press must not pick up that stale position as preview.
        s.apply(PointerEvent::Pressed { x: 350.0, y: 350.0 });
        s.apply(PointerEvent::Released);
        assert_eq!(s.circle().unwrap().radius, 0.0);
    }

    #[test]
    fn input_after_done_is_ignored() {
        let mut s = sketch();
        drag(&mut s, (350.0, 350.0), (350.0, 175.0));
        drag(&mut s, (0.0, 350.0), (700.0, 350.0));

        let circle = s.circle().unwrap();
        let segment = s.segment().unwrap();
        drag(&mut s, (10.0, 10.0), (600.0, 600.0));

        assert_eq!(s.phase(), Phase::Done);
        assert_eq!(s.circle().unwrap(), circle);
        assert_eq!(s.segment().unwrap(), segment);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_reopens_the_session() {
        let mut s = sketch();
        drag(&mut s, (350.0, 350.0), (350.0, 175.0));
        drag(&mut s, (0.0, 350.0), (700.0, 350.0));
        assert_eq!(s.phase(), Phase::Done);

        s.reset();

        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.circle().is_none());
        assert!(s.segment().is_none());
        assert!(s.hits().is_empty());
        assert_eq!(s.overlay().line(3), "Intersections: none");

        // A fresh session works after reset.
        drag(&mut s, (350.0, 350.0), (525.0, 350.0));
        assert_eq!(s.phase(), Phase::CircleCommitted);
    }

    // ── redraw requests ───────────────────────────────────────────────────

    #[test]
    fn transitions_raise_redraw_requests() {
        let mut s = sketch();
        assert!(s.take_redraw()); // initial frame
        assert!(!s.take_redraw());

        s.apply(PointerEvent::Pressed { x: 350.0, y: 350.0 });
        assert!(s.take_redraw());

        s.apply(PointerEvent::Moved { x: 400.0, y: 350.0 });
        assert!(s.take_redraw());

        // Ignored events do not request redraws.
        let mut done = sketch();
        done.take_redraw();
        done.apply(PointerEvent::Released);
        assert!(!done.take_redraw());
    }

    // ── scene recording ───────────────────────────────────────────────────

    fn count_kinds(list: &DrawList) -> (usize, usize, usize) {
        let mut polylines = 0;
        let mut segments = 0;
        let mut markers = 0;
        for item in list.items() {
            match &item.cmd {
                DrawCmd::Polyline(_) => polylines += 1,
                DrawCmd::Segment(_) => segments += 1,
                DrawCmd::Markers(_) => markers += 1,
            }
        }
        (polylines, segments, markers)
    }

    #[test]
    fn idle_scene_is_just_the_axes() {
        let s = sketch();
        let mut list = DrawList::new();
        s.record_scene(&mut list);

        assert_eq!(count_kinds(&list), (0, 2, 0));
    }

    #[test]
    fn drag_scene_adds_a_preview_outline() {
        let mut s = sketch();
        s.apply(PointerEvent::Pressed { x: 350.0, y: 350.0 });
        s.apply(PointerEvent::Moved { x: 525.0, y: 350.0 });

        let mut list = DrawList::new();
        s.record_scene(&mut list);
        let (polylines, segments, markers) = count_kinds(&list);

        assert_eq!((polylines, segments, markers), (1, 2, 0));
        let DrawCmd::Polyline(outline) = &list.items()[2].cmd else {
            panic!("expected the preview polyline last");
        };
        assert_eq!(outline.points.len(), 61);
        assert_eq!(outline.color, palette::PREVIEW);
    }

    #[test]
    fn done_scene_layers_markers_on_top() {
        let mut s = sketch();
        drag(&mut s, (350.0, 350.0), (350.0, 175.0));
        drag(&mut s, (0.0, 350.0), (700.0, 350.0));

        let mut list = DrawList::new();
        s.record_scene(&mut list);

        assert_eq!(count_kinds(&list), (1, 3, 1));
        let last = list.iter_in_paint_order().last().unwrap();
        assert!(matches!(last.cmd, DrawCmd::Markers(_)));
    }
}
