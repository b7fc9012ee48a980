//! Interaction model for the two arcs.
//!
//! The lower circle is centred on the bottom edge of the viewport and its knob
//! travels along the upper half of that circle; the upper circle is centred on
//! the top edge and its knob travels along the lower half. A pointer press
//! anywhere within `radius + arc_stroke_width` of a circle's center grabs that
//! circle's knob, and subsequent moves re-aim the knob at the pointer as long
//! as the new angle stays inside the knob's range. Moves past the range are
//! dropped, which leaves the knob parked at its last accepted angle.

use crate::config::GaugeConfig;
use crate::geometry::{degrees_to_radians, AngleRange, Circle, Point};

pub const LOWER_RANGE: AngleRange = AngleRange::new(-170, -10);
pub const UPPER_RANGE: AngleRange = AngleRange::new(10, 170);
pub const LOWER_INITIAL_DEGREES: f64 = -170.0;
pub const UPPER_INITIAL_DEGREES: f64 = 170.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    None,
    Lower,
    Upper,
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Applied,
    /// The viewport leaves no room for a positive radius; the previous
    /// geometry is kept and nothing should be drawn.
    Degenerate,
}

/// A handle pinned to a circle, stored only as its angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    pub angle: f64,
    pub range: AngleRange,
}

impl Knob {
    fn new(initial_degrees: f64, range: AngleRange) -> Self {
        Self {
            angle: degrees_to_radians(initial_degrees),
            range,
        }
    }

    fn aim(&mut self, angle: f64) -> bool {
        let changed = self.angle != angle;
        self.angle = angle;
        changed
    }
}

#[derive(Debug, Clone)]
pub struct DualArcKnobController {
    margin_from_edge: f64,
    knob_radius: f64,
    arc_stroke_width: f64,

    lower_circle: Circle,
    upper_circle: Circle,
    lower: Knob,
    upper: Knob,

    initialise_knobs: bool,
    renderable: bool,
    drag_target: DragTarget,
}

impl Default for DualArcKnobController {
    fn default() -> Self {
        Self::new(&GaugeConfig::default())
    }
}

impl DualArcKnobController {
    pub fn new(config: &GaugeConfig) -> Self {
        Self {
            margin_from_edge: config.margin_from_edge,
            knob_radius: config.knob_radius,
            arc_stroke_width: config.arc_stroke_width,
            lower_circle: Circle::default(),
            upper_circle: Circle::default(),
            lower: Knob::new(LOWER_INITIAL_DEGREES, LOWER_RANGE),
            upper: Knob::new(UPPER_INITIAL_DEGREES, UPPER_RANGE),
            initialise_knobs: true,
            renderable: false,
            drag_target: DragTarget::None,
        }
    }

    /// Recomputes both circles for a `width` x `height` viewport.
    ///
    /// Knob angles are reset to their initial positions on the first
    /// successful layout only.
    pub fn layout(&mut self, width: f64, height: f64) -> Layout {
        if !width.is_finite() || !height.is_finite() {
            log::warn!("ignoring layout with non-finite viewport {width}x{height}");
            self.renderable = false;
            return Layout::Degenerate;
        }

        let radius = (width / 2.0).min(height) - self.margin_from_edge;
        if radius <= 0.0 {
            log::warn!(
                "viewport {width}x{height} leaves no room for the arcs (radius {radius}), keeping previous layout"
            );
            self.renderable = false;
            return Layout::Degenerate;
        }

        self.lower_circle = Circle::new(Point::new(width / 2.0, height), radius);
        self.upper_circle = Circle::new(Point::new(width / 2.0, 0.0), radius);

        if self.initialise_knobs {
            self.upper = Knob::new(UPPER_INITIAL_DEGREES, UPPER_RANGE);
            self.lower = Knob::new(LOWER_INITIAL_DEGREES, LOWER_RANGE);
            self.initialise_knobs = false;
        }

        self.renderable = true;
        Layout::Applied
    }

    /// Starts a drag on whichever circle `point` reaches, testing the lower
    /// circle first.
    pub fn on_pointer_down(&mut self, point: Point) -> DragTarget {
        if !point.is_finite() {
            log::warn!("ignoring pointer down at non-finite position {point:?}");
            return self.drag_target;
        }

        self.drag_target = DragTarget::None;
        if !self.renderable {
            return self.drag_target;
        }

        if self.lower_circle.reaches(point, self.arc_stroke_width) {
            self.drag_target = DragTarget::Lower;
        } else if self.upper_circle.reaches(point, self.arc_stroke_width) {
            self.drag_target = DragTarget::Upper;
        }

        if self.drag_target != DragTarget::None {
            log::debug!("started dragging {:?} knob at {point:?}", self.drag_target);
        }
        self.drag_target
    }

    /// Re-aims the dragged knob at `point`. Returns true when the knob moved
    /// and the gauge needs to be redrawn.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            log::warn!("ignoring pointer move to non-finite position {point:?}");
            return false;
        }
        if !self.renderable {
            return false;
        }

        let (circle, knob) = match self.drag_target {
            DragTarget::None => return false,
            DragTarget::Lower => (&self.lower_circle, &mut self.lower),
            DragTarget::Upper => (&self.upper_circle, &mut self.upper),
        };

        let angle = point.angle_from(circle.center);
        if !knob.range.admits(angle) {
            log::debug!(
                "rejected {:?} knob move to {:.2} degrees",
                self.drag_target,
                angle.to_degrees()
            );
            return false;
        }

        let changed = knob.aim(angle);
        if changed {
            log::trace!("{:?} knob moved to {:.2} degrees", self.drag_target, angle.to_degrees());
        }
        changed
    }

    pub fn on_pointer_up(&mut self) {
        if self.drag_target != DragTarget::None {
            log::debug!("released {:?} knob", self.drag_target);
        }
        self.drag_target = DragTarget::None;
    }

    pub fn drag_target(&self) -> DragTarget {
        self.drag_target
    }

    /// False before the first successful layout and after a degenerate one.
    pub fn is_renderable(&self) -> bool {
        self.renderable
    }

    pub fn lower_center(&self) -> Point {
        self.lower_circle.center
    }

    pub fn upper_center(&self) -> Point {
        self.upper_circle.center
    }

    pub fn radius(&self) -> f64 {
        self.lower_circle.radius
    }

    pub fn lower_circle(&self) -> Circle {
        self.lower_circle
    }

    pub fn upper_circle(&self) -> Circle {
        self.upper_circle
    }

    pub fn lower_angle(&self) -> f64 {
        self.lower.angle
    }

    pub fn upper_angle(&self) -> f64 {
        self.upper.angle
    }

    pub fn lower_knob_position(&self) -> Point {
        self.lower_circle.point_at(self.lower.angle)
    }

    pub fn upper_knob_position(&self) -> Point {
        self.upper_circle.point_at(self.upper.angle)
    }

    pub fn knob_radius(&self) -> f64 {
        self.knob_radius
    }

    pub fn arc_stroke_width(&self) -> f64 {
        self.arc_stroke_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out() -> DualArcKnobController {
        let mut controller = DualArcKnobController::default();
        assert_eq!(controller.layout(1000.0, 2000.0), Layout::Applied);
        controller
    }

    #[test]
    fn not_renderable_before_layout() {
        let mut controller = DualArcKnobController::default();
        assert!(!controller.is_renderable());
        assert_eq!(
            controller.on_pointer_down(Point::new(0.0, 0.0)),
            DragTarget::None
        );
    }

    #[test]
    fn layout_places_circles_on_the_edges() {
        let controller = laid_out();
        assert_eq!(controller.lower_center(), Point::new(500.0, 2000.0));
        assert_eq!(controller.upper_center(), Point::new(500.0, 0.0));
        assert_eq!(controller.radius(), 350.0);
    }

    #[test]
    fn relayout_keeps_dragged_angle() {
        let mut controller = laid_out();
        controller.on_pointer_down(Point::new(500.0, 1650.0));
        assert!(controller.on_pointer_move(Point::new(400.0, 1700.0)));
        let dragged = controller.lower_angle();

        controller.layout(800.0, 1200.0);
        assert_eq!(controller.lower_angle(), dragged);
    }

    #[test]
    fn degenerate_layout_keeps_previous_geometry() {
        let mut controller = laid_out();
        assert_eq!(controller.layout(200.0, 100.0), Layout::Degenerate);
        assert!(!controller.is_renderable());
        assert_eq!(controller.radius(), 350.0);

        assert_eq!(controller.layout(1000.0, 2000.0), Layout::Applied);
        assert!(controller.is_renderable());
    }

    #[test]
    fn exact_zero_radius_is_degenerate() {
        let mut controller = DualArcKnobController::default();
        assert_eq!(controller.layout(300.0, 150.0), Layout::Degenerate);
    }

    #[test]
    fn non_finite_pointer_leaves_drag_alone() {
        let mut controller = laid_out();
        controller.on_pointer_down(Point::new(500.0, 1650.0));
        assert_eq!(
            controller.on_pointer_down(Point::new(f64::NAN, 3.0)),
            DragTarget::Lower
        );
        let before = controller.lower_angle();
        assert!(!controller.on_pointer_move(Point::new(f64::INFINITY, 1700.0)));
        assert_eq!(controller.lower_angle(), before);
    }

    #[test]
    fn repeated_move_to_same_point_needs_no_redraw() {
        let mut controller = laid_out();
        controller.on_pointer_down(Point::new(500.0, 1650.0));
        assert!(controller.on_pointer_move(Point::new(600.0, 1700.0)));
        assert!(!controller.on_pointer_move(Point::new(600.0, 1700.0)));
    }
}
