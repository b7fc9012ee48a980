// ============================================================================
// RETAINED MODE SCENE
// ============================================================================

use crate::config::{Color, GaugeConfig};
use crate::controller::DualArcKnobController;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Full circle stroke straddling `radius`.
    Ring {
        center: Point,
        radius: f64,
        thickness: f64,
        color: Color,
    },
    Disc {
        center: Point,
        radius: f64,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both rings first, then the upper and lower knobs on top of them.
    pub fn from_controller(controller: &DualArcKnobController, config: &GaugeConfig) -> Self {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(config.background_color));
        if !controller.is_renderable() {
            return scene;
        }

        for circle in [controller.lower_circle(), controller.upper_circle()] {
            scene.add_command(DrawCommand::Ring {
                center: circle.center,
                radius: circle.radius,
                thickness: controller.arc_stroke_width(),
                color: config.arc_color,
            });
        }
        for knob in [
            controller.upper_knob_position(),
            controller.lower_knob_position(),
        ] {
            scene.add_command(DrawCommand::Disc {
                center: knob,
                radius: controller.knob_radius(),
                color: config.knob_color,
            });
        }
        scene
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Ring {
                    center,
                    radius,
                    thickness,
                    color,
                } => draw_ring(canvas, *center, *radius, *thickness, *color),
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => draw_disc(canvas, *center, *radius, *color),
            }
        }
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// RGBA8 frame with `width * height * 4` bytes.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    /// Source-over blend of `color` at `alpha` into the pixel at (x, y).
    fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let (r, g, b) = color.as_tuple();
        let out = [
            (r as f64 * a + self.frame[idx] as f64 * (1.0 - a)).round() as u8,
            (g as f64 * a + self.frame[idx + 1] as f64 * (1.0 - a)).round() as u8,
            (b as f64 * a + self.frame[idx + 2] as f64 * (1.0 - a)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }

    /// Pixel rows and columns covering `center ± reach`, clipped to the frame.
    fn bounds(&self, center: Point, reach: f64) -> Option<(i64, i64, i64, i64)> {
        let min_x = ((center.x - reach).floor() as i64).max(0);
        let max_x = ((center.x + reach).ceil() as i64).min(self.width as i64 - 1);
        let min_y = ((center.y - reach).floor() as i64).max(0);
        let max_y = ((center.y + reach).ceil() as i64).min(self.height as i64 - 1);
        (min_x <= max_x && min_y <= max_y).then_some((min_x, max_x, min_y, max_y))
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn draw_ring(canvas: &mut Canvas, center: Point, radius: f64, thickness: f64, color: Color) {
    let inner = (radius - thickness / 2.0).max(0.0);
    let outer = radius + thickness / 2.0;
    let Some((min_x, max_x, min_y, max_y)) = canvas.bounds(center, outer + 1.0) else {
        return;
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dist = Point::new(x as f64, y as f64).distance_to(center);
            let aa = if dist > outer {
                1.0 - (dist - outer).min(1.0)
            } else if dist < inner {
                1.0 - (inner - dist).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend(x, y, color, aa);
            }
        }
    }
}

fn draw_disc(canvas: &mut Canvas, center: Point, radius: f64, color: Color) {
    let Some((min_x, max_x, min_y, max_y)) = canvas.bounds(center, radius + 1.0) else {
        return;
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dist = Point::new(x as f64, y as f64).distance_to(center);
            let aa = if dist > radius {
                1.0 - (dist - radius).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend(x, y, color, aa);
            }
        }
    }
}
