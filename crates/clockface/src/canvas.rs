//! Maps clock scenes onto the ratatui canvas.
//!
//! Scenes use screen coordinates with y pointing down, the canvas puts y up,
//! so every point is flipped on the way in. Filled shapes sample one point
//! per braille dot inside their bounds.

use clockface_core::{ColorTheme, DrawCommand, Paint, Point, Polygon, Rect as FaceRect, Scene};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line, Painter, Shape},
    },
};

use crate::palette;

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);

/// Convert a scene point to canvas coordinates.
pub fn to_canvas(p: Point, size: f64) -> (f64, f64) {
    (p.x, size - p.y)
}

/// Largest area inside `area` whose braille dot grid is square, centered.
pub fn square_area(area: Rect) -> Rect {
    // Two columns per row keep the dot grid square
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Distance between two sampled dots, in scene units.
fn sample_step(size: f64, area: Rect) -> f64 {
    let dots_x = f64::from(area.width.max(1)) * DOTS_PER_CELL.0;
    let dots_y = f64::from(area.height.max(1)) * DOTS_PER_CELL.1;
    (size / dots_x).min(size / dots_y)
}

/// Paint every sampled dot of `bounds` for which `inside` holds.
fn fill(
    painter: &mut Painter,
    bounds: FaceRect,
    size: f64,
    step: f64,
    color: Color,
    inside: impl Fn(Point) -> bool,
) {
    let mut y = bounds.origin.y + step / 2.0;
    while y <= bounds.bottom() {
        let mut x = bounds.origin.x + step / 2.0;
        while x <= bounds.right() {
            let p = Point::new(x, y);
            if inside(p) {
                let (cx, cy) = to_canvas(p, size);
                if let Some((px, py)) = painter.get_point(cx, cy) {
                    painter.paint(px, py, color);
                }
            }
            x += step;
        }
        y += step;
    }
}

/// Filled rectangle with rounded corners.
struct FilledRoundedRect {
    rect: FaceRect,
    radius: f64,
    size: f64,
    step: f64,
    color: Color,
}

impl FilledRoundedRect {
    fn contains(&self, p: Point) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        let r = self
            .radius
            .min(self.rect.width / 2.0)
            .min(self.rect.height / 2.0);
        // Clamp to the inner rectangle; outside the corners the distance grows
        let nearest = Point::new(
            p.x.clamp(self.rect.origin.x + r, self.rect.right() - r),
            p.y.clamp(self.rect.origin.y + r, self.rect.bottom() - r),
        );
        p.distance(nearest) <= r
    }
}

impl Shape for FilledRoundedRect {
    fn draw(&self, painter: &mut Painter) {
        fill(painter, self.rect, self.size, self.step, self.color, |p| {
            self.contains(p)
        });
    }
}

/// Filled disc.
struct FilledCircle {
    center: Point,
    radius: f64,
    size: f64,
    step: f64,
    color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let bounds = FaceRect::centered(self.center, self.radius * 2.0, self.radius * 2.0);
        fill(painter, bounds, self.size, self.step, self.color, |p| {
            p.distance(self.center) <= self.radius
        });
        // Markers smaller than a dot still show up
        let (cx, cy) = to_canvas(self.center, self.size);
        if let Some((px, py)) = painter.get_point(cx, cy) {
            painter.paint(px, py, self.color);
        }
    }
}

/// Filled polygon with its edges stroked, so thin hands never vanish.
struct FilledPolygon {
    polygon: Polygon,
    size: f64,
    step: f64,
    color: Color,
}

impl Shape for FilledPolygon {
    fn draw(&self, painter: &mut Painter) {
        fill(
            painter,
            self.polygon.bounds(),
            self.size,
            self.step,
            self.color,
            |p| self.polygon.contains(p),
        );
        for edge in self.polygon.points().windows(2) {
            let (x1, y1) = to_canvas(edge[0], self.size);
            let (x2, y2) = to_canvas(edge[1], self.size);
            Line {
                x1,
                y1,
                x2,
                y2,
                color: self.color,
            }
            .draw(painter);
        }
    }
}

/// Draw one command into the canvas context.
fn draw_command(
    ctx: &mut Context,
    command: &DrawCommand,
    theme: ColorTheme,
    size: f64,
    step: f64,
    cell_width: f64,
) {
    let color = palette::color(theme, command.paint());
    match command {
        DrawCommand::RoundedRect {
            rect,
            corner_radius,
            ..
        } => ctx.draw(&FilledRoundedRect {
            rect: *rect,
            radius: *corner_radius,
            size,
            step,
            color,
        }),
        DrawCommand::Circle { center, radius, .. } => ctx.draw(&FilledCircle {
            center: *center,
            radius: *radius,
            size,
            step,
            color,
        }),
        DrawCommand::Label { hour, frame, .. } => {
            let text = hour.get().to_string();
            let center = frame.center();
            // Text starts at the printed point, so shift left by half its width
            let text_width = text.len() as f64 * cell_width;
            let (x, y) = to_canvas(Point::new(center.x - text_width / 2.0, center.y), size);
            let face = palette::color(theme, Paint::Face);
            ctx.print(
                x,
                y,
                TextLine::from(Span::styled(text, Style::new().fg(color).bg(face))),
            );
        }
        DrawCommand::Hand { .. } => {
            if let Some(polygon) = command.rotated_outline() {
                ctx.draw(&FilledPolygon {
                    polygon,
                    size,
                    step,
                    color,
                });
            }
        }
    }
}

/// Widget rendering a scene with the given theme.
pub struct ClockCanvas<'a> {
    pub scene: &'a Scene,
    pub theme: ColorTheme,
}

impl Widget for ClockCanvas<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let size = self.scene.size();
        let step = sample_step(size, area);
        let cell_width = size / f64::from(area.width.max(1));
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(|ctx| {
                for command in self.scene.commands() {
                    draw_command(ctx, command, self.theme, size, step, cell_width);
                    // Each command gets its own layer so later ones win per cell
                    ctx.layer();
                }
            })
            .render(area, buf);
    }
}
