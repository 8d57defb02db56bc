//! Clock face geometry.
//!
//! All coordinates live in screen space: the origin is the top-left corner of
//! the face bounds and y grows downward. Angles are measured clockwise from
//! 12 o'clock, so a positive rotation turns a hand clockwise on screen.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::{Add, Sub};

use crate::face::ClockFace;
use crate::hand::Hand;
use crate::time::{ClockTime, HourValue};

/// A point in face coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Length of the vector from the origin to this point.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate this point around `pivot` by `angle` radians.
    ///
    /// With y pointing down this is a clockwise turn on screen: a point
    /// straight above the pivot rotated by a quarter turn ends up to its right.
    pub fn rotated_about(self, pivot: Point, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let d = self - pivot;
        Point {
            x: pivot.x + d.x * cos - d.y * sin,
            y: pivot.y + d.x * sin + d.y * cos,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.right()
            && p.y >= self.origin.y
            && p.y <= self.bottom()
    }
}

/// A closed polygon. The last stored vertex repeats the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a closed polygon from its corners, appending the closing vertex.
    pub fn closed(corners: impl IntoIterator<Item = Point>) -> Self {
        let mut points: Vec<Point> = corners.into_iter().collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self { points }
    }

    /// All stored vertices, including the closing one.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distinct corners, without the closing vertex.
    pub fn corners(&self) -> &[Point] {
        match self.points.len() {
            0 => &[],
            n => &self.points[..n - 1],
        }
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Copy of this polygon rotated around `pivot`.
    pub fn rotated(&self, pivot: Point, angle: f64) -> Polygon {
        Polygon {
            points: self
                .points
                .iter()
                .map(|p| p.rotated_about(pivot, angle))
                .collect(),
        }
    }

    /// Smallest axis-aligned rectangle containing every vertex.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::default();
        };
        let (mut min, mut max) = (*first, *first);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for edge in self.points.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Top-left corner of the frame holding the numeral for `hour`.
///
/// Hour 12 sits straight above the center, the rest follow clockwise.
pub fn label_position(hour: HourValue, face: &ClockFace) -> Point {
    let fraction = f64::from(hour.get()) / 12.0;
    let angle = fraction * TAU - FRAC_PI_2;
    let half = face.size() / 2.0;
    let (label_width, label_height) = face.label_size();
    Point::new(
        half + angle.cos() * face.number_radius() - label_width / 2.0,
        half + angle.sin() * face.number_radius() - label_height / 2.0,
    )
}

/// Full frame of the numeral for `hour`.
pub fn label_frame(hour: HourValue, face: &ClockFace) -> Rect {
    let origin = label_position(hour, face);
    let (width, height) = face.label_size();
    Rect {
        origin,
        width,
        height,
    }
}

/// Rotation of `hand` for the given time, in `[0, 2π)`.
pub fn hand_angle(hand: Hand, time: ClockTime) -> f64 {
    let fraction = match hand {
        Hand::Hour => f64::from(time.hour() % 12) / 12.0,
        Hand::Minute => f64::from(time.minute()) / 60.0,
        Hand::Second => f64::from(time.second()) / 60.0,
    };
    TAU * fraction
}

/// Outline of an unrotated hand.
///
/// `origin` is the bottom-left corner; the rectangle extends `height` units
/// upward from it. Placing the origin at `(center.x - width / 2, center.y)`
/// makes the hand point at 12 o'clock and pivot around the center.
pub fn rect_hand_outline(origin: Point, width: f64, height: f64) -> Polygon {
    Polygon::closed([
        origin,
        Point::new(origin.x, origin.y - height),
        Point::new(origin.x + width, origin.y - height),
        Point::new(origin.x + width, origin.y),
    ])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn time(hour: u32, minute: u32, second: u32) -> ClockTime {
        ClockTime::new(hour, minute, second).expect("valid time")
    }

    #[test]
    fn test_labels_lie_on_number_circle() {
        let face = ClockFace::default();
        let center = face.center();
        for hour in HourValue::all() {
            let anchor = label_frame(hour, &face).center();
            assert!(
                approx(anchor.distance(center), face.number_radius()),
                "hour {} is off the number circle",
                hour.get()
            );
        }
    }

    #[test]
    fn test_twelve_is_at_top() {
        let face = ClockFace::default();
        let twelve = HourValue::new(12).unwrap();
        let pos = label_position(twelve, &face);
        assert!(approx(pos.x, 128.0 - 11.0));
        assert!(approx(pos.y, 128.0 - 90.0 - 11.0));
    }

    #[test]
    fn test_three_is_right_and_six_is_bottom() {
        let face = ClockFace::default();
        let three = label_frame(HourValue::new(3).unwrap(), &face).center();
        let six = label_frame(HourValue::new(6).unwrap(), &face).center();
        assert!(approx(three.x, 128.0 + 90.0));
        assert!(approx(three.y, 128.0));
        assert!(approx(six.x, 128.0));
        assert!(approx(six.y, 128.0 + 90.0));
    }

    #[test]
    fn test_hand_angles() {
        assert!(approx(hand_angle(Hand::Hour, time(3, 0, 0)), PI / 2.0));
        assert!(approx(hand_angle(Hand::Minute, time(0, 30, 0)), PI));
        assert!(approx(hand_angle(Hand::Second, time(0, 0, 45)), 3.0 * PI / 2.0));
    }

    #[test]
    fn test_hour_wraps_at_twelve() {
        assert_eq!(
            hand_angle(Hand::Hour, time(12, 0, 0)),
            hand_angle(Hand::Hour, time(0, 0, 0))
        );
        assert_eq!(
            hand_angle(Hand::Hour, time(15, 0, 0)),
            hand_angle(Hand::Hour, time(3, 0, 0))
        );
    }

    #[test]
    fn test_hand_angles_stay_below_full_turn() {
        for hour in 0..24 {
            for minute in 0..60 {
                let t = time(hour, minute, minute);
                for hand in Hand::ALL {
                    let angle = hand_angle(hand, t);
                    assert!((0.0..TAU).contains(&angle));
                }
            }
        }
    }

    #[test]
    fn test_geometry_is_idempotent() {
        let face = ClockFace::default();
        let nine = HourValue::new(9).unwrap();
        assert_eq!(label_position(nine, &face), label_position(nine, &face));
        let t = time(17, 42, 7);
        assert_eq!(hand_angle(Hand::Minute, t), hand_angle(Hand::Minute, t));
    }

    #[test]
    fn test_rect_hand_outline_is_closed() {
        let outline = rect_hand_outline(Point::new(126.5, 128.0), 3.0, 75.0);
        assert_eq!(outline.points().len(), 5);
        assert_eq!(outline.corners().len(), 4);
        assert!(outline.is_closed());
        assert_eq!(outline.corners()[1], Point::new(126.5, 53.0));
        assert_eq!(outline.corners()[2], Point::new(129.5, 53.0));
    }

    #[test]
    fn test_quarter_turn_points_right() {
        let pivot = Point::new(10.0, 10.0);
        let above = Point::new(10.0, 0.0);
        let turned = above.rotated_about(pivot, PI / 2.0);
        assert!(approx(turned.x, 20.0));
        assert!(approx(turned.y, 10.0));
    }

    #[test]
    fn test_polygon_contains() {
        let outline = rect_hand_outline(Point::new(0.0, 10.0), 4.0, 10.0);
        assert!(outline.contains(Point::new(2.0, 5.0)));
        assert!(!outline.contains(Point::new(5.0, 5.0)));
        let bounds = outline.bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 4.0, 10.0));
    }

    #[test]
    fn test_normalize_angle() {
        assert!(approx(normalize_angle(-PI / 2.0), 3.0 * PI / 2.0));
        assert!(approx(normalize_angle(5.0 * PI), PI));
        assert_eq!(normalize_angle(TAU), 0.0);
    }
}
