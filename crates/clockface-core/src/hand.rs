//! Clock hands and their angles.

use crate::face::ClockFace;
use crate::geometry::{Point, Polygon, hand_angle, rect_hand_outline};
use crate::time::ClockTime;

/// One of the three hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// Width and length of a hand before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub width: f64,
    pub length: f64,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Dimensions for a 256 unit face.
    pub fn style(self) -> HandStyle {
        match self {
            Hand::Hour => HandStyle {
                width: 4.0,
                length: 35.0,
            },
            Hand::Minute => HandStyle {
                width: 3.0,
                length: 75.0,
            },
            Hand::Second => HandStyle {
                width: 2.0,
                length: 65.0,
            },
        }
    }

    /// Unrotated outline pointing at 12, scaled to the face size.
    pub fn outline(self, face: &ClockFace) -> Polygon {
        let scale = face.size() / ClockFace::DEFAULT_SIZE;
        let HandStyle { width, length } = self.style();
        let (width, length) = (width * scale, length * scale);
        let center = face.center();
        rect_hand_outline(Point::new(center.x - width / 2.0, center.y), width, length)
    }
}

/// Rotation of every hand, in radians clockwise from 12.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(time: ClockTime) -> Self {
        Self {
            hour: hand_angle(Hand::Hour, time),
            minute: hand_angle(Hand::Minute, time),
            second: hand_angle(Hand::Second, time),
        }
    }

    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    /// Replace the second hand's angle, e.g. with a sweep animation value.
    pub fn with_second(self, second: f64) -> Self {
        Self { second, ..self }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_outline_starts_at_center() {
        let face = ClockFace::default();
        let outline = Hand::Minute.outline(&face);
        let corners = outline.corners();
        assert_eq!(corners[0], Point::new(126.5, 128.0));
        assert_eq!(corners[2], Point::new(129.5, 53.0));
    }

    #[test]
    fn test_outline_scales_with_face() {
        let face = ClockFace::new(128.0, 7.5, 45.0).unwrap();
        let bounds = Hand::Hour.outline(&face).bounds();
        assert_eq!(bounds.width, 2.0);
        assert_eq!(bounds.height, 17.5);
    }

    #[test]
    fn test_hand_lengths_stay_inside_dial() {
        let face = ClockFace::default();
        for hand in Hand::ALL {
            assert!(hand.style().length < face.dial_radius());
        }
    }

    #[test]
    fn test_angles_at_time() {
        let angles = HandAngles::at(ClockTime::new(9, 15, 30).unwrap());
        assert!((angles.get(Hand::Hour) - 3.0 * PI / 2.0).abs() < 1e-9);
        assert!((angles.get(Hand::Minute) - PI / 2.0).abs() < 1e-9);
        assert!((angles.get(Hand::Second) - PI).abs() < 1e-9);
        assert_eq!(angles.with_second(0.25).second, 0.25);
    }
}
