//! Draw-command lists for one rendered clock face.
//!
//! A [`Scene`] is rebuilt from scratch for every frame. Rendering targets
//! walk its commands in order and map each one onto their own primitives;
//! paints are abstract roles resolved to colors by the target.

use crate::face::ClockFace;
use crate::geometry::{Point, Polygon, Rect, label_frame};
use crate::hand::{Hand, HandAngles};
use crate::time::HourValue;

/// Diameter of the dark marker under the hour and minute hands.
const HUB_DIAMETER: f64 = 13.0;

/// Diameter of the accent marker under the second hand.
const PIN_DIAMETER: f64 = 5.0;

/// Color role of a draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Rounded background behind the dial.
    Backdrop,
    /// The dial itself.
    Face,
    /// Hour numerals.
    Numeral,
    /// Hour and minute hands and their hub.
    Hand,
    /// Second hand and its pin.
    Accent,
}

/// A single drawing instruction in face coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        corner_radius: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Label {
        hour: HourValue,
        frame: Rect,
        paint: Paint,
    },
    Hand {
        hand: Hand,
        /// Outline pointing at 12, before rotation.
        outline: Polygon,
        pivot: Point,
        angle: f64,
        paint: Paint,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> Paint {
        match self {
            DrawCommand::RoundedRect { paint, .. }
            | DrawCommand::Circle { paint, .. }
            | DrawCommand::Label { paint, .. }
            | DrawCommand::Hand { paint, .. } => *paint,
        }
    }

    /// Outline of a hand after its rotation is applied.
    pub fn rotated_outline(&self) -> Option<Polygon> {
        match self {
            DrawCommand::Hand {
                outline,
                pivot,
                angle,
                ..
            } => Some(outline.rotated(*pivot, *angle)),
            _ => None,
        }
    }
}

/// Options that change what goes into a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    pub show_numerals: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_numerals: true,
        }
    }
}

/// Ordered draw commands for one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: f64,
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Build the full face: background, dial, numerals, hubs and hands.
    pub fn build(face: &ClockFace, angles: HandAngles) -> Self {
        Self::build_with(face, angles, SceneOptions::default())
    }

    pub fn build_with(face: &ClockFace, angles: HandAngles, options: SceneOptions) -> Self {
        let center = face.center();
        let scale = face.size() / ClockFace::DEFAULT_SIZE;
        let mut commands = Vec::with_capacity(20);

        commands.push(DrawCommand::RoundedRect {
            rect: face.bounds(),
            corner_radius: face.corner_radius(),
            paint: Paint::Backdrop,
        });
        commands.push(DrawCommand::Circle {
            center,
            radius: face.dial_radius(),
            paint: Paint::Face,
        });

        if options.show_numerals {
            commands.extend(HourValue::all().map(|hour| DrawCommand::Label {
                hour,
                frame: label_frame(hour, face),
                paint: Paint::Numeral,
            }));
        }

        let hand_command = |hand: Hand, paint: Paint| DrawCommand::Hand {
            hand,
            outline: hand.outline(face),
            pivot: center,
            angle: angles.get(hand),
            paint,
        };

        commands.push(DrawCommand::Circle {
            center,
            radius: HUB_DIAMETER * scale / 2.0,
            paint: Paint::Hand,
        });
        commands.push(hand_command(Hand::Minute, Paint::Hand));
        commands.push(hand_command(Hand::Hour, Paint::Hand));
        // The pin sits over the hub but under the second hand
        commands.push(DrawCommand::Circle {
            center,
            radius: PIN_DIAMETER * scale / 2.0,
            paint: Paint::Accent,
        });
        commands.push(hand_command(Hand::Second, Paint::Accent));

        Self {
            size: face.size(),
            commands,
        }
    }

    /// Side length of the square the scene is drawn in.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rotation given to `hand` in this scene.
    pub fn hand_angle(&self, hand: Hand) -> Option<f64> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Hand { hand: h, angle, .. } if *h == hand => Some(*angle),
            _ => None,
        })
    }

    /// Label text and frame for every numeral in the scene.
    pub fn labels(&self) -> impl Iterator<Item = (String, Rect)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label { hour, frame, .. } => Some((hour.get().to_string(), *frame)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::time::ClockTime;

    fn scene_at(hour: u32, minute: u32, second: u32) -> Scene {
        let time = ClockTime::new(hour, minute, second).unwrap();
        Scene::build(&ClockFace::default(), HandAngles::at(time))
    }

    #[test]
    fn test_scene_composition() {
        let scene = scene_at(10, 10, 30);
        let commands = scene.commands();
        let count = |f: fn(&DrawCommand) -> bool| commands.iter().filter(|c| f(c)).count();

        assert_eq!(count(|c| matches!(c, DrawCommand::RoundedRect { .. })), 1);
        assert_eq!(count(|c| matches!(c, DrawCommand::Circle { .. })), 3);
        assert_eq!(count(|c| matches!(c, DrawCommand::Label { .. })), 12);
        assert_eq!(count(|c| matches!(c, DrawCommand::Hand { .. })), 3);
        assert_eq!(commands.len(), 19);
    }

    #[test]
    fn test_paint_order() {
        let scene = scene_at(1, 2, 3);
        let paints: Vec<Paint> = scene.commands().iter().map(DrawCommand::paint).collect();
        assert_eq!(paints[0], Paint::Backdrop);
        assert_eq!(paints[1], Paint::Face);
        assert!(paints[2..14].iter().all(|p| *p == Paint::Numeral));
        assert_eq!(
            &paints[14..],
            &[
                Paint::Hand,
                Paint::Hand,
                Paint::Hand,
                Paint::Accent,
                Paint::Accent
            ]
        );
        // Second hand is drawn last, on top of everything
        assert!(matches!(
            scene.commands().last(),
            Some(DrawCommand::Hand {
                hand: Hand::Second,
                ..
            })
        ));
    }

    #[test]
    fn test_hand_angles_in_scene() {
        let scene = scene_at(6, 45, 15);
        assert!((scene.hand_angle(Hand::Hour).unwrap() - PI).abs() < 1e-9);
        assert!((scene.hand_angle(Hand::Minute).unwrap() - 3.0 * PI / 2.0).abs() < 1e-9);
        assert!((scene.hand_angle(Hand::Second).unwrap() - PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_hand_points_at_three() {
        let scene = scene_at(3, 0, 0);
        let hour = scene
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::Hand { hand: Hand::Hour, .. }))
            .and_then(DrawCommand::rotated_outline)
            .unwrap();
        let bounds = hour.bounds();
        // Quarter turn: the hand now extends right of the center
        assert!((bounds.origin.x - 128.0).abs() < 1e-9);
        assert!((bounds.right() - 163.0).abs() < 1e-9);
        assert!((bounds.center().y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_read_one_to_twelve() {
        let scene = scene_at(0, 0, 0);
        let texts: Vec<String> = scene.labels().map(|(text, _)| text).collect();
        let expected: Vec<String> = (1..=12).map(|h: u8| h.to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_numerals_can_be_hidden() {
        let time = ClockTime::new(0, 0, 0).unwrap();
        let scene = Scene::build_with(
            &ClockFace::default(),
            HandAngles::at(time),
            SceneOptions {
                show_numerals: false,
            },
        );
        assert_eq!(scene.labels().count(), 0);
        assert_eq!(scene.commands().len(), 7);
    }

    #[test]
    fn test_rebuild_is_identical() {
        assert_eq!(scene_at(11, 59, 59), scene_at(11, 59, 59));
        assert_eq!(scene_at(11, 59, 59).size(), 256.0);
    }
}
