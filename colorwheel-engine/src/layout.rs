//! Control placement
//!
//! `LayoutSpec` is the plain, serializable description used by config
//! files. `Layout` is the validated form handed to the reconciler and the
//! compositor; building it is where degenerate geometry is refused.

use crate::color::{Channel, Color};
use crate::error::EngineError;
use crate::geometry::{DiscGeometry, Orientation, Point, Rect, TrackGeometry};
use crate::track::{TrackMode, ValueTrack};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscSpec {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub x: i32,
    pub y: i32,
    pub length: i32,
    pub thickness: i32,
    pub orientation: Orientation,
    pub mode: TrackMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldsSpec {
    pub red: Rect,
    pub green: Rect,
    pub blue: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// Hex color, `#RRGGBB`
    #[serde(default = "default_label_color")]
    pub color: String,
}

fn default_label_color() -> String {
    "#FFFFFF".to_string()
}

fn default_marker_radius() -> u32 {
    5
}

fn default_marker_width() -> u32 {
    2
}

/// Serializable layout description, in canvas pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: u32,
    #[serde(default = "default_marker_width")]
    pub marker_width: u32,
    pub disc: DiscSpec,
    /// No table means no track
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackSpec>,
    pub fields: FieldsSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<Rect>,
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
}

impl LayoutSpec {
    /// 800x600 window layout with a horizontal alpha slider
    pub fn desktop() -> Self {
        Self {
            width: 800,
            height: 600,
            marker_radius: 5,
            marker_width: 2,
            disc: DiscSpec {
                center_x: 280,
                center_y: 300,
                radius: 250,
            },
            track: Some(TrackSpec {
                x: 650,
                y: 395,
                length: 100,
                thickness: 10,
                orientation: Orientation::Horizontal,
                mode: TrackMode::Alpha,
            }),
            fields: FieldsSpec {
                red: Rect::new(650, 85, 80, 30),
                green: Rect::new(650, 185, 80, 30),
                blue: Rect::new(650, 285, 80, 30),
            },
            swatch: Some(Rect::new(650, 460, 80, 40)),
            labels: vec![
                label("Red", 595, 100, "#FF0000"),
                label("Green", 605, 200, "#00FF00"),
                label("Blue", 598, 300, "#0000FF"),
                label("Alpha", 604, 400, "#FFFFFF"),
            ],
        }
    }

    /// 78x36 pixel canvas (78x18 half-block cells) with a vertical value track
    pub fn terminal() -> Self {
        Self {
            width: 78,
            height: 36,
            marker_radius: 2,
            marker_width: 1,
            disc: DiscSpec {
                center_x: 18,
                center_y: 18,
                radius: 17,
            },
            track: Some(TrackSpec {
                x: 39,
                y: 2,
                length: 32,
                thickness: 3,
                orientation: Orientation::Vertical,
                mode: TrackMode::Value,
            }),
            fields: FieldsSpec {
                red: Rect::new(52, 2, 12, 6),
                green: Rect::new(52, 11, 12, 6),
                blue: Rect::new(52, 20, 12, 6),
            },
            swatch: Some(Rect::new(52, 28, 12, 5)),
            labels: vec![
                label("Red", 46, 5, "#FF5050"),
                label("Green", 46, 14, "#50FF50"),
                label("Blue", 46, 23, "#5080FF"),
                label("Val", 40, 0, "#FFFFFF"),
            ],
        }
    }

    /// Validate and convert to pixel geometry
    pub fn build(&self) -> Result<Layout, EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }

        let disc = DiscGeometry::new(
            Point::new(self.disc.center_x, self.disc.center_y),
            self.disc.radius,
        )?;
        self.check_disc_fits()?;

        let track = self
            .track
            .as_ref()
            .map(|t| {
                TrackGeometry::new(Point::new(t.x, t.y), t.length, t.thickness, t.orientation)
                    .map(|geometry| ValueTrack::new(geometry, t.mode))
            })
            .transpose()?;

        let fields = [self.fields.red, self.fields.green, self.fields.blue];
        for (i, a) in Channel::ALL.iter().enumerate() {
            for b in &Channel::ALL[i + 1..] {
                if fields[a.index()].intersects(&fields[b.index()]) {
                    return Err(EngineError::FieldOverlap(*a, *b));
                }
            }
        }

        let labels = self
            .labels
            .iter()
            .map(|l| -> Result<Label, EngineError> {
                Ok(Label {
                    text: l.text.clone(),
                    position: Point::new(l.x, l.y),
                    color: l.color.parse()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Layout {
            width: self.width,
            height: self.height,
            disc,
            track,
            fields,
            swatch: self.swatch,
            labels,
            marker_radius: self.marker_radius,
            marker_width: self.marker_width.max(1),
        })
    }
}

impl LayoutSpec {
    /// The wheel image is the disc's bounding square, so that square must
    /// lie on the canvas
    fn check_disc_fits(&self) -> Result<(), EngineError> {
        let (cx, cy) = (self.disc.center_x as i64, self.disc.center_y as i64);
        let r = self.disc.radius as i64;
        let fits = cx - r >= 0
            && cy - r >= 0
            && cx + r < self.width as i64
            && cy + r < self.height as i64;
        if fits {
            return Ok(());
        }
        Err(EngineError::DiscOutOfCanvas {
            center_x: self.disc.center_x,
            center_y: self.disc.center_y,
            radius: self.disc.radius,
            width: self.width,
            height: self.height,
        })
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::desktop()
    }
}

fn label(text: &str, x: i32, y: i32, color: &str) -> LabelSpec {
    LabelSpec {
        text: text.to_string(),
        x,
        y,
        color: color.to_string(),
    }
}

/// Static text drawn last, anchored at its center
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub color: Color,
}

/// Validated layout, fixed for the session
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    width: u32,
    height: u32,
    disc: DiscGeometry,
    track: Option<ValueTrack>,
    fields: [Rect; 3],
    swatch: Option<Rect>,
    labels: Vec<Label>,
    marker_radius: u32,
    marker_width: u32,
}

impl Layout {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whole canvas as a rectangle at the origin
    pub fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn disc(&self) -> &DiscGeometry {
        &self.disc
    }

    pub fn track(&self) -> Option<&ValueTrack> {
        self.track.as_ref()
    }

    pub fn field_rect(&self, channel: Channel) -> Rect {
        self.fields[channel.index()]
    }

    /// Field under a pointer, if any
    pub fn field_at(&self, p: Point) -> Option<Channel> {
        Channel::ALL
            .into_iter()
            .find(|c| self.fields[c.index()].contains(p))
    }

    pub fn swatch(&self) -> Option<Rect> {
        self.swatch
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn marker_radius(&self) -> u32 {
        self.marker_radius
    }

    pub fn marker_width(&self) -> u32 {
        self.marker_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        let desktop = LayoutSpec::desktop().build().unwrap();
        assert_eq!(desktop.disc().radius(), 250);
        assert_eq!(desktop.track().unwrap().mode(), TrackMode::Alpha);
        assert_eq!(desktop.labels().len(), 4);

        let terminal = LayoutSpec::terminal().build().unwrap();
        assert!(terminal.canvas().contains(Point::new(77, 35)));
        let bounds = terminal.disc().bounds();
        assert!(bounds.x >= 0 && bounds.right() <= terminal.width() as i32);
        assert!(bounds.y >= 0 && bounds.bottom() <= terminal.height() as i32);
    }

    #[test]
    fn test_zero_radius_is_fatal() {
        let mut spec = LayoutSpec::desktop();
        spec.disc.radius = 0;
        assert_eq!(spec.build(), Err(EngineError::DegenerateDisc(0)));
    }

    #[test]
    fn test_zero_track_length_is_fatal() {
        let mut spec = LayoutSpec::terminal();
        if let Some(track) = spec.track.as_mut() {
            track.length = 0;
        }
        assert!(matches!(
            spec.build(),
            Err(EngineError::DegenerateTrack { length: 0, .. })
        ));
    }

    #[test]
    fn test_disc_must_fit_canvas() {
        let mut spec = LayoutSpec::desktop();
        spec.disc.radius = 100_000;
        assert!(matches!(
            spec.build(),
            Err(EngineError::DiscOutOfCanvas { radius: 100_000, .. })
        ));

        spec.disc.radius = i32::MAX;
        assert!(spec.build().is_err());

        // Touching the last row and column is still on the canvas
        let mut spec = LayoutSpec::terminal();
        spec.disc = DiscSpec {
            center_x: 17,
            center_y: 17,
            radius: 17,
        };
        spec.height = 35;
        assert!(spec.build().is_ok());
        spec.height = 34;
        assert!(spec.build().is_err());
    }

    #[test]
    fn test_overlapping_fields_are_rejected() {
        let mut spec = LayoutSpec::desktop();
        spec.fields.green = Rect::new(660, 90, 80, 30);
        assert_eq!(
            spec.build(),
            Err(EngineError::FieldOverlap(Channel::Red, Channel::Green))
        );
    }

    #[test]
    fn test_bad_label_color_is_rejected() {
        let mut spec = LayoutSpec::desktop();
        spec.labels[0].color = "red".to_string();
        assert!(matches!(spec.build(), Err(EngineError::InvalidColor(_))));
    }

    #[test]
    fn test_field_hit_testing() {
        let layout = LayoutSpec::desktop().build().unwrap();
        assert_eq!(layout.field_at(Point::new(660, 90)), Some(Channel::Red));
        assert_eq!(layout.field_at(Point::new(729, 314)), Some(Channel::Blue));
        assert_eq!(layout.field_at(Point::new(640, 90)), None);
    }
}
