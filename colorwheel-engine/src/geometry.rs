//! Pixel-space geometry for the disc, the track and the fields
//!
//! Geometry is computed once at layout time and then fixed for the session.
//! Constructors reject degenerate sizes so no render path can divide by zero.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Integer pixel position. Y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `by` pixels on every side (saturating at zero size)
    pub fn inset(&self, by: u32) -> Rect {
        Rect::new(
            self.x + by as i32,
            self.y + by as i32,
            self.width.saturating_sub(by * 2),
            self.height.saturating_sub(by * 2),
        )
    }
}

/// Hue/saturation disc: center and radius in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscGeometry {
    center: Point,
    radius: u32,
}

impl DiscGeometry {
    /// Create a disc, rejecting a non-positive radius
    pub fn new(center: Point, radius: i32) -> Result<Self, EngineError> {
        if radius <= 0 {
            return Err(EngineError::DegenerateDisc(radius));
        }
        Ok(Self {
            center,
            radius: radius as u32,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Bounding square, side `2r + 1`, centered on the disc
    pub fn bounds(&self) -> Rect {
        let r = self.radius as i32;
        let side = self.radius * 2 + 1;
        Rect::new(self.center.x - r, self.center.y - r, side, side)
    }

    /// Whether `p` lies on or inside the circle
    pub fn contains(&self, p: Point) -> bool {
        let dx = (p.x - self.center.x) as i64;
        let dy = (p.y - self.center.y) as i64;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }
}

/// Direction of a linear track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Top is 1.0, bottom is 0.0
    Vertical,
    /// Left is 1.0, right is 0.0
    Horizontal,
}

/// Linear track: origin, length along the axis, thickness across it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackGeometry {
    origin: Point,
    length: u32,
    thickness: u32,
    orientation: Orientation,
}

impl TrackGeometry {
    /// Create a track, rejecting a non-positive length or thickness
    pub fn new(
        origin: Point,
        length: i32,
        thickness: i32,
        orientation: Orientation,
    ) -> Result<Self, EngineError> {
        if length <= 0 || thickness <= 0 {
            return Err(EngineError::DegenerateTrack { length, thickness });
        }
        Ok(Self {
            origin,
            length: length as u32,
            thickness: thickness as u32,
            orientation,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Origin coordinate along the track axis
    pub fn axis_origin(&self) -> i32 {
        match self.orientation {
            Orientation::Vertical => self.origin.y,
            Orientation::Horizontal => self.origin.x,
        }
    }

    /// Coordinate of `p` along the track axis
    pub fn axis_coord(&self, p: Point) -> i32 {
        match self.orientation {
            Orientation::Vertical => p.y,
            Orientation::Horizontal => p.x,
        }
    }

    /// Point on the track's leading edge at axis coordinate `along`
    pub fn point_at(&self, along: i32) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(self.origin.x, along),
            Orientation::Horizontal => Point::new(along, self.origin.y),
        }
    }

    /// Pixel rectangle covered by the track
    pub fn bounds(&self) -> Rect {
        match self.orientation {
            Orientation::Vertical => {
                Rect::new(self.origin.x, self.origin.y, self.thickness, self.length)
            }
            Orientation::Horizontal => {
                Rect::new(self.origin.x, self.origin.y, self.length, self.thickness)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_geometry_is_rejected() {
        assert_eq!(
            DiscGeometry::new(Point::new(0, 0), 0),
            Err(EngineError::DegenerateDisc(0))
        );
        assert!(DiscGeometry::new(Point::new(0, 0), -4).is_err());
        assert!(TrackGeometry::new(Point::new(0, 0), 0, 10, Orientation::Vertical).is_err());
        assert!(TrackGeometry::new(Point::new(0, 0), 100, 0, Orientation::Vertical).is_err());
    }

    #[test]
    fn test_disc_bounds_and_contains() {
        let disc = DiscGeometry::new(Point::new(280, 300), 250).unwrap();
        assert_eq!(disc.bounds(), Rect::new(30, 50, 501, 501));
        assert!(disc.contains(Point::new(530, 300)));
        assert!(!disc.contains(Point::new(531, 300)));
        assert!(!disc.contains(Point::new(30, 50)));
    }

    #[test]
    fn test_track_bounds_follow_orientation() {
        let h = TrackGeometry::new(Point::new(650, 395), 100, 10, Orientation::Horizontal).unwrap();
        assert_eq!(h.bounds(), Rect::new(650, 395, 100, 10));
        assert_eq!(h.axis_coord(Point::new(700, 400)), 700);

        let v = TrackGeometry::new(Point::new(40, 2), 30, 3, Orientation::Vertical).unwrap();
        assert_eq!(v.bounds(), Rect::new(40, 2, 3, 30));
        assert_eq!(v.axis_coord(Point::new(41, 17)), 17);
    }

    #[test]
    fn test_rect_hit_testing() {
        let r = Rect::new(650, 85, 80, 30);
        assert!(r.contains(Point::new(650, 85)));
        assert!(r.contains(Point::new(729, 114)));
        assert!(!r.contains(Point::new(730, 114)));
        assert!(!r.intersects(&Rect::new(650, 115, 80, 30)));
        assert!(r.intersects(&Rect::new(700, 100, 80, 30)));
    }
}
