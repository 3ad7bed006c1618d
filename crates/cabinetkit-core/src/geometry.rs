//! Geometry primitives
//!
//! Everything the engines produce is an [`OrientedBox`]: a planar profile
//! (rectangle or polygon) lying in an axis plane and extruded along that
//! plane's normal. Boxes are plain values; the renderer consumes them once.
//!
//! Profile coordinates `(u, v)` map to world axes by normal:
//! - `Z`: `u = x`, `v = y`, extrude along `+z`
//! - `Y`: `u = x`, `v = z`, extrude along `+y`
//! - `X`: `u = y`, `v = z`, extrude along `+x`

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Point2 = nalgebra::Point2<f64>;
pub type Point3 = nalgebra::Point3<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;

/// Extrusion axis (the face normal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Top-level scene collection a box belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxCategory {
    Carcass,
    Fronts,
    Hardware,
    Countertops,
    Backsplash,
    Appliances,
}

impl BoxCategory {
    pub const ALL: [BoxCategory; 6] = [
        BoxCategory::Carcass,
        BoxCategory::Fronts,
        BoxCategory::Hardware,
        BoxCategory::Countertops,
        BoxCategory::Backsplash,
        BoxCategory::Appliances,
    ];
}

impl fmt::Display for BoxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Carcass => "Carcass",
            Self::Fronts => "Fronts",
            Self::Hardware => "Hardware",
            Self::Countertops => "Countertops",
            Self::Backsplash => "Backsplash",
            Self::Appliances => "Appliances",
        };
        write!(f, "{}", name)
    }
}

/// Semantic material key handed to the material provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialTag {
    Carcass,
    Back,
    Shelf,
    ToeKick,
    FaceFrame,
    Door,
    Drawer,
    Glass,
    Panel,
    Hardware,
    Countertop,
    Backsplash,
    Filler,
    Appliance,
    Cooktop,
    Burner,
    Vent,
}

impl MaterialTag {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Carcass => "carcass",
            Self::Back => "back",
            Self::Shelf => "shelf",
            Self::ToeKick => "toe_kick",
            Self::FaceFrame => "face_frame",
            Self::Door => "door",
            Self::Drawer => "drawer",
            Self::Glass => "glass",
            Self::Panel => "panel",
            Self::Hardware => "hardware",
            Self::Countertop => "countertop",
            Self::Backsplash => "backsplash",
            Self::Filler => "filler",
            Self::Appliance => "appliance",
            Self::Cooktop => "cooktop",
            Self::Burner => "burner",
            Self::Vent => "vent",
        }
    }
}

impl fmt::Display for MaterialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Planar face outline in `(u, v)` profile coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Profile {
    /// Rectangle from `(0, 0)` to `(width, depth)`
    Rect { width: f64, depth: f64 },
    /// Closed polygon, counter-clockwise, relative to the box origin
    Polygon { points: Vec<Point2> },
}

impl Profile {
    /// `(u_min, v_min, u_max, v_max)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Profile::Rect { width, depth } => (0.0, 0.0, *width, *depth),
            Profile::Polygon { points } => points.iter().fold(
                (
                    f64::INFINITY,
                    f64::INFINITY,
                    f64::NEG_INFINITY,
                    f64::NEG_INFINITY,
                ),
                |(u0, v0, u1, v1), p| (u0.min(p.x), v0.min(p.y), u1.max(p.x), v1.max(p.y)),
            ),
        }
    }

    /// Outline vertices, counter-clockwise
    pub fn outline(&self) -> Vec<Point2> {
        match self {
            Profile::Rect { width, depth } => vec![
                Point2::new(0.0, 0.0),
                Point2::new(*width, 0.0),
                Point2::new(*width, *depth),
                Point2::new(0.0, *depth),
            ],
            Profile::Polygon { points } => points.clone(),
        }
    }

    /// Shoelace area
    pub fn area(&self) -> f64 {
        match self {
            Profile::Rect { width, depth } => width * depth,
            Profile::Polygon { points } => {
                let n = points.len();
                if n < 3 {
                    return 0.0;
                }
                let twice: f64 = (0..n)
                    .map(|i| {
                        let a = points[i];
                        let b = points[(i + 1) % n];
                        a.x * b.y - b.x * a.y
                    })
                    .sum();
                twice.abs() / 2.0
            }
        }
    }
}

/// Append `point` unless it repeats the previous vertex within `tolerance`.
pub fn push_unique_point(path: &mut Vec<Point2>, point: Point2, tolerance: f64) {
    if let Some(last) = path.last() {
        if (point.x - last.x).abs() < tolerance && (point.y - last.y).abs() < tolerance {
            return;
        }
    }
    path.push(point);
}

/// The single output primitive of every geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub category: BoxCategory,
    /// Name within the category, e.g. `"Door 1"`
    pub name: String,
    pub origin: Point3,
    pub normal: Axis,
    pub profile: Profile,
    /// Extrusion distance along `+normal`
    pub extrude: f64,
    pub material: MaterialTag,
}

impl OrientedBox {
    /// Axis-aligned box from its minimum corner and size.
    ///
    /// The thinnest extent becomes the extrusion axis, so a side panel is a
    /// `(depth × height)` face extruded by its thickness.
    pub fn cuboid(
        category: BoxCategory,
        name: impl Into<String>,
        min: Point3,
        size: Vector3,
        material: MaterialTag,
    ) -> Self {
        let normal = if size.z <= size.x && size.z <= size.y {
            Axis::Z
        } else if size.y <= size.x {
            Axis::Y
        } else {
            Axis::X
        };
        let (profile, extrude) = match normal {
            Axis::Z => (
                Profile::Rect {
                    width: size.x,
                    depth: size.y,
                },
                size.z,
            ),
            Axis::Y => (
                Profile::Rect {
                    width: size.x,
                    depth: size.z,
                },
                size.y,
            ),
            Axis::X => (
                Profile::Rect {
                    width: size.y,
                    depth: size.z,
                },
                size.x,
            ),
        };
        Self {
            category,
            name: name.into(),
            origin: min,
            normal,
            profile,
            extrude,
            material,
        }
    }

    /// Polygon face in the plane perpendicular to `normal`, extruded by `extrude`.
    pub fn extruded(
        category: BoxCategory,
        name: impl Into<String>,
        origin: Point3,
        normal: Axis,
        points: Vec<Point2>,
        extrude: f64,
        material: MaterialTag,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            origin,
            normal,
            profile: Profile::Polygon { points },
            extrude,
            material,
        }
    }

    /// Scene path such as `"Carcass/Bottom"`
    pub fn group(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }

    /// Map profile coordinates plus extrusion offset to world space.
    pub fn to_world(&self, u: f64, v: f64, w: f64) -> Point3 {
        let o = self.origin;
        match self.normal {
            Axis::Z => Point3::new(o.x + u, o.y + v, o.z + w),
            Axis::Y => Point3::new(o.x + u, o.y + w, o.z + v),
            Axis::X => Point3::new(o.x + w, o.y + u, o.z + v),
        }
    }

    /// World-space axis-aligned bounds `(min, max)`
    pub fn bounds(&self) -> (Point3, Point3) {
        let (u0, v0, u1, v1) = self.profile.bounds();
        let a = self.to_world(u0, v0, 0.0);
        let b = self.to_world(u1, v1, self.extrude);
        (
            Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        )
    }

    /// World-space extents along x, y, z
    pub fn size(&self) -> Vector3 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Vertex count of the planar face
    pub fn face_vertex_count(&self) -> usize {
        match &self.profile {
            Profile::Rect { .. } => 4,
            Profile::Polygon { points } => points.len(),
        }
    }

    /// Face outline in world space at the base of the extrusion
    pub fn face_vertices(&self) -> Vec<Point3> {
        self.profile
            .outline()
            .into_iter()
            .map(|p| self.to_world(p.x, p.y, 0.0))
            .collect()
    }

    pub fn volume(&self) -> f64 {
        self.profile.area() * self.extrude
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: &Vector3) -> Self {
        let mut moved = self.clone();
        moved.origin += *offset;
        moved
    }

    /// Reject zero-extent boxes and polygons with repeated or too few vertices.
    ///
    /// Consecutive duplicate polygon vertices are removed in place first.
    pub fn sanitize(&mut self, epsilon: f64) -> Result<(), GeometryError> {
        if !self.extrude.is_finite() || self.extrude < epsilon {
            return Err(GeometryError::Degenerate {
                group: self.group(),
                reason: format!("extrusion {:.4} below {}", self.extrude, epsilon),
            });
        }

        let group = self.group();
        match &mut self.profile {
            Profile::Rect { width, depth } => {
                if !(width.is_finite() && depth.is_finite()) || *width < epsilon || *depth < epsilon
                {
                    return Err(GeometryError::Degenerate {
                        group,
                        reason: format!("face {:.4} x {:.4}", width, depth),
                    });
                }
            }
            Profile::Polygon { points } => {
                let mut unique = Vec::with_capacity(points.len());
                for p in points.iter() {
                    push_unique_point(&mut unique, *p, epsilon);
                }
                while unique.len() > 1 {
                    let (first, last) = (unique[0], unique[unique.len() - 1]);
                    if (first.x - last.x).abs() < epsilon && (first.y - last.y).abs() < epsilon {
                        unique.pop();
                    } else {
                        break;
                    }
                }
                if unique.len() < 3 {
                    return Err(GeometryError::TooFewVertices {
                        group,
                        count: unique.len(),
                    });
                }
                *points = unique;
            }
        }

        if self.profile.area() < epsilon * epsilon {
            return Err(GeometryError::Degenerate {
                group: self.group(),
                reason: "zero face area".to_string(),
            });
        }
        Ok(())
    }
}
