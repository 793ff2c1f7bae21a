use serde::{Deserialize, Serialize};

/// A 2D point in layout coordinates (micrometers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_bbox_from_points() {
        let pts = [
            Point::new(-1.0, 2.0),
            Point::new(3.0, -4.0),
            Point::new(0.5, 0.5),
        ];
        let bbox = BBox::from_points(&pts).unwrap();
        assert_eq!(bbox.min, Point::new(-1.0, -4.0));
        assert_eq!(bbox.max, Point::new(3.0, 2.0));
        assert!((bbox.width() - 4.0).abs() < 1e-10);
        assert!((bbox.height() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_bbox_empty() {
        assert!(BBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = BBox::new(Point::new(-2.0, 0.5), Point::new(0.5, 3.0));
        let u = a.union(&b);
        assert_eq!(u.min, Point::new(-2.0, 0.0));
        assert_eq!(u.max, Point::new(1.0, 3.0));
    }
}
