//! Basic geometry types for panel placement.

/// A point (or offset) in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Linearly interpolate towards `other` without clamping `t`.
    ///
    /// `t` outside [0, 1] extrapolates past either end.
    #[inline]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self.to_vec2().lerp(other.to_vec2(), t).into()
    }

    /// Convert to a glam Vec2.
    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle of the given size centered on the origin.
    #[inline]
    pub fn centered(size: Size) -> Self {
        Self::new(-size.width / 2.0, -size.height / 2.0, size.width, size.height)
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_unclamped_endpoints() {
        let a = Point::new(100.0, 0.0);
        assert_eq!(a.lerp_unclamped(Point::ZERO, 0.0), a);
        assert_eq!(a.lerp_unclamped(Point::ZERO, 1.0), Point::ZERO);
        assert_eq!(a.lerp_unclamped(Point::ZERO, 0.5), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_lerp_unclamped_overshoot() {
        let a = Point::new(0.0, -10.0);
        assert_eq!(a.lerp_unclamped(Point::ZERO, 1.5), Point::new(0.0, 5.0));
        assert_eq!(a.lerp_unclamped(Point::ZERO, -1.0), Point::new(0.0, -20.0));
    }

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Size::new(800.0, 600.0));
        assert_eq!(rect.center(), Point::ZERO);
        assert_eq!(rect.width(), 800.0);
        assert_eq!(rect.height(), 600.0);
    }

    #[test]
    fn test_glam_conversion() {
        let p: Point = glam::Vec2::new(1.0, 2.0).into();
        assert_eq!(p.to_vec2(), glam::Vec2::new(1.0, 2.0));
    }
}
