//! Plain 2D value types shared by the map, the viewport and proximity queries.

/// A point, either in screen pixels or in content-canvas pixels depending on
/// where it came from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared distance, enough for nearest-point comparisons.
	pub fn distance_sq(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}
}

/// A width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// `width` by `height`.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Centre point.
	pub fn center(self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}
