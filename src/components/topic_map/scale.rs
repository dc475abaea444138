//! Viewport arithmetic: fitting the content canvas to the screen and mapping
//! between screen and content coordinates.

use crate::config::{FitPolicy, PanPolicy, ScaleBounds};
use crate::geometry::{Point, Size};

/// Affine map from content canvas to screen: `screen = content * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn screen_to_content(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	pub fn content_to_screen(&self, content: Point) -> Point {
		Point::new(content.x * self.k + self.x, content.y * self.k + self.y)
	}
}

/// Screen space reserved above and below the stage (top bar, bottom dock).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chrome {
	pub top: f64,
	pub bottom: f64,
}

/// The part of the viewport left for the map.
pub fn available_rect(viewport: Size, chrome: Chrome) -> Size {
	Size::new(
		viewport.width.max(0.0),
		(viewport.height - chrome.top - chrome.bottom).max(0.0),
	)
}

/// Largest scale at which the content fits the rectangle, before clamping.
pub fn fit_scale(avail: Size, content: Size, policy: FitPolicy) -> f64 {
	let pad = policy.padding * 2.0;
	let k = ((avail.width - pad) / content.width).min((avail.height - pad) / content.height);
	if avail.width < policy.narrow_max_width {
		k * policy.narrow_boost
	} else {
		k
	}
}

/// Transform that shows the whole content centred in the stage.
pub fn fit_transform(
	viewport: Size,
	chrome: Chrome,
	content: Size,
	policy: FitPolicy,
	bounds: ScaleBounds,
) -> ViewTransform {
	let avail = available_rect(viewport, chrome);
	let raw = fit_scale(avail, content, policy);
	let k = if raw.is_finite() { bounds.clamp(raw) } else { bounds.min };
	ViewTransform {
		x: (avail.width - content.width * k) / 2.0,
		y: chrome.top + (avail.height - content.height * k) / 2.0,
		k,
	}
}

/// Content point under the centre of the visible stage.
pub fn view_center(transform: &ViewTransform, viewport: Size, chrome: Chrome) -> Point {
	let avail = available_rect(viewport, chrome);
	transform.screen_to_content(Point::new(avail.width / 2.0, chrome.top + avail.height / 2.0))
}

/// Zooms by `factor` keeping the content point under `anchor` in place.
pub fn zoom_at(transform: &ViewTransform, anchor: Point, factor: f64, bounds: ScaleBounds) -> ViewTransform {
	let k = bounds.clamp(transform.k * factor);
	let ratio = k / transform.k;
	ViewTransform {
		x: anchor.x - (anchor.x - transform.x) * ratio,
		y: anchor.y - (anchor.y - transform.y) * ratio,
		k,
	}
}

fn clamp_axis(offset: f64, start: f64, len: f64, span: f64) -> f64 {
	let (lo, hi) = if span <= len {
		(start, start + len - span)
	} else {
		(start + len - span, start)
	};
	offset.clamp(lo, hi)
}

/// Applies the pan policy. `Free` leaves the transform alone.
pub fn clamp_pan(
	transform: ViewTransform,
	viewport: Size,
	chrome: Chrome,
	content: Size,
	policy: PanPolicy,
) -> ViewTransform {
	match policy {
		PanPolicy::Free => transform,
		PanPolicy::Bounded => {
			let avail = available_rect(viewport, chrome);
			ViewTransform {
				x: clamp_axis(transform.x, 0.0, avail.width, content.width * transform.k),
				y: clamp_axis(transform.y, chrome.top, avail.height, content.height * transform.k),
				k: transform.k,
			}
		}
	}
}
