//! Tunables for the map view and session.

use std::time::Duration;

use crate::geometry::Size;
use crate::storage::DEFAULT_CRUMB_CAP;

/// Size of the background image, and so of the content canvas.
pub const CONTENT_SIZE: Size = Size::new(1583.0, 2048.0);

/// How the fit scale is derived from the available rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPolicy {
	/// Screen pixels kept free on every side.
	pub padding: f64,
	/// Viewports narrower than this get `narrow_boost` applied.
	pub narrow_max_width: f64,
	/// Multiplier for narrow viewports, so phones do not zoom out too far.
	pub narrow_boost: f64,
}

impl FitPolicy {
	/// Fill the available rectangle exactly.
	pub const fn exact() -> Self {
		Self {
			padding: 0.0,
			narrow_max_width: 0.0,
			narrow_boost: 1.0,
		}
	}
}

impl Default for FitPolicy {
	fn default() -> Self {
		Self {
			padding: 12.0,
			narrow_max_width: 600.0,
			narrow_boost: 1.15,
		}
	}
}

/// Allowed zoom range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
	/// Smallest scale factor.
	pub min: f64,
	/// Largest scale factor.
	pub max: f64,
}

impl ScaleBounds {
	/// Clamps `k` into the range.
	pub fn clamp(self, k: f64) -> f64 {
		k.clamp(self.min, self.max)
	}
}

impl Default for ScaleBounds {
	fn default() -> Self {
		Self { min: 0.12, max: 8.0 }
	}
}

/// Whether panning may move the content entirely off screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanPolicy {
	/// Pan anywhere.
	#[default]
	Free,
	/// Keep the content covering the stage (or inside it when smaller).
	Bounded,
}

/// Everything the map view needs that is not user state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
	/// Content canvas size.
	pub content: Size,
	/// Zoom bounds.
	pub scale: ScaleBounds,
	/// Relative zoom change per wheel notch.
	pub wheel_step: f64,
	/// How the fit scale is derived.
	pub fit: FitPolicy,
	/// Pan limits.
	pub pan: PanPolicy,
	/// Breadcrumbs kept.
	pub crumb_cap: usize,
	/// Delay before refitting, so layout can settle.
	pub refit_delay: Duration,
	/// Hotspot radius in content pixels.
	pub hotspot_radius: f64,
	/// Click tolerance in content pixels.
	pub hit_radius: f64,
	/// Pointer travel, in screen pixels, below which a press counts as a click.
	pub click_slop: f64,
	/// Background image URL.
	pub map_image: &'static str,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			content: CONTENT_SIZE,
			scale: ScaleBounds::default(),
			wheel_step: 0.12,
			fit: FitPolicy::default(),
			pan: PanPolicy::default(),
			crumb_cap: DEFAULT_CRUMB_CAP,
			refit_delay: Duration::from_millis(50),
			hotspot_radius: 14.0,
			hit_radius: 24.0,
			click_slop: 4.0,
			map_image: "/map.svg",
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::*;

	#[test]
	fn map_image_is_bundled() {
		let root = Path::new(env!("CARGO_MANIFEST_DIR"));
		let name = MapConfig::default().map_image.trim_start_matches('/');
		assert!(root.join("public").join(name).is_file(), "public/{name} missing");

		let index = std::fs::read_to_string(root.join("index.html")).unwrap();
		assert!(index.contains(&format!(r#"rel="copy-file" href="public/{name}""#)));
	}

	#[test]
	fn narrow_boost_only_in_default_fit() {
		assert_eq!(FitPolicy::exact().narrow_boost, 1.0);
		assert!(FitPolicy::default().narrow_boost > 1.0);
		assert_eq!(ScaleBounds::default().clamp(100.0), 8.0);
		assert_eq!(ScaleBounds::default().clamp(0.0), 0.12);
	}
}
