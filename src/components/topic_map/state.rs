use crate::config::MapConfig;
use crate::geometry::{Point, Size};

use super::scale::{self, Chrome, ViewTransform};
use super::scene::{Hotspot, Scene};

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// A press that started on a hotspot. Becomes a pick if released nearby.
#[derive(Clone, Debug)]
pub struct PressState {
	pub id: String,
	pub start: Point,
}

pub struct TopicMapState {
	pub config: MapConfig,
	pub scene: Scene,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub press: Option<PressState>,
	pub hover: Option<String>,
	pub width: f64,
	pub height: f64,
	pub chrome: Chrome,
	pub dirty: bool,
}

impl TopicMapState {
	pub fn new(config: MapConfig, width: f64, height: f64, chrome: Chrome) -> Self {
		let mut state = Self {
			config,
			scene: Scene::default(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			press: None,
			hover: None,
			width,
			height,
			chrome,
			dirty: true,
		};
		state.fit();
		state
	}

	pub fn viewport(&self) -> Size {
		Size::new(self.width, self.height)
	}

	pub fn fit(&mut self) {
		self.transform = scale::fit_transform(
			self.viewport(),
			self.chrome,
			self.config.content,
			self.config.fit,
			self.config.scale,
		);
		self.dirty = true;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.dirty = true;
	}

	pub fn set_scene(&mut self, scene: Scene) {
		if self.hover.as_ref().is_some_and(|id| !scene.hotspots.iter().any(|h| &h.id == id)) {
			self.hover = None;
		}
		self.scene = scene;
		self.dirty = true;
	}

	pub fn view_center(&self) -> Point {
		scale::view_center(&self.transform, self.viewport(), self.chrome)
	}

	pub fn hotspot_at(&self, sx: f64, sy: f64) -> Option<&Hotspot> {
		let at = self.transform.screen_to_content(Point::new(sx, sy));
		self.scene.hotspot_at(at, self.config.hit_radius)
	}

	pub fn set_hover(&mut self, sx: f64, sy: f64) {
		let hovered = self.hotspot_at(sx, sy).map(|h| h.id.clone());
		if hovered != self.hover {
			self.hover = hovered;
			self.dirty = true;
		}
	}

	/// Pointer down: arm a pick on a hotspot, and start panning either way so
	/// a drag that begins on a hotspot still moves the map.
	pub fn begin_press(&mut self, sx: f64, sy: f64) {
		self.press = self.hotspot_at(sx, sy).map(|h| PressState {
			id: h.id.clone(),
			start: Point::new(sx, sy),
		});
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		let moved = ViewTransform {
			x: self.pan.transform_start_x + (sx - self.pan.start_x),
			y: self.pan.transform_start_y + (sy - self.pan.start_y),
			k: self.transform.k,
		};
		self.transform = scale::clamp_pan(
			moved,
			self.viewport(),
			self.chrome,
			self.config.content,
			self.config.pan,
		);
		self.dirty = true;
	}

	/// Pointer up. Returns the picked topic when the press stayed within the
	/// click slop of a hotspot.
	pub fn end_press(&mut self, sx: f64, sy: f64) -> Option<String> {
		self.pan.active = false;
		let press = self.press.take()?;
		let slop = self.config.click_slop;
		(press.start.distance_sq(Point::new(sx, sy)) <= slop * slop).then_some(press.id)
	}

	pub fn cancel_press(&mut self) {
		self.pan.active = false;
		self.press = None;
		if self.hover.take().is_some() {
			self.dirty = true;
		}
	}

	pub fn zoom_wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let step = self.config.wheel_step;
		let factor = if delta_y > 0.0 { 1.0 - step } else { 1.0 + step };
		self.transform = scale::zoom_at(&self.transform, Point::new(sx, sy), factor, self.config.scale);
		self.dirty = true;
	}
}
