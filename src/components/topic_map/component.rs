use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent, WheelEvent, Window,
};

use super::debounce::Debouncer;
use super::render;
use super::scale::Chrome;
use super::scene::Scene;
use super::state::TopicMapState;
use crate::config::MapConfig;
use crate::geometry::Point;

fn window_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Full-window canvas showing the map image, links and hotspots.
///
/// `chrome` is asked for the reserved top and bottom heights each time the
/// view is refitted; bump `refit` to refit after layout changes.
#[component]
pub fn TopicMap(
	#[prop(into)] scene: Signal<Scene>,
	#[prop(into)] refit: Signal<u64>,
	chrome: Callback<(), Chrome>,
	on_pick: Callback<String>,
	view_center: RwSignal<Point>,
	#[prop(default = MapConfig::default())] config: MapConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<TopicMapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let debouncer = Debouncer::new(config.refit_delay);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	let schedule_fit = {
		let (state, debouncer) = (state.clone(), debouncer.clone());
		move || {
			let state = state.clone();
			debouncer.schedule(move || {
				let Some(window) = web_sys::window() else {
					return;
				};
				let (w, h) = window_size(&window);
				if let Some(canvas) = canvas_ref.get_untracked() {
					let canvas: HtmlCanvasElement = canvas.into();
					canvas.set_width(w as u32);
					canvas.set_height(h as u32);
				}
				if let Some(ref mut s) = *state.borrow_mut() {
					s.resize(w, h);
					s.chrome = chrome.run(());
					s.fit();
					view_center.set(s.view_center());
					debug!("refit to {w}x{h}, scale {:.4}", s.transform.k);
				}
			});
		}
	};

	let map_image = config.map_image;
	let fit_on_resize = schedule_fit.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("2d canvas context unavailable");
			return;
		};

		let mut initial = TopicMapState::new(config.clone(), w, h, chrome.run(()));
		initial.set_scene(scene.get_untracked());
		view_center.set(initial.view_center());
		*state_init.borrow_mut() = Some(initial);

		let image = match HtmlImageElement::new() {
			Ok(img) => {
				img.set_src(map_image);
				img
			}
			Err(e) => {
				error!("could not create map image: {e:?}");
				return;
			}
		};

		let fit_on_resize = fit_on_resize.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || fit_on_resize()));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut image_ready = false;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if !image_ready && image.complete() && image.natural_width() > 0 {
					image_ready = true;
					s.dirty = true;
				}
				if s.dirty {
					render::render(s, &ctx, &image);
					s.dirty = false;
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_scene = state.clone();
	Effect::new(move |_| {
		let next = scene.get();
		if let Some(ref mut s) = *state_scene.borrow_mut() {
			s.set_scene(next);
		}
	});

	Effect::new(move |prev: Option<u64>| {
		let n = refit.get();
		if prev.is_some() {
			schedule_fit();
		}
		n
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.drag_to(x, y);
			} else {
				s.set_hover(x, y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let picked = match *state_mu.borrow_mut() {
			Some(ref mut s) => {
				let picked = s.end_press(x, y);
				view_center.set(s.view_center());
				picked
			}
			None => None,
		};
		if let Some(id) = picked {
			on_pick.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_press();
			view_center.set(s.view_center());
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_wheel(x, y, ev.delta_y());
			view_center.set(s.view_center());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="topic-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; position: fixed; inset: 0; cursor: grab;"
		/>
	}
}
