use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::state::TopicMapState;
use crate::graph::EdgeType;

fn link_color(kind: EdgeType) -> &'static str {
	match kind {
		EdgeType::Evidence => "rgba(74, 222, 128, 0.85)",
		EdgeType::Citation => "rgba(96, 165, 250, 0.85)",
		EdgeType::Timeline => "rgba(250, 204, 21, 0.8)",
		EdgeType::Overlap => "rgba(200, 200, 220, 0.7)",
		EdgeType::Rumor => "rgba(248, 113, 113, 0.8)",
	}
}

pub fn render(state: &TopicMapState, ctx: &CanvasRenderingContext2d, image: &HtmlImageElement) {
	ctx.set_fill_style_str("#0d0f14");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_background(state, ctx, image);
	draw_links(state, ctx);
	draw_hotspots(state, ctx);
	ctx.restore();
}

fn draw_background(state: &TopicMapState, ctx: &CanvasRenderingContext2d, image: &HtmlImageElement) {
	let content = state.config.content;
	if image.complete() && image.natural_width() > 0 {
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			image,
			0.0,
			0.0,
			content.width,
			content.height,
		);
	} else {
		ctx.set_fill_style_str("#1a1d26");
		ctx.fill_rect(0.0, 0.0, content.width, content.height);
	}
}

fn draw_links(state: &TopicMapState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap) = (6.0 / k, 4.0 / k);
	for link in &state.scene.links {
		ctx.set_stroke_style_str(link_color(link.kind));
		ctx.set_line_width(link.line_width());
		// Rumors dashed.
		if link.kind == EdgeType::Rumor {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		ctx.begin_path();
		ctx.move_to(link.from.x, link.from.y);
		ctx.line_to(link.to.x, link.to.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_hotspots(state: &TopicMapState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let base = state.config.hotspot_radius;
	let font_px = 13.0 / k.max(0.35);

	for spot in &state.scene.hotspots {
		let hovered = state.hover.as_deref() == Some(spot.id.as_str());
		let radius = if hovered || spot.selected { base * 1.25 } else { base };
		let (x, y) = (spot.at.x, spot.at.y);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if spot.read {
			"rgba(120, 130, 150, 0.75)"
		} else {
			"rgba(255, 196, 61, 0.95)"
		});
		ctx.fill();

		if spot.selected || hovered {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(if spot.selected { "white" } else { "rgba(255, 255, 255, 0.6)" });
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_font(&format!("600 {font_px}px sans-serif"));
		ctx.set_fill_style_str("rgba(0, 0, 0, 0.65)");
		let _ = ctx.fill_text(&spot.title, x + radius + 4.0 + 1.0 / k, y + 4.0 + 1.0 / k);
		ctx.set_fill_style_str(if spot.read { "rgba(220, 224, 232, 0.8)" } else { "white" });
		let _ = ctx.fill_text(&spot.title, x + radius + 4.0, y + 4.0);
	}
}
