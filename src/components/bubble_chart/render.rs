use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{Bubble, Fill, LABEL_DY, LABEL_FONT, Scene};
use super::state::BubbleChartState;

pub fn render(state: &BubbleChartState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_scene(&state.scene, ctx);
}

fn draw_scene(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	for bubble in &scene.bubbles {
		draw_bubble(bubble, ctx);
	}
}

fn draw_bubble(bubble: &Bubble, ctx: &CanvasRenderingContext2d) {
	let (x, y, r) = (bubble.cx, bubble.cy, bubble.radius);

	ctx.save();
	if let Some((color, blur)) = bubble.glow() {
		ctx.set_shadow_color(color);
		ctx.set_shadow_blur(blur);
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
	match bubble.tier.fill() {
		Fill::Solid(color) => ctx.set_fill_style_str(color),
		Fill::Linear(g) => {
			// left-to-right across the circle's bounding box
			let gradient = ctx.create_linear_gradient(x - r, y, x + r, y);
			let _ = gradient.add_color_stop(0.0, g.from);
			let _ = gradient.add_color_stop(0.9825, g.to);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
	}
	ctx.fill();

	// the glow covers the label too
	ctx.set_fill_style_str(bubble.tier.text_color());
	ctx.set_font(&format!("400 {}px {}", bubble.tier.font_px(), LABEL_FONT));
	let _ = ctx.fill_text(&bubble.label, x, y + LABEL_DY);
	ctx.restore();
}
