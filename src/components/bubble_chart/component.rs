use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::config::BubbleConfig;
use super::render;
use super::state::{BubbleChartState, FrameAction};
use super::types::DataPoint;

/// Bubble chart drawn on a canvas. Bubbles with a link navigate to
/// `/{link}` when clicked, or call `on_navigate` when it is given.
/// Must be rendered inside a `<Router>`.
#[component]
pub fn BubbleChart(
	#[prop(into)] data: Signal<Vec<DataPoint>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = false)] progressive: bool,
	#[prop(optional)] config: Option<BubbleConfig>,
	#[prop(optional, into)] on_navigate: Option<Callback<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BubbleChartState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let dataset = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};

		// Already mounted: a new dataset only restarts the simulation.
		if let Some(ref mut s) = *state_init.borrow_mut() {
			s.load(&dataset);
			return;
		}

		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("bubble chart: 2d canvas context unavailable");
			return;
		};

		let mut chart =
			BubbleChartState::new(config.clone().unwrap_or_default(), w, h, progressive);
		chart.load(&dataset);
		*state_init.borrow_mut() = Some(chart);

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner, resize_stop) =
			(state_init.clone(), animate_init.clone(), resize_cb_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let action = state_anim
				.borrow_mut()
				.as_mut()
				.map_or(FrameAction::Stop, |s| {
					let action = s.frame(canvas.is_connected());
					if action == FrameAction::Render {
						render::render(s, &ctx);
					}
					action
				});

			if action == FrameAction::Stop {
				// Navigated away: release the chart and the resize listener.
				info!("bubble chart: canvas detached, stopping frame loop");
				let resize = resize_stop.borrow_mut().take();
				if let (Some(win), Some(cb)) = (web_sys::window(), resize) {
					let _ = win
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				state_anim.borrow_mut().take();
				return;
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let navigate = use_navigate();
	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let mut target = None;
		if let Some(ref s) = *state_click.borrow() {
			s.click(x, y, |link| target = Some(link.to_owned()));
		}
		let Some(link) = target else {
			return;
		};
		info!("bubble chart: navigating to {link}");
		match on_navigate {
			Some(cb) => cb.run(link),
			None => navigate(&format!("/{link}"), Default::default()),
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.bubble_at(x, y);
			s.set_hover(hovered);
			set_cursor(canvas_ref, s.hovering_link());
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
		set_cursor(canvas_ref, false);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="bubble-chart-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn set_cursor(canvas_ref: NodeRef<leptos::html::Canvas>, pointer: bool) {
	if let Some(canvas) = canvas_ref.get() {
		let canvas: HtmlCanvasElement = canvas.into();
		let _ = HtmlElement::style(&canvas)
			.set_property("cursor", if pointer { "pointer" } else { "default" });
	}
}
