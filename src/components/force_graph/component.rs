use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::layout::configure_layout;
use super::pick;
use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;
use crate::config::{GraphConfig, NodeStyle};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The canvas fills its parent element.
fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Off-screen canvas backing the pick buffer.
fn pick_context(width: f64, height: f64) -> Option<CanvasRenderingContext2d> {
	let canvas: HtmlCanvasElement = web_sys::window()?
		.document()?
		.create_element("canvas")
		.ok()?
		.dyn_into()
		.ok()?;
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	context_2d(&canvas)
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Paints the pick buffer and reads back the node under `(x, y)`.
fn node_under_pointer(
	state: &ForceGraphState,
	pick_ctx: &mut CanvasRenderingContext2d,
	style: &NodeStyle,
	x: f64,
	y: f64,
) -> Option<usize> {
	render::render_pointer_areas(state, style, pick_ctx);
	let pixel = pick_ctx.get_image_data(x, y, 1.0, 1.0).ok()?.data();
	let rgba: [u8; 4] = pixel.0.get(..4)?.try_into().ok()?;
	pick::ordinal_at(rgba)
}

/// Canvas running the layout engine for `data`. Sized to its parent and
/// resized with the window.
#[component]
pub fn ForceGraphCanvas(
	/// Data set to lay out. Each new value replaces the previous one whole.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Forces, camera and paint settings.
	#[prop(optional)]
	config: GraphConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = Rc::new(config);
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let pick_ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, pick_init, animate_init, resize_cb_init, config_init) = (
		state.clone(),
		pick_ctx.clone(),
		animate.clone(),
		resize_cb.clone(),
		config.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("canvas has no 2d context, graph disabled");
			return;
		};
		let mut initial = ForceGraphState::new(&data.get_untracked(), w, h);
		configure_layout(Some(&mut initial), &config_init.layout);
		*state_init.borrow_mut() = Some(initial);
		*pick_init.borrow_mut() = pick_context(w, h);

		let (state_resize, pick_resize, canvas_resize) =
			(state_init.clone(), pick_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			*pick_resize.borrow_mut() = pick_context(nw, nh);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
			debug!("graph canvas resized to {}x{}", nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, config_anim) =
			(state_init.clone(), animate_init.clone(), config_init.clone());
		let mut last_frame = js_sys::Date::now();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let elapsed_ms = now - last_frame;
			last_frame = now;
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016, elapsed_ms);
				render::render(s, &config_anim, &mut ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Each new data set is swapped in whole between two frames.
	let (state_data, config_data) = (state.clone(), config.clone());
	Effect::new(move |_| {
		let data = data.get();
		let mut guard = state_data.borrow_mut();
		if let Some(s) = guard.as_mut() {
			s.set_data(&data);
		}
		configure_layout(guard.as_mut(), &config_data.layout);
		if let Some(s) = guard.as_ref() {
			let (charge, distance, pending) = s.forces();
			debug!("forces set: charge {}, link distance {} (pending: {})", charge, distance, pending);
		}
	});

	let (state_md, pick_md, config_md) = (state.clone(), pick_ctx.clone(), config.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			let hit = pick_md
				.borrow_mut()
				.as_mut()
				.and_then(|p| node_under_pointer(s, p, &config_md.node, x, y));
			s.pointer_down(x, y, hit);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let (state_mu, config_mu) = (state.clone(), config.clone());
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if let Some(ordinal) = s.pointer_up(&config_mu.focus) {
				debug!("clicked node #{}", ordinal);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
