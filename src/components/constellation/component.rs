use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ConstellationState;
use super::types::KeywordNode;

const FALLBACK_SIZE: (f64, f64) = (800.0, 384.0);
const TOOLTIP_QUOTES: usize = 3;

fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
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

/// Browser callbacks owned by one mounted constellation.
///
/// The frame callback reaches itself through this record to reschedule, so
/// it must be emptied on unmount or the closure and its canvas context leak.
#[derive(Default)]
struct FrameLoop {
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
	frame_id: Option<i32>,
}

/// Everything [`FrameLoop::detach`] pulled out, for the caller to release.
struct Detached {
	animate: Option<Closure<dyn FnMut()>>,
	resize: Option<Closure<dyn FnMut()>>,
	frame_id: Option<i32>,
}

impl FrameLoop {
	fn is_live(&self) -> bool {
		self.animate.is_some() || self.resize.is_some() || self.frame_id.is_some()
	}

	fn detach(&mut self) -> Detached {
		Detached {
			animate: self.animate.take(),
			resize: self.resize.take(),
			frame_id: self.frame_id.take(),
		}
	}

	/// Cancels the pending frame, unhooks the resize listener and drops both
	/// closures. Must not run from inside the frame callback.
	fn stop(&mut self) {
		let Detached {
			animate,
			resize,
			frame_id,
		} = self.detach();
		if let Some(window) = web_sys::window() {
			if let Some(id) = frame_id {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(cb) = &resize {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		drop(animate);
		drop(resize);
	}
}

/// Static keyword graph drawn on a canvas that fills its parent.
#[component]
pub fn KeywordConstellation(
	#[prop(into)] keywords: Signal<Vec<KeywordNode>>,
	/// Draw mutually related keywords with a single line.
	#[prop(default = false)]
	merge_mutual: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovered = RwSignal::new(None::<usize>);
	let state: Rc<RefCell<Option<ConstellationState>>> = Rc::new(RefCell::new(None));
	let frames: Rc<RefCell<FrameLoop>> = Rc::new(RefCell::new(FrameLoop::default()));
	let (state_init, frames_init) = (state.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = measure(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("Canvas 2d context unavailable; constellation not drawn");
			return;
		};
		// keyword set is loaded once and never changes
		*state_init.borrow_mut() = Some(ConstellationState::new(
			keywords.get_untracked(),
			merge_mutual,
			w,
			h,
		));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		let resize = Closure::<dyn FnMut()>::new(move || {
			let (nw, nh) = measure(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

		let (state_anim, frames_anim) = (state_init.clone(), frames_init.clone());
		let animate = Closure::<dyn FnMut()>::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			let Some(win) = web_sys::window() else {
				return;
			};
			let mut frames = frames_anim.borrow_mut();
			frames.frame_id = frames
				.animate
				.as_ref()
				.and_then(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		});
		let frame_id = window
			.request_animation_frame(animate.as_ref().unchecked_ref())
			.ok();

		let mut frames = frames_init.borrow_mut();
		frames.stop();
		*frames = FrameLoop {
			animate: Some(animate),
			resize: Some(resize),
			frame_id,
		};
	});

	let teardown = StoredValue::new_local((frames.clone(), state.clone()));
	on_cleanup(move || {
		teardown.try_with_value(|(frames, state)| {
			frames.borrow_mut().stop();
			state.borrow_mut().take();
		});
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let found = s.node_at_position(x, y);
			s.set_hover(found);
			if hovered.get_untracked() != found {
				hovered.set(found);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
		hovered.set(None);
	};

	let tooltip = move || {
		let idx = hovered.get()?;
		let node = keywords.with(|k| k.get(idx).cloned())?;
		let quotes = node
			.quotes
			.into_iter()
			.take(TOOLTIP_QUOTES)
			.map(|q| view! { <p class="tooltip-quote">"\u{2026}" {q} "\u{2026}"</p> })
			.collect_view();
		Some(view! {
			<div class="constellation-tooltip">
				<h4>"Related Comments for \u{201c}" {node.text} "\u{201d}"</h4>
				{quotes}
			</div>
		})
	};

	view! {
		<div class="constellation">
			<canvas
				node_ref=canvas_ref
				class="constellation-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style:cursor=move || if hovered.get().is_some() { "pointer" } else { "default" }
			/>
			{tooltip}
			<div class="constellation-legend">
				<span class="legend-dot positive"></span>"Positive"
				<span class="legend-dot neutral"></span>"Neutral"
				<span class="legend-dot negative"></span>"Negative"
				<span class="legend-note">"Lines show semantic connections"</span>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fresh_frame_loop_is_idle() {
		assert!(!FrameLoop::default().is_live());
	}

	#[test]
	fn test_detach_releases_everything_once() {
		let mut frames = FrameLoop {
			frame_id: Some(7),
			..FrameLoop::default()
		};
		assert!(frames.is_live());

		let first = frames.detach();
		assert_eq!(first.frame_id, Some(7));
		assert!(first.animate.is_none() && first.resize.is_none());
		assert!(!frames.is_live());

		let second = frames.detach();
		assert_eq!(second.frame_id, None);
	}
}
