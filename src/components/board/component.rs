use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use web_time::Instant;

use super::render;
use super::state::BoardState;
use crate::game::{GameSession, MoveOutcome, SessionState};

/// Canvas view of the running level. Clicks are forwarded to the session;
/// hover is tracked locally since the core never needs it.
#[component]
pub fn GameBoard(session: RwSignal<GameSession>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BoardState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	let (board_w, board_h) = session.with_untracked(|s| {
		let layout = &s.config().layout;
		(layout.width as f64, layout.height as f64)
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		canvas.set_width(board_w as u32);
		canvas.set_height(board_h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(BoardState::new(board_w, board_h, board_w, board_h));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				let _ = session.try_with_untracked(|game| render::render(game, s, &ctx));
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let board_point = move |ev: &MouseEvent, state: &BoardState| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		state.screen_to_board(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some((x, y)) = state_md.borrow().as_ref().map(|s| board_point(&ev, s)) else {
			return;
		};
		if session.with_untracked(|s| s.state()) != SessionState::Playing {
			return;
		}
		session.update(|s| {
			let outcome = s.click(x, y, Instant::now());
			if outcome != MoveOutcome::Ignored {
				debug!("click ({x:.0}, {y:.0}): {outcome:?}");
			}
		});
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let (x, y) = board_point(&ev, s);
			session.with_untracked(|game| {
				let hovered = if game.state() == SessionState::Playing {
					game.graph().node_at(x, y, game.config().hit_radius)
				} else {
					None
				};
				s.set_hover(hovered, game.graph());
			});
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			session.with_untracked(|game| s.set_hover(None, game.graph()));
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="game-board"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}
