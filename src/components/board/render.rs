use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;
use web_time::Instant;

use super::state::{BoardState, NODE_RADIUS};
use crate::game::{GameSession, SessionState};

const BACKGROUND: &str = "#1e1e1e";
const NODE: &str = "rgb(200, 200, 200)";
const EDGE: &str = "rgb(100, 100, 100)";
const EDGE_VISITED: &str = "rgb(50, 200, 50)";
const VISITED: &str = "rgb(50, 200, 50)";
const QUEUED: &str = "rgb(200, 200, 50)";
const CURRENT: &str = "rgb(200, 50, 50)";
const TEXT: &str = "white";
const BAR_BACKGROUND: &str = "rgb(50, 0, 0)";
const BAR_ENERGY: &str = "rgb(200, 0, 0)";

pub fn render(session: &GameSession, state: &BoardState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	if session.state() == SessionState::Menu {
		return;
	}
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(session, state, ctx);
	draw_nodes(session, state, ctx);
	draw_hud(session, ctx);
	ctx.restore();
}

fn draw_edges(session: &GameSession, state: &BoardState, ctx: &CanvasRenderingContext2d) {
	let graph = session.graph();
	for &edge in graph.edges() {
		let (Some(a), Some(b)) = (graph.node(edge.0), graph.node(edge.1)) else {
			continue;
		};
		let width = if state.is_highlighted_edge(edge) {
			2.0 + 1.5 * state.hover.highlight_t
		} else {
			2.0
		};
		ctx.set_stroke_style_str(if graph.edge_visited(edge) { EDGE_VISITED } else { EDGE });
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_nodes(session: &GameSession, state: &BoardState, ctx: &CanvasRenderingContext2d) {
	// Frontier outline breathes between 0 and 1.
	let pulse = 0.5 + 0.5 * (state.pulse_time * 3.0).sin();

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font("bold 16px sans-serif");

	for node in session.graph().nodes() {
		let color = if session.current() == Some(node.id) {
			CURRENT
		} else if node.visited {
			VISITED
		} else if node.queued {
			QUEUED
		} else {
			NODE
		};

		if state.is_hovered(node.id) {
			ctx.begin_path();
			let _ = ctx.arc(
				node.x,
				node.y,
				NODE_RADIUS + 4.0 + 3.0 * state.hover.highlight_t,
				0.0,
				2.0 * PI,
			);
			ctx.set_stroke_style_str(&format!(
				"rgba(255, 255, 255, {})",
				0.4 + 0.5 * state.hover.highlight_t
			));
			ctx.set_line_width(2.0);
			ctx.stroke();
		} else if node.queued {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, NODE_RADIUS + 3.0 + 2.0 * pulse, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(200, 200, 50, {})", 0.2 + 0.4 * pulse));
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_stroke_style_str("black");
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str("black");
		let _ = ctx.fill_text(&node.id.to_string(), node.x, node.y);
	}
}

fn draw_hud(session: &GameSession, ctx: &CanvasRenderingContext2d) {
	let (bar_x, bar_y, bar_w, bar_h) = (200.0, 10.0, 400.0, 30.0);
	ctx.set_fill_style_str(BAR_BACKGROUND);
	ctx.fill_rect(bar_x, bar_y, bar_w, bar_h);
	ctx.set_fill_style_str(BAR_ENERGY);
	ctx.fill_rect(bar_x, bar_y, bar_w * session.energy_fraction(), bar_h);
	ctx.set_stroke_style_str(TEXT);
	ctx.set_line_width(2.0);
	ctx.stroke_rect(bar_x, bar_y, bar_w, bar_h);

	ctx.set_font("18px sans-serif");
	ctx.set_fill_style_str(TEXT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(
		&format!("Energy: {}%", (session.energy_fraction() * 100.0) as u32),
		bar_x + bar_w / 2.0,
		bar_y + bar_h / 2.0,
	);

	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	let info = format!(
		"Mode: {} ({}) | Left: {} | Time: {:.1}s",
		session.mode(),
		session.difficulty(),
		session.remaining(),
		session.elapsed(Instant::now()).as_secs_f64()
	);
	let _ = ctx.fill_text(&info, 10.0, 50.0);
}
