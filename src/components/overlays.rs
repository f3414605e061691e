//! HTML overlays drawn above the board for every non-playing state.

use leptos::prelude::*;
use web_time::Instant;

use crate::game::{Difficulty, GameSession, Mode};

/// Mode toggle plus one button per difficulty; a difficulty click starts the
/// level in the selected mode.
#[component]
pub fn MainMenu(session: RwSignal<GameSession>) -> impl IntoView {
	let mode_buttons = Mode::ALL
		.into_iter()
		.map(|mode| {
			view! {
				<button
					class="mode-button"
					class:active=move || session.with(|s| s.mode()) == mode
					on:click=move |_| session.update(|s| s.set_mode(mode))
				>
					{mode.label()}
				</button>
			}
		})
		.collect_view();

	let difficulty_buttons = Difficulty::ALL
		.into_iter()
		.map(|difficulty| {
			view! {
				<button
					class="difficulty-button"
					on:click=move |_| {
						session
							.update(|s| {
								let mode = s.mode();
								s.start_level(difficulty, mode, Instant::now());
							})
					}
				>
					{difficulty.name()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="overlay menu">
			<h2>"1. Choose the algorithm"</h2>
			<div class="mode-row">{mode_buttons}</div>
			<p class="rule">{move || session.with(|s| s.mode().rule())}</p>
			<h2>"2. Choose a difficulty to start"</h2>
			<div class="difficulty-column">{difficulty_buttons}</div>
		</div>
	}
}

#[component]
pub fn NameEntry(session: RwSignal<GameSession>) -> impl IntoView {
	let score = move || session.with(|s| s.score().unwrap_or_default());
	let name = move || session.with(|s| s.name().to_string());
	let max_len = session.with_untracked(|s| s.config().name_max_len);

	view! {
		<div class="overlay name-entry">
			<h1 class="win">"Level cleared!"</h1>
			<p>"Score: " {score}</p>
			<p>"Type your name (up to " {max_len} " characters) and press Enter"</p>
			<p class="name-buffer">{name} <span class="cursor">"_"</span></p>
		</div>
	}
}

#[component]
pub fn RankingTable(session: RwSignal<GameSession>) -> impl IntoView {
	let title = move || {
		session.with(|s| format!("Ranking: {} ({})", s.mode(), s.difficulty()))
	};
	let rows = move || {
		session.with(|s| {
			let highlight = s.last_rank();
			s.ranking()
				.iter()
				.enumerate()
				.map(|(i, record)| {
					let class = if highlight == Some(i) { "latest" } else { "" };
					view! {
						<tr class=class>
							<td>{i + 1}</td>
							<td>{record.name.clone()}</td>
							<td>{record.score}</td>
							<td>{format!("{:.1}s", record.elapsed_seconds)}</td>
						</tr>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="overlay ranking">
			<h1>{title}</h1>
			<table>
				<thead>
					<tr>
						<th>"#"</th>
						<th>"Name"</th>
						<th>"Score"</th>
						<th>"Time"</th>
					</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
			<p class="hint">"Press 'M' to return to the menu"</p>
		</div>
	}
}

/// Final banner for a lost level, or a won one when records are disabled.
#[component]
pub fn EndBanner(
	#[prop(into)] title: String,
	#[prop(into)] subtitle: String,
	#[prop(into)] class: String,
) -> impl IntoView {
	view! {
		<div class="overlay end">
			<h1 class=class>{title}</h1>
			<p>{subtitle}</p>
			<p class="hint">"Press 'M' to return to the menu"</p>
		</div>
	}
}
