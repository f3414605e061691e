use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};

use crate::components::board::GameBoard;
use crate::components::keys::{KeyEffect, dispatch_key, key_from_event};
use crate::components::overlays::{EndBanner, MainMenu, NameEntry, RankingTable};
use crate::components::storage::{LocalStorageBackend, RECORDS_KEY};
use crate::game::{GameConfig, GameSession, Key, RecordBackend, RecordStore, SessionState};

/// Fresh seed per page load.
fn random_seed() -> u64 {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
	(hi << 32) | lo
}

/// Game page: board, overlays and keyboard handling.
#[component]
pub fn Home() -> impl IntoView {
	let config = GameConfig::default();
	let backend = LocalStorageBackend::new(RECORDS_KEY);
	let records = if config.records_enabled {
		RecordStore::load_or_default(&backend)
	} else {
		RecordStore::default()
	};
	info!("loaded records for {} groups", records.keys().count());
	let session = RwSignal::new(GameSession::new(config, records, random_seed()));

	let keydown = window_event_listener(ev::keydown, move |ev| {
		let Some(key) = key_from_event(&ev) else {
			return;
		};
		let routed = session.with_untracked(|s| {
			!matches!(s.state(), SessionState::Playing | SessionState::Menu)
		});
		if !routed {
			return;
		}
		if key == Key::Backspace {
			ev.prevent_default();
		}
		let mut effect = KeyEffect::Ignored;
		session.update(|s| effect = dispatch_key(s, key));
		if effect == KeyEffect::Submitted {
			session.with_untracked(|s| {
				if let Err(err) = backend.save(s.records()) {
					warn!("could not save records: {err}");
				}
			});
		}
	});
	on_cleanup(move || keydown.remove());

	let state = move || session.with(|s| s.state());
	let lost_subtitle = move || {
		session.with(|s| format!("You broke the {} order. {} nodes were left.", s.mode(), s.remaining()))
	};
	let won_subtitle = move || {
		session.with(|s| format!("{} executed correctly! Score: {}", s.mode(), s.score().unwrap_or_default()))
	};

	view! {
		<div class="game">
			<GameBoard session=session />
			<Show when=move || state() == SessionState::Menu>
				<MainMenu session=session />
			</Show>
			<Show when=move || state() == SessionState::AwaitingName>
				<NameEntry session=session />
			</Show>
			<Show when=move || state() == SessionState::Ranking>
				<RankingTable session=session />
			</Show>
			<Show when=move || state() == SessionState::Lost>
				<EndBanner title="GAME OVER" subtitle=lost_subtitle() class="lost" />
			</Show>
			<Show when=move || state() == SessionState::Won>
				<EndBanner title="VICTORY!" subtitle=won_subtitle() class="win" />
			</Show>
		</div>
	}
}
