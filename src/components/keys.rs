use web_sys::KeyboardEvent;

use crate::game::{GameSession, Key, SessionState};

/// What a global key press did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEffect {
	/// Menu and board handle their own input; keys are not routed there.
	Ignored,
	Handled,
	/// The name was submitted and the store changed, so it should be saved.
	Submitted,
}

/// Translates a DOM `KeyboardEvent.key` value. Named keys other than
/// Backspace and Enter are dropped.
pub fn key_from_name(name: &str) -> Option<Key> {
	match name {
		"Backspace" => Some(Key::Backspace),
		"Enter" => Some(Key::Enter),
		_ => {
			let mut chars = name.chars();
			match (chars.next(), chars.next()) {
				(Some(c), None) => Some(Key::Char(c)),
				_ => None,
			}
		}
	}
}

pub fn key_from_event(ev: &KeyboardEvent) -> Option<Key> {
	if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
		return None;
	}
	key_from_name(&ev.key())
}

/// Routes one key press from the window listener into the session.
pub fn dispatch_key(session: &mut GameSession, key: Key) -> KeyEffect {
	let before = session.state();
	if before == SessionState::Playing || before == SessionState::Menu {
		return KeyEffect::Ignored;
	}
	session.handle_key(key);
	if before == SessionState::AwaitingName && session.state() == SessionState::Ranking {
		KeyEffect::Submitted
	} else {
		KeyEffect::Handled
	}
}
