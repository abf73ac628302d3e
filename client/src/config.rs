// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dashgo_shared::locale::Locale;
use log::Level;

/// How long the placeholder user creation waits before reporting success
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 2_000;

/// Settings for the application, provided to every page through context
#[derive(Clone, Debug)]
pub struct AppConfig {
	pub locale: Locale,
	pub submit_delay_ms: u32,
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		let log_level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
		Self {
			locale: Locale::default(),
			submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
			log_level,
		}
	}
}

impl AppConfig {
	/// Builds the configuration from the browser environment. The interface language follows the browser's
	/// preferred language when it's one we have text for.
	pub fn from_browser() -> Self {
		let locale = web_sys::window()
			.and_then(|window| window.navigator().language())
			.and_then(|tag| Locale::from_tag(&tag))
			.unwrap_or_default();
		Self {
			locale,
			..Self::default()
		}
	}
}
