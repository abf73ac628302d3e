// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dashgo_client::app::App;
use dashgo_client::config::AppConfig;
use sycamore::prelude::*;

fn main() {
	console_error_panic_hook::set_once();

	let config = AppConfig::from_browser();
	wasm_logger::init(wasm_logger::Config::new(config.log_level));
	log::debug!("Starting with locale {}", config.locale);

	sycamore::render(|ctx| {
		provide_context(ctx, config);
		view! { ctx, App }
	});
}
