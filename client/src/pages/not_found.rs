// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::AppConfig;
use crate::page_utils::set_page_title;
use crate::text;
use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating fallback page for unknown location");

	let config: &AppConfig = use_context(ctx);
	let locale = config.locale;
	set_page_title(text::NOT_FOUND_HEADING.get(locale));

	view! {
		ctx,
		h1 { (text::NOT_FOUND_HEADING.get(locale)) }
		p { (text::NOT_FOUND_BODY.get(locale)) }
		p {
			a(href="/") {
				(text::NOT_FOUND_RETURN.get(locale))
			}
		}
	}
}
