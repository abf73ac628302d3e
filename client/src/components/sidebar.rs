// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::AppConfig;
use crate::pages::users::{CREATE_USER_PATH, USERS_PATH};
use crate::text;
use sycamore::prelude::*;

#[component]
pub fn Sidebar<G: Html>(ctx: Scope) -> View<G> {
	let config: &AppConfig = use_context(ctx);
	let locale = config.locale;

	view! {
		ctx,
		aside(id="sidebar") {
			div(class="sidebar_section") {
				span(class="sidebar_section_title") {
					(text::NAV_GENERAL.get(locale))
				}
				ul(class="sidebar_links") {
					li {
						a(href=USERS_PATH) {
							(text::NAV_USERS.get(locale))
						}
					}
					li {
						a(href=CREATE_USER_PATH) {
							(text::NAV_CREATE_USER.get(locale))
						}
					}
				}
			}
		}
	}
}
