// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::CREATE_USER_PATH;
use crate::components::layout::DashboardLayout;
use crate::config::AppConfig;
use crate::page_utils::set_page_title;
use crate::text;
use sycamore::prelude::*;

#[component]
pub fn UsersView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating user list page");

	let config: &AppConfig = use_context(ctx);
	let locale = config.locale;
	set_page_title(text::USERS_HEADING.get(locale));

	view! {
		ctx,
		DashboardLayout {
			div(id="user_list", class="dashboard_panel") {
				div(class="dashboard_panel_heading") {
					h1 { (text::USERS_HEADING.get(locale)) }
					a(href=CREATE_USER_PATH, class="button button_primary") {
						(text::CREATE_NEW.get(locale))
					}
				}
				hr(class="dashboard_divider")
				p(class="user_list_empty") { (text::USERS_EMPTY.get(locale)) }
			}
		}
	}
}
