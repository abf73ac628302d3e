// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::text::APP_NAME;
use sycamore::prelude::*;

#[component]
pub fn Header<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		header(id="header") {
			a(id="header_logo", href="/") {
				(APP_NAME)
				span(class="header_logo_dot") { "." }
			}
		}
	}
}
