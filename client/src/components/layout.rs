// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::header::Header;
use super::sidebar::Sidebar;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct DashboardLayoutProps<'a, G: Html> {
	children: Children<'a, G>,
}

/// Places page content next to the sidebar, below the header
#[component]
pub fn DashboardLayout<'a, G: Html>(ctx: Scope<'a>, props: DashboardLayoutProps<'a, G>) -> View<G> {
	let children = props.children.call(ctx);

	view! {
		ctx,
		Header
		div(id="dashboard_body") {
			Sidebar
			main(id="dashboard_content") {
				(children)
			}
		}
	}
}
