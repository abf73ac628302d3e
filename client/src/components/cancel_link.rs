// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct CancelLinkProps<'a> {
	href: &'static str,
	label: &'static str,
	disabled: &'a ReadSignal<bool>,
}

/// A link away from a form, replaced by inert text while the form is submitting
#[component]
pub fn CancelLink<'a, G: Html>(ctx: Scope<'a>, props: CancelLinkProps<'a>) -> View<G> {
	let disabled = props.disabled;
	let href = props.href;
	let label = props.label;

	view! {
		ctx,
		(if *disabled.get() {
			view! {
				ctx,
				span(class="button button_secondary button_disabled", aria-disabled="true") { (label) }
			}
		} else {
			view! {
				ctx,
				a(href=href, class="button button_secondary") { (label) }
			}
		})
	}
}
