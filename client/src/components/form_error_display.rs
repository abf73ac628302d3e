// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct FormErrorDisplayProps<'a> {
	error: &'a Signal<Option<String>>,
}

/// Shows a form-level error until it's dismissed or cleared
#[component]
pub fn FormErrorDisplay<'a, G: Html>(ctx: Scope<'a>, props: FormErrorDisplayProps<'a>) -> View<G> {
	let error = props.error;

	view! {
		ctx,
		(if let Some(message) = (*error.get()).clone() {
			let dismiss_handler = move |_event: WebEvent| error.set(None);
			view! {
				ctx,
				div(class="form_error") {
					span(class="form_error_text") { (message) }
					span(class="form_error_dismiss") {
						a(class="click", on:click=dismiss_handler) { "[X]" }
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
