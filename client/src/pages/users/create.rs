// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::USERS_PATH;
use crate::components::cancel_link::CancelLink;
use crate::components::form_error_display::FormErrorDisplay;
use crate::components::input::FormInput;
use crate::components::layout::DashboardLayout;
use crate::config::AppConfig;
use crate::form::{FormState, SubmitOutcome};
use crate::page_utils::set_page_title;
use crate::text;
use crate::users::create_user;
use dashgo_shared::forms::create_user::{CreateUserField, CreateUserFormData};
use dashgo_shared::forms::FormField;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn CreateUserView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating user creation page");

	let config: &AppConfig = use_context(ctx);
	let locale = config.locale;
	let submit_delay_ms = config.submit_delay_ms;
	set_page_title(text::CREATE_USER_HEADING.get(locale));

	let form_state = create_ref(ctx, FormState::new(ctx, CreateUserFormData::default(), locale));
	let is_submitting = form_state.is_submitting();
	let submit_label = create_memo(ctx, move || {
		if *is_submitting.get() {
			text::SAVING.get(locale)
		} else {
			text::SAVE.get(locale)
		}
	});

	let aria_busy = create_memo(ctx, move || if *is_submitting.get() { "true" } else { "false" });

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let outcome = form_state.submit(|values| create_user(values, submit_delay_ms)).await;
			if outcome == SubmitOutcome::Submitted {
				navigate(USERS_PATH);
			}
		});
	};

	view! {
		ctx,
		DashboardLayout {
			form(id="create_user", class="dashboard_panel", on:submit=form_submission_handler) {
				h1 { (text::CREATE_USER_HEADING.get(locale)) }
				hr(class="dashboard_divider")
				div(class="form_fields") {
					div(class="form_row") {
						FormInput(
							binding=form_state.register(CreateUserField::Name),
							label=CreateUserField::Name.label(locale),
							input_type="text"
						)
						FormInput(
							binding=form_state.register(CreateUserField::Email),
							label=CreateUserField::Email.label(locale),
							input_type="email"
						)
					}
					div(class="form_row") {
						FormInput(
							binding=form_state.register(CreateUserField::Password),
							label=CreateUserField::Password.label(locale),
							input_type="password"
						)
						FormInput(
							binding=form_state.register(CreateUserField::PasswordConfirmation),
							label=CreateUserField::PasswordConfirmation.label(locale),
							input_type="password"
						)
					}
				}
				FormErrorDisplay(error=form_state.submit_error())
				div(class="form_actions") {
					CancelLink(href=USERS_PATH, label=text::CANCEL.get(locale), disabled=is_submitting)
					button(
						type="submit",
						class="button button_primary",
						disabled=*is_submitting.get(),
						aria-busy=*aria_busy.get()
					) {
						(*submit_label.get())
					}
				}
			}
		}
	}
}
