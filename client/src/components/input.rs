// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::FieldBinding;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct FormInputProps<'a> {
	binding: FieldBinding<'a>,
	label: &'static str,
	input_type: &'static str,
}

/// A labeled input for one form field, showing the field's current error below it
#[component]
pub fn FormInput<'a, G: Html>(ctx: Scope<'a>, props: FormInputProps<'a>) -> View<G> {
	let binding = props.binding;
	let has_error = create_memo(ctx, move || binding.error().get().is_some());
	let input_class = create_memo(ctx, move || {
		let mut classes = Vec::new();
		if *has_error.get() {
			classes.push("error");
		}
		if *binding.touched().get() {
			classes.push("touched");
		}
		classes.join(" ")
	});
	let aria_invalid = create_memo(ctx, move || if *has_error.get() { "true" } else { "false" });
	let blur_handler = move |_event: WebEvent| binding.mark_touched();

	let value = binding.value();
	let input_id = format!("{}_input", binding.name());
	let input_id_for = input_id.clone();
	view! {
		ctx,
		div(class="input_with_message") {
			label(for=input_id_for) {
				(props.label)
			}
			input(
				id=input_id,
				name=binding.name(),
				type=props.input_type,
				class=(*input_class.get()).clone(),
				aria-invalid=*aria_invalid.get(),
				bind:value=value,
				on:blur=blur_handler
			)
			(
				if let Some(message) = (*binding.error().get()).clone() {
					view! {
						ctx,
						span(class="input_error") { (message) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{FormState, SubmitError, SubmitOutcome};
	use dashgo_shared::forms::create_user::{CreateUserField, CreateUserFormData};
	use dashgo_shared::locale::Locale;
	use futures::executor::block_on;
	use sycamore::render_to_string;

	#[test]
	fn rendered_errors_follow_revalidation() {
		let html = render_to_string(|ctx| {
			let form = create_ref(ctx, FormState::new(ctx, CreateUserFormData::default(), Locale::En));
			let outcome = block_on(form.submit(|_| async { Ok::<(), SubmitError>(()) }));
			assert_eq!(outcome, SubmitOutcome::Invalid);

			let view = view! {
				ctx,
				FormInput(binding=form.register(CreateUserField::Name), label="Full name", input_type="text")
				FormInput(binding=form.register(CreateUserField::Email), label="Email", input_type="email")
			};
			// Fixing the name after rendering must remove its message from the rendered view
			form.register(CreateUserField::Name).set("Ana");
			view
		});

		assert!(!html.contains("Name is required"), "stale error in {html}");
		assert!(html.contains("Email is required"), "missing error in {html}");
		assert!(html.contains("Full name"));
		assert!(html.contains(r#"name="email""#));
		assert!(html.contains(r#"aria-invalid="true""#));
		assert!(html.contains(r#"aria-invalid="false""#));
	}

	#[test]
	fn valid_field_renders_without_error() {
		let html = render_to_string(|ctx| {
			let form = create_ref(ctx, FormState::new(ctx, CreateUserFormData::default(), Locale::PtBr));
			view! {
				ctx,
				FormInput(binding=form.register(CreateUserField::Password), label="Senha", input_type="password")
			}
		});

		assert!(!html.contains("input_error"));
		assert!(html.contains(r#"type="password""#));
		assert!(html.contains(r#"for="password_input""#));
	}
}
