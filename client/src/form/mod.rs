// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dashgo_shared::forms::{FieldErrors, FormData, FormField};
use dashgo_shared::locale::Locale;
use std::collections::HashMap;
use std::future::Future;
use sycamore::prelude::*;

pub mod error;
pub use error::{SubmitError, SubmitOutcome};

/// The signals connecting one form field to the control that edits it
#[derive(Clone, Copy)]
pub struct FieldBinding<'a> {
	name: &'static str,
	value: &'a Signal<String>,
	touched: &'a Signal<bool>,
	error: &'a ReadSignal<Option<String>>,
}

impl<'a> FieldBinding<'a> {
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The field's current value, suitable for two-way binding to an input
	pub fn value(&self) -> &'a Signal<String> {
		self.value
	}

	/// The message for the field's current violation, if it has one
	pub fn error(&self) -> &'a ReadSignal<Option<String>> {
		self.error
	}

	pub fn touched(&self) -> &'a ReadSignal<bool> {
		self.touched
	}

	pub fn set(&self, value: impl Into<String>) {
		self.value.set(value.into());
	}

	pub fn mark_touched(&self) {
		if !*self.touched.get_untracked() {
			self.touched.set(true);
		}
	}
}

/// Clears the submitting flag when dropped, so the flag is reset however the submission ends
struct SubmittingGuard<'a>(&'a Signal<bool>);

impl Drop for SubmittingGuard<'_> {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

/// Holds the state of one form for the lifetime of the scope it's created in: field values, per-field errors, and
/// the progress of the current submission.
///
/// Until the form is first submitted, editing fields doesn't validate anything. After that, every edit revalidates the
/// whole form so that error messages never lag behind the values.
pub struct FormState<'a, T: FormData> {
	bindings: HashMap<T::Field, FieldBinding<'a>>,
	defaults: T,
	locale: Locale,
	errors: &'a Signal<FieldErrors<T::Field>>,
	submit_count: &'a Signal<u32>,
	is_submitting: &'a Signal<bool>,
	submit_error: &'a Signal<Option<String>>,
}

impl<'a, T: FormData> FormState<'a, T> {
	pub fn new(ctx: Scope<'a>, defaults: T, locale: Locale) -> Self {
		let errors = create_signal(ctx, FieldErrors::new());
		let submit_count = create_signal(ctx, 0);
		let is_submitting = create_signal(ctx, false);
		let submit_error = create_signal(ctx, None);

		let mut bindings = HashMap::with_capacity(T::FIELDS.len());
		for field in T::FIELDS.iter().copied() {
			let value = create_signal(ctx, String::from(defaults.value(field)));
			let touched = create_signal(ctx, false);
			let error = create_selector(ctx, move || errors.get().message(field).map(String::from));
			bindings.insert(
				field,
				FieldBinding {
					name: field.name(),
					value,
					touched,
					error,
				},
			);
		}

		let watched_values: Vec<(T::Field, &'a Signal<String>)> =
			bindings.iter().map(|(field, binding)| (*field, binding.value)).collect();
		create_effect(ctx, move || {
			if *submit_count.get() == 0 {
				return;
			}
			let mut values = T::default();
			for (field, value) in watched_values.iter() {
				values.set_value(*field, (*value.get()).clone());
			}
			errors.set(values.validate(locale));
		});

		Self {
			bindings,
			defaults,
			locale,
			errors,
			submit_count,
			is_submitting,
			submit_error,
		}
	}

	/// Gets the binding for a field. Every call for the same field returns the same signals.
	///
	/// # Panics
	///
	/// Panics if the field isn't listed in the form's [`FormData::FIELDS`].
	pub fn register(&self, field: T::Field) -> FieldBinding<'a> {
		self.bindings[&field]
	}

	/// Collects the current value of every field
	pub fn values(&self) -> T {
		let mut values = self.defaults.clone();
		for (field, binding) in self.bindings.iter() {
			values.set_value(*field, (*binding.value.get_untracked()).clone());
		}
		values
	}

	pub fn locale(&self) -> Locale {
		self.locale
	}

	pub fn errors(&self) -> &'a ReadSignal<FieldErrors<T::Field>> {
		self.errors
	}

	pub fn is_submitting(&self) -> &'a ReadSignal<bool> {
		self.is_submitting
	}

	pub fn submit_count(&self) -> &'a ReadSignal<u32> {
		self.submit_count
	}

	/// The message from the last failed submission. Setting it to `None` dismisses it.
	pub fn submit_error(&self) -> &'a Signal<Option<String>> {
		self.submit_error
	}

	pub fn is_touched(&self, field: T::Field) -> bool {
		*self.register(field).touched.get()
	}

	/// Whether the field's value differs from the value the form started with
	pub fn is_dirty(&self, field: T::Field) -> bool {
		self.register(field).value.get().as_str() != self.defaults.value(field)
	}

	/// Validates the form and, if every field is valid, hands the values to `on_valid` and waits for it to finish.
	///
	/// The form is marked as submitting from the moment `on_valid` is called until its future finishes. While a
	/// submission is in flight, further calls return [`SubmitOutcome::AlreadySubmitting`] without doing anything.
	pub async fn submit<F, Fut>(&self, on_valid: F) -> SubmitOutcome
	where
		F: FnOnce(T) -> Fut,
		Fut: Future<Output = Result<(), SubmitError>>,
	{
		if *self.is_submitting.get_untracked() {
			log::warn!("Ignoring form submission while another submission is in progress");
			return SubmitOutcome::AlreadySubmitting;
		}

		self.submit_error.set(None);
		let values = self.values();
		let errors = values.validate(self.locale);
		let has_errors = !errors.is_empty();
		if has_errors {
			log::debug!("Form submission blocked by {} invalid field(s)", errors.len());
		}
		self.errors.set(errors);
		self.submit_count.set(*self.submit_count.get_untracked() + 1);
		if has_errors {
			return SubmitOutcome::Invalid;
		}

		self.is_submitting.set(true);
		let _submitting = SubmittingGuard(self.is_submitting);
		match on_valid(values).await {
			Ok(()) => SubmitOutcome::Submitted,
			Err(error) => {
				log::error!("Form submission failed: {}", error);
				self.submit_error.set(Some(error.to_string()));
				SubmitOutcome::Failed(error)
			}
		}
	}
}
