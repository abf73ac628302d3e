// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::locale::{Locale, Message};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

pub mod create_user;
pub mod rules;

use rules::ValidationError;

/// Identifies one field of a form
pub trait FormField: Copy + Debug + Eq + Hash + Ord + 'static {
	/// The name of the field as used in form markup and serialized data
	fn name(self) -> &'static str;

	/// The user-facing label for the field
	fn label(self, locale: Locale) -> &'static str;
}

/// The full set of values a form collects
pub trait FormData: Clone + Default + 'static {
	type Field: FormField;

	/// Every field of the form, in display order
	const FIELDS: &'static [Self::Field];

	fn value(&self, field: Self::Field) -> &str;

	fn set_value(&mut self, field: Self::Field, value: String);

	/// Runs the form's schema against these values
	fn validate(&self, locale: Locale) -> FieldErrors<Self::Field>;
}

/// A single rule failure for one field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation<F> {
	pub field: F,
	pub error: ValidationError,
	pub message: String,
}

/// The violations found during one validation pass, at most one per field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldErrors<F: Ord> {
	violations: BTreeMap<F, Violation<F>>,
}

impl<F: Ord + Copy> FieldErrors<F> {
	pub fn new() -> Self {
		Self {
			violations: BTreeMap::new(),
		}
	}

	/// Records a violation. A field keeps the first violation recorded for it.
	pub fn insert(&mut self, violation: Violation<F>) {
		self.violations.entry(violation.field).or_insert(violation);
	}

	pub fn is_empty(&self) -> bool {
		self.violations.is_empty()
	}

	pub fn len(&self) -> usize {
		self.violations.len()
	}

	pub fn get(&self, field: F) -> Option<&Violation<F>> {
		self.violations.get(&field)
	}

	pub fn message(&self, field: F) -> Option<&str> {
		self.get(field).map(|violation| violation.message.as_str())
	}

	pub fn error(&self, field: F) -> Option<ValidationError> {
		self.get(field).map(|violation| violation.error)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Violation<F>> {
		self.violations.values()
	}
}

impl<F: Ord + Copy> Default for FieldErrors<F> {
	fn default() -> Self {
		Self::new()
	}
}

/// Signature of a rule check. Checks receive the whole form so that rules can compare fields with each other.
pub type RuleCheck<T> = fn(&T, &str) -> Result<(), ValidationError>;

/// A check together with the message shown when it fails
pub struct FieldRule<T> {
	check: RuleCheck<T>,
	message: Message,
}

impl<T> FieldRule<T> {
	pub const fn new(check: RuleCheck<T>, message: Message) -> Self {
		Self { check, message }
	}
}

/// Declarative validation for a form: an ordered list of rules for each field.
///
/// Fields are validated independently of one another. Within a field, rules run in order and the first failing rule
/// determines the field's violation.
pub struct Schema<T: FormData> {
	fields: &'static [(T::Field, &'static [FieldRule<T>])],
}

impl<T: FormData> Schema<T> {
	pub const fn new(fields: &'static [(T::Field, &'static [FieldRule<T>])]) -> Self {
		Self { fields }
	}

	pub fn validate(&self, values: &T, locale: Locale) -> FieldErrors<T::Field> {
		let mut errors = FieldErrors::new();
		for (field, rules) in self.fields.iter() {
			let value = values.value(*field);
			let violation = rules.iter().find_map(|rule| {
				(rule.check)(values, value).err().map(|error| Violation {
					field: *field,
					error,
					message: String::from(rule.message.get(locale)),
				})
			});
			if let Some(violation) = violation {
				errors.insert(violation);
			}
		}
		errors
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
	enum NoteField {
		Title,
		Body,
	}

	impl FormField for NoteField {
		fn name(self) -> &'static str {
			match self {
				Self::Title => "title",
				Self::Body => "body",
			}
		}

		fn label(self, _locale: Locale) -> &'static str {
			self.name()
		}
	}

	#[derive(Clone, Default)]
	struct Note {
		title: String,
		body: String,
	}

	fn title_required(_: &Note, value: &str) -> Result<(), ValidationError> {
		rules::required(value)
	}

	fn title_long_enough(_: &Note, value: &str) -> Result<(), ValidationError> {
		rules::min_length(value, 3)
	}

	fn body_differs_from_title(note: &Note, value: &str) -> Result<(), ValidationError> {
		match rules::equals(value, &note.title) {
			Ok(()) => Err(ValidationError::Mismatch),
			Err(_) => Ok(()),
		}
	}

	const TITLE_RULES: &[FieldRule<Note>] = &[
		FieldRule::new(title_required, Message::new("Título obrigatório", "Title is required")),
		FieldRule::new(title_long_enough, Message::new("Título curto", "Title too short")),
	];
	const BODY_RULES: &[FieldRule<Note>] = &[FieldRule::new(
		body_differs_from_title,
		Message::new("Repetido", "Repeated"),
	)];
	static NOTE_SCHEMA: Schema<Note> = Schema::new(&[(NoteField::Title, TITLE_RULES), (NoteField::Body, BODY_RULES)]);

	impl FormData for Note {
		type Field = NoteField;

		const FIELDS: &'static [NoteField] = &[NoteField::Title, NoteField::Body];

		fn value(&self, field: NoteField) -> &str {
			match field {
				NoteField::Title => &self.title,
				NoteField::Body => &self.body,
			}
		}

		fn set_value(&mut self, field: NoteField, value: String) {
			match field {
				NoteField::Title => self.title = value,
				NoteField::Body => self.body = value,
			}
		}

		fn validate(&self, locale: Locale) -> FieldErrors<NoteField> {
			NOTE_SCHEMA.validate(self, locale)
		}
	}

	#[test]
	fn first_failing_rule_wins() {
		let note = Note::default();
		let errors = note.validate(Locale::En);
		assert_eq!(errors.error(NoteField::Title), Some(ValidationError::Required));
		assert_eq!(errors.message(NoteField::Title), Some("Title is required"));
	}

	#[test]
	fn later_rules_apply_once_earlier_ones_pass() {
		let mut note = Note::default();
		note.set_value(NoteField::Title, String::from("ab"));
		note.set_value(NoteField::Body, String::from("something else"));
		let errors = note.validate(Locale::PtBr);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.message(NoteField::Title), Some("Título curto"));
	}

	#[test]
	fn rules_can_read_other_fields() {
		let mut note = Note::default();
		note.set_value(NoteField::Title, String::from("Groceries"));
		note.set_value(NoteField::Body, String::from("Groceries"));
		let errors = note.validate(Locale::En);
		let fields: Vec<NoteField> = errors.iter().map(|violation| violation.field).collect();
		assert_eq!(fields, vec![NoteField::Body]);
	}

	#[test]
	fn insert_keeps_first_violation_per_field() {
		let mut errors = FieldErrors::new();
		errors.insert(Violation {
			field: NoteField::Title,
			error: ValidationError::Required,
			message: String::from("first"),
		});
		errors.insert(Violation {
			field: NoteField::Title,
			error: ValidationError::Format,
			message: String::from("second"),
		});
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.message(NoteField::Title), Some("first"));
	}
}
