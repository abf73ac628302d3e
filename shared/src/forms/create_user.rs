// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::rules::{self, ValidationError};
use super::{FieldErrors, FieldRule, FormData, FormField, Schema};
use crate::locale::{Locale, Message};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Data entered into the user creation form
#[derive(Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CreateUserFormData {
	pub name: String,
	pub email: String,
	pub password: String,
	pub password_confirmation: String,
}

impl fmt::Debug for CreateUserFormData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CreateUserFormData")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.field("password_confirmation", &"<redacted>")
			.finish()
	}
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CreateUserField {
	Name,
	Email,
	Password,
	PasswordConfirmation,
}

impl FormField for CreateUserField {
	fn name(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::PasswordConfirmation => "password_confirmation",
		}
	}

	fn label(self, locale: Locale) -> &'static str {
		let label = match self {
			Self::Name => Message::new("Nome completo", "Full name"),
			Self::Email => Message::new("E-mail", "Email"),
			Self::Password => Message::new("Senha", "Password"),
			Self::PasswordConfirmation => Message::new("Confirmação da senha", "Password confirmation"),
		};
		label.get(locale)
	}
}

impl fmt::Display for CreateUserField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

fn check_required(_: &CreateUserFormData, value: &str) -> Result<(), ValidationError> {
	rules::required(value)
}

fn check_email(_: &CreateUserFormData, value: &str) -> Result<(), ValidationError> {
	rules::email(value)
}

fn check_password_length(_: &CreateUserFormData, value: &str) -> Result<(), ValidationError> {
	rules::min_length(value, PASSWORD_MIN_LENGTH)
}

fn check_matches_password(form: &CreateUserFormData, value: &str) -> Result<(), ValidationError> {
	rules::equals(value, &form.password)
}

const NAME_RULES: &[FieldRule<CreateUserFormData>] = &[FieldRule::new(
	check_required,
	Message::new("Nome obrigatório", "Name is required"),
)];

const EMAIL_RULES: &[FieldRule<CreateUserFormData>] = &[
	FieldRule::new(check_required, Message::new("E-mail obrigatório", "Email is required")),
	FieldRule::new(check_email, Message::new("E-mail inválido", "Invalid email")),
];

const PASSWORD_RULES: &[FieldRule<CreateUserFormData>] = &[
	FieldRule::new(check_required, Message::new("Senha obrigatória", "Password is required")),
	FieldRule::new(
		check_password_length,
		Message::new("No mínimo 6 caracteres", "At least 6 characters"),
	),
];

// An empty confirmation is only a mismatch when a password was entered.
const PASSWORD_CONFIRMATION_RULES: &[FieldRule<CreateUserFormData>] = &[FieldRule::new(
	check_matches_password,
	Message::new("As senhas precisam ser iguais", "Passwords must match"),
)];

static CREATE_USER_SCHEMA: Schema<CreateUserFormData> = Schema::new(&[
	(CreateUserField::Name, NAME_RULES),
	(CreateUserField::Email, EMAIL_RULES),
	(CreateUserField::Password, PASSWORD_RULES),
	(CreateUserField::PasswordConfirmation, PASSWORD_CONFIRMATION_RULES),
]);

impl FormData for CreateUserFormData {
	type Field = CreateUserField;

	const FIELDS: &'static [CreateUserField] = &[
		CreateUserField::Name,
		CreateUserField::Email,
		CreateUserField::Password,
		CreateUserField::PasswordConfirmation,
	];

	fn value(&self, field: CreateUserField) -> &str {
		match field {
			CreateUserField::Name => &self.name,
			CreateUserField::Email => &self.email,
			CreateUserField::Password => &self.password,
			CreateUserField::PasswordConfirmation => &self.password_confirmation,
		}
	}

	fn set_value(&mut self, field: CreateUserField, value: String) {
		match field {
			CreateUserField::Name => self.name = value,
			CreateUserField::Email => self.email = value,
			CreateUserField::Password => self.password = value,
			CreateUserField::PasswordConfirmation => self.password_confirmation = value,
		}
	}

	fn validate(&self, locale: Locale) -> FieldErrors<CreateUserField> {
		CREATE_USER_SCHEMA.validate(self, locale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn valid_form() -> CreateUserFormData {
		CreateUserFormData {
			name: String::from("Ana"),
			email: String::from("ana@example.com"),
			password: String::from("secret1"),
			password_confirmation: String::from("secret1"),
		}
	}

	#[test]
	fn valid_form_has_no_errors() {
		assert!(valid_form().validate(Locale::PtBr).is_empty());
	}

	#[test]
	fn messages_are_localized() {
		let form = CreateUserFormData::default();
		let errors = form.validate(Locale::PtBr);
		assert_eq!(errors.message(CreateUserField::Name), Some("Nome obrigatório"));
		assert_eq!(errors.message(CreateUserField::Email), Some("E-mail obrigatório"));
		assert_eq!(errors.message(CreateUserField::Password), Some("Senha obrigatória"));

		let errors = form.validate(Locale::En);
		assert_eq!(errors.message(CreateUserField::Name), Some("Name is required"));
		assert_eq!(errors.message(CreateUserField::Password), Some("Password is required"));
	}

	#[test]
	fn empty_confirmation_with_empty_password_is_not_a_mismatch() {
		let form = CreateUserFormData {
			password: String::new(),
			password_confirmation: String::new(),
			..valid_form()
		};
		let errors = form.validate(Locale::En);
		assert_eq!(errors.error(CreateUserField::Password), Some(ValidationError::Required));
		assert_eq!(errors.get(CreateUserField::PasswordConfirmation), None);
	}

	#[test]
	fn empty_confirmation_with_password_is_a_mismatch() {
		let form = CreateUserFormData {
			password_confirmation: String::new(),
			..valid_form()
		};
		let errors = form.validate(Locale::En);
		assert_eq!(errors.len(), 1);
		assert_eq!(
			errors.error(CreateUserField::PasswordConfirmation),
			Some(ValidationError::Mismatch)
		);
		assert_eq!(
			errors.message(CreateUserField::PasswordConfirmation),
			Some("Passwords must match")
		);
	}

	#[test]
	fn short_password_fails_before_confirmation_is_compared() {
		let form = CreateUserFormData {
			password: String::from("12345"),
			password_confirmation: String::from("12345"),
			..valid_form()
		};
		let errors = form.validate(Locale::En);
		assert_eq!(
			errors.error(CreateUserField::Password),
			Some(ValidationError::Length {
				min: PASSWORD_MIN_LENGTH
			})
		);
		assert_eq!(errors.get(CreateUserField::PasswordConfirmation), None);
	}

	#[test]
	fn fields_round_trip_through_setters() {
		let mut form = CreateUserFormData::default();
		for field in CreateUserFormData::FIELDS {
			form.set_value(*field, field.name().to_uppercase());
		}
		assert_eq!(form.value(CreateUserField::Name), "NAME");
		assert_eq!(form.password_confirmation, "PASSWORD_CONFIRMATION");
	}

	#[test]
	fn debug_output_hides_passwords() {
		let debug = format!("{:?}", valid_form());
		assert!(debug.contains("ana@example.com"));
		assert!(!debug.contains("secret1"));
	}

	#[test]
	fn serialized_keys_match_field_names() {
		let json = serde_json::to_value(valid_form()).unwrap();
		for field in CreateUserFormData::FIELDS {
			assert_eq!(json[field.name()].as_str(), Some(valid_form().value(*field)));
		}
	}

	#[test]
	fn missing_fields_deserialize_as_empty() {
		let form: CreateUserFormData = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
		assert_eq!(form.name, "Ana");
		assert_eq!(form.password_confirmation, "");
	}

	#[test]
	fn labels_follow_locale() {
		assert_eq!(CreateUserField::Name.label(Locale::PtBr), "Nome completo");
		assert_eq!(
			CreateUserField::PasswordConfirmation.label(Locale::En),
			"Password confirmation"
		);
	}
}
