// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-value checks used to build form schemas.
//!
//! Apart from [`required`] and [`equals`], every rule accepts an empty value; whether a field must be filled in is
//! decided by putting [`required`] ahead of the other rules for that field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// The HTML living standard's pattern for a valid email address
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
	)
	.expect("Email pattern is a valid regular expression")
});

/// The kinds of rule failures a field value can have
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
	#[error("a value is required")]
	Required,
	#[error("the value is not in a valid format")]
	Format,
	#[error("the value must be at least {min} characters long")]
	Length { min: usize },
	#[error("the value does not match the value it must equal")]
	Mismatch,
}

pub fn required(value: &str) -> Result<(), ValidationError> {
	if value.is_empty() {
		Err(ValidationError::Required)
	} else {
		Ok(())
	}
}

pub fn email(value: &str) -> Result<(), ValidationError> {
	if value.is_empty() || EMAIL_PATTERN.is_match(value) {
		Ok(())
	} else {
		Err(ValidationError::Format)
	}
}

/// Checks the length of the value in characters rather than bytes
pub fn min_length(value: &str, min: usize) -> Result<(), ValidationError> {
	if value.is_empty() || value.chars().count() >= min {
		Ok(())
	} else {
		Err(ValidationError::Length { min })
	}
}

pub fn equals(value: &str, other: &str) -> Result<(), ValidationError> {
	if value == other {
		Ok(())
	} else {
		Err(ValidationError::Mismatch)
	}
}
