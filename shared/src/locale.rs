// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The languages the interface can be displayed in
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Locale {
	#[default]
	PtBr,
	En,
}

impl Locale {
	/// Gets the locale for a language tag (as reported by the browser, e.g. `pt-BR` or `en_US`). Only the primary
	/// language subtag is considered.
	pub fn from_tag(tag: &str) -> Option<Self> {
		let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
		match primary.as_str() {
			"pt" => Some(Self::PtBr),
			"en" => Some(Self::En),
			_ => None,
		}
	}

	pub fn tag(self) -> &'static str {
		match self {
			Self::PtBr => "pt-BR",
			Self::En => "en",
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.tag())
	}
}

/// A piece of user-facing text with a translation for each locale
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Message {
	pt_br: &'static str,
	en: &'static str,
}

impl Message {
	pub const fn new(pt_br: &'static str, en: &'static str) -> Self {
		Self { pt_br, en }
	}

	pub fn get(&self, locale: Locale) -> &'static str {
		match locale {
			Locale::PtBr => self.pt_br,
			Locale::En => self.en,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn tags_are_matched_by_primary_language() {
		assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::PtBr));
		assert_eq!(Locale::from_tag("pt"), Some(Locale::PtBr));
		assert_eq!(Locale::from_tag("PT_pt"), Some(Locale::PtBr));
		assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
		assert_eq!(Locale::from_tag("en"), Some(Locale::En));
	}

	#[test]
	fn unknown_tags_have_no_locale() {
		assert_eq!(Locale::from_tag("de-DE"), None);
		assert_eq!(Locale::from_tag(""), None);
	}

	#[test]
	fn messages_follow_locale() {
		let message = Message::new("Salvar", "Save");
		assert_eq!(message.get(Locale::PtBr), "Salvar");
		assert_eq!(message.get(Locale::En), "Save");
		assert_eq!(message.get(Locale::default()), "Salvar");
	}
}
