// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Failures reported by the action a form hands its validated values to
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SubmitError {
	#[error("The request was rejected: {reason}")]
	Rejected { reason: String },
}

/// How a call to [`FormState::submit`](super::FormState::submit) ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The values were valid and the submit action completed
	Submitted,
	/// At least one field failed validation; the submit action was not run
	Invalid,
	/// Another submission was still in flight, so this one was ignored
	AlreadySubmitting,
	/// The values were valid but the submit action reported an error
	Failed(SubmitError),
}
