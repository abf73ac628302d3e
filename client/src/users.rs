// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::SubmitError;
use dashgo_shared::forms::create_user::CreateUserFormData;
use gloo_timers::future::TimeoutFuture;

/// Placeholder for the request that creates a user: waits for the given delay, then logs what would have been sent.
pub async fn create_user(values: CreateUserFormData, delay_ms: u32) -> Result<(), SubmitError> {
	TimeoutFuture::new(delay_ms).await;
	log::info!("Created user: {:?}", values);
	Ok(())
}
