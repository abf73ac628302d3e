// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod create;
pub mod list;

pub const USERS_PATH: &str = "/users";
pub const CREATE_USER_PATH: &str = "/users/create";
