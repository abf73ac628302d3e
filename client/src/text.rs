// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interface text that isn't tied to a form field

use dashgo_shared::locale::Message;

pub const APP_NAME: &str = "dashgo";

pub const NAV_GENERAL: Message = Message::new("GERAL", "GENERAL");
pub const NAV_USERS: Message = Message::new("Usuários", "Users");
pub const NAV_CREATE_USER: Message = Message::new("Criar usuário", "Create user");

pub const USERS_HEADING: Message = Message::new("Usuários", "Users");
pub const USERS_EMPTY: Message = Message::new("Nenhum usuário cadastrado ainda.", "No users have been created yet.");
pub const CREATE_NEW: Message = Message::new("Criar novo", "Create new");

pub const CREATE_USER_HEADING: Message = Message::new("Criar usuário", "Create user");
pub const CANCEL: Message = Message::new("Cancelar", "Cancel");
pub const SAVE: Message = Message::new("Salvar", "Save");
pub const SAVING: Message = Message::new("Salvando...", "Saving...");

pub const NOT_FOUND_HEADING: Message = Message::new("Página não encontrada!", "Not found!");
pub const NOT_FOUND_BODY: Message = Message::new(
	"Não sei como você chegou até aqui, mas esta página não existe.",
	"I'm not sure how you found this link or navigated to this page, but it's certainly not a real place.",
);
pub const NOT_FOUND_RETURN: Message = Message::new("Voltar para a página inicial?", "Return to the main page?");
