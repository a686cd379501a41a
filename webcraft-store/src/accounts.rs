/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use chrono::Utc;
use webcraft_core::User;

use crate::backend::StorageBackend;
use crate::password::{hash_password, verify_password};
use crate::records::{Collection, RecordStore};
use crate::session::SessionManager;
use crate::AuthError;

/// Input of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Registration and sign-in against the users collection.
#[derive(Clone, Debug)]
pub struct Accounts<B: StorageBackend> {
    store: RecordStore<B>,
    sessions: SessionManager<B>,
}

impl<B: StorageBackend> Accounts<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        let sessions = SessionManager::new(store.clone());
        Self { store, sessions }
    }

    pub fn sessions(&self) -> &SessionManager<B> {
        &self.sessions
    }

    /// Creates the account and signs it in.
    pub fn register(&self, form: &Registration) -> Result<User, AuthError> {
        let username = form.username.trim();
        let email = form.email.trim();

        if username.is_empty() || email.is_empty() || form.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if form.password != form.confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if self.store.contains(Collection::Users, username)? {
            return Err(AuthError::UsernameTaken);
        }

        let user = User {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(&form.password)?,
            created_at: Utc::now(),
        };
        self.store.put(Collection::Users, username, &user)?;
        tracing::info!(username, "account registered");

        self.sessions.sign_in(username)?;
        Ok(user)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user: User = self
            .store
            .get(Collection::Users, username)?
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!(username, "rejected sign-in");
            return Err(AuthError::IncorrectPassword);
        }

        self.sessions.sign_in(username)?;
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        Ok(self.sessions.sign_out()?)
    }

    pub fn user(&self, username: &str) -> Result<Option<User>, AuthError> {
        Ok(self.store.get(Collection::Users, username)?)
    }
}
