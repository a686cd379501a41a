/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Backend(String),

    #[error("Corrupt record data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of registration, sign-in and view gating.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Username already taken.")]
    UsernameTaken,

    #[error("Username not found.")]
    UnknownUser,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Please enter a project name.")]
    EmptyTitle,

    #[error("A project name needs at least one letter or digit.")]
    EmptyId,

    #[error("A project with a similar name already exists. Please choose a different name.")]
    DuplicateId(String),

    // Also used when the project exists but belongs to someone else.
    #[error("Project not found or you do not have permission to edit it.")]
    NotFound(String),

    #[error(transparent)]
    Core(#[from] webcraft_core::CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ProjectError {
    /// Whether the caller should send the user back to the dashboard.
    pub fn redirects(&self) -> bool {
        matches!(self, ProjectError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
