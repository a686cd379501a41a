/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use webcraft_core::{Project, ProjectKind};

use crate::backend::StorageBackend;
use crate::records::RecordStore;
use crate::Result;

/// Pages of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Login { signup: bool },
    Dashboard,
    CodeEditor(String),
    VisualEditor(String),
    ProjectView(String),
}

impl View {
    pub fn is_public(&self) -> bool {
        matches!(self, View::Landing | View::Login { .. })
    }

    /// The editor page matching a project's kind.
    pub fn editor_for(project: &Project) -> Self {
        match project.kind {
            ProjectKind::Code => View::CodeEditor(project.id.clone()),
            ProjectKind::Visual => View::VisualEditor(project.id.clone()),
        }
    }
}

/// Outcome of gating a view against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The view may be shown; carries the active user if there is one.
    Granted(Option<String>),
    Redirect(View),
}

/// Tracks which user is active through the stored session pointer.
#[derive(Clone, Debug)]
pub struct SessionManager<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> SessionManager<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Result<Option<String>> {
        self.store.session_user()
    }

    pub fn sign_in(&self, username: &str) -> Result<()> {
        tracing::info!(username, "signed in");
        self.store.set_session_user(username)
    }

    pub fn sign_out(&self) -> Result<()> {
        tracing::info!("signed out");
        self.store.clear_session_user()
    }

    pub fn gate(&self, view: &View) -> Result<Access> {
        let user = self.current_user()?;
        if user.is_none() && !view.is_public() {
            tracing::debug!(?view, "no session, redirecting to login");
            return Ok(Access::Redirect(View::Login { signup: false }));
        }
        Ok(Access::Granted(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use webcraft_core::config::StorageConfig;

    fn sessions() -> SessionManager<MemoryBackend> {
        SessionManager::new(RecordStore::new(MemoryBackend::new(), StorageConfig::default()))
    }

    #[test]
    fn private_views_redirect_without_a_session() {
        let sessions = sessions();

        assert_eq!(sessions.gate(&View::Landing).unwrap(), Access::Granted(None));
        assert_eq!(sessions.gate(&View::Login { signup: true }).unwrap(), Access::Granted(None));
        assert_eq!(
            sessions.gate(&View::Dashboard).unwrap(),
            Access::Redirect(View::Login { signup: false })
        );
        assert_eq!(
            sessions.gate(&View::VisualEditor("site".into())).unwrap(),
            Access::Redirect(View::Login { signup: false })
        );
    }

    #[test]
    fn signed_in_users_pass_the_gate() {
        let sessions = sessions();
        sessions.sign_in("ana").unwrap();

        assert_eq!(
            sessions.gate(&View::Dashboard).unwrap(),
            Access::Granted(Some("ana".to_string()))
        );

        sessions.sign_out().unwrap();
        assert_eq!(sessions.current_user().unwrap(), None);
    }
}
