/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Client-side persistence for WebCraft: accounts, the session pointer,
//! project documents and the editing sessions that write them.

pub mod accounts;
pub mod backend;
pub mod editing;
mod error;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
mod password;
pub mod projects;
pub mod records;
pub mod session;

pub use accounts::{Accounts, Registration};
pub use backend::{MemoryBackend, StorageBackend};
pub use editing::{CodeEditorState, CodeTab, SaveOutcome, VisualEditorState};
pub use error::{AuthError, ProjectError, Result, StoreError};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageBackend;
pub use projects::{ProjectRepository, ProjectSummary};
pub use records::{Collection, RecordStore};
pub use session::{Access, SessionManager, View};
