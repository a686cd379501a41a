/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use chrono::{DateTime, Utc};
use webcraft_core::config::SiteConfig;
use webcraft_core::{Project, ProjectKind};

use crate::backend::StorageBackend;
use crate::records::{Collection, RecordStore};
use crate::session::View;
use crate::ProjectError;

/// One dashboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub kind_label: &'static str,
    pub editor: View,
    pub view_url: String,
}

/// Project documents keyed by id, owned by a username.
#[derive(Clone, Debug)]
pub struct ProjectRepository<B: StorageBackend> {
    store: RecordStore<B>,
    site: SiteConfig,
}

impl<B: StorageBackend> ProjectRepository<B> {
    pub fn new(store: RecordStore<B>, site: SiteConfig) -> Self {
        Self { store, site }
    }

    pub fn create(&self, title: &str, kind: ProjectKind, owner: &str) -> Result<Project, ProjectError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ProjectError::EmptyTitle);
        }

        let project = Project::new(title, owner, kind, Utc::now());
        if project.id.is_empty() {
            return Err(ProjectError::EmptyId);
        }
        if self.store.contains(Collection::Projects, &project.id)? {
            return Err(ProjectError::DuplicateId(project.id));
        }

        self.store.put(Collection::Projects, &project.id, &project)?;
        tracing::info!(id = %project.id, owner, kind = ?kind, "project created");
        Ok(project)
    }

    /// The owner's projects, oldest first.
    pub fn list_for(&self, owner: &str) -> Result<Vec<Project>, ProjectError> {
        let mut projects: Vec<Project> = self.store.list_where(Collection::Projects, "owner", owner)?;
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }

    pub fn summaries(&self, owner: &str) -> Result<Vec<ProjectSummary>, ProjectError> {
        Ok(self
            .list_for(owner)?
            .into_iter()
            .map(|project| ProjectSummary {
                editor: View::editor_for(&project),
                view_url: self.view_url(&project.id),
                kind_label: project.kind.label(),
                created_at: project.created_at,
                title: project.title,
                id: project.id,
            })
            .collect())
    }

    /// Loads a project for editing. Someone else's project is reported the
    /// same way as a missing one.
    pub fn open(&self, id: &str, user: &str) -> Result<Project, ProjectError> {
        match self.store.get::<Project>(Collection::Projects, id)? {
            Some(project) if project.owner == user => Ok(project),
            Some(_) => {
                tracing::warn!(id, user, "refused to open a project owned by another user");
                Err(ProjectError::NotFound(id.to_string()))
            }
            None => Err(ProjectError::NotFound(id.to_string())),
        }
    }

    /// Loads a project for the public page, regardless of owner.
    pub fn view(&self, id: &str) -> Result<Project, ProjectError> {
        self.store
            .get(Collection::Projects, id)?
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))
    }

    /// The stored copy, if any, for comparing against before a write.
    pub fn stored(&self, id: &str) -> Result<Option<Project>, ProjectError> {
        Ok(self.store.get(Collection::Projects, id)?)
    }

    pub fn save(&self, project: &Project) -> Result<(), ProjectError> {
        if project.id.is_empty() {
            return Err(ProjectError::EmptyId);
        }
        self.store.put(Collection::Projects, &project.id, project)?;
        Ok(())
    }

    /// Deletes the owner's project. Without confirmation nothing happens and
    /// `Ok(false)` is returned.
    pub fn delete(&self, id: &str, owner: &str, confirmed: bool) -> Result<bool, ProjectError> {
        if !confirmed {
            tracing::debug!(id, "project deletion declined");
            return Ok(false);
        }
        self.open(id, owner)?;
        let removed = self.store.delete(Collection::Projects, id)?;
        if removed {
            tracing::info!(id, owner, "project deleted");
        }
        Ok(removed)
    }

    pub fn view_url(&self, id: &str) -> String {
        self.site.project_url(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use webcraft_core::config::StorageConfig;

    fn repo() -> ProjectRepository<MemoryBackend> {
        ProjectRepository::new(
            RecordStore::new(MemoryBackend::new(), StorageConfig::default()),
            SiteConfig::default(),
        )
    }

    #[test]
    fn create_derives_the_id_from_the_title() {
        let repo = repo();
        let project = repo.create("  My Cool Site!! ", ProjectKind::Visual, "ana").unwrap();

        assert_eq!(project.id, "my-cool-site");
        assert_eq!(project.title, "My Cool Site!!");
        assert_eq!(repo.open("my-cool-site", "ana").unwrap(), project);
    }

    #[test]
    fn create_validates_the_title() {
        let repo = repo();

        assert!(matches!(repo.create("   ", ProjectKind::Code, "ana"), Err(ProjectError::EmptyTitle)));
        assert!(matches!(repo.create("!!!", ProjectKind::Code, "ana"), Err(ProjectError::EmptyId)));
    }

    #[test]
    fn duplicate_ids_leave_the_existing_project_alone() {
        let repo = repo();
        let original = repo.create("Blog", ProjectKind::Code, "ana").unwrap();

        let err = repo.create("blog!", ProjectKind::Visual, "bo").unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateId(ref id) if id == "blog"));
        assert_eq!(repo.open("blog", "ana").unwrap(), original);
    }

    #[test]
    fn non_owners_get_not_found() {
        let repo = repo();
        repo.create("Blog", ProjectKind::Code, "ana").unwrap();

        let err = repo.open("blog", "bo").unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
        assert!(err.redirects());
        assert!(matches!(repo.open("nope", "ana"), Err(ProjectError::NotFound(_))));

        assert_eq!(repo.view("blog").unwrap().owner, "ana");
    }

    #[test]
    fn listing_is_owner_filtered_and_ordered() {
        let repo = repo();
        repo.create("First", ProjectKind::Code, "ana").unwrap();
        repo.create("Other", ProjectKind::Code, "bo").unwrap();
        repo.create("Second", ProjectKind::Visual, "ana").unwrap();

        let ids: Vec<String> = repo.list_for("ana").unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["first", "second"]);

        let summaries = repo.summaries("ana").unwrap();
        assert_eq!(summaries[1].kind_label, "Visual Editor");
        assert_eq!(summaries[1].editor, View::VisualEditor("second".to_string()));
        assert_eq!(summaries[0].view_url, "/websitebuilder/view.html?project=first");
    }

    #[test]
    fn a_malformed_project_only_affects_its_owner() {
        let repo = repo();
        repo.create("Mine", ProjectKind::Code, "ana").unwrap();

        let broken = Project::new("Broken", "bo", ProjectKind::Visual, Utc::now());
        let mut raw = serde_json::to_value(&broken).unwrap();
        raw["elements"] = serde_json::json!([{ "type": "marquee", "content": "" }]);
        repo.store.put(Collection::Projects, &broken.id, &raw).unwrap();

        let ids: Vec<String> = repo.list_for("ana").unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["mine"]);
        assert!(repo.list_for("bo").is_err());
    }

    #[test]
    fn delete_needs_confirmation_and_ownership() {
        let repo = repo();
        repo.create("Blog", ProjectKind::Code, "ana").unwrap();

        assert!(!repo.delete("blog", "ana", false).unwrap());
        assert!(repo.stored("blog").unwrap().is_some());

        assert!(matches!(repo.delete("blog", "bo", true), Err(ProjectError::NotFound(_))));
        assert!(repo.delete("blog", "ana", true).unwrap());
        assert!(repo.stored("blog").unwrap().is_none());
    }
}
