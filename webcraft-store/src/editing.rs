/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Editing sessions over one open project.
//!
//! A session owns the project document and, for visual projects, the live
//! [`Canvas`]. Every mutation that changes the canvas saves right away.
//! Saving projects the canvas through [`generate`] and writes the document;
//! `lastModified` only moves when the projected content differs from the
//! stored copy.

use chrono::Utc;
use webcraft_core::properties::{self, FormField};
use webcraft_core::{
    generate, Canvas, Element, ElementKind, GeneratedCode, PreviewDocument, Project, PropertyPanel,
};

use crate::backend::StorageBackend;
use crate::projects::ProjectRepository;
use crate::ProjectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing changed; the stored document was rewritten as it was.
    Unchanged,
}

/// Writes `project`, keeping the stored timestamp when nothing else moved.
fn persist<B: StorageBackend>(
    repo: &ProjectRepository<B>,
    project: &mut Project,
) -> Result<SaveOutcome, ProjectError> {
    let outcome = match repo.stored(&project.id)? {
        Some(stored) if stored.same_content(project) => {
            project.last_modified = stored.last_modified;
            SaveOutcome::Unchanged
        }
        _ => {
            project.last_modified = Utc::now();
            SaveOutcome::Saved
        }
    };
    repo.save(project)?;
    tracing::debug!(id = %project.id, ?outcome, "project saved");
    Ok(outcome)
}

/// The open visual project and its canvas.
#[derive(Debug)]
pub struct VisualEditorState<B: StorageBackend> {
    repo: ProjectRepository<B>,
    project: Project,
    canvas: Canvas,
}

impl<B: StorageBackend> VisualEditorState<B> {
    /// Opens `id` for `user` and hydrates the canvas from the stored elements.
    pub fn open(repo: ProjectRepository<B>, id: &str, user: &str) -> Result<Self, ProjectError> {
        let project = repo.open(id, user)?;
        let mut canvas = Canvas::new();
        canvas.hydrate(project.elements.clone());
        Ok(Self { repo, project, canvas })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn add_element(&mut self, kind: ElementKind) -> Result<usize, ProjectError> {
        let index = self.canvas.append(kind);
        self.save()?;
        Ok(index)
    }

    /// Selection is view state only and is never saved.
    pub fn select(&mut self, index: usize) -> bool {
        self.canvas.select(index)
    }

    pub fn deselect(&mut self) {
        self.canvas.deselect();
    }

    pub fn move_up(&mut self, index: usize) -> Result<bool, ProjectError> {
        let moved = self.canvas.move_up(index);
        if moved {
            self.save()?;
        }
        Ok(moved)
    }

    pub fn move_down(&mut self, index: usize) -> Result<bool, ProjectError> {
        let moved = self.canvas.move_down(index);
        if moved {
            self.save()?;
        }
        Ok(moved)
    }

    /// Removes an element once the user confirmed; declining changes nothing.
    pub fn delete_element(&mut self, index: usize, confirmed: bool) -> Result<Option<Element>, ProjectError> {
        if !confirmed {
            return Ok(None);
        }
        let removed = self.canvas.delete(index);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    /// Applies one field of the properties form to the selected element.
    /// Invalid numeric input leaves the element untouched.
    pub fn edit_property(&mut self, field: FormField, raw: &str) -> Result<bool, ProjectError> {
        let changed = properties::commit(&mut self.canvas, field, raw)?;
        if changed {
            self.save()?;
        }
        Ok(changed)
    }

    pub fn set_content(&mut self, index: usize, text: &str) -> Result<bool, ProjectError> {
        let changed = self.canvas.get(index).is_some_and(|el| el.content != text)
            && self.canvas.set_content(index, text);
        if changed {
            self.save()?;
        }
        Ok(changed)
    }

    pub fn panel(&self) -> PropertyPanel {
        PropertyPanel::for_canvas(&self.canvas)
    }

    pub fn generate(&self) -> GeneratedCode {
        generate(self.canvas.elements())
    }

    pub fn preview_document(&self) -> PreviewDocument {
        PreviewDocument::visual(&self.project.title, &self.generate())
    }

    /// Shared by the save button and the autosave timer. Safe to call at any
    /// point, including on an empty canvas.
    pub fn save(&mut self) -> Result<SaveOutcome, ProjectError> {
        let code = self.generate();
        self.project.elements = self.canvas.elements().to_vec();
        self.project.html = code.html;
        self.project.css = code.css;
        persist(&self.repo, &mut self.project)
    }
}

/// Which text the code editor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    Html,
    Css,
    Js,
}

impl CodeTab {
    pub const ALL: [CodeTab; 3] = [CodeTab::Html, CodeTab::Css, CodeTab::Js];

    pub fn label(self) -> &'static str {
        match self {
            CodeTab::Html => "HTML",
            CodeTab::Css => "CSS",
            CodeTab::Js => "JavaScript",
        }
    }
}

/// The open code project. Text edits stay in memory until saved.
#[derive(Debug)]
pub struct CodeEditorState<B: StorageBackend> {
    repo: ProjectRepository<B>,
    project: Project,
}

impl<B: StorageBackend> CodeEditorState<B> {
    pub fn open(repo: ProjectRepository<B>, id: &str, user: &str) -> Result<Self, ProjectError> {
        let project = repo.open(id, user)?;
        Ok(Self { repo, project })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn text(&self, tab: CodeTab) -> &str {
        match tab {
            CodeTab::Html => &self.project.html,
            CodeTab::Css => &self.project.css,
            CodeTab::Js => &self.project.js,
        }
    }

    pub fn set_text(&mut self, tab: CodeTab, text: impl Into<String>) {
        let text = text.into();
        match tab {
            CodeTab::Html => self.project.html = text,
            CodeTab::Css => self.project.css = text,
            CodeTab::Js => self.project.js = text,
        }
    }

    pub fn save(&mut self) -> Result<SaveOutcome, ProjectError> {
        persist(&self.repo, &mut self.project)
    }

    pub fn preview_document(&self) -> PreviewDocument {
        PreviewDocument::authored(&self.project.title, &self.project.html, &self.project.css, &self.project.js)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::records::RecordStore;
    use webcraft_core::config::{SiteConfig, StorageConfig};
    use webcraft_core::ProjectKind;

    fn setup(kind: ProjectKind) -> (MemoryBackend, ProjectRepository<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let repo = ProjectRepository::new(
            RecordStore::new(backend.clone(), StorageConfig::default()),
            SiteConfig::default(),
        );
        repo.create("Site", kind, "ana").unwrap();
        (backend, repo)
    }

    fn stored_raw(backend: &MemoryBackend) -> String {
        backend.read("webcraft_projects").unwrap().unwrap()
    }

    #[test]
    fn saving_twice_without_changes_is_idempotent() {
        let (backend, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo, "site", "ana").unwrap();

        assert_eq!(editor.save().unwrap(), SaveOutcome::Saved);
        let first = stored_raw(&backend);
        assert_eq!(editor.save().unwrap(), SaveOutcome::Unchanged);
        assert_eq!(stored_raw(&backend), first);
    }

    #[test]
    fn mutations_are_saved_immediately() {
        let (_, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo.clone(), "site", "ana").unwrap();

        let index = editor.add_element(ElementKind::Button).unwrap();
        assert_eq!(index, 2);
        assert_eq!(editor.canvas().selected(), Some(2));

        let stored = repo.open("site", "ana").unwrap();
        assert_eq!(stored.elements.len(), 3);
        assert!(stored.html.contains("<div id=\"element-2\">"));
        assert_eq!(stored.elements, editor.canvas().elements());
    }

    #[test]
    fn order_survives_moves_and_deletes() {
        let (_, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo.clone(), "site", "ana").unwrap();
        editor.add_element(ElementKind::Image).unwrap();

        assert!(editor.move_up(2).unwrap());
        assert!(!editor.move_up(0).unwrap());
        assert!(!editor.move_down(2).unwrap());
        assert_eq!(editor.canvas().selected(), Some(1));

        let kinds: Vec<ElementKind> = repo.open("site", "ana").unwrap().elements.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ElementKind::Header, ElementKind::Image, ElementKind::Text]);
        assert!(editor.generate().html.contains("<img id=\"element-1\""));

        assert!(editor.delete_element(1, false).unwrap().is_none());
        assert_eq!(editor.canvas().len(), 3);

        let removed = editor.delete_element(1, true).unwrap().unwrap();
        assert_eq!(removed.kind, ElementKind::Image);
        assert_eq!(editor.canvas().selected(), None);
        assert_eq!(repo.open("site", "ana").unwrap().elements.len(), 2);
    }

    #[test]
    fn content_edits_are_saved_and_regenerated() {
        let (_, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo.clone(), "site", "ana").unwrap();

        assert!(editor.set_content(1, "Fresh copy").unwrap());
        assert!(!editor.set_content(1, "Fresh copy").unwrap());
        assert!(!editor.set_content(7, "nowhere").unwrap());

        let stored = repo.open("site", "ana").unwrap();
        assert_eq!(stored.elements[1].content, "Fresh copy");
        assert_eq!(stored.elements[0].content, "Welcome to my website!");
        assert!(stored.html.contains(r#"<p id="element-1">Fresh copy</p>"#));
    }

    #[test]
    fn property_edits_are_validated_and_saved() {
        let (_, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo.clone(), "site", "ana").unwrap();

        assert!(matches!(editor.panel(), PropertyPanel::NoSelection));
        editor.select(0);

        assert!(editor.edit_property(FormField::FontSize, "abc").is_err());
        assert_eq!(editor.canvas().get(0).unwrap().properties.font_size, Some(32));

        assert!(editor.edit_property(FormField::FontSize, "40").unwrap());
        assert!(!editor.edit_property(FormField::Width, "10").unwrap());

        let stored = repo.open("site", "ana").unwrap();
        assert_eq!(stored.elements[0].properties.font_size, Some(40));
        assert!(stored.css.contains("font-size: 40px;"));
    }

    #[test]
    fn an_empty_canvas_saves_empty_code() {
        let (_, repo) = setup(ProjectKind::Visual);
        let mut editor = VisualEditorState::open(repo.clone(), "site", "ana").unwrap();
        editor.delete_element(0, true).unwrap();
        editor.delete_element(0, true).unwrap();

        editor.save().unwrap();
        let stored = repo.open("site", "ana").unwrap();
        assert!(stored.elements.is_empty());
        assert!(stored.html.is_empty());
        assert!(stored.css.is_empty());
    }

    #[test]
    fn other_users_cannot_open_an_editor() {
        let (_, repo) = setup(ProjectKind::Visual);

        assert!(matches!(
            VisualEditorState::open(repo.clone(), "site", "bo"),
            Err(ProjectError::NotFound(_))
        ));
        assert!(matches!(CodeEditorState::open(repo, "missing", "ana"), Err(ProjectError::NotFound(_))));
    }

    #[test]
    fn code_editor_saves_text_and_previews_script() {
        let (_, repo) = setup(ProjectKind::Code);
        let mut editor = CodeEditorState::open(repo.clone(), "site", "ana").unwrap();

        assert!(editor.preview_document().script.is_none());
        editor.set_text(CodeTab::Js, "console.log('hi');");
        assert_eq!(editor.text(CodeTab::Js), "console.log('hi');");
        assert_eq!(editor.save().unwrap(), SaveOutcome::Saved);
        assert_eq!(editor.save().unwrap(), SaveOutcome::Unchanged);

        assert_eq!(repo.open("site", "ana").unwrap().js, "console.log('hi');");
        assert!(editor.preview_document().render().contains("<script>console.log('hi');</script>"));
    }
}
