/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use dioxus::prelude::*;
use webcraft_core::ProjectKind;
use webcraft_store::{ProjectError, ProjectSummary, View};

use crate::{alert, confirm, navigate_later, use_navigator, use_services, AppHeader};

const OPEN_EDITOR_DELAY_MS: u32 = 500;

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let view = use_navigator();
    let mut show_new = use_signal(|| false);
    // Bumped after a create or delete so the list is read again.
    let mut revision = use_signal(|| 0u32);

    let Some(user) = services.current_user() else {
        return rsx! {};
    };

    let _ = revision();
    let summaries: Vec<ProjectSummary> = match services.projects().summaries(&user) {
        Ok(list) => list,
        Err(err) => {
            tracing::error!(%err, "could not list projects");
            Vec::new()
        }
    };

    rsx! {
        div {
            class: "dashboard",
            AppHeader {
                username: user.clone(),
                button {
                    class: "primary-btn",
                    onclick: move |_| show_new.set(true),
                    "+ New Project"
                }
            }
            main {
                class: "project-list",
                h2 { "My Projects" }
                if summaries.is_empty() {
                    div {
                        class: "empty-state",
                        p { "You don't have any projects yet." }
                        button {
                            class: "primary-btn",
                            onclick: move |_| show_new.set(true),
                            "Create your first project"
                        }
                    }
                }
                for summary in summaries {
                    ProjectCard {
                        key: "{summary.id}",
                        summary: summary.clone(),
                        owner: user.clone(),
                        on_deleted: move |_| revision += 1,
                    }
                }
            }
            if show_new() {
                NewProjectModal {
                    owner: user.clone(),
                    on_close: move |_| show_new.set(false),
                    on_created: move |target: View| {
                        show_new.set(false);
                        revision += 1;
                        navigate_later(view, target, OPEN_EDITOR_DELAY_MS);
                    },
                }
            }
        }
    }
}

#[component]
fn ProjectCard(summary: ProjectSummary, owner: String, on_deleted: EventHandler<()>) -> Element {
    let services = use_services();
    let mut view = use_navigator();
    let created = summary.created_at.format("%Y-%m-%d").to_string();
    let editor = summary.editor.clone();
    let public = View::ProjectView(summary.id.clone());
    let id = summary.id.clone();
    let title = summary.title.clone();

    rsx! {
        div {
            class: "project-card",
            h3 { class: "project-title", "{summary.title}" }
            p { class: "project-date", "Created: {created}" }
            span { class: "project-type", "{summary.kind_label}" }
            code { class: "project-url", "{summary.view_url}" }
            div {
                class: "project-actions",
                button {
                    class: "action-btn btn-edit",
                    onclick: move |_| view.set(editor.clone()),
                    "Edit"
                }
                button {
                    class: "action-btn btn-view",
                    onclick: move |_| view.set(public.clone()),
                    "View"
                }
                button {
                    class: "action-btn danger",
                    onclick: move |_| {
                        let services = services.clone();
                        let id = id.clone();
                        let owner = owner.clone();
                        let title = title.clone();
                        let question = format!("Are you sure you want to delete \"{title}\"? This cannot be undone.");
                        async move {
                            let confirmed = confirm(&question).await;
                            match services.projects().delete(&id, &owner, confirmed) {
                                Ok(true) => on_deleted.call(()),
                                Ok(false) => {}
                                Err(err) => {
                                    tracing::warn!(%err, id = %id, "delete failed");
                                    alert(&delete_failed_message(&title, &err));
                                }
                            }
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}

fn delete_failed_message(title: &str, err: &ProjectError) -> String {
    format!("Could not delete \"{title}\": {err}")
}

#[component]
fn NewProjectModal(owner: String, on_close: EventHandler<()>, on_created: EventHandler<View>) -> Element {
    let services = use_services();
    let mut name = use_signal(String::new);
    let mut kind = use_signal(|| ProjectKind::Code);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "Create New Project" }
                    button {
                        class: "icon-btn",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        match services.projects().create(&name(), kind(), &owner) {
                            Ok(project) => on_created.call(View::editor_for(&project)),
                            Err(err) => error.set(Some(err.to_string())),
                        }
                    },
                    div {
                        class: "control-group",
                        label { "Project Name" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "control-group",
                        label { "Editor" }
                        for choice in [ProjectKind::Code, ProjectKind::Visual] {
                            label {
                                class: "radio-option",
                                input {
                                    r#type: "radio",
                                    name: "editor-type",
                                    checked: kind() == choice,
                                    onchange: move |_| kind.set(choice),
                                }
                                "{choice.label()}"
                            }
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    button { class: "primary-btn", r#type: "submit", "Create Project" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_deletes_name_the_project_and_the_cause() {
        let err = ProjectError::NotFound("blog".to_string());
        let message = delete_failed_message("Blog", &err);

        assert!(message.starts_with("Could not delete \"Blog\": "));
        assert!(message.ends_with(&err.to_string()));
    }
}
