/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use dioxus::prelude::*;
use webcraft_core::html_renderer::render_element;
use webcraft_core::preview::present;
use webcraft_core::properties::TEXT_ALIGN_OPTIONS;
use webcraft_core::{ElementKind, FormField, PropertyPanel};
use webcraft_dioxus::{PreviewFrame, SignalSurface};
use webcraft_store::{ProjectError, View, VisualEditorState};

use crate::{confirm, sleep_ms, use_navigator, use_services, AppBackend, AppHeader, ProjectUnavailable};

type Opened = Result<VisualEditorState<AppBackend>, String>;

/// Runs `edit` against the open project. Failures land in `status` and
/// leave the model as it was.
fn with_editor<T>(
    mut editor: Signal<Opened>,
    mut status: Signal<Option<String>>,
    edit: impl FnOnce(&mut VisualEditorState<AppBackend>) -> Result<T, ProjectError>,
) -> Option<T> {
    let mut guard = editor.write();
    let state = guard.as_mut().ok()?;
    match edit(state) {
        Ok(value) => {
            status.set(None);
            Some(value)
        }
        Err(err) => {
            tracing::warn!(%err, "edit rejected");
            status.set(Some(err.to_string()));
            None
        }
    }
}

#[component]
pub fn VisualEditor(project_id: String) -> Element {
    let services = use_services();
    let mut view = use_navigator();
    let user = services.current_user().unwrap_or_default();

    let mut editor: Signal<Opened> = use_signal({
        let repo = services.projects();
        let user = user.clone();
        move || VisualEditorState::open(repo, &project_id, &user).map_err(|err| err.to_string())
    });
    let status = use_signal(|| None::<String>);
    let mut dragged = use_signal(|| None::<ElementKind>);
    let mut saved = use_signal(|| false);
    let surface = SignalSurface(use_signal(|| None));
    let feedback_ms = services.config.editor.save_feedback_ms;

    #[cfg(target_arch = "wasm32")]
    {
        let interval = services.config.editor.autosave_interval_secs;
        use_effect(move || {
            if interval == 0 {
                return;
            }
            spawn(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(interval.saturating_mul(1000)).await;
                    with_editor(editor, status, |state| state.save());
                }
            });
        });
    }

    let mut save = move || {
        if with_editor(editor, status, |state| state.save()).is_some() {
            saved.set(true);
            spawn(async move {
                sleep_ms(feedback_ms).await;
                saved.set(false);
            });
        }
    };
    let preview = move || {
        if let Ok(state) = &*editor.read() {
            present(Some(&surface), &state.preview_document());
        }
    };

    let (title, elements, selected, panel) = match &*editor.read() {
        Ok(state) => (
            state.project().title.clone(),
            state.canvas().elements().to_vec(),
            state.canvas().selected(),
            state.panel(),
        ),
        Err(message) => return rsx! { ProjectUnavailable { message: message.clone() } },
    };

    rsx! {
        div {
            class: "editor-container",
            tabindex: "0",
            onkeydown: move |evt| {
                let modifiers = evt.modifiers();
                if !(modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META)) {
                    return;
                }
                match evt.key() {
                    Key::Character(c) if c == "s" => {
                        evt.prevent_default();
                        save();
                    }
                    Key::Character(c) if c == "p" => {
                        evt.prevent_default();
                        preview();
                    }
                    _ => {}
                }
            },

            AppHeader {
                username: user.clone(),
                button {
                    class: "action-btn",
                    onclick: move |_| view.set(View::Dashboard),
                    "← Dashboard"
                }
                span { class: "project-name", "{title}" }
                button {
                    class: "action-btn",
                    onclick: move |_| preview(),
                    "Preview"
                }
                button {
                    class: "primary-btn",
                    onclick: move |_| save(),
                    if saved() { "Saved!" } else { "Save" }
                }
            }

            if let Some(message) = status() {
                div { class: "status-message error", "{message}" }
            }

            div {
                class: "editor-body",
                aside {
                    class: "left-panel",
                    h3 { "Elements" }
                    for kind in ElementKind::ALL {
                        div {
                            class: "palette-item",
                            draggable: true,
                            ondragstart: move |_| dragged.set(Some(kind)),
                            ondragend: move |_| dragged.set(None),
                            onclick: move |_| {
                                with_editor(editor, status, |state| state.add_element(kind));
                            },
                            "{kind.spec().label}"
                        }
                    }
                }

                main {
                    class: "canvas-area",
                    div {
                        class: "canvas",
                        ondragover: move |evt| evt.prevent_default(),
                        ondrop: move |evt| {
                            evt.prevent_default();
                            let kind = dragged();
                            dragged.set(None);
                            if let Some(kind) = kind {
                                with_editor(editor, status, |state| state.add_element(kind));
                            }
                        },
                        onclick: move |_| {
                            if let Ok(state) = editor.write().as_mut() {
                                state.deselect();
                            }
                        },

                        if elements.is_empty() {
                            div { class: "canvas-placeholder", "Drag elements here to build your page" }
                        }
                        for (idx, element) in elements.iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: if selected == Some(idx) { "canvas-element selected" } else { "canvas-element" },
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    if let Ok(state) = editor.write().as_mut() {
                                        state.select(idx);
                                    }
                                },
                                {render_element(element)}
                                div {
                                    class: "element-controls",
                                    button {
                                        class: "icon-btn",
                                        title: "Move up",
                                        onclick: move |evt| {
                                            evt.stop_propagation();
                                            with_editor(editor, status, |state| state.move_up(idx));
                                        },
                                        "↑"
                                    }
                                    button {
                                        class: "icon-btn",
                                        title: "Move down",
                                        onclick: move |evt| {
                                            evt.stop_propagation();
                                            with_editor(editor, status, |state| state.move_down(idx));
                                        },
                                        "↓"
                                    }
                                    button {
                                        class: "icon-btn danger",
                                        title: "Delete",
                                        onclick: move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            async move {
                                                let confirmed = confirm("Are you sure you want to delete this element?").await;
                                                with_editor(editor, status, |state| state.delete_element(idx, confirmed));
                                            }
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }

                aside {
                    class: "right-panel inspector-panel",
                    h3 { "Properties" }
                    PropertiesPanel {
                        panel,
                        on_edit: move |(index, field, value): (usize, FormField, String)| {
                            with_editor(editor, status, |state| match field {
                                FormField::Content => state.set_content(index, &value),
                                _ => state.edit_property(field, &value),
                            });
                        },
                    }
                }
            }

            PreviewFrame { surface }
        }
    }
}

#[component]
fn PropertiesPanel(panel: PropertyPanel, on_edit: EventHandler<(usize, FormField, String)>) -> Element {
    match panel {
        PropertyPanel::NoSelection => rsx! {
            p { class: "empty-state", "{PropertyPanel::EMPTY_MESSAGE}" }
        },
        PropertyPanel::NotEditable { .. } => rsx! {
            p { class: "empty-state", "{PropertyPanel::NOT_EDITABLE_MESSAGE}" }
        },
        PropertyPanel::Fields { index, schema, values } => rsx! {
            for field in schema.fields().iter().copied() {
                div {
                    key: "{index}-{field.key()}",
                    class: "control-group",
                    label { "{field.label()}" }
                    {field_input(index, field, values.get(field).unwrap_or_default(), on_edit)}
                }
            }
        },
    }
}

/// One input of the properties form. Edits commit on change.
fn field_input(
    index: usize,
    field: FormField,
    current: String,
    on_edit: EventHandler<(usize, FormField, String)>,
) -> Element {
    let commit = move |evt: FormEvent| on_edit.call((index, field, evt.value()));

    match field {
        FormField::Content => rsx! {
            textarea { rows: "3", value: "{current}", onchange: commit }
        },
        FormField::FontSize | FormField::Width => rsx! {
            input { r#type: "number", min: "1", value: "{current}", onchange: commit }
        },
        FormField::Color => rsx! {
            input { r#type: "color", value: "{current}", onchange: commit }
        },
        FormField::TextAlign => rsx! {
            select {
                onchange: commit,
                for align in TEXT_ALIGN_OPTIONS {
                    option { value: "{align}", selected: align == current, "{align}" }
                }
            }
        },
        FormField::ImageUrl | FormField::ImageAlt => rsx! {
            input { r#type: "text", value: "{current}", onchange: commit }
        },
    }
}
