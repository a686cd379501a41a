/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use dioxus::prelude::*;
use webcraft_core::preview::present;
use webcraft_dioxus::{PreviewFrame, SignalSurface};
use webcraft_store::{CodeEditorState, CodeTab, View};

use crate::{sleep_ms, use_navigator, use_services, AppBackend, AppHeader, ProjectUnavailable};

type Opened = Result<CodeEditorState<AppBackend>, String>;

#[component]
pub fn CodeEditor(project_id: String) -> Element {
    let services = use_services();
    let mut view = use_navigator();
    let user = services.current_user().unwrap_or_default();

    let mut editor: Signal<Opened> = use_signal({
        let repo = services.projects();
        let user = user.clone();
        move || CodeEditorState::open(repo, &project_id, &user).map_err(|err| err.to_string())
    });
    let mut tab = use_signal(CodeTab::default);
    let mut status = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);
    let surface = SignalSurface(use_signal(|| None));
    let feedback_ms = services.config.editor.save_feedback_ms;

    let mut save = move |feedback: bool| {
        let mut guard = editor.write();
        let Ok(state) = guard.as_mut() else {
            return;
        };
        match state.save() {
            Ok(_) => {
                status.set(None);
                if feedback {
                    saved.set(true);
                    spawn(async move {
                        sleep_ms(feedback_ms).await;
                        saved.set(false);
                    });
                }
            }
            Err(err) => {
                tracing::warn!(%err, "save failed");
                status.set(Some(err.to_string()));
            }
        }
    };
    let preview = move || {
        if let Ok(state) = &*editor.read() {
            present(Some(&surface), &state.preview_document());
        }
    };

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
                    save(false);
                }
            });
        });
    }

    let (title, text) = match &*editor.read() {
        Ok(state) => (state.project().title.clone(), state.text(tab()).to_string()),
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
                        save(true);
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
                    onclick: move |_| save(true),
                    if saved() { "Saved!" } else { "Save" }
                }
            }

            if let Some(message) = status() {
                div { class: "status-message error", "{message}" }
            }

            div {
                class: "code-editor",
                div {
                    class: "file-tabs",
                    for choice in CodeTab::ALL {
                        button {
                            class: if tab() == choice { "file-tab active" } else { "file-tab" },
                            onclick: move |_| tab.set(choice),
                            "{choice.label()}"
                        }
                    }
                }
                textarea {
                    class: "code-input",
                    spellcheck: "false",
                    value: "{text}",
                    oninput: move |evt| {
                        if let Ok(state) = editor.write().as_mut() {
                            state.set_text(tab(), evt.value());
                        }
                    },
                }
            }

            PreviewFrame { surface }
        }
    }
}
