/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

#![allow(non_snake_case)]

mod code_editor;
mod dashboard;
mod landing;
mod login;
mod visual_editor;

use dioxus::prelude::*;
use webcraft_core::WebcraftConfig;
use webcraft_store::{
    Access, Accounts, ProjectRepository, RecordStore, SessionManager, View,
};

use code_editor::CodeEditor;
use dashboard::Dashboard;
use landing::Landing;
use login::Login;
use visual_editor::VisualEditor;

const MAIN_CSS: Asset = asset!("/assets/editor.css");

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppBackend = webcraft_store::LocalStorageBackend;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppBackend = webcraft_store::MemoryBackend;

/// Storage handles and configuration shared by every page.
#[derive(Clone)]
pub struct Services {
    pub config: WebcraftConfig,
    store: RecordStore<AppBackend>,
}

impl Services {
    pub fn new(config: WebcraftConfig) -> Self {
        let store = RecordStore::new(AppBackend::default(), config.storage.clone());
        if let Err(err) = store.init() {
            tracing::error!(%err, "could not seed browser storage");
        }
        Self { config, store }
    }

    pub fn accounts(&self) -> Accounts<AppBackend> {
        Accounts::new(self.store.clone())
    }

    pub fn sessions(&self) -> SessionManager<AppBackend> {
        SessionManager::new(self.store.clone())
    }

    pub fn projects(&self) -> ProjectRepository<AppBackend> {
        ProjectRepository::new(self.store.clone(), self.config.site.clone())
    }

    /// The signed-in username; unreadable storage counts as signed out.
    pub fn current_user(&self) -> Option<String> {
        self.sessions().current_user().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read the session");
            None
        })
    }
}

pub(crate) fn use_services() -> Services {
    use_context::<Services>()
}

pub(crate) fn use_navigator() -> Signal<View> {
    use_context::<Signal<View>>()
}

/// Waits `ms` milliseconds. Outside the browser there is no timer and this
/// returns at once.
pub(crate) async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

/// Navigates after a delay so a status message stays readable.
pub(crate) fn navigate_later(mut view: Signal<View>, target: View, delay_ms: u32) {
    spawn(async move {
        sleep_ms(delay_ms).await;
        view.set(target);
    });
}

/// Asks the browser for a yes/no answer. No answer counts as "no".
pub(crate) async fn confirm(message: &str) -> bool {
    let Ok(literal) = serde_json::to_string(message) else {
        return false;
    };
    let mut eval = document::eval(&format!("dioxus.send(window.confirm({literal}));"));
    match eval.recv::<bool>().await {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(?err, "confirmation dialog unavailable");
            false
        }
    }
}

pub(crate) fn alert(message: &str) {
    if let Ok(literal) = serde_json::to_string(message) {
        document::eval(&format!("window.alert({literal});"));
    }
}

/// Shown instead of an editor when the project cannot be opened; reports the
/// problem and returns to the dashboard.
#[component]
pub(crate) fn ProjectUnavailable(message: String) -> Element {
    let mut view = use_navigator();
    let reported = message.clone();
    use_effect(move || {
        alert(&reported);
        view.set(View::Dashboard);
    });

    rsx! {
        div { class: "empty-state", "{message}" }
    }
}

/// Top bar of the signed-in pages.
#[component]
pub(crate) fn AppHeader(username: String, children: Element) -> Element {
    let services = use_services();
    let mut view = use_navigator();

    rsx! {
        header {
            class: "app-header",
            button {
                class: "logo",
                onclick: move |_| view.set(View::Dashboard),
                "WebCraft"
            }
            div { class: "header-actions", {children} }
            div {
                class: "user-menu",
                span { class: "username", "{username}" }
                button {
                    class: "action-btn",
                    onclick: move |_| {
                        if let Err(err) = services.accounts().logout() {
                            tracing::warn!(%err, "logout failed");
                        }
                        view.set(View::Landing);
                    },
                    "Logout"
                }
            }
        }
    }
}

#[component]
pub fn WebcraftApp(#[props(default)] config: WebcraftConfig) -> Element {
    let services = use_context_provider(|| Services::new(config.clone()));
    let view = use_context_provider(|| Signal::new(View::Landing));

    let requested = view();
    let shown = match services.sessions().gate(&requested) {
        Ok(Access::Granted(_)) => requested,
        Ok(Access::Redirect(target)) => target,
        Err(err) => {
            tracing::error!(%err, "session check failed");
            View::Login { signup: false }
        }
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        match shown {
            View::Landing => rsx! { Landing {} },
            View::Login { signup } => rsx! { Login { signup } },
            View::Dashboard => rsx! { Dashboard {} },
            View::CodeEditor(id) => rsx! { CodeEditor { key: "{id}", project_id: id.clone() } },
            View::VisualEditor(id) => rsx! { VisualEditor { key: "{id}", project_id: id.clone() } },
            View::ProjectView(id) => rsx! { ProjectPage { key: "{id}", project_id: id.clone() } },
        }
    }
}

/// The standalone page of one project.
#[component]
fn ProjectPage(project_id: String) -> Element {
    let services = use_services();
    let mut view = use_navigator();

    match services.projects().view(&project_id) {
        Ok(project) => rsx! {
            div {
                class: "project-page",
                button {
                    class: "back-btn",
                    onclick: move |_| view.set(View::Dashboard),
                    "← Back to dashboard"
                }
                {webcraft_dioxus::render_to_rsx(&project)}
            }
        },
        Err(err) => rsx! { ProjectUnavailable { message: err.to_string() } },
    }
}
