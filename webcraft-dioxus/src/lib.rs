/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

#![allow(non_snake_case)]

use dioxus::prelude::*;
use webcraft_core::{PreviewDocument, PreviewSurface, Project};

/// A preview surface backed by a signal; the rendered document ends up in
/// an iframe's `srcdoc`.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSurface(pub Signal<Option<String>>);

impl PreviewSurface for SignalSurface {
    fn present(&self, document: &str) {
        let mut target = self.0;
        target.set(Some(document.to_string()));
    }
}

/// Modal preview of whatever the surface last received. Closing clears it.
#[component]
pub fn PreviewFrame(surface: SignalSurface) -> Element {
    let mut shown = surface.0;
    let Some(srcdoc) = shown() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "preview-modal",
            onclick: move |_| shown.set(None),
            div {
                class: "preview-window",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "preview-header",
                    h3 { "Preview" }
                    button {
                        class: "icon-btn",
                        title: "Close preview",
                        onclick: move |_| shown.set(None),
                        "✕"
                    }
                }
                iframe {
                    class: "preview-frame",
                    "sandbox": "allow-scripts",
                    srcdoc: "{srcdoc}",
                }
            }
        }
    }
}

/// Renders a stored project as its own page, filling the viewport.
pub fn render_to_rsx(project: &Project) -> Element {
    let srcdoc = PreviewDocument::for_project(project).render();
    tracing::debug!(id = %project.id, "rendering public view");

    rsx! {
        iframe {
            class: "project-view",
            title: "{project.title}",
            style: "border: none; width: 100%; height: 100vh;",
            srcdoc: "{srcdoc}",
        }
    }
}
