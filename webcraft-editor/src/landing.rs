/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use dioxus::prelude::*;
use webcraft_store::View;

use crate::{use_navigator, use_services};

const FEATURES: [(&str, &str); 3] = [
    ("Code Editor", "Write HTML, CSS and JavaScript side by side and preview the result."),
    ("Visual Editor", "Drag headers, text, images and more onto a page without writing code."),
    ("Instant Preview", "See the finished page at any time, exactly as visitors will."),
];

#[component]
pub fn Landing() -> Element {
    let services = use_services();
    let mut view = use_navigator();
    let signed_in = services.current_user().is_some();

    // Signed-in visitors get both links pointed at their projects.
    let (primary, primary_target, secondary, secondary_target) = if signed_in {
        ("Dashboard", View::Dashboard, "My Projects", View::Dashboard)
    } else {
        ("Login", View::Login { signup: false }, "Sign Up", View::Login { signup: true })
    };
    let primary_nav = primary_target.clone();

    rsx! {
        div {
            class: "landing",
            header {
                class: "app-header",
                span { class: "logo", "WebCraft" }
                nav {
                    class: "header-actions",
                    button {
                        class: "action-btn btn-login",
                        onclick: move |_| view.set(primary_nav.clone()),
                        "{primary}"
                    }
                    button {
                        class: "primary-btn",
                        onclick: move |_| view.set(secondary_target.clone()),
                        "{secondary}"
                    }
                }
            }
            section {
                class: "hero",
                h1 { "Build your website in minutes" }
                p { "Create, edit and preview websites right in your browser." }
                button {
                    class: "primary-btn",
                    onclick: move |_| view.set(primary_target.clone()),
                    if signed_in { "Go to my projects" } else { "Get started" }
                }
            }
            section {
                class: "features",
                for (title, blurb) in FEATURES {
                    div {
                        class: "feature-card",
                        h3 { "{title}" }
                        p { "{blurb}" }
                    }
                }
            }
        }
    }
}
