/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::markup::{
    image_alt, image_source, inline_style, style_declarations, BUTTON_STYLE, CONTAINER_STYLE,
    DIVIDER_STYLE, FORM_FIELDS, LIST_ITEMS,
};
use crate::{Element as CanvasElement, ElementKind};

use dioxus::prelude::*;

/// Renders the canvas body of one element. Same structure as
/// [`crate::markup::render_body`], as live nodes.
pub fn render_element(element: &CanvasElement) -> Element {
    let style = inline_style(&style_declarations(element));
    let text = element.display_content().to_string();

    match element.kind {
        ElementKind::Header => rsx! {
            h2 { style: "{style}", "{text}" }
        },
        ElementKind::Text => rsx! {
            p { style: "{style}", "{text}" }
        },
        ElementKind::Image => {
            let src = image_source(element).to_string();
            let alt = image_alt(element).to_string();
            rsx! {
                img { src: "{src}", alt: "{alt}", style: "{style}", draggable: "false" }
            }
        }
        ElementKind::Button => rsx! {
            button { style: "{BUTTON_STYLE} {style}", "{text}" }
        },
        ElementKind::Container => rsx! {
            div { style: "{CONTAINER_STYLE}", "{text}" }
        },
        ElementKind::List => rsx! {
            ul {
                for item in LIST_ITEMS {
                    li { "{item}" }
                }
            }
        },
        ElementKind::Form => rsx! {
            form {
                for (field_label, input_type) in FORM_FIELDS {
                    div { style: "margin-bottom:15px;",
                        label { style: "display:block;margin-bottom:5px;", "{field_label}" }
                        input { r#type: "{input_type}", style: "width:100%;padding:8px;" }
                    }
                }
                button { r#type: "button", style: "{BUTTON_STYLE}", "Submit" }
            }
        },
        ElementKind::Divider => rsx! {
            hr { style: "{DIVIDER_STYLE}" }
        },
    }
}
