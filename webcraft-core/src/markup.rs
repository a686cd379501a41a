/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::{Element, ElementKind, PLACEHOLDER_IMAGE_URL};

pub const CONTAINER_STYLE: &str = "border:1px dashed #ccc;padding:20px;min-height:100px;";
pub const BUTTON_STYLE: &str = "padding:10px 20px;";
pub const DIVIDER_STYLE: &str = "border:0;border-top:1px solid #eee;margin:20px 0;";
pub const LIST_ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];
pub const FORM_FIELDS: [(&str, &str); 2] = [("Name", "text"), ("Email", "email")];

/// Inline style declarations the element's properties produce, in the
/// order they are applied. Only present properties contribute.
pub fn style_declarations(element: &Element) -> Vec<(&'static str, String)> {
    let props = &element.properties;
    let mut decls = Vec::new();

    match element.kind {
        ElementKind::Header | ElementKind::Text => {
            if let Some(size) = props.font_size {
                decls.push(("font-size", format!("{size}px")));
            }
            if let Some(color) = &props.color {
                decls.push(("color", color.clone()));
            }
            if let Some(align) = &props.text_align {
                decls.push(("text-align", align.clone()));
            }
        }
        ElementKind::Image => {
            decls.push(("max-width", "100%".to_string()));
            if let Some(width) = props.width {
                decls.push(("width", format!("{width}%")));
            }
        }
        ElementKind::Button => {
            if let Some(size) = props.font_size {
                decls.push(("font-size", format!("{size}px")));
            }
            if let Some(color) = &props.color {
                decls.push(("color", color.clone()));
            }
            if let Some(background) = &props.background_color {
                decls.push(("background-color", background.clone()));
            }
            if let Some(align) = &props.text_align {
                decls.push(("text-align", align.clone()));
            }
        }
        ElementKind::Container | ElementKind::List | ElementKind::Form | ElementKind::Divider => {}
    }

    decls
}

/// `a: b; c: d;` form used in `style` attributes.
pub fn inline_style(decls: &[(&'static str, String)]) -> String {
    decls
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn image_source(element: &Element) -> &str {
    element
        .properties
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

pub fn image_alt(element: &Element) -> &str {
    element
        .properties
        .image_alt
        .as_deref()
        .filter(|alt| !alt.is_empty())
        .unwrap_or("Image")
}

/// The canvas body of an element as markup text. This is what the code
/// generator wraps verbatim for kinds without their own style rule.
pub fn render_body(element: &Element) -> String {
    let decls = style_declarations(element);
    let text = escape_text(element.display_content());

    match element.kind {
        ElementKind::Header => tagged("h2", &decls, &text),
        ElementKind::Text => tagged("p", &decls, &text),
        ElementKind::Image => format!(
            r#"<img src="{}" alt="{}" style="{}">"#,
            escape_attr(image_source(element)),
            escape_attr(image_alt(element)),
            escape_attr(&inline_style(&decls)),
        ),
        ElementKind::Button => {
            let mut style = BUTTON_STYLE.to_string();
            if !decls.is_empty() {
                style.push(' ');
                style.push_str(&inline_style(&decls));
            }
            format!(r#"<button style="{}">{text}</button>"#, escape_attr(&style))
        }
        ElementKind::Container => format!(r#"<div style="{CONTAINER_STYLE}">{text}</div>"#),
        ElementKind::List => {
            let items: String = LIST_ITEMS.iter().map(|item| format!("<li>{item}</li>")).collect();
            format!("<ul>{items}</ul>")
        }
        ElementKind::Form => {
            let fields: String = FORM_FIELDS
                .iter()
                .map(|(label, input_type)| {
                    format!(
                        r#"<div style="margin-bottom:15px;"><label style="display:block;margin-bottom:5px;">{label}</label><input type="{input_type}" style="width:100%;padding:8px;"></div>"#
                    )
                })
                .collect();
            format!(r#"<form>{fields}<button type="button" style="{BUTTON_STYLE}">Submit</button></form>"#)
        }
        ElementKind::Divider => format!(r#"<hr style="{DIVIDER_STYLE}">"#),
    }
}

fn tagged(tag: &str, decls: &[(&'static str, String)], text: &str) -> String {
    if decls.is_empty() {
        format!("<{tag}>{text}</{tag}>")
    } else {
        format!(r#"<{tag} style="{}">{text}</{tag}>"#, escape_attr(&inline_style(decls)))
    }
}

pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Properties;

    #[test]
    fn header_without_properties_has_no_style_attribute() {
        let element = Element {
            kind: ElementKind::Header,
            content: String::new(),
            properties: Properties::default(),
        };

        assert_eq!(render_body(&element), "<h2>Header</h2>");
    }

    #[test]
    fn stored_properties_become_inline_overrides() {
        let mut element = Element::new(ElementKind::Text);
        element.properties.color = None;

        assert_eq!(
            render_body(&element),
            r#"<p style="font-size: 16px; text-align: left;">New paragraph text</p>"#
        );
    }

    #[test]
    fn button_carries_its_colors() {
        let body = render_body(&Element::new(ElementKind::Button));

        assert_eq!(
            body,
            r#"<button style="padding:10px 20px; font-size: 16px; color: #ffffff; background-color: #3498db;">Button</button>"#
        );
    }

    #[test]
    fn image_falls_back_to_placeholder() {
        let element = Element {
            kind: ElementKind::Image,
            content: String::new(),
            properties: Properties::default(),
        };

        assert_eq!(
            render_body(&element),
            format!(r#"<img src="{PLACEHOLDER_IMAGE_URL}" alt="Image" style="max-width: 100%;">"#)
        );
    }

    #[test]
    fn list_has_three_static_items() {
        let body = render_body(&Element::new(ElementKind::List));
        assert_eq!(body.matches("<li>").count(), 3);
    }

    #[test]
    fn text_is_escaped() {
        let mut element = Element::new(ElementKind::Container);
        element.content = "<b>bold</b> & co".to_string();

        assert!(render_body(&element).contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    }
}
