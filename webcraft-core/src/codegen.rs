/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::kinds::CodeShape;
use crate::markup::{escape_attr, escape_text, image_alt, image_source, render_body, style_declarations};
use crate::Element;

/// Markup and style text projected from an element sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedCode {
    pub html: String,
    pub css: String,
}

/// Identifier of the element at `index`. It is positional, so it shifts
/// whenever elements are reordered or deleted.
pub fn element_id(index: usize) -> String {
    format!("element-{index}")
}

pub fn generate(elements: &[Element]) -> GeneratedCode {
    let mut code = GeneratedCode::default();

    for (index, element) in elements.iter().enumerate() {
        let id = element_id(index);

        match element.kind.spec().shape {
            CodeShape::Styled { tag } => {
                let _ = writeln!(
                    code.html,
                    r#"<{tag} id="{id}">{}</{tag}>"#,
                    escape_text(element.display_content())
                );
                push_rule(&mut code.css, &id, element);
            }
            CodeShape::Image => {
                let _ = writeln!(
                    code.html,
                    r#"<img id="{id}" src="{}" alt="{}">"#,
                    escape_attr(image_source(element)),
                    escape_attr(image_alt(element))
                );
                push_rule(&mut code.css, &id, element);
            }
            CodeShape::Wrapped => {
                let _ = writeln!(code.html, r#"<div id="{id}">{}</div>"#, render_body(element));
            }
        }
    }

    code
}

fn push_rule(css: &mut String, id: &str, element: &Element) {
    let _ = writeln!(css, "#{id} {{");
    for (name, value) in style_declarations(element) {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Canvas, ElementKind, Properties};

    fn ids_in_order(html: &str) -> Vec<String> {
        html.lines()
            .filter_map(|line| line.split(r#"id=""#).nth(1))
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn header_projects_to_tag_and_rule() {
        let code = generate(&[Element::new(ElementKind::Header)]);

        assert_eq!(code.html, "<h2 id=\"element-0\">New Header</h2>\n");
        assert_eq!(
            code.css,
            "#element-0 {\n  font-size: 32px;\n  color: #333333;\n  text-align: left;\n}\n\n"
        );
    }

    #[test]
    fn structural_kinds_are_wrapped_without_rules() {
        let code = generate(&[
            Element::new(ElementKind::Divider),
            Element::new(ElementKind::Button),
        ]);

        assert!(code.html.starts_with("<div id=\"element-0\"><hr "));
        assert!(code.html.contains("<div id=\"element-1\"><button "));
        assert!(code.css.is_empty());
    }

    #[test]
    fn hydrated_elements_get_one_rule_per_styled_kind() {
        let stored = r##"[
            {"type": "container", "content": "", "properties": {}},
            {"type": "header", "content": "Welcome", "properties": {"fontSize": "32", "textAlign": "center", "color": "#3498db"}},
            {"type": "list", "content": "", "properties": {}},
            {"type": "image", "content": "", "properties": {"imageUrl": "cat.png", "imageAlt": "Cat", "width": 50}},
            {"type": "form", "content": "", "properties": {}},
            {"type": "text", "content": "Body", "properties": {}},
            {"type": "divider", "content": "", "properties": {}}
        ]"##;
        let mut canvas = Canvas::new();
        canvas.hydrate(serde_json::from_str(stored).unwrap());

        let code = generate(canvas.elements());

        assert_eq!(code.css.matches(" {\n").count(), 3);
        assert!(code.css.contains("#element-1 {\n  font-size: 32px;\n  color: #3498db;\n  text-align: center;\n}"));
        assert!(code.css.contains("#element-3 {\n  max-width: 100%;\n  width: 50%;\n}"));
        assert!(code.css.contains("#element-5 {\n}"));
        for id in ["element-0", "element-2", "element-4", "element-6"] {
            assert!(!code.css.contains(&format!("#{id} ")));
        }
        assert!(code.html.contains(r#"<img id="element-3" src="cat.png" alt="Cat">"#));
    }

    #[test]
    fn output_order_tracks_model_order() {
        let mut canvas = Canvas::new();
        canvas.append(ElementKind::Header);
        canvas.append(ElementKind::Text);
        canvas.append(ElementKind::Image);
        canvas.append(ElementKind::List);
        canvas.move_up(2);
        canvas.move_down(0);
        canvas.delete(3);
        canvas.append(ElementKind::Divider);

        let code = generate(canvas.elements());
        let tags: Vec<&str> = code
            .html
            .lines()
            .map(|line| line.trim_start_matches('<').split([' ', '>']).next().unwrap_or(""))
            .collect();

        assert_eq!(tags, vec!["img", "h2", "p", "div"]);
        assert_eq!(ids_in_order(&code.html), vec!["element-0", "element-1", "element-2", "element-3"]);
    }

    #[test]
    fn identifiers_follow_position_after_reorder() {
        let mut canvas = Canvas::new();
        canvas.append(ElementKind::Header);
        canvas.append(ElementKind::Text);
        canvas.move_up(1);

        let code = generate(canvas.elements());
        assert!(code.html.starts_with("<p id=\"element-0\">"));
        assert!(code.css.starts_with("#element-0 {\n  font-size: 16px;"));
    }

    #[test]
    fn same_model_same_output() {
        let elements = vec![
            Element::new(ElementKind::Text),
            Element { kind: ElementKind::Container, content: "Box".into(), properties: Properties::default() },
        ];
        assert_eq!(generate(&elements), generate(&elements.clone()));
        assert_eq!(generate(&[]), GeneratedCode::default());
    }
}
