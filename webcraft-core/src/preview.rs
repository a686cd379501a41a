/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::markup::escape_text;
use crate::{generate, GeneratedCode, Project, ProjectKind};

pub const BASE_BODY_STYLE: &str = "body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  line-height: 1.6;
}
";

/// A standalone document assembled from markup, style and optional script.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDocument {
    pub title: String,
    pub style: String,
    pub body: String,
    pub script: Option<String>,
}

impl PreviewDocument {
    /// Document for a visual project: base body style plus the generated code.
    pub fn visual(title: &str, code: &GeneratedCode) -> Self {
        Self {
            title: title.to_string(),
            style: format!("{BASE_BODY_STYLE}{}", code.css),
            body: code.html.clone(),
            script: None,
        }
    }

    /// Document for authored code. An empty script is left out.
    pub fn authored(title: &str, html: &str, css: &str, js: &str) -> Self {
        Self {
            title: title.to_string(),
            style: css.to_string(),
            body: html.to_string(),
            script: (!js.trim().is_empty()).then(|| js.to_string()),
        }
    }

    /// The standalone page of a stored project. Visual projects are
    /// regenerated from their elements rather than the saved markup.
    pub fn for_project(project: &Project) -> Self {
        match project.kind {
            ProjectKind::Visual => Self::visual(&project.title, &generate(&project.elements)),
            ProjectKind::Code => Self::authored(&project.title, &project.html, &project.css, &project.js),
        }
    }

    pub fn render(&self) -> String {
        let script = match &self.script {
            Some(js) => format!("<script>{js}</script>\n"),
            None => String::new(),
        };
        format!(
            "<!DOCTYPE html>
<html>
<head>
<meta charset=\"UTF-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
<title>{} - Preview</title>
<style>
{}</style>
</head>
<body>
{}{script}</body>
</html>
",
            escape_text(&self.title),
            self.style,
            self.body,
        )
    }
}

/// Somewhere a rendered document can be shown in isolation.
pub trait PreviewSurface {
    fn present(&self, document: &str);
}

/// Hands `document` to `surface`. Without a surface this does nothing.
pub fn present(surface: Option<&dyn PreviewSurface>, document: &PreviewDocument) -> bool {
    match surface {
        Some(surface) => {
            surface.present(&document.render());
            true
        }
        None => {
            tracing::debug!(title = %document.title, "no preview surface, skipping");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture(RefCell<Vec<String>>);

    impl PreviewSurface for Capture {
        fn present(&self, document: &str) {
            self.0.borrow_mut().push(document.to_string());
        }
    }

    #[test]
    fn visual_document_embeds_base_style_and_code() {
        let code = GeneratedCode {
            html: "<h2 id=\"element-0\">Hi</h2>\n".to_string(),
            css: "#element-0 {\n  color: red;\n}\n\n".to_string(),
        };
        let doc = PreviewDocument::visual("My Site", &code).render();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("<title>My Site - Preview</title>"));
        assert!(doc.contains("font-family: Arial, sans-serif;"));
        assert!(doc.contains("#element-0 {\n  color: red;\n}"));
        assert!(doc.contains("<body>\n<h2 id=\"element-0\">Hi</h2>\n</body>"));
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn authored_document_keeps_script_when_present() {
        let with_js = PreviewDocument::authored("T", "<p>x</p>", "p{}", "alert(1)").render();
        assert!(with_js.contains("<script>alert(1)</script>"));

        let without_js = PreviewDocument::authored("T", "<p>x</p>", "p{}", "  ").render();
        assert!(!without_js.contains("<script>"));
    }

    #[test]
    fn stored_projects_render_by_kind() {
        let now = chrono::Utc::now();
        let visual = Project::new("Site", "ana", ProjectKind::Visual, now);
        let doc = PreviewDocument::for_project(&visual);
        assert!(doc.body.contains("<h2 id=\"element-0\">Welcome to my website!</h2>"));
        assert!(doc.style.starts_with(BASE_BODY_STYLE));

        let mut code = Project::new("Blog", "ana", ProjectKind::Code, now);
        code.js = "go()".to_string();
        let doc = PreviewDocument::for_project(&code);
        assert_eq!(doc.body, code.html);
        assert_eq!(doc.script.as_deref(), Some("go()"));
    }

    #[test]
    fn presenting_without_a_surface_is_a_noop() {
        let doc = PreviewDocument::authored("T", "", "", "");
        assert!(!present(None, &doc));

        let capture = Capture::default();
        assert!(present(Some(&capture), &doc));
        assert_eq!(capture.0.borrow().len(), 1);
    }
}
