/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{slugify, Element, ElementKind, Properties};

const STARTER_HTML: &str = "<!DOCTYPE html>
<html>
<head>
  <title>My Website</title>
</head>
<body>
  <h1>Welcome to my website!</h1>
  <p>This is a new website created with WebCraft.</p>
</body>
</html>";

const STARTER_CSS: &str = "body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  line-height: 1.6;
}

h1 {
  color: #3498db;
}";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Code,
    Visual,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ProjectKind::Code => "Code Editor",
            ProjectKind::Visual => "Visual Editor",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub owner: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Project {
    /// A new project with the starter content for its kind. The id is the
    /// slug of the title; uniqueness is the repository's concern.
    pub fn new(title: &str, owner: &str, kind: ProjectKind, now: DateTime<Utc>) -> Self {
        let (html, css, elements) = match kind {
            ProjectKind::Code => (STARTER_HTML.to_string(), STARTER_CSS.to_string(), Vec::new()),
            ProjectKind::Visual => (String::new(), String::new(), starter_elements()),
        };

        Self {
            id: slugify(title),
            title: title.to_string(),
            owner: owner.to_string(),
            kind,
            created_at: now,
            last_modified: now,
            html,
            css,
            js: String::new(),
            elements,
        }
    }

    /// Whether everything but the timestamps matches `other`.
    pub fn same_content(&self, other: &Project) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.owner == other.owner
            && self.kind == other.kind
            && self.html == other.html
            && self.css == other.css
            && self.js == other.js
            && self.elements == other.elements
    }
}

fn starter_elements() -> Vec<Element> {
    vec![
        Element {
            kind: ElementKind::Header,
            content: "Welcome to my website!".to_string(),
            properties: Properties {
                font_size: Some(32),
                text_align: Some("center".to_string()),
                color: Some("#3498db".to_string()),
                ..Properties::default()
            },
        },
        Element {
            kind: ElementKind::Text,
            content: "This is a new website created with WebCraft.".to_string(),
            properties: Properties {
                font_size: Some(16),
                text_align: Some("center".to_string()),
                color: Some("#333333".to_string()),
                ..Properties::default()
            },
        },
    ]
}

/// A registered account. Only a salted hash of the password is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_projects_start_with_two_elements() {
        let project = Project::new("My Cool Site!!", "ana", ProjectKind::Visual, Utc::now());

        assert_eq!(project.id, "my-cool-site");
        assert_eq!(project.elements.len(), 2);
        assert!(project.html.is_empty());
        assert_eq!(project.created_at, project.last_modified);
    }

    #[test]
    fn code_projects_start_with_a_page() {
        let project = Project::new("Blog", "ana", ProjectKind::Code, Utc::now());

        assert!(project.html.contains("<h1>Welcome to my website!</h1>"));
        assert!(project.css.contains("color: #3498db;"));
        assert!(project.elements.is_empty());
        assert!(project.js.is_empty());
    }

    #[test]
    fn it_serializes_with_the_stored_field_names() {
        let project = Project::new("Blog", "ana", ProjectKind::Visual, Utc::now());
        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(value["type"], "visual");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("lastModified").is_some());
        assert_eq!(value["elements"][0]["properties"]["fontSize"], 32);

        let back: Project = serde_json::from_value(value).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn timestamps_do_not_count_as_content() {
        let a = Project::new("Blog", "ana", ProjectKind::Code, Utc::now());
        let mut b = a.clone();
        b.last_modified = b.last_modified + chrono::Duration::seconds(5);
        assert!(a.same_content(&b));

        b.js = "console.log(1)".to_string();
        assert!(!a.same_content(&b));
    }
}
