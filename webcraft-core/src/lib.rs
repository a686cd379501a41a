/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

pub mod canvas;
pub mod codegen;
pub mod config;
pub mod error;
pub mod kinds;
pub mod markup;
pub mod preview;
pub mod project;
pub mod properties;
pub mod slug;

#[cfg(feature = "rsx")]
pub mod html_renderer;

pub use canvas::Canvas;
pub use codegen::{generate, GeneratedCode};
pub use config::WebcraftConfig;
pub use error::{CoreError, Result};
pub use kinds::{KindSpec, PropertySchema};
pub use preview::{PreviewDocument, PreviewSurface};
pub use project::{Project, ProjectKind, User};
pub use properties::{FormField, FormValues, PropertyPanel};
pub use slug::slugify;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200";

/// One visual building block on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Header,
    Text,
    Image,
    Button,
    Container,
    List,
    Form,
    Divider,
}

/// Style attributes an element may carry. Absent values leave the
/// corresponding style unset so the renderer default applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub width: Option<u32>,
}

impl Properties {
    pub fn is_empty(&self) -> bool {
        *self == Properties::default()
    }
}

// Stored documents carry numbers both as JSON numbers and as strings ("32", "100%").
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Number(n)) if n.is_finite() && n >= 0.0 => Some(n.round() as u32),
        Some(Raw::Number(_)) => None,
        Some(Raw::Text(text)) => leading_integer(&text),
    })
}

/// Parses the leading digits of `text`, ignoring any unit suffix.
pub(crate) fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl Element {
    /// A freshly dropped element with the kind's default content and properties.
    pub fn new(kind: ElementKind) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            content: spec.default_content.to_string(),
            properties: spec.default_properties(),
        }
    }

    /// The text the canvas shows, falling back to the kind's label when empty.
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            self.kind.spec().fallback_content
        } else {
            &self.content
        }
    }
}

impl ElementKind {
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Header,
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Container,
        ElementKind::List,
        ElementKind::Form,
        ElementKind::Divider,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Header => "header",
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Container => "container",
            ElementKind::List => "list",
            ElementKind::Form => "form",
            ElementKind::Divider => "divider",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownElementKind(s.to_string()))
    }
}
