/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Capability table for element kinds.
//!
//! Everything that varies by kind (palette label, defaults, fallback text,
//! property schema and the shape of generated markup) is one row here, so a
//! new kind is one enum variant plus one entry in [`KINDS`].

use crate::{ElementKind, Properties, PLACEHOLDER_IMAGE_URL};

/// Which form the property editor shows for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySchema {
    Text,
    Image,
    None,
}

/// How the code generator projects a kind into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeShape {
    /// A text tag with its own style rule.
    Styled { tag: &'static str },
    /// An `img` tag with its own style rule.
    Image,
    /// A `div` wrapping the rendered canvas body, no style rule.
    Wrapped,
}

#[derive(Debug)]
pub struct KindSpec {
    pub kind: ElementKind,
    pub label: &'static str,
    pub default_content: &'static str,
    pub fallback_content: &'static str,
    pub schema: PropertySchema,
    pub shape: CodeShape,
    /// Font size the renderer uses when the element carries none.
    pub rendered_font_size: u32,
    defaults: fn() -> Properties,
}

impl KindSpec {
    pub fn default_properties(&self) -> Properties {
        (self.defaults)()
    }
}

fn text_defaults(font_size: u32) -> Properties {
    Properties {
        font_size: Some(font_size),
        color: Some("#333333".to_string()),
        text_align: Some("left".to_string()),
        ..Properties::default()
    }
}

fn header_defaults() -> Properties {
    text_defaults(32)
}

fn paragraph_defaults() -> Properties {
    text_defaults(16)
}

fn image_defaults() -> Properties {
    Properties {
        image_url: Some(PLACEHOLDER_IMAGE_URL.to_string()),
        image_alt: Some("Image".to_string()),
        width: Some(100),
        ..Properties::default()
    }
}

fn button_defaults() -> Properties {
    Properties {
        font_size: Some(16),
        color: Some("#ffffff".to_string()),
        background_color: Some("#3498db".to_string()),
        ..Properties::default()
    }
}

fn no_properties() -> Properties {
    Properties::default()
}

static KINDS: [KindSpec; 8] = [
    KindSpec {
        kind: ElementKind::Header,
        label: "Header",
        default_content: "New Header",
        fallback_content: "Header",
        schema: PropertySchema::Text,
        shape: CodeShape::Styled { tag: "h2" },
        rendered_font_size: 32,
        defaults: header_defaults,
    },
    KindSpec {
        kind: ElementKind::Text,
        label: "Text",
        default_content: "New paragraph text",
        fallback_content: "Text paragraph",
        schema: PropertySchema::Text,
        shape: CodeShape::Styled { tag: "p" },
        rendered_font_size: 16,
        defaults: paragraph_defaults,
    },
    KindSpec {
        kind: ElementKind::Image,
        label: "Image",
        default_content: "",
        fallback_content: "",
        schema: PropertySchema::Image,
        shape: CodeShape::Image,
        rendered_font_size: 16,
        defaults: image_defaults,
    },
    KindSpec {
        kind: ElementKind::Button,
        label: "Button",
        default_content: "Button",
        fallback_content: "Button",
        schema: PropertySchema::Text,
        shape: CodeShape::Wrapped,
        rendered_font_size: 16,
        defaults: button_defaults,
    },
    KindSpec {
        kind: ElementKind::Container,
        label: "Container",
        default_content: "",
        fallback_content: "Container",
        schema: PropertySchema::None,
        shape: CodeShape::Wrapped,
        rendered_font_size: 16,
        defaults: no_properties,
    },
    KindSpec {
        kind: ElementKind::List,
        label: "List",
        default_content: "",
        fallback_content: "",
        schema: PropertySchema::None,
        shape: CodeShape::Wrapped,
        rendered_font_size: 16,
        defaults: no_properties,
    },
    KindSpec {
        kind: ElementKind::Form,
        label: "Form",
        default_content: "",
        fallback_content: "",
        schema: PropertySchema::None,
        shape: CodeShape::Wrapped,
        rendered_font_size: 16,
        defaults: no_properties,
    },
    KindSpec {
        kind: ElementKind::Divider,
        label: "Divider",
        default_content: "",
        fallback_content: "",
        schema: PropertySchema::None,
        shape: CodeShape::Wrapped,
        rendered_font_size: 16,
        defaults: no_properties,
    },
];

impl ElementKind {
    pub fn spec(self) -> &'static KindSpec {
        &KINDS[self as usize]
    }
}
