/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Property editor: the form shown for the selected element.
//!
//! [`load`] reads the values the canvas currently shows (stored values, or
//! the renderer default where a property is absent). [`apply`] writes back
//! only the fields the element's schema recognizes and leaves the rest alone.

use crate::markup::{image_alt, image_source};
use crate::{leading_integer, Canvas, CoreError, Element, ElementKind, PropertySchema, Result};

pub const TEXT_ALIGN_OPTIONS: [&str; 4] = ["left", "center", "right", "justify"];
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Content,
    FontSize,
    Color,
    TextAlign,
    ImageUrl,
    ImageAlt,
    Width,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::Content => "content",
            FormField::FontSize => "fontSize",
            FormField::Color => "color",
            FormField::TextAlign => "textAlign",
            FormField::ImageUrl => "imageUrl",
            FormField::ImageAlt => "imageAlt",
            FormField::Width => "width",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Content => "Text",
            FormField::FontSize => "Font Size (px)",
            FormField::Color => "Color",
            FormField::TextAlign => "Alignment",
            FormField::ImageUrl => "Image URL",
            FormField::ImageAlt => "Alt Text",
            FormField::Width => "Width (%)",
        }
    }
}

impl PropertySchema {
    pub fn fields(self) -> &'static [FormField] {
        match self {
            PropertySchema::Text => &[
                FormField::Content,
                FormField::FontSize,
                FormField::Color,
                FormField::TextAlign,
            ],
            PropertySchema::Image => &[FormField::ImageUrl, FormField::ImageAlt, FormField::Width],
            PropertySchema::None => &[],
        }
    }
}

/// Values held by the property form. `None` means "not part of this edit".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub content: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub text_align: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub width: Option<u32>,
}

impl FormValues {
    /// Display string for an input bound to `field`.
    pub fn get(&self, field: FormField) -> Option<String> {
        match field {
            FormField::Content => self.content.clone(),
            FormField::FontSize => self.font_size.map(|n| n.to_string()),
            FormField::Color => self.color.clone(),
            FormField::TextAlign => self.text_align.clone(),
            FormField::ImageUrl => self.image_url.clone(),
            FormField::ImageAlt => self.image_alt.clone(),
            FormField::Width => self.width.map(|n| n.to_string()),
        }
    }

    /// Sets a field from raw input text. Numeric fields must parse.
    pub fn set(&mut self, field: FormField, raw: &str) -> Result<()> {
        match field {
            FormField::Content => self.content = Some(raw.to_string()),
            FormField::FontSize => self.font_size = Some(parse_number(field, raw)?),
            FormField::Color => self.color = Some(raw.to_string()),
            FormField::TextAlign => self.text_align = Some(raw.to_string()),
            FormField::ImageUrl => self.image_url = Some(raw.to_string()),
            FormField::ImageAlt => self.image_alt = Some(raw.to_string()),
            FormField::Width => self.width = Some(parse_number(field, raw)?),
        }
        Ok(())
    }

    pub fn single(field: FormField, raw: &str) -> Result<Self> {
        let mut values = Self::default();
        values.set(field, raw)?;
        Ok(values)
    }
}

fn parse_number(field: FormField, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidNumber { field: field.key(), value: raw.to_string() });
    }
    leading_integer(trimmed).ok_or_else(|| CoreError::InvalidNumber {
        field: field.key(),
        value: raw.to_string(),
    })
}

/// Form values reflecting what the canvas currently shows for `element`.
pub fn load(element: &Element) -> FormValues {
    let spec = element.kind.spec();
    let props = &element.properties;

    match spec.schema {
        PropertySchema::Text => FormValues {
            content: Some(element.display_content().to_string()),
            font_size: Some(props.font_size.unwrap_or(spec.rendered_font_size)),
            color: Some(props.color.clone().unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string())),
            text_align: Some(props.text_align.clone().unwrap_or_else(|| "left".to_string())),
            ..FormValues::default()
        },
        PropertySchema::Image => FormValues {
            image_url: Some(image_source(element).to_string()),
            image_alt: Some(image_alt(element).to_string()),
            width: Some(props.width.unwrap_or(100)),
            ..FormValues::default()
        },
        PropertySchema::None => FormValues::default(),
    }
}

/// Writes every recognized, present field of `form` into `element`.
/// Returns whether anything changed.
pub fn apply(form: &FormValues, element: &mut Element) -> bool {
    let schema = element.kind.spec().schema;
    let before = element.clone();
    let props = &mut element.properties;

    if schema == PropertySchema::Text {
        if let Some(content) = &form.content {
            element.content = content.clone();
        }
        if let Some(size) = form.font_size {
            props.font_size = Some(size);
        }
        if let Some(color) = &form.color {
            props.color = Some(color.clone());
        }
        if let Some(align) = &form.text_align {
            props.text_align = Some(align.clone());
        }
    } else if schema == PropertySchema::Image {
        if let Some(url) = &form.image_url {
            props.image_url = Some(url.clone());
        }
        if let Some(alt) = &form.image_alt {
            props.image_alt = Some(alt.clone());
        }
        if let Some(width) = form.width {
            props.width = Some(width);
        }
    }

    *element != before
}

/// Applies one raw field edit to the selected element of `canvas`.
pub fn commit(canvas: &mut Canvas, field: FormField, raw: &str) -> Result<bool> {
    let form = FormValues::single(field, raw)?;
    Ok(match canvas.selected_element_mut() {
        Some(element) => apply(&form, element),
        None => false,
    })
}

/// What the properties panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPanel {
    NoSelection,
    NotEditable { index: usize, kind: ElementKind },
    Fields { index: usize, schema: PropertySchema, values: FormValues },
}

impl PropertyPanel {
    pub const EMPTY_MESSAGE: &'static str = "Select an element to edit its properties";
    pub const NOT_EDITABLE_MESSAGE: &'static str = "More properties coming soon.";

    /// Rebuilt from scratch on every selection change so no field of a
    /// previous element survives.
    pub fn for_canvas(canvas: &Canvas) -> Self {
        let Some(index) = canvas.selected() else {
            return PropertyPanel::NoSelection;
        };
        let Some(element) = canvas.get(index) else {
            return PropertyPanel::NoSelection;
        };
        match element.kind.spec().schema {
            PropertySchema::None => PropertyPanel::NotEditable { index, kind: element.kind },
            schema => PropertyPanel::Fields { index, schema, values: load(element) },
        }
    }
}
