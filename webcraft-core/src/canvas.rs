/*
    WebCraft - browser-based website builder
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::{Element, ElementKind};

/// The ordered element sequence of the open visual project and the
/// (at most one) selected position.
///
/// Positions are the only identity elements have. Every operation on a
/// missing index, or a move past either end, is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    elements: Vec<Element>,
    selected: Option<usize>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|idx| self.elements.get(idx))
    }

    pub(crate) fn selected_element_mut(&mut self) -> Option<&mut Element> {
        self.selected.and_then(|idx| self.elements.get_mut(idx))
    }

    /// Replaces the whole sequence with persisted elements.
    pub fn hydrate(&mut self, elements: Vec<Element>) {
        tracing::debug!(count = elements.len(), "hydrating canvas");
        self.elements = elements;
        self.selected = None;
    }

    /// Drops a new element of `kind` at the end and selects it.
    pub fn append(&mut self, kind: ElementKind) -> usize {
        self.elements.push(Element::new(kind));
        let idx = self.elements.len() - 1;
        self.selected = Some(idx);
        idx
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.elements.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.elements.len() {
            return false;
        }
        self.swap(index, index - 1);
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.elements.len() {
            return false;
        }
        self.swap(index, index + 1);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
        self.selected = match self.selected {
            Some(s) if s == a => Some(b),
            Some(s) if s == b => Some(a),
            other => other,
        };
    }

    /// Removes the element at `index`. Deleting the selected element clears
    /// the selection; a selection further down keeps pointing at its element.
    pub fn delete(&mut self, index: usize) -> Option<Element> {
        if index >= self.elements.len() {
            return None;
        }
        let removed = self.elements.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(removed)
    }

    /// Direct text edit of an element's content.
    pub fn set_content(&mut self, index: usize, content: impl Into<String>) -> bool {
        match self.elements.get_mut(index) {
            Some(element) => {
                element.content = content.into();
                true
            }
            None => false,
        }
    }
}
