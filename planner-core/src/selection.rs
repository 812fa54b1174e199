//! The selected-sections registry.
//!
//! Each selected section gets a display color from a [`Palette`]. Palette
//! colors are reserved by one section at a time and released on removal;
//! once every palette color is taken, further sections share the palette's
//! overflow color.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Identified;
use crate::palette::Palette;

/// A selected section and the color it was assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry<T> {
    id: String,
    color: String,
    payload: T,
}

impl<T> SelectionEntry<T> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Outcome of [`SelectionRegistry::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    /// The section was added with this color
    Added(String),
    /// The section was removed and this color released
    Removed(String),
}

/// Sections the user has selected, keyed by their unique id.
///
/// Adding an id that is already present is a no-op that returns the
/// existing entry. Removing an unknown id is also a no-op.
#[derive(Debug, Clone)]
pub struct SelectionRegistry<T> {
    palette: Palette,
    entries: HashMap<String, SelectionEntry<T>>,
    /// Insertion order of `entries`, for stable display
    order: Vec<String>,
    /// One color per entry. Only the overflow color can repeat.
    in_use: Vec<String>,
}

impl<T: Identified> SelectionRegistry<T> {
    pub fn new(palette: Palette) -> Self {
        SelectionRegistry {
            palette,
            entries: HashMap::new(),
            order: Vec::new(),
            in_use: Vec::new(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Select a section, assigning it the first free palette color.
    pub fn add(&mut self, payload: T) -> &SelectionEntry<T> {
        let id = payload.id().to_string();

        if self.entries.contains_key(&id) {
            debug!(id = %id, "section already selected");
            return &self.entries[&id];
        }

        let color = self.palette.next_free(&self.in_use).to_string();
        debug!(id = %id, color = %color, "selected section");

        self.in_use.push(color.clone());
        self.order.push(id.clone());
        self.entries.entry(id.clone()).or_insert(SelectionEntry {
            id,
            color,
            payload,
        })
    }

    /// Deselect a section, releasing one reservation of its color.
    pub fn remove(&mut self, id: &str) -> Option<SelectionEntry<T>> {
        let Some(entry) = self.entries.remove(id) else {
            debug!(id = %id, "section not selected, nothing to remove");
            return None;
        };

        if let Some(pos) = self.in_use.iter().position(|c| *c == entry.color) {
            self.in_use.remove(pos);
        }
        self.order.retain(|o| o != id);

        debug!(id = %id, color = %entry.color, "deselected section");
        Some(entry)
    }

    /// Add the section if absent, remove it if present.
    pub fn toggle(&mut self, payload: T) -> Toggled {
        match self.remove(payload.id()) {
            Some(entry) => Toggled::Removed(entry.color),
            None => Toggled::Added(self.add(payload).color.clone()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&SelectionEntry<T>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected entries in the order they were added.
    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry<T>> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Colors currently reserved, in assignment order.
    pub fn colors_in_use(&self) -> &[String] {
        &self.in_use
    }

    /// Palette colors not reserved by any entry.
    pub fn available_colors(&self) -> Vec<&str> {
        self.palette
            .colors()
            .iter()
            .filter(|c| !self.in_use.contains(*c))
            .map(String::as_str)
            .collect()
    }
}
