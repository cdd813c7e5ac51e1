//! Display surface abstraction
//!
//! The receiver draws into a small tree of named visual elements: a pair
//! of text elements for the heading and the status line, and a grid of
//! colorable cells for the shared drawing board. The [`Screen`] trait is
//! that surface; [`HeadlessScreen`] is an in-memory implementation for
//! embedders without a real display and for driving the game in tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Background color of a drawing-grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    /// The resting color of an untouched cell
    #[default]
    Empty,
    /// The highlight color of a touched cell
    Selected,
}

/// A tree of named visual elements the receiver draws into
///
/// Element keys come from [`super::constants::display`] and from inbound
/// messages. Writes to keys a layout does not have are a no-op by
/// contract, since senders may reference cells that only exist in other
/// layouts.
pub trait Screen {
    /// Sets the text content of a named element.
    fn set_text(&self, key: &str, text: &str);

    /// Sets the background color of a single grid cell.
    fn set_cell_color(&self, key: &str, color: CellColor);

    /// Sets the background color of every grid cell.
    fn fill_cells(&self, color: CellColor);
}

/// An in-memory [`Screen`] with a fixed set of grid cells
///
/// Grid cells are fixed at construction, mirroring a real layout where
/// the cell table is part of the page, so cell writes to unknown keys
/// fall through silently. Text elements materialize on first write.
#[derive(Debug, Default)]
pub struct HeadlessScreen {
    texts: Mutex<HashMap<String, String>>,
    cells: Mutex<HashMap<String, CellColor>>,
}

impl HeadlessScreen {
    /// Creates a screen whose grid consists of the given cell keys, all
    /// in the resting color.
    pub fn with_cells<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            texts: Mutex::new(HashMap::new()),
            cells: Mutex::new(
                keys.into_iter()
                    .map(|key| (key.into(), CellColor::Empty))
                    .collect(),
            ),
        }
    }

    /// Returns the current text of an element, if it was ever written.
    pub fn text(&self, key: &str) -> Option<String> {
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Returns the current color of a grid cell, if the grid has it.
    pub fn cell(&self, key: &str) -> Option<CellColor> {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    /// Returns a snapshot of the whole grid.
    pub fn cells(&self) -> HashMap<String, CellColor> {
        self.cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Screen for HeadlessScreen {
    fn set_text(&self, key: &str, text: &str) {
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), text.to_owned());
    }

    fn set_cell_color(&self, key: &str, color: CellColor) {
        if let Some(cell) = self
            .cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(key)
        {
            *cell = color;
        }
    }

    fn fill_cells(&self, color: CellColor) {
        for cell in self
            .cells
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values_mut()
        {
            *cell = color;
        }
    }
}
