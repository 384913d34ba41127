//! Insertion-ordered collection of cells for one partitioning session

use log::debug;

use crate::analysis::cell::Cell;
use crate::io::error::Result;
use crate::pixel::source::PixelSource;
use crate::spatial::partition::{CellSize, partition_cells};

/// Identity handle assigned to a cell when it enters a registry
///
/// Handles are never reused within one registry, so two cells with the same
/// origin stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u64);

/// A cell together with its registry handle
#[derive(Debug)]
pub struct RegisteredCell<'a, S: PixelSource + ?Sized> {
    /// Handle used for removal
    pub id: CellId,
    /// The stored cell
    pub cell: Cell<'a, S>,
}

/// Owns the cells of one partitioning session
///
/// Constructed and passed explicitly. Duplicate origins are kept; lookup by
/// coordinate returns the earliest inserted match.
#[derive(Debug)]
pub struct CellRegistry<'a, S: PixelSource + ?Sized> {
    entries: Vec<RegisteredCell<'a, S>>,
    next_id: u64,
}

impl<S: PixelSource + ?Sized> Default for CellRegistry<'_, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<'a, S: PixelSource + ?Sized> CellRegistry<'a, S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell and return its handle
    pub fn add_cell(&mut self, cell: Cell<'a, S>) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        self.entries.push(RegisteredCell { id, cell });
        id
    }

    /// First cell (in insertion order) whose origin is `(x, y)`
    pub fn get_cell(&self, x: u32, y: u32) -> Option<&Cell<'a, S>> {
        self.find(x, y).map(|entry| &entry.cell)
    }

    /// Handle of the cell [`CellRegistry::get_cell`] would return
    pub fn get_cell_id(&self, x: u32, y: u32) -> Option<CellId> {
        self.find(x, y).map(|entry| entry.id)
    }

    /// Cell stored under `id`
    pub fn get_by_id(&self, id: CellId) -> Option<&Cell<'a, S>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.cell)
    }

    /// Remove exactly the cell stored under `id`
    ///
    /// Other cells sharing its origin stay in place.
    pub fn remove_cell(&mut self, id: CellId) -> Option<Cell<'a, S>> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(index);
        debug!(
            "CellRegistry: removed cell {:?} at ({}, {})",
            id,
            removed.cell.x(),
            removed.cell.y()
        );
        Some(removed.cell)
    }

    /// Drop every stored cell
    pub fn clear_cells(&mut self) {
        self.entries.clear();
    }

    /// Number of stored cells
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no cell is stored
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored cells in insertion order
    pub fn cells(&self) -> impl Iterator<Item = &Cell<'a, S>> + '_ {
        self.entries.iter().map(|entry| &entry.cell)
    }

    /// Stored cells with their handles, in insertion order
    pub fn entries(&self) -> &[RegisteredCell<'a, S>] {
        &self.entries
    }

    /// Partition `source` and append every retained cell
    ///
    /// Partitioning is additive: cells from earlier calls stay unless
    /// [`CellRegistry::clear_cells`] runs first. Returns the full collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for zero cell dimensions and propagates
    /// read failures from the partitioner
    pub fn partition_cells_from_image(
        &mut self,
        source: &'a S,
        size: CellSize,
    ) -> Result<&[RegisteredCell<'a, S>]> {
        let cells = partition_cells(source, size)?;
        let added = cells.len();
        for cell in cells {
            self.add_cell(cell);
        }
        debug!(
            "CellRegistry: added {added} cells, {} stored",
            self.entries.len()
        );
        Ok(&self.entries)
    }

    fn find(&self, x: u32, y: u32) -> Option<&RegisteredCell<'a, S>> {
        self.entries
            .iter()
            .find(|entry| entry.cell.x() == x && entry.cell.y() == y)
    }
}
