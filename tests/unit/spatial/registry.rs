//! Tests for cell registry bookkeeping

#[cfg(test)]
mod tests {
    use cellstat::analysis::cell::Cell;
    use cellstat::pixel::store::PixelStore;
    use cellstat::spatial::partition::CellSize;
    use cellstat::spatial::registry::CellRegistry;

    fn blank(width: u32, height: u32) -> PixelStore {
        PixelStore::new(width, height, &["r", "g", "b"]).unwrap()
    }

    // Tests lookup by origin returns the first inserted match
    // Verified by searching from the back
    #[test]
    fn test_get_cell_returns_first_match() {
        let store = blank(10, 10);
        let mut registry = CellRegistry::new();

        let first = registry.add_cell(Cell::new(2, 2, 3, 3, &store));
        let second = registry.add_cell(Cell::new(2, 2, 5, 5, &store));

        assert_ne!(first, second);
        assert_eq!(registry.get_cell(2, 2).map(Cell::width), Some(3));
        assert_eq!(registry.get_cell_id(2, 2), Some(first));
        assert!(registry.get_cell(3, 3).is_none());
    }

    // Tests removal by handle leaves other cells at the same origin
    // Verified by removing every cell matching the origin
    #[test]
    fn test_remove_by_id() {
        let store = blank(10, 10);
        let mut registry = CellRegistry::new();

        let first = registry.add_cell(Cell::new(0, 0, 2, 2, &store));
        let second = registry.add_cell(Cell::new(0, 0, 4, 4, &store));

        let removed = registry.remove_cell(first).unwrap();
        assert_eq!(removed.width(), 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_cell_id(0, 0), Some(second));
        assert!(registry.get_by_id(first).is_none());
        assert!(registry.remove_cell(first).is_none());
    }

    // Tests handles are never reused after removal
    #[test]
    fn test_ids_not_reused() {
        let store = blank(4, 4);
        let mut registry = CellRegistry::new();

        let first = registry.add_cell(Cell::new(0, 0, 1, 1, &store));
        registry.remove_cell(first);
        let second = registry.add_cell(Cell::new(0, 0, 1, 1, &store));

        assert!(second > first);
    }

    // Tests partitioning is additive until the registry is cleared
    // Verified by clearing inside partition_cells_from_image
    #[test]
    fn test_partition_is_additive() {
        let store = blank(20, 20);
        let mut registry = CellRegistry::new();

        let count = registry
            .partition_cells_from_image(&store, CellSize::new(10, 10))
            .unwrap()
            .len();
        assert_eq!(count, 4);

        registry
            .partition_cells_from_image(&store, CellSize::new(10, 10))
            .unwrap();
        assert_eq!(registry.len(), 8);

        registry.clear_cells();
        assert!(registry.is_empty());
        assert!(registry.get_cell(0, 0).is_none());
    }

    // Tests entries keep insertion order and pair each cell with its handle
    #[test]
    fn test_entries_in_insertion_order() {
        let store = blank(20, 20);
        let mut registry = CellRegistry::new();
        registry
            .partition_cells_from_image(&store, CellSize::new(10, 10))
            .unwrap();

        let origins: Vec<(u32, u32)> = registry.cells().map(|c| (c.x(), c.y())).collect();
        assert_eq!(origins, vec![(0, 0), (10, 0), (0, 10), (10, 10)]);

        for entry in registry.entries() {
            let stored = registry.get_by_id(entry.id).unwrap();
            assert!(stored.same_view(&entry.cell));
        }
    }

    // Tests a failed partition leaves the registry unchanged
    #[test]
    fn test_failed_partition_adds_nothing() {
        let store = blank(20, 20);
        let mut registry = CellRegistry::new();

        assert!(
            registry
                .partition_cells_from_image(&store, CellSize::new(0, 10))
                .is_err()
        );
        assert!(registry.is_empty());
    }
}
