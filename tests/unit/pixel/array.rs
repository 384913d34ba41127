//! Tests for the dense ndarray surface backend

#[cfg(test)]
mod tests {
    use cellstat::CellError;
    use cellstat::pixel::array::ArrayStore;
    use cellstat::pixel::source::{ChannelValues, ImageSnapshot, PixelSource};
    use ndarray::Array3;

    // Tests axis order is (row, column, channel) with width on the column axis
    // Verified by swapping rows and columns in dims
    #[test]
    fn test_dimensions_and_axis_order() {
        let mut data = Array3::<u8>::zeros((2, 3, 1));
        if let Some(value) = data.get_mut((1, 2, 0)) {
            *value = 42;
        }
        let store = ArrayStore::new(data, &["luma"]).unwrap();

        assert_eq!((store.width(), store.height()), (3, 2));
        assert_eq!(store.channel_value(2, 1, "luma").unwrap(), 42);
        assert!(matches!(
            store.channel_values(1, 2),
            Err(CellError::OutOfBounds { .. })
        ));
    }

    // Tests the channel axis must match the channel names
    #[test]
    fn test_new_rejects_depth_mismatch() {
        let data = Array3::<u8>::zeros((2, 2, 3));

        assert!(matches!(
            ArrayStore::new(data, &["r", "g"]),
            Err(CellError::InvalidArgument { .. })
        ));
    }

    // Tests snapshot packing fills absent channels with 255
    // Verified by initializing the array with zeros
    #[test]
    fn test_from_snapshot_packs_row_major() {
        let snapshot = ImageSnapshot::new(
            2,
            2,
            &["r", "g"],
            vec![
                ChannelValues::new().with("r", 1),
                ChannelValues::new().with("r", 2).with("g", 20),
                ChannelValues::new().with("r", 3),
                ChannelValues::new().with("r", 4).with("g", 40),
            ],
        );

        let store = ArrayStore::from_snapshot(&snapshot).unwrap();
        assert_eq!(store.data().get((1, 0, 0)), Some(&3));
        assert_eq!(store.data().get((0, 0, 1)), Some(&255));
        assert_eq!(store.snapshot().unwrap().pixels.len(), 4);
        assert_eq!(store.channel_value(1, 1, "g").unwrap(), 40);
    }

    // Tests a write with an unknown channel leaves the pixel untouched
    // Verified by writing each channel as it is resolved
    #[test]
    fn test_set_is_all_or_nothing() {
        let mut store = ArrayStore::new(Array3::<u8>::zeros((1, 1, 2)), &["r", "g"]).unwrap();

        let bad = ChannelValues::new().with("r", 9).with("z", 1);
        assert!(store.set_channel_values_for_pixel(0, 0, &bad).is_err());
        assert_eq!(store.channel_value(0, 0, "r").unwrap(), 0);

        store
            .set_channel_values_for_pixel(0, 0, &ChannelValues::new().with("g", 7))
            .unwrap();
        assert_eq!(store.channel_values(0, 0).unwrap(), ChannelValues::new().with("r", 0).with("g", 7));
    }
}
