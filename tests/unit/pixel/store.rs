//! Tests for the channel-map pixel store

#[cfg(test)]
mod tests {
    use cellstat::CellError;
    use cellstat::pixel::source::{ChannelValues, ImageSnapshot, PixelSource};
    use cellstat::pixel::store::PixelStore;

    // Tests a fresh store reports 255 for every declared channel
    // Verified by initializing pixels with zero values
    #[test]
    fn test_new_store_reads_full_intensity() {
        let store = PixelStore::new(3, 2, &["r", "g", "b"]).unwrap();

        let values = store.channel_values(2, 1).unwrap();
        assert_eq!(values, ChannelValues::new().with("r", 255).with("g", 255).with("b", 255));
        assert!(store.raw_pixel(2, 1).unwrap().is_empty());
    }

    // Tests reads report exactly the declared channels
    // Verified by returning the raw pixel entry
    #[test]
    fn test_reads_filter_to_declared_channels() {
        let pixels = vec![ChannelValues::new().with("r", 7).with("extra", 9)];
        let store =
            PixelStore::from_snapshot(ImageSnapshot::new(1, 1, &["r", "g"], pixels)).unwrap();

        let values = store.channel_values(0, 0).unwrap();
        assert_eq!(values.get("r"), Some(7));
        assert_eq!(values.get("g"), Some(255));
        assert_eq!(values.get("extra"), None);
    }

    // Tests construction rejects a mismatched pixel count and an empty channel list
    #[test]
    fn test_from_snapshot_validation() {
        let short = ImageSnapshot::new(2, 2, &["r"], vec![ChannelValues::new()]);
        assert!(matches!(
            PixelStore::from_snapshot(short),
            Err(CellError::InvalidSourceData { .. })
        ));

        let no_channels: &[&str] = &[];
        assert!(matches!(
            PixelStore::new(1, 1, no_channels),
            Err(CellError::InvalidArgument { parameter: "channels", .. })
        ));
    }

    // Tests writes merge into the pixel and are visible to later reads
    // Verified by replacing the pixel entry instead of merging
    #[test]
    fn test_set_merges_and_chains() {
        let mut store = PixelStore::new(2, 2, &["r", "g", "b"]).unwrap();

        store
            .set_channel_values_for_pixel(1, 0, &ChannelValues::new().with("r", 10))
            .unwrap()
            .set_channel_values_for_pixel(1, 0, &ChannelValues::new().with("g", 20))
            .unwrap();

        let values = store.channel_values(1, 0).unwrap();
        assert_eq!(values.red(), 10);
        assert_eq!(values.green(), 20);
        assert_eq!(values.blue(), 255);
    }

    // Tests writes to undeclared channels are rejected and leave the pixel untouched
    // Verified by merging the values before checking channel names
    #[test]
    fn test_set_rejects_undeclared_channel() {
        let mut store = PixelStore::new(1, 1, &["r", "g"]).unwrap();

        let bad = ChannelValues::new().with("r", 3).with("depth", 1);
        assert!(matches!(
            store.set_channel_values_for_pixel(0, 0, &bad),
            Err(CellError::InvalidArgument { parameter: "channel", .. })
        ));
        assert!(store.raw_pixel(0, 0).unwrap().is_empty());
        assert_eq!(store.channel_value(0, 0, "r").unwrap(), 255);
    }

    // Tests boundary coordinates for reads and writes
    // Verified by accepting x == width
    #[test]
    fn test_read_and_write_bounds() {
        let mut store = PixelStore::new(3, 3, &["r"]).unwrap();

        assert!(store.channel_values(0, 0).is_ok());
        assert!(store.channel_values(2, 2).is_ok());
        for x in [-1, 3, 4] {
            assert!(matches!(
                store.channel_values(x, 0),
                Err(CellError::OutOfBounds { .. })
            ));
        }
        assert!(
            store
                .set_channel_values_for_pixel(3, 0, &ChannelValues::new())
                .is_err()
        );
    }

    // Tests the snapshot handed in comes back untouched
    #[test]
    fn test_into_snapshot_returns_construction_data() {
        let snapshot = ImageSnapshot::new(
            2,
            1,
            &["r", "g", "b", "a"],
            vec![ChannelValues::rgba(1, 2, 3, 4), ChannelValues::new()],
        );

        let store = PixelStore::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(store.into_snapshot(), snapshot);
    }
}
