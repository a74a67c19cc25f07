use profloc::{ProfLocError, Volume4, VolumeView};

#[test]
fn volume_rejects_length_mismatch() {
    let err = Volume4::from_vec(vec![0.0f64; 10], [2, 1, 2, 3]).err().unwrap();
    assert_eq!(err, ProfLocError::BufferSizeMismatch { needed: 12, got: 10 });
}

#[test]
fn volume_rejects_zero_axis() {
    let err = Volume4::from_vec(Vec::<f64>::new(), [0, 1, 3, 3]).err().unwrap();
    assert_eq!(err, ProfLocError::InvalidInput("zero-length array axis"));
}

#[test]
fn zone_slices_are_zero_copy_blocks() {
    let data: Vec<f64> = (0..36).map(f64::from).collect();
    let vol = Volume4::from_vec(data, [2, 2, 3, 3]).unwrap();
    assert_eq!(vol.shape(), [2, 2, 3, 3]);
    assert_eq!(vol.zones(), 2);
    assert_eq!(vol.zone_shape(), [2, 3, 3]);
    assert_eq!(vol.zone_len(), 18);

    let z0 = vol.zone(0).unwrap();
    let z1 = vol.zone(1).unwrap();
    assert_eq!(z0.shape(), [2, 3, 3]);
    assert_eq!(z0.as_slice(), &vol.as_slice()[..18]);
    assert_eq!(z1.as_slice(), &vol.as_slice()[18..]);
    assert_eq!(z1.get(0, 0, 0).copied(), Some(18.0));
    assert_eq!(z1.get(1, 2, 2).copied(), Some(35.0));
    assert!(z1.get(2, 0, 0).is_none());
}

#[test]
fn zone_index_is_bounds_checked() {
    let vol = Volume4::from_vec(vec![true; 9], [1, 1, 3, 3]).unwrap();
    let err = vol.zone(1).err().unwrap();
    assert_eq!(err, ProfLocError::IndexOutOfRange { index: 1, zones: 1 });
}

#[test]
fn view_indexing_matches_storage_order() {
    let data: Vec<f64> = (0..12).map(f64::from).collect();
    let view = VolumeView::from_slice(&data, [2, 2, 3]).unwrap();
    assert_eq!(view.len(), 12);
    // Depth-major, then rows, then columns.
    assert_eq!(view.get(0, 1, 2).copied(), Some(5.0));
    assert_eq!(view.get(1, 0, 0).copied(), Some(6.0));
}
