use inkmap_layout::MapConfig;
use inkmap_layout::worldmap::grid_offsets;

#[test]
fn grid_produces_one_offset_per_item_with_at_most_six_per_row() {
    let config = MapConfig::default();
    for count in 1..=20usize {
        let offsets = grid_offsets(&config, count);
        assert_eq!(offsets.len(), count);

        let mut per_row: std::collections::BTreeMap<i64, usize> = std::collections::BTreeMap::new();
        for p in &offsets {
            *per_row.entry(p.y.round() as i64).or_default() += 1;
        }
        for (_, row_len) in per_row {
            assert!(row_len <= 6, "count {count}: more than 6 items in a row");
        }
    }
}

#[test]
fn each_row_is_horizontally_centered() {
    let config = MapConfig::default();
    for count in [1usize, 4, 6, 7, 11, 13, 18] {
        let offsets = grid_offsets(&config, count);
        let mut rows: std::collections::BTreeMap<i64, Vec<f64>> = std::collections::BTreeMap::new();
        for p in &offsets {
            rows.entry((p.y * 10.0).round() as i64).or_default().push(p.x);
        }
        for (_, xs) in rows {
            let sum: f64 = xs.iter().sum();
            assert!(sum.abs() < 1e-9, "count {count}: row not centered, xs {xs:?}");
        }
    }
}

#[test]
fn single_row_of_five_spans_symmetric_offsets() {
    let config = MapConfig::default();
    let offsets = grid_offsets(&config, 5);
    let xs: Vec<f64> = offsets.iter().map(|p| p.x).collect();
    // row width 5*20 + 4*3 = 112; first slot center at -46, 23 apart.
    assert_eq!(xs, [-46.0, -23.0, 0.0, 23.0, 46.0]);
    assert!(offsets.iter().all(|p| p.y == -17.5));
}

#[test]
fn thirteen_items_split_into_rows_of_six_six_one() {
    let config = MapConfig::default();
    let offsets = grid_offsets(&config, 13);
    assert_eq!(offsets.len(), 13);

    // Three rows stacked from -52.5: full rows at -52.5 and -17.5, the
    // remainder at 17.5.
    let rows: Vec<f64> = vec![-52.5, -17.5, 17.5];
    for (i, p) in offsets.iter().enumerate() {
        assert_eq!(p.y, rows[i / 6], "item {i}");
    }

    // The last row centers its single item independently of the full rows.
    assert_eq!(offsets[12].x, 0.0);
    // Full rows start at -(6*20 + 5*3)/2 + 20/2 = -57.5.
    assert_eq!(offsets[0].x, -57.5);
    assert_eq!(offsets[6].x, -57.5);
    assert_eq!(offsets[5].x, 57.5);
}
