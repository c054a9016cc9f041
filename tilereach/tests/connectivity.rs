//! End-to-end tests over a real tile directory on disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;
use tilereach::boundary::trace_region;
use tilereach::coloring::{ExclusionPolicy, NO_COLOR};
use tilereach::connectivity::{ConnectivityError, ConnectivityMap, PathLocation};
use tilereach::geo::PointLL;
use tilereach::hierarchy::{LevelId, TileGrid, TileHierarchy, TileId};
use tilereach::universe::{tile_path, TileDirectory, TileUniverse};

const HIGHWAY: LevelId = LevelId::Numbered(0);
const ARTERIAL: LevelId = LevelId::Numbered(1);
const LOCAL: LevelId = LevelId::Numbered(2);

/// Write an empty tile file for each tile, compressed for odd indices.
fn write_tiles(root: &Path, tiles: &[TileId]) {
    let hierarchy = TileHierarchy::standard();
    for &tile in tiles {
        let mut path = root.join(tile_path(&hierarchy, tile).unwrap());
        if tile.index % 2 == 1 {
            path.set_extension("gph.gz");
        }
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
    }
}

fn grid(level: LevelId) -> TileGrid {
    TileHierarchy::standard().get(level).unwrap().grid
}

/// Index of the tile `(d_row, d_col)` away from the tile containing `(lon, lat)`.
fn offset(level: LevelId, lon: f64, lat: f64, d_row: u32, d_col: u32) -> u32 {
    let grid = grid(level);
    let base = grid.tile_containing(PointLL::new(lon, lat)).unwrap();
    let (row, col) = grid.row_col(base);
    grid.index(row + d_row, col + d_col)
}

fn open(tiles: &[TileId]) -> (TempDir, ConnectivityMap) {
    let temp = TempDir::new().unwrap();
    write_tiles(temp.path(), tiles);
    let map = ConnectivityMap::open(
        temp.path(),
        TileHierarchy::standard(),
        &ExclusionPolicy::default(),
    )
    .unwrap();
    (temp, map)
}

#[test]
fn test_directory_scan_finds_every_tile() {
    let tiles = [
        TileId::new(HIGHWAY, 3015),
        TileId::new(ARTERIAL, 37740),
        TileId::new(LOCAL, 563449),
        TileId::new(LOCAL, 563450),
        TileId::new(LevelId::Transit, 563451),
    ];
    let temp = TempDir::new().unwrap();
    write_tiles(temp.path(), &tiles);
    // Not part of the tile layout.
    fs::write(temp.path().join("README"), b"tiles").unwrap();
    fs::create_dir_all(temp.path().join("2").join("abc")).unwrap();

    let universe = TileDirectory::open(temp.path(), TileHierarchy::standard()).unwrap();
    assert_eq!(universe.len(), tiles.len());
    assert_eq!(
        universe.tiles(LOCAL).into_iter().collect::<Vec<_>>(),
        vec![563449, 563450]
    );
    assert!(universe.tiles(LevelId::Transit).contains(&563451));
}

#[test]
fn test_full_block_is_one_rectangle() {
    let tiles: Vec<TileId> = [(0, 0), (0, 1), (1, 0), (1, 1)]
        .iter()
        .map(|&(r, c)| TileId::new(LOCAL, offset(LOCAL, 2.1, 48.1, r, c)))
        .collect();
    let (_temp, map) = open(&tiles);

    for tile in &tiles {
        assert_eq!(map.get_color(*tile), 1, "tile {} should be color 1", tile);
    }

    let regions = map.regions(LOCAL).unwrap();
    assert_eq!(regions.len(), 1);
    let polygons = trace_region(&regions[0].tiles, &grid(LOCAL));
    assert_eq!(polygons.len(), 1);
    assert!(polygons[0].holes().is_empty());
    assert_eq!(polygons[0].outer().len(), 5, "four corners plus closing vertex");
    assert!((polygons[0].area() - 0.25).abs() < 1e-9);

    let corners = [(2.0, 48.0), (2.5, 48.0), (2.5, 48.5), (2.0, 48.5)];
    for (lon, lat) in corners {
        assert!(
            polygons[0].outer().contains(&PointLL::new(lon, lat)),
            "missing corner {}, {}",
            lon,
            lat
        );
    }
}

#[test]
fn test_exclusion_splits_row() {
    // Darien Gap tiles on the local level.
    let tiles: Vec<TileId> = (563449..563453).map(|i| TileId::new(LOCAL, i)).collect();
    let (_temp, map) = open(&tiles);

    let colors: Vec<u32> = tiles.iter().map(|&t| map.get_color(t)).collect();
    assert_eq!(colors, vec![1, 2, 3, 3]);
    assert!(!map.is_connected(tiles[0], tiles[1]));
    assert!(map.is_connected(tiles[2], tiles[3]));
}

#[test]
fn test_exclusions_only_apply_to_listed_levels() {
    let arterial_pair = [
        TileId::new(ARTERIAL, offset(ARTERIAL, -77.5, 7.5, 0, 0)),
        TileId::new(ARTERIAL, offset(ARTERIAL, -77.5, 7.5, 0, 1)),
    ];
    let transit_pair = [
        TileId::new(LevelId::Transit, 563449),
        TileId::new(LevelId::Transit, 563450),
    ];
    let tiles: Vec<TileId> = arterial_pair.iter().chain(&transit_pair).copied().collect();
    let (_temp, map) = open(&tiles);

    assert!(map.is_connected(arterial_pair[0], arterial_pair[1]));
    assert!(!map.is_connected(transit_pair[0], transit_pair[1]));
}

#[test]
fn test_unknown_level_is_rejected() {
    let (_temp, map) = open(&[TileId::new(HIGHWAY, 0)]);

    let err = map.to_geojson(LevelId::Numbered(3)).unwrap_err();
    assert!(matches!(err, ConnectivityError::InvalidLevel { .. }));
    assert!(err.to_string().contains("level not found"));

    let err = map.resolve_level(4).unwrap_err();
    assert!(matches!(err, ConnectivityError::InvalidLevel { .. }));
    assert_eq!(map.resolve_level(3).unwrap(), LevelId::Transit);
}

#[test]
fn test_ring_with_missing_center_has_hole() {
    let tiles: Vec<TileId> = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .filter(|&cell| cell != (1, 1))
        .map(|(r, c)| TileId::new(HIGHWAY, offset(HIGHWAY, 8.0, 46.0, r, c)))
        .collect();
    let (_temp, map) = open(&tiles);

    let stats = map.level_stats();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].colors, 1);
    assert_eq!(stats[0].largest_region, 8);

    let document: Value = serde_json::from_str(&map.to_geojson(HIGHWAY).unwrap()).unwrap();
    let features = document["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    let rings = features[0]["geometry"]["coordinates"].as_array().unwrap();
    assert_eq!(rings.len(), 2, "outer ring plus one hole");

    let hole: Vec<(f64, f64)> = rings[1]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p[0].as_f64().unwrap(), p[1].as_f64().unwrap()))
        .collect();
    assert_eq!(hole.len(), 5);
    for corner in [(12.0, 50.0), (16.0, 50.0), (16.0, 54.0), (12.0, 54.0)] {
        assert!(hole.contains(&corner), "hole missing corner {:?}", corner);
    }
}

#[test]
fn test_radius_query_and_image() {
    let west = offset(ARTERIAL, 10.5, 45.5, 0, 0);
    let east = offset(ARTERIAL, 10.5, 45.5, 0, 2);
    let (_temp, map) = open(&[TileId::new(ARTERIAL, west), TileId::new(ARTERIAL, east)]);

    let center = PointLL::new(11.5, 45.5);
    assert!(map
        .get_colors(ARTERIAL, &PathLocation::at(center), 0.0)
        .is_empty());
    let nearby = map.get_colors(ARTERIAL, &PathLocation::at(center), 100_000.0);
    assert_eq!(nearby.len(), 2);

    let image = map.to_image(ARTERIAL).unwrap();
    assert_eq!(image.len(), 180 * 360);
    assert_eq!(image.iter().filter(|&&c| c != NO_COLOR).count(), 2);
    assert_ne!(image[west as usize], image[east as usize]);
}

#[test]
fn test_rebuild_gives_same_partition() {
    let tiles: Vec<TileId> = [(0, 0), (0, 1), (2, 0), (2, 5), (3, 5)]
        .iter()
        .map(|&(r, c)| TileId::new(LOCAL, offset(LOCAL, -3.0, 40.0, r, c)))
        .collect();
    let (temp, first) = open(&tiles);
    let second = ConnectivityMap::open(
        temp.path(),
        TileHierarchy::standard(),
        &ExclusionPolicy::default(),
    )
    .unwrap();

    for tile in &tiles {
        assert_eq!(first.get_color(*tile), second.get_color(*tile));
    }
    assert_eq!(first.to_geojson(LOCAL).unwrap(), second.to_geojson(LOCAL).unwrap());
}
