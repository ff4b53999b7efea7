use routekit_core::{Cell, NoRouteReason, Point};
use routekit_router::astar::{find_path, GridSearch, SearchConfig};
use routekit_router::grid::Grid;
use routekit_router::proximity::ProximityField;

fn open_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(Point::new(0.0, 0.0), 10.0, rows, cols)
}

fn assert_connected(grid: &Grid, path: &[Cell]) {
    for w in path.windows(2) {
        assert_eq!(w[0].chebyshev_distance(&w[1]), 1, "{:?} -> {:?}", w[0], w[1]);
        assert!(!grid.is_blocked(w[1]));
        if w[0].row != w[1].row && w[0].col != w[1].col {
            assert!(!grid.is_blocked(Cell::new(w[0].row, w[1].col)));
            assert!(!grid.is_blocked(Cell::new(w[1].row, w[0].col)));
        }
    }
}

#[test]
fn test_serpentine_maze_is_solved() {
    let mut grid = open_grid(11, 11);
    for row in [2, 6] {
        for col in 0..10 {
            grid.block(Cell::new(row, col));
        }
    }
    for col in 1..11 {
        grid.block(Cell::new(4, col));
        grid.block(Cell::new(8, col));
    }

    let start = Cell::new(0, 0);
    let end = Cell::new(10, 0);
    let path = find_path(&mut grid, None, start, end, &SearchConfig::default()).unwrap();

    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    assert_connected(&grid, &path);
}

#[test]
fn test_maze_with_tiny_budget_fails_cleanly() {
    let mut grid = open_grid(11, 11);
    for row in [2, 6] {
        for col in 0..10 {
            grid.block(Cell::new(row, col));
        }
    }
    let config = SearchConfig::default().with_max_expansions(5);
    let mut search = GridSearch::new(&mut grid, None, config);
    let result = search.find_path(Cell::new(0, 0), Cell::new(10, 0));

    assert_eq!(result, Err(NoRouteReason::ExpansionCapReached { cap: 5 }));
    assert_eq!(search.expansions(), 5);
}

#[test]
fn test_search_is_deterministic() {
    let mut a = open_grid(20, 20);
    let mut b = open_grid(20, 20);
    for grid in [&mut a, &mut b] {
        for row in 3..17 {
            grid.block(Cell::new(row, 10));
        }
    }
    let config = SearchConfig::default();
    let first = find_path(&mut a, None, Cell::new(10, 0), Cell::new(10, 19), &config);
    let second = find_path(&mut b, None, Cell::new(10, 0), Cell::new(10, 19), &config);
    assert_eq!(first, second);
}

#[test]
fn test_proximity_field_keeps_path_valid() {
    let mut grid = open_grid(15, 15);
    for col in 3..12 {
        grid.block(Cell::new(7, col));
    }
    let field = ProximityField::build(&grid, 3);
    let config = SearchConfig::default().with_proximity_weight(5.0);

    let path = find_path(&mut grid, Some(&field), Cell::new(0, 7), Cell::new(14, 7), &config)
        .unwrap();
    assert_connected(&grid, &path);
    assert!(path.iter().all(|c| !grid.is_blocked(*c)));
}
