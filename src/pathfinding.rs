use crate::cell::Cell;
use crate::grid::{Grid, ORTHOGONAL};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

type Pos = (i32, i32);

/// Shortest walkable route from `start` to `goal`, both ends included.
///
/// A* over path cells with a Manhattan estimate. `None` when either end is
/// a wall or the two are not connected.
pub fn shortest_route(grid: &Grid, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    puffin::profile_function!();
    if !grid.is_walkable(start.0, start.1) || !grid.is_walkable(goal.0, goal.1) {
        return None;
    }

    // Min-heap on estimated total cost
    let mut frontier = BinaryHeap::from([Reverse((manhattan(start, goal), 0, start))]);
    let mut parent: HashMap<Pos, Pos> = HashMap::new();
    let mut cost: HashMap<Pos, i32> = HashMap::from([(start, 0)]);

    while let Some(Reverse((_, steps, pos))) = frontier.pop() {
        if pos == goal {
            return Some(walk_back(&parent, goal));
        }
        if cost.get(&pos).is_some_and(|&best| steps > best) {
            continue;
        }

        for (dx, dy) in ORTHOGONAL {
            let next = (pos.0 + dx, pos.1 + dy);
            if !grid.is_walkable(next.0, next.1) {
                continue;
            }
            let reached = steps + 1;
            if cost.get(&next).is_some_and(|&best| best <= reached) {
                continue;
            }
            cost.insert(next, reached);
            parent.insert(next, pos);
            frontier.push(Reverse((reached + manhattan(next, goal), reached, next)));
        }
    }

    None
}

/// Text rendering of `grid` with `route` drawn as `*`.
pub fn render_route(grid: &Grid, route: &[Pos]) -> String {
    let on_route: HashSet<Pos> = route.iter().copied().collect();
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let glyph = if on_route.contains(&(x, y)) {
                '*'
            } else {
                grid.get(x, y).unwrap_or(Cell::Wall).glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Every path cell 4-connected to `from`. Empty when `from` is a wall.
pub fn flood_fill(grid: &Grid, from: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut seen = HashSet::new();
    if !grid.is_walkable(from.0, from.1) {
        return seen;
    }

    let mut queue = VecDeque::from([from]);
    seen.insert(from);
    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in ORTHOGONAL {
            let next = (x + dx, y + dy);
            if grid.is_walkable(next.0, next.1) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

pub fn is_solvable(grid: &Grid, start: (i32, i32), goal: (i32, i32)) -> bool {
    grid.is_walkable(goal.0, goal.1) && flood_fill(grid, start).contains(&goal)
}

/// True when the path cells contain a cycle.
///
/// A forest has exactly `cells - components` edges, so any extra
/// adjacency between path cells closes a loop.
pub fn has_cycle(grid: &Grid) -> bool {
    let mut edges = 0usize;
    let mut cells = 0usize;
    for (x, y) in grid.path_cells() {
        cells += 1;
        if grid.is_walkable(x + 1, y) {
            edges += 1;
        }
        if grid.is_walkable(x, y + 1) {
            edges += 1;
        }
    }

    let mut components = 0usize;
    let mut seen: HashSet<(i32, i32)> = HashSet::new();
    for cell in grid.path_cells() {
        if !seen.contains(&cell) {
            components += 1;
            seen.extend(flood_fill(grid, cell));
        }
    }

    edges + components > cells
}

fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

fn walk_back(parent: &HashMap<Pos, Pos>, goal: Pos) -> Vec<Pos> {
    let mut route = vec![goal];
    let mut at = goal;
    while let Some(&prev) = parent.get(&at) {
        route.push(prev);
        at = prev;
    }
    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::from_rows(&[
            "#######",
            "#.....#",
            "#####.#",
            "#.....#",
            "#######",
        ])
    }

    #[test]
    fn test_route_follows_corridor() {
        let grid = corridor();
        let route = shortest_route(&grid, (1, 1), (1, 3)).unwrap();
        assert_eq!(route.len(), 11);
        assert_eq!(route.first(), Some(&(1, 1)));
        assert_eq!(route.last(), Some(&(1, 3)));
        for pair in route.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(manhattan(a, b), 1);
            assert!(grid.is_walkable(b.0, b.1));
        }
    }

    #[test]
    fn test_route_takes_shortcut() {
        let grid = Grid::from_rows(&[
            "#######",
            "#.....#",
            "#.###.#",
            "#.....#",
            "#######",
        ]);
        let route = shortest_route(&grid, (1, 1), (1, 3)).unwrap();
        assert_eq!(route, vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_route_to_wall_or_island_is_none() {
        let grid = corridor();
        assert!(shortest_route(&grid, (1, 1), (0, 0)).is_none());
        assert!(shortest_route(&grid, (0, 0), (1, 1)).is_none());

        let split = Grid::from_rows(&["#####", "#.#.#", "#####"]);
        assert!(shortest_route(&split, (1, 1), (3, 1)).is_none());
        assert_eq!(shortest_route(&split, (1, 1), (1, 1)), Some(vec![(1, 1)]));
    }

    #[test]
    fn test_render_route_marks_cells() {
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]);
        let route = shortest_route(&grid, (1, 1), (3, 1)).unwrap();
        assert_eq!(render_route(&grid, &route), "#####\n#***#\n#####\n");
        assert_eq!(render_route(&grid, &[]), grid.to_string());
    }

    #[test]
    fn test_flood_fill_separated_regions() {
        let grid = Grid::from_rows(&[
            "#####",
            "#.#.#",
            "#####",
        ]);
        let region = flood_fill(&grid, (1, 1));
        assert_eq!(region.len(), 1);
        assert!(!is_solvable(&grid, (1, 1), (3, 1)));
        assert!(flood_fill(&grid, (0, 0)).is_empty());
    }

    #[test]
    fn test_has_cycle() {
        assert!(!has_cycle(&corridor()));

        let ring = Grid::from_rows(&[
            "#####",
            "#...#",
            "#.#.#",
            "#...#",
            "#####",
        ]);
        assert!(has_cycle(&ring));

        let block = Grid::from_rows(&["####", "#..#", "#..#", "####"]);
        assert!(has_cycle(&block));
    }
}
