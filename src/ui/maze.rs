//! The fixed exploration maze. Movement is one cell per key press.

use maze_battle::Position;

const LAYOUT: [&str; 9] = [
    "..#.....#......",
    "#.#.###.#.####.",
    "..#...#...#....",
    ".####.#####.##.",
    "......#.....#..",
    ".####.#.###.#.#",
    "....#...#.#....",
    "###.#####.####.",
    "..............#",
];

/// Grid of walls with the origin at the top-left cell. Anything outside the
/// grid counts as wall.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<bool>>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::from_rows(&LAYOUT)
    }
}

impl Maze {
    pub fn from_rows(rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        Self { cells }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return true;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
            .unwrap_or(true)
    }

    /// Moves one step if the target cell is open, otherwise stays put.
    pub fn step(&self, from: Position, dx: i32, dy: i32) -> Position {
        let to = from.offset(dx, dy);
        if self.is_wall(to) {
            from
        } else {
            to
        }
    }

    /// Rows of display characters with `@` at the player.
    pub fn render_rows(&self, player: Position) -> Vec<String> {
        self.cells
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, wall)| {
                        if player == Position::new(x as i32, y as i32) {
                            '@'
                        } else if *wall {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
