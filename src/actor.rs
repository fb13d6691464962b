use crate::direction::Direction;
use crate::maze::{Cell, MazeGrid};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub tile: f32,
    /// Rows start this far down; the band above belongs to the HUD.
    pub ui_offset: f32,
}

impl Geometry {
    pub fn cell_at(&self, pos: Position) -> Cell {
        Cell::new(
            (pos.x / self.tile).floor() as i32,
            ((pos.y - self.ui_offset) / self.tile).floor() as i32,
        )
    }

    pub fn center_of(&self, cell: Cell) -> Position {
        let half = self.tile / 2.0;
        Position {
            x: cell.col as f32 * self.tile + half,
            y: self.ui_offset + cell.row as f32 * self.tile + half,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Motion {
    pub turned: bool,
    /// The step ran into a wall and the actor was pulled back to its cell center.
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    position: Position,
    direction: Direction,
    pending: Direction,
    speed: f32,
    anim_phase: u32,
}

impl Actor {
    pub fn new(position: Position, speed: f32) -> Self {
        Self {
            position,
            direction: Direction::None,
            pending: Direction::None,
            speed,
            anim_phase: 0,
        }
    }

    pub fn spawn(cell: Cell, speed: f32, geometry: &Geometry) -> Self {
        Self::new(geometry.center_of(cell), speed)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn anim_phase(&self) -> u32 {
        self.anim_phase
    }

    pub fn cell(&self, geometry: &Geometry) -> Cell {
        geometry.cell_at(self.position)
    }

    /// Replaces the pending heading. It stays pending until a centered tick
    /// finds the neighbouring cell in that direction open.
    pub fn request_direction(&mut self, dir: Direction) {
        self.pending = dir;
    }

    /// The centering window on each axis is the current speed, so it keeps
    /// catching the tile center after the speed changes. Turning requires
    /// both axes to be inside the window; a turn snaps to the exact center.
    /// Keeping the current heading never snaps: one step past the center the
    /// offset rounds to just under the speed, and re-snapping there would pin
    /// the actor in place.
    /// A step whose destination lies in a wall is dropped and the actor is
    /// pulled back to the center of the cell it started the tick in.
    pub fn advance(&mut self, grid: &MazeGrid, geometry: &Geometry, anim_cycle: u32) -> Motion {
        let mut motion = Motion::default();
        let cell = geometry.cell_at(self.position);
        let center = geometry.center_of(cell);

        let centered_x = (self.position.x - center.x).abs() < self.speed;
        let centered_y = (self.position.y - center.y).abs() < self.speed;
        let turning = self.pending != self.direction;
        if turning && centered_x && centered_y && !grid.is_wall(cell.step(self.pending)) {
            motion.turned = true;
            self.direction = self.pending;
            self.position = center;
        }

        let (dx, dy) = self.direction.delta();
        let next = Position {
            x: self.position.x + dx as f32 * self.speed,
            y: self.position.y + dy as f32 * self.speed,
        };
        if grid.is_wall(geometry.cell_at(next)) {
            self.position = center;
            motion.blocked = true;
        } else {
            self.position = next;
        }

        self.anim_phase = (self.anim_phase + 1) % anim_cycle.max(1);
        motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Layout;

    const GEOMETRY: Geometry = Geometry {
        tile: 35.0,
        ui_offset: 105.0,
    };

    fn grid(lines: &[&str]) -> MazeGrid {
        MazeGrid::new(&Layout::parse(lines).unwrap())
    }

    #[test]
    fn cell_and_center_agree() {
        let cell = Cell::new(4, 7);
        let center = GEOMETRY.center_of(cell);
        assert_eq!(center, Position::new(157.5, 367.5));
        assert_eq!(GEOMETRY.cell_at(center), cell);
        assert_eq!(GEOMETRY.cell_at(Position::new(-0.5, 104.0)), Cell::new(-1, -1));
    }

    #[test]
    fn idle_actor_stays_on_center() {
        let grid = grid(&["###", "#.#", "###"]);
        let mut actor = Actor::spawn(Cell::new(1, 1), 3.0, &GEOMETRY);
        let start = actor.position();
        for _ in 0..10 {
            actor.advance(&grid, &GEOMETRY, 30);
        }
        assert_eq!(actor.position(), start);
        assert_eq!(actor.direction(), Direction::None);
    }

    #[test]
    fn request_into_wall_is_kept_but_not_applied() {
        let grid = grid(&["####", "#..#", "####"]);
        let mut actor = Actor::spawn(Cell::new(2, 1), 3.0, &GEOMETRY);
        let start = actor.position();
        actor.request_direction(Direction::Right);
        for _ in 0..50 {
            actor.advance(&grid, &GEOMETRY, 30);
            assert_eq!(actor.direction(), Direction::None);
            assert_eq!(actor.position(), start);
        }
        assert_eq!(actor.pending_direction(), Direction::Right);
    }

    #[test]
    fn pending_turn_waits_for_the_center() {
        let grid = grid(&["#####", "#..##", "##.##", "##.##", "#####"]);
        let mut actor = Actor::spawn(Cell::new(1, 1), 3.0, &GEOMETRY);
        actor.request_direction(Direction::Right);
        let motion = actor.advance(&grid, &GEOMETRY, 30);
        assert!(motion.turned);
        assert_eq!(actor.direction(), Direction::Right);

        actor.request_direction(Direction::Down);
        let mut turned_at = None;
        for tick in 0..40 {
            let before = actor.cell(&GEOMETRY);
            let motion = actor.advance(&grid, &GEOMETRY, 30);
            if motion.turned {
                turned_at = Some((tick, before));
                break;
            }
            assert_eq!(actor.direction(), Direction::Right);
        }
        let (_, cell) = turned_at.expect("actor should turn down");
        assert_eq!(cell, Cell::new(2, 1));
        assert_eq!(actor.direction(), Direction::Down);
        assert_eq!(actor.position().x, GEOMETRY.center_of(cell).x);
    }

    #[test]
    fn keeps_moving_after_a_turn_at_uneven_speeds() {
        let grid = grid(&["#####", "#...#", "###.#", "###.#", "###.#", "#####"]);
        for speed in [1.5, 2.5, 4.4, 7.7, 8.0] {
            let mut actor = Actor::spawn(Cell::new(1, 1), speed, &GEOMETRY);
            actor.request_direction(Direction::Right);
            actor.advance(&grid, &GEOMETRY, 30);
            actor.request_direction(Direction::Down);
            for _ in 0..200 {
                actor.advance(&grid, &GEOMETRY, 30);
            }
            assert_eq!(actor.direction(), Direction::Down, "speed {speed}");
            assert_eq!(actor.cell(&GEOMETRY), Cell::new(3, 4), "speed {speed}");
        }
    }

    #[test]
    fn off_center_on_one_axis_does_not_turn() {
        let grid = grid(&["#####", "#...#", "#...#", "#####"]);
        let center = GEOMETRY.center_of(Cell::new(2, 1));
        let start = Position::new(center.x, center.y + 10.0);
        let mut actor = Actor::new(start, 3.0);
        actor.request_direction(Direction::Right);
        actor.advance(&grid, &GEOMETRY, 30);
        assert_eq!(actor.direction(), Direction::None);
        assert_eq!(actor.position(), start);
    }

    #[test]
    fn wall_stop_never_enters_the_wall() {
        let grid = grid(&["#####", "#...#", "#####"]);
        let mut actor = Actor::spawn(Cell::new(1, 1), 3.0, &GEOMETRY);
        actor.request_direction(Direction::Right);
        let mut blocked = 0;
        for _ in 0..200 {
            let motion = actor.advance(&grid, &GEOMETRY, 30);
            if motion.blocked {
                blocked += 1;
                assert_eq!(actor.position(), GEOMETRY.center_of(Cell::new(3, 1)));
            }
            assert!(!grid.is_wall(actor.cell(&GEOMETRY)));
        }
        assert!(blocked > 0, "actor should have reached the east wall");
    }

    #[test]
    fn animation_phase_wraps() {
        let grid = grid(&["###", "#.#", "###"]);
        let mut actor = Actor::spawn(Cell::new(1, 1), 3.0, &GEOMETRY);
        for _ in 0..31 {
            actor.advance(&grid, &GEOMETRY, 30);
        }
        assert_eq!(actor.anim_phase(), 1);
    }
}
