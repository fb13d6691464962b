use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::actor::{Actor, Geometry, Motion, Position};
use crate::collectible::{CollectibleField, Consumed};
use crate::collision::{self, Scoreboard};
use crate::config::{ConfigError, Tuning};
use crate::direction::Direction;
use crate::maze::{Layout, LayoutError, MazeGrid};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid maze: {0}")]
    Layout(#[from] LayoutError),
    #[error("invalid tuning: {0}")]
    Config(#[from] ConfigError),
    #[error("start cell ({col}, {row}) is not an open cell")]
    StartBlocked { col: i32, row: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub motion: Motion,
    pub consumed: Option<Consumed>,
}

#[derive(Debug, Clone)]
pub struct Game {
    tuning: Tuning,
    geometry: Geometry,
    grid: MazeGrid,
    initial_field: CollectibleField,
    field: CollectibleField,
    actor: Actor,
    board: Scoreboard,
    ticks: u64,
}

impl Game {
    pub fn new(layout: Layout, tuning: Tuning) -> Result<Self, GameError> {
        tuning.validate()?;
        let grid = MazeGrid::new(&layout);
        if grid.is_wall(tuning.start) {
            return Err(GameError::StartBlocked {
                col: tuning.start.col,
                row: tuning.start.row,
            });
        }
        if grid.open_neighbours(tuning.start).is_empty() {
            warn!(
                col = tuning.start.col,
                row = tuning.start.row,
                "start cell is boxed in; the actor can never move"
            );
        }
        let field = CollectibleField::from_layout(&layout, tuning.scoring)?;
        let geometry = Geometry {
            tile: tuning.tile,
            ui_offset: tuning.ui_offset,
        };
        let actor = Actor::spawn(tuning.start, tuning.initial_speed, &geometry);
        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            collectibles = field.remaining(),
            "session created"
        );
        Ok(Self {
            tuning,
            geometry,
            grid,
            initial_field: field.clone(),
            field,
            actor,
            board: Scoreboard::default(),
            ticks: 0,
        })
    }

    pub fn with_default_maze() -> Result<Self, GameError> {
        Self::new(Layout::default_maze()?, Tuning::default())
    }

    pub fn reset(&mut self) {
        self.field = self.initial_field.clone();
        self.actor = Actor::spawn(self.tuning.start, self.tuning.initial_speed, &self.geometry);
        self.board = Scoreboard::default();
        self.ticks = 0;
        info!("session reset");
    }

    pub fn request_direction(&mut self, dir: Direction) {
        self.actor.request_direction(dir);
    }

    /// Movement first, then eating on the cell the actor ended up in.
    pub fn tick(&mut self) -> TickReport {
        let motion = self
            .actor
            .advance(&self.grid, &self.geometry, self.tuning.anim_cycle);
        if motion.turned {
            debug!(direction = ?self.actor.direction(), tick = self.ticks, "actor turned");
        }
        if motion.blocked {
            trace!(tick = self.ticks, "actor stopped by wall");
        }

        let consumed = collision::resolve(
            &mut self.actor,
            &mut self.field,
            &mut self.board,
            &self.geometry,
            &self.tuning.limits,
        );
        if consumed.is_some() && self.field.is_cleared() {
            info!(score = self.board.score, tick = self.ticks, "maze cleared");
        }

        self.ticks += 1;
        TickReport { motion, consumed }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn position(&self) -> Position {
        self.actor.position()
    }

    pub fn direction(&self) -> Direction {
        self.actor.direction()
    }

    pub fn anim_phase(&self) -> u32 {
        self.actor.anim_phase()
    }

    pub fn speed(&self) -> f32 {
        self.actor.speed()
    }

    pub fn score(&self) -> u64 {
        self.board.score
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn field(&self) -> &CollectibleField {
        &self.field
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_cleared(&self) -> bool {
        self.field.is_cleared()
    }
}
