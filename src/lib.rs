//! Tile-grid arcade movement for a Pac-Man that eats pellets and food.

pub mod actor;
pub mod collectible;
pub mod collision;
pub mod config;
pub mod direction;
pub mod game;
pub mod input;
pub mod maze;
pub mod render;

pub use actor::{Actor, Geometry, Position};
pub use collectible::{Collectible, CollectibleField, Effect, FoodKind};
pub use config::{Settings, Tuning};
pub use direction::Direction;
pub use game::{Game, GameError, TickReport};
pub use maze::{Cell, Layout, MazeGrid};
