use tracing::debug;

use crate::actor::{Actor, Geometry};
use crate::collectible::{Collectible, CollectibleField, Consumed};
use crate::config::SpeedLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub score: u64,
    pub pellets: u32,
    pub power_pellets: u32,
    pub junk_food: u32,
    pub healthy_food: u32,
}

impl Scoreboard {
    fn record(&mut self, consumed: &Consumed) {
        self.score += u64::from(consumed.effect.score);
        match consumed.item {
            Collectible::Pellet => self.pellets += 1,
            Collectible::PowerPellet => self.power_pellets += 1,
            Collectible::Food(kind) if kind.is_healthy() => self.healthy_food += 1,
            Collectible::Food(_) => self.junk_food += 1,
        }
    }
}

pub fn resolve(
    actor: &mut Actor,
    field: &mut CollectibleField,
    board: &mut Scoreboard,
    geometry: &Geometry,
    limits: &SpeedLimits,
) -> Option<Consumed> {
    let cell = actor.cell(geometry);
    let consumed = field.peek_and_consume(cell)?;

    board.record(&consumed);
    actor.set_speed(limits.clamp(actor.speed() + consumed.effect.speed_delta));
    debug!(
        col = cell.col,
        row = cell.row,
        item = ?consumed.item,
        score = board.score,
        speed = actor.speed(),
        "collectible eaten"
    );
    Some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectible::FoodKind;
    use crate::config::Scoring;
    use crate::maze::Cell;

    const GEOMETRY: Geometry = Geometry {
        tile: 35.0,
        ui_offset: 105.0,
    };

    fn setup(items: &[(Cell, Collectible)]) -> (CollectibleField, Scoreboard) {
        let mut field = CollectibleField::empty(Scoring::default());
        for (cell, item) in items {
            field.place(*cell, *item).unwrap();
        }
        (field, Scoreboard::default())
    }

    #[test]
    fn empty_cell_changes_nothing() {
        let (mut field, mut board) = setup(&[]);
        let mut actor = Actor::spawn(Cell::new(1, 1), 3.0, &GEOMETRY);
        let limits = SpeedLimits::default();
        assert_eq!(
            resolve(&mut actor, &mut field, &mut board, &GEOMETRY, &limits),
            None
        );
        assert_eq!(board, Scoreboard::default());
        assert_eq!(actor.speed(), 3.0);
    }

    #[test]
    fn pellet_scores_once() {
        let cell = Cell::new(1, 1);
        let (mut field, mut board) = setup(&[(cell, Collectible::Pellet)]);
        let mut actor = Actor::spawn(cell, 3.0, &GEOMETRY);
        let limits = SpeedLimits::default();
        assert!(resolve(&mut actor, &mut field, &mut board, &GEOMETRY, &limits).is_some());
        assert!(resolve(&mut actor, &mut field, &mut board, &GEOMETRY, &limits).is_none());
        assert_eq!(board.score, 10);
        assert_eq!(board.pellets, 1);
    }

    #[test]
    fn junk_food_slows_down_to_the_floor() {
        let limits = SpeedLimits::default();
        let mut actor = Actor::spawn(Cell::new(0, 0), 3.0, &GEOMETRY);
        let mut board = Scoreboard::default();
        let mut field = CollectibleField::empty(Scoring::default());
        let mut speeds = Vec::new();
        for _ in 0..6 {
            field
                .place(Cell::new(0, 0), Collectible::Food(FoodKind::Pizza))
                .unwrap();
            resolve(&mut actor, &mut field, &mut board, &GEOMETRY, &limits);
            speeds.push(actor.speed());
        }
        assert_eq!(speeds, vec![2.5, 2.0, 1.5, 1.5, 1.5, 1.5]);
        assert_eq!(board.junk_food, 6);
        assert_eq!(board.score, 600);
    }

    #[test]
    fn veggies_speed_up_to_the_ceiling() {
        let limits = SpeedLimits::default();
        let mut actor = Actor::spawn(Cell::new(0, 0), 7.0, &GEOMETRY);
        let mut board = Scoreboard::default();
        let mut field = CollectibleField::empty(Scoring::default());
        for _ in 0..5 {
            field
                .place(Cell::new(0, 0), Collectible::Food(FoodKind::Veggie))
                .unwrap();
            resolve(&mut actor, &mut field, &mut board, &GEOMETRY, &limits);
            assert!(actor.speed() <= limits.max);
        }
        assert_eq!(actor.speed(), 8.0);
        assert_eq!(board.healthy_food, 5);
    }
}
