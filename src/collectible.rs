use std::collections::BTreeMap;

use crate::config::Scoring;
use crate::maze::{Cell, Layout, LayoutError, PELLET, POWER_PELLET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Burger,
    Fries,
    Pizza,
    Veggie,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Burger,
        FoodKind::Fries,
        FoodKind::Pizza,
        FoodKind::Veggie,
    ];

    pub fn from_glyph(ch: char) -> Option<FoodKind> {
        match ch {
            'h' => Some(FoodKind::Burger),
            'f' => Some(FoodKind::Fries),
            'p' => Some(FoodKind::Pizza),
            'l' => Some(FoodKind::Veggie),
            _ => None,
        }
    }

    pub fn is_healthy(self) -> bool {
        self == FoodKind::Veggie
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collectible {
    Pellet,
    PowerPellet,
    Food(FoodKind),
}

impl Collectible {
    pub fn from_glyph(ch: char) -> Option<Collectible> {
        match ch {
            PELLET => Some(Collectible::Pellet),
            POWER_PELLET => Some(Collectible::PowerPellet),
            other => FoodKind::from_glyph(other).map(Collectible::Food),
        }
    }

    /// Lower wins when two collectibles compete for one cell.
    pub fn priority(self) -> u8 {
        match self {
            Collectible::Pellet => 0,
            Collectible::PowerPellet => 1,
            Collectible::Food(_) => 2,
        }
    }

    pub fn effect(self, scoring: &Scoring) -> Effect {
        match self {
            Collectible::Pellet => Effect {
                score: scoring.pellet,
                speed_delta: 0.0,
            },
            Collectible::PowerPellet => Effect {
                score: scoring.power_pellet,
                speed_delta: 0.0,
            },
            Collectible::Food(kind) if kind.is_healthy() => Effect {
                score: scoring.healthy_food,
                speed_delta: scoring.healthy_food_speed,
            },
            Collectible::Food(_) => Effect {
                score: scoring.junk_food,
                speed_delta: scoring.junk_food_speed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub score: u32,
    pub speed_delta: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumed {
    pub cell: Cell,
    pub item: Collectible,
    pub effect: Effect,
}

#[derive(Debug, Clone)]
pub struct CollectibleField {
    items: BTreeMap<Cell, Collectible>,
    scoring: Scoring,
}

impl CollectibleField {
    pub fn empty(scoring: Scoring) -> Self {
        Self {
            items: BTreeMap::new(),
            scoring,
        }
    }

    pub fn from_layout(layout: &Layout, scoring: Scoring) -> Result<Self, LayoutError> {
        let mut field = Self::empty(scoring);
        for (cell, ch) in layout.cells() {
            if let Some(item) = Collectible::from_glyph(ch) {
                field.place(cell, item)?;
            }
        }
        Ok(field)
    }

    pub fn place(&mut self, cell: Cell, item: Collectible) -> Result<(), LayoutError> {
        if self.items.contains_key(&cell) {
            return Err(LayoutError::Stacked {
                col: cell.col,
                row: cell.row,
            });
        }
        self.items.insert(cell, item);
        Ok(())
    }

    /// Returns the collectible that lost the tie-break, if any.
    pub fn place_with_tie_break(&mut self, cell: Cell, item: Collectible) -> Option<Collectible> {
        match self.items.get(&cell).copied() {
            None => {
                self.items.insert(cell, item);
                None
            }
            Some(existing) if item.priority() < existing.priority() => {
                self.items.insert(cell, item);
                Some(existing)
            }
            Some(_) => Some(item),
        }
    }

    pub fn peek(&self, cell: Cell) -> Option<Collectible> {
        self.items.get(&cell).copied()
    }

    pub fn peek_and_consume(&mut self, cell: Cell) -> Option<Consumed> {
        let item = self.items.remove(&cell)?;
        Some(Consumed {
            cell,
            item,
            effect: item.effect(&self.scoring),
        })
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    pub fn is_cleared(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Collectible)> + '_ {
        self.items.iter().map(|(cell, item)| (*cell, *item))
    }

    pub fn pellets(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, item)| *item == Collectible::Pellet)
            .map(|(cell, _)| cell)
    }

    pub fn power_pellets(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, item)| *item == Collectible::PowerPellet)
            .map(|(cell, _)| cell)
    }

    pub fn foods(&self) -> impl Iterator<Item = (Cell, FoodKind)> + '_ {
        self.iter().filter_map(|(cell, item)| match item {
            Collectible::Food(kind) => Some((cell, kind)),
            _ => None,
        })
    }
}
