use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::collectible::{Collectible, FoodKind};
use crate::direction::Direction;
use crate::game::Game;
use crate::maze::Cell;

pub const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Glyph {
    Player { facing: Direction, mouth_open: bool },
    Wall,
    Empty,
    Pellet,
    Power,
    Food(FoodKind),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sprite {
    pub glyph: Glyph,
    pub color: Color,
}

const BLANK: Sprite = Sprite {
    glyph: Glyph::Empty,
    color: Color::Reset,
};

/// Remembers what is on screen so only changed cells are redrawn.
pub struct Renderer {
    last: Vec<Sprite>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![BLANK; width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }
}

pub fn render<W: Write>(
    out: &mut W,
    game: &Game,
    renderer: &mut Renderer,
    (term_w, term_h): (u16, u16),
) -> io::Result<()> {
    let width = game.grid().columns();
    let height = game.grid().rows();
    let needed_h = (height + 2) as u16;
    let needed_w = (width * CELL_W) as u16;

    out.queue(MoveTo(0, 0))?;
    if term_w < needed_w || term_h < needed_h {
        out.queue(Clear(ClearType::All))?;
        out.queue(Print(format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        )))?;
        out.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        out.queue(Clear(ClearType::All))?;
    }

    let hud = hud_line(game);
    if renderer.needs_full || hud != renderer.last_hud {
        out.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        out.queue(SetForegroundColor(Color::White))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        out.queue(Print(&hud))?;
        out.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for y in 0..height {
        for x in 0..width {
            let sprite = cell_for(game, Cell::new(x as i32, y as i32));
            let idx = y * width + x;
            if renderer.needs_full || sprite != renderer.last[idx] {
                renderer.last[idx] = sprite;
                draw_cell(out, renderer, x, y, sprite)?;
            }
        }
    }
    renderer.needs_full = false;

    out.flush()
}

pub fn hud_line(game: &Game) -> String {
    let board = game.scoreboard();
    let mut hud = format!(
        "SCORE: {}  SPEED: {:.1}  JUNK: {}  VEG: {}  LEFT: {}  (r restart, q quit)",
        board.score,
        game.speed(),
        board.junk_food,
        board.healthy_food,
        game.field().remaining()
    );
    if game.is_cleared() {
        hud.push_str("  MAZE CLEARED!");
    }
    hud
}

pub fn cell_for(game: &Game, cell: Cell) -> Sprite {
    if game.actor().cell(game.geometry()) == cell {
        let half_cycle = game.tuning().anim_cycle / 2;
        return Sprite {
            glyph: Glyph::Player {
                facing: game.direction(),
                mouth_open: game.anim_phase() < half_cycle,
            },
            color: Color::Yellow,
        };
    }
    if game.grid().is_wall(cell) {
        return Sprite {
            glyph: Glyph::Wall,
            color: Color::Blue,
        };
    }
    match game.field().peek(cell) {
        None => BLANK,
        Some(Collectible::Pellet) => Sprite {
            glyph: Glyph::Pellet,
            color: Color::White,
        },
        Some(Collectible::PowerPellet) => Sprite {
            glyph: Glyph::Power,
            color: Color::White,
        },
        Some(Collectible::Food(kind)) => Sprite {
            glyph: Glyph::Food(kind),
            color: if kind.is_healthy() {
                Color::Green
            } else {
                Color::Red
            },
        },
    }
}

fn glyph_text(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Player {
            mouth_open: false, ..
        } => "●",
        Glyph::Player { facing, .. } => match facing {
            Direction::Left => "ᗤ",
            Direction::Up => "ᗢ",
            Direction::Down => "ᗣ",
            Direction::Right | Direction::None => "ᗧ",
        },
        Glyph::Wall => "██",
        Glyph::Empty => "  ",
        Glyph::Pellet => "· ",
        Glyph::Power => "● ",
        Glyph::Food(FoodKind::Burger) => "🍔",
        Glyph::Food(FoodKind::Fries) => "🍟",
        Glyph::Food(FoodKind::Pizza) => "🍕",
        Glyph::Food(FoodKind::Veggie) => "🥦",
    }
}

fn draw_cell<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    x: usize,
    y: usize,
    sprite: Sprite,
) -> io::Result<()> {
    let text = glyph_text(sprite.glyph);
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    out.queue(MoveTo(x_pos, y_pos))?;
    out.queue(SetForegroundColor(sprite.color))?;
    out.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    for _ in w..CELL_W {
        out.queue(Print(' '))?;
    }
    out.queue(ResetColor)?;
    Ok(())
}
