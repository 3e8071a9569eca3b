//! Rasterizes a maze into an RGBA image.
//!
//! Each cell becomes a square tile (walls dark, routes light), with the
//! convex corners of route regions rounded off. Rounding is cosmetic only;
//! it repaints pixels inside route tiles and never alters which tiles are
//! route.

use std::collections::HashSet;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use mazegen::geometry::{Cell, Dir};
use mazegen::maze::Maze;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Square tile edge in pixels per cell.
    pub tile_px: u32,
    pub wall_color: [u8; 4],
    pub route_color: [u8; 4],
    /// When set, solution cells are painted this color instead.
    pub solution_color: Option<[u8; 4]>,
    /// Corner rounding radius in pixels; 0 disables rounding.
    pub corner_radius: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_px: 20,
            wall_color: [0, 0, 0, 255],
            route_color: [255, 255, 255, 255],
            solution_color: None,
            corner_radius: 6,
        }
    }
}

/// Renders the maze to an RGBA buffer of `size * tile_px` pixels square.
pub fn render(maze: &Maze, opts: &RenderOptions) -> RgbaImage {
    let size = maze.grid.size();
    let tile = opts.tile_px.max(1);
    let mut img: RgbaImage =
        ImageBuffer::from_pixel(size * tile, size * tile, Rgba(opts.wall_color));

    let on_solution: HashSet<Cell> = match opts.solution_color {
        Some(_) => maze.solution.iter().copied().collect(),
        None => HashSet::new(),
    };

    for y in 0..size {
        for x in 0..size {
            let cell = Cell::new(x, y);
            if !maze.grid.is_route(cell) {
                continue;
            }
            let color = match opts.solution_color {
                Some(c) if on_solution.contains(&cell) => c,
                _ => opts.route_color,
            };
            fill_tile(&mut img, cell, tile, color);
        }
    }

    let radius = opts.corner_radius.min(tile / 2);
    if radius > 0 {
        round_corners(&mut img, maze, tile, radius, opts.wall_color);
    }

    img
}

/// Renders and saves as PNG (format chosen by the file extension).
pub fn save(maze: &Maze, path: &Path, opts: &RenderOptions) -> Result<(), image::ImageError> {
    render(maze, opts).save(path)
}

fn fill_tile(img: &mut RgbaImage, cell: Cell, tile: u32, color: [u8; 4]) {
    let x0 = cell.x * tile;
    let y0 = cell.y * tile;
    for py in y0..y0 + tile {
        for px in x0..x0 + tile {
            img.put_pixel(px, py, Rgba(color));
        }
    }
}

/// Repaints the convex corners of every route tile back to wall color,
/// leaving a quarter-circle profile. A tile corner is convex when both
/// orthogonal neighbors across that corner are walls.
fn round_corners(img: &mut RgbaImage, maze: &Maze, tile: u32, radius: u32, wall: [u8; 4]) {
    let size = maze.grid.size();

    for y in 0..size {
        for x in 0..size {
            let cell = Cell::new(x, y);
            if !maze.grid.is_route(cell) {
                continue;
            }
            // Out-of-grid neighbors read as wall, so edge tiles round too.
            let wall_up = neighbor_is_wall(maze, cell, Dir::Up);
            let wall_down = neighbor_is_wall(maze, cell, Dir::Down);
            let wall_left = neighbor_is_wall(maze, cell, Dir::Left);
            let wall_right = neighbor_is_wall(maze, cell, Dir::Right);

            let x0 = x * tile;
            let y0 = y * tile;
            let x1 = x0 + tile - 1;
            let y1 = y0 + tile - 1;

            if wall_up && wall_left {
                round_one_corner(img, x0, y0, x0 + radius, y0 + radius, radius, wall);
            }
            if wall_up && wall_right {
                round_one_corner(img, x1 - radius, y0, x1 - radius, y0 + radius, radius, wall);
            }
            if wall_down && wall_left {
                round_one_corner(img, x0, y1 - radius, x0 + radius, y1 - radius, radius, wall);
            }
            if wall_down && wall_right {
                round_one_corner(img, x1 - radius, y1 - radius, x1 - radius, y1 - radius, radius, wall);
            }
        }
    }
}

fn neighbor_is_wall(maze: &Maze, cell: Cell, dir: Dir) -> bool {
    match dir.step(cell) {
        Some(n) => !maze.grid.is_route(n),
        None => true,
    }
}

/// Paints wall color over the pixels of one `radius` x `radius` corner
/// square that fall outside the quarter circle centered at (`cx`, `cy`).
fn round_one_corner(
    img: &mut RgbaImage,
    sq_x: u32,
    sq_y: u32,
    cx: u32,
    cy: u32,
    radius: u32,
    wall: [u8; 4],
) {
    let r2 = (radius * radius) as i64;
    for py in sq_y..=sq_y + radius {
        for px in sq_x..=sq_x + radius {
            if px >= img.width() || py >= img.height() {
                continue;
            }
            let dx = px as i64 - cx as i64;
            let dy = py as i64 - cy as i64;
            if dx * dx + dy * dy > r2 {
                img.put_pixel(px, py, Rgba(wall));
            }
        }
    }
}
