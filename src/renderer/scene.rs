//! Scene assembly: game snapshot to triangle list
//!
//! World space is the canvas: x grows right along the ground line, y grows
//! down with the platform tops at `canvas_height - platform_height`. The
//! canvas is centered in the viewport and scrolled by the camera offset;
//! hills and trees scroll at the parallax fraction of it.

use glam::Vec2;

use super::shapes::{fill_below, gradient_rect, line, rect, triangle};
use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Stick, Tree};
use crate::{cos_degrees, sin_degrees};

/// Host drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A background hill: the area under a stretched sine wave
#[derive(Debug, Clone, Copy)]
pub struct Hill {
    pub base_height: f32,
    pub amplitude: f32,
    pub stretch: f32,
    pub color: [f32; 4],
}

pub const NEAR_HILL: Hill = Hill {
    base_height: 100.0,
    amplitude: 10.0,
    stretch: 1.0,
    color: colors::HILL_NEAR,
};

pub const FAR_HILL: Hill = Hill {
    base_height: 70.0,
    amplitude: 20.0,
    stretch: 0.5,
    color: colors::HILL_FAR,
};

/// Horizontal resolution of the hill outline (px)
const HILL_STEP: f32 = 4.0;
const TREE_TRUNK: Vec2 = Vec2::new(2.0, 5.0);
const TREE_CROWN: Vec2 = Vec2::new(10.0, 25.0);
const STICK_WIDTH: f32 = 2.0;

impl Hill {
    /// Screen y of the hill outline at screen x
    pub fn y_at(&self, screen_x: f32, background_offset: f32, viewport: Viewport) -> f32 {
        let base_y = viewport.height - self.base_height;
        sin_degrees((background_offset + screen_x) * self.stretch) * self.amplitude + base_y
    }
}

/// Screen position of world origin (canvas top-left, scrolled)
pub fn scene_origin(state: &GameState, viewport: Viewport) -> Vec2 {
    let tuning = &state.tuning;
    Vec2::new(
        (viewport.width - tuning.canvas_width) / 2.0 - state.camera.offset(),
        tuning.canvas_margin_y(),
    )
}

/// Screen position of a tree's foot; trees stand on the near hill
pub fn tree_screen_pos(tree: &Tree, state: &GameState, viewport: Viewport) -> Vec2 {
    let background_offset = state.camera.parallax_offset(state.tuning.parallax);
    Vec2::new(
        (tree.x - background_offset) * NEAR_HILL.stretch,
        viewport.height - NEAR_HILL.base_height + sin_degrees(tree.x) * NEAR_HILL.amplitude,
    )
}

/// Build the full frame
pub fn build_scene(state: &GameState, viewport: Viewport) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2048);

    background(state, viewport, &mut vertices);

    let origin = scene_origin(state, viewport);
    platforms(state, origin, &mut vertices);
    hero(state, origin, &mut vertices);
    for stick in state.sticks() {
        vertices.extend(stick_shape(stick, state, origin));
    }

    vertices
}

fn background(state: &GameState, viewport: Viewport, out: &mut Vec<Vertex>) {
    out.extend(gradient_rect(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));

    let background_offset = state.camera.parallax_offset(state.tuning.parallax);
    for hill in [NEAR_HILL, FAR_HILL] {
        let steps = (viewport.width / HILL_STEP).ceil() as usize;
        let outline: Vec<Vec2> = (0..=steps)
            .map(|i| {
                let x = (i as f32 * HILL_STEP).min(viewport.width);
                Vec2::new(x, hill.y_at(x, background_offset, viewport))
            })
            .collect();
        out.extend(fill_below(&outline, viewport.height, hill.color));
    }

    for tree in &state.trees {
        let foot = tree_screen_pos(tree, state, viewport);
        let trunk_top = foot.y - TREE_TRUNK.y;
        out.extend(rect(
            Vec2::new(foot.x - TREE_TRUNK.x / 2.0, trunk_top),
            TREE_TRUNK,
            colors::TREE_TRUNK,
        ));
        out.extend(triangle(
            Vec2::new(foot.x - TREE_CROWN.x / 2.0, trunk_top),
            Vec2::new(foot.x, trunk_top - TREE_CROWN.y),
            Vec2::new(foot.x + TREE_CROWN.x / 2.0, trunk_top),
            colors::tree(tree.color),
        ));
    }
}

fn platforms(state: &GameState, origin: Vec2, out: &mut Vec<Vertex>) {
    let tuning = &state.tuning;
    let ground_y = tuning.canvas_height - tuning.platform_height;
    // Platforms reach down to the bottom of the viewport
    let depth = tuning.platform_height + tuning.canvas_margin_y();
    let marker = tuning.perfect_area_size;
    let anchor_x = state.active_stick().x;

    for platform in &state.platforms {
        out.extend(rect(
            origin + Vec2::new(platform.x, ground_y),
            Vec2::new(platform.width, depth),
            colors::PLATFORM,
        ));

        // Perfect zone only on platforms the hero has not reached yet
        if anchor_x < platform.x {
            out.extend(rect(
                origin + Vec2::new(platform.center() - marker / 2.0, ground_y),
                Vec2::splat(marker),
                colors::PERFECT_ZONE,
            ));
        }
    }
}

fn hero(state: &GameState, origin: Vec2, out: &mut Vec<Vertex>) {
    let tuning = &state.tuning;
    let size = Vec2::new(tuning.hero_width, tuning.hero_height);
    let ground_y = tuning.canvas_height - tuning.platform_height;
    // The hero stands just left of its x, feet on the ground line
    let center = origin
        + Vec2::new(
            state.hero.pos.x - size.x / 2.0,
            state.hero.pos.y + ground_y - size.y / 2.0,
        );
    out.extend(rect(center - size / 2.0, size, colors::HERO));
}

fn stick_shape(stick: &Stick, state: &GameState, origin: Vec2) -> Vec<Vertex> {
    let ground_y = state.tuning.canvas_height - state.tuning.platform_height;
    let anchor = origin + Vec2::new(stick.x, ground_y);
    // Rotation 0 points straight up, 90 lies flat to the right
    let dir = Vec2::new(sin_degrees(stick.rotation), -cos_degrees(stick.rotation));
    line(anchor, anchor + dir * stick.length, STICK_WIDTH, colors::STICK)
}
