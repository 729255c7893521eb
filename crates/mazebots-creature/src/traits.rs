//! Maze and food access traits for bot-world interaction
//!
//! These traits define the interface between bots and the maze,
//! allowing this crate to be decoupled from the Maze implementation.

use glam::Vec2;

use crate::types::PixelRect;

/// Read-only access to maze geometry for sensing and collision
pub trait MazeAccess {
    /// Check if a point lies in the exit region (inclusive bounds)
    fn is_in_exit(&self, point: Vec2) -> bool;

    /// All wall rectangles of the maze
    fn wall_rects(&self) -> &[PixelRect];

    /// Check if a rectangle overlaps any wall
    fn intersects_wall(&self, rect: &PixelRect) -> bool {
        self.wall_rects().iter().any(|wall| wall.intersects(rect))
    }
}

/// Read-only access to food points for sensing
pub trait FoodAccess {
    /// Positions of every food item currently in the maze
    fn food_positions(&self) -> &[Vec2];

    /// Radius around a food point within which a sensor sample sees it
    fn detection_radius(&self) -> f32;

    /// Check if any food item is within the detection radius of `point`
    fn food_near(&self, point: Vec2) -> bool {
        let radius = self.detection_radius();
        self.food_positions()
            .iter()
            .any(|food| food.distance(point) <= radius)
    }
}
