//! Drawing primitives and the display-surface contract.
//!
//! A render pass builds a [`Frame`] from scratch and hands it to a
//! [`TextSurface`] in one call. Surfaces present frames all-or-nothing, so a
//! half-built frame is never visible and no sprite survives into the next tick.

use crate::block::BlockError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Sub};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A 2D position or size in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// The drawable region of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub position: Vec2,
    pub size: Vec2,
}

impl Viewport {
    /// Centre a surface of `surface_size` inside a texture of `texture_size`.
    pub fn centered(texture_size: Vec2, surface_size: Vec2) -> Self {
        Self {
            position: (texture_size - surface_size) / 2.0,
            size: surface_size,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

// ---------------------------------------------------------------------------
// Sprites
// ---------------------------------------------------------------------------

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single positioned draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sprite {
    Text {
        text: String,
        position: Vec2,
        scale: f32,
        color: Color,
        alignment: TextAlignment,
        font: String,
    },
    Texture {
        texture: String,
        position: Vec2,
        size: Vec2,
        color: Color,
        alignment: TextAlignment,
    },
}

impl Sprite {
    pub fn position(&self) -> Vec2 {
        match self {
            Sprite::Text { position, .. } | Sprite::Texture { position, .. } => *position,
        }
    }
}

/// An ordered list of sprites presented as one unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    sprites: Vec<Sprite>,
}

impl Frame {
    /// Begin an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Text content of every text sprite, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sprites.iter().filter_map(|s| match s {
            Sprite::Text { text, .. } => Some(text.as_str()),
            Sprite::Texture { .. } => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Surface contract
// ---------------------------------------------------------------------------

/// What a surface currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    None,
    Text,
    Script,
}

/// A display-capable block.
///
/// Methods take `&self`; hosts that track presentation state use interior
/// mutability.
pub trait TextSurface: Send + Sync {
    /// Full texture size of the surface.
    fn texture_size(&self) -> Vec2;

    /// Visible surface size, centred inside the texture.
    fn surface_size(&self) -> Vec2;

    /// Switch the surface to the given content mode.
    fn set_content_type(&self, content: ContentType) -> Result<(), BlockError>;

    /// Replace whatever is shown with `frame`.
    fn present(&self, frame: Frame) -> Result<(), BlockError>;

    /// Drawable region derived from the texture and surface sizes.
    fn viewport(&self) -> Viewport {
        Viewport::centered(self.texture_size(), self.surface_size())
    }
}
