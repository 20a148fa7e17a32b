//! Signed rectangle geometry in abstract surface units.
//!
//! Window positions are expressed container-local (origin at the container's
//! top-left), pointer events surface-global. Origins are signed so transient
//! gesture math can go negative before clamping; sizes are unsigned.

/// A point in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Signed-origin rectangle with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Clamp a candidate top-left so a window of `size` stays fully inside a
/// container of `bounds`. When the window is larger than the container the
/// origin pins to the container's top-left edge.
pub fn clamp_position(x: i32, y: i32, size: Size, bounds: Size) -> Point {
    let max_x = bounds.width as i32 - size.width as i32;
    let max_y = bounds.height as i32 - size.height as i32;
    Point::new(x.min(max_x).max(0), y.min(max_y).max(0))
}

/// Clamp a candidate dimension to `[min, max]`. `candidate` is signed because
/// a resize gesture can drag the pointer past the window's origin. A max below
/// min (the window already pressed against the container edge at its minimum)
/// resolves in favor of the minimum.
pub fn clamp_dimension(candidate: i64, min: u32, max: i64) -> u32 {
    let min = min as i64;
    let max = max.max(min);
    candidate.clamp(min, max) as u32
}
