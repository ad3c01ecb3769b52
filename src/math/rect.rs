#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge, exclusive; widened so `x + width` can't overflow
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Zero or negative extent draws nothing
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }

    /// True when `self` lies entirely inside a `width` x `height` area anchored at the origin
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.right() <= width as i64
            && self.bottom() <= height as i64
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        // x1 - x0 is bounded by the narrower width, so it fits back into i32
        if x1 > x0 as i64 && y1 > y0 as i64 {
            Some(Rect::new(x0, y0, (x1 - x0 as i64) as i32, (y1 - y0 as i64) as i32))
        } else {
            None
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

/// Top-left position that centers a `width` x `height` box on the screen
pub fn centered(screen_width: i32, screen_height: i32, width: i32, height: i32) -> (i32, i32) {
    (screen_width / 2 - width / 2, screen_height / 2 - height / 2)
}
