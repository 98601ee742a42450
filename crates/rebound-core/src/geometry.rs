//! Plain geometry for scroll positions and content bounds.
//!
//! Positions follow the translate convention: the content sits at `0` when
//! scrolled to the start and moves towards negative values as the user
//! scrolls forward, down to `max_scroll_*` (always `<= 0`).

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn with(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn orthogonal(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Scrollable extent as reported by the host's measurement provider.
///
/// The core only reads these values. Non-finite values are not rejected and
/// flow straight into position math.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub max_scroll_x: f32,
    pub max_scroll_y: f32,
    pub wrapper_width: f32,
    pub wrapper_height: f32,
    pub has_scroll_x: bool,
    pub has_scroll_y: bool,
}

impl Bounds {
    /// Derives bounds from wrapper and content sizes.
    ///
    /// An axis only scrolls when it is enabled and the content overflows the
    /// wrapper; a non-scrolling axis reports a `max_scroll` of `0`.
    pub fn from_sizes(
        wrapper_width: f32,
        wrapper_height: f32,
        content_width: f32,
        content_height: f32,
        scroll_x: bool,
        scroll_y: bool,
    ) -> Self {
        let overflow_x = wrapper_width - content_width;
        let overflow_y = wrapper_height - content_height;
        let has_scroll_x = scroll_x && overflow_x < 0.0;
        let has_scroll_y = scroll_y && overflow_y < 0.0;
        Self {
            max_scroll_x: if has_scroll_x { overflow_x } else { 0.0 },
            max_scroll_y: if has_scroll_y { overflow_y } else { 0.0 },
            wrapper_width,
            wrapper_height,
            has_scroll_x,
            has_scroll_y,
        }
    }

    /// Turns off scrolling on axes that are not enabled.
    pub fn restricted(mut self, scroll_x: bool, scroll_y: bool) -> Self {
        if !scroll_x {
            self.has_scroll_x = false;
            self.max_scroll_x = 0.0;
        }
        if !scroll_y {
            self.has_scroll_y = false;
            self.max_scroll_y = 0.0;
        }
        self
    }

    pub fn has_scroll(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.has_scroll_x,
            Axis::Vertical => self.has_scroll_y,
        }
    }

    /// The far edge of the axis (`<= 0`).
    pub fn lower(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.max_scroll_x,
            Axis::Vertical => self.max_scroll_y,
        }
    }

    pub fn wrapper_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.wrapper_width,
            Axis::Vertical => self.wrapper_height,
        }
    }

    /// Returns true if `value` lies outside the scrollable range of `axis`.
    pub fn exceeds(&self, axis: Axis, value: f32) -> bool {
        value > 0.0 || value < self.lower(axis)
    }

    pub fn clamp_axis(&self, axis: Axis, value: f32) -> f32 {
        if !self.has_scroll(axis) || value > 0.0 {
            0.0
        } else if value < self.lower(axis) {
            self.lower(axis)
        } else {
            value
        }
    }

    /// Nearest in-bounds position.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            self.clamp_axis(Axis::Horizontal, point.x),
            self.clamp_axis(Axis::Vertical, point.y),
        )
    }
}
