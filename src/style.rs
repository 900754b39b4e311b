//! Diagram style: sizes, stroke widths and colours.
//!
//! A `Style` is read-only for the whole pipeline. Every spatial measurement is
//! derived from `grid`, which also doubles as the outer margin.

use crate::errors::StyleError;

/// Default sizes and colours
pub mod defaults {
    pub const GRID: f64 = 30.0;
    pub const EAR_RADIUS: f64 = 6.0;
    pub const THROAT_RADIUS: f64 = 6.0;
    pub const APPLICATOR_RADIUS: f64 = 6.0;
    pub const PIPE_WIDTH: f64 = 2.0;
    pub const BOX_PADDING: f64 = 12.0;
    pub const FONT_SIZE: f64 = 12.0;
    pub const COLOR_PIPE: &str = "#222";
    pub const COLOR_BOX: &str = "#222";
    pub const COLOR_FILL: &str = "#222";
    pub const COLOR_BG: &str = "white";
}

/// Visual configuration threaded through layout and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Base spatial unit
    pub grid: f64,
    pub ear_radius: f64,
    pub throat_radius: f64,
    pub applicator_radius: f64,
    /// Pipe stroke thickness; fan-out dots and crossing disks scale with it
    pub pipe_width: f64,
    /// Interior margin inside an abstraction's box
    pub box_padding: f64,
    pub font_size: f64,
    pub color_pipe: String,
    pub color_box: String,
    pub color_fill: String,
    pub color_bg: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            grid: defaults::GRID,
            ear_radius: defaults::EAR_RADIUS,
            throat_radius: defaults::THROAT_RADIUS,
            applicator_radius: defaults::APPLICATOR_RADIUS,
            pipe_width: defaults::PIPE_WIDTH,
            box_padding: defaults::BOX_PADDING,
            font_size: defaults::FONT_SIZE,
            color_pipe: defaults::COLOR_PIPE.to_string(),
            color_box: defaults::COLOR_BOX.to_string(),
            color_fill: defaults::COLOR_FILL.to_string(),
            color_bg: defaults::COLOR_BG.to_string(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, grid: f64) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_box_padding(mut self, padding: f64) -> Self {
        self.box_padding = padding;
        self
    }

    pub fn with_pipe_width(mut self, width: f64) -> Self {
        self.pipe_width = width;
        self
    }

    /// Half a grid unit: the offset of fan points and unused-ear stubs.
    #[inline]
    pub fn half_grid(&self) -> f64 {
        self.grid / 2.0
    }

    /// Outer margin around the measured expression.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.grid
    }

    /// Check that every numeric field is usable for layout.
    ///
    /// `grid` must be strictly positive; the remaining sizes may be zero.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.grid.is_finite() {
            return Err(StyleError::NotFinite { field: "grid" });
        }
        if self.grid <= 0.0 {
            return Err(StyleError::NotPositive {
                field: "grid",
                value: self.grid,
            });
        }

        let sizes = [
            ("ear_radius", self.ear_radius),
            ("throat_radius", self.throat_radius),
            ("applicator_radius", self.applicator_radius),
            ("pipe_width", self.pipe_width),
            ("box_padding", self.box_padding),
            ("font_size", self.font_size),
        ];
        for (field, value) in sizes {
            if !value.is_finite() {
                return Err(StyleError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(StyleError::Negative { field, value });
            }
        }
        Ok(())
    }
}
