//! Cluster scatter plot.
//!
//! Renders a [`Dataset`] onto a framebuffer in back-to-front order:
//! background fill, light-gray grid lines, black axis lines through the
//! data-space origin, numeric tick labels, data points as filled circles,
//! centroids as filled squares. Every element goes through one
//! [`PlotMapping`], so the whole frame stays geometrically consistent.

use crate::color::Rgba;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::render::{draw_circle, draw_line, draw_square, draw_text, text_height, text_width};
use crate::scale::{PlotMapping, Viewport};

/// Grid lines span `-GRID_DIVISIONS..=GRID_DIVISIONS` steps per axis.
const GRID_DIVISIONS: i32 = 4;

/// Gap in pixels between the drawing area and a tick label.
const LABEL_OFFSET: i32 = 4;

/// Builder for cluster scatter plots.
///
/// Holds only style and geometry configuration; the dataset is borrowed
/// per render call and never retained, so one plot value can draw any
/// number of frames.
#[derive(Debug, Clone)]
pub struct ClusterPlot {
    width: u32,
    height: u32,
    margin: u32,
    background: Rgba,
    grid_color: Rgba,
    axis_color: Rgba,
    label_color: Rgba,
    point_color: Rgba,
    centroid_color: Rgba,
    point_radius: i32,
    centroid_half_width: i32,
    label_size: u32,
}

impl Default for ClusterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterPlot {
    /// Create a plot with the default style: 800x600 canvas, 40 px margin,
    /// white background, blue points, red centroids.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 40,
            background: Rgba::WHITE,
            grid_color: Rgba::rgb(200, 200, 200),
            axis_color: Rgba::BLACK,
            label_color: Rgba::BLACK,
            point_color: Rgba::BLUE,
            centroid_color: Rgba::RED,
            point_radius: 3,
            centroid_half_width: 4,
            label_size: 1,
        }
    }

    /// Set the output dimensions used by [`ClusterPlot::to_framebuffer`].
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the pixel margin around the drawing area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the data point marker color.
    #[must_use]
    pub fn point_color(mut self, color: Rgba) -> Self {
        self.point_color = color;
        self
    }

    /// Set the centroid marker color.
    #[must_use]
    pub fn centroid_color(mut self, color: Rgba) -> Self {
        self.centroid_color = color;
        self
    }

    /// Set the data point marker radius in pixels.
    #[must_use]
    pub fn point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Render one complete frame into `fb`.
    ///
    /// The render is a pure function of the dataset and the framebuffer
    /// geometry: identical inputs produce pixel-identical frames. A canvas
    /// smaller than twice the margin gets the background fill only; grid
    /// and markers are skipped rather than drawn with negative sizes.
    pub fn render(&self, dataset: &Dataset, fb: &mut Framebuffer) -> Result<()> {
        fb.clear(self.background);

        let viewport = Viewport::from_dataset(dataset);
        let Ok(map) = PlotMapping::new(viewport, fb.width(), fb.height(), self.margin) else {
            // Degenerate drawing area: nothing to plot into.
            return Ok(());
        };

        self.draw_grid(fb, &map);
        self.draw_axes(fb, &map);
        self.draw_labels(fb, &map);

        for p in &dataset.data_points {
            let sx = map.screen_x(p.x).round() as i32;
            let sy = map.screen_y(p.y).round() as i32;
            draw_circle(fb, sx, sy, self.point_radius, self.point_color);
        }

        for c in &dataset.centroids {
            let sx = map.screen_x(c.x).round() as i32;
            let sy = map.screen_y(c.y).round() as i32;
            draw_square(fb, sx, sy, self.centroid_half_width, self.centroid_color);
        }

        Ok(())
    }

    /// Render into a freshly allocated framebuffer of the configured size.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are zero.
    pub fn to_framebuffer(&self, dataset: &Dataset) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        self.render(dataset, &mut fb)?;
        Ok(fb)
    }

    /// Grid lines at step `max/4` per axis, spanning the full domain
    /// inclusive of both endpoints.
    fn draw_grid(&self, fb: &mut Framebuffer, map: &PlotMapping) {
        let vp = map.viewport();
        let (left, right, top, bottom) = self.plot_edges(fb);

        for i in -GRID_DIVISIONS..=GRID_DIVISIONS {
            let sx = map.screen_x(i as f32 * vp.grid_step_x()).round() as i32;
            draw_line(fb, sx, top, sx, bottom, self.grid_color);

            let sy = map.screen_y(i as f32 * vp.grid_step_y()).round() as i32;
            draw_line(fb, left, sy, right, sy, self.grid_color);
        }
    }

    /// Axis lines through the data-space origin, heavier and darker than
    /// the grid.
    fn draw_axes(&self, fb: &mut Framebuffer, map: &PlotMapping) {
        let (left, _right, top, _bottom) = self.plot_edges(fb);
        let plot_w = fb.width() - 2 * self.margin;
        let plot_h = fb.height() - 2 * self.margin;

        let ox = map.screen_x(0.0).round() as i32;
        let oy = map.screen_y(0.0).round() as i32;

        // 2 px stroke centered on the origin crossing
        fb.fill_rect((ox - 1).max(0) as u32, top as u32, 2, plot_h, self.axis_color);
        fb.fill_rect(left as u32, (oy - 1).max(0) as u32, plot_w, 2, self.axis_color);
    }

    /// One tick label per gridline per axis, fixed to one decimal place,
    /// offset into the margin so it never overlaps the plotted region.
    fn draw_labels(&self, fb: &mut Framebuffer, map: &PlotMapping) {
        let vp = map.viewport();
        let (left, _, _, bottom) = self.plot_edges(fb);
        let glyph_h = text_height(self.label_size) as i32;

        for i in -GRID_DIVISIONS..=GRID_DIVISIONS {
            let x_value = i as f32 * vp.grid_step_x();
            let label = format!("{x_value:.1}");
            let sx = map.screen_x(x_value).round() as i32;
            let w = text_width(&label, self.label_size) as i32;
            draw_text(
                fb,
                sx - w / 2,
                bottom + LABEL_OFFSET,
                &label,
                self.label_size,
                self.label_color,
            );

            let y_value = i as f32 * vp.grid_step_y();
            let label = format!("{y_value:.1}");
            let sy = map.screen_y(y_value).round() as i32;
            let w = text_width(&label, self.label_size) as i32;
            draw_text(
                fb,
                left - LABEL_OFFSET - w,
                sy - glyph_h / 2,
                &label,
                self.label_size,
                self.label_color,
            );
        }
    }

    /// Screen-space edges of the margin-bounded drawing area.
    fn plot_edges(&self, fb: &Framebuffer) -> (i32, i32, i32, i32) {
        let m = self.margin as i32;
        (m, fb.width() as i32 - m, m, fb.height() as i32 - m)
    }
}
