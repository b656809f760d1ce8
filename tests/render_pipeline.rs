//! End-to-end tests for the load -> scale -> render pipeline.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use proptest::prelude::*;

use clusterplot::dataset::Dataset;
use clusterplot::geometry::Point;
use clusterplot::output::PngEncoder;
use clusterplot::plots::ClusterPlot;
use clusterplot::scale::{PlotMapping, Viewport};
use clusterplot::Error;

#[test]
fn load_and_render_worked_example() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1\n1.0 1.0\n1\n-1.0 -1.0\n").unwrap();

    let dataset = Dataset::load(file.path()).unwrap();
    let frame = ClusterPlot::new().to_framebuffer(&dataset).unwrap();

    // max_x = max_y = 1, scale_x = 360, scale_y = 260:
    // the data point lands at (760, 40), the centroid at (40, 560).
    assert_eq!(
        frame.get_pixel(760, 40),
        Some(clusterplot::color::Rgba::BLUE)
    );
    assert_eq!(
        frame.get_pixel(40, 560),
        Some(clusterplot::color::Rgba::RED)
    );
}

#[test]
fn identical_inputs_produce_identical_png_bytes() {
    let dataset = Dataset::parse("2\n0.5 0.5\n-2.0 1.5\n1\n0.0 0.0\n").unwrap();
    let plot = ClusterPlot::new();

    let a = PngEncoder::to_bytes(&plot.to_framebuffer(&dataset).unwrap()).unwrap();
    let b = PngEncoder::to_bytes(&plot.to_framebuffer(&dataset).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_dataset_renders_without_error() {
    let frame = ClusterPlot::new().to_framebuffer(&Dataset::default()).unwrap();
    assert_eq!(frame.width(), 800);
    assert_eq!(frame.height(), 600);
}

#[test]
fn malformed_file_never_reaches_the_renderer() {
    // Declares three data points but provides only two.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "3\n1 1\n2 2\n").unwrap();

    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput { .. }));
}

proptest! {
    #[test]
    fn forward_map_round_trips(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
    ) {
        let dataset = Dataset {
            data_points: vec![Point::new(x, y)],
            centroids: vec![],
        };
        let vp = Viewport::from_dataset(&dataset);
        let map = PlotMapping::new(vp, 800, 600, 40).unwrap();

        let rx = map.data_x(map.screen_x(x));
        let ry = map.data_y(map.screen_y(y));
        prop_assert!((rx - x).abs() <= vp.max_x * 1e-4);
        prop_assert!((ry - y).abs() <= vp.max_y * 1e-4);
    }

    #[test]
    fn viewport_contains_every_coordinate(
        points in proptest::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 0..40),
        centroids in proptest::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0), 0..8),
    ) {
        let dataset = Dataset {
            data_points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            centroids: centroids.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        };
        let vp = Viewport::from_dataset(&dataset);

        for p in dataset.data_points.iter().chain(dataset.centroids.iter()) {
            prop_assert!(vp.contains(p.x, p.y));
        }
        prop_assert!(vp.max_x >= Viewport::MIN_EXTENT);
        prop_assert!(vp.max_y >= Viewport::MIN_EXTENT);
    }

    #[test]
    fn origin_lands_inside_the_margins(
        max_x in 1.0f32..1000.0,
        max_y in 1.0f32..1000.0,
        width in 200u32..2000,
        height in 200u32..2000,
    ) {
        let margin = 40;
        let vp = Viewport {
            max_x: max_x.ceil(),
            max_y: max_y.ceil(),
        };
        let map = PlotMapping::new(vp, width, height, margin).unwrap();

        let ox = map.screen_x(0.0);
        let oy = map.screen_y(0.0);
        let m = margin as f32;
        prop_assert!(ox >= m && ox <= width as f32 - m);
        prop_assert!(oy >= m && oy <= height as f32 - m);
    }

    #[test]
    fn rendering_never_panics_on_arbitrary_data(
        points in proptest::collection::vec((-1e6f32..1e6, -1e6f32..1e6), 0..30),
        width in 1u32..400,
        height in 1u32..400,
    ) {
        let dataset = Dataset {
            data_points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            centroids: vec![],
        };
        let plot = ClusterPlot::new().dimensions(width, height);
        let frame = plot.to_framebuffer(&dataset).unwrap();
        prop_assert_eq!(frame.width(), width);
        prop_assert_eq!(frame.height(), height);
    }
}
