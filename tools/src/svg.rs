//! SVG rendering of point sets, cluster labels and lines.

use itertools::Itertools as _;
use itertools::MinMaxResult;
use scatter::BoundingBox;
use scatter::LineEquation;
use scatter::Point2D;
use std::io;

const PALETTE: [&str; 6] = ["red", "blue", "green", "magenta", "orange", "cyan"];

/// Color of the points of the given cluster. Colors repeat after six
/// clusters.
pub fn cluster_color(label: usize) -> &'static str {
    PALETTE[label % PALETTE.len()]
}

/// The region of the plane shown by a [`Plot`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    /// The bounding box of `points` with a small margin, or `None` when
    /// `points` is empty.
    pub fn around(points: &[Point2D]) -> Option<Window> {
        let bb = BoundingBox::from_points(points.iter().cloned())?;
        let margin = f64::max(bb.width(), bb.height()) * 0.05;
        let margin = if margin > 0.0 { margin } else { 1.0 };
        Some(Window {
            x_min: bb.p_min.x - margin,
            x_max: bb.p_max.x + margin,
            y_min: bb.p_min.y - margin,
            y_max: bb.p_max.y + margin,
        })
    }

    pub fn contains(&self, p: Point2D) -> bool {
        const EPSILON: f64 = 1e-9;
        self.x_min - EPSILON <= p.x
            && p.x <= self.x_max + EPSILON
            && self.y_min - EPSILON <= p.y
            && p.y <= self.y_max + EPSILON
    }

    /// The part of `line` inside the window.
    pub fn clip(&self, line: &LineEquation) -> Option<(Point2D, Point2D)> {
        let mut crossings = Vec::with_capacity(4);
        if let (Some(y_left), Some(y_right)) = (line.y_at(self.x_min), line.y_at(self.x_max)) {
            crossings.push(Point2D::new(self.x_min, y_left));
            crossings.push(Point2D::new(self.x_max, y_right));
        }
        if line.a != 0.0 {
            for y in [self.y_min, self.y_max] {
                let x = (-line.b * y - line.c) / line.a;
                crossings.push(Point2D::new(x, y));
            }
        }

        // Order crossings along the line direction.
        let direction = Point2D::new(-line.b, line.a);
        match crossings
            .into_iter()
            .filter(|p| p.iter().all(|v| v.is_finite()) && self.contains(*p))
            .minmax_by(|p, q| f64::total_cmp(&p.dot(&direction), &q.dot(&direction)))
        {
            MinMaxResult::MinMax(start, end) => Some((start, end)),
            _ => None,
        }
    }
}

/// An SVG image of points and lines.
#[derive(Debug)]
pub struct Plot {
    window: Window,
    width: u32,
    height: u32,
    points: Vec<(Point2D, &'static str)>,
    segments: Vec<(Point2D, Point2D, &'static str)>,
}

impl Plot {
    pub fn new(window: Window, width: u32, height: u32) -> Plot {
        Plot {
            window,
            width,
            height,
            points: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: Point2D, color: &'static str) {
        self.points.push((point, color));
    }

    /// Adds the visible part of `line`. Returns false if the line does not
    /// cross the window.
    pub fn add_line(&mut self, line: &LineEquation, color: &'static str) -> bool {
        match self.window.clip(line) {
            Some((start, end)) => {
                self.segments.push((start, end, color));
                true
            }
            None => {
                tracing::warn!(%line, "line does not cross the plot window");
                false
            }
        }
    }

    /// Image coordinates of `p`, with the y axis pointing down.
    fn to_image(&self, p: Point2D) -> (f64, f64) {
        let Window {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.window;
        let x = (p.x - x_min) / (x_max - x_min) * self.width as f64;
        let y = (y_max - p.y) / (y_max - y_min) * self.height as f64;
        (x, y)
    }

    pub fn write<W>(&self, mut w: W) -> io::Result<()>
    where
        W: io::Write,
    {
        let (width, height) = (self.width, self.height);
        writeln!(
            w,
            r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#,
        )?;
        writeln!(w, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        for &(point, color) in &self.points {
            let (x, y) = self.to_image(point);
            writeln!(w, r#"<circle cx="{x}" cy="{y}" r="3" fill="{color}"/>"#)?;
        }
        for &(start, end, color) in &self.segments {
            let (x1, y1) = self.to_image(start);
            let (x2, y2) = self.to_image(end);
            writeln!(
                w,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="2"/>"#,
            )?;
        }
        writeln!(w, "</svg>")?;
        Ok(())
    }
}
