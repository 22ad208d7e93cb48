//! Pure layout helpers for the SVG charts.

use std::f64::consts::PI;

/// Round `max` up to a 1 / 2 / 5 × 10ⁿ step so axis labels stay readable.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let fraction = max / magnitude;
    let step = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Plot area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 48.0,
            bottom: 28.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.bottom).max(0.0)
    }

    /// Y coordinate of `value` on a scale from 0 to `max`.
    pub fn y_of(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        self.plot_height() * (1.0 - ratio)
    }

    /// Evenly spaced axis ticks from 0 to `max`, bottom first.
    pub fn ticks(&self, max: f64, count: usize) -> Vec<(f64, f64)> {
        (0..=count)
            .map(|i| {
                let value = max * i as f64 / count.max(1) as f64;
                (value, self.y_of(value, max))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per value, equal slots, `gap` share of each slot left empty.
pub fn bar_layout(values: &[f64], frame: &Frame, max: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = frame.plot_width() / values.len() as f64;
    let width = slot * (1.0 - gap.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = frame.y_of(*value, max);
            BarRect {
                x: frame.left + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: frame.plot_height() - y,
            }
        })
        .collect()
}

/// Center x of each slot, shared by bar labels and line points.
pub fn slot_centers(count: usize, frame: &Frame) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slot = frame.plot_width() / count as f64;
    (0..count)
        .map(|i| frame.left + slot * i as f64 + slot / 2.0)
        .collect()
}

pub fn line_points(values: &[f64], frame: &Frame, max: f64) -> Vec<(f64, f64)> {
    slot_centers(values.len(), frame)
        .into_iter()
        .zip(values)
        .map(|(x, value)| (x, frame.y_of(*value, max)))
        .collect()
}

/// `points` attribute of an SVG polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One donut slice in radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
    pub share: f64,
}

/// Split the full circle by value. Non-positive values get no slice.
pub fn donut_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    values
        .iter()
        .filter(|v| **v > 0.0)
        .map(|value| {
            let share = value / total;
            let start = angle;
            angle += share * 2.0 * PI;
            Slice {
                start,
                end: angle,
                share,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for a ring segment. A full ring is drawn as two halves since a
/// single arc cannot start and end on the same point.
pub fn ring_path(cx: f64, cy: f64, outer: f64, inner: f64, slice: &Slice) -> String {
    if slice.end - slice.start >= 2.0 * PI - 1e-9 {
        let half = Slice {
            start: slice.start,
            end: slice.start + PI,
            share: 0.5,
        };
        let other = Slice {
            start: slice.start + PI,
            end: slice.end,
            share: 0.5,
        };
        return format!(
            "{} {}",
            ring_path(cx, cy, outer, inner, &half),
            ring_path(cx, cy, outer, inner, &other)
        );
    }
    let large = if slice.end - slice.start > PI { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, slice.start);
    let (ox2, oy2) = polar(cx, cy, outer, slice.end);
    let (ix2, iy2) = polar(cx, cy, inner, slice.end);
    let (ix1, iy1) = polar(cx, cy, inner, slice.start);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        ox1, oy1, outer, outer, large, ox2, oy2, ix2, iy2, inner, inner, large, ix1, iy1
    )
}

/// Short axis label: 1200 -> "1.2k", 3400000 -> "3.4M".
pub fn compact_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(10.0), 10.0);
        assert_eq!(nice_max(130.0), 200.0);
        assert_eq!(nice_max(4200.0), 5000.0);
    }

    #[test]
    fn test_bar_heights_are_proportional() {
        let frame = Frame::new(248.0, 128.0);
        let bars = bar_layout(&[50.0, 100.0, 0.0, 150.0], &frame, 100.0, 0.2);
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[1].height, frame.plot_height());
        assert_eq!(bars[0].height, frame.plot_height() / 2.0);
        assert_eq!(bars[2].height, 0.0);
        // values above the scale are clipped to the top
        assert_eq!(bars[3].y, 0.0);
        assert_eq!(bars[0].x, 48.0 + 5.0);
        assert_eq!(bars[0].width, 40.0);
    }

    #[test]
    fn test_line_points_follow_slots() {
        let frame = Frame::new(148.0, 128.0);
        let points = line_points(&[0.0, 10.0], &frame, 10.0);
        assert_eq!(points, vec![(73.0, 100.0), (123.0, 0.0)]);
        assert_eq!(polyline(&points), "73.0,100.0 123.0,0.0");
    }

    #[test]
    fn test_donut_slices_cover_circle() {
        let slices = donut_slices(&[1.0, 0.0, 3.0]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].share, 0.25);
        assert!((slices[1].end - 2.0 * PI).abs() < 1e-9);
        assert!(donut_slices(&[0.0, -1.0]).is_empty());
    }

    #[test]
    fn test_full_ring_is_split() {
        let slices = donut_slices(&[5.0]);
        let path = ring_path(50.0, 50.0, 40.0, 25.0, &slices[0]);
        assert_eq!(path.matches('M').count(), 2);
    }

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(950.0), "950");
        assert_eq!(compact_number(1200.0), "1.2k");
        assert_eq!(compact_number(3_400_000.0), "3.4M");
        assert_eq!(compact_number(2.5), "2.5");
    }
}
