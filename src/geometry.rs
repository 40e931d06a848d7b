//! Bohr-style orbit geometry for the workspace visualizations.
//! One nucleus at the origin, electrons evenly spaced on a single ring.

use serde::Serialize;

use crate::catalog::ElementRecord;

/// Radius of the electron ring, in plot units.
pub const ORBIT_RADIUS: f32 = 50.0;

/// Marker appearance handed to the plotting side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: f32,
    pub color: &'static str,
    pub opacity: f32,
}

pub const NUCLEUS_STYLE: MarkerStyle = MarkerStyle {
    size: 20.0,
    color: "rgba(255, 0, 0, 0.8)",
    opacity: 0.8,
};

pub const ELECTRON_STYLE: MarkerStyle = MarkerStyle {
    size: 10.0,
    color: "blue",
    opacity: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Nucleus,
    Electron,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub kind: PointKind,
    pub style: MarkerStyle,
    pub label: String,
}

/// Render-agnostic point list for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PointCloud {
    pub points: Vec<PlotPoint>,
}

impl PointCloud {
    pub fn nucleus(&self) -> &PlotPoint {
        &self.points[0]
    }

    pub fn electrons(&self) -> &[PlotPoint] {
        &self.points[1..]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Angle (degrees) of the i-th of n electrons. None when there are no electrons.
pub fn electron_angle_deg(i: u32, n: u32) -> Option<f32> {
    if n == 0 {
        return None;
    }
    Some(i as f32 * (360.0 / n as f32))
}

/// Build the nucleus + electron ring for an element.
/// Always returns `1 + atomic_number` points, the nucleus first.
pub fn render_geometry(element: &ElementRecord) -> PointCloud {
    let n = element.atomic_number;
    let mut points = Vec::with_capacity(n as usize + 1);

    points.push(PlotPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        kind: PointKind::Nucleus,
        style: NUCLEUS_STYLE,
        label: "Nucleus".to_string(),
    });

    for i in 0..n {
        let Some(theta_deg) = electron_angle_deg(i, n) else {
            break;
        };
        let (s, c) = theta_deg.to_radians().sin_cos();
        points.push(PlotPoint {
            x: ORBIT_RADIUS * c,
            y: ORBIT_RADIUS * s,
            z: 0.0,
            kind: PointKind::Electron,
            style: ELECTRON_STYLE,
            label: format!("Electron {}", i + 1),
        });
    }

    PointCloud { points }
}
