//! Animated Bohr shell view: a labelled nucleus with concentric electron shells.

use serde::Serialize;

use crate::catalog::ElementRecord;

/// Electrons each shell holds before the next one opens.
pub const SHELL_CAPACITIES: [u32; 7] = [2, 8, 8, 18, 18, 32, 32];
/// Gap between consecutive shells; shell k sits at `(k + 1) * SHELL_SPACING`.
pub const SHELL_SPACING: f32 = 40.0;
/// Angle every electron advances per animation frame, in radians.
pub const SHELL_SPEED: f32 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellNucleus {
    pub label: String,
    pub color: &'static str,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shell {
    pub radius: f32,
    /// Starting angle of each electron, in radians.
    pub electrons: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellModel {
    pub nucleus: ShellNucleus,
    pub shells: Vec<Shell>,
    pub electron_radius: f32,
    pub speed: f32,
}

/// Split `electrons` over the shells in filling order.
pub fn shell_occupancy(electrons: u32) -> Vec<u32> {
    let mut left = electrons;
    let mut occupancy = Vec::new();
    for capacity in SHELL_CAPACITIES {
        if left == 0 {
            break;
        }
        let n = left.min(capacity);
        occupancy.push(n);
        left -= n;
    }
    occupancy
}

pub fn render_shells(element: &ElementRecord) -> ShellModel {
    let shells = shell_occupancy(element.atomic_number)
        .into_iter()
        .enumerate()
        .map(|(k, count)| Shell {
            radius: (k as f32 + 1.0) * SHELL_SPACING,
            electrons: (0..count)
                .map(|i| i as f32 * std::f32::consts::TAU / count as f32)
                .collect(),
        })
        .collect();

    ShellModel {
        nucleus: ShellNucleus {
            label: element.symbol.clone(),
            color: "gold",
            radius: 20.0,
        },
        shells,
        electron_radius: 5.0,
        speed: SHELL_SPEED,
    }
}

impl ShellModel {
    pub fn electron_count(&self) -> usize {
        self.shells.iter().map(|s| s.electrons.len()).sum()
    }

    /// Electron positions in the z=0 plane after `frame` animation steps, shell by shell.
    pub fn positions_at(&self, frame: u32) -> Vec<(f32, f32)> {
        let offset = frame as f32 * self.speed;
        self.shells
            .iter()
            .flat_map(|shell| {
                shell.electrons.iter().map(move |angle| {
                    let (s, c) = (angle + offset).sin_cos();
                    (shell.radius * c, shell.radius * s)
                })
            })
            .collect()
    }
}
