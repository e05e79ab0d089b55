//! Plot descriptions handed to an external renderer
//!
//! Nothing is drawn here. Each builder returns an owned [Figure] with the
//! data and labels, which serialises to JSON for whatever plotting tool is
//! downstream.

// crate modules
use crate::profile::{Plane, Profile};

// dosekit modules
use dosekit_phantom::Axis;

// external crates
use serde::{Deserialize, Serialize};

/// Title shared by every profile figure
pub const PROFILE_SUPTITLE: &str = "Dose distribution";

/// A single figure and its data series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure-level title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suptitle: Option<String>,
    /// Axes-level title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Horizontal axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    /// Vertical axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Depth axis label, 3D figures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_label: Option<String>,
    /// Data to plot
    pub series: Series,
}

/// Plotted data, tagged by plot kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Series {
    /// 2D line with optional point markers
    Line {
        x: Vec<f64>,
        y: Vec<f64>,
        marker: Option<String>,
    },
    /// 3D scatter with uniform transparency
    Scatter3d {
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
        alpha: f64,
    },
}

/// Line figure for a profile along any axis
///
/// ```rust
/// # use dosekit_dose::{profile_figure, Profile, Series};
/// # use dosekit_phantom::Axis;
/// let profile = Profile {
///     axis: Axis::Y,
///     coordinates: vec![-0.5, 0.5],
///     values: vec![1.0, 2.0],
/// };
/// let figure = profile_figure(&profile);
/// assert_eq!(figure.title.as_deref(), Some("Y profile"));
/// assert!(matches!(figure.series, Series::Line { .. }));
/// ```
pub fn profile_figure(profile: &Profile) -> Figure {
    Figure {
        suptitle: Some(PROFILE_SUPTITLE.to_string()),
        title: Some(profile_title(profile.axis)),
        x_label: Some("Distance, mm".to_string()),
        y_label: Some("Dose, a.u.".to_string()),
        z_label: None,
        series: Series::Line {
            x: profile.coordinates.clone(),
            y: profile.values.clone(),
            marker: Some("*".to_string()),
        },
    }
}

/// 3D scatter figure of the XY plane
pub fn xy_scatter_figure(plane: &Plane) -> Figure {
    Figure {
        suptitle: None,
        title: None,
        x_label: Some("X, mm".to_string()),
        y_label: Some("Y, mm".to_string()),
        z_label: Some("Dose, a.u.".to_string()),
        series: Series::Scatter3d {
            x: plane.x.clone(),
            y: plane.y.clone(),
            z: plane.dose.clone(),
            alpha: 0.1,
        },
    }
}

fn profile_title(axis: Axis) -> String {
    format!("{axis} profile")
}
