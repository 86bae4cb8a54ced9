//! Manifest document types describing a dashboard to build.
//!
//! The types in this module mirror the structure of the YAML manifests
//! consumed by the decoder. Optional values stay optional here; whether a
//! field contributes a builder option is decided during decoding, not
//! during deserialization.

use serde::{Deserialize, Serialize};

use crate::{dashboard::TagAnnotation, panels::PanelConfig, variables::VariableConfig};

/// Root manifest document describing one dashboard.
///
/// # Examples
///
/// ```
/// use dashforge::DashboardConfig;
///
/// let yaml = r##"
/// title: Cluster overview
/// editable: true
/// tags: [infra]
/// rows:
///   - name: Health
///     panels:
///       - text:
///           title: Welcome
///           markdown: "# Hello"
/// "##;
/// let config: DashboardConfig = serde_yaml::from_str(yaml,).expect("valid manifest",);
/// assert_eq!(config.rows.len(), 1);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct DashboardConfig
{
    /// Dashboard title.
    pub title: String,

    /// Whether the dashboard may be edited in the UI.
    #[serde(default)]
    pub editable: bool,

    /// Whether the crosshair is shared across panels.
    #[serde(default, alias = "sharedCrosshair")]
    pub shared_crosshair: bool,

    /// Tags attached to the dashboard, order preserved.
    #[serde(default)]
    pub tags: Vec<String,>,

    /// Automatic refresh interval, e.g. `"30s"`; empty means disabled.
    #[serde(default, alias = "autoRefresh")]
    pub auto_refresh: String,

    /// Annotation layers keyed on event tags, order preserved.
    #[serde(default, alias = "tagsAnnotations")]
    pub tags_annotations: Vec<TagAnnotation,>,

    /// Template variables, order preserved.
    #[serde(default)]
    pub variables: Vec<VariableConfig,>,

    /// Panel rows, order preserved.
    #[serde(default)]
    pub rows: Vec<RowConfig,>,
}

/// Row entry of a dashboard manifest.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct RowConfig
{
    /// Row title shown in the collapsible header.
    #[serde(default)]
    pub name: String,

    /// Panels placed on the row, in order.
    #[serde(default)]
    pub panels: Vec<PanelConfig,>,
}
