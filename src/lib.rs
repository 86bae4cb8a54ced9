//! Utilities for decoding declarative dashboard manifests.
//!
//! The library loads YAML manifests describing a dashboard (title, rows,
//! panels, variables) and translates every populated field into an ordered
//! list of builder options, which the bundled builder surface folds into a
//! serializable dashboard object. Decoding is a pure, synchronous,
//! single-pass traversal with strictly fail-fast error propagation.

mod config;
mod dashboard;
mod decoder;
mod error;
mod panels;
mod variables;

pub use config::{DashboardConfig, RowConfig};
pub use dashboard::{
    Dashboard, DashboardOption, GraphPanel, Panel, Row, SingleStatPanel, TablePanel,
    TagAnnotation, Target, TemplateVariable, TextPanel, TooltipMode,
};
pub use decoder::{dashboard_options, decode_dashboard, load_dashboard, parse_dashboard};
pub use error::{io_error, Error};
pub use panels::{
    GraphConfig, PanelConfig, PrometheusTargetConfig, SingleStatConfig, TableConfig, TargetConfig,
    TextConfig,
};
pub use variables::{
    ConstVariableConfig, CustomVariableConfig, IntervalVariableConfig, QueryVariableConfig,
    VariableConfig,
};
