//! Panel configuration sub-kinds and their dispatch.
//!
//! A manifest panel entry carries at most one populated sub-kind among
//! graph, table, single-stat, and text. Dispatch inspects the fields in
//! that fixed priority order and delegates to the first one found, so a
//! manifest that somehow populates several kinds resolves deterministically
//! to the highest-priority one. An entry with no populated kind fails with
//! the [`Error::PanelNotConfigured`] sentinel.

use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{GraphPanel, Panel, SingleStatPanel, TablePanel, Target, TextPanel},
    error::Error,
};

/// Panel entry of a manifest row.
///
/// # Examples
///
/// ```
/// use dashforge::PanelConfig;
///
/// let yaml = r##"
/// text:
///   title: Welcome
///   markdown: "# Hello"
/// "##;
/// let panel: PanelConfig = serde_yaml::from_str(yaml,).expect("valid panel",);
/// assert!(panel.text.is_some());
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct PanelConfig
{
    /// Time-series graph sub-kind.
    #[serde(default)]
    pub graph: Option<GraphConfig,>,

    /// Tabular sub-kind.
    #[serde(default)]
    pub table: Option<TableConfig,>,

    /// Single-value stat sub-kind.
    #[serde(default, alias = "singlestat")]
    pub single_stat: Option<SingleStatConfig,>,

    /// Free-form text sub-kind.
    #[serde(default)]
    pub text: Option<TextConfig,>,
}

impl PanelConfig
{
    /// Decodes the entry into a panel by delegating to the first populated
    /// sub-kind, in priority order graph, table, single stat, text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PanelNotConfigured`](Error::PanelNotConfigured) when
    /// no sub-kind is populated, or the delegated sub-kind's own decode
    /// error.
    pub fn to_panel(&self,) -> Result<Panel, Error,>
    {
        if let Some(graph,) = &self.graph {
            return graph.to_panel();
        }
        if let Some(table,) = &self.table {
            return table.to_panel();
        }
        if let Some(single_stat,) = &self.single_stat {
            return single_stat.to_panel();
        }
        if let Some(text,) = &self.text {
            return Ok(text.to_panel(),);
        }

        Err(Error::PanelNotConfigured,)
    }
}

/// Time-series graph configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct GraphConfig
{
    /// Panel title.
    pub title: String,

    /// Horizontal span override in grid units.
    #[serde(default)]
    pub span: Option<f32,>,

    /// Panel height override, e.g. `"400px"`.
    #[serde(default)]
    pub height: Option<String,>,

    /// Datasource override for the panel targets.
    #[serde(default)]
    pub datasource: Option<String,>,

    /// Queries plotted by the panel.
    #[serde(default)]
    pub targets: Vec<TargetConfig,>,
}

impl GraphConfig
{
    fn to_panel(&self,) -> Result<Panel, Error,>
    {
        let targets = decode_targets(&self.targets,)?;

        Ok(Panel::Graph(GraphPanel {
            title:      self.title.clone(),
            span:       self.span,
            height:     self.height.clone(),
            datasource: self.datasource.clone(),
            targets,
        },),)
    }
}

/// Tabular panel configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct TableConfig
{
    /// Panel title.
    pub title: String,

    /// Horizontal span override in grid units.
    #[serde(default)]
    pub span: Option<f32,>,

    /// Panel height override, e.g. `"400px"`.
    #[serde(default)]
    pub height: Option<String,>,

    /// Datasource override for the panel targets.
    #[serde(default)]
    pub datasource: Option<String,>,

    /// Columns hidden from the rendered table.
    #[serde(default, alias = "hiddenColumns")]
    pub hidden_columns: Vec<String,>,

    /// Queries backing the table rows.
    #[serde(default)]
    pub targets: Vec<TargetConfig,>,
}

impl TableConfig
{
    fn to_panel(&self,) -> Result<Panel, Error,>
    {
        let targets = decode_targets(&self.targets,)?;

        Ok(Panel::Table(TablePanel {
            title:          self.title.clone(),
            span:           self.span,
            height:         self.height.clone(),
            datasource:     self.datasource.clone(),
            hidden_columns: self.hidden_columns.clone(),
            targets,
        },),)
    }
}

/// Single-value stat configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct SingleStatConfig
{
    /// Panel title.
    pub title: String,

    /// Horizontal span override in grid units.
    #[serde(default)]
    pub span: Option<f32,>,

    /// Panel height override, e.g. `"400px"`.
    #[serde(default)]
    pub height: Option<String,>,

    /// Datasource override for the query.
    #[serde(default)]
    pub datasource: Option<String,>,

    /// Query producing the displayed value.
    #[serde(default)]
    pub query: String,

    /// Unit suffix applied to the value.
    #[serde(default)]
    pub unit: String,

    /// Aggregation applied to the series, e.g. `"current"`.
    #[serde(default, alias = "valueType")]
    pub value_type: String,

    /// Boundary values separating the color ranges; empty or exactly two.
    #[serde(default)]
    pub thresholds: Vec<String,>,

    /// Colors for the value ranges; empty or exactly three.
    #[serde(default)]
    pub colors: Vec<String,>,
}

impl SingleStatConfig
{
    fn to_panel(&self,) -> Result<Panel, Error,>
    {
        if !self.thresholds.is_empty() && self.thresholds.len() != 2 {
            return Err(Error::decode("single stat thresholds must contain exactly 2 values",),);
        }
        if !self.colors.is_empty() && self.colors.len() != 3 {
            return Err(Error::decode("single stat colors must contain exactly 3 values",),);
        }

        Ok(Panel::SingleStat(SingleStatPanel {
            title:      self.title.clone(),
            span:       self.span,
            height:     self.height.clone(),
            datasource: self.datasource.clone(),
            query:      self.query.clone(),
            unit:       self.unit.clone(),
            value_type: self.value_type.clone(),
            thresholds: self.thresholds.clone(),
            colors:     self.colors.clone(),
        },),)
    }
}

/// Free-form text configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct TextConfig
{
    /// Panel title.
    pub title: String,

    /// Horizontal span override in grid units.
    #[serde(default)]
    pub span: Option<f32,>,

    /// Panel height override, e.g. `"400px"`.
    #[serde(default)]
    pub height: Option<String,>,

    /// Markdown body; takes effect when non-empty.
    #[serde(default)]
    pub markdown: String,

    /// HTML body; takes effect when non-empty.
    #[serde(default)]
    pub html: String,
}

impl TextConfig
{
    /// Text panels carry no nested structure, so decoding cannot fail.
    fn to_panel(&self,) -> Panel
    {
        Panel::Text(TextPanel {
            title:    self.title.clone(),
            span:     self.span,
            height:   self.height.clone(),
            markdown: self.markdown.clone(),
            html:     self.html.clone(),
        },)
    }
}

/// Query target entry carrying at most one populated backend.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct TargetConfig
{
    /// Prometheus backend sub-kind.
    #[serde(default)]
    pub prometheus: Option<PrometheusTargetConfig,>,
}

impl TargetConfig
{
    fn to_target(&self,) -> Result<Target, Error,>
    {
        if let Some(prometheus,) = &self.prometheus {
            return Ok(prometheus.to_target(),);
        }

        Err(Error::TargetNotConfigured,)
    }
}

/// Prometheus query target configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct PrometheusTargetConfig
{
    /// PromQL expression evaluated by the backend.
    pub query: String,

    /// Legend template applied to resulting series.
    #[serde(default)]
    pub legend: String,

    /// Reference identifier for the query.
    #[serde(default, alias = "ref")]
    pub ref_id: Option<String,>,
}

impl PrometheusTargetConfig
{
    fn to_target(&self,) -> Target
    {
        Target::Prometheus {
            query:  self.query.clone(),
            legend: self.legend.clone(),
            ref_id: self.ref_id.clone(),
        }
    }
}

/// Decodes target entries in order, aborting on the first failure.
fn decode_targets(configs: &[TargetConfig],) -> Result<Vec<Target,>, Error,>
{
    let mut targets = Vec::with_capacity(configs.len(),);
    for config in configs {
        targets.push(config.to_target()?,);
    }

    Ok(targets,)
}
