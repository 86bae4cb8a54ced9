//! Builder surface consumed by the manifest decoder.
//!
//! The types in this module form the option-driven construction API the
//! decoder targets: per-feature option values are accumulated into an
//! ordered list and folded, in that order, into a [`Dashboard`] by
//! [`Dashboard::new`]. The module performs no decoding of its own; it only
//! applies options and reports construction failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tooltip behavior shared by every panel of a dashboard.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq,)]
#[serde(rename_all = "snake_case")]
pub enum TooltipMode
{
    /// Hovering a panel highlights the same instant on every other panel.
    SharedCrosshair,
    /// Tooltips stay local to the hovered panel.
    Default,
}

/// Annotation source that marks events carrying the given tags.
///
/// Manifest documents embed this type directly, so it deserializes as well
/// as serializes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default,)]
pub struct TagAnnotation
{
    /// Display name of the annotation layer.
    pub name:       String,
    /// Datasource queried for annotation events.
    #[serde(default)]
    pub datasource: String,
    /// Color applied to the annotation markers.
    #[serde(default, alias = "iconColor")]
    pub icon_color: String,
    /// Tags selecting the events to display.
    #[serde(default)]
    pub tags:       Vec<String,>,
}

/// Query target resolved against a specific backend.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target
{
    /// PromQL query target.
    Prometheus {
        /// Query expression evaluated by the backend.
        query:  String,
        /// Legend template applied to resulting series.
        legend: String,
        /// Optional reference identifier for the query.
        ref_id: Option<String,>,
    },
}

/// Template variable declared on the dashboard.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateVariable
{
    /// Predefined list of interval durations.
    Interval {
        /// Variable name referenced in queries.
        name:    String,
        /// Label shown in the dashboard UI.
        label:   String,
        /// Candidate interval values.
        values:  Vec<String,>,
        /// Value selected by default.
        default: Option<String,>,
    },
    /// User-defined list of display/value pairs.
    Custom {
        /// Variable name referenced in queries.
        name:    String,
        /// Label shown in the dashboard UI.
        label:   String,
        /// Mapping of display text to substituted value.
        values:  BTreeMap<String, String,>,
        /// Value selected by default.
        default: Option<String,>,
    },
    /// Constant substitution that is not user-editable.
    Const {
        /// Variable name referenced in queries.
        name:  String,
        /// Label shown in the dashboard UI.
        label: String,
        /// Substituted value.
        value: String,
    },
    /// Values resolved by querying a datasource.
    Query {
        /// Variable name referenced in queries.
        name:        String,
        /// Label shown in the dashboard UI.
        label:       String,
        /// Datasource the request runs against.
        datasource:  Option<String,>,
        /// Request issued to enumerate candidate values.
        request:     String,
        /// Optional regex filtering the returned values.
        regex:       Option<String,>,
        /// Whether an "all" entry is offered.
        include_all: bool,
    },
}

/// Time-series graph panel.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct GraphPanel
{
    /// Panel title.
    pub title:      String,
    /// Horizontal span in grid units.
    pub span:       Option<f32,>,
    /// Panel height, e.g. `"400px"`.
    pub height:     Option<String,>,
    /// Datasource the targets run against.
    pub datasource: Option<String,>,
    /// Queries plotted by the panel.
    pub targets:    Vec<Target,>,
}

/// Tabular panel.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct TablePanel
{
    /// Panel title.
    pub title:          String,
    /// Horizontal span in grid units.
    pub span:           Option<f32,>,
    /// Panel height, e.g. `"400px"`.
    pub height:         Option<String,>,
    /// Datasource the targets run against.
    pub datasource:     Option<String,>,
    /// Columns hidden from the rendered table.
    pub hidden_columns: Vec<String,>,
    /// Queries backing the table rows.
    pub targets:        Vec<Target,>,
}

/// Single-value stat panel.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct SingleStatPanel
{
    /// Panel title.
    pub title:      String,
    /// Horizontal span in grid units.
    pub span:       Option<f32,>,
    /// Panel height, e.g. `"400px"`.
    pub height:     Option<String,>,
    /// Datasource the query runs against.
    pub datasource: Option<String,>,
    /// Query producing the displayed value.
    pub query:      String,
    /// Unit suffix applied to the value.
    pub unit:       String,
    /// Aggregation applied to the series, e.g. `"current"`.
    pub value_type: String,
    /// Boundary values separating the color ranges; empty or exactly two.
    pub thresholds: Vec<String,>,
    /// Colors for the value ranges; empty or exactly three.
    pub colors:     Vec<String,>,
}

/// Free-form text panel rendered from markdown or HTML.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct TextPanel
{
    /// Panel title.
    pub title:    String,
    /// Horizontal span in grid units.
    pub span:     Option<f32,>,
    /// Panel height, e.g. `"400px"`.
    pub height:   Option<String,>,
    /// Markdown body; takes effect when non-empty.
    pub markdown: String,
    /// HTML body; takes effect when non-empty.
    pub html:     String,
}

/// Panel of any supported kind, ready to be placed on a row.
#[derive(Debug, Serialize, Clone, PartialEq,)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel
{
    /// Time-series graph.
    Graph(GraphPanel,),
    /// Tabular view.
    Table(TablePanel,),
    /// Single-value stat.
    SingleStat(SingleStatPanel,),
    /// Free-form text.
    Text(TextPanel,),
}

/// Horizontal row of panels.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct Row
{
    /// Row title shown in the collapsible header.
    pub title:  String,
    /// Panels placed on the row, in order.
    pub panels: Vec<Panel,>,
}

/// Order-sensitive option applied by [`Dashboard::new`].
///
/// Exactly one of {Editable, ReadOnly} and one of {SharedCrosshair,
/// DefaultTooltip} is expected per construction; later options of the same
/// pair overwrite earlier ones, matching sequential application semantics.
#[derive(Debug, Clone, PartialEq,)]
pub enum DashboardOption
{
    /// Allow editing the dashboard in the UI.
    Editable,
    /// Forbid editing the dashboard in the UI.
    ReadOnly,
    /// Share the crosshair across panels.
    SharedCrosshair,
    /// Keep tooltips local to each panel.
    DefaultTooltip,
    /// Replace the dashboard tag list.
    Tags(Vec<String,>,),
    /// Set the automatic refresh interval, e.g. `"30s"`.
    AutoRefresh(String,),
    /// Append an annotation layer.
    TagsAnnotation(TagAnnotation,),
    /// Append a template variable declaration.
    Variable(TemplateVariable,),
    /// Append a row of panels.
    Row(Row,),
}

/// Builder-ready dashboard assembled from an ordered option list.
#[derive(Debug, Serialize, Clone, PartialEq,)]
pub struct Dashboard
{
    /// Dashboard title.
    pub title:        String,
    /// Whether the dashboard may be edited in the UI.
    pub editable:     bool,
    /// Tooltip behavior across panels.
    pub tooltip:      TooltipMode,
    /// Tags attached to the dashboard.
    pub tags:         Vec<String,>,
    /// Automatic refresh interval, when enabled.
    pub auto_refresh: Option<String,>,
    /// Annotation layers, in declaration order.
    pub annotations:  Vec<TagAnnotation,>,
    /// Template variables, in declaration order.
    pub variables:    Vec<TemplateVariable,>,
    /// Panel rows, in declaration order.
    pub rows:         Vec<Row,>,
}

impl Dashboard
{
    /// Constructs a dashboard from a title and an ordered option list.
    ///
    /// Options are applied strictly in the order given, so the caller
    /// controls which value wins when options overlap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`](Error::Build) when the title is blank after
    /// trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashforge::{Dashboard, DashboardOption};
    ///
    /// let dashboard = Dashboard::new(
    ///     "Cluster overview",
    ///     vec![DashboardOption::Editable, DashboardOption::DefaultTooltip],
    /// )
    /// .expect("construction failed",);
    /// assert!(dashboard.editable);
    /// ```
    pub fn new(title: &str, options: Vec<DashboardOption,>,) -> Result<Self, Error,>
    {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(Error::build("dashboard title cannot be empty",),);
        }

        let mut dashboard = Self {
            title:        trimmed.to_owned(),
            editable:     false,
            tooltip:      TooltipMode::Default,
            tags:         Vec::new(),
            auto_refresh: None,
            annotations:  Vec::new(),
            variables:    Vec::new(),
            rows:         Vec::new(),
        };

        for option in options {
            dashboard.apply(option,);
        }

        Ok(dashboard,)
    }

    fn apply(&mut self, option: DashboardOption,)
    {
        match option {
            DashboardOption::Editable => self.editable = true,
            DashboardOption::ReadOnly => self.editable = false,
            DashboardOption::SharedCrosshair => self.tooltip = TooltipMode::SharedCrosshair,
            DashboardOption::DefaultTooltip => self.tooltip = TooltipMode::Default,
            DashboardOption::Tags(tags,) => self.tags = tags,
            DashboardOption::AutoRefresh(interval,) => self.auto_refresh = Some(interval,),
            DashboardOption::TagsAnnotation(annotation,) => self.annotations.push(annotation,),
            DashboardOption::Variable(variable,) => self.variables.push(variable,),
            DashboardOption::Row(row,) => self.rows.push(row,),
        }
    }
}
