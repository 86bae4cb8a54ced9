//! Decoding logic that converts manifest documents into builder calls.
//!
//! The traversal is a single synchronous pass: every populated manifest
//! field appends one option to a growing ordered list, and the accumulated
//! list is handed to [`Dashboard::new`] together with the title. The first
//! error encountered while walking variables, rows, or panels aborts the
//! whole decode and is returned to the caller verbatim.

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    config::{DashboardConfig, RowConfig},
    dashboard::{Dashboard, DashboardOption, Row},
    error::{self, Error},
};

/// Loads and decodes a dashboard from the provided YAML manifest path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the manifest fails to decode into builder options.
pub fn load_dashboard(path: &Path,) -> Result<Dashboard, Error,>
{
    debug!("Reading manifest from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_dashboard(&contents,)
}

/// Parses and decodes a dashboard from the provided YAML manifest string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the manifest contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and any decode error produced by [`decode_dashboard`].
pub fn parse_dashboard(contents: &str,) -> Result<Dashboard, Error,>
{
    let config: DashboardConfig = serde_yaml::from_str(contents,)?;
    decode_dashboard(&config,)
}

/// Decodes a manifest document into a builder-ready dashboard.
///
/// # Errors
///
/// Propagates the first variable, row, or panel decode error encountered,
/// or [`Error::Build`](Error::Build) from the dashboard constructor.
pub fn decode_dashboard(config: &DashboardConfig,) -> Result<Dashboard, Error,>
{
    let options = dashboard_options(config,)?;
    Dashboard::new(&config.title, options,)
}

/// Translates a manifest document into its ordered builder option list.
///
/// The first two options are always the {editable, read-only} and
/// {shared-crosshair, default-tooltip} picks; conditional and repeated
/// options follow in manifest declaration order. Exposed so callers and
/// tests can inspect the option sequence before construction.
///
/// # Errors
///
/// Returns the first variable or row decode error encountered; later
/// entries are not decoded.
pub fn dashboard_options(config: &DashboardConfig,) -> Result<Vec<DashboardOption,>, Error,>
{
    let mut options = vec![editable_option(config,), tooltip_option(config,)];

    if !config.tags.is_empty() {
        options.push(DashboardOption::Tags(config.tags.clone(),),);
    }

    if !config.auto_refresh.is_empty() {
        options.push(DashboardOption::AutoRefresh(config.auto_refresh.clone(),),);
    }

    for annotation in &config.tags_annotations {
        options.push(DashboardOption::TagsAnnotation(annotation.clone(),),);
    }

    for variable in &config.variables {
        options.push(variable.to_option()?,);
    }

    for row in &config.rows {
        options.push(row_option(row,)?,);
    }

    Ok(options,)
}

fn editable_option(config: &DashboardConfig,) -> DashboardOption
{
    if config.editable {
        return DashboardOption::Editable;
    }

    DashboardOption::ReadOnly
}

fn tooltip_option(config: &DashboardConfig,) -> DashboardOption
{
    if config.shared_crosshair {
        return DashboardOption::SharedCrosshair;
    }

    DashboardOption::DefaultTooltip
}

/// Decodes one row entry into a row option, panel by panel, fail-fast.
fn row_option(row: &RowConfig,) -> Result<DashboardOption, Error,>
{
    let mut panels = Vec::with_capacity(row.panels.len(),);
    for panel in &row.panels {
        panels.push(panel.to_panel()?,);
    }

    Ok(DashboardOption::Row(Row {
        title: row.name.clone(),
        panels,
    },),)
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use proptest::prelude::*;

    use super::{dashboard_options, decode_dashboard, load_dashboard, parse_dashboard};
    use crate::{
        config::DashboardConfig,
        dashboard::{DashboardOption, Panel, TemplateVariable, TooltipMode},
        error::Error,
    };

    fn manifest(yaml: &str,) -> DashboardConfig
    {
        serde_yaml::from_str(yaml,).expect("valid manifest",)
    }

    proptest! {
        #[test]
        fn exactly_one_option_from_each_flag_pair(editable in any::<bool>(), shared in any::<bool>()) {
            let config = DashboardConfig {
                title: "Flags".to_owned(),
                editable,
                shared_crosshair: shared,
                ..DashboardConfig::default()
            };

            let options = dashboard_options(&config).expect("decode failed");
            let editable_picks = options
                .iter()
                .filter(|option| matches!(option, DashboardOption::Editable | DashboardOption::ReadOnly))
                .count();
            let tooltip_picks = options
                .iter()
                .filter(|option| matches!(option, DashboardOption::SharedCrosshair | DashboardOption::DefaultTooltip))
                .count();

            prop_assert_eq!(editable_picks, 1);
            prop_assert_eq!(tooltip_picks, 1);
            prop_assert_eq!(matches!(options[0], DashboardOption::Editable), editable);
            prop_assert_eq!(matches!(options[1], DashboardOption::SharedCrosshair), shared);
        }
    }

    #[test]
    fn empty_tag_list_contributes_no_option()
    {
        let config = manifest("title: Tags",);
        let options = dashboard_options(&config,).expect("decode failed",);
        assert!(!options.iter().any(|option| matches!(option, DashboardOption::Tags(_))));
    }

    #[test]
    fn tags_emit_one_option_preserving_order()
    {
        let config = manifest("title: Tags\ntags: [infra, prod, edge]",);
        let options = dashboard_options(&config,).expect("decode failed",);

        let tag_options: Vec<_,> = options
            .iter()
            .filter_map(|option| match option {
                DashboardOption::Tags(tags,) => Some(tags.clone(),),
                _ => None,
            },)
            .collect();
        assert_eq!(tag_options.len(), 1);
        assert_eq!(tag_options[0], ["infra", "prod", "edge"]);
    }

    #[test]
    fn empty_auto_refresh_contributes_no_option()
    {
        let config = manifest("title: Refresh\nauto_refresh: ''",);
        let options = dashboard_options(&config,).expect("decode failed",);
        assert!(!options.iter().any(|option| matches!(option, DashboardOption::AutoRefresh(_))));
    }

    #[test]
    fn auto_refresh_preserves_exact_value()
    {
        let config = manifest("title: Refresh\nauto_refresh: 30s",);
        let options = dashboard_options(&config,).expect("decode failed",);

        let intervals: Vec<_,> = options
            .iter()
            .filter_map(|option| match option {
                DashboardOption::AutoRefresh(interval,) => Some(interval.as_str(),),
                _ => None,
            },)
            .collect();
        assert_eq!(intervals, ["30s"]);
    }

    #[test]
    fn annotations_emit_one_option_each_in_order()
    {
        let yaml = r"
            title: Annotations
            tags_annotations:
              - name: deploys
                tags: [deploy]
              - name: incidents
                tags: [incident]
        ";

        let options = dashboard_options(&manifest(yaml,),).expect("decode failed",);
        let names: Vec<_,> = options
            .iter()
            .filter_map(|option| match option {
                DashboardOption::TagsAnnotation(annotation,) => Some(annotation.name.as_str(),),
                _ => None,
            },)
            .collect();
        assert_eq!(names, ["deploys", "incidents"]);
    }

    #[test]
    fn option_sequence_follows_declaration_layout()
    {
        let yaml = r##"
            title: Everything
            editable: true
            shared_crosshair: true
            tags: [infra]
            auto_refresh: 1m
            tags_annotations:
              - name: deploys
            variables:
              - const:
                  name: env
                  value: production
            rows:
              - name: Health
                panels:
                  - text:
                      title: Welcome
                      markdown: "# Hi"
        "##;

        let options = dashboard_options(&manifest(yaml,),).expect("decode failed",);
        assert_eq!(options.len(), 7);
        assert!(matches!(options[0], DashboardOption::Editable));
        assert!(matches!(options[1], DashboardOption::SharedCrosshair));
        assert!(matches!(options[2], DashboardOption::Tags(_)));
        assert!(matches!(options[3], DashboardOption::AutoRefresh(_)));
        assert!(matches!(options[4], DashboardOption::TagsAnnotation(_)));
        assert!(matches!(options[5], DashboardOption::Variable(_)));
        assert!(matches!(options[6], DashboardOption::Row(_)));
    }

    #[test]
    fn rows_and_variables_preserve_manifest_order()
    {
        let yaml = r"
            title: Ordered
            variables:
              - const:
                  name: v1
                  value: a
              - const:
                  name: v2
                  value: b
            rows:
              - name: r1
              - name: r2
              - name: r3
        ";

        let options = dashboard_options(&manifest(yaml,),).expect("decode failed",);

        let variable_names: Vec<_,> = options
            .iter()
            .filter_map(|option| match option {
                DashboardOption::Variable(TemplateVariable::Const {
                    name, ..
                },) => Some(name.as_str(),),
                _ => None,
            },)
            .collect();
        assert_eq!(variable_names, ["v1", "v2"]);

        let row_titles: Vec<_,> = options
            .iter()
            .filter_map(|option| match option {
                DashboardOption::Row(row,) => Some(row.title.as_str(),),
                _ => None,
            },)
            .collect();
        assert_eq!(row_titles, ["r1", "r2", "r3"]);

        let last_variable = options
            .iter()
            .rposition(|option| matches!(option, DashboardOption::Variable(_)),)
            .expect("expected variable options",);
        let first_row = options
            .iter()
            .position(|option| matches!(option, DashboardOption::Row(_)),)
            .expect("expected row options",);
        assert!(last_variable < first_row);
    }

    #[test]
    fn row_failure_aborts_before_later_rows()
    {
        // Row 2 fails with the panel sentinel; row 3 would fail with the
        // target sentinel. Receiving the panel sentinel proves row 3 was
        // never decoded.
        let yaml = r##"
            title: FailFast
            rows:
              - name: ok
                panels:
                  - text:
                      title: Welcome
                      markdown: "# Hi"
              - name: broken
                panels:
                  - {}
              - name: never-reached
                panels:
                  - graph:
                      title: Requests
                      targets:
                        - {}
        "##;

        let error = parse_dashboard(yaml,).expect_err("expected fail-fast error",);
        assert!(matches!(error, Error::PanelNotConfigured));
    }

    #[test]
    fn variable_failure_aborts_before_later_variables()
    {
        // Variable 1 fails with a decode error; variable 2 would fail with
        // the variable sentinel.
        let yaml = r"
            title: FailFast
            variables:
              - interval:
                  name: interval
                  values: []
              - {}
        ";

        let error = parse_dashboard(yaml,).expect_err("expected fail-fast error",);
        assert!(matches!(error, Error::Decode { .. }));
    }

    #[test]
    fn variable_failure_aborts_before_rows()
    {
        let yaml = r#"
            title: FailFast
            variables:
              - {}
            rows:
              - name: broken
                panels:
                  - {}
        "#;

        let error = parse_dashboard(yaml,).expect_err("expected fail-fast error",);
        assert!(matches!(error, Error::VariableNotConfigured));
    }

    #[test]
    fn panel_dispatch_priority_reaches_the_dashboard()
    {
        let yaml = r"
            title: Priority
            rows:
              - name: Mixed
                panels:
                  - graph:
                      title: CPU
                    table:
                      title: Processes
        ";

        let dashboard = parse_dashboard(yaml,).expect("decode failed",);
        assert_eq!(dashboard.rows.len(), 1);
        assert!(matches!(dashboard.rows[0].panels[0], Panel::Graph(_)));
    }

    #[test]
    fn decode_builds_fully_populated_dashboard()
    {
        let yaml = r##"
            title: Cluster overview
            editable: true
            shared_crosshair: true
            tags: [infra, prod]
            auto_refresh: 30s
            tags_annotations:
              - name: deploys
                datasource: '-- Grafana --'
                icon_color: '#5794F2'
                tags: [deploy]
            variables:
              - interval:
                  name: interval
                  label: Interval
                  values: [1m, 5m]
                  default: 5m
              - query:
                  name: node
                  request: label_values(node)
                  include_all: true
            rows:
              - name: Health
                panels:
                  - single_stat:
                      title: Uptime
                      query: up
                      unit: none
                  - text:
                      title: Notes
                      markdown: "# Cluster"
              - name: Traffic
                panels:
                  - graph:
                      title: Requests
                      datasource: prometheus
                      targets:
                        - prometheus:
                            query: rate(http_requests_total[5m])
                            legend: '{{ handler }}'
        "##;

        let dashboard = parse_dashboard(yaml,).expect("decode failed",);
        assert_eq!(dashboard.title, "Cluster overview");
        assert!(dashboard.editable);
        assert_eq!(dashboard.tooltip, TooltipMode::SharedCrosshair);
        assert_eq!(dashboard.tags, ["infra", "prod"]);
        assert_eq!(dashboard.auto_refresh.as_deref(), Some("30s"));
        assert_eq!(dashboard.annotations.len(), 1);
        assert_eq!(dashboard.variables.len(), 2);
        assert!(matches!(dashboard.variables[0], TemplateVariable::Interval { .. }));
        assert!(matches!(dashboard.variables[1], TemplateVariable::Query { .. }));
        assert_eq!(dashboard.rows.len(), 2);
        assert_eq!(dashboard.rows[0].title, "Health");
        assert_eq!(dashboard.rows[0].panels.len(), 2);
        assert_eq!(dashboard.rows[1].title, "Traffic");
        assert!(matches!(dashboard.rows[1].panels[0], Panel::Graph(_)));
    }

    #[test]
    fn decode_propagates_construction_failure()
    {
        let config = DashboardConfig {
            title: "   ".to_owned(),
            ..DashboardConfig::default()
        };

        let error = decode_dashboard(&config,).expect_err("expected build failure",);
        assert!(matches!(error, Error::Build { .. }));
    }

    #[test]
    fn parse_propagates_yaml_errors()
    {
        let error = parse_dashboard("title: [unterminated",).expect_err("expected parse error",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn load_dashboard_reads_manifest_from_disk()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "title: Disk\nrows:\n  - name: Health\n")
            .expect("expected write to succeed",);

        let dashboard = load_dashboard(file.path(),).expect("expected load to succeed",);
        assert_eq!(dashboard.title, "Disk");
        assert_eq!(dashboard.rows.len(), 1);
    }

    #[test]
    fn load_dashboard_reports_io_errors()
    {
        let path = std::path::Path::new("/nonexistent/dashboard.yaml",);
        let error = load_dashboard(path,).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }
}
