//! Template variable configuration sub-kinds and their dispatch.
//!
//! Variable entries mirror the panel pattern one level up the tree: at most
//! one populated sub-kind among interval, custom, const, and query, resolved
//! in that fixed priority order. Every entry decodes to exactly one builder
//! option or fails with the [`Error::VariableNotConfigured`] sentinel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{DashboardOption, TemplateVariable},
    error::Error,
};

/// Variable entry of a dashboard manifest.
///
/// # Examples
///
/// ```
/// use dashforge::VariableConfig;
///
/// let yaml = r#"
/// const:
///   name: env
///   value: production
/// "#;
/// let variable: VariableConfig = serde_yaml::from_str(yaml,).expect("valid variable",);
/// assert!(variable.constant.is_some());
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct VariableConfig
{
    /// Interval sub-kind.
    #[serde(default)]
    pub interval: Option<IntervalVariableConfig,>,

    /// Custom value-list sub-kind.
    #[serde(default)]
    pub custom: Option<CustomVariableConfig,>,

    /// Constant sub-kind.
    #[serde(default, rename = "const")]
    pub constant: Option<ConstVariableConfig,>,

    /// Datasource-query sub-kind.
    #[serde(default)]
    pub query: Option<QueryVariableConfig,>,
}

impl VariableConfig
{
    /// Decodes the entry into a variable-declaration option by delegating to
    /// the first populated sub-kind, in priority order interval, custom,
    /// const, query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VariableNotConfigured`](Error::VariableNotConfigured)
    /// when no sub-kind is populated, or the delegated sub-kind's own decode
    /// error.
    pub fn to_option(&self,) -> Result<DashboardOption, Error,>
    {
        if let Some(interval,) = &self.interval {
            return Ok(DashboardOption::Variable(interval.to_variable()?,),);
        }
        if let Some(custom,) = &self.custom {
            return Ok(DashboardOption::Variable(custom.to_variable(),),);
        }
        if let Some(constant,) = &self.constant {
            return Ok(DashboardOption::Variable(constant.to_variable(),),);
        }
        if let Some(query,) = &self.query {
            return Ok(DashboardOption::Variable(query.to_variable()?,),);
        }

        Err(Error::VariableNotConfigured,)
    }
}

/// Interval variable configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct IntervalVariableConfig
{
    /// Variable name referenced in queries.
    pub name: String,

    /// Label shown in the dashboard UI.
    #[serde(default)]
    pub label: String,

    /// Candidate interval values; must not be empty.
    #[serde(default)]
    pub values: Vec<String,>,

    /// Value selected by default.
    #[serde(default)]
    pub default: Option<String,>,
}

impl IntervalVariableConfig
{
    fn to_variable(&self,) -> Result<TemplateVariable, Error,>
    {
        if self.values.is_empty() {
            return Err(Error::decode("interval variable values cannot be empty",),);
        }

        Ok(TemplateVariable::Interval {
            name:    self.name.clone(),
            label:   self.label.clone(),
            values:  self.values.clone(),
            default: self.default.clone(),
        },)
    }
}

/// Custom value-list variable configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct CustomVariableConfig
{
    /// Variable name referenced in queries.
    pub name: String,

    /// Label shown in the dashboard UI.
    #[serde(default)]
    pub label: String,

    /// Mapping of display text to substituted value.
    #[serde(default)]
    pub values: BTreeMap<String, String,>,

    /// Value selected by default.
    #[serde(default)]
    pub default: Option<String,>,
}

impl CustomVariableConfig
{
    /// Custom variables carry no nested structure, so decoding cannot fail.
    fn to_variable(&self,) -> TemplateVariable
    {
        TemplateVariable::Custom {
            name:    self.name.clone(),
            label:   self.label.clone(),
            values:  self.values.clone(),
            default: self.default.clone(),
        }
    }
}

/// Constant variable configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct ConstVariableConfig
{
    /// Variable name referenced in queries.
    pub name: String,

    /// Label shown in the dashboard UI.
    #[serde(default)]
    pub label: String,

    /// Substituted value.
    #[serde(default)]
    pub value: String,
}

impl ConstVariableConfig
{
    fn to_variable(&self,) -> TemplateVariable
    {
        TemplateVariable::Const {
            name:  self.name.clone(),
            label: self.label.clone(),
            value: self.value.clone(),
        }
    }
}

/// Datasource-query variable configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct QueryVariableConfig
{
    /// Variable name referenced in queries.
    pub name: String,

    /// Label shown in the dashboard UI.
    #[serde(default)]
    pub label: String,

    /// Datasource the request runs against.
    #[serde(default)]
    pub datasource: Option<String,>,

    /// Request issued to enumerate candidate values; must not be empty.
    #[serde(default)]
    pub request: String,

    /// Optional regex filtering the returned values.
    #[serde(default)]
    pub regex: Option<String,>,

    /// Whether an "all" entry is offered.
    #[serde(default, alias = "includeAll")]
    pub include_all: bool,
}

impl QueryVariableConfig
{
    fn to_variable(&self,) -> Result<TemplateVariable, Error,>
    {
        if self.request.is_empty() {
            return Err(Error::decode("query variable request cannot be empty",),);
        }

        Ok(TemplateVariable::Query {
            name:        self.name.clone(),
            label:       self.label.clone(),
            datasource:  self.datasource.clone(),
            request:     self.request.clone(),
            regex:       self.regex.clone(),
            include_all: self.include_all,
        },)
    }
}
