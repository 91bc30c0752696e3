//! Backend summary payloads to chart and force-graph configurations.
//!
//! Everything here is a thin, pure builder: the host page hands the result
//! to its charting/graph library untouched. No aggregation happens on this
//! side beyond key/value extraction.

use std::collections::{BTreeMap, HashSet};

use carenet_core::{DashboardStats, MonthlyCount, NetworkData, NetworkNode, NodeKind};
use serde::Serialize;

/// Fixed categorical palette shared by the pie/doughnut charts.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#0d6efd", "#198754", "#ffc107", "#dc3545", "#0dcaf0", "#6c757d",
];

/// Reduced palette used by the age-group doughnut.
pub const AGE_PALETTE: [&str; 5] = ["#0d6efd", "#198754", "#ffc107", "#dc3545", "#6c757d"];

const BAR_COLOR: &str = "#0d6efd";
const LINE_STROKE: &str = "#0d6efd";
const LINE_FILL: &str = "rgba(13, 110, 253, 0.1)";

/// A chart configuration in the wire shape the host chart library expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// Either one color for the whole dataset or one per slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerItem(Vec<String>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScaleOptions>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScaleOptions {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    pub step_size: u64,
}

fn base_options(title: &str, legend: LegendOptions, scales: Option<ScaleOptions>) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: PluginOptions {
            legend,
            title: TitleOptions {
                display: true,
                text: title.to_string(),
            },
        },
        scales,
    }
}

fn legend_bottom() -> LegendOptions {
    LegendOptions {
        display: true,
        position: Some("bottom"),
    }
}

fn legend_hidden() -> LegendOptions {
    LegendOptions {
        display: false,
        position: None,
    }
}

fn integer_axis() -> Option<ScaleOptions> {
    Some(ScaleOptions {
        y: AxisOptions {
            begin_at_zero: true,
            ticks: TickOptions { step_size: 1 },
        },
    })
}

fn split_counts(counts: &BTreeMap<String, u64>) -> (Vec<String>, Vec<u64>) {
    (
        counts.keys().cloned().collect(),
        counts.values().copied().collect(),
    )
}

fn cycle_palette(palette: &[&str], len: usize) -> Vec<String> {
    (0..len)
        .map(|index| palette[index % palette.len()].to_string())
        .collect()
}

/// Pie chart of consultation counts per type.
pub fn consultation_type_chart(counts: &BTreeMap<String, u64>) -> ChartConfig {
    let (labels, values) = split_counts(counts);
    let colors = cycle_palette(&CATEGORY_PALETTE, labels.len());
    ChartConfig {
        kind: "pie",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data: values,
                background_color: ColorSpec::PerItem(colors),
                border_color: None,
                border_width: 1,
                fill: None,
                tension: None,
            }],
        },
        options: base_options("Share of consultation types", legend_bottom(), None),
    }
}

/// Bar chart of support plans per approval status.
pub fn plan_status_chart(counts: &BTreeMap<String, u64>) -> ChartConfig {
    let (labels, values) = split_counts(counts);
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some("Plans".to_string()),
                data: values,
                background_color: ColorSpec::Single(BAR_COLOR.to_string()),
                border_color: Some(BAR_COLOR.to_string()),
                border_width: 1,
                fill: None,
                tension: None,
            }],
        },
        options: base_options("Plan approval status", legend_hidden(), integer_axis()),
    }
}

/// Filled line chart of consultation volume per month, in the order given.
pub fn monthly_consultation_chart(points: &[MonthlyCount]) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: points.iter().map(|point| point.month.clone()).collect(),
            datasets: vec![Dataset {
                label: Some("Consultations".to_string()),
                data: points.iter().map(|point| point.count).collect(),
                background_color: ColorSpec::Single(LINE_FILL.to_string()),
                border_color: Some(LINE_STROKE.to_string()),
                border_width: 2,
                fill: Some(true),
                tension: Some(0.4),
            }],
        },
        options: base_options("Monthly consultations", legend_hidden(), integer_axis()),
    }
}

/// Doughnut chart of service users per age band.
pub fn age_group_chart(counts: &BTreeMap<String, u64>) -> ChartConfig {
    let (labels, values) = split_counts(counts);
    let colors = cycle_palette(&AGE_PALETTE, labels.len());
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data: values,
                background_color: ColorSpec::PerItem(colors),
                border_color: None,
                border_width: 1,
                fill: None,
                tension: None,
            }],
        },
        options: base_options("Users by age band", legend_bottom(), None),
    }
}

/// The four dashboard charts bundled for a single hand-off to the host page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardCharts {
    pub consultation_types: ChartConfig,
    pub plan_status: ChartConfig,
    pub monthly_consultations: ChartConfig,
    pub age_groups: ChartConfig,
}

pub fn dashboard_charts(stats: &DashboardStats) -> DashboardCharts {
    DashboardCharts {
        consultation_types: consultation_type_chart(&stats.consultation_by_type),
        plan_status: plan_status_chart(&stats.plan_status),
        monthly_consultations: monthly_consultation_chart(&stats.monthly_consultations),
        age_groups: age_group_chart(&stats.users_by_age_group),
    }
}

/// Force-simulation tuning handed to the layout library as-is.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForceParams {
    pub link_distance: f64,
    pub charge_strength: f64,
    pub collision_radius: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            link_distance: 150.0,
            charge_strength: -300.0,
            collision_radius: 50.0,
        }
    }
}

/// Allowed zoom scale range.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ZoomExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomExtent {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

/// A node ready for rendering: sized by kind, tooltip pre-assembled.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub radius: f64,
    pub label_offset: f64,
    pub tooltip: String,
}

/// An edge remapped to the `source`/`target` field names the layout
/// library resolves node references by.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub relationship: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Complete drawing instructions for one support network.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphSpec {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub force: ForceParams,
    pub zoom: ZoomExtent,
    pub dropped_edges: usize,
}

impl GraphSpec {
    /// Convert a raw network payload. Edges whose endpoints are not in the
    /// node list would make the layout library throw; they are dropped and
    /// counted instead.
    pub fn from_network(network: &NetworkData) -> Self {
        let known_ids: HashSet<&str> = network.nodes.iter().map(|node| node.id.as_str()).collect();

        let nodes = network
            .nodes
            .iter()
            .map(|node| GraphNode {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind,
                radius: node_radius(node.kind),
                label_offset: label_offset(node.kind),
                tooltip: tooltip_html(node),
            })
            .collect();

        let mut dropped_edges = 0;
        let links = network
            .edges
            .iter()
            .filter_map(|edge| {
                if known_ids.contains(edge.from.as_str()) && known_ids.contains(edge.to.as_str()) {
                    Some(GraphLink {
                        source: edge.from.clone(),
                        target: edge.to.clone(),
                        relationship: edge
                            .relationship
                            .clone()
                            .unwrap_or_else(|| "related".to_string()),
                        frequency: edge.frequency.clone(),
                        start_date: edge.start_date.clone(),
                    })
                } else {
                    dropped_edges += 1;
                    None
                }
            })
            .collect();

        Self {
            nodes,
            links,
            force: ForceParams::default(),
            zoom: ZoomExtent::default(),
            dropped_edges,
        }
    }
}

/// The service user sits in the middle and gets the larger disc.
pub fn node_radius(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::User => 30.0,
        _ => 20.0,
    }
}

fn label_offset(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::User => 45.0,
        _ => 35.0,
    }
}

/// Hover card content per node kind, assembled from whichever attributes
/// the payload carries.
pub fn tooltip_html(node: &NetworkNode) -> String {
    let mut lines = vec![format!("<strong>{}</strong>", escape_html(&node.label))];
    let data = &node.data;

    match node.kind {
        NodeKind::User => {
            lines.push(format!(
                "Age: {}",
                data.age
                    .map(|age| age.to_string())
                    .unwrap_or_else(|| "unknown".to_string())
            ));
            lines.push(format!(
                "Gender: {}",
                escape_html(data.gender.as_deref().unwrap_or("unknown"))
            ));
            if let Some(level) = data.support_level {
                lines.push(format!("Support level: {level}"));
            }
        }
        NodeKind::Service | NodeKind::Medical | NodeKind::Other => {
            lines.push(format!(
                "Type: {}",
                escape_html(data.organization_type.as_deref().unwrap_or("unknown"))
            ));
            if let Some(contact) = &data.contact {
                lines.push(format!("Contact: {}", escape_html(contact)));
            }
            if let Some(phone) = &data.phone {
                lines.push(format!("Phone: {}", escape_html(phone)));
            }
            if let Some(frequency) = &data.frequency {
                lines.push(format!("Frequency: {}", escape_html(frequency)));
            }
        }
        NodeKind::Guardian => {
            lines.push(format!(
                "Type: {}",
                escape_html(data.guardian_type.as_deref().unwrap_or("guardian"))
            ));
            if let Some(contact) = &data.contact {
                lines.push(format!("Contact: {}", escape_html(contact)));
            }
        }
        NodeKind::Staff => {
            lines.push(format!(
                "Role: {}",
                escape_html(data.role.as_deref().unwrap_or("staff"))
            ));
            if let Some(email) = &data.email {
                lines.push(format!("Email: {}", escape_html(email)));
            }
        }
    }

    lines.join("<br>")
}

/// Minimal HTML escaping for text interpolated into tooltip markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
