use std::collections::BTreeMap;

use carenet_core::{DashboardStats, MonthlyCount};
use carenet_viz::{
    age_group_chart, consultation_type_chart, dashboard_charts, monthly_consultation_chart,
    plan_status_chart, ColorSpec, CATEGORY_PALETTE,
};

fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs
        .iter()
        .map(|(label, count)| (label.to_string(), *count))
        .collect()
}

#[test]
fn pie_chart_extracts_labels_and_values_in_step() {
    let chart = consultation_type_chart(&counts(&[("home", 3), ("office", 5), ("phone", 10)]));

    assert_eq!(chart.kind, "pie");
    assert_eq!(chart.data.labels, vec!["home", "office", "phone"]);
    assert_eq!(chart.data.datasets[0].data, vec![3, 5, 10]);

    match &chart.data.datasets[0].background_color {
        ColorSpec::PerItem(colors) => {
            assert_eq!(colors.len(), 3);
            assert_eq!(colors[0], CATEGORY_PALETTE[0]);
        }
        ColorSpec::Single(_) => panic!("pie slices should get one color each"),
    }
}

#[test]
fn palette_wraps_around_when_labels_outnumber_colors() {
    let many = counts(&[
        ("a", 1),
        ("b", 1),
        ("c", 1),
        ("d", 1),
        ("e", 1),
        ("f", 1),
        ("g", 1),
    ]);
    let chart = consultation_type_chart(&many);

    match &chart.data.datasets[0].background_color {
        ColorSpec::PerItem(colors) => assert_eq!(colors[6], CATEGORY_PALETTE[0]),
        ColorSpec::Single(_) => panic!("pie slices should get one color each"),
    }
}

#[test]
fn bar_chart_hides_legend_and_forces_integer_ticks() {
    let chart = plan_status_chart(&counts(&[("approved", 8), ("draft", 2)]));
    let json = serde_json::to_value(&chart).expect("chart should serialize");

    assert_eq!(json["type"], "bar");
    assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(json["options"]["responsive"], true);
    assert_eq!(json["options"]["maintainAspectRatio"], false);
    assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
    assert_eq!(json["options"]["scales"]["y"]["ticks"]["stepSize"], 1);
}

#[test]
fn line_chart_keeps_month_order_and_fill_styling() {
    let points = vec![
        MonthlyCount {
            month: "2025-03".to_string(),
            count: 4,
        },
        MonthlyCount {
            month: "2025-01".to_string(),
            count: 7,
        },
    ];
    let chart = monthly_consultation_chart(&points);

    assert_eq!(chart.kind, "line");
    assert_eq!(chart.data.labels, vec!["2025-03", "2025-01"]);
    assert_eq!(chart.data.datasets[0].data, vec![4, 7]);
    assert_eq!(chart.data.datasets[0].fill, Some(true));
    assert_eq!(chart.data.datasets[0].tension, Some(0.4));
    assert_eq!(chart.data.datasets[0].border_width, 2);
}

#[test]
fn age_chart_uses_the_reduced_palette() {
    let chart = age_group_chart(&counts(&[("0-17", 1), ("18-39", 6), ("40-64", 9)]));

    assert_eq!(chart.kind, "doughnut");
    match &chart.data.datasets[0].background_color {
        ColorSpec::PerItem(colors) => assert_eq!(colors.len(), 3),
        ColorSpec::Single(_) => panic!("doughnut slices should get one color each"),
    }
}

#[test]
fn dashboard_bundle_wires_every_chart() {
    let stats = DashboardStats {
        consultation_by_type: counts(&[("visit", 2)]),
        plan_status: counts(&[("approved", 1)]),
        users_by_age_group: counts(&[("65+", 4)]),
        monthly_consultations: vec![MonthlyCount {
            month: "2025-06".to_string(),
            count: 3,
        }],
    };

    let bundle = dashboard_charts(&stats);
    assert_eq!(bundle.consultation_types.kind, "pie");
    assert_eq!(bundle.plan_status.kind, "bar");
    assert_eq!(bundle.monthly_consultations.kind, "line");
    assert_eq!(bundle.age_groups.kind, "doughnut");
}
