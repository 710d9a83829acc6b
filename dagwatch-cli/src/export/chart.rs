//! HTML chart export
//!
//! Charts are Vega-Lite specifications embedded in a standalone HTML page
//! that loads vega-embed from a CDN.

use dagwatch_core::analysis::Statistics;
use dagwatch_core::table::TaskTable;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tracing::error;

/// Color per task state; states not listed use the Vega-Lite default
pub const STATE_COLORS: [(&str, &str); 6] = [
    ("success", "#2E7D32"),
    ("failed", "#D32F2F"),
    ("skipped", "#FF9800"),
    ("running", "#1976D2"),
    ("queued", "#757575"),
    ("up_for_retry", "#9C27B0"),
];

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 400;
pub const SMALL_CHART_WIDTH: u32 = 500;
pub const SMALL_CHART_HEIGHT: u32 = 300;

/// A named chart ready to be written
#[derive(Debug, Clone)]
pub struct Chart {
    pub name: &'static str,
    pub title: &'static str,
    pub spec: Value,
}

impl Chart {
    /// File the chart is saved as
    pub fn file_name(&self) -> String {
        format!("airflow_{}.html", self.name)
    }

    /// Standalone HTML page rendering the chart
    pub fn to_html(&self) -> String {
        // "</" inside an inline script would end the script element
        let spec = self.spec.to_string().replace("</", "<\\/");
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    vegaEmbed('#vis', {spec}).catch(console.error);
  </script>
</body>
</html>
"#,
            title = self.title,
            spec = spec
        )
    }
}

fn color_scale() -> Value {
    let (domain, range): (Vec<&str>, Vec<&str>) = STATE_COLORS.iter().copied().unzip();
    json!({ "domain": domain, "range": range })
}

fn no_data(title: &str, width: u32, height: u32) -> Value {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": title,
        "width": width,
        "height": height,
        "data": { "values": [{}] },
        "mark": { "type": "text", "text": "No data available", "size": 20 }
    })
}

/// Bar chart of task instance counts per state
pub fn task_state_distribution(stats: Option<&Statistics>) -> Chart {
    let title = "Task State Distribution";
    let spec = match stats {
        Some(stats) => json!({
            "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
            "title": title,
            "width": SMALL_CHART_WIDTH,
            "height": SMALL_CHART_HEIGHT,
            "data": { "values": stats.state_breakdown },
            "mark": "bar",
            "encoding": {
                "x": { "field": "task_state", "type": "nominal", "title": "Task State", "sort": "-y" },
                "y": { "field": "count", "type": "quantitative", "title": "Number of Tasks" },
                "color": {
                    "field": "task_state",
                    "type": "nominal",
                    "scale": color_scale(),
                    "legend": { "title": "Task State" }
                },
                "tooltip": [
                    { "field": "task_state", "type": "nominal" },
                    { "field": "count", "type": "quantitative" }
                ]
            }
        }),
        None => no_data(title, SMALL_CHART_WIDTH, SMALL_CHART_HEIGHT),
    };

    Chart {
        name: "task_state_distribution",
        title,
        spec,
    }
}

/// Scatter of task instances over logical date, sized by duration
pub fn dag_runs_timeline(table: &TaskTable) -> Chart {
    let title = "DAG Runs Timeline - Task Execution Over Time";
    let spec = if table.is_empty() {
        no_data(title, CHART_WIDTH, CHART_HEIGHT)
    } else {
        let values: Vec<Value> = table
            .iter()
            .map(|row| {
                json!({
                    "dag_run_id": row.dag_run_id,
                    "logical_date": row.logical_date,
                    "task_id": row.task_id,
                    "task_state": row.task_state,
                    "duration": row.duration,
                    "run_type": row.run_type,
                })
            })
            .collect();

        json!({
            "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
            "title": title,
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
            "data": { "values": values },
            "mark": { "type": "circle" },
            "encoding": {
                "x": { "field": "logical_date", "type": "temporal", "title": "Logical Date" },
                "y": { "field": "task_id", "type": "nominal", "title": "Task ID" },
                "color": {
                    "field": "task_state",
                    "type": "nominal",
                    "scale": color_scale(),
                    "legend": { "title": "Task State" }
                },
                "size": {
                    "field": "duration",
                    "type": "quantitative",
                    "title": "Duration (s)",
                    "scale": { "range": [50, 400] }
                },
                "tooltip": [
                    { "field": "dag_run_id", "type": "nominal" },
                    { "field": "task_id", "type": "nominal" },
                    { "field": "task_state", "type": "nominal" },
                    { "field": "duration", "type": "quantitative" },
                    { "field": "run_type", "type": "nominal" }
                ]
            }
        })
    };

    Chart {
        name: "dag_runs_timeline",
        title,
        spec,
    }
}

/// Both report charts
pub fn build_charts(table: &TaskTable, stats: &Statistics) -> Vec<Chart> {
    vec![task_state_distribution(Some(stats)), dag_runs_timeline(table)]
}

/// Write each chart into `output_dir`
///
/// A chart that fails to write is logged and skipped. Returns the paths that
/// were written.
pub fn save_charts(charts: &[Chart], output_dir: &Path) -> Vec<PathBuf> {
    let mut saved = Vec::new();

    for chart in charts {
        let path = output_dir.join(chart.file_name());
        match std::fs::write(&path, chart.to_html()) {
            Ok(()) => saved.push(path),
            Err(e) => error!("Error saving chart {}: {}", chart.name, e),
        }
    }

    saved
}
