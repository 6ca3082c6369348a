use std::fs;
use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::error::ReportError;
use crate::names::NameCounts;

pub const REPORT_PATH: &str = "./report.html";

const REPORT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Naming count report</title>
  <meta charset="UTF-8">
</head>
<body>
  <h1>Naming count report</h1>

  <div style="width: 100%">
    <canvas id="chart"></canvas>
  </div>

  <script src="https://cdnjs.cloudflare.com/ajax/libs/Chart.js/2.8.0/Chart.min.js"></script>
  <script>
window.onload = function() {
    var ctx = document.getElementById('chart').getContext('2d');
    ctx.canvas.height = 2000;
    new Chart(ctx, {
        type: 'horizontalBar',
        data: {
            labels: __LABELS__,
            datasets: [
                {
                    label: "Naming count",
                    backgroundColor: ["#3e95cd", "#8e5ea2", "#3cba9f", "#e8c3b9", "#c45850"],
                    data: __DATA__
                }
            ]
        },
        options: {
            responsive: true,
            maintainAspectRatio: false,
            legend: {display: false},
            title: {
                display: true,
                text: 'Naming count report'
            }
        }
    });
}
  </script>
</body>
</html>
"##;

/// Parallel label/count arrays for the bar chart, in the counts'
/// first-seen order.
#[derive(Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

impl ChartData {
    pub fn from_counts(counts: &NameCounts) -> Self {
        let mut labels = Vec::with_capacity(counts.len());
        let mut data = Vec::with_capacity(counts.len());
        for (name, count) in counts.iter() {
            labels.push(name.to_string());
            data.push(count);
        }
        ChartData { labels, data }
    }

    // JSON keeps quoting and escaping out of the template's hands.
    fn labels_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.labels)?)
    }

    fn data_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.data)?)
    }
}

/// Fill the chart template. Pure string work, no filesystem.
pub fn render_report(chart: &ChartData) -> Result<String, ReportError> {
    Ok(REPORT_TEMPLATE
        .replace("__LABELS__", &chart.labels_json()?)
        .replace("__DATA__", &chart.data_json()?))
}

fn write_report(path: &Path, html: &str) {
    // A failed write is reported, not escalated.
    match fs::write(path, html) {
        Ok(()) => println!("Report created:)!!!"),
        Err(err) => eprintln!("{}", err),
    }
}

/// Render the counts into `./report.html`, overwriting whatever is there.
pub fn generate_report(counts: &NameCounts) -> Result<(), ReportError> {
    let chart = ChartData::from_counts(counts);
    println!("{}", chart.data.iter().join(","));
    let html = render_report(&chart)?;
    write_report(Path::new(REPORT_PATH), &html);
    Ok(())
}
