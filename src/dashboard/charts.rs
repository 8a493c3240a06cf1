//! Charts comparing completed and rejected transfers.
//!
//! The dashboard shows two charts of the same counts:
//! - **Transfers Chart**: a pie chart of the share of completed and rejected transfers
//! - **Bar Chart**: a bar per status
//!
//! The full page constructs both charts with ECharts options generated by
//! `charming`. Searches then only replace the series data of the existing
//! chart instances, so the charts keep their state in the browser.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, Tooltip, Trigger},
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

use crate::{
    dashboard::summary::StatusCounts,
    html::HeadElement,
    transaction::{COMPLETED_LABEL, REJECTED_LABEL},
};

/// The charts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChartKind {
    Pie,
    Bar,
}

impl ChartKind {
    /// The HTML element ID of the chart container.
    pub(super) fn id(self) -> &'static str {
        match self {
            ChartKind::Pie => "transfers-chart",
            ChartKind::Bar => "bar-chart",
        }
    }

    fn options(self, counts: StatusCounts) -> Chart {
        match self {
            ChartKind::Pie => pie_chart(counts),
            ChartKind::Bar => bar_chart(counts),
        }
    }

    /// The series data in the shape ECharts expects for this kind of chart.
    fn series_data(self, counts: StatusCounts) -> Value {
        match self {
            ChartKind::Pie => json!([
                { "value": counts.completed, "name": COMPLETED_LABEL },
                { "value": counts.rejected, "name": REJECTED_LABEL },
            ]),
            ChartKind::Bar => json!([counts.completed, counts.rejected]),
        }
    }
}

/// Whether the browser already holds an instance of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChartState {
    Uninitialized,
    Initialized,
}

/// What the browser has to do to show new counts.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ChartUpdate {
    /// Create the chart from its full ECharts options.
    Construct {
        id: &'static str,
        /// The ECharts configuration as a JSON string
        options: String,
    },
    /// Replace the series data of the existing chart and redraw it.
    Replace { id: &'static str, data: Value },
}

impl ChartUpdate {
    fn script(&self) -> String {
        match self {
            ChartUpdate::Construct { id, options } => format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{id}");
                    if (!chartDom) return;
                    const chart = echarts.getInstanceByDom(chartDom) || echarts.init(chartDom);
                    const option = {options};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#
            ),
            ChartUpdate::Replace { id, data } => format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{id}");
                    if (!chartDom) return;
                    const chart = echarts.getInstanceByDom(chartDom);
                    if (!chart) return;
                    chart.setOption({{ series: [{{ data: {data} }}] }});
                }})();"#
            ),
        }
    }
}

/// Decides how a single chart is brought up to date.
///
/// The first update constructs the chart, every later update only replaces
/// its data.
#[derive(Debug, Clone)]
pub(super) struct ChartPresenter {
    kind: ChartKind,
    state: ChartState,
}

impl ChartPresenter {
    /// A presenter for a chart that does not exist in the page yet.
    pub(super) fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            state: ChartState::Uninitialized,
        }
    }

    /// A presenter for a chart the page has already constructed.
    pub(super) fn attached(kind: ChartKind) -> Self {
        Self {
            kind,
            state: ChartState::Initialized,
        }
    }

    pub(super) fn update(&mut self, counts: StatusCounts) -> ChartUpdate {
        let id = self.kind.id();

        match self.state {
            ChartState::Uninitialized => {
                self.state = ChartState::Initialized;

                ChartUpdate::Construct {
                    id,
                    options: self.kind.options(counts).to_string(),
                }
            }
            ChartState::Initialized => ChartUpdate::Replace {
                id,
                data: self.kind.series_data(counts),
            },
        }
    }
}

/// The pie and bar charts, which always show the same counts.
#[derive(Debug, Clone)]
pub(super) struct TransferCharts {
    pie: ChartPresenter,
    bar: ChartPresenter,
}

impl TransferCharts {
    /// Charts for a full page load.
    pub(super) fn new() -> Self {
        Self {
            pie: ChartPresenter::new(ChartKind::Pie),
            bar: ChartPresenter::new(ChartKind::Bar),
        }
    }

    /// Charts already constructed by the dashboard page.
    pub(super) fn attached() -> Self {
        Self {
            pie: ChartPresenter::attached(ChartKind::Pie),
            bar: ChartPresenter::attached(ChartKind::Bar),
        }
    }

    pub(super) fn update(&mut self, counts: StatusCounts) -> [ChartUpdate; 2] {
        [self.pie.update(counts), self.bar.update(counts)]
    }
}

/// Renders the HTML containers for the dashboard charts.
pub(super) fn charts_view() -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for kind in [ChartKind::Pie, ChartKind::Bar] {
                    div
                        id=(kind.id())
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

fn join_scripts(updates: &[ChartUpdate]) -> String {
    updates
        .iter()
        .map(ChartUpdate::script)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates the script that runs `updates` once the page has loaded.
///
/// # Returns
/// HeadElement containing the JavaScript.
pub(super) fn charts_page_script(updates: &[ChartUpdate]) -> HeadElement {
    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        join_scripts(updates)
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Generates an inline script that runs `updates` as soon as htmx swaps it
/// into the page.
pub(super) fn charts_fragment_script(updates: &[ChartUpdate]) -> Markup {
    html!(
        script { (PreEscaped(join_scripts(updates))) }
    )
}

fn pie_chart(counts: StatusCounts) -> Chart {
    Chart::new()
        .title(Title::new().text("Transfers").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("2%"))
        .series(Pie::new().name("Transfers").radius("60%").data(vec![
            (counts.completed as f64, COMPLETED_LABEL),
            (counts.rejected as f64, REJECTED_LABEL),
        ]))
}

fn bar_chart(counts: StatusCounts) -> Chart {
    Chart::new()
        .title(Title::new().text("Transfers by Status").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(vec![COMPLETED_LABEL, REJECTED_LABEL]),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name("Transfers")
                .data(vec![counts.completed as f64, counts.rejected as f64]),
        )
}
