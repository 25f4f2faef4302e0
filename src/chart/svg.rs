//! SVG rendering of the projected timeline.
//!
//! Charts are generated as inline SVG elements with no scripting, so the
//! dashboard page can embed them directly.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

use super::{DateRange, TimelineChart};

const TITLE_HEIGHT: i64 = 32;
const LEGEND_HEIGHT: i64 = 28;
const AXIS_HEIGHT: i64 = 28;
const LEGEND_ENTRY_WIDTH: i64 = 150;
const BAR_INSET: i64 = 4;
const MIN_BAR_WIDTH: i64 = 2;
const MAX_TICKS: i64 = 12;

/// Configuration for timeline rendering.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Width of the chart in pixels.
    pub width: u32,
    /// Height of one topic row in pixels.
    pub row_height: u32,
    /// Width reserved for topic labels.
    pub label_width: u32,
    /// Padding around the chart content.
    pub padding: u32,
    /// Background colour.
    pub background_color: String,
    /// Text colour.
    pub text_color: String,
    /// Grid line colour.
    pub grid_color: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 960,
            row_height: 28,
            label_width: 200,
            padding: 20,
            background_color: "#ffffff".to_owned(),
            text_color: "#2a3f5f".to_owned(),
            grid_color: "#e5ecf6".to_owned(),
        }
    }
}

/// Timeline chart renderer.
///
/// # Example
///
/// ```
/// use ganttboard::chart::{project, svg::{SvgConfig, TimelineSvg}};
///
/// let svg = TimelineSvg::new(SvgConfig::default()).render(&project(&[]), "Empty");
/// assert!(svg.contains("No tasks"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineSvg {
    config: SvgConfig,
}

struct Plot {
    left: i64,
    top: i64,
    width: i64,
    row_height: i64,
    range: DateRange,
}

impl Plot {
    fn x(&self, date: NaiveDate) -> i64 {
        let offset = date.signed_duration_since(self.range.start).num_days();
        let scaled = offset
            .saturating_mul(self.width)
            .checked_div(self.range.span_days())
            .unwrap_or_default();
        self.left + scaled
    }

    fn row_top(&self, row: i64) -> i64 {
        self.top + row * self.row_height
    }
}

impl TimelineSvg {
    /// Creates a renderer with the given configuration.
    #[must_use]
    pub const fn new(config: SvgConfig) -> Self {
        Self { config }
    }

    /// Renders the chart with a title as an SVG string.
    #[must_use]
    pub fn render(&self, chart: &TimelineChart, title: &str) -> String {
        let Some(range) = chart.range() else {
            return self.render_empty_state(title);
        };

        let width = i64::from(self.config.width);
        let padding = i64::from(self.config.padding);
        let rows = i64::try_from(chart.categories().len()).unwrap_or(i64::MAX);
        let plot = Plot {
            left: padding + i64::from(self.config.label_width),
            top: padding + TITLE_HEIGHT + LEGEND_HEIGHT,
            width: (width - 2 * padding - i64::from(self.config.label_width)).max(1),
            row_height: i64::from(self.config.row_height),
            range,
        };
        let plot_height = rows.saturating_mul(plot.row_height);
        let height = plot.top + plot_height + AXIS_HEIGHT + padding;

        let mut body = String::new();
        self.render_title(&mut body, title);
        self.render_legend(&mut body, chart);
        self.render_axis(&mut body, &plot, plot_height);
        let row_of = self.render_topic_labels(&mut body, chart, &plot);
        Self::render_bars(&mut body, chart, &plot, &row_of);

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" class="chart timeline-chart" role="img">
  <rect width="{width}" height="{height}" fill="{bg}"/>
{body}</svg>"#,
            bg = self.config.background_color,
        )
    }

    fn render_empty_state(&self, title: &str) -> String {
        let width = i64::from(self.config.width);
        let height = i64::from(self.config.padding) * 2 + TITLE_HEIGHT + LEGEND_HEIGHT;
        let cx = width.checked_div(2).unwrap_or_default();
        let mut body = String::new();
        self.render_title(&mut body, title);

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" class="chart timeline-chart" role="img">
  <rect width="{width}" height="{height}" fill="{bg}"/>
{body}  <text x="{cx}" y="{y}" text-anchor="middle" fill="{fg}" font-size="14">No tasks to display</text>
</svg>"#,
            bg = self.config.background_color,
            fg = self.config.text_color,
            y = height - i64::from(self.config.padding),
        )
    }

    fn render_title(&self, out: &mut String, title: &str) {
        let padding = i64::from(self.config.padding);
        out.push_str(&format!(
            r#"  <text x="{padding}" y="{y}" fill="{fg}" font-size="18" font-weight="bold">{title}</text>
"#,
            y = padding + 18,
            fg = self.config.text_color,
            title = escape_xml(title),
        ));
    }

    fn render_legend(&self, out: &mut String, chart: &TimelineChart) {
        let padding = i64::from(self.config.padding);
        let y = padding + TITLE_HEIGHT;
        for (index, series) in chart.series().iter().enumerate() {
            let slot = i64::try_from(index).unwrap_or_default();
            let x = padding + slot * LEGEND_ENTRY_WIDTH;
            out.push_str(&format!(
                r#"  <rect x="{x}" y="{y}" width="12" height="12" fill="{color}"/>
  <text x="{tx}" y="{ty}" fill="{fg}" font-size="12">{label}</text>
"#,
                color = series.color,
                tx = x + 18,
                ty = y + 11,
                fg = self.config.text_color,
                label = escape_xml(&series.area),
            ));
        }
    }

    fn render_axis(&self, out: &mut String, plot: &Plot, plot_height: i64) {
        let bottom = plot.top + plot_height;
        out.push_str(&format!(
            r#"  <line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="{fg}"/>
"#,
            left = plot.left,
            right = plot.left + plot.width,
            fg = self.config.text_color,
        ));

        for tick in month_ticks(plot.range) {
            let x = plot.x(tick);
            out.push_str(&format!(
                r#"  <line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="{grid}"/>
  <text x="{x}" y="{ty}" text-anchor="middle" fill="{fg}" font-size="10">{label}</text>
"#,
                top = plot.top,
                grid = self.config.grid_color,
                ty = bottom + 16,
                fg = self.config.text_color,
                label = tick.format("%b %Y"),
            ));
        }
    }

    fn render_topic_labels<'chart>(
        &self,
        out: &mut String,
        chart: &'chart TimelineChart,
        plot: &Plot,
    ) -> HashMap<&'chart str, i64> {
        let categories = chart.categories();
        let last = i64::try_from(categories.len()).unwrap_or_default() - 1;
        let mut row_of = HashMap::with_capacity(categories.len());

        for (index, topic) in categories.iter().enumerate() {
            // The first category sits at the bottom of the axis.
            let row = last - i64::try_from(index).unwrap_or_default();
            row_of.insert(topic.as_str(), row);
            out.push_str(&format!(
                r#"  <text x="{x}" y="{y}" text-anchor="end" fill="{fg}" font-size="11">{label}</text>
"#,
                x = plot.left - 8,
                y = plot.row_top(row) + plot.row_height.checked_div(2).unwrap_or_default() + 4,
                fg = self.config.text_color,
                label = escape_xml(topic),
            ));
        }
        row_of
    }

    fn render_bars(
        out: &mut String,
        chart: &TimelineChart,
        plot: &Plot,
        row_of: &HashMap<&str, i64>,
    ) {
        for (bar, color) in chart.bars() {
            let Some(row) = row_of.get(bar.topic.as_str()) else {
                continue;
            };
            let x = plot.x(bar.start);
            let bar_width = (plot.x(bar.end) - x).max(MIN_BAR_WIDTH);
            let y = plot.row_top(*row) + BAR_INSET;
            let bar_height = (plot.row_height - 2 * BAR_INSET).max(1);
            let done_width = bar_width
                .saturating_mul(i64::from(bar.progress.value()))
                .checked_div(100)
                .unwrap_or_default();
            out.push_str(&format!(
                r##"  <g class="bar" data-key="{key}">
    <title>{topic}: {start} to {end} ({progress})</title>
    <rect x="{x}" y="{y}" width="{bar_width}" height="{bar_height}" fill="{color}"/>
    <rect x="{x}" y="{y}" width="{done_width}" height="{bar_height}" fill="#000000" fill-opacity="0.18"/>
  </g>
"##,
                key = bar.key,
                topic = escape_xml(&bar.topic),
                start = bar.start,
                end = bar.end,
                progress = bar.progress,
            ));
        }
    }
}

/// Returns first-of-month dates inside `range`, thinned to at most
/// [`MAX_TICKS`] labels.
fn month_ticks(range: DateRange) -> Vec<NaiveDate> {
    let months = i64::from(range.end.year() - range.start.year()) * 12
        + i64::from(range.end.month())
        - i64::from(range.start.month());
    let step = months
        .checked_div(MAX_TICKS)
        .unwrap_or_default()
        .saturating_add(1);
    let step_months = Months::new(u32::try_from(step).unwrap_or(1));

    let mut ticks = Vec::new();
    let mut cursor = range.start.with_day(1);
    if cursor.is_some_and(|first| first < range.start) {
        cursor = cursor.and_then(|first| first.checked_add_months(Months::new(1)));
    }
    while let Some(tick) = cursor.filter(|tick| *tick <= range.end) {
        ticks.push(tick);
        cursor = tick.checked_add_months(step_months);
    }
    ticks
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
