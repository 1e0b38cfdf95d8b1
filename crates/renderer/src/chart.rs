//! Heatmap chart assembly: cells, axes, legend, and hover tooltips.

use heatmap_common::{bucket_colors, month_name, Dataset, HeatmapError, HeatmapResult};
use scales::{decade_ticks, BandScale, LinearScale, ThresholdScale};

use crate::layout::ChartLayout;
use crate::svg::{Element, SvgWriter};

const TITLE: &str = "Monthly Global Land Surface Temperature";
const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
const TICK_LENGTH: f64 = 10.0;
const LEGEND_BAR_HEIGHT: f64 = 20.0;
const AXIS_COLOR: &str = "#222222";

/// Render the full chart for a dataset.
///
/// Pure function of its inputs: scales are recomputed from the dataset on
/// every call and nothing is retained between calls.
pub fn render_chart(dataset: &Dataset, layout: &ChartLayout) -> HeatmapResult<String> {
    let (min_temp, max_temp) = dataset
        .temperature_extent()
        .ok_or(HeatmapError::EmptyDataset)?;
    let (first_year, last_year) = dataset.year_range().ok_or(HeatmapError::EmptyDataset)?;

    let colors = bucket_colors();
    let buckets = ThresholdScale::equal_intervals(min_temp, max_temp, colors.len())
        .map_err(|e| HeatmapError::Render(e.to_string()))?;

    let x = BandScale::new(
        dataset.monthly_variance.iter().map(|r| r.year),
        (layout.plot_left(), layout.plot_right()),
    );
    let y = BandScale::rounded(MONTHS, (layout.plot_top(), layout.plot_bottom()));
    let legend_x = LinearScale::new(
        (min_temp, max_temp),
        (layout.plot_left(), layout.plot_right()),
    );

    let mut svg = SvgWriter::new();
    svg.start(
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", px(layout.width))
            .attr("height", px(layout.height))
            .attr("viewBox", format!("0 0 {} {}", px(layout.width), px(layout.height)))
            .attr("role", "img"),
    )?;

    write_styles(&mut svg)?;
    write_headings(&mut svg, dataset.base_temperature, first_year, last_year, layout)?;
    write_cells(&mut svg, dataset, &x, &y, &buckets, &colors)?;
    write_x_axis(&mut svg, &x, layout)?;
    write_y_axis(&mut svg, &y, layout)?;
    write_legend(&mut svg, &buckets, &colors, &legend_x, layout)?;

    svg.end("svg")?;
    svg.finish()
}

/// Hover behavior lives in the document itself: cells dim on hover and
/// their `<title>` children act as tooltips.
fn write_styles(svg: &mut SvgWriter) -> HeatmapResult<()> {
    svg.text_element(
        Element::new("style"),
        "text { font-family: sans-serif; fill: #222222; } \
         .cell { opacity: 1; } \
         .cell:hover { opacity: 0.4; }",
    )
}

fn write_headings(
    svg: &mut SvgWriter,
    base_temperature: f64,
    first_year: i32,
    last_year: i32,
    layout: &ChartLayout,
) -> HeatmapResult<()> {
    svg.text_element(
        Element::new("text")
            .attr("id", "title")
            .attr("x", px(layout.width / 2.0))
            .attr("y", 18)
            .attr("text-anchor", "middle")
            .attr("font-size", 20),
        TITLE,
    )?;
    svg.text_element(
        Element::new("text")
            .attr("id", "description")
            .attr("x", px(layout.width / 2.0))
            .attr("y", 36)
            .attr("text-anchor", "middle")
            .attr("font-size", 14),
        &format!(
            "{} - {}: Base Temperature {}°C",
            first_year, last_year, base_temperature
        ),
    )
}

fn write_cells(
    svg: &mut SvgWriter,
    dataset: &Dataset,
    x: &BandScale<i32>,
    y: &BandScale<u32>,
    buckets: &ThresholdScale,
    colors: &[&str],
) -> HeatmapResult<()> {
    svg.start(Element::new("g").attr("class", "map"))?;

    for (index, reading) in dataset.monthly_variance.iter().enumerate() {
        let (Some(cell_x), Some(cell_y)) = (x.position(&reading.year), y.position(&reading.month))
        else {
            continue;
        };

        let temperature = dataset.temperature(reading);
        let color = colors[buckets.bucket_index(temperature)];

        svg.start(
            Element::new("rect")
                .attr("class", "cell")
                .attr("id", format!("cell-{}", index))
                .attr("data-year", reading.year)
                .attr("data-month", reading.month - 1)
                .attr("data-temp", temperature)
                .attr("x", px(cell_x))
                .attr("y", px(cell_y))
                .attr("width", px(x.bandwidth()))
                .attr("height", px(y.bandwidth()))
                .attr("fill", color),
        )?;
        svg.text_element(
            Element::new("title").attr("data-year", reading.year),
            &format!(
                "{} - {}\n{:.1}°C\n{:+.1}°C",
                reading.year,
                month_name(reading.month).unwrap_or("Unknown"),
                temperature,
                reading.variance
            ),
        )?;
        svg.end("rect")?;
    }

    svg.end("g")
}

fn write_x_axis(svg: &mut SvgWriter, x: &BandScale<i32>, layout: &ChartLayout) -> HeatmapResult<()> {
    svg.start(
        Element::new("g")
            .attr("id", "x-axis")
            .attr("transform", format!("translate(0, {})", px(layout.plot_bottom()))),
    )?;
    svg.empty(
        Element::new("line")
            .attr("x1", px(layout.plot_left()))
            .attr("x2", px(layout.plot_right()))
            .attr("y1", 0)
            .attr("y2", 0)
            .attr("stroke", AXIS_COLOR),
    )?;

    for year in decade_ticks(x.domain()) {
        let Some(position) = x.position(&year) else {
            continue;
        };
        let center = position + x.bandwidth() / 2.0;
        svg.empty(
            Element::new("line")
                .attr("x1", px(center))
                .attr("x2", px(center))
                .attr("y1", 0)
                .attr("y2", px(TICK_LENGTH))
                .attr("stroke", AXIS_COLOR),
        )?;
        svg.text_element(
            Element::new("text")
                .attr("class", "tick")
                .attr("x", px(center))
                .attr("y", px(TICK_LENGTH + 14.0))
                .attr("text-anchor", "middle")
                .attr("font-size", 12),
            &year.to_string(),
        )?;
    }

    svg.end("g")
}

fn write_y_axis(svg: &mut SvgWriter, y: &BandScale<u32>, layout: &ChartLayout) -> HeatmapResult<()> {
    svg.start(
        Element::new("g")
            .attr("id", "y-axis")
            .attr("transform", format!("translate({}, 0)", px(layout.plot_left()))),
    )?;
    svg.empty(
        Element::new("line")
            .attr("x1", 0)
            .attr("x2", 0)
            .attr("y1", px(layout.plot_top()))
            .attr("y2", px(layout.plot_bottom()))
            .attr("stroke", AXIS_COLOR),
    )?;

    for &month in y.domain() {
        let Some(position) = y.position(&month) else {
            continue;
        };
        let center = position + y.bandwidth() / 2.0;
        svg.empty(
            Element::new("line")
                .attr("x1", px(-TICK_LENGTH))
                .attr("x2", 0)
                .attr("y1", px(center))
                .attr("y2", px(center))
                .attr("stroke", AXIS_COLOR),
        )?;
        svg.text_element(
            Element::new("text")
                .attr("class", "tick")
                .attr("x", px(-TICK_LENGTH - 4.0))
                .attr("y", px(center + 4.0))
                .attr("text-anchor", "end")
                .attr("font-size", 12),
            month_name(month).unwrap_or("Unknown"),
        )?;
    }

    svg.end("g")
}

fn write_legend(
    svg: &mut SvgWriter,
    buckets: &ThresholdScale,
    colors: &[&str],
    legend_x: &LinearScale,
    layout: &ChartLayout,
) -> HeatmapResult<()> {
    svg.start(
        Element::new("g")
            .attr("id", "legend")
            .attr("transform", format!("translate(0, {})", px(layout.legend_top()))),
    )?;

    for (index, color) in colors.iter().enumerate().take(buckets.bucket_count()) {
        let Some((low, high)) = buckets.bucket_extent(index) else {
            continue;
        };
        let x0 = legend_x.scale(low);
        let x1 = legend_x.scale(high);
        svg.empty(
            Element::new("rect")
                .attr("x", px(x0))
                .attr("y", 0)
                .attr("width", px(x1 - x0))
                .attr("height", px(LEGEND_BAR_HEIGHT))
                .attr("fill", *color)
                .attr("stroke", AXIS_COLOR),
        )?;
    }

    for boundary in buckets.boundaries() {
        let tick_x = legend_x.scale(*boundary);
        svg.empty(
            Element::new("line")
                .attr("x1", px(tick_x))
                .attr("x2", px(tick_x))
                .attr("y1", px(LEGEND_BAR_HEIGHT))
                .attr("y2", px(LEGEND_BAR_HEIGHT + TICK_LENGTH))
                .attr("stroke", AXIS_COLOR),
        )?;
        svg.text_element(
            Element::new("text")
                .attr("class", "tick")
                .attr("x", px(tick_x))
                .attr("y", px(LEGEND_BAR_HEIGHT + TICK_LENGTH + 14.0))
                .attr("text-anchor", "middle")
                .attr("font-size", 12),
            &format!("{:.1}", boundary),
        )?;
    }

    svg.end("g")
}

/// Pixel coordinate formatting: two decimals is plenty for screen space
/// and keeps the document compact.
fn px(value: f64) -> String {
    format!("{:.2}", value)
}
