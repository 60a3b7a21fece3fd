use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::blocks::{ChartType, StatItem, StatsBlock};

const CHART_WIDTH: u32 = 600;
const CHART_HEIGHT: u32 = 400;

const SERIES_COLOR: RGBColor = RGBColor(30, 144, 255);
const PIE_PALETTE: [RGBColor; 5] = [
    RGBColor(30, 144, 255),
    RGBColor(126, 178, 255),
    RGBColor(255, 159, 67),
    RGBColor(46, 204, 113),
    RGBColor(155, 89, 182),
];

/// Chart variant that actually gets drawn. Radar and radial never shipped on
/// the wire contract, so they degrade to the number grid, as does anything
/// unrecognized.
fn effective_chart(chart_type: ChartType) -> ChartType {
    match chart_type {
        ChartType::Bar | ChartType::Line | ChartType::Pie | ChartType::Area => chart_type,
        _ => ChartType::NumberOnly,
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub block: StatsBlock,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let items = &props.block.items;
    if items.is_empty() {
        return html! {};
    }

    let description = props.block.description.as_ref().map(|description| {
        html! { <figcaption>{ description.clone() }</figcaption> }
    });

    let body = match effective_chart(props.block.chart_type) {
        ChartType::NumberOnly => render_number_grid(items),
        chart => html! { <StatsChart items={items.clone()} chart_type={chart} /> },
    };

    html! {
        <figure class="stats-block">
            { body }
            { for description }
            <style>
                {r#"
                .stats-block { margin: 2rem auto; width: 100%; max-width: 720px; padding: 0 2rem; }
                .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; }
                .stats-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 2rem;
                    border: 1px solid rgba(128, 128, 128, 0.25);
                    border-radius: 8px;
                    text-align: center;
                }
                .stats-value { font-size: 2.5rem; font-weight: 700; color: #7EB2FF; }
                .stats-value .suffix { font-size: 1.25rem; }
                .stats-label { font-weight: 600; }
                .stats-context { font-size: 0.85rem; color: #999; }
                .stats-block canvas { width: 100%; height: auto; }
                .stats-block figcaption { text-align: center; font-size: 0.9rem; color: #999; margin-top: 0.75rem; }
                "#}
            </style>
        </figure>
    }
}

fn render_number_grid(items: &[StatItem]) -> Html {
    html! {
        <div class="stats-grid">
            { for items.iter().map(|item| html! {
                <div class="stats-item">
                    <span class="stats-value">
                        { format_value(item.value) }
                        if let Some(suffix) = &item.suffix {
                            <span class="suffix">{ suffix.clone() }</span>
                        }
                    </span>
                    <span class="stats-label">{ item.label.clone() }</span>
                    if let Some(context) = item.context.as_ref().or(item.description.as_ref()) {
                        <span class="stats-context">{ context.clone() }</span>
                    }
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatsChartProps {
    items: Vec<StatItem>,
    chart_type: ChartType,
}

/// Draws the chart onto a canvas whenever the data changes: a plotters
/// backend over the canvas object, one chart build per effect run.
#[function_component(StatsChart)]
fn stats_chart(props: &StatsChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let items = props.items.clone();
        let chart_type = props.chart_type;
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(CHART_WIDTH);
                    canvas.set_height(CHART_HEIGHT);
                    if let Err(e) = draw_chart(canvas, &items, chart_type) {
                        log::error!("failed to draw stats chart: {e}");
                    }
                }
                || ()
            },
            (props.items.clone(), props.chart_type),
        );
    }

    html! { <canvas ref={canvas_ref} width={CHART_WIDTH.to_string()} height={CHART_HEIGHT.to_string()} /> }
}

fn draw_chart(
    canvas: HtmlCanvasElement,
    items: &[StatItem],
    chart_type: ChartType,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("no 2d canvas context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    if chart_type == ChartType::Pie {
        return draw_pie(&root, items);
    }

    let max_value = items.iter().map(|i| i.value).fold(0.0f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..items.len(), 0f64..y_max)?;

    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(items.len())
        .x_label_formatter(&|x| labels.get(*x).map(|l| l.to_string()).unwrap_or_default())
        .draw()?;

    match chart_type {
        ChartType::Bar => {
            chart.draw_series(items.iter().enumerate().map(|(i, item)| {
                Rectangle::new([(i, 0.0), (i + 1, item.value)], SERIES_COLOR.filled())
            }))?;
        }
        ChartType::Line => {
            chart.draw_series(LineSeries::new(
                items.iter().enumerate().map(|(i, item)| (i, item.value)),
                SERIES_COLOR.stroke_width(2),
            ))?;
        }
        ChartType::Area => {
            chart.draw_series(AreaSeries::new(
                items.iter().enumerate().map(|(i, item)| (i, item.value)),
                0.0,
                SERIES_COLOR.mix(0.25),
            ))?;
        }
        _ => {}
    }

    root.present()?;
    Ok(())
}

fn draw_pie(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    items: &[StatItem],
) -> Result<(), Box<dyn std::error::Error>> {
    let center = (CHART_WIDTH as i32 / 2, CHART_HEIGHT as i32 / 2);
    let radius = (CHART_HEIGHT as f64 / 2.0) * 0.7;

    let sizes: Vec<f64> = items.iter().map(|i| i.value.max(0.0)).collect();
    let labels: Vec<String> = items.iter().map(|i| i.label.clone()).collect();
    let colors: Vec<RGBColor> = (0..items.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    root.draw(&pie)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radar_and_radial_fall_back_to_the_number_grid() {
        assert_eq!(effective_chart(ChartType::Radar), ChartType::NumberOnly);
        assert_eq!(effective_chart(ChartType::Radial), ChartType::NumberOnly);
        assert_eq!(effective_chart(ChartType::Unknown), ChartType::NumberOnly);
        assert_eq!(effective_chart(ChartType::Bar), ChartType::Bar);
        assert_eq!(effective_chart(ChartType::Pie), ChartType::Pie);
    }

    #[test]
    fn whole_values_drop_the_decimal_point() {
        assert_eq!(format_value(12000.0), "12000");
        assert_eq!(format_value(99.9), "99.9");
    }
}
