use chrono::{Days, NaiveDate};
use plotters::prelude::*;

use crate::errors::AppError;
use crate::models::{ChartSpec, PricePoint};

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 450;

const LINE_COLOR: RGBColor = RGBColor(0x00, 0x7B, 0xFF);
const GRID_COLOR: RGBColor = RGBColor(0xF0, 0xF0, 0xF0);
const TITLE_COLOR: RGBColor = RGBColor(0x33, 0x33, 0x33);

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

/// Date axis bounds; a single day is widened so the axis has a span.
fn date_range(first: NaiveDate, last: NaiveDate) -> (NaiveDate, NaiveDate) {
    if first < last {
        return (first, last);
    }
    let end = first.checked_add_days(Days::new(1)).unwrap_or(first);
    (first, end)
}

/// Price axis bounds padded by 5% of the span (or 1% of the level when flat).
fn price_range(points: &[PricePoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    let pad = if span > f64::EPSILON {
        span * 0.05
    } else {
        (max.abs() * 0.01).max(1.0)
    };
    (min - pad, max + pad)
}

/// Draw the chart as a standalone SVG document.
pub fn render_svg(chart: &ChartSpec) -> Result<String, AppError> {
    let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) else {
        return Err(AppError::Render("no points to plot".to_string()));
    };

    let (x_start, x_end) = date_range(first.date, last.date);
    let (y_min, y_max) = price_range(&chart.points);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 20).into_font().color(&TITLE_COLOR))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_start..x_end, y_min..y_max)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .light_line_style(GRID_COLOR)
            .bold_line_style(GRID_COLOR)
            .x_desc(chart.x_axis_label.as_str())
            .y_desc(chart.y_axis_label.as_str())
            .axis_desc_style(("sans-serif", 14))
            .x_labels(8)
            .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
            .y_label_formatter(&|v: &f64| format!("{:.2}", v))
            .draw()
            .map_err(render_err)?;

        ctx.draw_series(LineSeries::new(
            chart.points.iter().map(|p| (p.date, p.close)),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(chart.series_label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.2))
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn spec(points: Vec<PricePoint>) -> ChartSpec {
        ChartSpec {
            title: "Stock Data for AAPL (1y)".to_string(),
            series_label: SERIES_LABEL.to_string(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: Y_AXIS_LABEL.to_string(),
            points,
        }
    }

    #[test]
    fn test_renders_svg_with_labels() {
        let svg = render_svg(&spec(vec![
            PricePoint::new(day(1), 100.0),
            PricePoint::new(day(2), 101.0),
            PricePoint::new(day(3), 99.0),
        ]))
        .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Stock Data for AAPL (1y)"));
        assert!(svg.contains("Close Price (USD)"));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_single_point_still_renders() {
        let svg = render_svg(&spec(vec![PricePoint::new(day(9), 42.0)])).unwrap();
        assert!(svg.contains("Close Price"));
    }

    #[test]
    fn test_empty_chart_is_render_error() {
        assert!(matches!(render_svg(&spec(vec![])), Err(AppError::Render(_))));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(date_range(day(4), day(4)), (day(4), day(5)));
        assert_eq!(date_range(day(1), day(3)), (day(1), day(3)));

        let (lo, hi) = price_range(&[PricePoint::new(day(1), 100.0), PricePoint::new(day(2), 120.0)]);
        assert!((lo - 99.0).abs() < 1e-9);
        assert!((hi - 121.0).abs() < 1e-9);

        let (lo, hi) = price_range(&[PricePoint::new(day(1), 50.0)]);
        assert!(lo < 50.0 && hi > 50.0);
    }
}
