// Scatter chart of courier positions and pending order destinations

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::models::{Courier, Order};

/// One marker on the map
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub highlighted: bool,
}

/// Everything the map shows: couriers and pending destinations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub couriers: Vec<ScatterPoint>,
    pub orders: Vec<ScatterPoint>,
}

impl ChartData {
    /// (min_x, max_x, min_y, max_y) over every point, padded by 10% on each side
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut points = self.couriers.iter().chain(self.orders.iter()).peekable();
        if points.peek().is_none() {
            return (-10.0, 10.0, -10.0, 10.0);
        }

        let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
        let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        let pad_x = ((max_x - min_x) * 0.1).max(1.0);
        let pad_y = ((max_y - min_y) * 0.1).max(1.0);
        (min_x - pad_x, max_x + pad_x, min_y - pad_y, max_y + pad_y)
    }
}

/// Build the chart projection. An order is highlighted when its id contains
/// `query` (case-insensitive); the empty query highlights every order.
pub fn chart_data(couriers: &[Courier], pending: &[Order], query: &str) -> ChartData {
    let couriers = couriers
        .iter()
        .map(|courier| ScatterPoint {
            x: courier.location.x,
            y: courier.location.y,
            label: courier.name.clone(),
            highlighted: false,
        })
        .collect();

    let query = query.to_lowercase();
    let orders = pending
        .iter()
        .map(|order| ScatterPoint {
            x: order.destination.x,
            y: order.destination.y,
            label: order.id.clone(),
            highlighted: order.id.to_lowercase().contains(&query),
        })
        .collect();

    ChartData { couriers, orders }
}

/// Render the chart to a PNG file
pub fn render_chart<P: AsRef<Path>>(
    output_path: P,
    data: &ChartData,
    chart_title: &str,
) -> Result<(), Box<dyn Error>> {
    let (min_x, max_x, min_y, max_y) = data.bounds();

    let root = BitMapBackend::new(output_path.as_ref(), (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(chart_title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    chart.configure_mesh().draw()?;

    let courier_style = ShapeStyle::from(&RGBColor(75, 192, 192)).filled();
    chart
        .draw_series(
            data.couriers
                .iter()
                .map(|point| Circle::new((point.x, point.y), 6, courier_style)),
        )?
        .label("Delivery Persons")
        .legend(move |(x, y)| Circle::new((x, y), 6, courier_style));

    let highlighted_style = ShapeStyle::from(&RED).filled();
    let order_style = ShapeStyle::from(&RGBColor(255, 99, 132).mix(0.5)).filled();
    chart
        .draw_series(data.orders.iter().map(|point| {
            let style = if point.highlighted {
                highlighted_style
            } else {
                order_style
            };
            Circle::new((point.x, point.y), 6, style)
        }))?
        .label("Orders")
        .legend(move |(x, y)| Circle::new((x, y), 6, order_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;

    Ok(())
}
