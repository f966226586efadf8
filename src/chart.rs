// Gráfico SVG de sesiones por día para la vista de análisis.
use plotters::prelude::*;

use crate::algorithm::analysis::{sessions_per_weekday, ScheduleAnalysis};
use crate::error::{Result, SlotgridError};

const WIDTH: u32 = 720;
const HEIGHT: u32 = 360;

fn chart_err<E: std::fmt::Display>(e: E) -> SlotgridError {
    SlotgridError::Chart(e.to_string())
}

/// Barras de sábado a viernes; devuelve el documento SVG como texto.
pub fn sessions_per_day_svg(analysis: &ScheduleAnalysis) -> Result<String> {
    let counts = sessions_per_weekday(analysis);
    let labels: Vec<&str> = counts.iter().map(|(d, _)| d.label()).collect();
    let top = counts.iter().map(|(_, n)| *n as u32).max().unwrap_or(0).max(1) + 1;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Sessions per day", ("sans-serif", 20))
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(40)
            .build_cartesian_2d((0u32..labels.len() as u32).into_segmented(), 0u32..top)
            .map_err(chart_err)?;

        let label_of = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&label_of)
            .y_desc("Sessions")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.mix(0.7).filled())
                    .margin(6)
                    .data(counts.iter().enumerate().map(|(i, (_, n))| (i as u32, *n as u32))),
            )
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }
    Ok(svg)
}
