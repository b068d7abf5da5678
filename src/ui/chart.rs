// ============================================================================
// Chart - Graphique de croissance
// ============================================================================
// Affiche la série annuelle (valeur du compte par année) en graphique ligne
//
// CONCEPTS RATATUI :
// 1. Chart widget : graphique ligne
// 2. Dataset : série de données à afficher
// 3. Axis : configuration des axes X et Y
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::format::format_whole_currency;
use crate::models::ChartSeries;

/// Dessine le graphique de croissance
pub fn render_growth_chart(frame: &mut Frame, series: &ChartSeries, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" 📈 Growth ");

    let (min_value, max_value) = match series.bounds() {
        Some(bounds) => bounds,
        None => {
            let paragraph = Paragraph::new(Line::from("No data"))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let points = series.points();
    let (y_min, y_max) = y_bounds(min_value, max_value);

    // Un seul point (0 année) : on élargit l'axe X pour que le point soit visible
    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

    // Pas de .name() : ratatui n'affiche pas de légende pour une série anonyme
    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points)];

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(x_labels(series).into_iter().map(Span::raw).collect());

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format_whole_currency(y_min)),
            Span::raw(format_whole_currency((y_min + y_max) / 2.0)),
            Span::raw(format_whole_currency(y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Bornes de l'axe Y avec 5% de marge, jamais sous 0
///
/// Une série constante (taux 0) reçoit une marge arbitraire pour rester visible
fn y_bounds(min_value: f64, max_value: f64) -> (f64, f64) {
    let span = max_value - min_value;
    let margin = if span > 0.0 {
        span * 0.05
    } else {
        (max_value.abs() * 0.05).max(1.0)
    };

    ((min_value - margin).max(0.0), max_value + margin)
}

/// Labels de l'axe X : première année, milieu, dernière année
fn x_labels(series: &ChartSeries) -> Vec<String> {
    let first = series.labels.first().cloned().unwrap_or_default();
    let last = series.labels.last().cloned().unwrap_or_default();

    if series.labels.len() < 3 {
        return vec![first, last];
    }

    let middle = series.labels[series.labels.len() / 2].clone();
    vec![first, middle, last]
}
