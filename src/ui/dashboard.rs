// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine le calculateur : header, contrôles, résultats, graphique, footer
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones (vertical puis horizontal)
// 3. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::controls::BoundControl;
use crate::ui::chart::render_growth_chart;

/// Dessine l'interface complète
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0]);
    render_body(frame, app, chunks[1]);

    if app.is_editing() {
        render_edit_footer(frame, app, chunks[2]);
    } else {
        render_footer(frame, app, chunks[2]);
    }
}

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Contenu
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Dessine le header avec le titre
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" LazyInterest ")
        .title_alignment(Alignment::Center);

    let text = Line::from(Span::styled(
        "Compound Interest Calculator",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Contenu : contrôles + résultats à gauche, graphique à droite
// ============================================================================

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(columns[0]);

    render_controls(frame, app, left[0]);
    render_results(frame, app, left[1]);
    render_growth_chart(frame, &app.calculator.sink().chart, columns[1]);
}

/// Dessine les quatre contrôles (trois paires champ/slider + fréquence)
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Parameters ");

    // Largeur utile pour la barre du slider (bordures + marges)
    let bar_width = area.width.saturating_sub(6) as usize;

    let mut lines = Vec::new();
    for focus in Focus::all() {
        let focused = focus == app.focus;
        let title_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▶ " } else { "  " };

        match focus.bound_param() {
            Some(param) => {
                let control = app.calculator.control(param);
                lines.push(Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled(param.title(), title_style),
                    Span::raw("  "),
                    Span::styled(
                        control.label.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(field_line(control, focused && app.is_editing()));
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        slider_bar(control.slider.ratio(), bar_width),
                        Style::default().fg(Color::LightBlue),
                    ),
                ]));
            }
            None => {
                let frequency = app.calculator.parameters().frequency;
                lines.push(Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled("Compound Frequency", title_style),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("  ◀ "),
                    Span::styled(
                        frequency.label(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" ▶"),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Ligne du champ numérique : "[ 10000 ]", avec curseur en mode saisie
fn field_line(control: &BoundControl, editing: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  [ "),
        Span::styled(
            control.field.text().to_string(),
            Style::default().fg(Color::White),
        ),
    ];

    if editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    spans.push(Span::raw(" ]"));
    Line::from(spans)
}

/// Barre de slider en texte : "├───●──────┤"
///
/// `ratio` dans [0, 1], `width` = largeur totale en caractères
pub fn slider_bar(ratio: f64, width: usize) -> String {
    if width < 3 {
        return "●".to_string();
    }

    let inner = width - 2;
    let position = (ratio.clamp(0.0, 1.0) * (inner - 1) as f64).round() as usize;

    let mut bar = String::with_capacity(width * 3);
    bar.push('├');
    for i in 0..inner {
        bar.push(if i == position { '●' } else { '─' });
    }
    bar.push('┤');
    bar
}

/// Dessine les totaux : valeur finale et intérêts
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let display = app.calculator.sink();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Results ");

    let lines = vec![
        Line::from(vec![
            Span::raw("Total Value     "),
            Span::styled(
                display.final_value.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Total Interest  "),
            Span::styled(
                display.total_interest.clone(),
                Style::default().fg(Color::LightBlue),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Footer : raccourcis clavier
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Press ", key_style),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(" again to quit, any other key to cancel ⚠", key_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", key_style),
            Span::raw(" Quit  "),
            Span::styled("[↑↓ / Tab]", key_style),
            Span::raw(" Select  "),
            Span::styled("[←→ / h l]", key_style),
            Span::raw(" Slide  "),
            Span::styled("[e / Enter]", key_style),
            Span::raw(" Edit value"),
        ])
    };

    let paragraph = Paragraph::new(shortcuts)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Footer en mode saisie
fn render_edit_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)); // Vert pour indiquer mode input

    let title = app
        .focus
        .bound_param()
        .map(|param| param.title())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            format!("Editing {}  ", title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[Enter/ESC]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" Done  "),
        Span::styled("[Backspace]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(" Erase  "),
        Span::styled("[Del]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" Clear"),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
