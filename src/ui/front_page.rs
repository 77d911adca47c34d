// ============================================================================
// Front page - Rendu de la page
// ============================================================================
// Dessine la page en utilisant les widgets de ratatui
//
//   ┌──────────── THE FRONTPAGE ────────────┐
//   │        Wednesday, May 1, 2024         │   zone "current-date"
//   └───────────────────────────────────────┘
//   ┌ Markets ──────────────────────────────┐
//   │  S&P 500  ▲ +0.63%                    │   zone "stock-ticker"
//   └───────────────────────────────────────┘
//   ┌ Today's board ────────────────────────┐
//   │  ...toutes les quotes...              │
//   └───────────────────────────────────────┘
//   [q] Quit  [p] Pause
//
// Une zone absente de la page n'est pas dessinée du tout.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::page::TickerElement;
use crate::ui::styles::{class_style, faded, opacity};

/// Titre affiché dans le bandeau
pub const MASTHEAD_TITLE: &str = " THE FRONTPAGE ";

/// Dessine la page complète
///
/// # Arguments
/// * `frame` - Surface de dessin ratatui
/// * `app` - État de l'application
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_masthead(frame, app, chunks[0]);
    render_ticker(frame, app, chunks[1]);
    render_board(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Crée le layout principal (bandeau, ticker, tableau, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Bandeau : titre + date
            Constraint::Length(3), // Ticker : une ligne
            Constraint::Min(0),    // Tableau : tout le reste
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Bandeau : titre + date
// ============================================================================

fn render_masthead(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(MASTHEAD_TITLE)
        .title_alignment(Alignment::Center);

    let mut text = vec![Line::from(Span::styled(
        "All the quotes that fit, in print",
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ))];

    // Zone "current-date" : seulement si elle est montée
    if let Some(date) = app.document.date() {
        text.push(Line::from(Span::styled(
            date.text.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Ticker
// ============================================================================

fn render_ticker(frame: &mut Frame, app: &App, area: Rect) {
    // Zone "stock-ticker" absente : rien à dessiner
    let Some(element) = app.document.ticker() else {
        return;
    };

    let title = if app.is_paused() {
        " Markets (paused) "
    } else {
        " Markets "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let paragraph = Paragraph::new(vec![ticker_line(element, app)])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Ligne du ticker : libellé + span directionnel, avec le fondu appliqué
fn ticker_line<'a>(element: &'a TickerElement, app: &App) -> Line<'a> {
    let Some(content) = element.content.as_ref() else {
        return Line::from("");
    };

    let alpha = opacity(element.fade, app.ticker.phase(), app.now);

    Line::from(vec![
        Span::styled(
            content.label.text.as_str(),
            faded(class_style(content.label.class), alpha),
        ),
        Span::raw("  "),
        Span::styled(
            content.direction.text.as_str(),
            faded(class_style(content.direction.class), alpha),
        ),
    ])
}

// ============================================================================
// Tableau : toutes les quotes, celle du ticker en surbrillance
// ============================================================================

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Today's board ");

    let on_air = on_air_index(app);

    let items: Vec<ListItem> = app
        .ticker
        .quotes()
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let trend = quote.trend();
            let line = format!(
                " {:<16} {:<6} {} {}",
                quote.name,
                quote.symbol,
                trend.glyph(),
                quote.change
            );

            let mut style = class_style(trend.class_name());
            if Some(index) == on_air {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(line).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Index de la quote actuellement affichée par le ticker
///
/// Le curseur pointe sur la PROCHAINE quote, celle affichée est juste avant.
fn on_air_index(app: &App) -> Option<usize> {
    if app.ticker.swaps() == 0 || app.document.ticker().is_none() {
        return None;
    }
    let len = app.ticker.quotes().len();
    Some((app.ticker.cursor() + len - 1) % len)
}

// ============================================================================
// Footer : Instructions
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        let pause_label = if app.is_paused() { " Resume" } else { " Pause" };
        Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit  "),
            Span::styled("[p / space]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(pause_label),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================
