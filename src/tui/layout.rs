//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};

use super::runtime::App;
use super::style;
use crate::balance::InputField;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(14),   // form + results
            Constraint::Length(4), // analysis
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(40)])
        .split(rows[1]);

    let results = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // cards
            Constraint::Length(6), // breakdown
            Constraint::Min(6),    // shares
        ])
        .split(body[1]);

    render_header(frame, app, rows[0]);
    render_form(frame, app, body[0]);
    render_cards(frame, app, results[0]);
    render_breakdown(frame, app, results[1]);
    render_shares(frame, app, results[2]);
    render_analysis(frame, app, rows[2]);
    render_footer(frame, rows[3]);
}

/// Header bar: case name and the balance equation.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let edited = InputField::ALL.into_iter().any(|f| app.is_edited(f));
    let header = Line::from(vec![
        Span::styled(
            " GASIFIER BALANCE ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.case_name(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            if edited { " (edited)" } else { "" },
            Style::default().fg(style::EDITED_FG),
        ),
        Span::raw(" │ Q_loss = E_in - (E_chem + E_sens)"),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Input form, one row per field; the selected row is highlighted.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = InputField::ALL
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let marker = if app.is_edited(field) { "*" } else { " " };
            let text = format!(
                " {:<12}{:>9.1} {:<6}{}",
                field.label(),
                field.get(&app.inputs),
                field.unit(),
                marker,
            );
            let row_style = if i == app.selected {
                Style::default()
                    .bg(style::SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, row_style))
        })
        .collect();

    let combustible = app.inputs.combustible_pct();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Combustibles {combustible:.1}%, rest N2/CO2"),
        Style::default().fg(style::FOOTER_FG),
    )));

    let block = Block::default().title(" Process inputs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// KPI cards: syngas LHV, cold gas efficiency, system losses.
fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let b = &app.report.balance;
    let a = &app.report.advisory;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let card = |title: &'static str, value: String, color| {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().title(title).borders(Borders::ALL))
    };

    frame.render_widget(
        card(
            " Syngas LHV ",
            format!("{:.2} MJ/Nm³", b.lhv_gas),
            style::gas_quality_color(a.gas_quality),
        ),
        cards[0],
    );
    frame.render_widget(
        card(
            " Cold gas efficiency ",
            format!("{:.1}%", b.cge),
            style::efficiency_color(a.efficiency),
        ),
        cards[1],
    );
    frame.render_widget(
        card(
            " System losses ",
            format!("{:.2} MJ/h", b.e_loss),
            style::LOSS_COLOR,
        ),
        cards[2],
    );
}

/// Breakdown table of the balance terms.
fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let b = &app.report.balance;
    let row = |label: &'static str, value: f64, color| {
        Line::from(vec![
            Span::raw(format!(" {label:<24}")),
            Span::styled(
                format!("{value:>10.2} MJ/h"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let lines = vec![
        row("Total input (H_feed)", b.e_in, style::INPUT_COLOR),
        row("Chemical out (H_chem)", b.e_chem, style::CHEM_COLOR),
        row("Sensible out (H_sens)", b.e_sens, style::SENS_COLOR),
        row("Total losses (Q_loss)", b.e_loss, style::LOSS_COLOR),
    ];
    let block = Block::default()
        .title(" Energy breakdown ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Bar chart of output shares in percent.
fn render_shares(frame: &mut Frame, app: &App, area: Rect) {
    let colors = [style::CHEM_COLOR, style::SENS_COLOR, style::LOSS_COLOR];
    let short = ["Chemical", "Sensible", "Losses"];
    let bars: Vec<Bar> = app
        .report
        .shares
        .as_array()
        .into_iter()
        .zip(colors)
        .zip(short)
        .map(|((share, color), label)| {
            Bar::default()
                .value(share.pct.round() as u64)
                .text_value(format!("{:.1}%", share.pct))
                .label(Line::from(label))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Output shares (%) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(4)
        .max(100);
    frame.render_widget(chart, area);
}

/// Analysis paragraph with both judgments.
fn render_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let a = &app.report.advisory;
    let lines = vec![
        Line::from(Span::styled(
            a.gas_sentence(),
            Style::default().fg(style::gas_quality_color(a.gas_quality)),
        )),
        Line::from(Span::styled(
            a.efficiency_sentence(),
            Style::default().fg(style::efficiency_color(a.efficiency)),
        )),
    ];
    let block = Block::default().title(" Analysis ").borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Field  +/-/←/→:Adjust  Shift+←/→:x10  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
