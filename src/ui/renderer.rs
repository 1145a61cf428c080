use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{Comparison, View, ENTRY_FIELDS},
    ui::{build_member_profile_lines, create_codon_guide, dna_spans, translation_spans},
    App,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match app.view {
        View::Entry => render_entry_view(f, app),
        View::Roster => render_roster_view(f, app),
    }
}

fn render_entry_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, app, "Member Entry", chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_entry_form(f, app, body[0]);
    render_dna_preview(f, app, body[1]);

    let hint = "Type to fill the selected field. Tab/Down next field, \
                Enter add member, F2 roster, Esc quit.";
    render_status_bar(f, app, hint, chunks[2]);
}

fn render_roster_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, app, "Team Roster", chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_member_list(f, app, body[0]);
    render_member_profile(f, app, body[1]);
    render_comparison_panel(f, app, chunks[2]);

    let hint = "Up/Down select member, 'c' mark for comparison, 'x' clear \
                comparison, Esc entry form, 'q' quit.";
    render_status_bar(f, app, hint, chunks[3]);
}

fn render_title(f: &mut Frame, app: &App, view_name: &str, area: Rect) {
    let spans = vec![
        Span::styled("GeneCrew", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(view_name.to_string(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(
            format!("{} members collected", app.roster.len()),
            Style::default().fg(Color::Green),
        ),
    ];

    let title_widget =
        Paragraph::new(vec![Line::from(spans)]).block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_entry_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for (i, field) in ENTRY_FIELDS.iter().enumerate() {
        let selected = i == app.selected_field;
        let label_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(format!("{:<15}", field.label()), label_style),
            Span::raw(" "),
            Span::raw(app.field_values[i].clone()),
        ];
        if selected {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }

        lines.push(Line::from(spans));
    }

    let form_widget = Paragraph::new(lines)
        .block(Block::default().title("Member Entry").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(form_widget, area);
}

fn render_dna_preview(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

    let dna = app.normalized_dna();

    let validity = if dna.is_empty() {
        Span::styled("Waiting for DNA input", Style::default().fg(Color::DarkGray))
    } else if app.dna_is_valid {
        Span::styled("Valid DNA sequence", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "Invalid DNA sequence! Only A, T, C and G are allowed.",
            Style::default().fg(Color::Red),
        )
    };
    let validity_widget = Paragraph::new(vec![Line::from(validity)])
        .block(Block::default().title("Validation").borders(Borders::ALL));
    f.render_widget(validity_widget, chunks[0]);

    let sequence_widget = Paragraph::new(vec![Line::from(dna_spans(&dna))])
        .block(Block::default().title("DNA Sequence").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(sequence_widget, chunks[1]);

    let translation_widget =
        Paragraph::new(vec![Line::from(translation_spans(&app.translation_preview))])
            .block(
                Block::default()
                    .title("Protein Translation")
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: true });
    f.render_widget(translation_widget, chunks[2]);

    let guide_widget = Paragraph::new(create_codon_guide(&app.current_partial_codon())).block(
        Block::default()
            .title("Codon Completion Guide")
            .borders(Borders::ALL),
    );
    f.render_widget(guide_widget, chunks[3]);
}

fn render_member_list(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.roster.is_empty() {
        vec![Line::from(Span::styled(
            "No members collected yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.roster
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let marker = if app.compare_first == Some(i) { "* " } else { "  " };
                let name = if member.name.is_empty() {
                    "(unnamed)"
                } else {
                    member.name.as_str()
                };
                let style = if i == app.selected_member {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(format!("{marker}{name}"), style))
            })
            .collect()
    };

    let list_widget = Paragraph::new(lines)
        .block(Block::default().title("Members").borders(Borders::ALL));
    f.render_widget(list_widget, area);
}

fn render_member_profile(f: &mut Frame, app: &App, area: Rect) {
    let lines = match app.roster.get(app.selected_member) {
        Some(member) => build_member_profile_lines(member),
        None => vec![Line::from(Span::styled(
            "Add members from the entry form to see their profiles here.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let profile_widget = Paragraph::new(lines)
        .block(Block::default().title("Profile").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(profile_widget, area);
}

fn render_comparison_panel(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.comparison {
        Some(comparison) => build_comparison_lines(app, comparison),
        None => vec![Line::from(Span::styled(
            "Press 'c' on two members to compare their DNA sequences.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let comparison_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Sequence Comparison")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(comparison_widget, area);
}

fn build_comparison_lines(app: &App, comparison: &Comparison) -> Vec<Line<'static>> {
    let left = &app.roster[comparison.left];
    let right = &app.roster[comparison.right];

    let mut lines = Vec::new();

    match &comparison.distance {
        Ok(distance) => lines.push(Line::from(vec![
            Span::raw(format!(
                "Hamming Distance between {} and {}: ",
                left.name, right.name
            )),
            Span::styled(distance.to_string(), Style::default().fg(Color::Green)),
        ])),
        Err(message) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))),
    }

    lines.push(Line::from(comparison_sequence_spans(
        &left.name,
        &left.dna,
        &comparison.matching,
    )));
    lines.push(Line::from(comparison_sequence_spans(
        &right.name,
        &right.dna,
        &comparison.matching,
    )));

    lines
}

fn comparison_sequence_spans(name: &str, dna: &str, matching: &[bool]) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(format!("{name}: "))];

    for (i, c) in dna.chars().enumerate() {
        let style = match matching.get(i) {
            Some(true) => Style::default().fg(Color::Green),
            Some(false) => Style::default().fg(Color::Red),
            // Positions past the shorter sequence have nothing to match.
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    spans
}

fn render_status_bar(f: &mut Frame, app: &App, hint: &str, area: Rect) {
    let (text, color) = match &app.status_message {
        Some(message) => (message.clone(), Color::Yellow),
        None => (hint.to_string(), Color::White),
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![Span::styled(
        text,
        Style::default().fg(color),
    )])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
