//! Display formatting functions for the UI

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::member::{member_rows, Member};
use crate::sequence::{codon_product, Translation, NO_TRANSLATION};
use crate::ui::colors::{get_amino_acid_color, get_base_color};

const BASES: [char; 4] = ['A', 'T', 'G', 'C'];

/// Format a sequence with a space after every triplet.
pub fn format_triplets(sequence: &str) -> String {
    let total = sequence.chars().count();
    let mut result = String::new();

    for (i, c) in sequence.chars().enumerate() {
        result.push(c);
        if (i + 1) % 3 == 0 && i + 1 < total {
            result.push(' ');
        }
    }

    result
}

/// Per-base colored spans of a DNA sequence, triplet-grouped.
pub fn dna_spans(dna: &str) -> Vec<Span<'static>> {
    let total = dna.chars().count();
    let mut spans = Vec::new();

    for (i, c) in dna.chars().enumerate() {
        spans.push(Span::styled(
            c.to_string(),
            Style::default().fg(get_base_color(c)),
        ));
        if (i + 1) % 3 == 0 && i + 1 < total {
            spans.push(Span::raw(" "));
        }
    }

    spans
}

/// A translation as colored amino-acid letters, or the sentinel text when
/// nothing was produced.
pub fn translation_spans(translation: &Translation) -> Vec<Span<'static>> {
    match translation {
        Translation::Protein(protein) => protein
            .chars()
            .map(|aa| {
                Span::styled(
                    aa.to_string(),
                    Style::default().fg(get_amino_acid_color(aa)),
                )
            })
            .collect(),
        Translation::Unavailable => vec![Span::styled(
            NO_TRANSLATION,
            Style::default().fg(Color::DarkGray),
        )],
    }
}

fn label_color(label: &str) -> Color {
    if label == "Stop" {
        get_amino_acid_color('*')
    } else {
        label.chars().next().map(get_amino_acid_color).unwrap_or(Color::White)
    }
}

fn completion_label(codon: &str) -> String {
    codon_product(codon)
        .map(|product| product.label())
        .unwrap_or_else(|| "?".to_string())
}

/// Create a codon completion display showing possible amino acids for the
/// current partial codon of the DNA field.
pub fn create_codon_guide(partial_codon: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut current_codon_text = vec![Span::raw("Current codon: ")];

    if partial_codon.is_empty() {
        current_codon_text.push(Span::styled("None", Style::default().fg(Color::DarkGray)));
    } else {
        current_codon_text.push(Span::styled(
            partial_codon.to_string(),
            Style::default().fg(Color::Green),
        ));

        for _ in 0..3usize.saturating_sub(partial_codon.chars().count()) {
            current_codon_text.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
        }
    }

    lines.push(Line::from(current_codon_text));
    lines.push(Line::from(vec![Span::raw("")]));

    let partial: Vec<char> = partial_codon.chars().collect();

    match partial.len() {
        0 => {
            lines.push(Line::from(vec![Span::styled(
                "Start a new codon with any base:",
                Style::default().fg(Color::White),
            )]));

            let mut first_options = Vec::new();
            for &base in &BASES {
                first_options.push(Span::styled(
                    format!("{base} "),
                    Style::default().fg(get_base_color(base)),
                ));
            }
            lines.push(Line::from(first_options));
        }
        1 => {
            let first_base = partial[0];
            lines.push(Line::from(vec![Span::styled(
                format!("With first base {first_base}, add second base:"),
                Style::default().fg(Color::White),
            )]));

            for &second_base in &BASES {
                let mut row = vec![Span::styled(
                    format!("{first_base}{second_base}_ → "),
                    Style::default().fg(Color::Cyan),
                )];

                let mut possible_labels = Vec::new();
                for &third_base in &BASES {
                    let codon = format!("{first_base}{second_base}{third_base}");
                    possible_labels.push(completion_label(&codon));
                }

                possible_labels.sort();
                possible_labels.dedup();
                for (i, label) in possible_labels.iter().enumerate() {
                    if i > 0 {
                        row.push(Span::raw("/"));
                    }
                    row.push(Span::styled(
                        label.clone(),
                        Style::default().fg(label_color(label)),
                    ));
                }

                lines.push(Line::from(row));
            }
        }
        2 => {
            let first_base = partial[0];
            let second_base = partial[1];

            lines.push(Line::from(vec![Span::styled(
                format!("With bases {first_base}{second_base}, complete codon with:"),
                Style::default().fg(Color::White),
            )]));

            for &third_base in &BASES {
                let codon = format!("{first_base}{second_base}{third_base}");
                let label = completion_label(&codon);
                let color = label_color(&label);

                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{codon} → "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(label, Style::default().fg(color)),
                ]));
            }
        }
        _ => {
            lines.push(Line::from(vec![Span::styled(
                "Ready for next codon",
                Style::default().fg(Color::White),
            )]));
        }
    }

    lines
}

/// Profile lines for one member, one labeled row per line.
pub fn build_member_profile_lines(member: &Member) -> Vec<Line<'static>> {
    const VALUE_COLORS: [Color; 5] = [
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
    ];

    member_rows(member)
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(
                    value,
                    Style::default().fg(VALUE_COLORS[i % VALUE_COLORS.len()]),
                ),
            ])
        })
        .collect()
}
