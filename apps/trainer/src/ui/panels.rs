//! Overlay panels: review list, stats, grammar reference and help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use vocab_core::grammar::{self, GENDER_COLUMNS, Note, Table, WordList};

use super::{NO_TRANSLATION, Palette};
use crate::state::AppState;

const HINT: &str = " Esc to close ";

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(HINT)
}

/// Entries marked for review, in marking order.
pub fn render_review_list(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let entries = state.session.review_entries();
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Line::styled(
            "No words marked for review.",
            Style::default().fg(palette.muted),
        ))]
    } else {
        entries
            .into_iter()
            .skip(state.scroll() as usize)
            .map(|(_, entry)| {
                let translation = if entry.has_translation() {
                    entry.joined_translations()
                } else {
                    NO_TRANSLATION.to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.term.clone(),
                        Style::default().fg(palette.term).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(translation, Style::default().fg(palette.translation)),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(panel(" Review List ")), area);
}

/// Counts for the current session.
pub fn render_stats(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let session = &state.session;
    let progress = session.progress();
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(palette.muted)),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        row("Words:", session.vocab().len().to_string()),
        row("Valid:", progress.valid_words.to_string()),
        row(
            "Seen:",
            format!("{} ({:.0}%)", progress.seen, progress.seen_percent),
        ),
        row(
            "Known:",
            format!("{} ({:.0}%)", progress.known, progress.known_percent),
        ),
        row("Review:", progress.review.to_string()),
        row("Mode:", session.mode().to_string()),
        row("Theme:", state.theme.as_str().to_string()),
    ];
    if let Some(at) = state.saved_at() {
        lines.push(row(
            "List saved:",
            at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(" Stats ")), area);
}

fn table_lines(table: &Table, palette: &Palette) -> Vec<Line<'static>> {
    let heading = Style::default().fg(palette.title).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled(table.title, heading)];

    let mut header = format!("  {:<16}", table.label);
    for column in GENDER_COLUMNS {
        header.push_str(&format!("{:<10}", column));
    }
    lines.push(Line::styled(header, Style::default().fg(palette.muted)));

    for (label, forms) in table.rows {
        let mut row = format!("  {:<16}", label);
        for form in forms {
            row.push_str(&format!("{:<10}", form));
        }
        lines.push(Line::raw(row));
    }
    lines.push(Line::default());
    lines
}

fn note_lines(note: &Note, palette: &Palette) -> Vec<Line<'static>> {
    let heading = Style::default().fg(palette.title).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled(note.title, heading)];
    lines.extend(note.lines.iter().map(|line| Line::raw(format!("  {}", line))));
    lines.push(Line::default());
    lines
}

fn word_list_lines(list: &WordList, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            list.title,
            Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("  {}", list.words.join(", "))),
        Line::default(),
    ]
}

/// Every line of the grammar reference, top to bottom.
pub fn grammar_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for table in grammar::tables() {
        lines.extend(table_lines(&table, palette));
    }
    for note in grammar::notes() {
        lines.extend(note_lines(&note, palette));
    }
    for list in grammar::word_lists() {
        lines.extend(word_list_lines(&list, palette));
    }
    lines
}

/// The grammar reference, scrolled with the arrow keys.
pub fn render_grammar(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let paragraph = Paragraph::new(grammar_lines(palette))
        .block(panel(" Grammatik (Up/Down to scroll) "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll(), 0));
    frame.render_widget(paragraph, area);
}

const HELP: &[(&str, &str)] = &[
    ("space / Enter", "reveal or hide the translation"),
    ("Right / n", "next card"),
    ("Left / b", "previous card"),
    ("drag mouse", "swipe: left for next, right for previous"),
    ("k", "mark known and continue"),
    ("r", "mark for review and continue"),
    ("t", "draw only from the review list"),
    ("f / a", "full-word or article mode"),
    ("1 2 3", "guess der / die / das (article mode)"),
    ("l", "review list"),
    ("s", "stats"),
    ("g", "grammar reference"),
    ("c", "switch theme"),
    ("R", "reload vocabulary"),
    (":", "type a command (theme light, swipe 200 100, ...)"),
    ("q / Ctrl-C", "quit"),
];

pub fn render_help(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<16}", keys),
                    Style::default().fg(palette.term).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*what),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(panel(" Keys "))
        .scroll((state.scroll(), 0));
    frame.render_widget(paragraph, area);
}
