//! Header gauges and the flashcard itself.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use vocab_core::article::{GuessOutcome, article_choices, split_article};
use vocab_core::{Mode, Phase, Progress, VocabEntry};

use super::{NO_TRANSLATION, Palette};
use crate::state::AppState;

/// Title line and the seen/known gauges.
pub fn render_header(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let [title_area, seen_area, known_area] = chunks.as_ref() else {
        return;
    };

    let title = Line::from(vec![
        Span::styled(
            " Der Wortschatz",
            Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} words", state.session.vocab().len()),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), *title_area);

    let progress = state.session.progress();
    let (seen, known) = gauges(&progress, palette);
    frame.render_widget(seen, *seen_area);
    frame.render_widget(known, *known_area);
}

fn gauges(progress: &Progress, palette: &Palette) -> (Gauge<'static>, Gauge<'static>) {
    let gauge = |label: String, percent: f64| {
        Gauge::default()
            .gauge_style(Style::default().fg(palette.bar))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(label)
    };
    (
        gauge(
            format!("Seen {}/{}", progress.seen, progress.valid_words),
            progress.seen_percent,
        ),
        gauge(
            format!("Known {}/{}", progress.known, progress.valid_words),
            progress.known_percent,
        ),
    )
}

/// The current card, or a placeholder when there is none.
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let session = &state.session;
    let title = format!(
        " Mode: {} | Review: {} ({}) ",
        session.mode(),
        if session.is_review_active() { "on" } else { "off" },
        session.review().len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let muted = Style::default().fg(palette.muted);
    let lines = match (session.phase(), session.current_entry()) {
        (Phase::Idle, _) if state.is_loading() => vec![Line::styled("Loading…", muted)],
        (Phase::Idle, _) => vec![Line::styled(
            "No vocabulary loaded. Add vocab files and reload.",
            muted,
        )],
        (Phase::Reviewing, None) if session.review().is_empty() => vec![Line::styled(
            "Review list is empty. Press t to leave review mode.",
            muted,
        )],
        (_, None) => vec![Line::styled("No card", muted)],
        (_, Some(entry)) => match session.mode() {
            Mode::FullWord => full_card(entry, session.is_revealed(), palette),
            Mode::ArticleOnly => article_card(
                entry,
                session.is_revealed(),
                session.pending_guess(),
                session.guess_outcome(),
                palette,
            ),
        },
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn translation_line(entry: &VocabEntry, palette: &Palette) -> Line<'static> {
    if entry.has_translation() {
        Line::styled(
            entry.joined_translations(),
            Style::default().fg(palette.translation),
        )
    } else {
        Line::styled(NO_TRANSLATION, Style::default().fg(palette.muted))
    }
}

fn full_card(entry: &VocabEntry, revealed: bool, palette: &Palette) -> Vec<Line<'static>> {
    let term = Line::styled(
        entry.term.clone(),
        Style::default().fg(palette.term).add_modifier(Modifier::BOLD),
    );
    let below = if revealed {
        translation_line(entry, palette)
    } else {
        Line::styled("(space to reveal)", Style::default().fg(palette.muted))
    };
    vec![Line::default(), term, Line::default(), below]
}

fn article_card(
    entry: &VocabEntry,
    revealed: bool,
    guess: Option<&str>,
    outcome: Option<GuessOutcome>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let (article, word) = split_article(&entry.term);
    let mut lines = vec![
        Line::default(),
        Line::styled(
            format!("___ {}", word),
            Style::default().fg(palette.term).add_modifier(Modifier::BOLD),
        ),
    ];
    if revealed {
        lines.push(translation_line(entry, palette));
    }
    lines.push(Line::default());

    let mut choices = Vec::new();
    for (i, choice) in article_choices().into_iter().enumerate() {
        if i > 0 {
            choices.push(Span::raw("   "));
        }
        let span = match guess {
            Some(_) if choice.eq_ignore_ascii_case(article) => Span::styled(
                format!("[{}] {}", i + 1, choice),
                Style::default().fg(palette.good).add_modifier(Modifier::BOLD),
            ),
            Some(g) if g == choice => Span::styled(
                format!("[{}] {}", i + 1, choice),
                Style::default().fg(palette.bad).add_modifier(Modifier::CROSSED_OUT),
            ),
            _ => Span::raw(format!("[{}] {}", i + 1, choice)),
        };
        choices.push(span);
    }
    lines.push(Line::from(choices));

    match outcome {
        Some(GuessOutcome::Correct) => {
            lines.push(Line::styled("Richtig!", Style::default().fg(palette.good)));
        }
        Some(GuessOutcome::Incorrect { expected }) => {
            lines.push(Line::styled(
                format!("Falsch: {} {}", expected, word),
                Style::default().fg(palette.bad),
            ));
        }
        None => {}
    }
    lines
}
