// ============================================
// src/ui.rs
// UI描画
// ============================================

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Clear, Dataset, Gauge, GraphType, List, ListItem, ListState,
        Paragraph, Tabs, Wrap,
    },
};

use crate::app::{App, Screen};
use crate::conversation::{SCENARIOS, Sender, SessionState};
use crate::home::{CURSOR_CHAR, WEEK_DAYS, WEEKLY_PROGRESS, progress_ring_ratio};
use crate::notify::Severity;

const SERIES_COLORS: [Color; 3] = [
    Color::Rgb(0xA8, 0xC8, 0xA8),
    Color::Rgb(0xD4, 0xC5, 0xE8),
    Color::Rgb(0xF4, 0xC2, 0xA1),
];

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();
    // 枠線を描画
    let block = Block::default().borders(Borders::ALL).title("Fluent Wiz !");
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] タブ
            Constraint::Min(1),    // [1] 本体
            Constraint::Length(1), // [2] 操作説明
        ])
        .split(inner_area);

    // 0. タブ
    let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
    let selected = Screen::ALL
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).bold());
    f.render_widget(tabs, chunks[0]);

    // 1. 本体
    match app.screen {
        Screen::Home => draw_home(f, app, chunks[1]),
        Screen::Vocabulary => draw_vocabulary(f, app, chunks[1]),
        Screen::Grammar => draw_grammar(f, app, chunks[1]),
        Screen::Conversation => draw_conversation(f, app, chunks[1]),
    }

    // 2. 操作説明
    f.render_widget(
        Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    draw_notifications(f, app, inner_area);
}

fn help_text(app: &App) -> &'static str {
    match app.screen {
        Screen::Home => "Tab: next screen  p: play audio  Ctrl+D: dismiss  Esc: quit",
        Screen::Vocabulary if app.search_focused => "type to search  Enter/Esc: done",
        Screen::Vocabulary => {
            "Space: flip  ←/→: prev/next  s: shuffle  k: known  r: review  p: audio  c/C: category  a: all  /: search  ↑/↓: word  Enter: word audio"
        }
        Screen::Grammar => "←/→: move along the timeline  1-5: jump to tense",
        Screen::Conversation => {
            "Enter: send  ↑/↓: scenario  Ctrl+R: record  Ctrl+O: quick response  Esc: quit"
        }
    }
}

// --------------------------------------------------
// ホーム
// --------------------------------------------------

fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    let headline = Line::from(vec![
        Span::raw("Speak English "),
        Span::styled(app.typewriter.visible(), Style::default().fg(Color::Magenta).bold()),
        Span::styled(CURSOR_CHAR.to_string(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(headline).centered(), rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    draw_progress_chart(f, cols[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(cols[1]);

    let ratio = progress_ring_ratio();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Weekly goal"))
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, side[0]);

    let word = app.daily_word;
    let daily = Paragraph::new(vec![
        Line::from(word.word).style(Style::default().fg(Color::White).bold()),
        Line::from(word.pronunciation).style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from(word.meaning),
        Line::from(""),
        Line::from(word.example).style(Style::default().fg(Color::Yellow).italic()),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Word of the day"));
    f.render_widget(daily, side[1]);
}

fn draw_progress_chart(f: &mut Frame, area: Rect) {
    // 積み上げグラフなので前の系列に足していく
    let mut totals = [0.0f64; 7];
    let points: Vec<Vec<(f64, f64)>> = WEEKLY_PROGRESS
        .iter()
        .map(|series| {
            series
                .values
                .iter()
                .enumerate()
                .map(|(day, value)| {
                    totals[day] += f64::from(*value);
                    (day as f64, totals[day])
                })
                .collect()
        })
        .collect();
    let max = totals.iter().cloned().fold(0.0, f64::max);

    let datasets: Vec<Dataset> = WEEKLY_PROGRESS
        .iter()
        .zip(points.iter())
        .zip(SERIES_COLORS)
        .map(|((series, data), color)| {
            Dataset::default()
                .name(series.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("This week"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (WEEK_DAYS.len() - 1) as f64])
                .labels(WEEK_DAYS.iter().map(|d| Span::raw(*d)).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", max / 2.0)),
                    Span::raw(format!("{max}")),
                ]),
        );
    f.render_widget(chart, area);
}

// --------------------------------------------------
// 単語
// --------------------------------------------------

fn draw_vocabulary(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // フラッシュカード
    let nav = &app.navigator;
    let card = nav.current();
    let mut lines = vec![
        Line::from(card.word).style(Style::default().fg(Color::White).bold()),
        Line::from(card.pronunciation).style(Style::default().fg(Color::Gray)),
        Line::from(""),
    ];
    if nav.is_revealed() {
        lines.push(Line::from(card.meaning));
        lines.push(Line::from(""));
        lines.push(Line::from(card.example).style(Style::default().fg(Color::Yellow).italic()));
    } else {
        lines.push(Line::from("(Space to flip)").style(Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(format!("{} · {}", card.category, card.difficulty))
            .style(Style::default().fg(Color::Cyan)),
    );
    lines.push(
        Line::from(format!(
            "known: {}  review: {}",
            nav.known_count(),
            nav.review_count()
        ))
        .style(Style::default().fg(Color::DarkGray)),
    );

    let title = format!("Flashcard {}/{}", nav.cursor() + 1, nav.len());
    f.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        cols[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索
            Constraint::Length(1), // カテゴリ
            Constraint::Min(1),    // 単語リスト
        ])
        .split(cols[1]);

    let search_style = if app.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(
        Paragraph::new(app.query.as_str())
            .block(Block::default().borders(Borders::ALL).title("Search"))
            .style(search_style),
        right[0],
    );

    let mut spans = Vec::new();
    for filter in app.categories.options() {
        let style = if app.categories.is_active(*filter) {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!(" {filter} "), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), right[1]);

    let words = app.visible_words();
    let items: Vec<ListItem> = words
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.word, Style::default().bold()),
                Span::raw("  "),
                Span::styled(entry.kind.as_str(), Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::styled(entry.meaning, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    // 選択行が見えるように List 側でスクロールさせる
    let selected = words.len().checked_sub(1).map(|last| app.selected_word.min(last));
    let mut state = ListState::default().with_selected(selected);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Words ({})", words.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, right[2], &mut state);
}

// --------------------------------------------------
// 文法
// --------------------------------------------------

fn draw_grammar(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let timeline = &app.grammar;
    let mut spans = Vec::new();
    for (i, tense) in timeline.tenses().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == timeline.active_index() {
            Style::default().fg(Color::White).bg(Color::Blue).bold()
        } else {
            Style::default().fg(Color::Blue)
        };
        spans.push(Span::styled(format!(" {} ", tense.badge), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .centered()
            .block(Block::default().borders(Borders::ALL).title("Past → Future")),
        rows[0],
    );

    let tense = timeline.content();
    let mut lines = vec![
        Line::from(tense.name).style(Style::default().fg(Color::White).bold()),
        Line::from(tense.summary).style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from("Structure:").bold(),
        Line::from(format!("  {}", tense.structure)).style(Style::default().fg(Color::Blue)),
        Line::from(""),
        Line::from("When to use:").bold(),
    ];
    lines.extend(tense.uses.iter().map(|u| Line::from(format!("  ✓ {u}"))));
    lines.push(Line::from(""));
    lines.push(Line::from("Time expressions:").bold());
    lines.push(
        Line::from(format!("  {}", tense.time_expressions.join(" · ")))
            .style(Style::default().fg(Color::Blue)),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("Examples:").bold());
    for (i, (sentence, note)) in tense.examples.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::Blue)),
            Span::raw(*sentence),
            Span::styled(format!("  ({note})"), Style::default().fg(Color::DarkGray)),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        rows[1],
    );
}

// --------------------------------------------------
// 会話
// --------------------------------------------------

fn draw_conversation(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    let sim = &app.conversation;
    let items: Vec<ListItem> = SCENARIOS
        .iter()
        .map(|scenario| {
            let active = sim.scenario() == Some(scenario.key);
            let style = if active {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(scenario.title).style(style)
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Scenarios")),
        cols[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(cols[1]);

    let mut lines: Vec<Line> = Vec::new();
    for message in sim.transcript() {
        let line = match message.sender {
            Sender::Ai => Line::from(vec![
                Span::styled("AI: ", Style::default().fg(Color::Magenta).bold()),
                Span::raw(message.text.as_str()),
            ]),
            Sender::User => Line::from(vec![
                Span::raw(message.text.as_str()),
                Span::styled(" :You", Style::default().fg(Color::Cyan).bold()),
            ])
            .right_aligned(),
        };
        lines.push(line);
    }
    if sim.state() == SessionState::AwaitingSimulatedResponse {
        lines.push(Line::from("AI is typing...").style(Style::default().fg(Color::DarkGray)));
    }

    // 最新のメッセージが見えるように下までスクロール
    let height = right[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title("Conversation")),
        right[0],
    );

    let title = if sim.is_recording() {
        Span::styled("● REC", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else if sim.speech_available() {
        Span::raw("Message (Ctrl+R: voice)")
    } else {
        Span::raw("Message")
    };
    f.render_widget(
        Paragraph::new(sim.input())
            .block(Block::default().borders(Borders::ALL).title(title)),
        right[1],
    );
}

// --------------------------------------------------
// 通知 (右上に重ねる)
// --------------------------------------------------

fn draw_notifications(f: &mut Frame, app: &App, area: Rect) {
    let width = 44.min(area.width);
    let mut y = area.y + 1;
    for note in app.notifier.active().iter().rev() {
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 3);
        let color = match note.severity {
            Severity::Info => Color::Blue,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        };
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(note.message.as_str())
                .style(Style::default().fg(Color::White).bg(color))
                .block(Block::default().borders(Borders::ALL)),
            rect,
        );
        y += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::SpeechCapability;
    use crate::settings::Settings;
    use crate::words::WORD_LIST;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_on(screen: Screen) -> App {
        let settings = Settings {
            start_screen: screen,
            ..Settings::default()
        };
        App::new(&settings, SpeechCapability::Unavailable, Some(9), 4).unwrap()
    }

    #[test]
    fn every_screen_renders() {
        for screen in Screen::ALL {
            let out = render(&app_on(screen));
            assert!(out.contains("Fluent Wiz !"), "{screen:?}");
        }
    }

    #[test]
    fn vocabulary_shows_current_card() {
        let out = render(&app_on(Screen::Vocabulary));
        assert!(out.contains("Eloquent"));
        assert!(out.contains("Flashcard 1/5"));
    }

    #[test]
    fn word_list_scrolls_to_selection() {
        let mut app = app_on(Screen::Vocabulary);
        let last = WORD_LIST[WORD_LIST.len() - 1].word;
        assert!(!render(&app).contains(last));
        app.selected_word = WORD_LIST.len() - 1;
        assert!(render(&app).contains(last));
    }

    #[test]
    fn home_shows_word_of_the_day() {
        let out = render(&app_on(Screen::Home));
        assert!(out.contains("Serendipity"));
    }

    #[test]
    fn notification_is_drawn() {
        let mut app = app_on(Screen::Grammar);
        app.notifier.notify("Saved!", Severity::Success, 0);
        assert!(render(&app).contains("Saved!"));
    }
}
