use quran_core::{
    catalog::{CatalogState, ScriptureCatalog},
    layout::{truncate_graphemes, verse_lines},
    reader::ChapterReader,
    recitation::RecitationPlayer,
    references::{ReferenceState, ReferenceTextManager},
    schedule::ScheduleTable,
    strings,
    types::ChapterSummary,
};
use ratatui::{prelude::*, widgets::*};

use crate::layout::{centered_rect, scroll_offset};
use crate::theme::Theme;

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 5;

pub fn render_tabs(f: &mut Frame<'_>, area: Rect, titles: &[&str], selected: usize, theme: &Theme) {
    let tabs = Tabs::new(titles.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().bg(theme.header_bg).fg(theme.header_fg))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, area);
}

pub fn render_status(f: &mut Frame<'_>, area: Rect, left: &str, right: &str, theme: &Theme) {
    let style = Style::default().bg(theme.footer_bg).fg(theme.footer_fg);
    let width = area.width as usize;
    let right = truncate_graphemes(right, width / 2);
    let left = truncate_graphemes(left, width.saturating_sub(right.chars().count() + 1));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right.chars().count() as u16)])
        .split(area);
    f.render_widget(Paragraph::new(left).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(right).style(style).alignment(Alignment::Right),
        chunks[1],
    );
}

fn centered_message(f: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let body = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(body, area);
}

/// Chapter cards in rows. Returns the column count used, which the grid
/// cursor needs for vertical moves.
pub fn render_catalog(
    f: &mut Frame<'_>,
    area: Rect,
    catalog: &ScriptureCatalog,
    cursor: usize,
    theme: &Theme,
) -> usize {
    let title = "سور القرآن الكريم (Enter فتح، / بحث)";
    match catalog.state() {
        CatalogState::Loading => {
            centered_message(f, area, title, strings::LOADING);
            return 1;
        }
        CatalogState::Failed(message) => {
            centered_message(f, area, title, message);
            return 1;
        }
        CatalogState::Loaded => {}
    }
    let outer = Block::default().title(title).borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let chapters = catalog.chapters();
    let cursor_row = cursor / columns;
    let first_row = scroll_offset(cursor_row, visible_rows, 0);

    for (row, chunk) in chapters
        .chunks(columns)
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        let y = inner.y + ((row - first_row) as u16) * CARD_HEIGHT;
        for (col, chapter) in chunk.iter().enumerate() {
            let rect = Rect {
                x: inner.x + (col as u16) * CARD_WIDTH,
                y,
                width: CARD_WIDTH.min(inner.width),
                height: CARD_HEIGHT.min(inner.bottom().saturating_sub(y)),
            };
            let position = row * columns + col;
            let selected = position == cursor;
            let active = catalog.active() == Some(chapter.index);
            render_card(f, rect, chapter, selected, active, theme);
        }
    }
    columns
}

fn render_card(
    f: &mut Frame<'_>,
    area: Rect,
    chapter: &ChapterSummary,
    selected: bool,
    active: bool,
    theme: &Theme,
) {
    let mut border = Style::default();
    if active {
        border = border.fg(theme.accent).add_modifier(Modifier::BOLD);
    }
    if selected {
        border = border.bg(theme.pad_bg).fg(theme.accent);
    }
    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(truncate_graphemes(
            &format!("{}. {}", chapter.index, chapter.name),
            width,
        )),
        Line::from(truncate_graphemes(&chapter.english_label(), width)),
        Line::from(truncate_graphemes(&chapter.details(), width)).style(Style::default().fg(Color::DarkGray)),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(card, area);
}

/// Returns the clamped scroll offset and the page height.
pub fn render_reader(
    f: &mut Frame<'_>,
    area: Rect,
    reader: &ChapterReader,
    scroll: usize,
    theme: &Theme,
) -> (usize, usize) {
    let Some(chapter) = reader.active() else {
        let message = if reader.pending().is_some() {
            strings::LOADING
        } else {
            "اختر سورة من القائمة لعرضها هنا"
        };
        centered_message(f, area, "القراءة", message);
        return (0, 0);
    };
    let title = match reader.pending() {
        Some(_) => format!("{}  ({})", chapter.heading(), strings::LOADING),
        None => chapter.heading(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = verse_lines(chapter, inner.width.saturating_sub(2) as usize);
    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let scroll = scroll.min(max_scroll);
    let rendered: Vec<Line> = lines
        .iter()
        .skip(scroll)
        .take(height)
        .map(|l| {
            let style = if l.first {
                Style::default().fg(theme.header_fg)
            } else {
                Style::default()
            };
            Line::from(l.text.clone()).style(style)
        })
        .collect();
    f.render_widget(Paragraph::new(rendered).alignment(Alignment::Right), inner);
    (scroll, height)
}

pub struct AudioPanes<'a> {
    pub player: &'a RecitationPlayer,
    pub catalog: &'a ScriptureCatalog,
    pub reciters_focused: bool,
    pub reciter_cursor: usize,
    pub chapter_cursor: usize,
}

impl AudioPanes<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(4)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[0]);

        let selected_id = self.player.selected_reciter().map(|r| r.id.as_str());
        let reciters: Vec<ListItem> = self
            .player
            .reciters()
            .iter()
            .map(|r| {
                let mark = if Some(r.id.as_str()) == selected_id { "● " } else { "  " };
                ListItem::new(format!("{}{}", mark, r.name))
            })
            .collect();
        let reciter_title = match self.player.selected_reciter() {
            Some(r) => format!("{} {}", strings::RECITER_PREFIX, r.name),
            None => strings::CHOOSE_RECITER.to_string(),
        };
        render_list(
            f,
            cols[0],
            reciters,
            &reciter_title,
            self.reciter_cursor,
            self.reciters_focused,
            theme,
        );

        let playing = self.player.now_playing().map(|n| n.chapter_index);
        let chapters: Vec<ListItem> = match self.catalog.state() {
            CatalogState::Loaded => self
                .catalog
                .chapters()
                .iter()
                .map(|c| {
                    let mark = if Some(c.index) == playing { "♪ " } else { "  " };
                    ListItem::new(format!(
                        "{}{:>3}. {}  {}",
                        mark,
                        c.index,
                        c.name,
                        c.verse_count_label()
                    ))
                })
                .collect(),
            CatalogState::Loading => vec![ListItem::new(strings::LOADING)],
            CatalogState::Failed(message) => vec![ListItem::new(message.clone())],
        };
        render_list(
            f,
            cols[1],
            chapters,
            "السور (Enter تشغيل)",
            self.chapter_cursor,
            !self.reciters_focused,
            theme,
        );

        let (chapter, reciter) = match self.player.now_playing() {
            Some(n) => (n.chapter_label(), n.reciter_label()),
            None => (String::new(), String::new()),
        };
        let state = if self.player.is_playing() { "▶" } else { "⏸" };
        let bar = Paragraph::new(vec![
            Line::from(format!("{} {}", state, chapter)),
            Line::from(reciter),
        ])
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("p تشغيل · Space إيقاف مؤقت · x إيقاف · d تحميل"),
        );
        f.render_widget(bar, rows[1]);
    }
}

fn render_list(
    f: &mut Frame<'_>,
    area: Rect,
    items: Vec<ListItem<'_>>,
    title: &str,
    cursor: usize,
    focused: bool,
    theme: &Theme,
) {
    let mut block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(theme.accent));
    }
    let highlight = if focused {
        Style::default().bg(theme.accent).fg(Color::Black)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    let len = items.len();
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default();
    if len > 0 {
        state.select(Some(cursor.min(len - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_prayer(
    f: &mut Frame<'_>,
    area: Rect,
    schedule: &ScheduleTable,
    cursor: usize,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    let current = schedule.current_code();
    let countries: Vec<ListItem> = schedule
        .countries()
        .iter()
        .map(|c| {
            let mark = if c.code == current { "● " } else { "  " };
            ListItem::new(format!("{}{} - {}", mark, c.name, c.city))
        })
        .collect();
    render_list(f, cols[0], countries, strings::CHOOSE_COUNTRY, cursor, true, theme);

    let title = match schedule.current_country() {
        Some(c) => format!("مواقيت الصلاة - {} ({})", c.city, c.name),
        None => "مواقيت الصلاة".to_string(),
    };
    let rows: Vec<Row> = schedule
        .current()
        .rows()
        .iter()
        .map(|(name, time)| Row::new(vec![Cell::from(*time), Cell::from(*name)]).height(2))
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(table, cols[1]);
}

pub fn render_references(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    manager: &ReferenceTextManager,
    scroll: usize,
    theme: &Theme,
) {
    if let ReferenceState::Failed(message) = manager.state() {
        centered_message(f, area, title, message);
        return;
    }
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for entry in manager.entries().iter().skip(scroll) {
        lines.push(Line::from(entry.body.clone()));
        lines.push(Line::from(entry.citation.clone()).style(Style::default().fg(theme.accent)));
        if !entry.note.is_empty() {
            lines.push(Line::from(entry.note.clone()).style(Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from("─".repeat(inner.width as usize / 2)));
    }
    let body = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true });
    f.render_widget(body, inner);
}

pub fn render_alert(f: &mut Frame<'_>, area: Rect, title: Option<&str>, body: &str) {
    let popup_area = centered_rect(60, 30, area);
    let title = title.unwrap_or("تنبيه");
    let block = Block::default()
        .title(format!("{} (Enter)", title))
        .borders(Borders::ALL);
    let text = Paragraph::new(body.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

pub fn render_overlay(f: &mut Frame<'_>, area: Rect, message: &str, remaining_secs: u64, theme: &Theme) {
    let popup_area = centered_rect(70, 50, area);
    let block = Block::default()
        .title(format!("× ({}s)", remaining_secs))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let text = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    let help_lines = [
        "q / Ctrl-C: quit",
        "Tab / Shift-Tab or 1-6: switch section",
        "j / k / h / l or arrows: move",
        "PageUp / PageDown: scroll faster",
        "Enter: open chapter, choose reciter or country",
        "/: search chapters; g: search from anywhere",
        "p: play, Space: pause/resume, x: stop, d: download",
        "S: share the site link",
        "?: toggle this help",
    ];
    let help = Paragraph::new(help_lines.join("\n"))
        .block(
            Block::default()
                .title("Help (Esc or ? to close)")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
