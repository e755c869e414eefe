use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::config::{CATEGORIES, CHANNELS, SUPPORT_PHONE, TRUST_ITEMS};
use crate::page::{PageFx, Ripple, REVEAL_CHANNEL_BASE, REVEAL_TRUST_BASE};
use crate::widget::Author;

// Total AV palette: white page, red brand accents, slate text.
const BG_DARK: Color = Color::Rgb(16, 18, 24);
const BG_PANEL: Color = Color::Rgb(24, 27, 35);
const BG_HEADER: Color = Color::Rgb(30, 34, 44);
const BG_HEADER_SHADOW: Color = Color::Rgb(40, 46, 60);

const BRAND_RED: Color = Color::Rgb(229, 62, 62); // #E53E3E
const BRAND_RED_DARK: Color = Color::Rgb(197, 48, 48); // #C53030
const OLIVE: Color = Color::Rgb(131, 179, 102);

const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 245);
const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 190);
const TEXT_MUTED: Color = Color::Rgb(105, 116, 133);
const TEXT_FAINT: Color = Color::Rgb(60, 66, 80);

const BORDER_DIM: Color = Color::Rgb(45, 50, 60);
const BORDER_ACCENT: Color = Color::Rgb(90, 70, 70);

const HEADER_HEIGHT: u16 = 3;
const CARD_HEIGHT: u16 = 5;
const CHANNEL_HEIGHT: u16 = 4;
const LABEL_WIDTH: usize = 10;

/// On-screen geometry of the chat panel, shared between drawing and
/// mouse hit-testing.
pub struct PanelLayout {
    pub area: Rect,
    pub close: Rect,
    pub messages: Rect,
    pub input: Rect,
    pub send: Rect,
}

/// On-screen geometry of the whole page for the current frame. Elements
/// scrolled out of the viewport get zero-height rects.
pub struct PageLayout {
    pub header: Rect,
    pub hero_chat_button: Rect,
    pub hero_phone_button: Rect,
    pub cards: Vec<Rect>,
    pub channels: Vec<Rect>,
    pub trust: Vec<Rect>,
    pub phone_footer: Rect,
    pub launcher: Rect,
    pub panel: Option<PanelLayout>,
}

impl PageLayout {
    /// Controls that open the widget; a click on one never counts as an
    /// outside click.
    pub fn is_trigger(&self, col: u16, row: u16) -> bool {
        let pos = Position::new(col, row);
        self.launcher.contains(pos)
            || self.hero_chat_button.contains(pos)
            || self.cards.iter().any(|c| c.contains(pos))
            || self.channels.first().is_some_and(|c| c.contains(pos))
    }
}

pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    area.contains(Position::new(col, row))
}

/// Clip a content-space rect (virtual row below the header) into the
/// scrolled viewport. Fully off-screen elements come back zero-height.
fn clip(x: u16, width: u16, virt_y: usize, height: u16, viewport: Rect, scroll: usize) -> Rect {
    let right = viewport.x + viewport.width;
    let x = x.min(right);
    let width = width.min(right - x);

    let top = viewport.y as isize + virt_y as isize - scroll as isize;
    let bottom = top + height as isize;
    let vis_top = top.max(viewport.y as isize);
    let vis_bottom = bottom.min(viewport.y as isize + viewport.height as isize);
    if vis_bottom <= vis_top || width == 0 {
        return Rect::new(x, viewport.y, 0, 0);
    }
    Rect::new(x, vis_top as u16, width, (vis_bottom - vis_top) as u16)
}

/// Total height of the page content below the header, in rows.
pub fn content_height() -> usize {
    // hero + section title + card grid + channels + trust + footer
    let card_rows = CATEGORIES.len().div_ceil(2);
    8 + 2
        + card_rows * (CARD_HEIGHT as usize + 1)
        + 2
        + CHANNEL_HEIGHT as usize + 1
        + TRUST_ITEMS.len() + 2
        + 3
}

pub fn max_scroll(area: Rect) -> usize {
    let viewport = area.height.saturating_sub(HEADER_HEIGHT) as usize;
    content_height().saturating_sub(viewport)
}

pub fn layout(area: Rect, app: &App) -> PageLayout {
    let scroll = app.page.scroll;
    let viewport = Rect::new(
        area.x,
        area.y + HEADER_HEIGHT,
        area.width,
        area.height.saturating_sub(HEADER_HEIGHT),
    );

    let header = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT.min(area.height));

    let margin: u16 = 3;
    let content_width = area.width.saturating_sub(margin * 2);

    // Hero action buttons sit on virtual row 5.
    let chat_label_w = 22u16;
    let phone_label_w = 26u16;
    let hero_chat_button = clip(area.x + margin, chat_label_w.min(content_width), 5, 3, viewport, scroll);
    let hero_phone_button = clip(
        area.x + margin + chat_label_w + 2,
        phone_label_w.min(content_width.saturating_sub(chat_label_w + 2)),
        5,
        3,
        viewport,
        scroll,
    );

    // Category cards: two columns below the section title (virtual row 10).
    let col_w = content_width.saturating_sub(2) / 2;
    let mut cards = Vec::with_capacity(CATEGORIES.len());
    for i in 0..CATEGORIES.len() {
        let col = (i % 2) as u16;
        let row = (i / 2) as u16;
        let x = area.x + margin + col * (col_w + 2);
        let virt_y = 10 + row as usize * (CARD_HEIGHT as usize + 1);
        cards.push(clip(x, col_w, virt_y, CARD_HEIGHT, viewport, scroll));
    }

    let card_rows = CATEGORIES.len().div_ceil(2);
    let channels_y = 10 + card_rows * (CARD_HEIGHT as usize + 1) + 2;
    let mut channels = Vec::with_capacity(CHANNELS.len());
    for i in 0..CHANNELS.len() {
        let x = area.x + margin + i as u16 * (col_w + 2);
        channels.push(clip(x, col_w, channels_y, CHANNEL_HEIGHT, viewport, scroll));
    }

    let trust_y = channels_y + CHANNEL_HEIGHT as usize + 1;
    let trust = (0..TRUST_ITEMS.len())
        .map(|i| clip(area.x + margin, content_width, trust_y + i, 1, viewport, scroll))
        .collect();

    let footer_y = trust_y + TRUST_ITEMS.len() + 2;
    let phone_footer = clip(area.x + margin, 34.min(content_width), footer_y, 3, viewport, scroll);

    // Floating launcher, bottom-right, above everything on the page.
    let launcher = Rect::new(
        area.x + area.width.saturating_sub(10),
        area.y + area.height.saturating_sub(4),
        8.min(area.width),
        3.min(area.height),
    );

    let panel = if app.widget.is_open() {
        let w = 46.min(area.width.saturating_sub(4));
        let h = 20.min(area.height.saturating_sub(4));
        let panel_area = Rect::new(
            area.x + area.width.saturating_sub(w + 2),
            area.y + area.height.saturating_sub(h + 4),
            w,
            h,
        );
        let close = Rect::new(panel_area.x + panel_area.width.saturating_sub(5), panel_area.y, 4, 1);
        let input_h = 3u16;
        let send_w = 8u16;
        let input = Rect::new(
            panel_area.x + 1,
            panel_area.y + panel_area.height.saturating_sub(input_h + 1),
            panel_area.width.saturating_sub(send_w + 3),
            input_h,
        );
        let send = Rect::new(
            input.x + input.width + 1,
            input.y,
            send_w,
            input_h,
        );
        let messages = Rect::new(
            panel_area.x + 1,
            panel_area.y + 1,
            panel_area.width.saturating_sub(2),
            panel_area.height.saturating_sub(input_h + 2),
        );
        Some(PanelLayout {
            area: panel_area,
            close,
            messages,
            input,
            send,
        })
    } else {
        None
    };

    PageLayout {
        header,
        hero_chat_button,
        hero_phone_button,
        cards,
        channels,
        trust,
        phone_footer,
        launcher,
        panel,
    }
}

/// Mark every element currently inside the viewport as seen so its one-shot
/// reveal can start.
pub fn observe_reveals(layout: &PageLayout, page: &mut PageFx) {
    for (i, card) in layout.cards.iter().enumerate() {
        if card.height > 0 {
            page.observe(i);
        }
    }
    for (i, channel) in layout.channels.iter().enumerate() {
        if channel.height > 0 {
            page.observe(REVEAL_CHANNEL_BASE + i);
        }
    }
    for (i, item) in layout.trust.iter().enumerate() {
        if item.height > 0 {
            page.observe(REVEAL_TRUST_BASE + i);
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let bg = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg, frame.area());

    let layout = layout(frame.area(), app);

    draw_hero(frame, app, frame.area(), &layout);
    draw_cards(frame, app, &layout);
    draw_channels(frame, app, &layout);
    draw_trust(frame, app, &layout);
    draw_phone_footer(frame, &layout);
    draw_header(frame, app, layout.header);
    draw_launcher(frame, app, layout.launcher);

    if let Some(ripple) = app.page.ripple() {
        draw_ripple(frame, ripple);
    }

    if let Some(panel) = &layout.panel {
        draw_chat_panel(frame, app, panel);
    }

    draw_status(frame, app, frame.area());
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    // Shadow restyle once the page is scrolled past the threshold.
    let (bg, border) = if app.page.header_shadow() {
        (BG_HEADER_SHADOW, BRAND_RED_DARK)
    } else {
        (BG_HEADER, BORDER_DIM)
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(BRAND_RED)),
        Span::styled("Total AV", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(" Support", Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD)),
    ]);
    let phone = Line::from(vec![
        Span::styled("24/7  ", Style::default().fg(TEXT_MUTED)),
        Span::styled(SUPPORT_PHONE, Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  "),
    ]);

    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(Paragraph::new(phone).alignment(Alignment::Right), inner);
}

fn draw_hero(frame: &mut Frame, app: &App, area: Rect, layout: &PageLayout) {
    let viewport = Rect::new(
        area.x,
        area.y + HEADER_HEIGHT,
        area.width,
        area.height.saturating_sub(HEADER_HEIGHT),
    );
    let margin = 3u16;
    let title_area = clip(area.x + margin, area.width.saturating_sub(margin * 2), 1, 3, viewport, app.page.scroll);
    if title_area.height > 0 {
        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "How can we help you today?",
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Pick a topic below or talk to us directly.",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ]);
        frame.render_widget(hero, title_area);
    }

    draw_button(frame, layout.hero_chat_button, "Start Live Chat", BRAND_RED);
    draw_button(frame, layout.hero_phone_button, &format!("Call {}", SUPPORT_PHONE), BORDER_ACCENT);

    let section = clip(area.x + margin, area.width.saturating_sub(margin * 2), 9, 1, viewport, app.page.scroll);
    if section.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Browse support topics",
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
            )),
            section,
        );
    }
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, accent: Color) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(TEXT_PRIMARY)))
                .alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_cards(frame: &mut Frame, app: &App, layout: &PageLayout) {
    for (i, &area) in layout.cards.iter().enumerate() {
        if area.height == 0 || app.page.is_hidden(i) {
            continue;
        }
        let category = &CATEGORIES[i];
        let hovered = app.page.hovered_card == Some(i);
        let revealing = app.page.is_revealing(i);

        // Press feedback shrinks the card by one cell all around.
        let area = if app.page.is_card_pressed(i) {
            Rect {
                x: area.x + 1,
                y: area.y,
                width: area.width.saturating_sub(2),
                height: area.height,
            }
        } else {
            area
        };

        let border = if hovered { BRAND_RED } else { BORDER_DIM };
        let (title_fg, text_fg) = if revealing {
            (TEXT_MUTED, TEXT_FAINT)
        } else {
            (TEXT_PRIMARY, TEXT_SECONDARY)
        };

        let icon = if hovered { "▣" } else { "□" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            continue;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(BRAND_RED)),
                Span::styled(category.title, Style::default().fg(title_fg).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(format!("   {}", category.blurb), Style::default().fg(text_fg))),
            Line::from(Span::styled(
                format!("   [{}]", category.key),
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn draw_channels(frame: &mut Frame, app: &App, layout: &PageLayout) {
    for (i, &area) in layout.channels.iter().enumerate() {
        let slot = REVEAL_CHANNEL_BASE + i;
        if area.height == 0 || app.page.is_hidden(slot) {
            continue;
        }
        let (name, detail) = CHANNELS[i];
        let fg = if app.page.is_revealing(slot) {
            TEXT_FAINT
        } else {
            TEXT_SECONDARY
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_DIM))
            .title(Span::styled(
                format!(" {} ", name),
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(detail, Style::default().fg(fg))),
                inner,
            );
        }
    }
}

fn draw_trust(frame: &mut Frame, app: &App, layout: &PageLayout) {
    for (i, &area) in layout.trust.iter().enumerate() {
        let slot = REVEAL_TRUST_BASE + i;
        if area.height == 0 || app.page.is_hidden(slot) {
            continue;
        }
        let fg = if app.page.is_revealing(slot) { TEXT_FAINT } else { TEXT_MUTED };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(OLIVE)),
                Span::styled(TRUST_ITEMS[i], Style::default().fg(fg)),
            ])),
            area,
        );
    }
}

fn draw_phone_footer(frame: &mut Frame, layout: &PageLayout) {
    // Tel affordance: styled as a link, left to the platform when clicked.
    let area = layout.phone_footer;
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("✆ ", Style::default().fg(OLIVE)),
                Span::styled(SUPPORT_PHONE, Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::UNDERLINED)),
            ]))
            .alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_launcher(frame: &mut Frame, app: &App, area: Rect) {
    // Gentle pulse so the launcher reads as alive.
    let glow = (app.animation_frame as f64 / 45.0).sin().abs() * 0.4 + 0.6;
    let r = (229.0 * glow) as u8;
    let g = (62.0 * glow) as u8;
    let b = (62.0 * glow) as u8;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(r, g, b)))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    if inner.height > 0 {
        let label = if app.widget.is_open() { " ✕ " } else { "chat" };
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_chat_panel(frame: &mut Frame, app: &App, panel: &PanelLayout) {
    frame.render_widget(Clear, panel.area);

    let block = Block::default()
        .title(Span::styled(
            " Total AV Support ",
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_ACCENT))
        .style(Style::default().bg(BG_PANEL));
    frame.render_widget(block, panel.area);

    // Close control in the title row.
    frame.render_widget(
        Paragraph::new(Span::styled("[x]", Style::default().fg(TEXT_MUTED))),
        panel.close,
    );

    draw_transcript(frame, app, panel.messages);
    draw_input(frame, app, panel.input);

    let send_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BRAND_RED_DARK));
    let send_inner = send_block.inner(panel.send);
    frame.render_widget(send_block, panel.send);
    if send_inner.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled("Send", Style::default().fg(TEXT_PRIMARY)))
                .alignment(Alignment::Center),
            send_inner,
        );
    }
}

/// Wrap text on word boundaries using display width, not byte length.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Build the transcript's rendered lines at the given wrap width. Both
/// drawing and the scroll cap go through this so they agree on height.
fn transcript_lines(app: &App, content_width: usize) -> Vec<Line<'static>> {
    let indent = " ".repeat(LABEL_WIDTH);

    let mut lines: Vec<Line> = Vec::new();

    if app.widget.transcript().is_empty() && !app.widget.is_typing() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Hi! How can we help?",
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::from(Span::styled(
            "  Type a message below to get started.",
            Style::default().fg(TEXT_MUTED),
        )));
    }

    for entry in app.widget.transcript() {
        let (label, label_style) = match entry.author {
            Author::User => (
                "you",
                Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::BOLD),
            ),
            Author::Support => (
                "support",
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            ),
        };
        let formatted_label = format!("{:>width$} │ ", label, width = LABEL_WIDTH - 3);

        let mut first = true;
        for wrapped in wrap_text(&entry.text, content_width) {
            if first {
                lines.push(Line::from(vec![
                    Span::styled(formatted_label.clone(), label_style),
                    Span::styled(wrapped, Style::default().fg(TEXT_PRIMARY)),
                ]));
                first = false;
            } else {
                lines.push(Line::from(vec![
                    Span::raw(indent.clone()),
                    Span::styled(wrapped, Style::default().fg(TEXT_PRIMARY)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    // Transient typing indicator while the simulated reply is pending.
    if app.widget.is_typing() {
        let dots = match (app.animation_frame / 15) % 4 {
            0 => ".  ",
            1 => ".. ",
            2 => "...",
            _ => " ..",
        };
        let formatted_label = format!("{:>width$} │ ", "support", width = LABEL_WIDTH - 3);
        lines.push(Line::from(vec![
            Span::styled(formatted_label, Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("Support is typing{}", dots),
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

/// How many rendered lines the transcript can scroll back at the panel's
/// current geometry. Feeds the widget's scroll cap.
pub fn transcript_max_scroll(app: &App, area: Rect) -> usize {
    let content_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 1);
    transcript_lines(app, content_width)
        .len()
        .saturating_sub(area.height as usize)
}

fn draw_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let content_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 1);
    let lines = transcript_lines(app, content_width);

    // Scroll from the bottom; offset counts lines scrolled back up.
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    let clamped = app.widget.scroll_offset.min(max_scroll);
    let scroll_pos = max_scroll.saturating_sub(clamped);

    frame.render_widget(Paragraph::new(lines).scroll((scroll_pos as u16, 0)), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let border = if app.widget.input_focused() {
        let glow = (app.animation_frame as f64 / 90.0).sin() * 0.3 + 0.7;
        Color::Rgb((229.0 * glow) as u8, (62.0 * glow) as u8, (62.0 * glow) as u8)
    } else {
        BORDER_DIM
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let cursor = if app.widget.input_focused() && app.animation_frame % 30 < 15 {
        "|"
    } else {
        " "
    };

    // Keep the tail visible when the input outgrows the box.
    let budget = (inner.width as usize).saturating_sub(4);
    let shown: String = if app.widget.input.width() > budget {
        let skip = app.widget.input.chars().count().saturating_sub(budget);
        app.widget.input.chars().skip(skip).collect()
    } else {
        app.widget.input.clone()
    };

    frame.render_widget(
        Paragraph::new(format!(" > {}{}", shown, cursor)).style(Style::default().fg(TEXT_PRIMARY)),
        inner,
    );
}

fn draw_ripple(frame: &mut Frame, ripple: &Ripple) {
    let area = ripple.area;
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Radius grows across the button; brightness fades out.
    let max_dim = f64::from(area.width.max(area.height * 2));
    let radius = ripple.progress() * max_dim;
    let fade = 1.0 - ripple.progress();
    let shade = (200.0 * fade + 40.0) as u8;
    let style = Style::default().fg(Color::Rgb(shade, shade, shade));

    for row in area.y..area.y + area.height {
        for col in area.x..area.x + area.width {
            // Terminal cells are about twice as tall as wide.
            let dx = f64::from(col) - f64::from(ripple.x);
            let dy = (f64::from(row) - f64::from(ripple.y)) * 2.0;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() < 1.2 {
                frame.render_widget(
                    Paragraph::new(Span::styled("·", style)),
                    Rect::new(col, row, 1, 1),
                );
            }
        }
    }
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status_message {
        let status_area = Rect::new(
            area.x + 1,
            area.y + area.height.saturating_sub(1),
            area.width.saturating_sub(12),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(status.as_str(), Style::default().fg(OLIVE))),
            status_area,
        );
    }
}
