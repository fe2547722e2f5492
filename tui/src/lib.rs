//! TUI rendering for Campus using ratatui.

mod input;
mod island;
mod theme;

pub use input::{InputPump, handle_events};
pub use island::{island_rect, project_dimensions};
pub use theme::{Glyphs, Palette, glyphs, hex_color, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use campus_engine::{App, Focus, GRID_COLUMNS, NAV_MENU_ITEMS, Route, SizePreset};

const BRAND_NAME: &str = "Certify Blocks";

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.view().ui_options;
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    match app.route() {
        Route::Courses => draw_courses(frame, app, &palette, &glyphs),
        Route::Dashboard => draw_dashboard(frame, app, &palette, &glyphs),
        Route::Certificate => draw_certificate(frame, app, &palette, &glyphs),
    }

    if app.nav_menu().open {
        draw_nav_menu(frame, app, &palette);
    }
}

fn draw_dashboard(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(2),  // Course title
            Constraint::Length(7),  // Player
            Constraint::Min(6),     // Lesson grid
            Constraint::Length(3),  // Completion banner / hints
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], palette, glyphs);
    draw_course_title(frame, app, chunks[1], palette, glyphs);
    draw_player(frame, app, chunks[2], palette, glyphs);
    draw_lesson_grid(frame, app, chunks[3], palette, glyphs);

    if app.all_lessons_completed() {
        draw_completion_banner(frame, chunks[4], palette, glyphs);
    } else {
        draw_hints(frame, chunks[4], palette);
    }

    draw_island(frame, app, frame.area(), palette, glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(glyphs.brand, Style::default().fg(palette.accent)),
        Span::raw(" "),
        Span::styled(BRAND_NAME, styles::brand(palette)),
    ]);
    frame.render_widget(Paragraph::new(brand), columns[0]);

    let menu_style = if app.focus() == Focus::NavMenu {
        Style::default().fg(palette.accent)
    } else {
        styles::muted(palette)
    };
    let trigger = Line::from(vec![
        Span::styled(glyphs.menu, menu_style),
        Span::styled(" menu", menu_style),
    ]);
    frame.render_widget(
        Paragraph::new(trigger).alignment(Alignment::Right),
        columns[1],
    );
}

fn draw_nav_menu(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let width = 20u16.min(area.width);
    let height = (NAV_MENU_ITEMS.len() as u16 + 3).min(area.height);
    let menu_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 2,
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let selected = app.nav_menu().selected;
    let mut lines = Vec::new();
    for (index, item) in NAV_MENU_ITEMS.iter().enumerate() {
        if index > 0 {
            // Separator between the account row and the sign-out row.
            lines.push(Line::from(Span::styled(
                "─".repeat(width.saturating_sub(2) as usize),
                styles::muted(palette),
            )));
        }
        let style = if index == selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if *item == "Logout" {
            Style::default().fg(palette.error)
        } else {
            Style::default().fg(palette.text_primary)
        };
        lines.push(Line::from(Span::styled(format!(" {item}"), style)));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .style(Style::default().bg(palette.bg_popup)),
    );
    frame.render_widget(menu, menu_area);
}

fn draw_course_title(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let course = app.course();
    let title = Line::from(vec![
        Span::styled(format!("{} ", glyphs.back), styles::muted(palette)),
        Span::styled(&course.title, styles::title(palette)),
        Span::styled(format!("  [{}]", course.category), styles::muted(palette)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_player(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lesson = app.active_lesson();
    let accent = hex_color(&lesson.color, palette.accent);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(" Now Playing ", styles::muted(palette)));

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", glyphs.play, lesson.title),
            styles::title(palette),
        )),
        Line::from(Span::styled(
            format!("duration {}", lesson.duration),
            styles::muted(palette),
        )),
        Line::from(Span::styled(
            format!("video {}", lesson.video_id),
            styles::muted(palette),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_lesson_grid(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let course = app.course();
    let progress = app.progress();
    let rows = course.lesson_count().div_ceil(GRID_COLUMNS);
    if rows == 0 {
        return;
    }

    let row_height = (area.height / rows as u16).max(3);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(row_height); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(lesson) = course.lessons.get(index) else {
                continue;
            };

            let active = progress.active() == index;
            let completed = progress.is_completed(index);
            let card_bg = hex_color(&lesson.color, palette.bg_panel);

            let border_style = if active {
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.bg_border)
            };
            let mut text_style = styles::card_text();
            if completed && !active {
                text_style = text_style.add_modifier(Modifier::DIM);
            }

            let marker = if completed { glyphs.check } else { glyphs.play };
            let lines = vec![
                Line::from(Span::styled(
                    format!("{marker} {}", lesson.title),
                    text_style,
                )),
                Line::from(Span::styled(lesson.duration.clone(), text_style)),
            ];

            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(Style::default().bg(card_bg)),
            );
            frame.render_widget(card, *cell);
        }
    }
}

fn draw_completion_banner(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} Congratulations! You've completed all lessons. ", glyphs.party),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("press g to generate your certificate", styles::muted(palette)),
    ]);
    let banner = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.bg_border)),
    );
    frame.render_widget(banner, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "←↓↑→ select lesson · m menu · esc courses · q quit",
        styles::muted(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

fn draw_island(frame: &mut Frame, app: &App, viewport: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(rect) = island_rect(app, viewport) else {
        return;
    };

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.island_border))
        .style(Style::default().bg(palette.island_bg));

    let label = island_label(app, glyphs);
    let body = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.text_primary))
        .block(block);
    frame.render_widget(body, rect);
}

/// What the island says at each size. Small presets stay quiet; the larger
/// ones carry the now-playing line or the completion call-out.
fn island_label(app: &App, glyphs: &Glyphs) -> Line<'static> {
    let lesson = app.active_lesson();
    match app.island().size() {
        SizePreset::CompactLong => Line::from(format!(
            "{} course complete · g for certificate",
            glyphs.check
        )),
        SizePreset::Compact | SizePreset::Connected => {
            Line::from(format!("{} {}", glyphs.play, truncated(&lesson.title, 24)))
        }
        SizePreset::Large | SizePreset::Long | SizePreset::Medium | SizePreset::Tall => {
            Line::from(format!(
                "{} {} · {}",
                glyphs.play,
                truncated(&lesson.title, 32),
                lesson.duration
            ))
        }
        SizePreset::Ultra | SizePreset::Massive => Line::from(format!(
            "{} {} · {} · video {}",
            glyphs.play,
            truncated(&lesson.title, 40),
            lesson.duration,
            lesson.video_id
        )),
        _ => Line::from(""),
    }
}

fn truncated(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_owned();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w >= max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn draw_courses(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(4),    // Course list
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], palette, glyphs);

    let course = app.course();
    let lines = vec![
        Line::from(Span::styled("Your courses", styles::title(palette))),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.play), Style::default().fg(palette.accent)),
            Span::styled(course.title.clone(), styles::title(palette)),
            Span::styled(
                format!("  {} lessons · enter to open", course.lesson_count()),
                styles::muted(palette),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if app.route().footer_visible() {
        draw_footer(frame, chunks[2], palette);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "Built by Swayam and Vivek. The source code is available on GitHub.",
        styles::muted(palette),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.bg_border)),
    );
    frame.render_widget(footer, area);
}

fn draw_certificate(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // Certificate body
            Constraint::Length(1), // Hint
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], palette, glyphs);

    let course = app.course();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Certificate of Completion",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(course.title.clone(), styles::title(palette))),
        Line::from(Span::styled(
            format!("{} · all {} lessons completed", course.category, course.lesson_count()),
            styles::muted(palette),
        )),
    ];
    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(palette.success)),
    );
    frame.render_widget(body, chunks[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "esc back to course",
        styles::muted(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}
