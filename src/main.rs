use std::io;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use bf4_terminal::config::Config;
use bf4_terminal::logging::init_logging;
use bf4_terminal::profile_fetch::HttpPlayerSource;
use bf4_terminal::provider::spawn_provider;
use bf4_terminal::routes::Route;
use bf4_terminal::state::{self, AppState, Platform, ProviderCommand, Screen, apply_delta};
use bf4_terminal::view::{
    ClassCard, ProfileView, StatBox, Tone, VehicleCard, WeaponCard, all_weapon_cards,
    weapon_total_label,
};

const ORANGE: Color = Color::Rgb(232, 120, 28);
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: mpsc::Sender<ProviderCommand>,
    ticks: usize,
}

impl App {
    fn new(cmd_tx: mpsc::Sender<ProviderCommand>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
            ticks: 0,
        }
    }

    fn go(&mut self, route: Route) {
        let cmd = self.state.navigate(route);
        self.dispatch(cmd);
    }

    fn dispatch(&mut self, cmd: Option<ProviderCommand>) {
        let Some(cmd) = cmd else {
            return;
        };
        if self.cmd_tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Profile request failed");
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            }
            return;
        }
        match self.state.screen {
            Screen::Search => self.on_search_key(key),
            Screen::Profile { .. } => self.on_profile_key(key),
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                let cmd = self.state.submit_search();
                self.dispatch(cmd);
            }
            KeyCode::Tab | KeyCode::Right => self.state.search.next_platform(),
            KeyCode::BackTab | KeyCode::Left => self.state.search.prev_platform(),
            KeyCode::Backspace => self.state.search.backspace(),
            KeyCode::Char(ch) => self.state.search.push_char(ch),
            _ => {}
        }
    }

    fn on_profile_key(&mut self, key: KeyEvent) {
        if self.state.weapons_modal {
            match key.code {
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('w') => {
                    self.state.close_weapons_modal()
                }
                KeyCode::Char('j') | KeyCode::Down => self.state.scroll_modal_down(),
                KeyCode::Char('k') | KeyCode::Up => self.state.scroll_modal_up(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.state.profile.error.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => self.go(Route::Search),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.go(Route::Search),
            KeyCode::Char('w') => self.state.open_weapons_modal(),
            KeyCode::Char('r') => {
                let cmd = self.state.reload();
                self.dispatch(cmd);
            }
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env();
    init_logging(&config)?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let start = Route::from_args(&args);
    let source = Arc::new(HttpPlayerSource::new(&config)?);
    tracing::info!(api_url = %config.api_url, "starting");

    enable_raw_mode().context("enable raw mode")?;
    let mut terminal = or_restore(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_provider(source, tx, cmd_rx);

    let mut app = App::new(cmd_tx);
    match start {
        Some(route) => app.go(route),
        None => app
            .state
            .push_log("[WARN] Unrecognized start route, showing search"),
    }
    let res = run_app(&mut terminal, &mut app, rx, config.tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    Ok(terminal)
}

/// Runs `setup`; on failure runs `restore` before handing the error back.
fn or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.ticks = app.ticks.wrapping_add(1);
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .style(Style::default().fg(ORANGE).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &app.state.screen {
        Screen::Search => render_search(frame, chunks[1], &app.state),
        Screen::Profile { .. } => render_profile(frame, chunks[1], app),
    }

    let console = Paragraph::new(console_text(&app.state))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        let area = frame.size();
        render_help_overlay(frame, area);
    }
}

fn header_text(state: &AppState) -> String {
    match &state.screen {
        Screen::Search => "BF4 STATS".to_string(),
        Screen::Profile { target } => {
            let mut line = format!("BF4 STATS | {} | {}", target, state.current_route().path());
            if let Some(at) = state.profile.fetched_at {
                line.push_str(&format!(" | fetched {}", at.format("%H:%M:%S")));
            }
            line
        }
    }
}

fn footer_text(state: &AppState) -> String {
    match &state.screen {
        Screen::Search => "Type name | Tab/←/→ Platform | Enter Deploy | Esc Quit".to_string(),
        Screen::Profile { .. } if state.weapons_modal => {
            "j/k/↑/↓ Scroll | Esc/b/w Close | q Quit".to_string()
        }
        Screen::Profile { .. } if state.profile.error.is_some() => {
            "Enter/Esc/b Abort mission | q Quit".to_string()
        }
        Screen::Profile { .. } => {
            "w Weapons | r Reload | b/Esc Change soldier | ? Help | q Quit".to_string()
        }
    }
}

fn console_text(state: &AppState) -> String {
    state
        .logs
        .back()
        .cloned()
        .unwrap_or_else(|| "No alerts yet".to_string())
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = centered_rect(60, 70, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(panel);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "BATTLEFIELD 4",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("SOLDIER STATS", Style::default().fg(ORANGE))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let input = Paragraph::new(format!("{}_", state.search.name))
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Soldier Name").borders(Borders::ALL));
    frame.render_widget(input, rows[1]);

    let mut spans = Vec::new();
    for platform in Platform::ALL {
        let style = if platform == state.search.platform {
            Style::default()
                .fg(Color::Black)
                .bg(ORANGE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", platform.label()), style));
        spans.push(Span::raw("  "));
    }
    let platforms = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title("Platform").borders(Borders::ALL));
    frame.render_widget(platforms, rows[2]);
}

fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    if state.profile.loading {
        render_loading(frame, area, app.ticks);
        return;
    }
    if let Some(err) = &state.profile.error {
        render_error(frame, area, err);
        return;
    }
    let Some(doc) = &state.profile.document else {
        return;
    };

    let view = ProfileView::build(doc);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    let hero_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(rows[0]);
    render_hero(frame, hero_cols[0], &view);
    render_stat_grid(frame, hero_cols[1], &view.headline, 3);

    let mid_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_weapon_list(frame, mid_cols[0], "Top Weapons", &view.top_weapons, 0);
    render_vehicles(frame, mid_cols[1], &view.top_vehicles);

    render_classes(frame, rows[2], &view.classes);

    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    render_stat_row(frame, stat_cols[0], "Combat", &view.combat);
    render_stat_row(frame, stat_cols[1], "Support", &view.support);

    let bottom_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[4]);
    let progress: Vec<(String, String, f64)> = view
        .progress
        .iter()
        .map(|p| (p.label.clone(), p.counts.clone(), p.ratio))
        .collect();
    render_bar_list(frame, bottom_cols[0], "Progress", &progress);
    let gamemodes: Vec<(String, String, f64)> = view
        .gamemodes
        .iter()
        .map(|g| (g.name.to_uppercase(), g.score.clone(), g.ratio))
        .collect();
    render_bar_list(frame, bottom_cols[1], "Gamemodes", &gamemodes);

    if state.weapons_modal {
        let full = frame.size();
        render_weapons_modal(frame, full, app);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, ticks: usize) {
    let spinner = SPINNER[ticks % SPINNER.len()];
    let text = vec![
        Line::from(Span::styled(spinner, Style::default().fg(ORANGE))),
        Line::from(""),
        Line::from(Span::styled(
            "L O A D I N G   D A T A",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect(60, 30, area));
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let text = vec![
        Line::from(Span::styled(
            "CRITICAL ERROR",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] ABORT MISSION",
            Style::default().fg(Color::White).bg(Color::Red),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, centered_rect(50, 40, area));
}

fn render_hero(frame: &mut Frame, area: Rect, view: &ProfileView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ORANGE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            view.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.rank.clone(),
            Style::default().fg(Color::Black).bg(ORANGE),
        )),
    ];
    if let Some(avatar) = &view.avatar {
        lines.push(Line::from(Span::styled(
            format!("avatar {avatar}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(emblem) = &view.emblem {
        lines.push(Line::from(Span::styled(
            format!("emblem {emblem}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), parts[0]);

    if let Some(progress) = &view.rank_progress {
        let label = Paragraph::new(format!(
            "Rank progress {}  ({} / {})",
            progress.percent_label, progress.current, progress.total
        ))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(label, parts[1]);
        frame.render_widget(bar(progress.ratio, String::new()), parts[2]);
    }

    let totals = Paragraph::new(vec![
        Line::from(format!("Time Played  {}", view.time_played)),
        Line::from(format!("Score/Min    {}", view.score_per_minute)),
    ]);
    frame.render_widget(totals, parts[3]);
}

fn render_stat_grid(frame: &mut Frame, area: Rect, boxes: &[StatBox], columns: usize) {
    if boxes.is_empty() || columns == 0 {
        return;
    }
    let row_count = boxes.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);
    for (row_idx, chunk) in boxes.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[row_idx]);
        for (stat, cell) in chunk.iter().zip(cells.iter()) {
            render_stat_box(frame, *cell, stat);
        }
    }
}

fn render_stat_box(frame: &mut Frame, area: Rect, stat: &StatBox) {
    let mut lines = vec![Line::from(Span::styled(
        stat.value.clone(),
        Style::default()
            .fg(tone_color(stat.tone))
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(sub) = &stat.subtext {
        lines.push(Line::from(Span::styled(
            sub.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                stat.label.to_uppercase(),
                Style::default().fg(ORANGE),
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn render_stat_row(frame: &mut Frame, area: Rect, title: &str, boxes: &[StatBox]) {
    let spans: Vec<Span> = boxes
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(
                    format!("{} ", stat.label),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{}   ", stat.value),
                    Style::default()
                        .fg(tone_color(stat.tone))
                        .add_modifier(Modifier::BOLD),
                ),
            ]
        })
        .collect();
    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_weapon_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    cards: &[WeaponCard],
    skip: usize,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    const CARD_HEIGHT: u16 = 2;
    if inner.height < CARD_HEIGHT || inner.width == 0 {
        return;
    }
    let visible = (inner.height / CARD_HEIGHT) as usize;
    for (i, card) in cards.iter().skip(skip).take(visible).enumerate() {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + (i as u16) * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        render_weapon_card(frame, card_area, card);
    }
}

fn render_weapon_card(frame: &mut Frame, area: Rect, card: &WeaponCard) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let left = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("#{:<3}", card.position),
                Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                card.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", card.kills),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(left, cols[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(cols[1]);
    frame.render_widget(
        Paragraph::new(card.accuracy.clone()).alignment(Alignment::Right),
        right[0],
    );
    frame.render_widget(bar(card.accuracy_ratio, String::new()), right[1]);
}

fn render_vehicles(frame: &mut Frame, area: Rect, cards: &[VehicleCard]) {
    let block = Block::default().title("Top Vehicles").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if cards.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(inner);
    for (i, card) in cards.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[(i / 2).min(1)]);
        let text = vec![
            Line::from(Span::styled(
                card.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} KILLS", card.kills)),
            Line::from(Span::styled(
                format!("{} TIME", card.time),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, cols[i % 2]);
    }
}

fn render_classes(frame: &mut Frame, area: Rect, cards: &[ClassCard]) {
    let block = Block::default().title("Classes").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if cards.is_empty() {
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(inner);
    for (card, col) in cards.iter().zip(cols.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(*col);
        let text = vec![
            Line::from(vec![
                Span::styled(
                    card.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", card.service_stars), Style::default().fg(ORANGE)),
            ]),
            Line::from(format!("{} SCORE", card.score)),
            Line::from(Span::styled(
                card.time_played.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(text), parts[0]);
        frame.render_widget(bar(card.star_ratio, String::new()), parts[1]);
    }
}

fn render_bar_list(frame: &mut Frame, area: Rect, title: &str, rows: &[(String, String, f64)]) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    const ROW_HEIGHT: u16 = 2;
    let visible = (inner.height / ROW_HEIGHT) as usize;
    for (i, (label, value, ratio)) in rows.iter().take(visible).enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + (i as u16) * ROW_HEIGHT,
            width: inner.width,
            height: ROW_HEIGHT,
        };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(row_area);
        let line = Line::from(vec![
            Span::styled(format!("{label}  "), Style::default().fg(Color::Gray)),
            Span::styled(value.clone(), Style::default().fg(ORANGE)),
        ]);
        frame.render_widget(Paragraph::new(line), parts[0]);
        frame.render_widget(bar(*ratio, String::new()), parts[1]);
    }
}

fn render_weapons_modal(frame: &mut Frame, area: Rect, app: &App) {
    let Some(doc) = &app.state.profile.document else {
        return;
    };
    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);

    let cards = all_weapon_cards(&doc.weapons);
    let title = format!("ALL WEAPONS | {}", weapon_total_label(cards.len()));
    render_weapon_list(
        frame,
        popup,
        &title,
        &cards,
        app.state.modal_scroll as usize,
    );
}

fn bar(ratio: f64, label: String) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(ORANGE).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label)
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::White,
        Tone::Accent => ORANGE,
        Tone::Danger => Color::LightRed,
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "BF4 Stats - Help",
        "",
        "Search:",
        "  type         Soldier name",
        "  Tab / ←/→    Platform",
        "  Enter        Deploy",
        "  Esc          Quit",
        "",
        "Profile:",
        "  w            All weapons",
        "  j/k or ↑/↓   Scroll weapons",
        "  r            Reload",
        "  b / Esc      Change soldier",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
