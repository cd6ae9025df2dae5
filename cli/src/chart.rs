use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph},
};
use teaestate_core::time::format_date;
use teaestate_core::{DatedSeries, WeatherSeries};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    temp: Color,
    humidity: Color,
    warn: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    temp: Color::Red,
    humidity: Color::Blue,
    warn: Color::Yellow,
};

// Bars shown at once.
const WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    fn toggle(self) -> Self {
        match self {
            Metric::Temperature => Metric::Humidity,
            Metric::Humidity => Metric::Temperature,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Metric::Temperature => " Avg Temperature (°C) ",
            Metric::Humidity => " Avg Humidity (%) ",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }

    fn color(self) -> Color {
        match self {
            Metric::Temperature => THEME.temp,
            Metric::Humidity => THEME.humidity,
        }
    }
}

pub struct ChartApp {
    weather: WeatherSeries,
    missing_days: usize,
    metric: Metric,
    offset: usize,
}

impl ChartApp {
    pub fn new(weather: WeatherSeries, missing_days: usize) -> Self {
        Self {
            weather,
            missing_days,
            metric: Metric::Temperature,
            offset: 0,
        }
    }

    fn series(&self) -> &DatedSeries {
        match self.metric {
            Metric::Temperature => &self.weather.temperature,
            Metric::Humidity => &self.weather.humidity,
        }
    }

    fn toggle_metric(&mut self) {
        self.metric = self.metric.toggle();
        self.offset = 0;
    }

    fn scroll_right(&mut self) {
        if self.offset + WINDOW < self.series().len() {
            self.offset += 1;
        }
    }

    fn scroll_left(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

pub fn run(weather: WeatherSeries, missing_days: usize) -> Result<()> {
    if weather.temperature.is_empty() && weather.humidity.is_empty() {
        println!("No weather data available.");
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChartApp::new(weather, missing_days);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut ChartApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Tab | KeyCode::Char('t') => app.toggle_metric(),
                        KeyCode::Left | KeyCode::Char('h') => app.scroll_left(),
                        KeyCode::Right | KeyCode::Char('l') => app.scroll_right(),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn ui(frame: &mut Frame, app: &ChartApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Sidebar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let header = Paragraph::new(Span::styled(
        "TEA ESTATE WEATHER",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(THEME.muted))
            .padding(Padding::new(0, 0, 1, 0)),
    );
    frame.render_widget(header, main_layout[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(25), // Info Panel
        ])
        .split(main_layout[1]);

    if app.series().is_empty() {
        frame.render_widget(
            Paragraph::new("No data for this metric").alignment(Alignment::Center),
            content_chunks[0],
        );
    } else {
        draw_chart(frame, app, content_chunks[0]);
    }
    draw_info_panel(frame, app, content_chunks[2]);

    let help = Line::from(vec![
        Span::styled("SCROLL: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("METRIC: ", Style::default().fg(THEME.muted)),
        Span::styled("tab ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_chart(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let color = app.metric.color();
    let points = app.series().points();

    // Values are scaled by 10 so one decimal survives the u64 bars.
    let bar_items: Vec<Bar> = points
        .iter()
        .skip(app.offset)
        .take(WINDOW)
        .map(|p| {
            let label = p.date.format("%m-%d").to_string();
            Bar::default()
                .label(label)
                .value((p.value.max(0.0) * 10.0) as u64)
                .style(Style::default().fg(color))
                .text_value(format!("{:.1}", p.value))
        })
        .collect();

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(app.metric.title());

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items))
        .max((max * 10.0).ceil() as u64);

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let series = app.series();
    let unit = app.metric.unit();
    let values: Vec<f64> = series.points().iter().map(|p| p.value).collect();

    let summary = |label: &'static str, value: Option<f64>| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(THEME.muted)),
            Span::styled(
                value.map(|v| format!("{:.1}{}", v, unit)).unwrap_or_else(|| "-".to_string()),
                Style::default().fg(app.metric.color()).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let avg = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    };
    let min = values.iter().copied().reduce(f64::min);
    let max = values.iter().copied().reduce(f64::max);

    let first = series.points().first().map(|p| format_date(p.date)).unwrap_or_default();
    let last = series.points().last().map(|p| format_date(p.date)).unwrap_or_default();

    let mut info_text = vec![
        Line::from(vec![Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        summary("Average: ", avg),
        summary("Min:     ", min),
        summary("Max:     ", max),
        Line::from(""),
        Line::from(vec![
            Span::styled("Days:    ", Style::default().fg(THEME.muted)),
            Span::styled(series.len().to_string(), Style::default().fg(THEME.text)),
        ]),
        Line::from(Span::styled(format!("{} → {}", first, last), Style::default().fg(THEME.muted))),
    ];
    if app.missing_days > 0 {
        info_text.push(Line::from(""));
        info_text.push(Line::from(Span::styled(
            format!("⚠ {} days without a record", app.missing_days),
            Style::default().fg(THEME.warn),
        )));
    }

    let info_block = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(info_block, area);
}
