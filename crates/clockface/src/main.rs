use std::time::{Duration, Instant};

use chrono::Local;
use clockface_config::Config;
use clockface_core::{
    ClockFace, ClockTime, HandAngles, HandMotion, Scene, SceneOptions, Sweep,
    geometry::normalize_angle,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

mod canvas;
mod logging;
mod palette;

use canvas::{ClockCanvas, square_area};
use logging::{LoggingConfig, default_log_path, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logging is configured from the file, so load first and report afterwards
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    // Printed before the terminal is taken over, so it is still readable on exit
    if let Err(e) = init_logging(LoggingConfig {
        filter: config.log_level.clone(),
        path: default_log_path(),
    }) {
        eprintln!("clockface: logging disabled: {e}");
    }
    if let Err(e) = &loaded {
        log::warn!("ignoring config: {e}");
    }
    let notice = loaded
        .as_ref()
        .err()
        .map(|e| format!("config ignored: {e}"));

    let face = config.clock_face()?;
    let terminal = ratatui::init();
    // A config that failed to load is left untouched on disk
    let result = App::new(config, face)
        .persist_on_exit(loaded.is_ok())
        .with_notice(notice)
        .run(terminal);
    ratatui::restore();
    result
}

/// Second hand sweep started from a single wall-clock reading.
#[derive(Debug, Clone, Copy)]
struct SweepState {
    /// Time read when the sweep began.
    time: ClockTime,
    started: Instant,
    sweep: Sweep,
}

impl SweepState {
    fn start(duration: Duration) -> Self {
        let time = now();
        let start = HandAngles::at(time).second;
        Self {
            time,
            started: Instant::now(),
            sweep: Sweep::half_turn_from(start, duration),
        }
    }

    fn angles(&self) -> HandAngles {
        let second = self.sweep.angle_at(self.started.elapsed());
        HandAngles::at(self.time).with_second(normalize_angle(second))
    }
}

/// Current local wall-clock time.
fn now() -> ClockTime {
    ClockTime::from_timelike(&Local::now())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings, written back on exit.
    config: Config,
    /// Face dimensions, fixed for the whole run.
    face: ClockFace,
    /// Present while the hands are in sweep motion.
    sweep: Option<SweepState>,
    /// Write the config back when the app quits.
    persist: bool,
    /// A setting was changed with a key since startup.
    dirty: bool,
    /// Shown above the help line, e.g. why the config file was ignored.
    notice: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, face: ClockFace) -> Self {
        let sweep = (config.motion == HandMotion::Sweep)
            .then(|| SweepState::start(config.sweep_duration()));
        Self {
            running: false,
            config,
            face,
            sweep,
            persist: false,
            dirty: false,
            notice: None,
        }
    }

    /// Save settings changed with keys when the app quits.
    pub fn persist_on_exit(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Message kept on screen for the whole run.
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        // Untouched settings leave the file (and its comments) alone
        if self.persist
            && self.dirty
            && let Err(e) = self.config.save()
        {
            log::warn!("failed to save config: {e}");
        }
        Ok(())
    }

    /// Hand angles for the frame being drawn.
    fn hand_angles(&self) -> HandAngles {
        match &self.sweep {
            Some(state) => state.angles(),
            None => HandAngles::at(now()),
        }
    }

    /// Build the scene for the current frame.
    fn scene(&self) -> Scene {
        Scene::build_with(
            &self.face,
            self.hand_angles(),
            SceneOptions {
                show_numerals: self.config.show_numerals,
            },
        )
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let theme = self.config.color_theme;
        let color = palette::highlight(theme);

        let notice_height = u16::from(self.notice.is_some());
        let chunks = Layout::vertical([
            Constraint::Fill(1),               // Clock face
            Constraint::Length(notice_height), // Notice
            Constraint::Length(1),             // Help text
        ])
        .split(frame.area());

        let scene = self.scene();
        frame.render_widget(
            ClockCanvas {
                scene: &scene,
                theme,
            },
            square_area(chunks[0]),
        );

        let motion = match self.config.motion {
            HandMotion::Tick => " sweep  ",
            HandMotion::Sweep => " tick  ",
        };
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color  ".dark_gray(),
            "s".bold().fg(color),
            motion.dark_gray(),
            "n".bold().fg(color),
            " numerals".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);

        if let Some(notice) = &self.notice {
            frame.render_widget(Line::from(notice.as_str().yellow()).centered(), chunks[1]);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout for real-time clock updates.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.tick_rate())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.toggle_motion(),
            (_, KeyCode::Char('n')) => self.toggle_numerals(),
            _ => {}
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.config.color_theme = self.config.color_theme.next();
        self.dirty = true;
    }

    /// Switch between ticking hands and a second hand sweep.
    ///
    /// Entering sweep motion reads the clock again and restarts the sweep.
    fn toggle_motion(&mut self) {
        self.config.motion = self.config.motion.toggle();
        self.sweep = match self.config.motion {
            HandMotion::Sweep => Some(SweepState::start(self.config.sweep_duration())),
            HandMotion::Tick => None,
        };
        self.dirty = true;
        log::debug!("hand motion set to {:?}", self.config.motion);
    }

    /// Show or hide the hour numerals.
    fn toggle_numerals(&mut self) {
        self.config.show_numerals = !self.config.show_numerals;
        self.dirty = true;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
