use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::{
    feedback::{FeedbackLayer, FlashKind},
    generator::{RandomSource, GRID_COLUMNS, GRID_SIZE},
    info,
    runtime::GameEvent,
    session::{PickOutcome, Session, SessionState, TickOutcome},
    timer::{Countdown, TimerId},
    ui,
};

pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Game,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Redraw,
    Idle,
    Quit,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub ascii_icons: bool,
    pub start_on_info: bool,
    pub countdown_period: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ascii_icons: false,
            start_on_info: false,
            countdown_period: COUNTDOWN_PERIOD,
        }
    }
}

/// Ties the game session to its countdown, the feedback cues and the screens
#[derive(Debug)]
pub struct App<S: RandomSource> {
    pub settings: AppSettings,
    pub state: AppState,
    pub cursor: usize,
    session: Session<S>,
    feedback: FeedbackLayer,
    countdown: Option<Countdown>,
    next_timer: u64,
    events: Sender<GameEvent>,
    info_shown_at: Instant,
}

impl<S: RandomSource> App<S> {
    pub fn new(source: S, events: Sender<GameEvent>, settings: AppSettings) -> Self {
        let state = if settings.start_on_info {
            AppState::Info
        } else {
            AppState::Game
        };

        Self {
            settings,
            state,
            cursor: 0,
            session: Session::new(source),
            feedback: FeedbackLayer::new(),
            countdown: None,
            next_timer: 0,
            events,
            info_shown_at: Instant::now(),
        }
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn feedback(&self) -> &FeedbackLayer {
        &self.feedback
    }

    pub fn countdown_id(&self) -> Option<TimerId> {
        self.countdown.as_ref().map(Countdown::id)
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    /// Starts a fresh session and a fresh countdown, cancelling any previous one
    pub fn start(&mut self) {
        if let Some(mut previous) = self.countdown.take() {
            previous.cancel();
        }

        self.session.start();
        self.feedback.clear();

        self.next_timer += 1;
        self.countdown = Some(Countdown::start(
            TimerId(self.next_timer),
            self.settings.countdown_period,
            self.events.clone(),
        ));
    }

    pub fn pick(&mut self, index: usize) -> PickOutcome {
        self.pick_at(index, Instant::now())
    }

    pub fn pick_at(&mut self, index: usize, now: Instant) -> PickOutcome {
        let outcome = self.session.pick(index);

        match outcome {
            PickOutcome::Matched { fulfilled } => {
                self.feedback.flash(FlashKind::Success, index, now);
                if fulfilled {
                    self.feedback.order_filled(now);
                }
            }
            PickOutcome::Missed => self.feedback.flash(FlashKind::Failure, index, now),
            PickOutcome::Ignored => {}
        }

        outcome
    }

    /// Applies one second of game time if `id` belongs to the running countdown
    pub fn on_countdown(&mut self, id: TimerId) -> Control {
        if self.countdown_id() != Some(id) {
            debug!(timer = id.0, "dropping stale countdown event");
            return Control::Idle;
        }

        match self.session.tick() {
            TickOutcome::Expired => {
                self.countdown = None;
                Control::Redraw
            }
            TickOutcome::Running(_) => Control::Redraw,
            TickOutcome::Ignored => Control::Idle,
        }
    }

    /// Animation frame: expire feedback and keep the info reveal moving
    pub fn on_frame(&mut self, now: Instant) -> Control {
        let expired = self.feedback.expire(now);
        let revealing =
            self.state == AppState::Info && !info::reveal_finished(self.info_elapsed(now));

        if expired || revealing || self.feedback.is_animating() {
            Control::Redraw
        } else {
            Control::Idle
        }
    }

    pub fn toggle_info(&mut self, now: Instant) {
        self.state = match self.state {
            AppState::Game => {
                self.info_shown_at = now;
                AppState::Info
            }
            AppState::Info => AppState::Game,
        };
    }

    pub fn info_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.info_shown_at)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let row = self.cursor / GRID_COLUMNS;
        let col = self.cursor % GRID_COLUMNS;
        let rows = GRID_SIZE / GRID_COLUMNS;

        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(rows - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(GRID_COLUMNS - 1)),
        };
        self.cursor = row * GRID_COLUMNS + col;
    }

    /// Routes one event. `area` is the full frame, used for mouse hit testing.
    pub fn handle_event(&mut self, event: GameEvent, area: Rect) -> Control {
        let control = match event {
            GameEvent::Tick => return self.on_frame(Instant::now()),
            GameEvent::Countdown(id) => self.on_countdown(id),
            GameEvent::Resize => Control::Redraw,
            GameEvent::Key(key) => self.on_key(key),
            GameEvent::Mouse(mouse) => self.on_mouse(mouse, area),
        };

        // stale cues go away on any event, not only on frames
        match control {
            Control::Idle if self.feedback.expire(Instant::now()) => Control::Redraw,
            other => other,
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Tab | KeyCode::Char('i') => {
                self.toggle_info(Instant::now());
                return Control::Redraw;
            }
            _ => {}
        }

        if self.state == AppState::Info {
            return Control::Idle;
        }

        match key.code {
            KeyCode::Char('s') if !self.session().is_active() => self.start(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.session().is_active() {
                    self.pick(self.cursor);
                } else {
                    self.start();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Direction::Right),
            _ => return Control::Idle,
        }

        Control::Redraw
    }

    fn on_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Control {
        if self.state != AppState::Game {
            return Control::Idle;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Control::Idle;
        }

        match ui::cell_at(area, mouse.column, mouse.row) {
            Some(index) => {
                self.cursor = index;
                self.pick(index);
                Control::Redraw
            }
            None => Control::Idle,
        }
    }
}
