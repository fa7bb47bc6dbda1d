use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent,
};
use crossterm::execute;
use portal_config::Config;
use portal_core::{BoundsError, FrustumBounds, Projector, Surface, ViewerOffset};
use portal_scene::{Scene, SceneParams};
use ratatui::{DefaultTerminal, Frame, widgets::Paragraph};

use crate::canvas::PixelCanvas;
use crate::tracker::PointerTracker;

mod canvas;
mod tracker;

/// Fixed vertical extent of the effect volume, in world units. The
/// horizontal extent follows the viewport aspect ratio.
const WORLD_HEIGHT: f32 = 16.0;
/// Depth of the tunnel.
const WORLD_DEPTH: f32 = 40.0;
/// Weight on the previous value when smoothing tracker samples.
const SMOOTHING: f32 = 0.7;

fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// World bounds for a terminal viewport: fixed vertical extent, width
/// from the half-block pixel aspect ratio.
fn bounds_for(cols: u16, rows: u16) -> Result<FrustumBounds, BoundsError> {
    let px_w = cols.max(1) as f32;
    let px_h = rows.max(1) as f32 * 2.0;
    let world_w = WORLD_HEIGHT * px_w / px_h;
    FrustumBounds::new(
        -world_w / 2.0,
        world_w / 2.0,
        -WORLD_HEIGHT / 2.0,
        WORLD_HEIGHT / 2.0,
        0.0,
        WORLD_DEPTH,
    )
}

/// The frame driver: owns the fixed-tick loop, tracker and canvas, and
/// no effect logic of its own.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    scene: Scene,
    canvas: PixelCanvas,
    tracker: PointerTracker,
    /// Smoothed viewer offset carried across ticks.
    offset: ViewerOffset,
    /// Whether the last tick had a usable tracker sample.
    tracking: bool,
}

impl App {
    /// Construct a new instance of [`App`]. The scene starts from a
    /// nominal viewport; the first frame resizes it to the real one.
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
        log::info!(
            "starting: {} planes, {} streams, {} fps, seed {seed}",
            config.planes,
            config.streams,
            config.target_fps
        );

        // bounds_for cannot fail: extents are clamped positive.
        let bounds = bounds_for(80, 24).unwrap_or_else(|_| unreachable!());
        let params = SceneParams {
            planes: config.planes,
            streams: config.streams,
        };
        Self {
            running: false,
            scene: Scene::new(bounds, params, seed),
            canvas: PixelCanvas::new(80, 24),
            tracker: PointerTracker::new(),
            offset: ViewerOffset::neutral(),
            tracking: false,
            config,
        }
    }

    /// Run the fixed-tick loop: sample tracker, advance the scene, draw,
    /// then spend the rest of the tick on event polling.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let tick = Duration::from_secs_f32(1.0 / self.config.target_fps as f32);
        let dt = 1.0 / self.config.target_fps as f32;

        while self.running {
            let frame_start = Instant::now();

            let raw = self.tracker.sample();
            if raw.is_some() != self.tracking {
                self.tracking = raw.is_some();
                if self.tracking {
                    log::debug!("pointer tracking acquired");
                } else {
                    log::debug!("pointer tracking lost, using neutral offset");
                }
            }
            self.offset = self
                .offset
                .smoothed(raw.unwrap_or_else(ViewerOffset::neutral), SMOOTHING);

            self.scene.update(dt);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events(tick.saturating_sub(frame_start.elapsed()))?;
        }
        Ok(())
    }

    /// Renders the scene into the half-block canvas and blits it.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if (area.width, area.height) != self.canvas.cell_size() {
            self.apply_viewport(area.width, area.height);
        }

        self.canvas.clear();
        let projector = Projector::new(
            self.offset,
            self.config.parallax,
            self.canvas.width(),
            self.canvas.height(),
            WORLD_HEIGHT,
        );
        self.scene.render(&mut self.canvas, &projector);

        frame.render_widget(Paragraph::new(self.canvas.to_lines()), area);
    }

    /// Resize the canvas and apply the scene's re-layout policy.
    fn apply_viewport(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
        match bounds_for(cols, rows) {
            Ok(bounds) => {
                if self.scene.update_bounds(bounds) {
                    log::info!("viewport {cols}x{rows} triggered scene re-layout");
                }
            }
            Err(err) => log::warn!("ignoring degenerate viewport {cols}x{rows}: {err}"),
        }
    }

    /// Drain events for the remainder of the tick.
    fn handle_events(&mut self, budget: Duration) -> color_eyre::Result<()> {
        let deadline = Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.apply_viewport(cols, rows),
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
            _ => {}
        }
    }

    /// Any pointer movement is a tracking sample.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (cols, rows) = self.canvas.cell_size();
        self.tracker.observe(mouse.column, mouse.row, cols, rows);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_aspect_ratio() {
        let bounds = bounds_for(80, 24).unwrap();
        assert_eq!(bounds.height(), WORLD_HEIGHT);
        assert_eq!(bounds.depth(), WORLD_DEPTH);
        // 80x48 pixels: width = 16 * 80/48.
        assert!((bounds.width() - WORLD_HEIGHT * 80.0 / 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounds_survive_degenerate_terminal() {
        assert!(bounds_for(0, 0).is_ok());
        assert!(bounds_for(1, 1).is_ok());
    }
}
