use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::Rng;

use crate::config::{Config, CATEGORIES, DEFAULT_CATEGORY_PROMPT};
use crate::page::{PageFx, REVEAL_SLOTS};
use crate::widget::ChatWidget;

#[derive(Debug)]
pub enum ExportError {
    Serialize(String),
    Io(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ExportError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

pub struct App {
    pub widget: ChatWidget,
    pub page: PageFx,
    pub config: Config,
    pub animation_frame: usize,
    pub animation_tick: u64,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            widget: ChatWidget::new(&config),
            page: PageFx::new(REVEAL_SLOTS, &config),
            animation_frame: 0,
            animation_tick: 0,
            status_message: None,
            config,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation_tick += 1;
        self.animation_frame = (self.animation_frame + 1) % self.config.animation_frame_mod;

        // Clear status message after ~3 seconds
        if self.animation_tick % self.config.status_timeout_ticks == 0 {
            self.status_message = None;
        }

        self.widget.tick(now);
        self.page.tick();
    }

    /// Send the current input with a freshly sampled reply delay.
    pub fn send_message(&mut self, now: Instant) {
        let delay = self.sample_reply_delay();
        self.widget.submit(now, delay);
    }

    fn sample_reply_delay(&self) -> Duration {
        let jitter = rand::rng().random_range(0..self.config.reply_delay_jitter_ms);
        Duration::from_millis(self.config.reply_delay_min_ms + jitter)
    }

    /// A support-category card was activated: press feedback, open the
    /// widget, and schedule the category prompt into the input.
    pub fn category_trigger(&mut self, index: usize, now: Instant) {
        let (prompt, id) = match CATEGORIES.get(index) {
            Some(c) => (c.prompt, c.id),
            None => (DEFAULT_CATEGORY_PROMPT, "general"),
        };
        log::debug!("support card clicked: {}", id);

        self.page.press_card(index);
        self.widget.open_with_prompt(prompt, now);
    }

    /// Write the transcript as JSON next to the binary's working directory.
    pub fn export_transcript(&self) -> Result<PathBuf, ExportError> {
        let dir = std::env::current_dir().map_err(|e| ExportError::Io(e.to_string()))?;
        self.export_transcript_to(&dir)
    }

    pub fn export_transcript_to(&self, dir: &std::path::Path) -> Result<PathBuf, ExportError> {
        let json = serde_json::to_string_pretty(self.widget.transcript())
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        let path = dir.join(format!(
            "support-transcript-{}.json",
            Utc::now().format("%Y%m%d-%H%M%S")
        ));
        fs::write(&path, json).map_err(|e| ExportError::Io(e.to_string()))?;
        Ok(path)
    }

    /// Ctrl+E: export, with the phone-line apology appended to an active
    /// transcript when the export fails.
    pub fn handle_export(&mut self) {
        match self.export_transcript() {
            Ok(path) => {
                self.status_message = Some(format!("Transcript saved: {}", path.display()));
            }
            Err(e) => {
                log::error!("transcript export failed: {}", e);
                self.status_message = Some(format!("Export failed: {}", e));
                if self.widget.is_open() {
                    self.widget.report_error();
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FALLBACK_RESPONSE;

    #[test]
    fn category_trigger_opens_widget_and_schedules_prompt() {
        let mut app = App::new();
        let now = Instant::now();
        app.category_trigger(4, now);

        assert!(app.widget.is_open());
        assert!(app.page.is_card_pressed(4));
        assert!(app.widget.input.is_empty());

        app.widget.tick(now + Duration::from_millis(500));
        assert_eq!(app.widget.input, "I need technical support.");
    }

    #[test]
    fn category_trigger_out_of_range_falls_back_to_generic_prompt() {
        let mut app = App::new();
        let now = Instant::now();
        app.category_trigger(42, now);

        app.widget.tick(now + Duration::from_millis(500));
        assert_eq!(app.widget.input, DEFAULT_CATEGORY_PROMPT);
    }

    #[test]
    fn sampled_delay_stays_in_window() {
        let app = App::new();
        for _ in 0..100 {
            let d = app.sample_reply_delay();
            assert!(d >= Duration::from_millis(1500));
            assert!(d < Duration::from_millis(2500));
        }
    }

    #[test]
    fn export_writes_transcript_json() {
        let mut app = App::new();
        let now = Instant::now();
        app.widget.input = "I need help".to_string();
        app.widget.submit(now, Duration::from_millis(1500));

        let dir = std::env::temp_dir();
        let path = app.export_transcript_to(&dir).expect("export should succeed");
        let raw = fs::read_to_string(&path).expect("file should exist");
        assert!(raw.contains("I need help"));
        assert!(raw.contains("\"user\""));
        fs::remove_file(path).ok();
    }

    #[test]
    fn failed_export_appends_apology_while_widget_open() {
        let mut app = App::new();
        app.widget.open(Instant::now());

        let missing = std::env::temp_dir().join("no-such-dir-for-transcripts");
        assert!(app.export_transcript_to(&missing).is_err());
        app.widget.report_error();
        let last = app.widget.transcript().last().expect("apology appended");
        assert_eq!(last.text, FALLBACK_RESPONSE);
    }

    #[test]
    fn status_message_clears_after_timeout() {
        let mut app = App::new();
        app.status_message = Some("saved".to_string());
        let now = Instant::now();
        for _ in 0..app.config.status_timeout_ticks {
            app.tick(now);
        }
        assert!(app.status_message.is_none());
    }
}
