use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// The spinner currently on screen, if any. Log lines are routed through it
/// so they do not tear the animation.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Starts a spinner with `msg`. Hidden when any quiet level is set.
    pub fn start(msg: impl Into<String>, q_level: u8) -> Self {
        if q_level > 0 {
            return Self {
                pb: ProgressBar::hidden(),
            };
        }

        let pb: ProgressBar = ProgressBar::new_spinner();

        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]));
        }
        pb.set_message(msg.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut active) = ACTIVE.lock() {
            *active = Some(pb.clone());
        }

        Self { pb }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
    }
}

pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let active: Option<ProgressBar> = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            None => std::io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
