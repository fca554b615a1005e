//! Progress spinner shown on stderr while a request is outstanding.

use std::future::Future;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Whether a spinner should be drawn at all.
fn should_show(quiet: bool, stderr_is_term: bool) -> bool {
    !quiet && stderr_is_term
}

/// Clears the spinner when dropped, on success, error or cancellation.
struct SpinnerGuard {
    bar: Option<ProgressBar>,
}

impl SpinnerGuard {
    fn start(label: &str, quiet: bool) -> Self {
        if !should_show(quiet, Term::stderr().is_term()) {
            return Self { bar: None };
        }

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        bar.set_style(style);
        bar.set_message(label.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);

        Self { bar: Some(bar) }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Await `future` behind a spinner labeled `label`.
///
/// Nothing is drawn when `quiet` is set or stderr is not a terminal. The
/// spinner is gone by the time this returns.
pub async fn with_spinner<F, T>(label: &str, quiet: bool, future: F) -> T
where
    F: Future<Output = T>,
{
    let _guard = SpinnerGuard::start(label, quiet);
    future.await
}
