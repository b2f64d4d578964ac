use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::io::{self, Write};

const FETCH_BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} pages - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout clean and draws an indicatif bar over the page fetches.
/// Messages are written with the bar suspended, so they reach stderr even
/// when the bar itself is hidden (stderr is not a terminal).
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    sink: RefCell<Box<dyn Write>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stderr()))
    }

    /// Sends messages to `sink` instead of stderr
    pub(crate) fn with_sink(sink: Box<dyn Write>) -> Self {
        Self {
            progress_bar: RefCell::new(None),
            sink: RefCell::new(sink),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(FETCH_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn write_lines(&self, lines: &[&str]) {
        let write = || {
            let mut sink = self.sink.borrow_mut();
            for line in lines {
                // Nowhere left to report a failed stderr write.
                let _ = writeln!(sink, "{}", line);
            }
            let _ = sink.flush();
        };

        let active = self.progress_bar.borrow().clone();
        match active {
            Some(pb) => pb.suspend(write),
            None => write(),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.clear_progress_bar();
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.write_lines(&[message]);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.clear_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_progress_bar();
        self.write_lines(&[message]);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        self.write_lines(&["", message]);
    }
}
