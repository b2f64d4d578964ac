/// ProgressReporter port for user feedback while a digest is built
///
/// Messages go to the operator (stderr), never into the digest itself.
pub trait ProgressReporter {
    /// Reports an informational message, e.g. which page is being fetched
    fn report(&self, message: &str);

    /// Reports position within the sequence of page fetches
    ///
    /// # Arguments
    /// * `current` - Number of pages fetched so far
    /// * `total` - Number of pages this run will fetch
    /// * `message` - Optional label for the page in flight
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, e.g. a report that came back empty
    fn report_error(&self, message: &str);

    /// Reports the end of a run
    fn report_completion(&self, message: &str);
}
