/// ProgressReporter port for user-visible status during long operations
///
/// Abstracts the status channel (stderr, progress bar, test capture) so use
/// cases can narrate uploads and polling without knowing how the feedback is
/// drawn.
pub trait ProgressReporter {
    /// Reports a plain status message
    fn report(&self, message: &str);

    /// Reports quantified progress
    ///
    /// # Arguments
    /// * `current` - Current progress value (the analysis service reports 0-100)
    /// * `total` - Total expected value
    /// * `message` - Optional status text to show alongside the bar
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error without ending the operation
    fn report_error(&self, message: &str);

    /// Reports that the operation finished
    fn report_completion(&self, message: &str);
}
