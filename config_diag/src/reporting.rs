use std::error::Error;

/// Renders `error` for display and logs the causes its message leaves out.
///
/// The rendered message is returned, never printed. Each cause in the
/// `source()` chain whose text is not already part of the message is emitted
/// as a `debug` event, so running with a verbose subscriber shows the
/// underlying I/O or evaluation error that the short message hides.
pub fn report(error: &(dyn Error + 'static)) -> String {
    let message = error.to_string();

    let mut depth = 0usize;
    let mut suppressed = 0usize;
    let mut cause = error.source();
    while let Some(current) = cause {
        depth += 1;
        let cause_message = current.to_string();
        if !message.contains(&cause_message) {
            suppressed += 1;
            tracing::debug!(cause.depth = depth, cause.message = %cause_message, "underlying cause");
        }
        cause = current.source();
    }

    tracing::warn!(error.message = %message, error.suppressed_causes = suppressed);
    message
}
