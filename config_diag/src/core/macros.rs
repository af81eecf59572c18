#[macro_export]
/// Builds a [`Diagnostic`](crate::Diagnostic) from a title and `label => value` pairs.
///
/// `diagnostic!("Data corrupted."; "Reason" => reason, "Coding Path" => path)`
macro_rules! diagnostic {
    ($title:expr $(; $($label:expr => $value:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut diagnostic = $crate::Diagnostic::new($title);
        $($(
            diagnostic.push_entry($label, $value);
        )*)?
        diagnostic
    }};
}
