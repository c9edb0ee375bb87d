//! Clipboard text for the copy actions.

use crate::catalog::FontRecord;

/// Text copied for a single font.
pub fn postscript_name(record: &FontRecord) -> String {
    record.postscript_name.clone()
}

/// Text copied from the comparison panel.
///
/// One block per pin, in the order given, separated by a blank line:
///
/// ```text
/// • Courier New [CourierNewPSMT]
///   The quick brown fox
/// ```
pub fn comparison_block<'a>(
    pins: impl IntoIterator<Item = &'a FontRecord>,
    sample_text: &str,
) -> String {
    pins.into_iter()
        .map(|record| {
            format!(
                "• {} [{}]\n  {}",
                record.display_name, record.postscript_name, sample_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
