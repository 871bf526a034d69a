/// Combine points and headings into a display block
///
/// Each entry renders as a bold heading line over a bulleted point,
/// entries separated by a blank line. Indices beyond the shorter list are
/// dropped.
pub fn format_summary(points: &[String], headings: &[String]) -> String {
    points
        .iter()
        .zip(headings.iter())
        .map(|(point, heading)| format!("**{}**\n\u{2022} {}", heading, point))
        .collect::<Vec<_>>()
        .join("\n\n")
}
