/// Fixed-width text bar, e.g. `[████████░░]` for 0.8 at width 10.
/// The ratio is clamped to `[0, 1]`; NaN renders empty.
pub fn render_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
