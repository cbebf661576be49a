/// Renders a row-major grid as a box with right-aligned values. Empty slots are shown as `.`.
pub fn visualize_grid(size: usize, values: &[u32]) -> String {
    let width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    // Draw the top of the box
    let mut result = String::from("╭");
    result += &"─".repeat(size * (width + 1) + 1);
    result += "╮\n";

    for row in values.chunks(size) {
        result += "│";
        for &value in row {
            if value == 0 {
                result += &format!(" {:>width$}", ".", width = width);
            } else {
                result += &format!(" {:>width$}", value, width = width);
            }
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "╰";
    result += &"─".repeat(size * (width + 1) + 1);
    result += "╯";
    result
}
