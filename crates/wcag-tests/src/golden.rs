//! Reference contrast ratios.
//!
//! Values as reported by published WCAG checkers (WebAIM, colord), truncated
//! to two decimals.

/// (foreground, background, ratio truncated to 2 decimals)
pub const GOLDEN: &[(&str, &str, f64)] = &[
    ("#FFFFFF", "#000000", 21.0),
    ("#000000", "#FFFFFF", 21.0),
    ("#FF0000", "#0000FF", 2.14),
    ("#767676", "#FFFFFF", 4.54),
    ("#777777", "#FFFFFF", 4.47),
    ("#595959", "#FFFFFF", 7.0),
    ("#1E293B", "#FFFFFF", 14.62),
    ("#09090B", "#FFFFFF", 19.89),
    ("#FF0000", "#FFFFFF", 3.99),
    ("#FFFFFF", "#0000FF", 8.59),
    ("#00FF00", "#000000", 15.3),
    ("#808080", "#000000", 5.31),
];
