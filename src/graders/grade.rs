/// Point-total thresholds and the grade point each one earns. Scanned top
/// down; the highest bound at or below the total wins.
static GRADE_STEPS: &[(i64, f64)] = &[
    (900, 4.0),
    (850, 3.5),
    (800, 3.0),
    (750, 2.5),
    (700, 2.0),
    (650, 1.5),
    (600, 1.0),
];

/// Converts a point total into a grade point.
///
/// | Total       | Grade point |
/// |-------------|-------------|
/// | >= 900      | 4.0         |
/// | [850, 900)  | 3.5         |
/// | [800, 850)  | 3.0         |
/// | [750, 800)  | 2.5         |
/// | [700, 750)  | 2.0         |
/// | [650, 700)  | 1.5         |
/// | [600, 650)  | 1.0         |
/// | < 600       | 0.0         |
pub fn grade_point(total: i64) -> f64 {
    GRADE_STEPS
        .iter()
        .find(|&&(bound, _)| total >= bound)
        .map_or(0.0, |&(_, gp)| gp)
}
