/// Month abbreviations indexed by `month - 1`.
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Abbreviation for a 1-based month number, `None` outside 1..=12.
pub fn abbreviation(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTHS[(month - 1) as usize]),
        _ => None,
    }
}

/// Abbreviation for a 0-based row index as used by the month axis.
pub fn abbreviation_for_index(index: usize) -> Option<&'static str> {
    MONTHS.get(index).copied()
}
