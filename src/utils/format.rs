/// Counters are shown as "+N" on the landing page.
pub fn format_count(n: u64) -> String {
    format!("+{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_with_plus() {
        assert_eq!(format_count(10), "+10");
        assert_eq!(format_count(42), "+42");
        assert_eq!(format_count(103), "+103");
    }

    #[test]
    fn zero_and_large_values() {
        assert_eq!(format_count(0), "+0");
        assert_eq!(format_count(u64::MAX), format!("+{}", u64::MAX));
    }
}
