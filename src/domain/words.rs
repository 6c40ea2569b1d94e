//! Rupee amounts in words, using the Indian numbering system
//! (crore, lakh, thousand, hundred).

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Renders `value` as words followed by `Rupees.`.
///
/// Zero is special-cased to `Zero Rupees` without a trailing period, and
/// negative values are prefixed with `Minus`.
pub fn number_to_words_indian(value: i64) -> String {
    if value == 0 {
        return "Zero Rupees".to_string();
    }
    let words = group_words(value.unsigned_abs());
    if value < 0 {
        format!("Minus {} Rupees.", words.trim())
    } else {
        format!("{} Rupees.", words.trim())
    }
}

fn group_words(value: u64) -> String {
    let crore = value / CRORE;
    let rest = value % CRORE;
    let lakh = rest / LAKH;
    let rest = rest % LAKH;
    let thousand = rest / THOUSAND;
    let hundreds = rest % THOUSAND;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        // Counts of a thousand crore or more reuse the same grouping.
        let count = if crore > 999 {
            group_words(crore)
        } else {
            three_digit_words(crore)
        };
        parts.push(format!("{count} Crore"));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", three_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", three_digit_words(thousand)));
    }
    if hundreds > 0 {
        parts.push(three_digit_words(hundreds));
    }
    parts.join(" ")
}

/// Words for 1..=999.
fn three_digit_words(n: u64) -> String {
    let hundred = (n / 100) as usize;
    let remainder = n % 100;

    let mut parts: Vec<String> = Vec::with_capacity(2);
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred]));
    }
    if remainder > 0 {
        parts.push(two_digit_words(remainder));
    }
    parts.join(" ")
}

/// Words for 1..=99.
fn two_digit_words(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        return ONES[n].to_string();
    }
    let tens = TENS[n / 10];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{tens} {}", ONES[ones]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_period() {
        assert_eq!(number_to_words_indian(0), "Zero Rupees");
    }

    #[test]
    fn test_hundreds_group_only() {
        assert_eq!(number_to_words_indian(7), "Seven Rupees.");
        assert_eq!(number_to_words_indian(19), "Nineteen Rupees.");
        assert_eq!(number_to_words_indian(40), "Forty Rupees.");
        assert_eq!(number_to_words_indian(100), "One Hundred Rupees.");
        assert_eq!(number_to_words_indian(999), "Nine Hundred Ninety Nine Rupees.");
    }

    #[test]
    fn test_lakh_and_thousand() {
        assert_eq!(number_to_words_indian(100000), "One Lakh Rupees.");
        assert_eq!(
            number_to_words_indian(1234567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees."
        );
        assert_eq!(number_to_words_indian(1005), "One Thousand Five Rupees.");
    }

    #[test]
    fn test_crore_skips_zero_groups() {
        assert_eq!(number_to_words_indian(10000000), "One Crore Rupees.");
        assert_eq!(number_to_words_indian(20000015), "Two Crore Fifteen Rupees.");
        assert_eq!(
            number_to_words_indian(999999999),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Rupees."
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(number_to_words_indian(-50), "Minus Fifty Rupees.");
        assert_eq!(number_to_words_indian(-100000), "Minus One Lakh Rupees.");
    }

    #[test]
    fn test_beyond_validator_domain() {
        assert_eq!(number_to_words_indian(10_000_000_000), "One Thousand Crore Rupees.");
        assert_eq!(
            number_to_words_indian(123_456_789_000),
            "Twelve Thousand Three Hundred Forty Five Crore Sixty Seven Lakh Eighty Nine Thousand Rupees."
        );
        assert!(number_to_words_indian(i64::MIN).starts_with("Minus "));
        assert!(number_to_words_indian(i64::MAX).ends_with(" Rupees."));
    }
}
