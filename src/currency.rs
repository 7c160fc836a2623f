//! Formatting of amounts as Indonesian Rupiah.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format `amount` as whole Rupiah with dots between the thousands, e.g.
/// "Rp1.500.000" or "-Rp25.000".
pub fn format_rupiah(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp")
            .expect("valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-Rp")
            .expect("valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    let amount = amount.round();

    let formatted = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // numfmt renders zero without the prefix
        return "Rp0".to_owned();
    };

    formatted.replace(',', ".")
}

#[cfg(test)]
mod tests {
    use super::format_rupiah;

    #[test]
    fn zero_has_prefix() {
        assert_eq!(format_rupiah(0.0), "Rp0");
        assert_eq!(format_rupiah(0.4), "Rp0");
    }

    #[test]
    fn negative_amount_has_minus_before_prefix() {
        let got = format_rupiah(-25_000.0);

        assert!(got.starts_with("-Rp"), "got {got}");
        assert!(!got.contains(','), "got {got}");
    }

    #[test]
    fn uses_dots_between_thousands() {
        let got = format_rupiah(1_500_000.0);

        assert!(got.starts_with("Rp1"), "got {got}");
        assert!(!got.contains(','), "got {got}");
    }
}
