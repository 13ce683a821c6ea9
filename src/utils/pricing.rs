use rust_decimal::{Decimal, RoundingStrategy};

/// Final seat price: base show price plus the seat type's percentage
/// premium, rounded to 2 decimal places, half-up. A seat type with no
/// premium row has premium 0 and pays the base price unchanged.
pub fn final_price(base_price: Decimal, premium_percentage: i32) -> Decimal {
    let multiplier = Decimal::from(100 + premium_percentage) / Decimal::from(100);
    (base_price * multiplier).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fifty_percent_premium() {
        assert_eq!(final_price(dec!(10.00), 50), dec!(15.00));
    }

    #[test]
    fn test_zero_premium_leaves_base_unchanged() {
        assert_eq!(final_price(dec!(10.00), 0), dec!(10.00));
    }

    #[test]
    fn test_rounds_half_up_to_minor_unit() {
        // 10.05 * 1.25 = 12.5625 -> 12.56; 10.02 * 1.25 = 12.525 -> 12.53
        assert_eq!(final_price(dec!(10.05), 25), dec!(12.56));
        assert_eq!(final_price(dec!(10.02), 25), dec!(12.53));
    }

    #[test]
    fn test_three_decimal_base_price() {
        // price column is decimal(9,3)
        assert_eq!(final_price(dec!(9.995), 0), dec!(10.00));
    }
}
