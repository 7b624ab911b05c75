//! Per-day withholding calculation.
//!
//! This module turns one day's base wage into its commission, social-security
//! and income-tax breakdown. Social security comes from an ordered bracket
//! chain keyed on the day's gross; every bracket is a fixed amount except the
//! second, which is derived from the day's cost.

use rust_decimal::Decimal;

use crate::models::{DayTaxResult, FlatSettlement};

/// How a bracket computes its social-security withholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialSecurityRule {
    /// A constant withholding.
    Fixed(Decimal),
    /// `cost × 0.25009 + (cost − cost × 0.25009) × 0.0655 + 2.5`.
    Graduated,
}

/// One entry of the social-security chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialSecurityBracket {
    /// Inclusive upper bound on the day's gross; `None` for the open top bracket.
    pub upper_bound: Option<Decimal>,
    /// The withholding rule for gross amounts inside this bracket.
    pub rule: SocialSecurityRule,
}

const fn bracket(upper_bound: Decimal, rule: SocialSecurityRule) -> SocialSecurityBracket {
    SocialSecurityBracket {
        upper_bound: Some(upper_bound),
        rule,
    }
}

const fn fixed(cents: u32) -> SocialSecurityRule {
    SocialSecurityRule::Fixed(Decimal::from_parts(cents, 0, 0, false, 2))
}

/// The social-security chain, in ascending order. The first bracket whose
/// upper bound is `>=` the gross wins.
pub const SOCIAL_SECURITY_BRACKETS: [SocialSecurityBracket; 9] = [
    bracket(Decimal::from_parts(75, 0, 0, false, 0), fixed(2100)),
    bracket(
        Decimal::from_parts(47725, 0, 0, false, 2),
        SocialSecurityRule::Graduated,
    ),
    bracket(
        Decimal::from_parts(2988100393, 169831, 0, false, 12),
        fixed(13886),
    ),
    bracket(
        Decimal::from_parts(4165401789, 29109, 0, false, 11),
        fixed(17949),
    ),
    bracket(
        Decimal::from_parts(608318545, 47102, 0, false, 11),
        fixed(22141),
    ),
    bracket(
        Decimal::from_parts(2095598888, 53255, 0, false, 11),
        fixed(28852),
    ),
    bracket(
        Decimal::from_parts(3369180349, 63624, 0, false, 11),
        fixed(29467),
    ),
    bracket(
        Decimal::from_parts(3356070562, 73547, 0, false, 11),
        fixed(30077),
    ),
    SocialSecurityBracket {
        upper_bound: None,
        rule: fixed(31027),
    },
];

const GRADUATED_PRIMARY_RATE: Decimal = Decimal::from_parts(25009, 0, 0, false, 5);
const GRADUATED_SECONDARY_RATE: Decimal = Decimal::from_parts(655, 0, 0, false, 4);
const GRADUATED_FLAT_AMOUNT: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

impl SocialSecurityRule {
    /// Applies the rule to a day's cost (gross minus commission).
    pub fn withholding(&self, cost: Decimal) -> Decimal {
        match self {
            SocialSecurityRule::Fixed(amount) => *amount,
            SocialSecurityRule::Graduated => {
                let primary = cost * GRADUATED_PRIMARY_RATE;
                let secondary = (cost - primary) * GRADUATED_SECONDARY_RATE;
                primary + secondary + GRADUATED_FLAT_AMOUNT
            }
        }
    }
}

/// Selects the social-security bracket for a day's gross.
pub fn social_security_bracket(gross: Decimal) -> &'static SocialSecurityBracket {
    SOCIAL_SECURITY_BRACKETS
        .iter()
        .find(|b| b.upper_bound.is_none_or(|upper| gross <= upper))
        .unwrap_or(&SOCIAL_SECURITY_BRACKETS[SOCIAL_SECURITY_BRACKETS.len() - 1])
}

/// Calculates the withholding breakdown for one day's base wage.
///
/// # Arguments
///
/// * `gross` - The day's wage gross (≥ 0)
/// * `income_tax_rate` - Income-tax percentage (e.g. `2.0` for 2%)
///
/// The taxable base is not clamped; it can only go negative for gross
/// amounts below the legal minimum wage.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::calculate_day_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_day_tax(Decimal::from(75), Decimal::TWO);
///
/// assert_eq!(result.commission, Decimal::from_str("3.75").unwrap());
/// assert_eq!(result.social_security, Decimal::from(21));
/// assert_eq!(result.taxable_base, Decimal::from_str("50.25").unwrap());
/// assert_eq!(result.net, Decimal::from_str("49.245").unwrap());
/// ```
pub fn calculate_day_tax(gross: Decimal, income_tax_rate: Decimal) -> DayTaxResult {
    let split = FlatSettlement::of(gross);
    let cost = split.taxable_base;

    let social_security = social_security_bracket(gross).rule.withholding(cost);
    let taxable_base = cost - social_security;
    let income_tax = taxable_base * (income_tax_rate / Decimal::ONE_HUNDRED);

    DayTaxResult {
        gross,
        commission: split.commission,
        cost,
        social_security,
        taxable_base,
        income_tax,
        net: taxable_base - income_tax,
    }
}
