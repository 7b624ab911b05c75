//! Secondary settlement of equipment rental through the vendor.
//!
//! Rental granted to the performer's days is not paid out with the primary
//! settlement. It passes through the vendor, which takes its own commission
//! and withholds income tax at a fixed rate regardless of the performer's.

use rust_decimal::Decimal;

use crate::models::{EquipmentDetail, FlatSettlement, RentalLine, SecondarySettlement};

/// Vendor income-tax rate.
pub const VENDOR_TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Computes the vendor settlement for the rental actually granted.
///
/// Returns `None` when no rental was granted.
///
/// # Examples
///
/// ```
/// use performer_settlement::calculation::calculate_secondary_settlement;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settlement = calculate_secondary_settlement(Decimal::from(100), &[]).unwrap();
/// assert_eq!(settlement.net_basis, Decimal::from(95));
/// assert_eq!(settlement.net, Decimal::from_str("83.9325").unwrap());
///
/// assert!(calculate_secondary_settlement(Decimal::ZERO, &[]).is_none());
/// ```
pub fn calculate_secondary_settlement(
    allocated: Decimal,
    rentals: &[RentalLine],
) -> Option<SecondarySettlement> {
    if allocated <= Decimal::ZERO {
        return None;
    }

    let net_basis = FlatSettlement::of(allocated).net;
    let vendor = FlatSettlement::of(net_basis);
    let tax = vendor.taxable_base * VENDOR_TAX_RATE;

    Some(SecondarySettlement {
        allocated,
        net_basis,
        commission: vendor.commission,
        taxable_base: vendor.taxable_base,
        tax,
        net: vendor.taxable_base - tax,
        equipment: rentals
            .iter()
            .map(|line| EquipmentDetail {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal(),
            })
            .collect(),
    })
}
