//! Step curve pricing.
//!
//! A schedule is a piecewise constant price function over supply. The reserve moved by a mint
//! or burn is the integral of that function over the supply interval the operation covers,
//! computed exactly in 256 bits and divided by the token unit once at the end: mint costs round
//! up and burn refunds round down, so the curve never under-collects or over-refunds.

use crate::types::{Balance, BondStep};
use alloc::vec::Vec;
use frame::deps::sp_core::U256;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurveError {
  /// Schedule has no steps
  EmptySchedule,
  /// Ranges and prices differ in length
  LengthMismatch,
  /// A range is zero or not above the previous one
  RangesNotIncreasing,
  /// Last range differs from the declared max supply
  MaxSupplyMismatch,
  /// Supply would leave `[0, max_supply]`
  OutOfRange,
  /// Result does not fit the balance type
  Overflow,
}

/// Validate a schedule given as parallel range/price lists and zip it into steps.
pub fn build_steps(
  ranges: &[Balance],
  prices: &[Balance],
  max_supply: Balance,
) -> Result<Vec<BondStep>, CurveError> {
  if ranges.is_empty() {
    return Err(CurveError::EmptySchedule);
  }
  if ranges.len() != prices.len() {
    return Err(CurveError::LengthMismatch);
  }

  let mut previous = 0;
  for &range_to in ranges {
    if range_to <= previous {
      return Err(CurveError::RangesNotIncreasing);
    }
    previous = range_to;
  }
  if previous != max_supply {
    return Err(CurveError::MaxSupplyMismatch);
  }

  Ok(
    ranges
      .iter()
      .zip(prices)
      .map(|(&range_to, &price)| BondStep { range_to, price })
      .collect(),
  )
}

/// Supply ceiling of a schedule.
pub fn max_supply(steps: &[BondStep]) -> Balance {
  steps.last().map(|step| step.range_to).unwrap_or_default()
}

/// Price of the next unit minted at `supply`, `None` once the curve is full.
pub fn price_at(steps: &[BondStep], supply: Balance) -> Option<Balance> {
  steps
    .iter()
    .find(|step| supply < step.range_to)
    .map(|step| step.price)
}

/// Reserve owed for minting `amount` on top of `supply`, rounded up.
pub fn reserve_for_mint(
  steps: &[BondStep],
  supply: Balance,
  amount: Balance,
  unit: Balance,
) -> Result<Balance, CurveError> {
  let new_supply = supply.checked_add(amount).ok_or(CurveError::OutOfRange)?;
  if new_supply > max_supply(steps) {
    return Err(CurveError::OutOfRange);
  }

  let area = integrate(steps, supply, new_supply)?;
  let (quotient, remainder) = area.div_mod(to_unit(unit)?);
  let quotient = if remainder.is_zero() {
    quotient
  } else {
    quotient + U256::one()
  };
  narrow(quotient)
}

/// Reserve released by burning `amount` from `supply`, rounded down.
pub fn reserve_for_burn(
  steps: &[BondStep],
  supply: Balance,
  amount: Balance,
  unit: Balance,
) -> Result<Balance, CurveError> {
  let new_supply = supply.checked_sub(amount).ok_or(CurveError::OutOfRange)?;
  if supply > max_supply(steps) {
    return Err(CurveError::OutOfRange);
  }

  let area = integrate(steps, new_supply, supply)?;
  narrow(area / to_unit(unit)?)
}

/// Sum of `price * overlap` over every step intersecting `[from, to)`.
fn integrate(steps: &[BondStep], from: Balance, to: Balance) -> Result<U256, CurveError> {
  let mut area = U256::zero();
  let mut lower = 0;
  for step in steps {
    if lower >= to {
      break;
    }
    let start = lower.max(from);
    let end = step.range_to.min(to);
    if end > start {
      let slice = U256::from(end - start)
        .checked_mul(U256::from(step.price))
        .ok_or(CurveError::Overflow)?;
      area = area.checked_add(slice).ok_or(CurveError::Overflow)?;
    }
    lower = step.range_to;
  }
  Ok(area)
}

fn to_unit(unit: Balance) -> Result<U256, CurveError> {
  if unit == 0 {
    return Err(CurveError::Overflow);
  }
  Ok(U256::from(unit))
}

fn narrow(value: U256) -> Result<Balance, CurveError> {
  if value > U256::from(Balance::MAX) {
    return Err(CurveError::Overflow);
  }
  Ok(value.as_u128())
}
