//! Policy rules applied after schema validation.
//!
//! Rules in this module are authorization-class: they run on values that
//! already passed their schema, so a failure means the request was
//! well-formed but is not permitted. The services map these failures to the
//! forbidden error kind, never to invalid-request.
//!
//! The currency-length and non-negative-balance rules for accounts are
//! declared in the account schema instead, so their failures carry
//! field-level violations and surface as invalid-request.

use chrono::NaiveDate;

/// Minimum whole-year age required to create a user.
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Whole years elapsed from `birthday` to `today`, month and day aware.
/// A birthday in the future counts as age 0.
pub fn age_in_years(birthday: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birthday).unwrap_or(0)
}

/// Minimum-age rule for user creation.
pub fn check_minimum_age(birthday: NaiveDate, today: NaiveDate) -> Result<(), String> {
    let age = age_in_years(birthday, today);
    if age < MINIMUM_AGE_YEARS {
        return Err(format!(
            "minimum age is {} years, candidate is {}",
            MINIMUM_AGE_YEARS, age
        ));
    }
    Ok(())
}
