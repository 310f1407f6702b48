//! Exact-decimal price statistics.
//!
//! All arithmetic is done on unbounded [`BigDecimal`]s; prices never pass
//! through binary floating point and have no digit limit. The two averages
//! round differently on purpose: the mean rounds half-up, the even-count
//! median rounds its midpoint toward positive infinity.

use bigdecimal::BigDecimal;
use fareline_types::{FarelineError, Result, Ticket};
use num_bigint::{BigInt, Sign};
use serde::Serialize;

/// Returns the arithmetic mean price.
///
/// The sum is divided by the ticket count and rounded half-up to the
/// largest scale among the prices (whole units for integer prices, tens or
/// hundreds for exponent forms such as `1.24e4`).
///
/// # Errors
///
/// Returns [`FarelineError::EmptyInput`] for zero tickets and
/// [`FarelineError::MalformedTicket`] if a price is not a decimal numeral.
pub fn mean<'t, I>(tickets: I) -> Result<BigDecimal>
where
    I: IntoIterator<Item = &'t Ticket>,
{
    let prices = prices(tickets)?;
    let scale = prices.iter().map(scale_of).max().unwrap_or(0);
    let sum: BigDecimal = prices.iter().sum();

    let mean = divide(&sum, prices.len(), scale, Rounding::HalfUp);
    tracing::debug!(tickets = prices.len(), %mean, "mean price");
    Ok(mean)
}

/// Returns the median price.
///
/// Prices are sorted numerically. An odd count yields the middle price
/// unchanged; an even count yields the average of the two middle prices,
/// rounded toward positive infinity at their scale.
///
/// # Errors
///
/// Returns [`FarelineError::EmptyInput`] for zero tickets and
/// [`FarelineError::MalformedTicket`] if a price is not a decimal numeral.
pub fn median<'t, I>(tickets: I) -> Result<BigDecimal>
where
    I: IntoIterator<Item = &'t Ticket>,
{
    let mut prices = prices(tickets)?;
    prices.sort();

    let size = prices.len();
    let median = if size % 2 == 1 {
        prices.swap_remove(size / 2)
    } else {
        midpoint(&prices[size / 2 - 1], &prices[size / 2])
    };
    tracing::debug!(tickets = size, %median, "median price");
    Ok(median)
}

/// Mean, median and their difference over one ticket set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    /// Number of tickets.
    pub count: usize,
    /// Mean price, see [`mean`].
    pub mean: BigDecimal,
    /// Median price, see [`median`].
    pub median: BigDecimal,
}

impl PriceSummary {
    /// Computes the mean and median over the tickets.
    ///
    /// # Errors
    ///
    /// Same as [`mean`] and [`median`].
    pub fn compute<'t, I>(tickets: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'t Ticket>,
    {
        let tickets: Vec<&Ticket> = tickets.into_iter().collect();
        Ok(Self {
            count: tickets.len(),
            mean: mean(tickets.iter().copied())?,
            median: median(tickets.iter().copied())?,
        })
    }

    /// Returns `mean - median`.
    #[must_use]
    pub fn spread(&self) -> BigDecimal {
        &self.mean - &self.median
    }
}

/// Parses every price, failing on an empty sequence.
fn prices<'t, I>(tickets: I) -> Result<Vec<BigDecimal>>
where
    I: IntoIterator<Item = &'t Ticket>,
{
    let prices = tickets
        .into_iter()
        .map(Ticket::price_value)
        .collect::<Result<Vec<_>>>()?;
    if prices.is_empty() {
        return Err(FarelineError::EmptyInput);
    }
    Ok(prices)
}

/// Averages two prices, rounding toward positive infinity at their scale.
fn midpoint(lower: &BigDecimal, upper: &BigDecimal) -> BigDecimal {
    let scale = scale_of(lower).max(scale_of(upper));
    divide(&(lower + upper), 2, scale, Rounding::Ceiling)
}

/// Rounding applied to a quotient that does not fit its target scale.
#[derive(Debug, Clone, Copy)]
enum Rounding {
    /// Nearest, ties away from zero.
    HalfUp,
    /// Toward positive infinity.
    Ceiling,
}

/// Number of digits after the decimal point; negative for exponent forms.
fn scale_of(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

fn pow10(exponent: i64) -> BigInt {
    BigInt::from(10u32).pow(exponent.unsigned_abs() as u32)
}

/// Divides `value` by `divisor` exactly, rounding the quotient to `scale`.
///
/// Works on the unscaled integers, so the result does not depend on any
/// intermediate division precision.
fn divide(value: &BigDecimal, divisor: usize, scale: i64, rounding: Rounding) -> BigDecimal {
    let (mut numerator, exponent) = value.as_bigint_and_exponent();
    let mut denominator = BigInt::from(divisor);

    // value / divisor * 10^scale == numerator / denominator
    let shift = scale - exponent;
    if shift >= 0 {
        numerator *= pow10(shift);
    } else {
        denominator *= pow10(shift);
    }

    let quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    let step = match rounding {
        Rounding::HalfUp if (&remainder * 2u32).magnitude() >= denominator.magnitude() => {
            if remainder.sign() == Sign::Minus { -1 } else { 1 }
        }
        Rounding::Ceiling if remainder.sign() == Sign::Plus => 1,
        _ => 0,
    };
    BigDecimal::new(quotient + step, scale)
}
