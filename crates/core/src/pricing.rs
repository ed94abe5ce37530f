use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::product::{Product, ProductId};

/// Time source for the pricing factors. Injected so pricing stays a pure
/// function of (product, instant); the engine never reads ambient time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The only impl that touches the real clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A pinned instant, for reproducible pricing runs and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Result of a pricing evaluation. `factor` is the clamped net factor that
/// was actually applied, not the raw sum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceAdjustment {
    pub adjusted: Decimal,
    pub factor: Decimal,
}

pub trait PricingEngine {
    fn price_for(&self, product: &Product, clock: &dyn Clock) -> PriceAdjustment;
}

/// Multi-factor dynamic pricing: category uplift, rating step, time-of-week
/// swing and a deterministic demand spike, summed and clamped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicPricingEngine;

impl PricingEngine for DynamicPricingEngine {
    fn price_for(&self, product: &Product, clock: &dyn Clock) -> PriceAdjustment {
        price_for(product, clock)
    }
}

pub fn price_for(product: &Product, clock: &dyn Clock) -> PriceAdjustment {
    let now = clock.now();
    let hour = now.hour();

    let raw = category_factor(&product.category)
        + rating_factor(product.rating_or_zero())
        + time_factor(now.weekday(), hour)
        + demand_spike(&product.id, hour);
    let factor = raw.clamp(Decimal::new(-15, 2), Decimal::new(20, 2));
    if factor != raw {
        tracing::debug!(product = %product.id, %raw, %factor, "pricing factor clamped");
    }

    let adjusted = (product.price * (Decimal::ONE + factor))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    PriceAdjustment { adjusted, factor }
}

/// Fixed per-category uplift. Categories outside the table contribute
/// nothing.
fn category_factor(category: &str) -> Decimal {
    match category {
        "electronics" => Decimal::new(6, 2),
        "men's clothing" => Decimal::new(2, 2),
        "women's clothing" => Decimal::new(3, 2),
        "jewelery" => Decimal::new(1, 2),
        _ => Decimal::ZERO,
    }
}

fn rating_factor(rating: f64) -> Decimal {
    if rating >= 4.7 {
        Decimal::new(5, 2)
    } else if rating >= 4.3 {
        Decimal::new(3, 2)
    } else if rating >= 4.0 {
        Decimal::new(1, 2)
    } else {
        Decimal::ZERO
    }
}

/// Weekend uplift and weekday-afternoon dip. The two rules are independent
/// but mutually exclusive by construction.
fn time_factor(weekday: Weekday, hour: u32) -> Decimal {
    let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);

    let mut factor = Decimal::ZERO;
    if weekend {
        factor += Decimal::new(4, 2);
    }
    if !weekend && (14..16).contains(&hour) {
        factor -= Decimal::new(5, 2);
    }
    factor
}

/// Deterministic pseudo-random nudge simulating demand variability: the id's
/// digits plus the hour, mod 7, indexed into a fixed table.
fn demand_spike(id: &ProductId, hour: u32) -> Decimal {
    let seed = ((id.numeric_portion() + u64::from(hour)) % 7) as usize;
    let table = [
        Decimal::ZERO,
        Decimal::new(1, 2),
        Decimal::new(2, 2),
        Decimal::new(3, 2),
        Decimal::new(-1, 2),
        Decimal::new(15, 3),
        Decimal::ZERO,
    ];
    table[seed]
}
