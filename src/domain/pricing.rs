use crate::domain::catalog::{TYPE_GAMING, TYPE_WORKSTATION};
use crate::domain::laptop::LaptopSpec;
use std::str::FromStr;

/// Output category from thresholding the model probability at 0.5.
/// Exactly 0.5 falls into the Economy branch; `> 0.5` is the sole
/// premium condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    Premium,
    Economy,
}

impl PriceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::Premium => "Premium",
            PriceCategory::Economy => "Economy",
        }
    }
}

/// One resolved estimate. Ephemeral, recomputed per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub category: PriceCategory,
    pub price_idr: f64,
    /// Effective probability after any dampening.
    pub probability: f64,
    /// Displayed confidence: probability if Premium, 1 - probability otherwise.
    pub confidence: f64,
}

const IDR_PER_THOUSAND_USD: f64 = 17_000.0;
const BASE_THOUSANDS_USD: f64 = 1_000.0;

/// Maps the model probability to a Rupiah price.
///
/// The two policies come from the two deployed pricing schemes; they are kept
/// as separate named variants instead of being merged, because their scales
/// are not reconcilable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingPolicy {
    /// USD-thousands base price converted at a fixed 17,000 IDR rate.
    ExchangeRatePegged,
    /// Direct Rupiah brackets.
    DirectRupiah,
}

impl FromStr for PricingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pegged" => Ok(PricingPolicy::ExchangeRatePegged),
            "direct" => Ok(PricingPolicy::DirectRupiah),
            _ => anyhow::bail!("Invalid PRICING_POLICY: {}. Must be 'pegged' or 'direct'", s),
        }
    }
}

impl PricingPolicy {
    /// Resolve a probability into category, price and displayed confidence.
    pub fn resolve(&self, prob: f64) -> Estimate {
        let premium = prob > 0.5;
        let price_idr = match (self, premium) {
            (PricingPolicy::ExchangeRatePegged, true) => {
                (BASE_THOUSANDS_USD + prob * 1_300.0) * IDR_PER_THOUSAND_USD
            }
            (PricingPolicy::ExchangeRatePegged, false) => {
                (BASE_THOUSANDS_USD - (1.0 - prob) * 600.0) * IDR_PER_THOUSAND_USD
            }
            (PricingPolicy::DirectRupiah, true) => 15_000_000.0 + prob * 15_000_000.0,
            (PricingPolicy::DirectRupiah, false) => 4_000_000.0 + prob * 6_000_000.0,
        };

        let category = if premium {
            PriceCategory::Premium
        } else {
            PriceCategory::Economy
        };
        let confidence = if premium { prob } else { 1.0 - prob };

        Estimate {
            category,
            price_idr,
            probability: prob,
            confidence,
        }
    }

    /// Dampening arming when the config leaves it unset: the direct-Rupiah
    /// brackets were tuned with the dampening in place, the pegged ones
    /// without it.
    pub fn default_dampening(&self) -> bool {
        matches!(self, PricingPolicy::DirectRupiah)
    }
}

/// Probability dampening for low-spec machines.
///
/// Scales the model probability down for laptops with little RAM that are
/// neither gaming nor workstation builds, pushing them toward the economy
/// bracket before classification. Kept as an explicit policy so it can be
/// toggled and audited independently of the inference path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowSpecDampening {
    pub ram_ceiling_gb: f64,
    pub factor: f64,
}

impl Default for LowSpecDampening {
    fn default() -> Self {
        Self {
            ram_ceiling_gb: 4.0,
            factor: 0.4,
        }
    }
}

impl LowSpecDampening {
    pub fn applies(&self, spec: &LaptopSpec) -> bool {
        spec.ram_gb <= self.ram_ceiling_gb
            && spec.type_code != TYPE_GAMING
            && spec.type_code != TYPE_WORKSTATION
    }

    pub fn apply(&self, spec: &LaptopSpec, prob: f64) -> f64 {
        if self.applies(spec) {
            prob * self.factor
        } else {
            prob
        }
    }
}

/// Format a Rupiah amount for display, e.g. "Rp 5,440,000".
pub fn format_idr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}
