use std::fmt;

/// Relative price band of a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Budget,
    Moderate,
    Premium,
}

impl PriceTier {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceTier::Budget => "₹",
            PriceTier::Moderate => "₹₹",
            PriceTier::Premium => "₹₹₹",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// A nearby wholesale supplier. Display only.
#[derive(Debug, Clone, Copy)]
pub struct Supplier {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f64,
    pub distance_km: f64,
    pub delivery_time: &'static str,
    pub phone: &'static str,
    pub specialties: &'static [&'static str],
    pub price_tier: PriceTier,
}
