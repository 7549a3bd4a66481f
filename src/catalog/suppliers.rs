use crate::models::{PriceTier, Supplier};

/// Nearby wholesale suppliers shown alongside a plan.
pub static SUPPLIERS: &[Supplier] = &[
    Supplier {
        id: 1,
        name: "Fresh Valley Vegetables",
        category: "Vegetables & Fruits",
        rating: 4.8,
        distance_km: 1.2,
        delivery_time: "30-45 min",
        phone: "+91 98765 43210",
        specialties: &["Potatoes", "Onions", "Tomatoes", "Green Peas"],
        price_tier: PriceTier::Moderate,
    },
    Supplier {
        id: 2,
        name: "Grain Masters",
        category: "Grains & Pulses",
        rating: 4.6,
        distance_km: 2.1,
        delivery_time: "45-60 min",
        phone: "+91 98765 43211",
        specialties: &["Rice", "Urad Dal", "Chickpeas", "Maida Flour"],
        price_tier: PriceTier::Budget,
    },
    Supplier {
        id: 3,
        name: "Spice Garden",
        category: "Spices & Condiments",
        rating: 4.9,
        distance_km: 0.8,
        delivery_time: "20-30 min",
        phone: "+91 98765 43212",
        specialties: &["Garam Masala", "Cumin Seeds", "Black Salt", "Chutneys"],
        price_tier: PriceTier::Premium,
    },
    Supplier {
        id: 4,
        name: "Golden Oil Suppliers",
        category: "Oil & Dairy",
        rating: 4.5,
        distance_km: 1.8,
        delivery_time: "40-50 min",
        phone: "+91 98765 43213",
        specialties: &["Cooking Oil", "Ghee", "Butter"],
        price_tier: PriceTier::Moderate,
    },
    Supplier {
        id: 5,
        name: "City Bakery Wholesale",
        category: "Bakery Items",
        rating: 4.7,
        distance_km: 1.5,
        delivery_time: "35-45 min",
        phone: "+91 98765 43214",
        specialties: &["Pav Bread", "Puri Shells", "Buns"],
        price_tier: PriceTier::Budget,
    },
];

pub fn suppliers() -> &'static [Supplier] {
    SUPPLIERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_shape() {
        assert_eq!(suppliers().len(), 5);
        let ids: Vec<u32> = suppliers().iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert!(suppliers().iter().all(|s| (0.0..=5.0).contains(&s.rating)));
    }
}
