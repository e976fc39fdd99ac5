/// A feature restricted to a fixed set of labels. A label's code is its position in `labels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalFeature {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

impl CategoricalFeature {
    /// Looks up the code of `label`. Matching is exact and case sensitive.
    pub fn code(&self, label: &str) -> Option<u8> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .map(|i| i as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericFeature {
    pub name: &'static str,
    pub prompt: &'static str,
}

/// Categorical features in the order they are asked for.
pub const CATEGORICAL_FEATURES: [CategoricalFeature; 11] = [
    CategoricalFeature {
        name: "equipment_type",
        labels: &["Harvester", "Tractor", "Plow", "Seeder"],
    },
    CategoricalFeature {
        name: "equipment_name",
        labels: &["Model A", "Model B", "Model C", "Model D"],
    },
    CategoricalFeature {
        name: "brand",
        labels: &["Brand X", "Brand Y", "Brand Z"],
    },
    CategoricalFeature {
        name: "condition",
        labels: &["Excellent", "Good", "Fair"],
    },
    CategoricalFeature {
        name: "usage_frequency",
        labels: &["Daily", "Weekly", "Monthly"],
    },
    CategoricalFeature {
        name: "fuel_type",
        labels: &["Diesel", "Gasoline", "Electric"],
    },
    CategoricalFeature {
        name: "location",
        labels: &["Urban", "Suburban", "Rural"],
    },
    CategoricalFeature {
        name: "demand_level",
        labels: &["High", "Medium", "Low"],
    },
    CategoricalFeature {
        name: "rental_duration_preference",
        labels: &["Short-term", "Medium-term", "Long-term"],
    },
    CategoricalFeature {
        name: "technology_level",
        labels: &["Basic", "Advanced", "Premium"],
    },
    CategoricalFeature {
        name: "weather_dependency",
        labels: &["Low", "Medium", "High"],
    },
];

// NOTE: the prompts suggest ranges but nothing enforces them.
pub const NUMERIC_FEATURES: [NumericFeature; 5] = [
    NumericFeature {
        name: "age",
        prompt: "Enter equipment age (years)",
    },
    NumericFeature {
        name: "horsepower",
        prompt: "Enter horsepower",
    },
    NumericFeature {
        name: "maintenance_score",
        prompt: "Enter maintenance score (0-10)",
    },
    NumericFeature {
        name: "fuel_efficiency",
        prompt: "Enter fuel efficiency score (0-10)",
    },
    NumericFeature {
        name: "seasonal_demand_multiplier",
        prompt: "Enter seasonal demand multiplier (0.5-2.0)",
    },
];

/// Returns the categorical mapping table.
pub fn mappings() -> &'static [CategoricalFeature] {
    &CATEGORICAL_FEATURES
}
