//! Static per-crop parameter table
//!
//! Configuration-as-data: one immutable profile per supported species plus a
//! fallback default, loaded once at first use and never mutated. There is no
//! behavioral variation between crops beyond these parameter values, so a
//! lookup table is used rather than any per-crop dispatch.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{
    CropProfile, DiseaseTrigger, GrowthMilestone, OptimalRange, PestProfile, Season,
};

fn stage(name: &str, days_from_planting: i64) -> GrowthMilestone {
    GrowthMilestone {
        name: name.to_string(),
        days_from_planting,
    }
}

fn disease(name: &str, humidity: f64, temp: f64) -> DiseaseTrigger {
    DiseaseTrigger {
        name: name.to_string(),
        humidity,
        temp,
    }
}

fn pest(name: &str, season: Season, conditions: &str) -> PestProfile {
    PestProfile {
        name: name.to_string(),
        season,
        conditions: conditions.to_string(),
    }
}

static CROP_PROFILES: LazyLock<HashMap<&'static str, CropProfile>> = LazyLock::new(|| {
    let mut profiles = HashMap::new();

    profiles.insert(
        "rice",
        CropProfile {
            optimal_temp: OptimalRange::new(20.0, 35.0),
            optimal_humidity: OptimalRange::new(60.0, 85.0),
            max_rainfall: 30.0,
            growth_days: 120,
            stages: vec![
                stage("Germination", 0),
                stage("Seedling", 15),
                stage("Tillering", 30),
                stage("Stem Elongation", 55),
                stage("Heading", 75),
                stage("Flowering", 90),
                stage("Grain Filling", 100),
                stage("Maturity", 120),
            ],
            diseases: vec![
                disease("Blast", 85.0, 25.0),
                disease("Sheath Blight", 90.0, 30.0),
                disease("Brown Spot", 80.0, 28.0),
            ],
            pests: vec![
                pest("Stem Borer", Season::Monsoon, "humid and warm"),
                pest("Brown Planthopper", Season::Monsoon, "high humidity"),
            ],
        },
    );

    profiles.insert(
        "wheat",
        CropProfile {
            optimal_temp: OptimalRange::new(10.0, 25.0),
            optimal_humidity: OptimalRange::new(40.0, 60.0),
            max_rainfall: 15.0,
            growth_days: 140,
            stages: vec![
                stage("Germination", 0),
                stage("Seedling", 14),
                stage("Tillering", 35),
                stage("Stem Extension", 60),
                stage("Heading", 85),
                stage("Flowering", 100),
                stage("Grain Filling", 120),
                stage("Maturity", 140),
            ],
            diseases: vec![
                disease("Rust", 70.0, 20.0),
                disease("Powdery Mildew", 60.0, 18.0),
                disease("Karnal Bunt", 75.0, 22.0),
            ],
            pests: vec![
                pest("Aphids", Season::Winter, "cool and dry"),
                pest("Termites", Season::All, "dry soil"),
            ],
        },
    );

    profiles.insert(
        "tomato",
        CropProfile {
            optimal_temp: OptimalRange::new(18.0, 30.0),
            optimal_humidity: OptimalRange::new(50.0, 70.0),
            max_rainfall: 10.0,
            growth_days: 90,
            stages: vec![
                stage("Germination", 0),
                stage("Seedling", 14),
                stage("Vegetative", 30),
                stage("Flowering", 45),
                stage("Fruiting", 60),
                stage("Harvesting", 75),
                stage("Maturity", 90),
            ],
            diseases: vec![
                disease("Early Blight", 75.0, 25.0),
                disease("Late Blight", 90.0, 20.0),
                disease("Leaf Curl Virus", 60.0, 30.0),
            ],
            pests: vec![
                pest("Whitefly", Season::Summer, "hot and dry"),
                pest("Fruit Borer", Season::Monsoon, "humid"),
            ],
        },
    );

    profiles.insert(
        "potato",
        CropProfile {
            optimal_temp: OptimalRange::new(15.0, 25.0),
            optimal_humidity: OptimalRange::new(60.0, 80.0),
            max_rainfall: 15.0,
            growth_days: 100,
            stages: vec![
                stage("Sprouting", 0),
                stage("Vegetative Growth", 20),
                stage("Tuber Initiation", 40),
                stage("Tuber Bulking", 60),
                stage("Maturity", 90),
                stage("Harvest", 100),
            ],
            diseases: vec![
                disease("Late Blight", 90.0, 18.0),
                disease("Early Blight", 70.0, 25.0),
            ],
            pests: vec![
                pest("Potato Tuber Moth", Season::Summer, "warm"),
                pest("Aphids", Season::All, "moderate humidity"),
            ],
        },
    );

    profiles.insert(
        "cotton",
        CropProfile {
            optimal_temp: OptimalRange::new(22.0, 35.0),
            optimal_humidity: OptimalRange::new(50.0, 70.0),
            max_rainfall: 25.0,
            growth_days: 160,
            stages: vec![
                stage("Germination", 0),
                stage("Seedling", 20),
                stage("Square Formation", 45),
                stage("Flowering", 70),
                stage("Boll Development", 100),
                stage("Boll Opening", 140),
                stage("Harvest", 160),
            ],
            diseases: vec![
                disease("Bacterial Blight", 80.0, 30.0),
                disease("Grey Mildew", 85.0, 25.0),
            ],
            pests: vec![
                pest("Bollworm", Season::Monsoon, "humid and warm"),
                pest("Whitefly", Season::Summer, "hot and dry"),
            ],
        },
    );

    profiles.insert(
        "maize",
        CropProfile {
            optimal_temp: OptimalRange::new(21.0, 32.0),
            optimal_humidity: OptimalRange::new(50.0, 75.0),
            max_rainfall: 20.0,
            growth_days: 110,
            stages: vec![
                stage("Germination", 0),
                stage("Seedling", 14),
                stage("Vegetative", 35),
                stage("Tasseling", 55),
                stage("Silking", 65),
                stage("Grain Filling", 85),
                stage("Maturity", 110),
            ],
            diseases: vec![
                disease("Turcicum Leaf Blight", 80.0, 25.0),
                disease("Downy Mildew", 90.0, 22.0),
            ],
            pests: vec![
                pest("Fall Armyworm", Season::Monsoon, "warm and humid"),
                pest("Stem Borer", Season::All, "moderate"),
            ],
        },
    );

    profiles
});

/// Fallback profile for species without an explicit entry
static DEFAULT_PROFILE: LazyLock<CropProfile> = LazyLock::new(|| CropProfile {
    optimal_temp: OptimalRange::new(18.0, 30.0),
    optimal_humidity: OptimalRange::new(50.0, 75.0),
    max_rainfall: 20.0,
    growth_days: 100,
    stages: vec![
        stage("Germination", 0),
        stage("Seedling", 15),
        stage("Vegetative", 30),
        stage("Flowering", 50),
        stage("Fruiting", 70),
        stage("Maturity", 100),
    ],
    diseases: vec![
        disease("Fungal Infection", 80.0, 25.0),
        disease("Bacterial Wilt", 75.0, 28.0),
    ],
    pests: vec![pest("General Pests", Season::All, "various")],
});

/// Resolve a crop name to its profile.
///
/// Lookup is case-insensitive and ignores surrounding whitespace; unknown
/// species resolve to the default profile. Total function, never fails.
pub fn profile_for(crop_name: &str) -> &'static CropProfile {
    let key = crop_name.trim().to_lowercase();
    CROP_PROFILES.get(key.as_str()).unwrap_or(&DEFAULT_PROFILE)
}

/// Names of explicitly parameterized crop species
pub fn known_crops() -> Vec<&'static str> {
    let mut crops: Vec<_> = CROP_PROFILES.keys().copied().collect();
    crops.sort_unstable();
    crops
}
