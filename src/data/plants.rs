use crate::models::plant::{Plant, PlantCategory, SunRequirement};

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    scientific_name: &str,
    spacing_in: u32,
    harvest_weeks: u32,
    sun: SunRequirement,
    category: PlantCategory,
    zones: &[u8],
    description: &str,
) -> Plant {
    Plant {
        id: id.into(),
        name: name.into(),
        scientific_name: scientific_name.into(),
        start_indoors: None,
        transplant_outdoors: None,
        direct_sow: None,
        harvest_weeks,
        spacing_in,
        sun,
        description: description.into(),
        category,
        zones: zones.to_vec(),
    }
}

/// Built-in catalog, in display order.
pub fn get_all_plants() -> Vec<Plant> {
    vec![
        Plant {
            start_indoors: Some("February-March".into()),
            transplant_outdoors: Some("April-May".into()),
            ..plant(
                "tomato",
                "Tomato",
                "Solanum lycopersicum",
                24,
                12,
                SunRequirement::Full,
                PlantCategory::Fruiting,
                &[3, 4, 5, 6, 7, 8, 9, 10],
                "Popular garden vegetable, great for beginners. Needs support as it grows.",
            )
        },
        Plant {
            direct_sow: Some("March-September".into()),
            ..plant(
                "lettuce",
                "Lettuce",
                "Lactuca sativa",
                6,
                6,
                SunRequirement::Partial,
                PlantCategory::Leafy,
                &[2, 3, 4, 5, 6, 7, 8, 9, 10],
                "Quick-growing leafy green, can be harvested continuously.",
            )
        },
        Plant {
            direct_sow: Some("April-July".into()),
            ..plant(
                "carrot",
                "Carrot",
                "Daucus carota",
                3,
                10,
                SunRequirement::Full,
                PlantCategory::Root,
                &[3, 4, 5, 6, 7, 8, 9],
                "Root vegetable that prefers loose, well-draining soil.",
            )
        },
        Plant {
            start_indoors: Some("February-March".into()),
            transplant_outdoors: Some("May-June".into()),
            ..plant(
                "pepper",
                "Pepper",
                "Capsicum annuum",
                18,
                10,
                SunRequirement::Full,
                PlantCategory::Fruiting,
                &[4, 5, 6, 7, 8, 9, 10],
                "Warm-season crop that needs a long, hot summer to ripen.",
            )
        },
        Plant {
            start_indoors: Some("March-April".into()),
            transplant_outdoors: Some("May-June".into()),
            ..plant(
                "basil",
                "Basil",
                "Ocimum basilicum",
                12,
                8,
                SunRequirement::Full,
                PlantCategory::Herb,
                &[4, 5, 6, 7, 8, 9, 10],
                "Fragrant herb, pinch flower buds to keep leaves coming.",
            )
        },
        Plant {
            direct_sow: Some("March-May".into()),
            ..plant(
                "radish",
                "Radish",
                "Raphanus sativus",
                2,
                4,
                SunRequirement::Partial,
                PlantCategory::Root,
                &[2, 3, 4, 5, 6, 7, 8, 9, 10],
                "Fast root crop, ready a month after sowing.",
            )
        },
        Plant {
            direct_sow: Some("March-April".into()),
            ..plant(
                "spinach",
                "Spinach",
                "Spinacia oleracea",
                4,
                6,
                SunRequirement::Shade,
                PlantCategory::Leafy,
                &[2, 3, 4, 5, 6, 7, 8, 9],
                "Cool-season green that tolerates shade and bolts in heat.",
            )
        },
    ]
}

pub fn get_plant_by_id(id: &str) -> Option<Plant> {
    get_all_plants().into_iter().find(|p| p.id == id)
}
