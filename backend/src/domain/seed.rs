//! Static catalogue contents loaded at start-up.
//!
//! Seed plants use the ids `"1"` to `"5"`. Seed comments are dated relative
//! to the start-up instant so that comments added later always sort first.

use chrono::{DateTime, TimeDelta, Utc};

use super::{Comment, CommentId, Plant, PlantId};

struct SeedPlant {
    id: &'static str,
    name: &'static str,
    scientific_name: &'static str,
    description: &'static str,
    location: &'static [&'static str],
    climate: &'static str,
    season: &'static str,
    uses: &'static [&'static str],
    image_url: &'static str,
}

const SEED_PLANTS: &[SeedPlant] = &[
    SeedPlant {
        id: "1",
        name: "Muña",
        scientific_name: "Minthostachys mollis",
        description: "Arbusto aromático de hojas pequeñas, usado en infusiones digestivas.",
        location: &["Andes", "Costa"],
        climate: "Frío",
        season: "Todo el año",
        uses: &["medicinal", "ornamental"],
        image_url: "/images/plantas/muna.jpg",
    },
    SeedPlant {
        id: "2",
        name: "Uña de gato",
        scientific_name: "Uncaria tomentosa",
        description: "Liana trepadora de la selva cuya corteza se prepara en cocimiento.",
        location: &["Amazonía", "Selva"],
        climate: "Tropical",
        season: "Todo el año",
        uses: &["medicinal"],
        image_url: "/images/plantas/una-de-gato.jpg",
    },
    SeedPlant {
        id: "3",
        name: "Maca",
        scientific_name: "Lepidium meyenii",
        description: "Raíz altoandina consumida como alimento energético.",
        location: &["Andes", "Sierra"],
        climate: "Frío",
        season: "Invierno",
        uses: &["culinario", "medicinal"],
        image_url: "/images/plantas/maca.jpg",
    },
    SeedPlant {
        id: "4",
        name: "Hierba luisa",
        scientific_name: "Cymbopogon citratus",
        description: "Gramínea de aroma cítrico, común en huertos familiares.",
        location: &["Costa", "Selva", "Sierra"],
        climate: "Cálido",
        season: "Verano",
        uses: &["aromático", "culinario", "medicinal"],
        image_url: "/images/plantas/hierba-luisa.jpg",
    },
    SeedPlant {
        id: "5",
        name: "Molle",
        scientific_name: "Schinus molle",
        description: "Árbol de follaje colgante y frutos rosados, resistente a la sequía.",
        location: &["Sierra", "Costa"],
        climate: "Templado",
        season: "Primavera",
        uses: &["ornamental", "medicinal"],
        image_url: "",
    },
];

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Seed plants, all stamped with `now`.
pub fn seed_plants(now: DateTime<Utc>) -> Vec<Plant> {
    SEED_PLANTS
        .iter()
        .map(|seed| Plant {
            id: PlantId::new(seed.id),
            name: seed.name.to_owned(),
            scientific_name: Some(seed.scientific_name.to_owned()),
            description: seed.description.to_owned(),
            location: tags(seed.location),
            climate: seed.climate.to_owned(),
            season: seed.season.to_owned(),
            uses: tags(seed.uses),
            image_url: seed.image_url.to_owned(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// Seed comments on plant `"1"`, dated two hours and thirty minutes before
/// `now`.
pub fn seed_comments(now: DateTime<Utc>) -> Vec<Comment> {
    vec![
        Comment {
            id: CommentId::new("c1"),
            plant_id: PlantId::new("1"),
            user_id: "user1".to_owned(),
            user_name: "Elena M.".to_owned(),
            text: "Muy útil esta información, gracias!".to_owned(),
            created_at: now - TimeDelta::hours(2),
        },
        Comment {
            id: CommentId::new("c2"),
            plant_id: PlantId::new("1"),
            user_id: "admin1".to_owned(),
            user_name: "Admin Flores".to_owned(),
            text: "Recuerden consultar a un especialista antes de usar cualquier planta \
                   medicinal."
                .to_owned(),
            created_at: now - TimeDelta::minutes(30),
        },
    ]
}
