// ABOUTME: Built-in recipe table
// ABOUTME: Tag strings are parsed into diet tiers or conditions when the catalog is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use super::{Heating, Recipe, RecipeTag};

pub(super) struct HeatingRow {
    oven: Option<&'static str>,
    airfryer: Option<&'static str>,
    microwave: Option<&'static str>,
}

pub(super) struct RecipeRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    heating: Option<HeatingRow>,
    tags: &'static [&'static str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl RecipeRow {
    pub(super) fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            ingredients: owned(self.ingredients),
            steps: owned(self.steps),
            heating: self.heating.as_ref().map(|heating| Heating {
                oven: heating.oven.map(str::to_owned),
                airfryer: heating.airfryer.map(str::to_owned),
                microwave: heating.microwave.map(str::to_owned),
            }),
            tags: self.tags.iter().map(|tag| RecipeTag::from_tag(tag)).collect(),
        }
    }
}

pub(super) const RECIPES: [RecipeRow; 5] = [
    RecipeRow {
        id: "salmao-quinoa",
        title: "Salmão grelhado com quinoa e aspargos",
        description: "Prato rico em ômega-3 e proteínas magras, adequado para controle glicêmico e saúde cardíaca.",
        ingredients: &[
            "150g de salmão",
            "1/2 xícara de quinoa cozida",
            "aspargos a gosto",
            "azeite, sal e limão",
        ],
        steps: &[
            "Tempere o salmão com sal, pimenta e suco de limão.",
            "Grelhe o salmão em frigideira antiaderente por 3-4 minutos de cada lado.",
            "Cozinhe a quinoa conforme instruções da embalagem.",
            "Grelhe os aspargos com um fio de azeite e sirva com o salmão e a quinoa.",
        ],
        heating: Some(HeatingRow {
            oven: Some("Forno 180°C por 12-15 minutos (opcional)"),
            airfryer: Some("Airfryer 180°C por 10-12 minutos"),
            microwave: None,
        }),
        tags: &["Doença cardíaca", "Diabetes", "maintenance"],
    },
    RecipeRow {
        id: "frango-batata-doce",
        title: "Peito de frango grelhado com batata-doce",
        description: "Opção prática e balanceada, boa para ganho de massa ou manutenção com baixo índice glicêmico.",
        ingredients: &[
            "150g peito de frango",
            "1 batata-doce média",
            "sal, ervas finas, azeite",
        ],
        steps: &[
            "Tempere o frango com sal e ervas. Grelhe até dourar.",
            "Corte a batata-doce em cubos e asse ou cozinhe até ficar macia.",
            "Sirva o frango com a batata-doce e salada verde.",
        ],
        heating: Some(HeatingRow {
            oven: Some("Forno 200°C por 25-30 minutos (batata-doce)"),
            airfryer: None,
            microwave: Some("Micro-ondas: 6-8 minutos para a batata"),
        }),
        tags: &["gain", "Diabetes"],
    },
    RecipeRow {
        id: "sopa-legumes",
        title: "Sopa leve de legumes",
        description: "Sopa nutritiva, de fácil digestão e indicada para quem precisa de refeições leves (p.ex. doença renal com adaptações).",
        ingredients: &[
            "Legumes variados (abóbora, cenoura, chuchu)",
            "temperos a gosto",
            "caldo leve sem sal",
        ],
        steps: &[
            "Corte os legumes em cubos e cozinhe em água com caldo leve até ficarem macios.",
            "Bata parcialmente no liquidificador para obter textura cremosa (opcional).",
            "Ajuste temperos e sirva quente.",
        ],
        heating: None,
        tags: &["Doença renal", "Asma", "maintenance"],
    },
    RecipeRow {
        id: "omelete-legumes",
        title: "Omelete de legumes",
        description: "Rápida, rica em proteína e adaptável. Boa para manhãs e recuperação pós-treino.",
        ingredients: &["2 ovos", "espinafre, tomate, cebola", "sal e pimenta a gosto"],
        steps: &[
            "Bata os ovos e misture os legumes picados.",
            "Cozinhe em frigideira antiaderente até firmar.",
            "Sirva quente.",
        ],
        heating: Some(HeatingRow {
            oven: None,
            airfryer: None,
            microwave: Some("2-3 minutos dependendo do aparelho"),
        }),
        tags: &["gain", "maintenance", "Diabetes"],
    },
    RecipeRow {
        id: "salada-graos",
        title: "Salada de grãos e legumes",
        description: "Refrescante e rica em fibras — boa para controle glicêmico e hipertensão (sem sal).",
        ingredients: &[
            "Quinoa ou grão de sua preferência",
            "legumes variados",
            "azeite, limão, ervas",
        ],
        steps: &[
            "Cozinhe os grãos conforme instruções.",
            "Misture com legumes picados e tempere com azeite e limão.",
            "Sirva frio ou à temperatura ambiente.",
        ],
        heating: None,
        tags: &["Hipertensão", "Diabetes", "maintenance"],
    },
];
