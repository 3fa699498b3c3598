// ABOUTME: Exercise-tier selection from free-text activity profiles via ordered keyword rules
// ABOUTME: Static exercise plans (intensity, duration, focus, base week) for each tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Exercise intensity bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseTier {
    /// Habit-building plan
    #[default]
    Sedentary,
    /// Maintenance and conditioning
    Active,
    /// Strength and hypertrophy
    Fitness,
    /// Amateur athlete performance
    AmateurAthlete,
    /// Competitive performance
    HighPerformanceAthlete,
}

/// Activity name and details
pub type ActivityRow = (&'static str, &'static str);

/// Static exercise plan of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTierPlan {
    /// Plan name
    pub name: &'static str,
    /// Who the plan is for
    pub description: &'static str,
    /// Intensity label
    pub intensity: &'static str,
    /// Daily duration
    pub duration: &'static str,
    /// Training focus
    pub focus: &'static str,
    /// Activities per day, Monday first
    pub week: [&'static [ActivityRow]; 7],
}

const SEDENTARY_PLAN: ExerciseTierPlan = ExerciseTierPlan {
    name: "Sedentário",
    description: "Plano leve para criar hábito e melhorar a saúde geral",
    intensity: "Baixa",
    duration: "20-30 min/dia",
    focus: "Saúde geral e mobilidade",
    week: [
        &[
            ("Caminhada leve", "30 minutos em ritmo confortável"),
            ("Alongamento básico", "10 minutos focando em grandes grupos musculares"),
        ],
        &[("Yoga iniciante", "20 minutos de posturas básicas e respiração")],
        &[("Caminhada moderada", "30 minutos com pequenas variações de ritmo")],
        &[("Alongamento ativo", "15 minutos com foco em respiração e postura")],
        &[("Bicicleta leve", "20 minutos em terreno plano")],
        &[("Caminhada social", "30 minutos com acompanhante para motivação")],
        &[("Descanso ativo", "Alongamento leve ou passeio ao ar livre")],
    ],
};

const ACTIVE_PLAN: ExerciseTierPlan = ExerciseTierPlan {
    name: "Ativo",
    description: "Plano para quem já pratica atividades e quer manter o ritmo",
    intensity: "Moderada",
    duration: "30-45 min/dia",
    focus: "Manutenção e condicionamento",
    week: [
        &[
            ("Corrida moderada", "40 minutos em ritmo constante (70% FCmax)"),
            ("Abdominais básicos", "3 séries de 15 repetições com descanso de 30s"),
        ],
        &[(
            "Treino funcional",
            "Circuito com agachamento, flexão, prancha e polichinelo (3 rounds)",
        )],
        &[("Bicicleta intervalada", "40 minutos alternando 2min forte / 2min leve")],
        &[("Natação recreativa", "30 minutos alternando estilos livre e costas")],
        &[("Caminhada rápida", "40 minutos mantendo passos acelerados")],
        &[("Alongamento dinâmico", "15 minutos focando em flexibilidade e mobilidade")],
        &[("Descanso ativo", "Passeio de bicicleta ou caminhada leve")],
    ],
};

const FITNESS_PLAN: ExerciseTierPlan = ExerciseTierPlan {
    name: "Fitness",
    description: "Plano para quem busca evolução física e definição muscular",
    intensity: "Alta",
    duration: "45-60 min/dia",
    focus: "Força e hipertrofia",
    week: [
        &[
            ("Musculação - Superior", "Supino, remada, desenvolvimento (4x10)"),
            ("Cardio leve", "20 minutos de corrida ou bike (60% FCmax)"),
        ],
        &[("Musculação - Inferior", "Agachamento, leg press, stiff (4x10)")],
        &[("HIIT", "20 minutos de sprints (30s/30s)")],
        &[("Musculação - Core", "Prancha, abdominal, oblíquos (4x15)")],
        &[("Funcional avançado", "Circuito multiarticular com peso corporal")],
        &[("Alongamento profundo", "20 minutos focando em recuperação muscular")],
        &[("Descanso total", "Recuperação, hidratação e alimentação balanceada")],
    ],
};

const AMATEUR_ATHLETE_PLAN: ExerciseTierPlan = ExerciseTierPlan {
    name: "Atleta Amador",
    description: "Plano para atletas amadores que buscam performance",
    intensity: "Muito alta",
    duration: "60-90 min/dia",
    focus: "Performance e resistência",
    week: [
        &[
            ("Treino de força", "Supino, agachamento, levantamento terra (4x8-10)"),
            ("HIIT", "20 minutos de sprints (400m com trote de recuperação)"),
        ],
        &[("Corrida longa", "60 minutos em ritmo forte (80% FCmax)")],
        &[("Funcional avançado", "Circuito multiarticular com carga")],
        &[("Natação técnica", "45 minutos alternando estilos com foco em técnica")],
        &[("Musculação - Resistência", "Séries com mais repetições e menos descanso")],
        &[("Alongamento dinâmico", "20 minutos focando em flexibilidade")],
        &[("Descanso ativo", "Caminhada leve ou pedal recreativo")],
    ],
};

const HIGH_PERFORMANCE_PLAN: ExerciseTierPlan = ExerciseTierPlan {
    name: "Atleta de Alto Rendimento",
    description: "Plano avançado para atletas de alta performance",
    intensity: "Máxima",
    duration: "90-120 min/dia",
    focus: "Performance competitiva",
    week: [
        &[
            ("Força máxima", "Exercícios compostos com cargas elevadas (5x5)"),
            ("Pliometria", "Saltos e exercícios de explosão muscular"),
        ],
        &[("Corrida intervalada", "Sprints de 400m com recuperação ativa")],
        &[("Treino técnico", "Movimentos específicos do esporte principal")],
        &[("Natação intensa", "Séries de tiros e trabalho de resistência")],
        &[("Musculação - Potência", "Exercícios focados em explosão e velocidade")],
        &[("Funcional avançado", "Circuito de alta intensidade com cargas")],
        &[("Recuperação ativa", "Massagem, alongamento profundo e hidroterapia")],
    ],
};

impl ExerciseTier {
    /// Every tier, lightest first
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Active,
        Self::Fitness,
        Self::AmateurAthlete,
        Self::HighPerformanceAthlete,
    ];

    /// Static plan of the tier
    #[must_use]
    pub const fn plan(self) -> &'static ExerciseTierPlan {
        match self {
            Self::Sedentary => &SEDENTARY_PLAN,
            Self::Active => &ACTIVE_PLAN,
            Self::Fitness => &FITNESS_PLAN,
            Self::AmateurAthlete => &AMATEUR_ATHLETE_PLAN,
            Self::HighPerformanceAthlete => &HIGH_PERFORMANCE_PLAN,
        }
    }
}

impl fmt::Display for ExerciseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plan().name)
    }
}

/// Keywords that select a tier when found in the activity profile
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTierRule {
    /// Lower-case substrings to look for
    pub keywords: &'static [&'static str],
    /// Tier chosen on a match
    pub tier: ExerciseTier,
}

/// Ordered keyword rules
///
/// Negated forms come first since "inativo" contains "ativo". Amateur comes before
/// high performance because both profiles contain "atleta".
pub const EXERCISE_TIER_RULES: [ExerciseTierRule; 5] = [
    ExerciseTierRule {
        keywords: &["inativo", "inactive", "sedentar"],
        tier: ExerciseTier::Sedentary,
    },
    ExerciseTierRule {
        keywords: &["amador", "amateur"],
        tier: ExerciseTier::AmateurAthlete,
    },
    ExerciseTierRule {
        keywords: &["rendimento", "high_performance", "high-performance"],
        tier: ExerciseTier::HighPerformanceAthlete,
    },
    ExerciseTierRule {
        keywords: &["ativo", "active"],
        tier: ExerciseTier::Active,
    },
    ExerciseTierRule {
        keywords: &["fitness"],
        tier: ExerciseTier::Fitness,
    },
];

/// Select the exercise tier for a free-text activity profile
///
/// Matching is a case-insensitive substring search; no match means sedentary.
#[must_use]
pub fn select_exercise_tier(activity_profile: &str) -> ExerciseTier {
    let normalized = activity_profile.to_lowercase();
    let tier = EXERCISE_TIER_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map_or(ExerciseTier::Sedentary, |rule| rule.tier);
    debug!(activity_profile, ?tier, "Selected exercise tier");
    tier
}
