// ABOUTME: Dashboard summary assembled from a profile: metrics, focus cards, condition plans
// ABOUTME: Degrades to a fill-in-your-data prompt when height or weight is unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Dashboard
//!
//! [`build_dashboard`] is the one-call view used by the CLI `dashboard` command. The
//! focus cards bucket BMI at 18.5, 25 and 30, independent of the gendered
//! classification bands.

use serde::Serialize;
use tracing::debug;
use vitality_core::constants::bmi;
use vitality_core::models::Profile;

use crate::config::IntelligenceConfig;
use crate::metrics::{derive_metrics, DerivedMetrics, InsufficientData};
use crate::plans::{comorbidity_guidance, ComorbidityGuidance, PlanCatalog};

/// User-facing health messages
pub mod messages {
    /// Short advisory shown with every plan
    pub const ADVISORY_SHORT: &str =
        "Consulte um profissional de saúde antes de mudanças significativas.";
    /// Advisory shown when conditions are present
    pub const ADVISORY_LONG: &str = "Se você possui comorbidades ou condições crônicas, procure um médico ou nutricionista antes de iniciar\nmudanças relevantes na dieta ou em programas de exercícios. As recomendações apresentadas aqui são informativas e não substituem\navaliação clínica.";
    /// Closing recommendation
    pub const CONSULT_PROFESSIONAL: &str =
        "Recomendamos buscar orientação de um profissional de saúde para orientações personalizadas.";
    /// Summary line under the condition plans
    pub const CONDITION_RECOMMENDATION: &str =
        "Recomendação: consulte um profissional de saúde para orientações personalizadas.";
    /// Summary when no condition has a plan
    pub const NO_SPECIFIC_PLAN: &str =
        "Nenhum plano específico encontrado para as comorbidades informadas.";
    /// Summary when the user reported no conditions
    pub const NO_CONDITIONS: &str = "Nenhuma comorbidade informada.";
    /// Prompt when metrics cannot be derived
    pub const FILL_IN_PROFILE: &str =
        "Preencha seus dados para receber uma sugestão personalizada.";
}

/// BMI bucket behind the dashboard focus cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusBand {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 to below 25
    Normal,
    /// BMI from 25 to below 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl FocusBand {
    /// Bucket a BMI
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::OVERWEIGHT_ABOVE {
            Self::Normal
        } else if value < bmi::OBESITY_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Nutrition card headline
    #[must_use]
    pub const fn diet_focus(self) -> &'static str {
        match self {
            Self::Underweight => "Ganho",
            Self::Normal => "Manutenção",
            Self::Overweight => "Dieta Leve",
            Self::Obese => "Perda",
        }
    }

    /// Nutrition card text
    #[must_use]
    pub const fn diet_advice(self) -> &'static str {
        match self {
            Self::Underweight => "Sua dieta deve focar em ganho de peso saudável, com aumento gradual de calorias e nutrientes essenciais.",
            Self::Normal => "Mantenha uma dieta balanceada com variedade de nutrientes para sustentar seu peso ideal.",
            Self::Overweight => "Uma dieta com leve déficit calórico pode ajudar a alcançar seus objetivos de saúde.",
            Self::Obese => "Recomenda-se dieta para perda de peso, supervisionada por nutricionista, com foco em saúde metabólica.",
        }
    }

    /// Training card headline
    #[must_use]
    pub const fn exercise_focus(self) -> &'static str {
        match self {
            Self::Underweight => "Força",
            Self::Normal => "Equilíbrio",
            Self::Overweight => "Misto",
            Self::Obese => "Aeróbico",
        }
    }

    /// Training card text
    #[must_use]
    pub const fn exercise_advice(self) -> &'static str {
        match self {
            Self::Underweight => "Foco em treinamento de força para construção muscular, com progressão gradual de carga.",
            Self::Normal => "Combinação equilibrada de exercícios cardiovasculares e treinamento de força para manutenção.",
            Self::Overweight => "Programa misto com ênfase em aeróbicos para condicionamento e força para preservação muscular.",
            Self::Obese => "Priorize exercícios aeróbicos de baixo impacto inicialmente, evoluindo para maior intensidade gradualmente.",
        }
    }
}

/// Nutrition and training focus cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusCards {
    /// BMI bucket the cards come from
    pub band: FocusBand,
    /// Nutrition headline
    pub diet_focus: &'static str,
    /// Nutrition text
    pub diet_advice: &'static str,
    /// Training headline
    pub exercise_focus: &'static str,
    /// Training text
    pub exercise_advice: &'static str,
}

impl From<FocusBand> for FocusCards {
    fn from(band: FocusBand) -> Self {
        Self {
            band,
            diet_focus: band.diet_focus(),
            diet_advice: band.diet_advice(),
            exercise_focus: band.exercise_focus(),
            exercise_advice: band.exercise_advice(),
        }
    }
}

/// Everything the dashboard shows for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Name the dashboard greets
    pub name: String,
    /// Derived metrics, absent when height or weight is unusable
    pub metrics: Option<DerivedMetrics>,
    /// Why metrics are absent
    pub insufficient: Option<InsufficientData>,
    /// Focus cards, absent without metrics
    pub focus: Option<FocusCards>,
    /// Per-condition plan panels
    pub guidance: ComorbidityGuidance,
    /// Integrated condition summary lines
    pub summary: Vec<String>,
    /// Health advisory messages
    pub advisories: Vec<&'static str>,
}

impl Dashboard {
    /// Prompt to show instead of metrics, if any
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        self.insufficient.as_ref().map(|_| messages::FILL_IN_PROFILE)
    }
}

fn summary_lines(profile: &Profile, guidance: &ComorbidityGuidance) -> Vec<String> {
    if !profile.has_comorbidities {
        return vec![messages::NO_CONDITIONS.to_owned()];
    }

    let mut lines: Vec<String> = guidance
        .conditions
        .iter()
        .filter(|condition| condition.plan.is_some())
        .map(|condition| {
            format!(
                "• {}: {} / {}",
                condition.label, condition.diet_title, condition.exercise_title
            )
        })
        .collect();
    if let Some(note) = &guidance.other_note {
        lines.push(format!("• Outros: {note}"));
    }
    if lines.is_empty() {
        lines.push(messages::NO_SPECIFIC_PLAN.to_owned());
    }
    lines.push(messages::CONDITION_RECOMMENDATION.to_owned());
    lines
}

/// Assemble the dashboard for a profile
#[must_use]
pub fn build_dashboard(
    profile: &Profile,
    config: &IntelligenceConfig,
    catalog: &PlanCatalog,
) -> Dashboard {
    let (metrics, insufficient) = match derive_metrics(profile, config) {
        Ok(metrics) => (Some(metrics), None),
        Err(missing) => {
            debug!(%missing, "Dashboard without metrics");
            (None, Some(missing))
        }
    };
    let focus = metrics
        .as_ref()
        .map(|derived| FocusCards::from(FocusBand::from_bmi(derived.bmi)));

    let guidance = comorbidity_guidance(
        profile.active_comorbidities(),
        profile.other_comorbidity_note(),
        catalog,
    );
    let summary = summary_lines(profile, &guidance);
    let advisories = if guidance.is_empty() {
        vec![messages::ADVISORY_SHORT]
    } else {
        vec![messages::ADVISORY_LONG, messages::CONSULT_PROFESSIONAL]
    };

    Dashboard {
        name: profile.name.clone(),
        metrics,
        insufficient,
        focus,
        guidance,
        summary,
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitality_core::models::{Comorbidity, Gender};

    fn profile() -> Profile {
        Profile {
            name: "João Souza".to_owned(),
            age: 40,
            gender: Gender::Male,
            height: "1,80".to_owned(),
            weight: "95".to_owned(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_focus_bands() {
        assert_eq!(FocusBand::from_bmi(18.4), FocusBand::Underweight);
        assert_eq!(FocusBand::from_bmi(18.5), FocusBand::Normal);
        assert_eq!(FocusBand::from_bmi(25.0), FocusBand::Overweight);
        assert_eq!(FocusBand::from_bmi(30.0), FocusBand::Obese);
        assert_eq!(FocusBand::Overweight.diet_focus(), "Dieta Leve");
        assert_eq!(FocusBand::Obese.exercise_focus(), "Aeróbico");
    }

    #[test]
    fn test_dashboard_without_conditions() {
        let dashboard = build_dashboard(
            &profile(),
            &IntelligenceConfig::default(),
            PlanCatalog::builtin(),
        );
        assert!(dashboard.metrics.is_some());
        assert_eq!(dashboard.focus.as_ref().map(|cards| cards.band), Some(FocusBand::Overweight));
        assert_eq!(dashboard.summary, vec![messages::NO_CONDITIONS]);
        assert_eq!(dashboard.advisories, vec![messages::ADVISORY_SHORT]);
        assert!(dashboard.prompt().is_none());
    }

    #[test]
    fn test_dashboard_with_conditions() {
        let profile = Profile {
            has_comorbidities: true,
            comorbidities: vec![Comorbidity::Diabetes, Comorbidity::from_label("Outros")],
            other_comorbidity: "Gota".to_owned(),
            ..profile()
        };
        let dashboard = build_dashboard(
            &profile,
            &IntelligenceConfig::default(),
            PlanCatalog::builtin(),
        );
        assert_eq!(
            dashboard.summary,
            vec![
                "• Diabetes: Dieta para Controle Glicêmico / Exercícios para Diabetes",
                "• Outros: Recomendações Gerais / Atividade Física Recomendada",
                "• Outros: Gota",
                messages::CONDITION_RECOMMENDATION,
            ]
        );
        assert_eq!(
            dashboard.advisories,
            vec![messages::ADVISORY_LONG, messages::CONSULT_PROFESSIONAL]
        );
    }

    #[test]
    fn test_dashboard_prompts_for_missing_data() {
        let profile = Profile {
            weight: String::new(),
            ..profile()
        };
        let dashboard = build_dashboard(
            &profile,
            &IntelligenceConfig::default(),
            PlanCatalog::builtin(),
        );
        assert!(dashboard.metrics.is_none());
        assert!(dashboard.focus.is_none());
        assert_eq!(dashboard.prompt(), Some(messages::FILL_IN_PROFILE));
    }
}
