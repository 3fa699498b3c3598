// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker
// ABOUTME: Output formatting helpers for vitality-cli
// ABOUTME: pt-BR rendering of profiles, metrics, plans, recipes, and history

use vitality::intelligence::metrics::{DerivedMetrics, HistoryPoint, WeightDelta};
use vitality::intelligence::plans::{ExerciseDay, MealSlot, MenuDay};
use vitality::intelligence::{Dashboard, Recipe};
use vitality::models::{Comorbidity, Nutritionist, Profile};

const WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(WIDTH)
}

/// Display the stored profile
pub fn display_profile(profile: &Profile) {
    println!("\nPerfil");
    println!("{}", rule());
    println!("   Nome: {}", profile.name);
    println!("   Idade: {}", profile.age);
    println!("   Sexo: {}", profile.gender.display_label());
    println!("   Altura: {} m", profile.height);
    println!("   Peso: {} kg", profile.weight);
    println!("   Perfil: {}", profile.activity_profile.display_label());

    let conditions: Vec<&str> = profile
        .active_comorbidities()
        .iter()
        .map(Comorbidity::display_label)
        .collect();
    if conditions.is_empty() {
        println!("   Comorbidades: nenhuma");
    } else {
        println!("   Comorbidades: {}", conditions.join(", "));
    }
    if let Some(note) = profile.other_comorbidity_note() {
        println!("   Outros: {note}");
    }
}

/// Display BMI, ideal weight, classification, and tiers
pub fn display_metrics(profile: &Profile, metrics: &DerivedMetrics) {
    println!("\nMétricas de {}", profile.name);
    println!("{}", rule());
    println!("   IMC: {:.1}", metrics.bmi);
    println!("   Peso ideal: {:.1} kg", metrics.ideal_weight_kg);
    match metrics.weight_delta {
        WeightDelta::ToLose(kg) => println!("   Perder: {kg:.1} kg"),
        WeightDelta::ToGain(kg) => println!("   Ganhar: {kg:.1} kg"),
        WeightDelta::OnTarget => {}
    }

    let classification = &metrics.classification;
    println!(
        "   Classificação: {} ({})",
        classification.category.label(),
        classification.range_label
    );
    println!("   {}", classification.advice);
    if !classification.risk_factors.is_empty() {
        println!("   Fatores de risco:");
        for factor in classification.risk_factors {
            println!("   • {factor}");
        }
    }

    println!("\n   Dieta: {}", metrics.diet_tier.model().title);
    println!("   Exercícios: {}", metrics.exercise_tier.plan().name);
}

/// Display the dashboard summary
pub fn display_dashboard(dashboard: &Dashboard) {
    println!("\nOlá, {}!", dashboard.name);
    println!("{}", rule());

    if let Some(prompt) = dashboard.prompt() {
        println!("   {prompt}");
    }
    if let Some(metrics) = &dashboard.metrics {
        println!(
            "   IMC {:.1} | Peso ideal {:.1} kg | {}",
            metrics.bmi,
            metrics.ideal_weight_kg,
            metrics.classification.category.label()
        );
    }
    if let Some(focus) = &dashboard.focus {
        println!("\n   Dieta: {}", focus.diet_focus);
        println!("   {}", focus.diet_advice);
        println!("\n   Exercícios: {}", focus.exercise_focus);
        println!("   {}", focus.exercise_advice);
    }

    println!("\nComorbidades");
    println!("{}", rule());
    for line in &dashboard.summary {
        println!("   {line}");
    }
    for condition in &dashboard.guidance.conditions {
        println!("\n   {}", condition.label);
        println!("   {}: {}", condition.diet_title, condition.diet_content);
        println!("   {}: {}", condition.exercise_title, condition.exercise_content);
    }

    println!();
    for advisory in &dashboard.advisories {
        println!("WARNING {advisory}");
    }
}

/// Display a plan title and description
pub fn display_plan_header(title: &str, description: &str) {
    println!("\n{title}");
    println!("{}", rule());
    println!("   {description}");
}

/// Display the meals of one day
pub fn display_menu_day(label: &str, menu: &MenuDay) {
    println!("\n{label}");
    for slot in MealSlot::ALL {
        println!("   {}: {}", slot.label(), menu.slot(slot).join(", "));
    }
}

/// Display the activities of one day
pub fn display_exercise_day(label: &str, day: &ExerciseDay) {
    println!("\n{label}");
    if day.activities.is_empty() {
        println!("   Descanso");
    }
    for activity in &day.activities {
        println!("   • {}: {}", activity.name, activity.details);
    }
}

/// Display recipe titles and ids
pub fn display_recipe_list(recipes: &[&Recipe]) {
    println!("\nReceitas recomendadas");
    println!("{}", rule());
    if recipes.is_empty() {
        println!("   Nenhuma receita encontrada.");
    }
    for recipe in recipes {
        println!("   [{}] {}", recipe.id, recipe.title);
        println!("       {}", recipe.description);
    }
}

/// Display a full recipe
pub fn display_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.title);
    println!("{}", rule());
    println!("   {}", recipe.description);
    println!("\n   Ingredientes:");
    for ingredient in &recipe.ingredients {
        println!("   • {ingredient}");
    }
    println!("\n   Modo de preparo:");
    for (number, step) in recipe.steps.iter().enumerate() {
        println!("   {}. {step}", number + 1);
    }
    if let Some(heating) = &recipe.heating {
        println!("\n   Aquecimento:");
        for (appliance, instructions) in heating.labeled() {
            println!("   {appliance}: {instructions}");
        }
    }
}

/// Display the weight history, numbered from 1
pub fn display_history(points: &[HistoryPoint]) {
    println!("\nHistórico de peso");
    println!("{}", rule());
    if points.is_empty() {
        println!("   Nenhuma pesagem registrada.");
        return;
    }
    for (number, point) in points.iter().enumerate() {
        let bmi = point
            .bmi
            .map(|bmi| format!(" | IMC {bmi:.1}"))
            .unwrap_or_default();
        println!(
            "   {:>3}. {} | {:.1} kg{bmi}",
            number + 1,
            point.label,
            point.weight_kg
        );
    }
}

/// Display a nutritionist with recommendations and attachments
pub fn display_nutritionist(record: &Nutritionist) {
    println!("\n{} ({})", record.name, record.id);
    println!("{}", "-".repeat(WIDTH));
    if !record.email.is_empty() {
        println!("   Email: {}", record.email);
    }
    if !record.phone.is_empty() {
        println!("   Telefone: {}", record.phone);
    }
    if record.recommendations.is_empty() {
        println!("   Nenhuma recomendação.");
    }
    for recommendation in &record.recommendations {
        println!("   • {recommendation}");
    }
    for attachment in &record.attachments {
        println!(
            "   Anexo: {} [{}] {}",
            attachment.name, attachment.mime_type, attachment.uri
        );
    }
}
