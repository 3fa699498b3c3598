// ABOUTME: Diet and exercise plans for each supported condition plus the generic plan
// ABOUTME: Menus and activity weeks are Monday first; the generic plan has no activity week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use super::ConditionPlanRows;

pub(super) const DIABETES: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Dieta para Controle Glicêmico",
    diet_content: "Focar em alimentos de baixo índice glicêmico, aumentar ingestão de fibras, fracionar refeições e priorizar carboidratos complexos. Evitar picos glicêmicos com redução de açúcares simples e bebidas adoçadas.",
    weekly_menu: Some([
        (
            &["Iogurte natural + aveia", "Frutas vermelhas"],
            &["Arroz integral", "Peito de frango grelhado", "Salada de folhas"],
            &["Peixe assado", "Quinoa", "Legumes no vapor"],
        ),
        (
            &["Omelete de claras + espinafre", "Pão integral"],
            &["Quinoa", "Filé de peixe", "Vagem"],
            &["Sopa de legumes", "Tofu grelhado"],
        ),
        (
            &["Vitamina de abacate com leite vegetal", "Torrada integral"],
            &["Arroz integral", "Feijão", "Frango ao forno"],
            &["Salada com grãos", "Atum"],
        ),
        (
            &["Pão integral com queijo branco", "Mamão"],
            &["Macarrão integral", "Carne magra", "Brócolis"],
            &["Legumes assados", "Ovos mexidos"],
        ),
        (
            &["Iogurte natural + chia", "Fruta"],
            &["Peito de frango", "Batata-doce", "Salada"],
            &["Salmão grelhado", "Arroz integral", "Aspargos"],
        ),
        (
            &["Tapioca com cottage", "Frutas"],
            &["Quinoa", "Carne magra", "Legumes"],
            &["Sopa de abóbora", "Peito de frango"],
        ),
        (
            &["Ovos mexidos", "Pão integral", "Fruta pequena"],
            &["Arroz integral", "Peixe", "Salada verde"],
            &["Vegetais ao forno", "Grão-de-bico"],
        ),
    ]),
    exercise_title: "Exercícios para Diabetes",
    exercise_content: "Programa com caminhadas diárias moderadas (30–45 min), treinos de resistência leve a moderada 2–3x/semana para melhorar sensibilidade à insulina e composição corporal.",
    weekly_exercise: Some([
        &[
            ("Caminhada moderada", "30 minutos em ritmo confortável"),
            ("Alongamento", "10 minutos focando grandes grupos musculares"),
        ],
        &[("Treino de resistência leve", "Circuito com peso corporal 3 séries")],
        &[("Caminhada rápida", "30 minutos com variação de ritmo")],
        &[("Treino de resistência leve", "Foco em membros inferiores 3x12")],
        &[("Bicicleta leve", "30 minutos em ritmo confortável")],
        &[("Alongamento e mobilidade", "15 minutos")],
        &[("Descanso ativo", "Caminhada leve ou passeio")],
    ]),
};

pub(super) const HYPERTENSION: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Dieta para Hipertensão (DASH-like)",
    diet_content: "Reduzir consumo de sódio, aumentar ingestão de frutas, verduras e laticínios magros. Priorizar alimentos ricos em potássio, magnésio e fibras; evitar alimentos processados ricos em sal.",
    weekly_menu: Some([
        (
            &["Iogurte natural", "Aveia", "Frutas"],
            &["Quinoa", "Peito de frango", "Salada sem sal"],
            &["Peixe assado", "Legumes cozidos"],
        ),
        (
            &["Pão integral", "Abacate"],
            &["Arroz integral", "Feijão", "Legumes variados"],
            &["Sopa de legumes", "Tofu"],
        ),
        (
            &["Omelete com tomate e espinafre"],
            &["Peito de frango", "Purê de batata doce", "Salada"],
            &["Filé de peixe", "Quinoa", "Brócolis"],
        ),
        (
            &["Iogurte + granola sem sal"],
            &["Salada grande com grãos", "Atum"],
            &["Sopa leve", "Ovos cozidos"],
        ),
        (
            &["Tapioca com queijo branco"],
            &["Peito de frango", "Legumes grelhados"],
            &["Quinoa", "Legumes no vapor"],
        ),
        (
            &["Smoothie verde", "Pão integral"],
            &["Arroz integral", "Peixe", "Salada"],
            &["Sopa de legumes", "Frango grelhado"],
        ),
        (
            &["Ovos mexidos", "Frutas"],
            &["Feijão", "Arroz", "Legumes"],
            &["Filé de peixe", "Vegetais"],
        ),
    ]),
    exercise_title: "Exercícios para Hipertensão",
    exercise_content: "Atividades aeróbicas moderadas (30 min, 5x/semana) como caminhada, bicicleta ou natação. Incluir alongamento e exercícios de baixo impacto; monitorar pressão arterial conforme orientação médica.",
    weekly_exercise: Some([
        &[("Caminhada moderada", "30 minutos")],
        &[("Alongamento e mobilidade", "15 minutos")],
        &[("Bicicleta leve", "30 minutos")],
        &[("Treino funcional leve", "Circuito de 20 minutos")],
        &[("Caminhada rápida", "30 minutos")],
        &[("Alongamento", "15 minutos")],
        &[("Descanso ativo", "Passeio leve")],
    ]),
};

pub(super) const HEART_DISEASE: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Dieta Cardiosaludável",
    diet_content: "Reduzir gorduras saturadas e trans, priorizar gorduras saudáveis (ômega-3), aumentar fibras e vegetais. Moderação de sódio e controle de colesterol alimentar.",
    weekly_menu: Some([
        (
            &["Aveia com frutas", "Chá"],
            &["Salmão grelhado", "Quinoa", "Salada"],
            &["Legumes cozidos", "Peito de frango"],
        ),
        (
            &["Iogurte natural", "Granola"],
            &["Arroz integral", "Peixe assado", "Brócolis"],
            &["Sopa de legumes", "Tofu"],
        ),
        (
            &["Omelete com espinafre"],
            &["Quinoa", "Frango grelhado", "Salada"],
            &["Peixe cozido", "Legumes ao vapor"],
        ),
        (
            &["Pão integral", "Abacate"],
            &["Salada com grãos e atum"],
            &["Salmão assado", "Legumes"],
        ),
        (
            &["Smoothie de frutas vermelhas"],
            &["Peito de frango", "Batata doce", "Salada"],
            &["Sopa leve", "Peixe"],
        ),
        (
            &["Iogurte + chia"],
            &["Arroz integral", "Peixe", "Legumes"],
            &["Quinoa", "Frango grelhado"],
        ),
        (
            &["Ovos mexidos", "Fruta"],
            &["Salada grande com proteína magra"],
            &["Peixe", "Vegetais"],
        ),
    ]),
    exercise_title: "Exercícios para Doença Cardíaca",
    exercise_content: "Exercícios aeróbicos de intensidade baixa a moderada com progressão supervisionada. Priorizar atividades seguras e consultar cardiologista antes de iniciar.",
    weekly_exercise: Some([
        &[("Caminhada leve", "20-30 minutos")],
        &[("Alongamento e mobilidade", "15 minutos")],
        &[("Bicicleta leve", "20-30 minutos")],
        &[("Treino de resistência leve", "Foco em estabilidade e resistência")],
        &[("Caminhada moderada", "30 minutos")],
        &[("Alongamento", "15 minutos")],
        &[("Descanso ativo", "Passeio leve")],
    ]),
};

pub(super) const ASTHMA: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Dieta e Inflamação (Asma)",
    diet_content: "Dieta equilibrada rica em frutas e vegetais antioxidantes pode ajudar no controle inflamatório. Identificar e evitar alimentos gatilho individuais.",
    weekly_menu: Some([
        (
            &["Iogurte natural", "Frutas vermelhas"],
            &["Peito de frango", "Quinoa", "Salada"],
            &["Sopa de legumes", "Peixe"],
        ),
        (
            &["Aveia com maçã"],
            &["Arroz integral", "Peixe grelhado", "Legumes"],
            &["Salada de grãos", "Tofu"],
        ),
        (
            &["Omelete com ervas"],
            &["Quinoa", "Frango ao forno", "Legumes"],
            &["Peixe assado", "Vegetais"],
        ),
        (
            &["Smoothie antioxidante"],
            &["Peito de frango", "Salada grande"],
            &["Sopa leve", "Peixe"],
        ),
        (
            &["Iogurte + granola"],
            &["Arroz integral", "Feijão", "Legumes"],
            &["Quinoa", "Peixe"],
        ),
        (
            &["Pão integral com abacate"],
            &["Peixe", "Vegetais grelhados"],
            &["Sopa de legumes", "Tofu"],
        ),
        (
            &["Ovos mexidos", "Fruta"],
            &["Salada com proteína magra"],
            &["Peixe", "Vegetais"],
        ),
    ]),
    exercise_title: "Exercícios para Asma",
    exercise_content: "Atividades aeróbicas progressivas e controladas (caminhada, ciclismo), evitar exercícios intensos em ambientes com gatilhos; usar medicação preventiva quando prescrita.",
    weekly_exercise: Some([
        &[("Caminhada leve", "20-30 minutos")],
        &[("Alongamento respiratório", "10 minutos de exercícios de respiração")],
        &[("Ciclismo leve", "20-30 minutos")],
        &[("Treino intervalado leve", "10-15 minutos com esforço moderado")],
        &[("Caminhada", "30 minutos")],
        &[("Alongamento e mobilidade", "15 minutos")],
        &[("Descanso ativo", "Passeio leve")],
    ]),
};

pub(super) const KIDNEY_DISEASE: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Dieta para Saúde Renal",
    diet_content: "Ajustes de proteína e eletrólitos conforme estágio renal — controle de sódio, potássio e fósforo quando indicado. Sempre seguir orientação de nefrologista/nutricionista especializado.",
    weekly_menu: Some([
        (
            &["Pão integral com queijo branco", "Fruta baixa em potássio (maçã)"],
            &["Arroz branco", "Peito de frango", "Salada sem sal"],
            &["Sopa leve", "Peixe cozido"],
        ),
        (
            &["Iogurte natural (porção moderada)"],
            &["Quinoa em porção moderada", "Legumes cozidos", "Tofu"],
            &["Purê de abóbora", "Peito de frango"],
        ),
        (
            &["Ovos mexidos", "Pão integral"],
            &["Arroz branco", "Peixe grelhado", "Legumes"],
            &["Sopa de legumes", "Peito de frango"],
        ),
        (
            &["Tapioca com queijo branco"],
            &["Quinoa moderada", "Frango grelhado", "Salada"],
            &["Legumes assados", "Tofu"],
        ),
        (
            &["Smoothie leve (sem banana)"],
            &["Arroz branco", "Peixe", "Legumes"],
            &["Sopa leve", "Peito de frango"],
        ),
        (
            &["Omelete simples"],
            &["Quinoa", "Legumes cozidos", "Peixe"],
            &["Purê de batata", "Peito de frango"],
        ),
        (
            &["Pão integral com geleia sem açúcar"],
            &["Arroz branco", "Peixe", "Salada"],
            &["Sopa leve", "Tofu"],
        ),
    ]),
    exercise_title: "Exercícios para Doença Renal",
    exercise_content: "Exercícios de baixa a moderada intensidade para manter função cardiovascular e força muscular; monitorar fadiga e sinais clínicos durante treinos.",
    weekly_exercise: Some([
        &[("Caminhada leve", "20-30 minutos")],
        &[("Alongamento e mobilidade", "15 minutos")],
        &[("Bicicleta leve", "20-30 minutos")],
        &[(
            "Treino de resistência leve",
            "Foco em grandes grupos musculares com baixo peso",
        )],
        &[("Caminhada", "30 minutos")],
        &[("Alongamento", "15 minutos")],
        &[("Descanso ativo", "Passeio leve")],
    ]),
};

pub(super) const GENERAL: ConditionPlanRows = ConditionPlanRows {
    diet_title: "Recomendações Gerais",
    diet_content: "Recomendações gerais: dieta balanceada, variedade de alimentos, hidratação adequada e evitar excessos. Consulte profissional para adaptações específicas.",
    weekly_menu: Some([
        (
            &["Iogurte + granola", "Fruta"],
            &["Arroz integral", "Peito de frango", "Salada"],
            &["Sopa de legumes", "Peixe"],
        ),
        (
            &["Ovos mexidos", "Pão integral"],
            &["Quinoa", "Peixe", "Legumes"],
            &["Salada com grãos", "Tofu"],
        ),
        (
            &["Smoothie de frutas"],
            &["Arroz integral", "Frango grelhado", "Legumes"],
            &["Peixe assado", "Vegetais"],
        ),
        (
            &["Tapioca com queijo"],
            &["Peito de frango", "Batata-doce", "Salada"],
            &["Quinoa", "Legumes"],
        ),
        (
            &["Iogurte", "Fruta"],
            &["Arroz integral", "Peixe", "Salada"],
            &["Sopa leve", "Tofu"],
        ),
        (
            &["Pão integral", "Abacate"],
            &["Quinoa", "Frango", "Legumes"],
            &["Peixe", "Vegetais"],
        ),
        (
            &["Ovos mexidos", "Fruta"],
            &["Arroz integral", "Peixe", "Salada"],
            &["Legumes ao forno", "Tofu"],
        ),
    ]),
    exercise_title: "Atividade Física Recomendada",
    exercise_content: "Atividades seguras e adaptadas ao nível de condicionamento: caminhada, alongamento, treinos de força leve e progressão gradual conforme tolerância.",
    weekly_exercise: None,
};
