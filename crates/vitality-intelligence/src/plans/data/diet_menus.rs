// ABOUTME: Base weekly menus for the gain, maintenance, light-deficit, and loss diet tiers
// ABOUTME: Rows are (breakfast, lunch, dinner), Monday first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use super::{MenuRow, Week};

pub(super) const GAIN: Week<MenuRow> = [
    (
        &["Ovos mexidos com queijo", "Pão integral", "Vitamina de banana"],
        &["Arroz integral", "Frango grelhado", "Batata-doce"],
        &["Macarrão integral", "Carne moída", "Brócolis"],
    ),
    (
        &["Panqueca de aveia", "Iogurte", "Frutas"],
        &["Arroz", "Peito de frango", "Salada de abacate"],
        &["Quinoa", "Ovos cozidos", "Espinafre"],
    ),
    (
        &["Ovos mexidos", "Tapioca", "Mamão"],
        &["Arroz integral", "Feijão", "Frango grelhado"],
        &["Batata-doce", "Atum", "Salada"],
    ),
    (
        &["Pão integral", "Queijo branco", "Suco de laranja"],
        &["Macarrão integral", "Carne moída", "Brócolis"],
        &["Arroz", "Ovos mexidos", "Tomate"],
    ),
    (
        &["Ovos mexidos", "Banana", "Granola"],
        &["Arroz integral", "Frango grelhado", "Batata-doce"],
        &["Quinoa", "Carne moída", "Espinafre"],
    ),
    (
        &["Tapioca", "Queijo", "Vitamina de frutas"],
        &["Arroz", "Peito de frango", "Salada"],
        &["Batata-doce", "Ovos cozidos", "Brócolis"],
    ),
    (
        &["Ovos mexidos", "Pão integral", "Mamão"],
        &["Arroz integral", "Frango grelhado", "Batata-doce"],
        &["Macarrão integral", "Carne moída", "Brócolis"],
    ),
];

pub(super) const MAINTENANCE: Week<MenuRow> = [
    (
        &["Iogurte natural", "Granola", "Frutas"],
        &["Quinoa", "Peito de frango", "Legumes"],
        &["Salmão", "Purê de batata-doce", "Aspargos"],
    ),
    (
        &["Pão integral", "Queijo branco", "Suco"],
        &["Arroz", "Carne magra", "Salada"],
        &["Omelete", "Espinafre", "Tomate"],
    ),
    (
        &["Ovos cozidos", "Mamão", "Granola"],
        &["Quinoa", "Peito de frango", "Legumes"],
        &["Salmão", "Batata-doce", "Aspargos"],
    ),
    (
        &["Iogurte", "Frutas", "Aveia"],
        &["Arroz", "Carne magra", "Salada"],
        &["Omelete", "Espinafre", "Tomate"],
    ),
    (
        &["Pão integral", "Queijo", "Suco"],
        &["Quinoa", "Peito de frango", "Legumes"],
        &["Salmão", "Purê de batata-doce", "Aspargos"],
    ),
    (
        &["Ovos mexidos", "Mamão", "Granola"],
        &["Arroz", "Carne magra", "Salada"],
        &["Omelete", "Espinafre", "Tomate"],
    ),
    (
        &["Iogurte", "Frutas", "Aveia"],
        &["Quinoa", "Peito de frango", "Legumes"],
        &["Salmão", "Batata-doce", "Aspargos"],
    ),
];

pub(super) const LIGHT_DEFICIT: Week<MenuRow> = [
    (
        &["Omelete de claras", "Pão integral", "Tomate"],
        &["Arroz integral", "Peixe grelhado", "Legumes"],
        &["Sopa de legumes", "Frango desfiado"],
    ),
    (
        &["Iogurte light", "Mamão", "Granola"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Ovo cozido", "Torrada integral", "Chá verde"],
        &["Arroz integral", "Peixe grelhado", "Legumes"],
        &["Sopa de legumes", "Frango desfiado"],
    ),
    (
        &["Omelete de claras", "Pão integral", "Tomate"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Iogurte light", "Mamão", "Granola"],
        &["Arroz integral", "Peixe grelhado", "Legumes"],
        &["Sopa de legumes", "Frango desfiado"],
    ),
    (
        &["Ovo cozido", "Torrada integral", "Chá verde"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Omelete de claras", "Pão integral", "Tomate"],
        &["Arroz integral", "Peixe grelhado", "Legumes"],
        &["Sopa de legumes", "Frango desfiado"],
    ),
];

pub(super) const LOSS: Week<MenuRow> = [
    (
        &["Chá verde", "Ovo cozido", "Torrada integral"],
        &["Salada de folhas", "Peito de frango", "Quinoa"],
        &["Sopa de legumes", "Omelete de claras"],
    ),
    (
        &["Iogurte light", "Mamão", "Granola"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Ovo cozido", "Torrada integral", "Chá verde"],
        &["Salada de folhas", "Peito de frango", "Quinoa"],
        &["Sopa de legumes", "Omelete de claras"],
    ),
    (
        &["Chá verde", "Ovo cozido", "Torrada integral"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Iogurte light", "Mamão", "Granola"],
        &["Salada de folhas", "Peito de frango", "Quinoa"],
        &["Sopa de legumes", "Omelete de claras"],
    ),
    (
        &["Ovo cozido", "Torrada integral", "Chá verde"],
        &["Quinoa", "Peito de frango", "Salada"],
        &["Omelete de claras", "Espinafre", "Tomate"],
    ),
    (
        &["Chá verde", "Ovo cozido", "Torrada integral"],
        &["Salada de folhas", "Peito de frango", "Quinoa"],
        &["Sopa de legumes", "Omelete de claras"],
    ),
];
