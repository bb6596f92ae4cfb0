use crate::config::SeatTypeRule;
use crate::models::{ColorTag, SeatClass};

/// Категория для ряда, который не покрыт ни одним правилом:
/// первое правило по порядку объявления, цвет - первый цвет палитры.
pub fn fallback_category(rules: &[SeatTypeRule]) -> Option<SeatClass> {
    let first = rules.first()?;
    Some(SeatClass {
        category: first.key.clone(),
        name: first.name.clone(),
        price: first.price,
        color: ColorTag::for_rule(0),
    })
}

/// Первое правило, в чьих рядах есть `row`; цвет берётся по позиции правила.
/// `None` только для пустого списка правил, его отсекает проверка конфигурации.
pub fn classify(row: usize, rules: &[SeatTypeRule]) -> Option<SeatClass> {
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.rows.contains(&row))
        .map(|(index, rule)| SeatClass {
            category: rule.key.clone(),
            name: rule.name.clone(),
            price: rule.price,
            color: ColorTag::for_rule(index),
        })
        .or_else(|| fallback_category(rules))
}
