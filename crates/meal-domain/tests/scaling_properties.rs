//! Scaling Properties
//!
//! Checks the serving scaler over a grid of realistic inputs and walks a
//! planner-to-shopping flow through the public API.

use chrono::NaiveDate;
use meal_domain::calendar::Week;
use meal_domain::models::{DailyPlan, Meal, MealSlot, MealType, Quantity, RecipeIngredient};
use meal_domain::plan::{plans_for_slot, PlanDraft};
use meal_domain::scaling::{round2, scale, scale_meal, scale_quantity};
use meal_domain::servings::ServingCounter;
use meal_domain::shopping::ShoppingRange;

const QUANTITIES: [f64; 6] = [0.5, 1.0, 3.3, 100.0, 250.0, 1234.56];

#[test]
fn identity_when_target_equals_base() {
    for q in QUANTITIES {
        for b in 1..=8 {
            assert_eq!(scale(q, b, b).unwrap(), round2(q), "q={q} b={b}");
        }
    }
}

#[test]
fn matches_ratio_within_a_cent() {
    for q in QUANTITIES {
        for b in 1..=6 {
            for t in 1..=12 {
                let expected = q * f64::from(t) / f64::from(b);
                let got = scale(q, b, t).unwrap();
                assert!((got - expected).abs() <= 0.01, "q={q} b={b} t={t}: {got} vs {expected}");
            }
        }
    }
}

#[test]
fn linear_in_target_servings() {
    for q in QUANTITIES {
        for b in 1..=6 {
            for t in 1..=6 {
                let single = scale(q, b, t).unwrap();
                let double = scale(q, b, 2 * t).unwrap();
                assert!((double - 2.0 * single).abs() <= 0.02, "q={q} b={b} t={t}");
            }
        }
    }
}

#[test]
fn documented_examples() {
    assert_eq!(scale(100.0, 4, 2).unwrap(), 50.0);
    assert_eq!(scale(250.0, 4, 6).unwrap(), 375.0);
    assert_eq!(scale(1.0, 3, 2).unwrap(), 0.67);
    assert_eq!(scale_quantity(&Quantity::from(""), 4, 2).unwrap(), Quantity::from(""));
}

#[test]
fn plan_week_then_shop() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
    let week = Week::containing(today);

    let meal = Meal {
        id: 5,
        name: "Arroz con verduras".into(),
        meal_type: MealType::Home,
        base_servings: 4,
        ingredients: vec![RecipeIngredient {
            id: Some(1),
            ingredient_id: Some(2),
            ingredient_name: "Arroz".into(),
            quantity: Some(Quantity::Amount(300.0)),
            unit: "gramos".into(),
        }],
        instructions: None,
        image: None,
        owner_name: Some("ana".into()),
        is_saved_by_user: false,
        group: None,
    };

    let mut counter = ServingCounter::new(meal.base_servings);
    counter.decrement();
    counter.decrement();
    let draft = PlanDraft::Recipe { meal: meal.id, target_servings: counter.current() };
    let payload = draft.to_payload(week.days()[2], MealSlot::Lunch, 1).unwrap();
    assert_eq!(payload.date, today);

    let stored = DailyPlan {
        id: 11,
        date: payload.date,
        group: payload.group,
        meal: payload.meal,
        meal_details: Some(meal.clone()),
        target_servings: payload.target_servings,
        meal_slot: payload.meal_slot,
        is_eating_out: false,
        custom_name: None,
    };
    let cell = plans_for_slot(std::slice::from_ref(&stored), today, MealSlot::Lunch);
    assert_eq!(cell.len(), 1);
    assert_eq!(scale_meal(&meal, cell[0].target_servings)[0].quantity, "150");

    let request = ShoppingRange::for_week(week).request(1).unwrap();
    assert!(request.start_date <= today && today <= request.end_date);
}
