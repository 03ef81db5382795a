// ABOUTME: Algorithm tests for the energy calculator, diet planner, and workout planner
// ABOUTME: Worked examples, range boundaries, ratio invariants, advisory-field no-ops, idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors
//! Planner algorithm tests
//!
//! - Mifflin-St Jeor BMR, TDEE, and loss/gain targets for every activity factor
//! - Inclusive range boundaries for height, weight, and age
//! - Diet ratio table and gram conversion
//! - Workout plan shape for every level and session length
//! - Advisory parameters (diet preference, workout goal) leave output unchanged

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_core::errors::ErrorCode;
use fitplan_intelligence::validation::round_half_up;
use fitplan_intelligence::{
    calculate_energy, generate_diet_plan, generate_workout_plan, ActivityFactor, BodyMetrics,
    DietGoal, DietPlanRequest, DietPreference, FitnessLevel, Gender, MacroRatios, WorkoutGoal,
    WorkoutPlanRequest,
};

fn male_reference() -> BodyMetrics {
    BodyMetrics {
        height_cm: 180.0,
        weight_kg: 75.0,
        age_years: 30.0,
        gender: Gender::Male,
        activity: ActivityFactor::Moderate,
    }
}

// ============================================================================
// ENERGY CALCULATION TESTS
// ============================================================================

#[test]
fn test_male_reference_example() {
    let result = calculate_energy(&male_reference()).unwrap();

    assert_eq!(result.bmr, 1787);
    assert_eq!(result.tdee, 2770);
    assert_eq!(result.weight_loss, 2270);
    assert_eq!(result.weight_gain, 3270);
    assert_eq!(result.activity_description, "moderate");
}

#[test]
fn test_female_sedentary() {
    let metrics = BodyMetrics {
        height_cm: 165.0,
        weight_kg: 60.0,
        age_years: 25.0,
        gender: Gender::Female,
        activity: ActivityFactor::Sedentary,
    };
    let result = calculate_energy(&metrics).unwrap();

    // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
    assert_eq!(result.bmr, 1405);
    assert_eq!(result.tdee, 1686);
    assert_eq!(result.activity_description, "sedentary");
}

#[test]
fn test_exact_half_bmr_rounds_up() {
    for (gender, height, weight, age, expected) in [
        (Gender::Male, 108.0, 121.0, 83.0, 1757),
        (Gender::Male, 180.0, 75.0, 30.0, 1787),
        (Gender::Female, 165.0, 60.0, 25.0, 1405),
    ] {
        let metrics = BodyMetrics {
            height_cm: height,
            weight_kg: weight,
            age_years: age,
            gender,
            activity: ActivityFactor::Sedentary,
        };
        assert_eq!(calculate_energy(&metrics).unwrap().bmr, expected);
    }
}

#[test]
fn test_targets_follow_tdee_for_every_factor() {
    let expected_labels = ["sedentary", "light", "moderate", "active", "extreme"];

    for (factor, label) in ActivityFactor::ALL.into_iter().zip(expected_labels) {
        let metrics = BodyMetrics {
            activity: factor,
            ..male_reference()
        };
        let result = calculate_energy(&metrics).unwrap();

        assert_eq!(
            result.tdee,
            (result.bmr * factor.multiplier_milli() + 500) / 1000
        );
        assert_eq!(result.weight_loss, result.tdee - 500);
        assert_eq!(result.weight_gain, result.tdee + 500);
        assert_eq!(result.activity_description, label);
    }
}

#[test]
fn test_height_boundaries() {
    for height in [100.0, 250.0] {
        let metrics = BodyMetrics {
            height_cm: height,
            ..male_reference()
        };
        assert!(calculate_energy(&metrics).is_ok(), "height {height} accepted");
    }

    for height in [99.0, 251.0] {
        let metrics = BodyMetrics {
            height_cm: height,
            ..male_reference()
        };
        let err = calculate_energy(&metrics).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.starts_with("height"));
    }
}

#[test]
fn test_weight_and_age_boundaries() {
    let cases = [
        (20.0, 30.0, true),
        (200.0, 30.0, true),
        (19.9, 30.0, false),
        (200.1, 30.0, false),
        (75.0, 10.0, true),
        (75.0, 100.0, true),
        (75.0, 9.0, false),
        (75.0, 101.0, false),
    ];

    for (weight, age, valid) in cases {
        let metrics = BodyMetrics {
            weight_kg: weight,
            age_years: age,
            ..male_reference()
        };
        assert_eq!(
            calculate_energy(&metrics).is_ok(),
            valid,
            "weight={weight} age={age}"
        );
    }
}

#[test]
fn test_energy_is_idempotent() {
    let first = calculate_energy(&male_reference()).unwrap();
    let second = calculate_energy(&male_reference()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// DIET PLAN TESTS
// ============================================================================

#[test]
fn test_diet_lose_example() {
    let plan = generate_diet_plan(&DietPlanRequest {
        target_calories: 2000.0,
        goal: DietGoal::Lose,
        diet_preference: None,
    })
    .unwrap();

    let macros = plan.macronutrients;
    assert_eq!((macros.protein.calories, macros.protein.grams), (500, 125));
    assert_eq!((macros.carbs.calories, macros.carbs.grams), (700, 175));
    assert_eq!((macros.fat.calories, macros.fat.grams), (800, 89));
    assert_eq!(macros.fat.to_string(), "89g (800 kcal)");
}

#[test]
fn test_ratios_sum_to_one_for_every_goal() {
    for goal in [DietGoal::Lose, DietGoal::Maintain, DietGoal::Gain] {
        let ratios = MacroRatios::for_goal(goal);
        let sum = ratios.protein + ratios.carbs + ratios.fat;
        assert!((sum - 1.0).abs() < 1e-9, "{goal:?} ratios sum to {sum}");
    }
}

#[test]
fn test_grams_follow_energy_density() {
    for target in [1200.0, 1850.0, 2333.0, 3100.0] {
        for goal in [DietGoal::Lose, DietGoal::Maintain, DietGoal::Gain] {
            let plan = generate_diet_plan(&DietPlanRequest {
                target_calories: target,
                goal,
                diet_preference: None,
            })
            .unwrap();
            let macros = plan.macronutrients;

            assert_eq!(
                macros.protein.grams,
                round_half_up(macros.protein.calories as f64 / 4.0)
            );
            assert_eq!(
                macros.carbs.grams,
                round_half_up(macros.carbs.calories as f64 / 4.0)
            );
            assert_eq!(
                macros.fat.grams,
                round_half_up(macros.fat.calories as f64 / 9.0)
            );
        }
    }
}

#[test]
fn test_diet_preference_does_not_change_plan() {
    let baseline = generate_diet_plan(&DietPlanRequest {
        target_calories: 2200.0,
        goal: DietGoal::Gain,
        diet_preference: None,
    })
    .unwrap();

    for preference in DietPreference::ALL {
        let plan = generate_diet_plan(&DietPlanRequest {
            target_calories: 2200.0,
            goal: DietGoal::Gain,
            diet_preference: Some(preference),
        })
        .unwrap();
        assert_eq!(plan, baseline, "{preference:?}");
    }
}

#[test]
fn test_diet_has_five_fixed_tips() {
    let lose = generate_diet_plan(&DietPlanRequest {
        target_calories: 1500.0,
        goal: DietGoal::Lose,
        diet_preference: None,
    })
    .unwrap();
    let gain = generate_diet_plan(&DietPlanRequest {
        target_calories: 3000.0,
        goal: DietGoal::Gain,
        diet_preference: None,
    })
    .unwrap();

    assert_eq!(lose.tips.len(), 5);
    assert_eq!(lose.tips, gain.tips);
}

// ============================================================================
// WORKOUT PLAN TESTS
// ============================================================================

#[test]
fn test_beginner_three_days_forty_minutes() {
    let plan = generate_workout_plan(&WorkoutPlanRequest {
        fitness_level: FitnessLevel::Beginner,
        goal: WorkoutGoal::GeneralFitness,
        days_per_week: 3,
        time_per_session: 40,
    })
    .unwrap();

    assert_eq!(plan.weekly_plan.len(), 3);
    for (index, day) in plan.weekly_plan.iter().enumerate() {
        assert_eq!(day.day, format!("Day {}", index + 1));
        assert_eq!(day.exercises.len(), 2);
        assert_eq!(day.exercises[0].name, "Squats");
        assert_eq!(day.exercises[1].name, "Push-ups");
    }
    assert_eq!(plan.tips.len(), 6);
}

#[test]
fn test_plan_shape_for_all_levels() {
    for level in [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ] {
        for days in 1..=7 {
            for minutes in [15, 29, 30, 45, 60, 74, 75, 120, 180] {
                let plan = generate_workout_plan(&WorkoutPlanRequest {
                    fitness_level: level,
                    goal: WorkoutGoal::BuildMuscle,
                    days_per_week: days,
                    time_per_session: minutes,
                })
                .unwrap();

                let expected = level.exercises().len().min((minutes / 15) as usize);
                assert_eq!(plan.weekly_plan.len(), days as usize);
                assert!(plan
                    .weekly_plan
                    .iter()
                    .all(|day| day.exercises.len() == expected
                        && day.exercises[..] == level.exercises()[..expected]));
            }
        }
    }
}

#[test]
fn test_workout_range_errors() {
    let base = WorkoutPlanRequest {
        fitness_level: FitnessLevel::Advanced,
        goal: WorkoutGoal::LoseWeight,
        days_per_week: 4,
        time_per_session: 60,
    };

    for request in [
        WorkoutPlanRequest {
            days_per_week: 0,
            ..base
        },
        WorkoutPlanRequest {
            days_per_week: 8,
            ..base
        },
        WorkoutPlanRequest {
            time_per_session: 14,
            ..base
        },
        WorkoutPlanRequest {
            time_per_session: 181,
            ..base
        },
    ] {
        let err = generate_workout_plan(&request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_workout_goal_does_not_change_plan() {
    let plans: Vec<_> = WorkoutGoal::ALL
        .into_iter()
        .map(|goal| {
            generate_workout_plan(&WorkoutPlanRequest {
                fitness_level: FitnessLevel::Intermediate,
                goal,
                days_per_week: 5,
                time_per_session: 50,
            })
            .unwrap()
        })
        .collect();

    assert!(plans.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_workout_is_idempotent() {
    let request = WorkoutPlanRequest {
        fitness_level: FitnessLevel::Advanced,
        goal: WorkoutGoal::ImproveEndurance,
        days_per_week: 6,
        time_per_session: 90,
    };
    assert_eq!(
        generate_workout_plan(&request).unwrap(),
        generate_workout_plan(&request).unwrap()
    );
}
