use std::time::{Duration, Instant};

use category_wheel::category::{CategoryConfig, CategoryTable, TableError};
use category_wheel::timer::SpinTimer;
use category_wheel::wheel::{Phase, Wheel, MAX_TILES};

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn create_table(entries: &[(&str, &[&str])]) -> CategoryTable {
    let configs = entries
        .iter()
        .map(|(name, words)| CategoryConfig {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        })
        .collect();

    CategoryTable::new(configs).expect("test table is valid")
}

fn ab_table() -> CategoryTable {
    create_table(&[("A", &["x", "y"]), ("B", &["p", "q"])])
}

fn settled_wheel(table: CategoryTable, seed: u64) -> Wheel {
    let mut wheel = Wheel::new(table, seed);

    assert!(wheel.spin());
    wheel.finish_spin().expect("spin settles");

    wheel
}

#[test]
fn test_spin_selects_configured_category() {
    for seed in 0..20 {
        let wheel = settled_wheel(ab_table(), seed);
        let selected = wheel.selected_category().expect("category selected");

        assert!(["A", "B"].contains(&selected));
    }
}

#[test]
fn test_scenario_ab_table_spin() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    assert_eq!(wheel.phase(), Phase::Idle);
    assert!(wheel.spin());
    assert_eq!(wheel.phase(), Phase::Spinning);

    wheel.finish_spin().expect("spin settles");

    let view = wheel.view();
    assert!(!view.spinning);
    assert!(view.drawn_tiles.is_empty());
    assert!(["A", "B"].contains(&view.selected_category.as_deref().unwrap()));
}

#[test]
fn test_draw_limit_never_exceeded() {
    let mut wheel = settled_wheel(ab_table(), TEST_SEED);

    for _ in 0..MAX_TILES {
        assert!(wheel.draw_tile().is_some());
    }

    assert_eq!(wheel.drawn_tiles().len(), MAX_TILES);

    // 7th draw is a no-op
    assert!(wheel.draw_tile().is_none());
    assert_eq!(wheel.drawn_tiles().len(), MAX_TILES);
}

#[test]
fn test_drawn_tiles_belong_to_selected_category() {
    let table = create_table(&[
        ("letters", &["a", "b", "c"]),
        ("numbers", &["one", "two", "three"]),
    ]);

    for seed in 0..10 {
        let mut wheel = settled_wheel(table.clone(), seed);
        let selected = wheel.selected_category().unwrap().to_string();

        let expected: &[&str] = if selected == "letters" {
            &["a", "b", "c"]
        } else {
            &["one", "two", "three"]
        };

        for _ in 0..MAX_TILES {
            let word = wheel.draw_tile().expect("draw succeeds").to_string();
            assert!(expected.contains(&word.as_str()));
        }
    }
}

#[test]
fn test_spin_while_spinning_is_noop() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    assert!(wheel.spin());
    assert_eq!(wheel.phase(), Phase::Spinning);

    // re-entrant spin changes nothing; the in-flight spin still settles
    assert!(!wheel.spin());
    assert_eq!(wheel.phase(), Phase::Spinning);

    assert!(wheel.finish_spin().is_some());
    assert!(wheel.selected_category().is_some());
}

#[test]
fn test_spin_locked_while_drawing() {
    let mut wheel = settled_wheel(ab_table(), TEST_SEED);

    assert!(!wheel.can_spin());
    assert!(!wheel.spin());

    wheel.draw_tile().unwrap();

    // still locked mid-sequence
    assert!(!wheel.spin());
    assert_eq!(wheel.drawn_tiles().len(), 1);
}

#[test]
fn test_limit_unlocks_wheel() {
    let mut wheel = settled_wheel(ab_table(), TEST_SEED);

    for _ in 0..MAX_TILES {
        wheel.draw_tile().unwrap();
    }

    assert!(matches!(wheel.phase(), Phase::LimitReached { .. }));
    assert!(wheel.can_spin());
    assert!(!wheel.can_draw());

    // the category stays visible until the next spin settles
    assert!(wheel.selected_category().is_some());

    assert!(wheel.spin());
    wheel.finish_spin().unwrap();

    assert!(wheel.drawn_tiles().is_empty());
    assert!(wheel.can_draw());
}

#[test]
fn test_draw_without_category_is_noop() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    assert!(wheel.draw_tile().is_none());
    assert!(wheel.drawn_tiles().is_empty());
    assert_eq!(wheel.phase(), Phase::Idle);
}

#[test]
fn test_draw_while_spinning_is_noop() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    wheel.spin();

    assert!(wheel.draw_tile().is_none());
    assert!(wheel.drawn_tiles().is_empty());
}

#[test]
fn test_finish_spin_without_spin_is_noop() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    assert!(wheel.finish_spin().is_none());
    assert_eq!(wheel.phase(), Phase::Idle);
}

#[test]
fn test_single_word_category_always_draws_it() {
    let mut wheel = settled_wheel(create_table(&[("only", &["word"])]), TEST_SEED);

    for _ in 0..MAX_TILES {
        assert_eq!(wheel.draw_tile(), Some("word"));
    }
}

#[test]
fn test_same_seed_is_deterministic() {
    let table = create_table(&[
        ("A", &["x", "y", "z"]),
        ("B", &["p", "q", "r"]),
        ("C", &["m", "n", "o"]),
    ]);

    let mut wheel1 = settled_wheel(table.clone(), TEST_SEED);
    let mut wheel2 = settled_wheel(table, TEST_SEED);

    assert_eq!(wheel1.selected_category(), wheel2.selected_category());
    assert_eq!(wheel1.pointer_angle(), wheel2.pointer_angle());

    for _ in 0..MAX_TILES {
        let tile1 = wheel1.draw_tile().map(str::to_owned);
        let tile2 = wheel2.draw_tile().map(str::to_owned);

        assert_eq!(tile1, tile2);
    }
}

#[test]
fn test_pointer_angle_matches_selected_index() {
    let table = create_table(&[
        ("north", &["a"]),
        ("east", &["b"]),
        ("south", &["c"]),
        ("west", &["d"]),
    ]);

    for seed in 0..10 {
        let wheel = settled_wheel(table.clone(), seed);

        let names = wheel.table().names();
        let selected = wheel.selected_category().unwrap();
        let index = names.iter().position(|n| n == selected).unwrap();

        let displayed = wheel.displayed_angle();
        let expected = index as f32 * 90.0;

        assert!(displayed >= 0.0 && displayed < 360.0);
        assert!((displayed - expected).abs() < 1e-3);

        // raw angle carries 3 to 6 full turns on top
        let turns = (wheel.pointer_angle() - expected) / 360.0;
        assert!((3.0..=6.0).contains(&turns));
    }
}

#[test]
fn test_view_model_contents() {
    let mut wheel = Wheel::new(ab_table(), TEST_SEED);

    let view = wheel.view();
    assert_eq!(view.category_names, vec!["A", "B"]);
    assert!(view.can_spin);
    assert!(!view.can_draw);
    assert!(view.selected_category.is_none());

    wheel.spin();
    let view = wheel.view();
    assert!(view.spinning);
    assert!(!view.can_spin);
    assert!(!view.can_draw);

    wheel.finish_spin();
    wheel.draw_tile();

    let view = wheel.view();
    assert!(!view.spinning);
    assert!(view.can_draw);
    assert_eq!(view.drawn_tiles.len(), 1);
}

#[test]
fn test_empty_table_rejected() {
    let result = CategoryTable::new(vec![]);

    assert!(matches!(result, Err(TableError::EmptyTable)));
}

#[test]
fn test_empty_word_list_rejected() {
    let configs = vec![
        CategoryConfig {
            name: "ok".to_string(),
            words: vec!["word".to_string()],
        },
        CategoryConfig {
            name: "empty".to_string(),
            words: vec![],
        },
    ];

    let result = CategoryTable::new(configs);

    assert!(matches!(result, Err(TableError::EmptyCategory(name)) if name == "empty"));
}

#[test]
fn test_duplicate_category_rejected() {
    let configs = vec![
        CategoryConfig {
            name: "twice".to_string(),
            words: vec!["a".to_string()],
        },
        CategoryConfig {
            name: "twice".to_string(),
            words: vec!["b".to_string()],
        },
    ];

    let result = CategoryTable::new(configs);

    assert!(matches!(result, Err(TableError::DuplicateCategory(name)) if name == "twice"));
}

#[test]
fn test_table_from_json() {
    let json = r#"[
        {"name": "A", "words": ["x", "y"]},
        {"name": "B", "words": ["p", "q"]}
    ]"#;

    let table = CategoryTable::from_json(json).expect("valid config");
    assert_eq!(table.len(), 2);
    assert_eq!(table.names(), vec!["A", "B"]);

    assert!(matches!(
        CategoryTable::from_json("not json"),
        Err(TableError::Parse(_))
    ));

    // validation also applies to parsed configs
    assert!(matches!(
        CategoryTable::from_json(r#"[{"name": "A", "words": []}]"#),
        Err(TableError::EmptyCategory(_))
    ));
}

#[test]
fn test_demo_table_is_valid() {
    let table = CategoryTable::demo();

    assert!(table.len() >= 2);

    let wheel = settled_wheel(table.clone(), TEST_SEED);
    assert!(table.names().contains(&wheel.selected_category().unwrap().to_string()));
}

#[test]
fn test_spin_timer_elapses() {
    let timer = SpinTimer::start(Duration::from_millis(30));

    assert!(!timer.is_elapsed());

    timer.wait();

    assert!(timer.is_elapsed());
    // stays elapsed on repeated polls
    assert!(timer.is_elapsed());
}

#[test]
fn test_spin_timer_cancelled_on_drop() {
    let start = Instant::now();
    let timer = SpinTimer::start(Duration::from_secs(30));

    drop(timer);

    // drop joins the worker, which wakes immediately on cancel
    assert!(start.elapsed() < Duration::from_secs(1));
}
