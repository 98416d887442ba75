//! 통합 테스트 - 레지스트리와 비용 조회

use std::sync::{Arc, Barrier};
use std::thread;

use typing_cost::model::{
    has_typing_model, typing_model, CostModel, CostTable, IndexLayout, KeyIndexer,
    MockTypingModel, SpecialRomanjiTable, TypingModel, TypingModelError, INFINITY, NO_DATA,
};
use typing_cost::query_costs;

fn ab_model() -> TypingModel {
    let indexer = KeyIndexer::new("ab", 2, IndexLayout::Dense).unwrap();
    let mut mapping = vec![0u32; indexer.capacity()];
    mapping[indexer.encode("ab").unwrap()] = 1;
    let table = CostTable::new(vec![NO_DATA, 3], mapping).unwrap();
    TypingModel::new(indexer, table).unwrap()
}

#[test]
fn test_ab_scenario() {
    let model = ab_model();
    assert_eq!(model.get_cost("ab").unwrap(), 3);
    assert_eq!(model.get_cost("ba").unwrap(), INFINITY);
}

#[test]
fn test_schemes_without_table_are_stable() {
    for table in SpecialRomanjiTable::ALL {
        if has_typing_model(table) {
            continue;
        }
        for _ in 0..3 {
            assert!(typing_model(table).is_none(), "{}", table);
        }
    }
}

#[test]
fn test_registry_identity() {
    let a = typing_model(SpecialRomanjiTable::TwelveKeysToHiragana).unwrap();
    let b = typing_model(SpecialRomanjiTable::TwelveKeysToHiragana).unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_concurrent_first_access() {
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let model = typing_model(SpecialRomanjiTable::ToggleFlickToHiragana).unwrap();
                (model as *const TypingModel as usize, model.get_cost("11").unwrap())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let (first_ptr, first_cost) = results[0];
    assert!(results.iter().all(|&(ptr, cost)| ptr == first_ptr && cost == first_cost));
    assert_eq!(first_cost, 16);
}

#[test]
fn test_concurrent_queries_are_pure() {
    let model = typing_model(SpecialRomanjiTable::QwertyMobileToHiragana).unwrap();
    let keys = ["ka", "ki", "shi", "kq", "zzz", "a", "-"];
    let expected: Vec<i32> = keys.iter().map(|k| model.get_cost(k).unwrap()).collect();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let costs: Vec<i32> = keys.iter().map(|k| model.get_cost(k).unwrap()).collect();
                    assert_eq!(costs, expected);
                }
            });
        }
    });
}

#[test]
fn test_costs_below_infinity() {
    let model = typing_model(SpecialRomanjiTable::GodanToHiragana).unwrap();
    for c in model.alphabet() {
        let cost = model.get_cost(&c.to_string()).unwrap();
        assert!(cost == INFINITY || (0..i32::from(NO_DATA)).contains(&cost));
    }
}

#[test]
fn test_out_of_alphabet_rejected() {
    let model = typing_model(SpecialRomanjiTable::TwelveKeysToHiragana).unwrap();
    assert_eq!(
        model.get_cost("1a"),
        Err(TypingModelError::OutOfAlphabet {
            character: 'a',
            position: 1
        })
    );
    assert!(matches!(
        model.get_cost("11111"),
        Err(TypingModelError::KeyTooLong { length: 5, max: 4 })
    ));
    // 길이 초과 + 알파벳 외 문자 → OutOfAlphabet
    assert_eq!(
        model.get_cost("1111a"),
        Err(TypingModelError::OutOfAlphabet {
            character: 'a',
            position: 4
        })
    );
}

#[test]
fn test_dependency_injection_with_mock() {
    let mock = MockTypingModel::new().with_cost("ka", 1);
    let real = typing_model(SpecialRomanjiTable::QwertyMobileToHiragana).unwrap();

    let models: [&dyn CostModel; 2] = [&mock, real];
    for model in models {
        let reports = query_costs(model, &["ka"]);
        assert!(reports[0].cost.is_some());
    }
}
