//! Property tests for round dealing and transitions.

use imp_core::{Catalog, Category, Phase, RandomPicker, ScriptedPicker, Session};
use proptest::prelude::*;

fn name_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,8}", 1..13)
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (prop::collection::vec("[a-z]{1,6}", 1..6), any::<bool>()),
        1..6,
    )
    .prop_map(|cats| {
        let mut categories: Vec<Category> = cats
            .into_iter()
            .enumerate()
            .map(|(i, (words, enabled))| {
                Category::new(format!("c{i}"), format!("Cat {i}"), words).with_enabled(enabled)
            })
            .collect();
        categories[0].enabled = true;
        Catalog::new(categories)
    })
}

fn view_all(session: &Session) -> Session {
    let mut s = session.clone();
    for p in session.players() {
        s = s.mark_viewed(p.id).unwrap();
    }
    s
}

proptest! {
    #[test]
    fn exactly_one_imposter_and_first_player(
        names in name_list(),
        catalog in catalog(),
        seed in any::<u64>()
    ) {
        let s = Session::start(&names, catalog.categories(), &mut RandomPicker::from_seed(seed))
            .unwrap();
        prop_assert_eq!(s.players().iter().filter(|p| p.is_imposter).count(), 1);
        prop_assert_eq!(s.players().iter().filter(|p| p.is_first_player).count(), 1);
        prop_assert_eq!(s.phase(), Phase::Reveal);
    }

    #[test]
    fn word_belongs_to_an_enabled_category(
        names in name_list(),
        catalog in catalog(),
        draws in prop::collection::vec(any::<usize>(), 4)
    ) {
        let s = Session::start(&names, catalog.categories(), &mut ScriptedPicker::new(draws))
            .unwrap();
        let category = s.category().unwrap();
        prop_assert!(category.enabled);
        prop_assert!(category.contains(s.word().unwrap()));
        prop_assert_eq!(catalog.get(&category.id), Some(category));
    }

    #[test]
    fn player_order_matches_input(names in name_list(), seed in any::<u64>()) {
        let catalog = Catalog::builtin();
        let s = Session::start(&names, catalog.categories(), &mut RandomPicker::from_seed(seed))
            .unwrap();
        let order: Vec<&str> = s.players().iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(order, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn mark_viewed_is_idempotent(
        names in name_list(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>()
    ) {
        let catalog = Catalog::builtin();
        let s = Session::start(&names, catalog.categories(), &mut RandomPicker::from_seed(seed))
            .unwrap();
        let id = s.players()[pick.index(s.players().len())].id;
        let once = s.mark_viewed(id).unwrap();
        let twice = once.mark_viewed(id).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn begin_refused_while_anyone_unviewed(
        names in name_list(),
        seed in any::<u64>(),
        skip in any::<prop::sample::Index>()
    ) {
        let catalog = Catalog::builtin();
        let s = Session::start(&names, catalog.categories(), &mut RandomPicker::from_seed(seed))
            .unwrap();
        let skipped = skip.index(s.players().len());
        let mut partial = s.clone();
        for (i, p) in s.players().iter().enumerate() {
            if i != skipped {
                partial = partial.mark_viewed(p.id).unwrap();
            }
        }
        prop_assert!(partial.begin().is_err());
        prop_assert_eq!(partial.phase(), Phase::Reveal);
    }

    #[test]
    fn reset_from_any_phase(names in name_list(), seed in any::<u64>(), phase in 0u8..3) {
        let catalog = Catalog::builtin();
        let reveal = Session::start(&names, catalog.categories(), &mut RandomPicker::from_seed(seed))
            .unwrap();
        let s = match phase {
            0 => Session::new(),
            1 => reveal,
            _ => view_all(&reveal).begin().unwrap(),
        };
        prop_assert_eq!(s.reset(), Session::new());
    }
}
