use super::*;

#[test]
fn resolve_returns_set_with_matching_base() {
    for set in LAYER_SETS {
        let resolved = resolve_layer_set(set.base).expect("supported base count");
        assert_eq!(resolved.base, set.base);
    }
}

#[test]
fn resolve_rejects_unknown_count() {
    match resolve_layer_set(7) {
        Err(FlowerError::Configuration { base_count }) => assert_eq!(base_count, 7),
        other => panic!("expected Configuration error, got {other:?}"),
    }
}

#[test]
fn layer_sets_shrink_inwards() {
    for set in LAYER_SETS {
        assert!(set.base >= set.mid, "base must not be smaller than mid: {set:?}");
        assert!(set.mid >= set.inner, "mid must not be smaller than inner: {set:?}");
    }
}

#[test]
fn count_for_selects_the_right_ring() {
    let set = LayerSet::new(13, 8, 5);
    assert_eq!(set.count_for(Layer::Base), 13);
    assert_eq!(set.count_for(Layer::Mid), 8);
    assert_eq!(set.count_for(Layer::Inner), 5);
}

#[test]
fn total_sums_all_rings() {
    assert_eq!(LayerSet::new(21, 13, 8).total(), 42);
    assert_eq!(LayerSet::new(5, 5, 3).total(), 13);
}

#[test]
fn layers_iterate_outermost_first() {
    assert_eq!(Layer::ALL[0], Layer::Base);
    assert_eq!(Layer::ALL[2], Layer::Inner);
    assert_eq!(Layer::Mid.index(), 1);
}
