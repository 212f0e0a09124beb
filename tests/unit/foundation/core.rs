use super::*;

fn items(n: u32) -> Vec<Item> {
    (1..=n)
        .map(|id| Item::new(id, format!("t{id}"), format!("tr{id}")))
        .collect()
}

#[test]
fn pair_new_orders_endpoints() {
    assert_eq!(Pair::new(5, 1), Pair { a: 1, b: 5 });
    assert!(Pair::new(3, 3).is_center());
    assert!(!Pair::new(0, 3).is_center());
}

#[test]
fn pair_partner_lookup() {
    let p = Pair::new(1, 4);
    assert_eq!(p.partner(1), Some(4));
    assert_eq!(p.partner(4), Some(1));
    assert_eq!(p.partner(2), None);
    assert_eq!(Pair::new(2, 2).partner(2), Some(2));
    assert!(p.contains(4));
    assert!(!p.contains(0));
}

#[test]
fn from_items_pairs_outside_in_and_validates() {
    for n in 0..9 {
        let ds = Dataset::from_items("t", items(n));
        assert_eq!(ds.len(), n as usize);
        ds.validate().unwrap();
    }
}

#[test]
fn validate_rejects_gaps_duplicates_and_out_of_range() {
    let mut ds = Dataset::from_items("t", items(4));
    ds.pairs.pop();
    assert!(ds.validate().is_err());

    let mut ds = Dataset::from_items("t", items(4));
    ds.pairs[1] = Pair::new(0, 2);
    assert!(ds.validate().is_err());

    let mut ds = Dataset::from_items("t", items(3));
    ds.pairs[0] = Pair::new(0, 7);
    assert!(ds.validate().is_err());

    let mut ds = Dataset::from_items("t", items(2));
    ds.pairs[0] = Pair { a: 1, b: 0 };
    assert!(ds.validate().is_err());
}

#[test]
fn collection_label_falls_back_to_id() {
    let c = Collection {
        id: 1,
        name: "Al-Faatiha".to_string(),
    };
    assert_eq!(c.label(), "1: Al-Faatiha");
    assert_eq!(Collection::unnamed(12).label(), "12");
}

#[test]
fn view_mode_parse_and_display() {
    assert_eq!("ring".parse::<ViewMode>().unwrap(), ViewMode::Ring);
    assert_eq!(" Tree ".parse::<ViewMode>().unwrap(), ViewMode::Tree);
    assert_eq!("TIMELINE".parse::<ViewMode>().unwrap(), ViewMode::Timeline);
    assert!("spiral".parse::<ViewMode>().is_err());
    assert_eq!(ViewMode::Timeline.to_string(), "timeline");
    assert_eq!(ViewMode::default(), ViewMode::Ring);
}
