use prototype_framework::{Prototype, Shared};
use prototype_sample::model::{DeepStore, Location, LocationUpdate, ShallowStore, StoreUpdate};

fn islamabad() -> Location {
    Location::new("F8", "Islamabad")
}

fn moved_to_lahore() -> StoreUpdate {
    StoreUpdate {
        location: Some(LocationUpdate {
            city: Some("Lahore".into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// --- Shallow ---

#[test]
fn test_shallow_clone_shares_location() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let save_mart = best_buy.clone();

    assert!(Shared::ptr_eq(&best_buy.location, &save_mart.location));
    assert_eq!(Shared::handle_count(&best_buy.location), 2);
}

#[test]
fn test_shallow_clone_mutation_is_visible_through_prototype() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let save_mart = best_buy.clone();

    save_mart.location.borrow_mut().city = "Lahore".into();

    assert_eq!(best_buy.location.borrow().city, "Lahore");
    assert_eq!(save_mart.location.borrow().city, "Lahore");
}

#[test]
fn test_shallow_prototype_mutation_is_visible_through_clone() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let save_mart = best_buy.clone();

    best_buy.location.borrow_mut().sector = "G9".into();

    assert_eq!(save_mart.location.borrow().sector, "G9");
}

#[test]
fn test_shallow_clone_copies_name_by_value() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let mut save_mart = best_buy.clone();

    save_mart.name = "saveMart".into();

    assert_eq!(best_buy.name, "bestBuy");
}

#[test]
fn test_shallow_clone_with_moves_prototype_too() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let save_mart = best_buy.clone_with(StoreUpdate {
        name: Some("saveMart".into()),
        ..moved_to_lahore()
    });

    assert_eq!(save_mart.name, "saveMart");
    assert_eq!(best_buy.name, "bestBuy");
    assert_eq!(best_buy.location.borrow().city, "Lahore");
}

#[test]
fn test_shared_location_outlives_prototype() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let save_mart = best_buy.clone();
    drop(best_buy);

    assert_eq!(Shared::handle_count(&save_mart.location), 1);
    assert_eq!(*save_mart.location.borrow(), islamabad());
}

// --- Deep ---

#[test]
fn test_deep_clone_owns_a_distinct_location() {
    let nike = DeepStore::new("bestBuy", islamabad());
    let adidas = nike.clone();

    assert_ne!(nike.location.city.as_ptr(), adidas.location.city.as_ptr());
    assert_ne!(nike.location.sector.as_ptr(), adidas.location.sector.as_ptr());
    assert_eq!(nike.location, adidas.location);
}

#[test]
fn test_deep_clone_mutation_is_invisible_to_prototype() {
    let nike = DeepStore::new("bestBuy", islamabad());
    let mut adidas = nike.clone();

    adidas.location.city = "Lahore".into();

    assert_eq!(nike.location.city, "Islamabad");
    assert_eq!(adidas.location.city, "Lahore");
}

#[test]
fn test_deep_prototype_mutation_is_invisible_to_clone() {
    let mut nike = DeepStore::new("bestBuy", islamabad());
    let adidas = nike.clone();

    nike.location.sector = "G9".into();

    assert_eq!(adidas.location.sector, "F8");
}

#[test]
fn test_deep_clone_with_leaves_prototype_in_place() {
    let nike = DeepStore::new("bestBuy", islamabad());
    let adidas = nike.clone_with(moved_to_lahore());

    assert_eq!(nike, DeepStore::new("bestBuy", islamabad()));
    assert_eq!(adidas.location.city, "Lahore");
    assert_eq!(adidas.location.sector, "F8");
}

// --- Conversions ---

#[test]
fn test_deepen_detaches_from_shared_location() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let mut deep = best_buy.deepen();

    deep.location.city = "Lahore".into();

    assert_eq!(best_buy.location.borrow().city, "Islamabad");
    assert_eq!(Shared::handle_count(&best_buy.location), 1);
}

#[test]
fn test_share_turns_deep_store_shallow() {
    let best_buy = DeepStore::new("bestBuy", islamabad()).share();
    let save_mart = best_buy.clone();

    save_mart.location.borrow_mut().city = "Lahore".into();

    assert_eq!(best_buy.location.borrow().city, "Lahore");
}

// --- Cloning never mutates the source ---

#[test]
fn test_cloning_leaves_source_unchanged() {
    let shallow = ShallowStore::new("bestBuy", islamabad());
    let deep = DeepStore::new("bestBuy", islamabad());

    let _shallow_copy = shallow.clone();
    let _deep_copy = deep.clone();

    assert_eq!(shallow, ShallowStore::new("bestBuy", islamabad()));
    assert_eq!(deep, DeepStore::new("bestBuy", islamabad()));
}

#[test]
fn test_shallow_store_debug_while_location_is_borrowed() {
    let best_buy = ShallowStore::new("bestBuy", islamabad());
    let _guard = best_buy.location.borrow_mut();

    let rendered = format!("{:?}", best_buy);

    assert!(rendered.contains("bestBuy"));
    assert!(rendered.contains("<borrowed>"));
}
