//! # Prototype Walkthrough
//!
//! Replays the pattern step by step and logs what each copy looks like afterwards:
//!
//! 1.  Copy a [`SmartPhone`] and rename the copy.
//! 2.  Copy a phone through the type-erased interface and narrow it back.
//! 3.  Copy a [`ShallowStore`] and move the copy to another city.
//! 4.  Copy a [`DeepStore`] and move the copy to another city.
//!
//! ```bash
//! RUST_LOG=info cargo run -p prototype-sample
//! ```

use prototype_framework::tracing::setup_tracing;
use prototype_framework::{downcast, erase, Prototype, PrototypeError, Shared};
use prototype_sample::model::{
    DeepStore, Location, LocationUpdate, ShallowStore, SmartPhone, SmartPhoneUpdate, StoreUpdate,
};
use tracing::{info, info_span};

fn main() -> Result<(), PrototypeError> {
    setup_tracing();

    info!("Starting prototype walkthrough");

    {
        let _span = info_span!("smartphone").entered();
        let iphone_8 = SmartPhone::new("iPhone 8", "8", "599", "Apple", "24 Hrs", "iOS", false);
        let samsung_a71 = iphone_8.clone_with(SmartPhoneUpdate {
            name: Some("Samsung A71".into()),
            ..Default::default()
        });
        info!(prototype = %iphone_8.name, copy = %samsung_a71.name, "Renamed copy");
    }

    {
        let _span = info_span!("erased").entered();
        let iphone_12_pro = erase(SmartPhone::new(
            "iPhone 12 Pro",
            "12",
            "1299",
            "Apple",
            "24 Hrs",
            "iOS",
            false,
        ));
        let mut iphone_12_pro_max: SmartPhone = downcast(iphone_12_pro.clone_boxed())?;
        iphone_12_pro_max.name = "iPhone 12 Pro Max".into();
        info!(
            prototype = ?iphone_12_pro,
            copy = %iphone_12_pro_max.name,
            "Narrowed erased copy"
        );
    }

    let moved = StoreUpdate {
        location: Some(LocationUpdate {
            city: Some("Lahore, Pakistan".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    {
        let _span = info_span!("shallow").entered();
        let best_buy = ShallowStore::new("bestBuy", Location::new("F8", "Islamabad, Pakistan"));
        info!(prototype = %best_buy.location.borrow(), "Before");
        let save_mart = best_buy.clone_with(moved.clone());
        info!(
            prototype = %best_buy.location.borrow(),
            copy = %save_mart.location.borrow(),
            handles = Shared::handle_count(&best_buy.location),
            "Shallow copy moved, prototype moved with it"
        );
    }

    {
        let _span = info_span!("deep").entered();
        let nike_store = DeepStore::new("bestBuy", Location::new("F8", "Islamabad, Pakistan"));
        info!(prototype = %nike_store.location, "Before");
        let adidas_store = nike_store.clone_with(moved);
        info!(
            prototype = %nike_store.location,
            copy = %adidas_store.location,
            "Deep copy moved, prototype stayed"
        );
    }

    info!("Walkthrough completed successfully");
    Ok(())
}
