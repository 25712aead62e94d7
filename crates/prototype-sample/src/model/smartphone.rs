use prototype_framework::Prototype;
use serde::{Deserialize, Serialize};

/// A device descriptor with no nested ownership.
///
/// Every field is a plain value, so `clone()` is a full field-by-field copy and the
/// copy is independent of its prototype from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartPhone {
    pub name: String,
    pub model: String,
    pub price: String,
    pub company: String,
    pub battery_life: String,
    pub operating_system: String,
    pub has_eis: bool,
}

/// Payload for customizing a copied phone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartPhoneUpdate {
    pub name: Option<String>,
    pub model: Option<String>,
    pub price: Option<String>,
    pub company: Option<String>,
    pub battery_life: Option<String>,
    pub operating_system: Option<String>,
    pub has_eis: Option<bool>,
}

impl SmartPhone {
    /// Creates a new SmartPhone instance.
    ///
    /// # Arguments
    /// * `name` - Marketing name, e.g. "iPhone 8"
    /// * `model` - Short model code, e.g. "8"
    /// * `price` - Launch price as listed
    /// * `company` - Manufacturer
    /// * `battery_life` - Advertised battery life
    /// * `operating_system` - Shipped operating system
    /// * `has_eis` - Whether the camera has electronic image stabilization
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        price: impl Into<String>,
        company: impl Into<String>,
        battery_life: impl Into<String>,
        operating_system: impl Into<String>,
        has_eis: bool,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            price: price.into(),
            company: company.into(),
            battery_life: battery_life.into(),
            operating_system: operating_system.into(),
            has_eis,
        }
    }
}

impl Prototype for SmartPhone {
    type Patch = SmartPhoneUpdate;

    fn apply(&mut self, update: SmartPhoneUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(battery_life) = update.battery_life {
            self.battery_life = battery_life;
        }
        if let Some(operating_system) = update.operating_system {
            self.operating_system = operating_system;
        }
        if let Some(has_eis) = update.has_eis {
            self.has_eis = has_eis;
        }
    }
}
