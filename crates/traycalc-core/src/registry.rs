//! Tray registry: the host's list of items shown in the navigation tray.

use std::collections::HashMap;
use std::fmt;

use crate::config::TrayConfig;
use crate::error::{TrayError, TrayResult};
use crate::widget::CalculatorWidget;

/// Category holding the top navigation tray items.
pub const SYSTRAY_CATEGORY: &str = "systray";

/// Fixed identifier the calculator registers under.
pub const CALCULATOR_ITEM_ID: &str = "calculator";

type Factory = Box<dyn Fn() -> CalculatorWidget>;

/// A registered tray item.
pub struct TrayItem {
    pub id: String,
    pub sequence: i32,
    factory: Factory,
}

impl TrayItem {
    pub fn new(
        id: impl Into<String>,
        sequence: i32,
        factory: impl Fn() -> CalculatorWidget + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            sequence,
            factory: Box::new(factory),
        }
    }

    /// Build a fresh widget instance.
    pub fn instantiate(&self) -> CalculatorWidget {
        (self.factory)()
    }
}

impl fmt::Debug for TrayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrayItem")
            .field("id", &self.id)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

/// Items grouped by category.
#[derive(Debug, Default)]
pub struct TrayRegistry {
    categories: HashMap<String, Vec<TrayItem>>,
}

impl TrayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. An existing id is replaced only when `force` is set.
    pub fn add(&mut self, category: &str, item: TrayItem, force: bool) -> TrayResult<()> {
        let items = self.categories.entry(category.to_string()).or_default();
        if let Some(index) = items.iter().position(|existing| existing.id == item.id) {
            if !force {
                return Err(TrayError::DuplicateItem {
                    category: category.to_string(),
                    id: item.id,
                });
            }
            items.remove(index);
        }
        log::info!("Registered '{}' in '{}' (sequence {})", item.id, category, item.sequence);
        items.push(item);
        Ok(())
    }

    pub fn get(&self, category: &str, id: &str) -> TrayResult<&TrayItem> {
        self.categories
            .get(category)
            .and_then(|items| items.iter().find(|item| item.id == id))
            .ok_or_else(|| TrayError::UnknownItem {
                category: category.to_string(),
                id: id.to_string(),
            })
    }

    pub fn contains(&self, category: &str, id: &str) -> bool {
        self.get(category, id).is_ok()
    }

    pub fn remove(&mut self, category: &str, id: &str) -> TrayResult<TrayItem> {
        let items = self.categories.get_mut(category);
        let index = items
            .as_ref()
            .and_then(|items| items.iter().position(|item| item.id == id));
        match (items, index) {
            (Some(items), Some(index)) => Ok(items.remove(index)),
            _ => Err(TrayError::UnknownItem {
                category: category.to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// Items of `category` ordered by sequence, then registration order.
    pub fn items(&self, category: &str) -> Vec<&TrayItem> {
        let mut items: Vec<&TrayItem> = self
            .categories
            .get(category)
            .map(|items| items.iter().collect())
            .unwrap_or_default();
        items.sort_by_key(|item| item.sequence);
        items
    }
}

/// Register the calculator as described by `config`.
pub fn register_calculator(registry: &mut TrayRegistry, config: &TrayConfig) -> TrayResult<()> {
    let widget_config = config.clone();
    let item = TrayItem::new(config.item_id.clone(), config.sequence, move || {
        CalculatorWidget::from_config(&widget_config)
    });
    registry.add(&config.category, item, false)
}
