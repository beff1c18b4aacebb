use crate::channel::FavoriteChannel;
use crate::domain::{Item, ItemId};

/// View model for a single item's detail screen.
///
/// Holds its own copy of the item. Toggling the favorite flips that copy
/// right away and publishes the id so any list holding the same item
/// follows.
pub struct ItemDetail {
    item: Item,
    favorites: FavoriteChannel,
}

impl ItemDetail {
    pub fn new(item: Item, favorites: FavoriteChannel) -> Self {
        Self { item, favorites }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn tagline(&self) -> &str {
        self.item.tagline()
    }

    pub fn description(&self) -> &str {
        self.item.description()
    }

    pub fn image_url(&self) -> &str {
        self.item.image_url()
    }

    pub fn abv(&self) -> f64 {
        self.item.abv()
    }

    pub fn ibu(&self) -> f64 {
        self.item.ibu_or_default()
    }

    pub fn is_favorite(&self) -> bool {
        self.item.is_favorite()
    }

    pub fn abv_label(&self) -> String {
        format!("Abv: {}%", self.abv())
    }

    pub fn ibu_label(&self) -> String {
        format!("Ibu: {}", self.ibu())
    }

    pub fn tagline_label(&self) -> String {
        format!("Tagline: {}", self.tagline())
    }

    pub fn toggle_favorite(&mut self) {
        self.item.toggle_favorite();
        self.favorites.publish(self.item.id());
    }
}
