use serde::{Deserialize, Serialize};

pub type ItemId = i64;

/// One catalog entry as served by the remote API.
///
/// Everything except the favorite flag is fixed at decode time. A fresh
/// fetch replaces the whole value; fields are never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    tagline: String,
    image_url: String,
    abv: f64,
    #[serde(default)]
    ibu: Option<f64>,
    description: String,
    #[serde(skip_deserializing, default)]
    is_favorite: bool,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        tagline: impl Into<String>,
        image_url: impl Into<String>,
        abv: f64,
        ibu: Option<f64>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tagline: tagline.into(),
            image_url: image_url.into(),
            abv,
            ibu,
            description: description.into(),
            is_favorite: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn abv(&self) -> f64 {
        self.abv
    }

    /// Bitterness as served; `None` when the API omitted it.
    pub fn ibu(&self) -> Option<f64> {
        self.ibu
    }

    /// Bitterness for display, with a missing value shown as zero.
    pub fn ibu_or_default(&self) -> f64 {
        self.ibu.unwrap_or(0.0)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}
