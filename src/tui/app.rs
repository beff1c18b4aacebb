use ratatui::widgets::ListState;

use crate::catalog::{ItemDetail, PaginatedListController};
use crate::domain::Item;

/// Rows from the end of the list at which the next page is requested.
pub const PREFETCH_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

pub struct TuiApp {
    pub screen: Screen,
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub has_more: bool,
    pub item_index: usize,
    pub item_list_state: ListState,
    pub detail: Option<ItemDetail>,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut item_list_state = ListState::default();
        item_list_state.select(Some(0));

        Self {
            screen: Screen::List,
            items: Vec::new(),
            is_loading: false,
            has_more: true,
            item_index: 0,
            item_list_state,
            detail: None,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-read the controller's state after a change notification.
    pub fn sync(&mut self, controller: &PaginatedListController) {
        self.items = controller.items();
        self.is_loading = controller.is_loading();
        self.has_more = controller.has_more();
        if self.item_index >= self.items.len() && !self.items.is_empty() {
            self.item_index = self.items.len() - 1;
        }
        self.item_list_state.select(Some(self.item_index));
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.item_index)
    }

    /// Whether the selection is close enough to the end to want another page.
    pub fn near_end(&self) -> bool {
        self.item_index + PREFETCH_THRESHOLD >= self.items.len()
    }

    pub fn move_up(&mut self) {
        match self.screen {
            Screen::List => {
                if self.item_index > 0 {
                    self.item_index -= 1;
                    self.item_list_state.select(Some(self.item_index));
                }
            }
            Screen::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.screen {
            Screen::List => {
                if !self.items.is_empty() && self.item_index < self.items.len() - 1 {
                    self.item_index += 1;
                    self.item_list_state.select(Some(self.item_index));
                }
            }
            Screen::Detail => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
        }
    }

    pub fn open_detail(&mut self, controller: &PaginatedListController) {
        let Some(id) = self.selected_item().map(Item::id) else {
            return;
        };
        if let Some(detail) = controller.detail(id) {
            self.detail = Some(detail);
            self.detail_scroll = 0;
            self.screen = Screen::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::List;
    }

    /// Flip the favorite of whatever is on screen.
    ///
    /// The list toggles through the controller directly; the detail screen
    /// toggles its own copy, which reaches the controller via the channel.
    pub fn toggle_favorite(&mut self, controller: &PaginatedListController) {
        if self.screen == Screen::Detail {
            if let Some(detail) = self.detail.as_mut() {
                detail.toggle_favorite();
                return;
            }
        }
        if let Some(id) = self.selected_item().map(Item::id) {
            controller.set_favorite(id);
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match (self.screen, self.detail.as_ref()) {
            (Screen::Detail, Some(detail)) => Some(detail.image_url()),
            _ => self.selected_item().map(Item::image_url),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
