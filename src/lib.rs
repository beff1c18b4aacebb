//! # Taproom
//!
//! A terminal browser for a paginated beer catalog served as JSON.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Decoder → PaginatedListController → TUI / CLI
//!                             ↑
//!         ItemDetail → FavoriteChannel
//! ```
//!
//! - [`fetcher`]: HTTP transport for catalog pages
//! - [`decoder`]: JSON page body to [`Item`](domain::Item)s
//! - [`catalog`]: the paginated list controller and the detail view model
//! - [`channel`]: typed publish/subscribe carrying favorite toggles
//! - [`tui`]: list and detail screens built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the whole catalog
//! taproom list
//!
//! # Show one beer
//! taproom show 7
//!
//! # Browse interactively
//! taproom tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// decoder, configuration and favorite channel, and hands out controllers.
pub mod app;

/// The browsing session.
///
/// - [`PaginatedListController`](catalog::PaginatedListController): paging, loading state, favorites
/// - [`ItemDetail`](catalog::ItemDetail): detail view model over a copy of one item
/// - [`PageEndpoint`](catalog::PageEndpoint): page URL construction
pub mod catalog;

/// In-process publish/subscribe.
pub mod channel;

/// Command-line interface using clap.
///
/// - `list [--json]` - Load every page and print the items
/// - `show <id>` - Print one item's details
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration loaded from `~/.config/taproom/config.toml`.
pub mod config;

/// Page body decoding.
pub mod decoder;

/// Core domain model ([`Item`](domain::Item)).
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Terminal user interface.
///
/// A scrolling list that loads more beers as the selection nears the end,
/// and a detail screen per beer. Keybindings: j/k navigate, Enter opens
/// details, f toggles favorite, o opens the image, Esc goes back, q quits.
pub mod tui;
