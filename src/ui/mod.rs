//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod filters;
pub mod list;
pub mod loader;
pub mod modal;
pub mod search;
pub mod status;

pub use filters::render_filters;
pub use list::render_list;
pub use modal::render_modal;
pub use search::render_search;
pub use status::render_status;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Screen regions for the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub search: Rect,
    pub filters: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Split the terminal area into the main regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Filters
                Constraint::Min(0),    // Todo table
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            search: chunks[0],
            filters: chunks[1],
            list: chunks[2],
            status: chunks[3],
        }
    }
}

/// Render the complete UI.
///
/// # Returns
/// * `Rect` - Area of the to-do table, used for mouse hit-testing
pub fn render_ui(f: &mut Frame, app: &App) -> Rect {
    let area = f.area();
    let layout = AppLayout::new(area);
    let buf = f.buffer_mut();

    render_search(app, layout.search, buf);
    render_filters(app, layout.filters, buf);
    render_list(app, layout.list, buf);
    render_status(app, layout.status, buf);

    if app.is_modal_open {
        render_modal(app, area, buf);
    }

    layout.list
}
