//! UI Components
//!
//! One component per tab plus the shared pieces they are built from.

mod collapse_toggle;
mod highlighted_text;
mod landing;
mod notes_tab;
mod overview_tab;
mod shopping_list_tab;
mod sunday_prep_tab;
mod tab_bar;
mod this_week_tab;

pub use collapse_toggle::CollapseToggle;
pub use highlighted_text::HighlightedText;
pub use landing::Landing;
pub use notes_tab::NotesTab;
pub use overview_tab::OverviewTab;
pub use shopping_list_tab::ShoppingListTab;
pub use sunday_prep_tab::SundayPrepTab;
pub use tab_bar::TabBar;
pub use this_week_tab::ThisWeekTab;
