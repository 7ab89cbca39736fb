//! Terminal presentation: setup/teardown, layout, theme, and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
