//! Reusable view pieces shared by several pages.
//!
//! DESIGN
//! ======
//! Components read shared services and notices from context and keep their
//! decision logic in small pure functions next to the view.

pub mod nav_bar;
pub mod post_card;
pub mod post_composer;
pub mod splash;
pub mod toasts;
