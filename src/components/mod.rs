//! UI Components
//!
//! Sections of the landing page.

mod nav_bar;
mod hero;
mod filter_bar;
mod coffee_card;
mod menu_section;
mod site_footer;

pub use nav_bar::NavBar;
pub use hero::Hero;
pub use filter_bar::FilterBar;
pub use coffee_card::CoffeeCard;
pub use menu_section::MenuSection;
pub use site_footer::SiteFooter;
