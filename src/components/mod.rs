//! UI Components

pub mod avatar_menu;
pub mod bottom_nav;
pub mod icon;
pub mod imprint;
pub mod sidenav;
pub mod statusbar;
pub mod titlebar;

pub use avatar_menu::AvatarMenu;
pub use bottom_nav::BottomNav;
pub use icon::Icon;
pub use imprint::ImprintPopup;
pub use sidenav::Sidenav;
pub use statusbar::Statusbar;
pub use titlebar::Titlebar;
