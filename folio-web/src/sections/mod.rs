//! # Sections
//!
//! 页面的各个区块，按导航顺序排列。

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod shared;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
