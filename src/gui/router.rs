// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::search::PAGE,
    &pages::scoring::PAGE,
    &pages::team_rules::PAGE,
    &pages::other_rules::PAGE,
    &pages::terminology::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
