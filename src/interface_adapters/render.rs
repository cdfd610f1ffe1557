use crate::domain::{Celebration, Wishlist};

// One display line per wishlist: its name.
pub fn render_wishlists(wishlists: &[Wishlist]) -> Vec<String> {
    wishlists
        .iter()
        .map(|wishlist| wishlist.name.clone())
        .collect()
}

// One display line per celebration: "title - date".
pub fn render_celebrations(celebrations: &[Celebration]) -> Vec<String> {
    celebrations
        .iter()
        .map(|celebration| format!("{} - {}", celebration.title, celebration.date))
        .collect()
}
