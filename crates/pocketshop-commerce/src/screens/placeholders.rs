//! Favorites and profile screens. Both are static placeholders.

use serde::Serialize;

/// Favorites tab. Likes are not collected yet, so it always shows its empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoritesScreen {
    pub title: &'static str,
    pub empty_title: &'static str,
    pub empty_subtitle: &'static str,
}

impl Default for FavoritesScreen {
    fn default() -> Self {
        Self {
            title: "Favorites",
            empty_title: "No favorites yet",
            empty_subtitle: "Save products you love",
        }
    }
}

/// Profile tab for the signed-out guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileScreen {
    pub title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub menu: Vec<&'static str>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self {
            title: "Profile",
            name: "Guest User",
            email: "guest@example.com",
            menu: vec!["Settings", "Orders", "Help & Support"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_menu() {
        let profile = ProfileScreen::default();
        assert_eq!(profile.name, "Guest User");
        assert_eq!(profile.menu.len(), 3);
    }
}
