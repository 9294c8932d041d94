//! Shortcuts catalog
//!
//! Static navigation entries for the console landing page. Rendering is
//! the external grid widget's job; this module only supplies the
//! entries and decorates them into cards with a computed logo URL.

use serde::Serialize;

/// One navigation entry of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub link: String,
    pub image: String,
    pub name: String,
    pub description: String,
}

/// A catalog entry decorated for the grid-card renderer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutCard {
    pub link: String,
    pub image: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub created_time: String,
}

impl Shortcut {
    /// Create a catalog entry
    pub fn new(
        link: impl Into<String>,
        image: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            link: link.into(),
            image: image.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// The built-in console navigation entries
    ///
    /// Display strings are English defaults; localization happens in
    /// the embedding shell.
    pub fn builtin() -> Vec<Shortcut> {
        vec![
            Shortcut::new(
                "/assets",
                "/organizations",
                "Assets",
                "Machines can be connected via RDP, VNC or SSH",
            ),
            Shortcut::new(
                "/sessions",
                "/users",
                "Sessions",
                "Active or history connection sessions",
            ),
            Shortcut::new("/records", "/providers", "Records", "Audit logs"),
            Shortcut::new(
                "/workbench",
                "/applications",
                "Workbench",
                "Remote desktop management all in one screen",
            ),
        ]
    }

    /// Decorate into a card: logo URL from the static base plus an
    /// empty creation-time field the grid renderer expects
    pub fn into_card(self, base_url: &str) -> ShortcutCard {
        let logo = format!("{}/img{}.png", base_url, self.image);
        ShortcutCard {
            link: self.link,
            image: self.image,
            name: self.name,
            description: self.description,
            logo,
            created_time: String::new(),
        }
    }
}

/// The built-in catalog, decorated against `base_url`
pub fn catalog_cards(base_url: &str) -> Vec<ShortcutCard> {
    Shortcut::builtin()
        .into_iter()
        .map(|shortcut| shortcut.into_card(base_url))
        .collect()
}
