//! Appearance settings persisted under `theme`, `accentColor`, `avatarLetter`.

use crate::model::appearance::{AccentColor, Appearance, AvatarLetter, Theme};
use crate::storage::{StorageGateway, StorageKey};
use crate::store::StoreResult;

pub struct AppearanceService<'g, G: StorageGateway> {
    gateway: &'g G,
}

impl<'g, G: StorageGateway> AppearanceService<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// Current settings; unset or corrupt keys fall back to defaults.
    pub fn load(&self) -> Appearance {
        Appearance {
            theme: self.gateway.get(StorageKey::Theme, Theme::default()),
            accent_color: self
                .gateway
                .get(StorageKey::AccentColor, AccentColor::default()),
            avatar_letter: self
                .gateway
                .get(StorageKey::AvatarLetter, AvatarLetter::default()),
        }
    }

    pub fn set_theme(&self, theme: &str) -> StoreResult<Theme> {
        let theme = Theme::parse(theme)?;
        self.gateway.set(StorageKey::Theme, &theme)?;
        Ok(theme)
    }

    /// Flips light/dark and persists the result.
    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let theme = self.load().theme.toggled();
        self.gateway.set(StorageKey::Theme, &theme)?;
        Ok(theme)
    }

    pub fn set_accent_color(&self, value: &str) -> StoreResult<AccentColor> {
        let color = AccentColor::parse(value)?;
        self.gateway.set(StorageKey::AccentColor, &color)?;
        Ok(color)
    }

    pub fn set_avatar_letter(&self, value: &str) -> StoreResult<AvatarLetter> {
        let letter = AvatarLetter::parse(value)?;
        self.gateway.set(StorageKey::AvatarLetter, &letter)?;
        Ok(letter)
    }
}
