//! Weapon definitions loaded from RON files.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::weapon::{DefaultWeapon, DefinedWeapon, Weapon};
use crate::core::read_ron;

/// Directory holding one RON file per weapon.
pub const WEAPONS_DIR: &str = "assets/data/weapons";

/// Resource holding all loaded weapon definitions, keyed by weapon name.
#[derive(Resource, Default)]
pub struct WeaponRegistry {
    pub definitions: HashMap<String, DefinedWeapon>,
}

impl WeaponRegistry {
    pub fn insert(&mut self, definition: DefinedWeapon) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&DefinedWeapon> {
        self.definitions.get(name)
    }

    /// Build a weapon by name. The built-in default weapon is always known.
    pub fn create(&self, name: &str) -> Option<Box<dyn Weapon>> {
        if name == DefaultWeapon::NAME {
            return Some(Box::new(DefaultWeapon::default()));
        }

        self.get(name)
            .cloned()
            .map(|definition| Box::new(definition) as Box<dyn Weapon>)
    }

    /// Read every `.ron` file in `dir`. Broken files are logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) {
        if !dir.exists() {
            warn!("Weapon definitions directory not found: {:?}", dir);
            return;
        }

        let Ok(entries) = fs::read_dir(dir) else {
            warn!("Failed to read weapon definitions directory");
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "ron") {
                match read_ron::<DefinedWeapon>(&path) {
                    Ok(definition) => {
                        info!("Loaded weapon definition: {}", definition.name);
                        self.insert(definition);
                    }
                    Err(e) => error!("{}", e),
                }
            }
        }
    }
}

/// Load all weapon definitions from the assets/data/weapons/ directory.
pub fn load_weapon_definitions(mut registry: ResMut<WeaponRegistry>) {
    registry.load_dir(Path::new(WEAPONS_DIR));

    info!("Loaded {} weapon definitions", registry.definitions.len());
}
