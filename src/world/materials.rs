//! Named materials shared by the arena, projectiles and the aim marker.

use bevy::prelude::*;
use std::collections::HashMap;

/// Material registry mapping material names to handles.
#[derive(Resource, Default)]
pub struct MaterialRegistry {
    materials: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let mut registry = Self::default();

        // Plain light grey, used for projectiles and the aim marker
        registry.insert(
            "default",
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.8, 0.8),
                perceptual_roughness: 0.6,
                ..default()
            }),
        );

        // Stone - floor and pillars
        registry.insert(
            "stone",
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.28, 0.27, 0.26),
                perceptual_roughness: 0.9,
                ..default()
            }),
        );

        registry.insert(
            "brick",
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.55, 0.25, 0.18),
                perceptual_roughness: 0.85,
                ..default()
            }),
        );

        registry.insert(
            "metal",
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.42, 0.42, 0.44),
                perceptual_roughness: 0.3,
                metallic: 0.8,
                ..default()
            }),
        );

        // Target blocks glow a little so they read from far away
        registry.insert(
            "target",
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.55, 0.1),
                emissive: LinearRgba::new(0.2, 0.1, 0.0, 1.0),
                ..default()
            }),
        );

        registry
    }

    pub fn insert(&mut self, name: &str, handle: Handle<StandardMaterial>) {
        self.materials.insert(name.to_string(), handle);
    }

    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<Handle<StandardMaterial>> {
        self.materials.get(name).cloned()
    }

    /// Look up a material, falling back to "default".
    pub fn get_or_default(&self, name: &str) -> Option<Handle<StandardMaterial>> {
        self.get(name).or_else(|| self.get("default"))
    }
}

/// Create the material registry at startup.
pub fn setup_materials(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    commands.insert_resource(MaterialRegistry::new(&mut materials));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_fallback() {
        let mut assets = Assets::<StandardMaterial>::default();
        let registry = MaterialRegistry::new(&mut assets);

        assert!(registry.get("brick").is_some());
        assert!(registry.get("marble").is_none());
        assert_eq!(registry.get_or_default("marble"), registry.get("default"));
    }
}
