//! Vehicle catalog
//!
//! Immutable after construction. One profile is cloned into each session.

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Catalog key for a vehicle (menu slot number)
pub type VehicleId = u32;

/// Tuning and presentation data for one selectable bike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub id: VehicleId,
    pub display_name: String,
    /// Sprite path handed to the host renderer
    pub image_ref: String,
    /// Scales how hard tilt pulls the bike further over
    pub gravity_factor: f32,
    /// Corrective velocity per tick while a lean key is held
    pub lean_strength: f32,
    /// Score earned per tick before difficulty
    pub speed_factor: f32,
    /// Packed 0xRRGGBB glow / exhaust color
    pub accent_color: u32,
}

impl VehicleProfile {
    fn validate(&self) -> Result<(), GameError> {
        let checks = [
            ("gravity_factor", self.gravity_factor),
            ("lean_strength", self.lean_strength),
            ("speed_factor", self.speed_factor),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidProfile {
                    id: self.id,
                    reason: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Lookup table of selectable vehicles, ordered by id
#[derive(Debug, Clone)]
pub struct VehicleRegistry {
    profiles: Vec<VehicleProfile>,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VehicleRegistry {
    /// The three shipped bikes
    pub fn builtin() -> Self {
        let profile = |id, name: &str, image: &str, grav, lean, speed, color| VehicleProfile {
            id,
            display_name: name.to_string(),
            image_ref: image.to_string(),
            gravity_factor: grav,
            lean_strength: lean,
            speed_factor: speed,
            accent_color: color,
        };
        Self {
            profiles: vec![
                profile(1, "COBRA", "./assets/bike1.png", 1.2, 0.5, 2.0, 0x00ff88),
                profile(2, "FATBOY", "./assets/bike2.png", 0.7, 0.2, 1.1, 0xff8800),
                profile(3, "V-RAPTOR", "./assets/bike3.png", 1.5, 0.7, 2.8, 0xff0044),
            ],
        }
    }

    /// Build a catalog, rejecting bad tuning and duplicate ids
    pub fn new(mut profiles: Vec<VehicleProfile>) -> Result<Self, GameError> {
        profiles.sort_by_key(|p| p.id);
        for pair in profiles.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(GameError::InvalidProfile {
                    id: pair[1].id,
                    reason: "duplicate id".to_string(),
                });
            }
        }
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// Load a catalog from a JSON array of profiles
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let profiles: Vec<VehicleProfile> = serde_json::from_str(json)?;
        let registry = Self::new(profiles)?;
        log::info!("Loaded {} vehicle profiles", registry.len());
        Ok(registry)
    }

    pub fn get_profile(&self, id: VehicleId) -> Result<&VehicleProfile, GameError> {
        self.profiles
            .binary_search_by_key(&id, |p| p.id)
            .map(|i| &self.profiles[i])
            .map_err(|_| GameError::NotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let registry = VehicleRegistry::builtin();
        assert_eq!(registry.len(), 3);

        let cobra = registry.get_profile(1).unwrap();
        assert_eq!(cobra.display_name, "COBRA");
        assert_eq!(cobra.gravity_factor, 1.2);
        assert_eq!(cobra.lean_strength, 0.5);

        let raptor = registry.get_profile(3).unwrap();
        assert_eq!(raptor.accent_color, 0xff0044);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = VehicleRegistry::builtin();
        assert!(matches!(registry.get_profile(7), Err(GameError::NotFound(7))));
    }

    #[test]
    fn json_catalog_is_validated() {
        let json = r#"[
            { "id": 9, "display_name": "MOPED", "image_ref": "moped.png",
              "gravity_factor": 0.4, "lean_strength": 0.1, "speed_factor": 0.5,
              "accent_color": 16777215 }
        ]"#;
        let registry = VehicleRegistry::from_json(json).unwrap();
        assert_eq!(registry.get_profile(9).unwrap().display_name, "MOPED");

        let bad = json.replace("0.4", "0.0");
        assert!(matches!(
            VehicleRegistry::from_json(&bad),
            Err(GameError::InvalidProfile { id: 9, .. })
        ));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut profiles: Vec<_> = VehicleRegistry::builtin().iter().cloned().collect();
        profiles.push(profiles[0].clone());
        assert!(matches!(
            VehicleRegistry::new(profiles),
            Err(GameError::InvalidProfile { id: 1, .. })
        ));
    }
}
