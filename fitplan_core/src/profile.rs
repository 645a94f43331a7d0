//! User profile loading.
//!
//! Profiles are plain TOML documents, e.g.
//!
//! ```toml
//! age = 30
//! height_cm = 175.0
//! current_weight_kg = 75.0
//! target_weight_kg = 70.0
//! gender = "male"
//! activity_level = "moderate"
//! goal = "lose"
//! ```

use crate::{Error, Result, UserProfile};
use std::path::{Path, PathBuf};

impl UserProfile {
    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Profile(format!("No profile found at {:?}", path)));
        }

        let contents = std::fs::read_to_string(path)?;
        let profile: UserProfile = toml::from_str(&contents)?;
        tracing::debug!("Loaded profile from {:?}", path);
        Ok(profile)
    }

    /// Default profile location next to the config file
    pub fn default_path() -> PathBuf {
        crate::Config::default_config_path().with_file_name("profile.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, Gender, Goal};

    #[test]
    fn test_load_profile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.toml");
        std::fs::write(
            &path,
            r#"
age = 30
height_cm = 175.0
current_weight_kg = 75.0
target_weight_kg = 70.0
gender = "female"
activity_level = "very_active"
goal = "gain"
"#,
        )
        .unwrap();

        let profile = UserProfile::load(&path).unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, Goal::Gain);
    }

    #[test]
    fn test_missing_profile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = UserProfile::load(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Profile(_))));
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.toml");
        std::fs::write(
            &path,
            "age = 30\nheight_cm = 175.0\ncurrent_weight_kg = 75.0\ntarget_weight_kg = 70.0\n\
             gender = \"robot\"\nactivity_level = \"light\"\ngoal = \"lose\"\n",
        )
        .unwrap();

        assert!(matches!(UserProfile::load(&path), Err(Error::Toml(_))));
    }
}
