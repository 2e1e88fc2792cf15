//! Profile argument aggregation.

use serde::Deserialize;

use crate::bootstrap::{BootstrapError, BootstrapResult};
use crate::configure::Configure;

/// Secondary configuration section holding extra profile names.
pub const PROFILE_SECTION: &str = "endpoint_profiles";

#[derive(Debug, Deserialize)]
struct ProfileSection {
    /// Comma-separated profile names.
    #[serde(default)]
    profiles: Option<String>,
}

/// Append the profile names from the secondary section to the raw arguments.
///
/// Every comma-separated entry is appended trimmed, in order, with nothing
/// de-duplicated or dropped. An absent section, or a section without a
/// `profiles` field, returns the arguments unchanged.
pub fn merge_profile_args(args: &[String], config: &Configure) -> BootstrapResult<Vec<String>> {
    let mut merged = args.to_vec();

    let Some(section) = config.section::<ProfileSection>(PROFILE_SECTION) else {
        return Ok(merged);
    };
    let section = section.map_err(|source| BootstrapError::ProfileSection {
        section: PROFILE_SECTION.to_string(),
        source,
    })?;

    if let Some(profiles) = section.profiles {
        merged.extend(profiles.split(',').map(|name| name.trim().to_string()));
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::BootstrapContext;
    use crate::types::TypeUniverse;

    fn config(sections: &str) -> Configure {
        let sections: toml::Table = toml::from_str(sections).unwrap();
        let ctx = BootstrapContext::new("Sales", "1.0.0", TypeUniverse::default())
            .with_sections(sections);
        Configure::with(&ctx)
    }

    fn args(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_section_names_are_appended_trimmed() {
        let cfg = config("[endpoint_profiles]\nprofiles = \" C, D \"\n");
        let merged = merge_profile_args(&args(&["A", "B"]), &cfg).unwrap();
        assert_eq!(merged, args(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_absent_section_keeps_arguments() {
        let cfg = config("[other]\nkey = 1\n");
        let merged = merge_profile_args(&args(&["A", "B"]), &cfg).unwrap();
        assert_eq!(merged, args(&["A", "B"]));
    }

    #[test]
    fn test_no_dedup_and_no_case_folding() {
        let cfg = config("[endpoint_profiles]\nprofiles = \"A,a, B\"\n");
        let merged = merge_profile_args(&args(&["A"]), &cfg).unwrap();
        assert_eq!(merged, args(&["A", "A", "a", "B"]));
    }

    #[test]
    fn test_every_entry_is_kept_including_empty_ones() {
        let cfg = config("[endpoint_profiles]\nprofiles = \"C,, D,\"\n");
        let merged = merge_profile_args(&[], &cfg).unwrap();
        assert_eq!(merged, args(&["C", "", "D", ""]));
    }

    #[test]
    fn test_section_without_profiles_field_keeps_arguments() {
        let cfg = config("[endpoint_profiles]\nnote = \"none yet\"\n");
        let merged = merge_profile_args(&args(&["A"]), &cfg).unwrap();
        assert_eq!(merged, args(&["A"]));
    }

    #[test]
    fn test_malformed_section_propagates() {
        let cfg = config("[endpoint_profiles]\nprofiles = [\"C\"]\n");
        let err = merge_profile_args(&[], &cfg).unwrap_err();
        assert!(matches!(err, BootstrapError::ProfileSection { .. }));
    }
}
