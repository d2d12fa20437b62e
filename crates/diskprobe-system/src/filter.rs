use crate::Mount;

/// Mount selection shared by the usage check and the metrics emitters.
///
/// Ignore lists drop exact matches; a non-empty include list restricts the
/// run to the listed values, so an include always wins over an ignore. Paths
/// filter on the mount point, types on the filesystem type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountFilter {
    pub ignore_paths: Vec<String>,
    pub include_paths: Vec<String>,
    pub ignore_fs_types: Vec<String>,
    pub include_fs_types: Vec<String>,
}

impl MountFilter {
    pub fn admits(&self, mount: &Mount) -> bool {
        if self.ignore_fs_types.contains(&mount.fs_type) {
            return false;
        }
        if !self.include_fs_types.is_empty() && !self.include_fs_types.contains(&mount.fs_type) {
            return false;
        }
        if self.ignore_paths.contains(&mount.mount_point) {
            return false;
        }
        if !self.include_paths.is_empty() && !self.include_paths.contains(&mount.mount_point) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(point: &str, fs_type: &str) -> Mount {
        Mount {
            device: "/dev/sda1".to_string(),
            mount_point: point.to_string(),
            fs_type: fs_type.to_string(),
            options: "rw".to_string(),
        }
    }

    #[test]
    fn empty_filter_admits_everything() {
        let filter = MountFilter::default();
        assert!(filter.admits(&mount("/", "ext4")));
        assert!(filter.admits(&mount("/boot", "vfat")));
    }

    #[test]
    fn ignore_lists_drop_exact_matches() {
        let filter = MountFilter {
            ignore_paths: vec!["/boot".to_string()],
            ignore_fs_types: vec!["vfat".to_string()],
            ..MountFilter::default()
        };
        assert!(!filter.admits(&mount("/boot", "ext4")));
        assert!(!filter.admits(&mount("/data", "vfat")));
        assert!(filter.admits(&mount("/", "ext4")));
    }

    #[test]
    fn include_lists_restrict_to_listed_values() {
        let filter = MountFilter {
            include_paths: vec!["/".to_string()],
            ..MountFilter::default()
        };
        assert!(filter.admits(&mount("/", "ext4")));
        assert!(!filter.admits(&mount("/home", "ext4")));
    }

    #[test]
    fn include_restricts_even_when_ignore_names_something_else() {
        let filter = MountFilter {
            ignore_paths: vec!["/var".to_string()],
            include_paths: vec!["/".to_string(), "/home".to_string()],
            ..MountFilter::default()
        };
        assert!(filter.admits(&mount("/home", "ext4")));
        assert!(!filter.admits(&mount("/var", "ext4")));
        assert!(!filter.admits(&mount("/srv", "ext4")));
    }
}
