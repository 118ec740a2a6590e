use super::route::Route;

/// Targets on the bottom tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabTarget {
    Appointments,
    Hospitals,
    Home,
    LabRecords,
    Profile,
}

impl TabTarget {
    /// Display order, left to right; Home sits in the center
    pub const ALL: [TabTarget; 5] = [
        TabTarget::Appointments,
        TabTarget::Hospitals,
        TabTarget::Home,
        TabTarget::LabRecords,
        TabTarget::Profile,
    ];

    pub fn route(&self) -> Route {
        match self {
            TabTarget::Appointments => Route::Appointments,
            TabTarget::Hospitals => Route::Hospitals,
            TabTarget::Home => Route::Home,
            TabTarget::LabRecords => Route::LabRecords,
            TabTarget::Profile => Route::Profile,
        }
    }

    /// Path prefix that marks this target active
    fn prefix(&self) -> &'static str {
        match self {
            TabTarget::Appointments => "/appointment",
            TabTarget::Hospitals => "/hospitals",
            TabTarget::Home => "/home",
            TabTarget::LabRecords => "/lab-records",
            TabTarget::Profile => "/profile",
        }
    }

    pub fn is_active(&self, path: &str) -> bool {
        match self {
            TabTarget::Home => path == "/home" || path == "/",
            other => path.starts_with(other.prefix()),
        }
    }

    /// Pressing the center target replaces the current route instead of pushing
    pub fn replaces(&self) -> bool {
        matches!(self, TabTarget::Home)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabTarget::Appointments => "Appointments",
            TabTarget::Hospitals => "Hospitals",
            TabTarget::Home => "Home",
            TabTarget::LabRecords => "Lab Records",
            TabTarget::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabTarget::Appointments => "▦",
            TabTarget::Hospitals => "✚",
            TabTarget::Home => "⌂",
            TabTarget::LabRecords => "≣",
            TabTarget::Profile => "☺",
        }
    }

    /// Number key that selects the target
    pub fn shortcut(&self) -> char {
        match self {
            TabTarget::Appointments => '1',
            TabTarget::Hospitals => '2',
            TabTarget::Home => '3',
            TabTarget::LabRecords => '4',
            TabTarget::Profile => '5',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.shortcut() == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        assert_eq!(TabTarget::ALL[2], TabTarget::Home);
        assert_eq!(TabTarget::ALL[0], TabTarget::Appointments);
        assert_eq!(TabTarget::ALL[4], TabTarget::Profile);
    }

    #[test]
    fn test_home_active_only_on_exact_path() {
        assert!(TabTarget::Home.is_active("/home"));
        assert!(TabTarget::Home.is_active("/"));
        assert!(!TabTarget::Home.is_active("/home/extra"));
        assert!(!TabTarget::Home.is_active("/hospitals"));
    }

    #[test]
    fn test_side_targets_match_prefix() {
        assert!(TabTarget::Hospitals.is_active("/hospitals/2/doctors"));
        assert!(TabTarget::Appointments.is_active("/appointment/index"));
        assert!(TabTarget::Appointments.is_active("/appointment/101"));
        assert!(TabTarget::Profile.is_active("/profile/edit"));
        assert!(TabTarget::LabRecords.is_active("/lab-records"));
        assert!(!TabTarget::Profile.is_active("/doctors/101"));
    }

    #[test]
    fn test_active_path_of_own_route() {
        for target in TabTarget::ALL {
            let path = target.route().path();
            assert!(target.is_active(&path), "{:?} inactive on {}", target, path);
            let others = TabTarget::ALL.iter().filter(|t| t.is_active(&path)).count();
            assert_eq!(others, 1);
        }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(TabTarget::from_shortcut('3'), Some(TabTarget::Home));
        assert_eq!(TabTarget::from_shortcut('9'), None);
        assert!(TabTarget::Home.replaces());
        assert!(!TabTarget::Hospitals.replaces());
    }
}
