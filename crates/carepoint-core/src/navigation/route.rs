use std::fmt;

/// A screen reachable through the router
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Hospitals,
    Hospital(String),
    HospitalDoctors(String),
    Doctor(String),
    Appointments,
    Appointment(String),
    LabRecords,
    Profile,
    EditProfile,
}

impl Route {
    /// URL-style path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/home".to_string(),
            Route::Hospitals => "/hospitals".to_string(),
            Route::Hospital(id) => format!("/hospitals/{}", id),
            Route::HospitalDoctors(id) => format!("/hospitals/{}/doctors", id),
            Route::Doctor(id) => format!("/doctors/{}", id),
            Route::Appointments => "/appointment/index".to_string(),
            Route::Appointment(id) => format!("/appointment/{}", id),
            Route::LabRecords => "/lab-records".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EditProfile => "/profile/edit".to_string(),
        }
    }

    /// Parse a path produced by `path()`
    ///
    /// `/` is accepted as Home and a trailing slash is ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        if trimmed == "/" {
            return Some(Route::Home);
        }
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')?
            .trim_end_matches('/')
            .split('/')
            .collect();

        let route = match segments.as_slice() {
            ["home"] => Route::Home,
            ["hospitals"] => Route::Hospitals,
            ["hospitals", id] if !id.is_empty() => Route::Hospital(id.to_string()),
            ["hospitals", id, "doctors"] if !id.is_empty() => {
                Route::HospitalDoctors(id.to_string())
            }
            ["doctors", id] if !id.is_empty() => Route::Doctor(id.to_string()),
            ["appointment"] | ["appointment", "index"] => Route::Appointments,
            ["appointment", id] if !id.is_empty() => Route::Appointment(id.to_string()),
            ["lab-records"] => Route::LabRecords,
            ["profile"] => Route::Profile,
            ["profile", "edit"] => Route::EditProfile,
            _ => return None,
        };
        Some(route)
    }

    /// Short title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Hospitals => "Hospitals",
            Route::Hospital(_) => "Hospital",
            Route::HospitalDoctors(_) => "Doctors",
            Route::Doctor(_) => "Doctor",
            Route::Appointments => "Appointments",
            Route::Appointment(_) => "Appointment",
            Route::LabRecords => "Lab Records",
            Route::Profile => "Profile",
            Route::EditProfile => "Edit Profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
