mod appointments;
mod doctor;
mod home;
mod hospitals;
mod lab_records;
mod popup;
mod profile;
mod screen;
mod status_bar;
pub mod tab_bar;

pub use appointments::{AppointmentDetailScreen, AppointmentsScreen};
pub use doctor::DoctorScreen;
pub use home::HomeScreen;
pub use hospitals::{HospitalDetailScreen, HospitalsScreen};
pub use lab_records::LabRecordsScreen;
pub use popup::PopupWidget;
pub use profile::{EditProfileScreen, ProfileScreen};
pub use screen::ScreenWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;

use carepoint_core::navigation::Route;
use ratatui::style::{Modifier, Style};

use crate::app::App;
use crate::content::ScreenContent;

/// Build the content of the current route for a content area `width` wide
pub fn screen_content(app: &App, width: u16) -> ScreenContent {
    let mut content = ScreenContent::new(width, app.selected(), selection_style(app));
    match app.current_route() {
        Route::Home => HomeScreen::build(app, &mut content),
        Route::Hospitals => HospitalsScreen::build(app, &mut content),
        Route::Hospital(id) => HospitalDetailScreen::build(app, id, false, &mut content),
        Route::HospitalDoctors(id) => HospitalDetailScreen::build(app, id, true, &mut content),
        Route::Doctor(id) => DoctorScreen::build(app, id, &mut content),
        Route::Appointments => AppointmentsScreen::build(app, &mut content),
        Route::Appointment(id) => AppointmentDetailScreen::build(app, id, &mut content),
        Route::LabRecords => LabRecordsScreen::build(app, &mut content),
        Route::Profile => ProfileScreen::build(app, &mut content),
        Route::EditProfile => EditProfileScreen::build(app, &mut content),
    }
    content
}

fn selection_style(app: &App) -> Style {
    Style::default()
        .fg(app.theme.fg0)
        .bg(app.theme.selection)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder shown when a route names something the catalog lacks
fn not_found(app: &App, what: &str, id: &str, content: &mut ScreenContent) {
    content.blank();
    content.line(ratatui::text::Line::styled(
        format!("  {} {} not found", what, id),
        Style::default().fg(app.theme.error),
    ));
}
