//! Session Persistence
//!
//! The signed-in identifiers survive reloads in `localStorage`. Storage
//! being unavailable (private mode, sandboxed iframe) is not an error; the
//! configured defaults apply instead.

use web_sys::Storage;

const VOLUNTEER_KEY: &str = "VolunteerID";
const ORGANIZER_KEY: &str = "OrganizerID";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load(key: &str) -> Option<String> {
    storage()?
        .get_item(key)
        .ok()
        .flatten()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn save(key: &str, value: &str) {
    match storage() {
        Some(storage) => {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("could not persist {}: {:?}", key, err);
            }
        }
        None => log::debug!("localStorage unavailable, {} kept in memory only", key),
    }
}

pub fn load_volunteer_id() -> Option<String> {
    load(VOLUNTEER_KEY)
}

pub fn save_volunteer_id(id: &str) {
    save(VOLUNTEER_KEY, id);
}

pub fn load_organization_id() -> Option<String> {
    load(ORGANIZER_KEY)
}

pub fn save_organization_id(id: &str) {
    save(ORGANIZER_KEY, id);
}
