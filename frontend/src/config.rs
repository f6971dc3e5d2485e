use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    // Debug builds also log every shell state change.
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "SkillBridge";
pub const VERIFY_BASE_URL: &str = "https://skillbridge.edu/verify";

pub const CONTACT_EMAIL: &str = "contact@skillbridge.edu";
pub const CONTACT_PHONE: &str = "+91 12345 67890";
pub const CONTACT_LOCATION: &str = "Kolkata, India";
pub const INSTITUTE: &str = "International Management Institute, Kolkata";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_log_shell_transitions() {
        assert_eq!(log_level(), Level::Debug);
    }
}
