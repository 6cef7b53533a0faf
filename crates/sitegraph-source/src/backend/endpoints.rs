//! Backend endpoint URL builders

/// Build the query URL for a class
pub fn class_url(base_url: &str, class_name: &str) -> String {
    format!("{}/classes/{}", base_url, class_name)
}
