//! Site-wide chrome configuration consumed by the navbar/footer expanders.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Everything the shared navigation and footer blocks need.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteChrome {
    pub brand: String,
    pub tagline: String,
    pub logo_src: String,
    pub home_href: String,
    pub nav_links: Vec<NavLink>,
    pub legal_links: Vec<NavLink>,
    pub contact_email: String,
    pub location: String,
    pub copyright: String,
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self {
            brand: "Velora".to_string(),
            tagline: String::new(),
            logo_src: "images/logo.svg".to_string(),
            home_href: "index.html".to_string(),
            nav_links: vec![
                NavLink::new("Home", "index.html"),
                NavLink::new("Contact", "contact.html"),
            ],
            legal_links: vec![
                NavLink::new("Terms of Service", "terms.html"),
                NavLink::new("Privacy Policy", "privacy.html"),
            ],
            contact_email: String::new(),
            location: String::new(),
            copyright: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_round_trips_through_json() {
        let chrome = SiteChrome {
            brand: "Acme".to_string(),
            contact_email: "hola@acme.test".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&chrome).unwrap();
        let back: SiteChrome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chrome);
    }
}
