/// Content slug registry.
///
/// The storefront stores a small, closed set of named content records.
/// Every slug maps to exactly one payload shape; anything outside this
/// set is an unknown content type and resolves to nothing.
use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of content slugs known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentSlug {
    ShippingDelivery,
    ReturnPolicy,
    PrivacyPolicy,
    Faq,
    CookiePolicy,
    ContactUs,
    AboutUs,
}

impl ContentSlug {
    /// All known slugs, in dashboard display order.
    pub const ALL: [ContentSlug; 7] = [
        ContentSlug::ShippingDelivery,
        ContentSlug::ReturnPolicy,
        ContentSlug::PrivacyPolicy,
        ContentSlug::Faq,
        ContentSlug::CookiePolicy,
        ContentSlug::ContactUs,
        ContentSlug::AboutUs,
    ];

    /// Parse a slug string. Unknown strings yield `None` — callers treat
    /// those as "no such content", never as an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shipping-delivery" => Some(ContentSlug::ShippingDelivery),
            "return-policy" => Some(ContentSlug::ReturnPolicy),
            "privacy-policy" => Some(ContentSlug::PrivacyPolicy),
            "faq" => Some(ContentSlug::Faq),
            "cookie-policy" => Some(ContentSlug::CookiePolicy),
            "contact-us" => Some(ContentSlug::ContactUs),
            "about-us" => Some(ContentSlug::AboutUs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSlug::ShippingDelivery => "shipping-delivery",
            ContentSlug::ReturnPolicy => "return-policy",
            ContentSlug::PrivacyPolicy => "privacy-policy",
            ContentSlug::Faq => "faq",
            ContentSlug::CookiePolicy => "cookie-policy",
            ContentSlug::ContactUs => "contact-us",
            ContentSlug::AboutUs => "about-us",
        }
    }

    /// Human-readable title for the editing dashboard ("shipping-delivery"
    /// -> "Shipping Delivery").
    pub fn title(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_slugs() {
        for slug in ContentSlug::ALL {
            assert_eq!(ContentSlug::parse(slug.as_str()), Some(slug));
        }
    }

    #[test]
    fn parse_unknown_slug() {
        assert_eq!(ContentSlug::parse("terms-conditions"), None);
        assert_eq!(ContentSlug::parse(""), None);
        assert_eq!(ContentSlug::parse("FAQ"), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ContentSlug::CookiePolicy.to_string(), "cookie-policy");
    }

    #[test]
    fn dashboard_titles() {
        assert_eq!(ContentSlug::ShippingDelivery.title(), "Shipping Delivery");
        assert_eq!(ContentSlug::Faq.title(), "Faq");
    }
}
