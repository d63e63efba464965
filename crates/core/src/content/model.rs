use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::slug::ContentSlug;

/// A stored content record: one slug, one variant-shaped payload.
/// Records are created implicitly on first update and never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecord {
    pub slug: ContentSlug,
    pub content: ContentPayload,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// One entry on the shipping & delivery page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingItem {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub content: String,
}

/// One section of a policy page (return, privacy, or the text half of the
/// cookie policy). Everything past `content` is optional per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySection {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<PolicySubsection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browsers: Option<Vec<BrowserLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessSteps>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySubsection {
    pub title: String,
    pub content: String,
}

/// Named link to a browser's cookie-settings page (cookie policy only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserLink {
    pub name: String,
    pub url: String,
}

/// A titled step list (return policy's "to initiate a return" block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSteps {
    pub title: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub icon: String,
}

/// One row of the cookie classification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieType {
    #[serde(rename = "type")]
    pub kind: String,
    pub purpose: String,
    pub examples: String,
}

/// The cookie policy couples two independently-edited collections;
/// updates always submit both together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookiePolicyContent {
    pub sections: Vec<PolicySection>,
    #[serde(rename = "cookieTypes")]
    pub cookie_types: Vec<CookieType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    /// Exactly two display slots, edited by fixed position.
    pub phones: [String; 2],
    pub socials: SocialLinks,
    pub hours: BusinessHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub tiktok: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub sunday_thursday: String,
    pub friday_saturday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// The closed union of payload shapes. Which variant a slug carries is
/// fixed by the registry; deserialization therefore dispatches on the
/// slug instead of sniffing the JSON structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Shipping(Vec<ShippingItem>),
    Policy(Vec<PolicySection>),
    Faq(Vec<FaqItem>),
    CookiePolicy(CookiePolicyContent),
    Contact(ContactInfo),
    About(AboutContent),
}

impl ContentPayload {
    /// Deserialize a raw JSON payload as the shape registered for `slug`.
    pub fn from_value(slug: ContentSlug, value: Value) -> Result<Self, serde_json::Error> {
        match slug {
            ContentSlug::ShippingDelivery => {
                serde_json::from_value(value).map(ContentPayload::Shipping)
            }
            ContentSlug::ReturnPolicy | ContentSlug::PrivacyPolicy => {
                serde_json::from_value(value).map(ContentPayload::Policy)
            }
            ContentSlug::Faq => serde_json::from_value(value).map(ContentPayload::Faq),
            ContentSlug::CookiePolicy => {
                serde_json::from_value(value).map(ContentPayload::CookiePolicy)
            }
            ContentSlug::ContactUs => serde_json::from_value(value).map(ContentPayload::Contact),
            ContentSlug::AboutUs => serde_json::from_value(value).map(ContentPayload::About),
        }
    }

    /// Whether this payload carries the variant registered for `slug`.
    pub fn matches(&self, slug: ContentSlug) -> bool {
        match (self, slug) {
            (ContentPayload::Shipping(_), ContentSlug::ShippingDelivery) => true,
            (ContentPayload::Policy(_), ContentSlug::ReturnPolicy) => true,
            (ContentPayload::Policy(_), ContentSlug::PrivacyPolicy) => true,
            (ContentPayload::Faq(_), ContentSlug::Faq) => true,
            (ContentPayload::CookiePolicy(_), ContentSlug::CookiePolicy) => true,
            (ContentPayload::Contact(_), ContentSlug::ContactUs) => true,
            (ContentPayload::About(_), ContentSlug::AboutUs) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn faq_payload_parses_by_slug() {
        let raw = json!([
            { "id": 1, "question": "Q?", "answer": "A.", "icon": "❓" }
        ]);
        let payload = ContentPayload::from_value(ContentSlug::Faq, raw).unwrap();
        match &payload {
            ContentPayload::Faq(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, 1);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        assert!(payload.matches(ContentSlug::Faq));
        assert!(!payload.matches(ContentSlug::AboutUs));
    }

    #[test]
    fn policy_optional_fields_survive_round_trip() {
        let raw = json!([{
            "id": 2,
            "title": "Returns",
            "icon": "🔄",
            "content": "Via Amazon:",
            "list": ["Log in", "Go to Your Orders"],
            "note": "Labels provided.",
            "process": { "title": "To initiate:", "steps": ["Log in"] }
        }]);
        let payload = ContentPayload::from_value(ContentSlug::ReturnPolicy, raw.clone()).unwrap();
        let back = serde_json::to_value(&payload).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn policy_section_omits_absent_fields() {
        let section = PolicySection {
            id: 1,
            title: "T".into(),
            icon: None,
            content: "C".into(),
            list: None,
            note: None,
            warning: None,
            subsections: None,
            browsers: None,
            process: None,
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value, json!({ "id": 1, "title": "T", "content": "C" }));
    }

    #[test]
    fn contact_phones_must_be_exactly_two() {
        let raw = json!({
            "address": "A",
            "phones": ["1"],
            "socials": { "facebook": "#", "twitter": "#", "instagram": "#", "tiktok": "#" },
            "hours": { "sunday_thursday": "9-6", "friday_saturday": "Closed" }
        });
        assert!(ContentPayload::from_value(ContentSlug::ContactUs, raw).is_err());
    }

    #[test]
    fn wrong_shape_for_slug_is_an_error() {
        let faq = json!([{ "id": 1, "question": "Q", "answer": "A", "icon": "❓" }]);
        assert!(ContentPayload::from_value(ContentSlug::AboutUs, faq).is_err());
    }
}
