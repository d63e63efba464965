//! Contact details editor. The record is nested but fixed-shape: every
//! editable location is one of a closed set of fields, addressed either
//! directly or by its dot-path spelling ("socials.facebook", "phones.0").

use crate::content::model::ContactInfo;

use super::EditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Address,
    /// Fixed-position slot, 0 or 1. Phones are never appended or removed.
    Phone(usize),
    Facebook,
    Twitter,
    Instagram,
    Tiktok,
    SundayThursday,
    FridaySaturday,
}

impl ContactField {
    /// Parse the dot-path form used by the editing form.
    pub fn parse(path: &str) -> Result<Self, EditError> {
        match path {
            "address" => Ok(ContactField::Address),
            "phones.0" => Ok(ContactField::Phone(0)),
            "phones.1" => Ok(ContactField::Phone(1)),
            "socials.facebook" => Ok(ContactField::Facebook),
            "socials.twitter" => Ok(ContactField::Twitter),
            "socials.instagram" => Ok(ContactField::Instagram),
            "socials.tiktok" => Ok(ContactField::Tiktok),
            "hours.sunday_thursday" => Ok(ContactField::SundayThursday),
            "hours.friday_saturday" => Ok(ContactField::FridaySaturday),
            other => Err(EditError::UnknownField(other.to_string())),
        }
    }
}

pub fn set_field(
    info: &ContactInfo,
    field: ContactField,
    value: &str,
) -> Result<ContactInfo, EditError> {
    let mut next = info.clone();
    match field {
        ContactField::Address => next.address = value.to_string(),
        ContactField::Phone(slot) => {
            if slot > 1 {
                return Err(EditError::InvalidPhoneSlot(slot));
            }
            next.phones[slot] = value.to_string();
        }
        ContactField::Facebook => next.socials.facebook = value.to_string(),
        ContactField::Twitter => next.socials.twitter = value.to_string(),
        ContactField::Instagram => next.socials.instagram = value.to_string(),
        ContactField::Tiktok => next.socials.tiktok = value.to_string(),
        ContactField::SundayThursday => next.hours.sunday_thursday = value.to_string(),
        ContactField::FridaySaturday => next.hours.friday_saturday = value.to_string(),
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults;

    #[test]
    fn phone_slot_zero_leaves_everything_else_intact() {
        let info = defaults::contact_info();
        let updated = set_field(&info, ContactField::Phone(0), "555-0100").unwrap();
        assert_eq!(updated.phones[0], "555-0100");
        assert_eq!(updated.phones[1], info.phones[1]);
        assert_eq!(updated.address, info.address);
        assert_eq!(updated.socials, info.socials);
        assert_eq!(updated.hours, info.hours);
    }

    #[test]
    fn phone_slot_out_of_range_is_refused() {
        let info = defaults::contact_info();
        assert_eq!(
            set_field(&info, ContactField::Phone(2), "x"),
            Err(EditError::InvalidPhoneSlot(2))
        );
    }

    #[test]
    fn dot_paths_parse_to_fields() {
        assert_eq!(
            ContactField::parse("socials.facebook"),
            Ok(ContactField::Facebook)
        );
        assert_eq!(ContactField::parse("phones.1"), Ok(ContactField::Phone(1)));
        assert_eq!(
            ContactField::parse("phones.2"),
            Err(EditError::UnknownField("phones.2".to_string()))
        );
        assert!(ContactField::parse("socials.youtube").is_err());
    }

    #[test]
    fn social_edit_via_parsed_path() {
        let info = defaults::contact_info();
        let field = ContactField::parse("socials.instagram").unwrap();
        let updated = set_field(&info, field, "https://instagram.com/smartwear").unwrap();
        assert_eq!(updated.socials.instagram, "https://instagram.com/smartwear");
        assert_eq!(updated.socials.facebook, info.socials.facebook);
    }
}
