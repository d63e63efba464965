//! Cookie policy editor: two independent collections under one record.
//!
//! Section edits delegate to the shared policy editor and never touch the
//! cookie table; type edits never touch the sections. A save always
//! submits both collections together as one payload.

use crate::content::model::{CookiePolicyContent, CookieType};

use super::{policy, EditError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieTypeField {
    Kind,
    Purpose,
    Examples,
}

pub fn update_section(
    content: &CookiePolicyContent,
    index: usize,
    field: policy::PolicyField,
    value: &str,
) -> Result<CookiePolicyContent, EditError> {
    Ok(CookiePolicyContent {
        sections: policy::update_field(&content.sections, index, field, value)?,
        cookie_types: content.cookie_types.clone(),
    })
}

pub fn set_section_list_item(
    content: &CookiePolicyContent,
    index: usize,
    list_index: usize,
    value: &str,
) -> Result<CookiePolicyContent, EditError> {
    Ok(CookiePolicyContent {
        sections: policy::set_list_item(&content.sections, index, list_index, value)?,
        cookie_types: content.cookie_types.clone(),
    })
}

pub fn update_type(
    content: &CookiePolicyContent,
    index: usize,
    field: CookieTypeField,
    value: &str,
) -> Result<CookiePolicyContent, EditError> {
    let mut cookie_types = content.cookie_types.clone();
    let row = cookie_types
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    match field {
        CookieTypeField::Kind => row.kind = value.to_string(),
        CookieTypeField::Purpose => row.purpose = value.to_string(),
        CookieTypeField::Examples => row.examples = value.to_string(),
    }
    Ok(CookiePolicyContent {
        sections: content.sections.clone(),
        cookie_types,
    })
}

pub fn add_type(content: &CookiePolicyContent) -> CookiePolicyContent {
    let mut cookie_types = content.cookie_types.clone();
    cookie_types.push(CookieType {
        kind: "New Cookie".to_string(),
        purpose: "Purpose".to_string(),
        examples: "Example".to_string(),
    });
    CookiePolicyContent {
        sections: content.sections.clone(),
        cookie_types,
    }
}

pub fn remove_type(
    content: &CookiePolicyContent,
    index: usize,
) -> Result<CookiePolicyContent, EditError> {
    if index >= content.cookie_types.len() {
        return Err(EditError::IndexOutOfBounds(index));
    }
    let mut cookie_types = content.cookie_types.clone();
    cookie_types.remove(index);
    Ok(CookiePolicyContent {
        sections: content.sections.clone(),
        cookie_types,
    })
}
