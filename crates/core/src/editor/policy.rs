//! Policy section editor, shared by the return policy, the privacy
//! policy, and the text half of the cookie policy.
//!
//! Icons are fixed at authoring time; editable text fields are the
//! section body, its optional note/warning, its bullet list, and the
//! titles/bodies of any subsections.

use crate::content::model::PolicySection;

use super::{next_id, EditError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyField {
    Title,
    Content,
    Note,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsectionField {
    Title,
    Content,
}

pub fn update_field(
    sections: &[PolicySection],
    index: usize,
    field: PolicyField,
    value: &str,
) -> Result<Vec<PolicySection>, EditError> {
    let mut next = sections.to_vec();
    let section = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    match field {
        PolicyField::Title => section.title = value.to_string(),
        PolicyField::Content => section.content = value.to_string(),
        PolicyField::Note => section.note = Some(value.to_string()),
        PolicyField::Warning => section.warning = Some(value.to_string()),
    }
    Ok(next)
}

pub fn set_list_item(
    sections: &[PolicySection],
    index: usize,
    list_index: usize,
    value: &str,
) -> Result<Vec<PolicySection>, EditError> {
    let mut next = sections.to_vec();
    let section = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    let list = section.list.as_mut().ok_or(EditError::NoList)?;
    let item = list
        .get_mut(list_index)
        .ok_or(EditError::IndexOutOfBounds(list_index))?;
    *item = value.to_string();
    Ok(next)
}

/// Append an empty bullet, creating the list if the section has none yet.
pub fn add_list_item(
    sections: &[PolicySection],
    index: usize,
) -> Result<Vec<PolicySection>, EditError> {
    let mut next = sections.to_vec();
    let section = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    section.list.get_or_insert_with(Vec::new).push(String::new());
    Ok(next)
}

pub fn remove_list_item(
    sections: &[PolicySection],
    index: usize,
    list_index: usize,
) -> Result<Vec<PolicySection>, EditError> {
    let mut next = sections.to_vec();
    let section = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    let list = section.list.as_mut().ok_or(EditError::NoList)?;
    if list_index >= list.len() {
        return Err(EditError::IndexOutOfBounds(list_index));
    }
    list.remove(list_index);
    Ok(next)
}

pub fn update_subsection(
    sections: &[PolicySection],
    index: usize,
    sub_index: usize,
    field: SubsectionField,
    value: &str,
) -> Result<Vec<PolicySection>, EditError> {
    let mut next = sections.to_vec();
    let section = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    let subsection = section
        .subsections
        .as_mut()
        .and_then(|subs| subs.get_mut(sub_index))
        .ok_or(EditError::IndexOutOfBounds(sub_index))?;
    match field {
        SubsectionField::Title => subsection.title = value.to_string(),
        SubsectionField::Content => subsection.content = value.to_string(),
    }
    Ok(next)
}

pub fn add_section(sections: &[PolicySection]) -> Vec<PolicySection> {
    let mut next = sections.to_vec();
    next.push(PolicySection {
        id: next_id(sections.iter().map(|s| s.id)),
        title: "New Section".to_string(),
        icon: None,
        content: String::new(),
        list: None,
        note: None,
        warning: None,
        subsections: None,
        browsers: None,
        process: None,
    });
    next
}

pub fn remove_section(
    sections: &[PolicySection],
    index: usize,
) -> Result<Vec<PolicySection>, EditError> {
    if index >= sections.len() {
        return Err(EditError::IndexOutOfBounds(index));
    }
    let mut next = sections.to_vec();
    next.remove(index);
    Ok(next)
}
