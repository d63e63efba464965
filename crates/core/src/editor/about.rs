//! About-Us editor. The page must always keep at least one paragraph;
//! removal below that floor is refused and the payload is unchanged.

use crate::content::model::AboutContent;

use super::EditError;

pub fn set_title(content: &AboutContent, value: &str) -> AboutContent {
    AboutContent {
        title: value.to_string(),
        ..content.clone()
    }
}

pub fn set_heading(content: &AboutContent, value: &str) -> AboutContent {
    AboutContent {
        heading: value.to_string(),
        ..content.clone()
    }
}

pub fn set_paragraph(
    content: &AboutContent,
    index: usize,
    value: &str,
) -> Result<AboutContent, EditError> {
    let mut next = content.clone();
    let paragraph = next
        .paragraphs
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    *paragraph = value.to_string();
    Ok(next)
}

pub fn add_paragraph(content: &AboutContent) -> AboutContent {
    let mut next = content.clone();
    next.paragraphs.push(String::new());
    next
}

pub fn remove_paragraph(content: &AboutContent, index: usize) -> Result<AboutContent, EditError> {
    if content.paragraphs.len() <= 1 {
        return Err(EditError::ParagraphFloor);
    }
    if index >= content.paragraphs.len() {
        return Err(EditError::IndexOutOfBounds(index));
    }
    let mut next = content.clone();
    next.paragraphs.remove(index);
    Ok(next)
}
