//! FAQ editor. Removal has no floor; the "are you sure" confirmation is
//! the caller's gate, not an invariant here.

use crate::content::model::FaqItem;

use super::{next_id, EditError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqField {
    Question,
    Answer,
    Icon,
}

pub fn update_field(
    items: &[FaqItem],
    index: usize,
    field: FaqField,
    value: &str,
) -> Result<Vec<FaqItem>, EditError> {
    let mut next = items.to_vec();
    let item = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    match field {
        FaqField::Question => item.question = value.to_string(),
        FaqField::Answer => item.answer = value.to_string(),
        FaqField::Icon => item.icon = value.to_string(),
    }
    Ok(next)
}

pub fn add_item(items: &[FaqItem]) -> Vec<FaqItem> {
    let mut next = items.to_vec();
    next.push(FaqItem {
        id: next_id(items.iter().map(|i| i.id)),
        question: "New Question".to_string(),
        answer: "New Answer".to_string(),
        icon: "❓".to_string(),
    });
    next
}

pub fn remove_item(items: &[FaqItem], index: usize) -> Result<Vec<FaqItem>, EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfBounds(index));
    }
    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults;

    #[test]
    fn add_item_after_defaults_gets_id_eleven() {
        let items = defaults::faq_items();
        let with_new = add_item(&items);
        let new = with_new.last().unwrap();
        assert_eq!(new.id, 11);
        assert_eq!(new.question, "New Question");
        assert_eq!(new.icon, "❓");
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let items = defaults::faq_items();
        // Drop id 5 from the middle; the next insert still takes max+1.
        let shorter = remove_item(&items, 4).unwrap();
        assert_eq!(shorter.len(), 9);
        assert!(shorter.iter().all(|i| i.id != 5));
        let with_new = add_item(&shorter);
        assert_eq!(with_new.last().unwrap().id, 11);
    }

    #[test]
    fn update_answer_only_touches_that_item() {
        let items = defaults::faq_items();
        let updated = update_field(&items, 2, FaqField::Answer, "Updated answer").unwrap();
        assert_eq!(updated[2].answer, "Updated answer");
        assert_eq!(updated[2].question, items[2].question);
        assert_eq!(updated[0], items[0]);
    }
}
