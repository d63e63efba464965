//! Shipping & delivery page editor.

use crate::content::model::ShippingItem;

use super::{next_id, EditError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    Title,
    Icon,
    Content,
}

pub fn update_field(
    items: &[ShippingItem],
    index: usize,
    field: ShippingField,
    value: &str,
) -> Result<Vec<ShippingItem>, EditError> {
    let mut next = items.to_vec();
    let item = next
        .get_mut(index)
        .ok_or(EditError::IndexOutOfBounds(index))?;
    match field {
        ShippingField::Title => item.title = value.to_string(),
        ShippingField::Icon => item.icon = value.to_string(),
        ShippingField::Content => item.content = value.to_string(),
    }
    Ok(next)
}

pub fn add_item(items: &[ShippingItem]) -> Vec<ShippingItem> {
    let mut next = items.to_vec();
    next.push(ShippingItem {
        id: next_id(items.iter().map(|i| i.id)),
        title: "New Section".to_string(),
        icon: "📦".to_string(),
        content: String::new(),
    });
    next
}

pub fn remove_item(items: &[ShippingItem], index: usize) -> Result<Vec<ShippingItem>, EditError> {
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
    fn update_title_changes_only_that_field() {
        let items = defaults::shipping_info();
        let updated = update_field(&items, 0, ShippingField::Title, "Fast Shipping").unwrap();
        assert_eq!(updated[0].title, "Fast Shipping");
        assert_eq!(updated[0].content, items[0].content);
        assert_eq!(updated[1..], items[1..]);
    }

    #[test]
    fn add_item_assigns_fresh_id() {
        let items = defaults::shipping_info();
        let with_new = add_item(&items);
        assert_eq!(with_new.len(), items.len() + 1);
        assert_eq!(with_new.last().unwrap().id, 9);
    }

    #[test]
    fn remove_out_of_bounds_is_refused() {
        let items = defaults::shipping_info();
        assert_eq!(
            remove_item(&items, items.len()),
            Err(EditError::IndexOutOfBounds(items.len()))
        );
    }
}
