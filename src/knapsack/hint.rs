//! Greedy value-density hint.

use crate::models::Item;

/// Suggests the unselected item with the highest value-to-weight ratio.
///
/// The first item wins among equal ratios. Returns `None` once every item
/// has been selected.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::Item;
/// use u_puzzle::knapsack::ratio_hint;
///
/// let items = vec![
///     Item::new("1", "Ruby Ring", 100, 1),
///     Item::new("2", "Gold Coin", 60, 2),
/// ];
/// assert_eq!(ratio_hint(&items, |_| false).map(|i| i.id()), Some("1"));
/// assert_eq!(ratio_hint(&items, |i| i.id() == "1").map(|i| i.id()), Some("2"));
/// ```
pub fn ratio_hint<'a>(items: &'a [Item], is_selected: impl Fn(&Item) -> bool) -> Option<&'a Item> {
    items
        .iter()
        .filter(|item| !is_selected(item))
        .fold(None, |best: Option<&Item>, item| match best {
            Some(b) if item.ratio() <= b.ratio() => Some(b),
            _ => Some(item),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_keeps_first() {
        let items = vec![Item::new("a", "a", 10, 2), Item::new("b", "b", 20, 4)];
        assert_eq!(ratio_hint(&items, |_| false).map(Item::id), Some("a"));
    }

    #[test]
    fn test_weightless_wins() {
        let items = vec![Item::new("a", "a", 1000, 1), Item::new("b", "b", 1, 0)];
        assert_eq!(ratio_hint(&items, |_| false).map(Item::id), Some("b"));
    }

    #[test]
    fn test_all_selected() {
        let items = vec![Item::new("a", "a", 10, 2)];
        assert!(ratio_hint(&items, |_| true).is_none());
        assert!(ratio_hint(&[], |_| false).is_none());
    }
}
