//! Presentation interleaver: the final display sequence.
//!
//! Walks the sorted listings and injects an advertisement placeholder
//! after every fifth listing, except when that listing is the last one.
//! The rule is pure position arithmetic over the index; no counter state.

use catalog::Listing;
use serde::Serialize;

/// How many listings appear between consecutive advertisement slots.
pub const AD_INTERVAL: usize = 5;

/// One unit of the display sequence: a listing card or an ad placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayItem {
    Listing(Listing),
    Advertisement {
        /// 1-based ordinal of the ad slot (1 after position 5, 2 after 10, ...)
        slot: usize,
    },
}

impl DisplayItem {
    pub fn is_advertisement(&self) -> bool {
        matches!(self, DisplayItem::Advertisement { .. })
    }
}

/// Number of advertisement slots inserted for `n` listings:
/// `floor((n - 1) / AD_INTERVAL)` when `n > 0`, else 0. An ad never lands
/// on the last position, so exactly 5 listings get none.
pub fn ad_slots(n: usize) -> usize {
    if n == 0 { 0 } else { (n - 1) / AD_INTERVAL }
}

/// Produce the display sequence for an already-sorted listing collection.
///
/// After the listing at 1-based position `p`, an advertisement is emitted
/// iff `p % AD_INTERVAL == 0` and `p` is not the last position. An ad is
/// therefore never first or last in the sequence.
pub fn interleave(sorted: Vec<Listing>) -> Vec<DisplayItem> {
    let total = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .flat_map(|(idx, listing)| {
            let position = idx + 1;
            let ad = (position % AD_INTERVAL == 0 && position < total)
                .then_some(DisplayItem::Advertisement {
                    slot: position / AD_INTERVAL,
                });
            std::iter::once(DisplayItem::Listing(listing)).chain(ad)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;
    use catalog::Category;

    fn listings(n: usize) -> Vec<Listing> {
        (1..=n as u32)
            .map(|id| listing(id, &format!("Biz {id}"), 1000 * id as u64, "Austin, TX", Category::Services, "s"))
            .collect()
    }

    fn counts(items: &[DisplayItem]) -> (usize, usize) {
        let ads = items.iter().filter(|i| i.is_advertisement()).count();
        (items.len() - ads, ads)
    }

    #[test]
    fn test_empty_input() {
        assert!(interleave(Vec::new()).is_empty());
    }

    #[test]
    fn test_fewer_than_interval_gets_no_ads() {
        for n in 1..AD_INTERVAL {
            let items = interleave(listings(n));
            assert_eq!(counts(&items), (n, 0));
        }
    }

    #[test]
    fn test_exactly_five_gets_no_ad() {
        // The ad would land on the last position, which is suppressed
        let items = interleave(listings(5));
        assert_eq!(counts(&items), (5, 0));
    }

    #[test]
    fn test_six_gets_one_ad_after_position_five() {
        let items = interleave(listings(6));
        assert_eq!(counts(&items), (6, 1));
        assert_eq!(items[5], DisplayItem::Advertisement { slot: 1 });
    }

    #[test]
    fn test_twelve_gets_two_ads_after_positions_five_and_ten() {
        let items = interleave(listings(12));
        assert_eq!(counts(&items), (12, 2));
        // Sequence: 5 listings, ad, 5 listings, ad, 2 listings
        assert_eq!(items[5], DisplayItem::Advertisement { slot: 1 });
        assert_eq!(items[11], DisplayItem::Advertisement { slot: 2 });
        assert!(!items.last().unwrap().is_advertisement());
    }

    #[test]
    fn test_ad_count_formula_holds() {
        for n in 0..40 {
            let items = interleave(listings(n));
            let (kept, ads) = counts(&items);
            assert_eq!(kept, n);
            assert_eq!(ads, ad_slots(n), "wrong ad count for n = {n}");
            if let Some(first) = items.first() {
                assert!(!first.is_advertisement());
            }
            if let Some(last) = items.last() {
                assert!(!last.is_advertisement());
            }
        }
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let items = interleave(listings(8));
        let ids: Vec<u32> = items
            .iter()
            .filter_map(|item| match item {
                DisplayItem::Listing(l) => Some(l.id),
                DisplayItem::Advertisement { .. } => None,
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_item_serializes_with_kind_tag() {
        let ad = DisplayItem::Advertisement { slot: 1 };
        let json = serde_json::to_value(&ad).unwrap();
        assert_eq!(json.get("kind").unwrap(), "advertisement");
        assert_eq!(json.get("slot").unwrap(), 1);
    }
}
