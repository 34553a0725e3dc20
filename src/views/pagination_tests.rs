use super::*;

fn items(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn test_page_count_is_ceiling() {
    let pager = Pager::default();
    let expected = [(0, 0), (1, 1), (3, 1), (4, 1), (5, 2), (8, 2), (9, 3), (17, 5)];
    for (total, pages) in expected {
        assert_eq!(pager.page_count(total), pages, "total {total}");
    }
}

#[test]
fn test_first_page_shows_first_four() {
    let list = items(10);
    let pager = Pager::default();
    assert_eq!(pager.visible(&list), &[0, 1, 2, 3]);
}

#[test]
fn test_last_page_shows_remainder() {
    let list = items(10);
    let mut pager = Pager::default();
    pager.go_to(3, list.len());
    assert_eq!(pager.page(), 3);
    assert_eq!(pager.visible(&list), &[8, 9]);
}

#[test]
fn test_next_stops_at_last_page() {
    let list = items(9);
    let mut pager = Pager::default();
    for _ in 0..10 {
        pager.next(list.len());
    }
    assert_eq!(pager.page(), 3);
    assert_eq!(pager.visible(&list), &[8]);
}

#[test]
fn test_prev_stops_at_first_page() {
    let mut pager = Pager::default();
    pager.prev();
    pager.prev();
    assert_eq!(pager.page(), 1);
}

#[test]
fn test_navigation_stays_in_range_for_all_sizes() {
    for total in 0..20 {
        let list = items(total);
        let mut pager = Pager::default();
        let count = pager.page_count(total);
        for step in 0..12 {
            if step % 3 == 0 {
                pager.prev();
            } else {
                pager.next(total);
            }
            assert!(pager.page() >= 1);
            assert!(pager.page() <= count.max(1));
            assert!(pager.visible(&list).len() <= 4);
        }
    }
}

#[test]
fn test_empty_list() {
    let list: Vec<usize> = Vec::new();
    let mut pager = Pager::default();
    pager.next(0);
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.page_count(0), 0);
    assert!(pager.visible(&list).is_empty());
}

#[test]
fn test_clamp_after_list_shrinks() {
    let mut pager = Pager::default();
    pager.go_to(3, 12);
    assert_eq!(pager.page(), 3);
    pager.clamp(5);
    assert_eq!(pager.page(), 2);
    pager.clamp(0);
    assert_eq!(pager.page(), 1);
}

#[test]
fn test_pages_cover_list_exactly_once() {
    let list = items(11);
    let mut pager = Pager::default();
    let mut seen = Vec::new();
    for page in 1..=pager.page_count(list.len()) {
        pager.go_to(page, list.len());
        seen.extend_from_slice(pager.visible(&list));
    }
    assert_eq!(seen, list);
}
